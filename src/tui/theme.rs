use ratatui::style::Color;

/// Colour palette for the TUI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub header: Color,
    pub cursor: Color,
    pub check: Color,
    pub text: Color,
    pub dim: Color,
    pub error: Color,
    /// Popup border and focused field label
    pub accent: Color,
    pub selected_fg: Color,
    pub selected_bg: Color,
    pub unselected_fg: Color,
    pub unselected_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            header: Color::Rgb(0xAC, 0xFF, 0xEE),
            cursor: Color::Rgb(0xFF, 0x80, 0xEE),
            check: Color::Rgb(0xAF, 0xFF, 0xD0),
            text: Color::Reset,
            dim: Color::Indexed(243),
            error: Color::Rgb(0xFF, 0x44, 0x44),
            accent: Color::Rgb(0xFF, 0x80, 0xEE),
            selected_fg: Color::Indexed(230),
            selected_bg: Color::Indexed(212),
            unselected_fg: Color::Indexed(254),
            unselected_bg: Color::Indexed(235),
        }
    }
}

impl Theme {
    /// Foreground and background for an option button
    pub fn option_colors(&self, selected: bool) -> (Color, Color) {
        if selected {
            (self.selected_fg, self.selected_bg)
        } else {
            (self.unselected_fg, self.unselected_bg)
        }
    }
}
