use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::tui::keymap::KeyHelp;
use crate::tui::theme::Theme;

const SEPARATOR: &str = " \u{2022} ";

/// `key desc • key desc` on one line
pub(super) fn hint_line(entries: &[KeyHelp], theme: &Theme) -> Line<'static> {
    let key_style = Style::default().fg(theme.text);
    let desc_style = Style::default().fg(theme.dim);
    let mut spans = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(SEPARATOR, desc_style));
        }
        spans.push(Span::styled(entry.keys, key_style));
        spans.push(Span::styled(" ", desc_style));
        spans.push(Span::styled(entry.desc, desc_style));
    }
    Line::from(spans)
}

/// Rectangle of a fixed size centered in `area`, shrunk to fit
pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_area() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect_fixed(40, 10, area), Rect::new(20, 7, 40, 10));
        assert_eq!(centered_rect_fixed(100, 30, area), area);
    }

    #[test]
    fn hint_line_joins_entries() {
        let theme = Theme::default();
        let line = hint_line(
            &[
                KeyHelp { keys: "h", desc: "help" },
                KeyHelp { keys: "q", desc: "quit" },
            ],
            &theme,
        );
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "h help \u{2022} q quit");
    }
}
