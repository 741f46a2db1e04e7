use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::keymap::CONFIRM_HELP;
use crate::tui::theme::Theme;
use crate::tui::view_model::ConfirmView;
use crate::util::unicode::{display_width, truncate_to_width};

use super::helpers::{centered_rect_fixed, hint_line};

const MIN_W: u16 = 36;
const MAX_W: u16 = 60;

/// Render the yes/no prompt as a centered popup
pub fn render_confirm_popup(frame: &mut Frame, view: &ConfirmView, theme: &Theme, area: Rect) {
    let mut hints = hint_line(CONFIRM_HELP, theme);
    hints.spans.insert(0, Span::raw(" "));

    // Content plus one cell of padding and the borders
    let content_w = (display_width(&view.message) + 1).max(hints.width());
    let popup_w = (content_w as u16 + 3)
        .clamp(MIN_W, MAX_W)
        .min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(2) as usize;

    let message_style = Style::default()
        .fg(theme.text)
        .add_modifier(Modifier::BOLD);
    let button = |label: &'static str, selected: bool| {
        let (fg, bg) = theme.option_colors(selected);
        Span::styled(format!("  {}  ", label), Style::default().fg(fg).bg(bg))
    };

    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", truncate_to_width(&view.message, inner_w.saturating_sub(1))),
            message_style,
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw(" "),
            button("Yes", view.yes_selected),
            Span::raw("  "),
            button("No", !view.yes_selected),
        ]),
        Line::from(""),
        hints,
    ];

    let popup_h = (lines.len() as u16 + 2).min(area.height);
    let popup = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
