use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_segmentation::UnicodeSegmentation;

use crate::tui::input::EditorFocus;
use crate::tui::keymap::EDITOR_HELP;
use crate::tui::theme::Theme;
use crate::tui::view_model::EditorView;
use crate::util::unicode::{display_width, truncate_to_width};

use super::helpers::{centered_rect_fixed, hint_line};

const POPUP_W: u16 = 60;
const INPUT_PREFIX: &str = " > ";
/// Row of the name input inside the border
const INPUT_ROW: u16 = 3;

/// Render the task editor form as a centered popup
pub fn render_editor_popup(frame: &mut Frame, view: &EditorView, theme: &Theme, area: Rect) {
    let title_style = Style::default()
        .fg(theme.accent)
        .add_modifier(Modifier::BOLD);
    let label_style = |focused: bool| {
        if focused {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        }
    };

    let mut hints = hint_line(EDITOR_HELP, theme);
    hints.spans.insert(0, Span::raw(" "));

    // Wide enough for the full hint row plus padding and borders
    let popup_w = POPUP_W
        .max(hints.width() as u16 + 3)
        .min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(2) as usize;
    let field_w = inner_w.saturating_sub(display_width(INPUT_PREFIX) + 1);
    let (visible, caret_col) = visible_window(&view.name, view.caret_col, field_w);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(format!(" {}", view.title), title_style)));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Name:",
        label_style(view.focus == EditorFocus::Name),
    )));
    lines.push(Line::from(vec![
        Span::styled(INPUT_PREFIX, Style::default().fg(theme.cursor)),
        Span::styled(visible, Style::default().fg(theme.text)),
    ]));
    match view.error {
        Some(msg) => lines.push(Line::from(Span::styled(
            format!("   {}", msg),
            Style::default().fg(theme.error),
        ))),
        None => lines.push(Line::from("")),
    }
    lines.push(Line::from(Span::styled(
        " Priority:",
        label_style(view.focus == EditorFocus::Priority),
    )));

    let mut options = vec![Span::raw(" ")];
    for opt in &view.options {
        let (fg, bg) = theme.option_colors(opt.selected);
        options.push(Span::styled(
            format!(" {} ", opt.priority),
            Style::default().fg(fg).bg(bg),
        ));
        options.push(Span::raw(" "));
    }
    lines.push(Line::from(options));
    lines.push(Line::from(""));

    lines.push(hints);

    let popup_h = (lines.len() as u16 + 2).min(area.height);
    let popup = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent));
    frame.render_widget(Paragraph::new(lines).block(block), popup);

    if view.focus == EditorFocus::Name && popup.height > INPUT_ROW + 1 {
        let x = popup.x + 1 + display_width(INPUT_PREFIX) as u16 + caret_col as u16;
        let y = popup.y + 1 + INPUT_ROW;
        frame.set_cursor_position((x.min(popup.right().saturating_sub(2)), y));
    }
}

/// Slice of `name` that fits in `width` cells with the caret in view, and
/// the caret column inside that slice
fn visible_window(name: &str, caret_col: usize, width: usize) -> (String, usize) {
    if width == 0 {
        return (String::new(), 0);
    }
    if caret_col < width {
        return (truncate_to_width(name, width), caret_col);
    }
    // Drop leading graphemes until the caret fits
    let mut skipped = 0;
    let mut start = 0;
    for (i, g) in name.grapheme_indices(true) {
        if caret_col - skipped < width {
            break;
        }
        skipped += display_width(g);
        start = i + g.len();
    }
    (
        truncate_to_width(&name[start..], width),
        caret_col - skipped,
    )
}
