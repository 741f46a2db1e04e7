use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::theme::Theme;
use crate::tui::view_model::{ListView, TaskRow};
use crate::util::unicode::{display_width, truncate_to_width};

const EMPTY_HINT: &str = "No tasks. Press a to add one.";

/// Render the task rows, scrolled so the cursor row stays visible
pub fn render_task_list(frame: &mut Frame, view: &ListView, theme: &Theme, area: Rect) {
    if area.height == 0 {
        return;
    }
    if view.rows.is_empty() {
        let hint = Span::styled(EMPTY_HINT, Style::default().fg(theme.dim));
        frame.render_widget(Paragraph::new(hint), area);
        return;
    }

    let height = area.height as usize;
    let cursor = view.rows.iter().position(|r| r.is_cursor).unwrap_or(0);
    let offset = scroll_offset(cursor, height);

    let lines: Vec<Line> = view
        .rows
        .iter()
        .skip(offset)
        .take(height)
        .map(|row| task_line(row, theme, area.width as usize))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

/// First visible row for a viewport of `height` rows
fn scroll_offset(cursor: usize, height: usize) -> usize {
    (cursor + 1).saturating_sub(height)
}

fn task_line(row: &TaskRow, theme: &Theme, width: usize) -> Line<'static> {
    let cursor_style = Style::default().fg(theme.cursor);
    let check_style = Style::default().fg(theme.check);

    let marker = if row.is_cursor { "> " } else { "  " };
    let check = if row.is_done { "\u{2713}  " } else { "   " };
    let prefix = format!("{}{}{} ", marker, check, row.priority_symbol);
    let name_width = width.saturating_sub(display_width(&prefix));

    Line::from(vec![
        Span::styled(marker, cursor_style),
        Span::styled(check, check_style),
        Span::raw(row.priority_symbol),
        Span::raw(" "),
        Span::styled(
            truncate_to_width(&row.name, name_width),
            Style::default().fg(theme.text),
        ),
    ])
}
