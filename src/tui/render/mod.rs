pub mod confirm_popup;
pub mod editor_popup;
pub mod help_bar;
pub mod helpers;
pub mod task_list;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use super::app::{App, Modal};

/// Main render function: list screen, then the modal on top
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let view = app.list_view();

    // Layout: header | task list | spacer | help
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(help_bar::help_height(view.help_expanded)),
        ])
        .split(area);

    let header_style = Style::default()
        .fg(app.theme.header)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    frame.render_widget(Paragraph::new(Span::styled("Tasks:", header_style)), chunks[0]);

    task_list::render_task_list(frame, &view, &app.theme, chunks[1]);
    help_bar::render_help_bar(frame, view.help_expanded, &app.theme, chunks[3]);

    match &app.modal {
        Some(Modal::Editor(editor)) => {
            editor_popup::render_editor_popup(frame, &editor.view(), &app.theme, area);
        }
        Some(Modal::Confirm(confirm)) => {
            confirm_popup::render_confirm_popup(frame, &confirm.view(), &app.theme, area);
        }
        None => {}
    }
}
