use crate::model::{Priority, Task};
use crate::ops::task_ops;

use crate::tui::app::{
    App, ConfirmAction, ConfirmResult, EditorAction, EditorResult, Modal,
};
use crate::tui::keymap::Command;

use super::{ConfirmSession, EditorSession};

/// Commands that reach the list when no modal is open
pub(super) fn handle_list_command(app: &mut App, cmd: Command) {
    match cmd {
        Command::MoveUp => move_cursor(app, -1),
        Command::MoveDown => move_cursor(app, 1),
        Command::Add => {
            app.modal = Some(Modal::Editor(EditorSession::new(
                EditorAction::Create,
                "",
                Priority::Low,
            )));
        }
        Command::Edit => {
            if let Some(task) = app.current_task() {
                let editor = EditorSession::new(EditorAction::Edit, &task.name, task.priority);
                app.modal = Some(Modal::Editor(editor));
            }
        }
        Command::ToggleDone => {
            if let Some(task) = app.tasks.get_mut(app.cursor) {
                task.done = !task.done;
            }
        }
        Command::Delete => {
            if let Some(task) = app.current_task() {
                let message = format!("Delete '{}'?", task.name);
                app.modal = Some(Modal::Confirm(ConfirmSession::new(
                    ConfirmAction::DeleteCurrent,
                    message,
                )));
            }
        }
        Command::ClearCompleted => {
            if !app.tasks.is_empty() {
                app.modal = Some(Modal::Confirm(ConfirmSession::new(
                    ConfirmAction::ClearCompleted,
                    "Clear completed tasks?".to_string(),
                )));
            }
        }
        Command::ToggleHelp => app.show_help = !app.show_help,
        Command::Quit => app.should_quit = true,
        // Modal-only commands
        Command::Submit
        | Command::Cancel
        | Command::FocusLeft
        | Command::FocusRight
        | Command::FocusNext
        | Command::FocusPrev
        | Command::Text(_) => {}
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    if app.tasks.is_empty() {
        return;
    }
    let target = app.cursor.saturating_add_signed(delta);
    app.cursor = task_ops::clamp_cursor(target, app.tasks.len());
}

/// Apply a submitted editor form, re-sort, and close the modal. The cursor
/// stays at its index; it does not follow the task.
pub(super) fn receive_editor_result(app: &mut App, result: EditorResult) {
    match result.action {
        EditorAction::Create => {
            app.tasks.push(Task::new(&result.name, result.priority));
        }
        EditorAction::Edit => {
            if let Some(task) = app.tasks.get_mut(app.cursor) {
                task.name = result.name.trim().to_string();
                task.priority = result.priority;
            }
        }
    }
    task_ops::sort_tasks(&mut app.tasks);
    app.modal = None;
}

/// Apply a confirm decision and close the modal
pub(super) fn receive_confirm_result(app: &mut App, result: ConfirmResult) {
    app.modal = None;
    if !result.confirmed {
        return;
    }
    match result.action {
        ConfirmAction::DeleteCurrent => {
            task_ops::remove_task(&mut app.tasks, app.cursor);
        }
        ConfirmAction::ClearCompleted => {
            task_ops::clear_completed(&mut app.tasks);
        }
    }
    app.cursor = task_ops::clamp_cursor(app.cursor, app.tasks.len());
}
