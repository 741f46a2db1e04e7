mod confirm;
mod edit;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Event, Modal, Transition};
use super::keymap;

pub use confirm::ConfirmSession;
pub use edit::{EditorFocus, EditorSession, NAME_CHAR_LIMIT};

/// Translate a key press into a command for the focused session
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    if let Some(cmd) = keymap::command_for(app.key_context(), key) {
        dispatch(app, Event::Input(cmd));
    }
}

/// Route an event: input goes to the modal if one is open, otherwise to the
/// list. Completion events always go to the list.
pub fn dispatch(app: &mut App, event: Event) {
    match event {
        Event::Input(cmd) => {
            let transition = match &mut app.modal {
                Some(Modal::Editor(editor)) => editor.handle(cmd),
                Some(Modal::Confirm(confirm)) => confirm.handle(cmd),
                None => {
                    navigate::handle_list_command(app, cmd);
                    return;
                }
            };
            match transition {
                Transition::Stay => {}
                Transition::Dismiss => app.modal = None,
                Transition::Complete(event) => dispatch(app, event),
            }
        }
        Event::EditorCompleted(result) => navigate::receive_editor_result(app, result),
        Event::ConfirmCompleted(result) => navigate::receive_confirm_result(app, result),
    }
}
