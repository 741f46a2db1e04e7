use crate::tui::app::{ConfirmAction, ConfirmResult, Event, Transition};
use crate::tui::keymap::Command;
use crate::tui::view_model::ConfirmView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Choice {
    #[default]
    Yes,
    No,
}

/// Yes/no gate in front of a destructive action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmSession {
    action: ConfirmAction,
    message: String,
    selected: Choice,
}

impl ConfirmSession {
    pub fn new(action: ConfirmAction, message: String) -> Self {
        ConfirmSession {
            action,
            message,
            selected: Choice::default(),
        }
    }

    pub fn action(&self) -> ConfirmAction {
        self.action
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Cancel declines: the parent still receives a result
    pub fn handle(&mut self, cmd: Command) -> Transition {
        match cmd {
            Command::FocusLeft => self.selected = Choice::Yes,
            Command::FocusRight => self.selected = Choice::No,
            Command::Submit => return self.finish(self.selected == Choice::Yes),
            Command::Cancel => {
                self.selected = Choice::No;
                return self.finish(false);
            }
            _ => {}
        }
        Transition::Stay
    }

    fn finish(&self, confirmed: bool) -> Transition {
        Transition::Complete(Event::ConfirmCompleted(ConfirmResult {
            action: self.action,
            confirmed,
        }))
    }

    pub fn view(&self) -> ConfirmView {
        ConfirmView {
            message: self.message.clone(),
            yes_selected: self.selected == Choice::Yes,
        }
    }
}
