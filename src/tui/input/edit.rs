use crate::model::Priority;

use crate::tui::app::{EditorAction, EditorResult, Event, Transition};
use crate::tui::keymap::{Command, KeyContext};
use crate::tui::text_input::TextInput;
use crate::tui::view_model::{EditorView, PriorityOption};

/// Maximum task name length, in characters
pub const NAME_CHAR_LIMIT: usize = 120;

const EMPTY_NAME: &str = "Name cannot be empty";

/// Which field of the editor takes input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorFocus {
    Name,
    Priority,
}

/// Form for one task's name and priority
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSession {
    action: EditorAction,
    name: TextInput,
    priority: Priority,
    focus: EditorFocus,
    error: Option<&'static str>,
}

impl EditorSession {
    pub fn new(action: EditorAction, name: &str, priority: Priority) -> Self {
        EditorSession {
            action,
            name: TextInput::new(name, NAME_CHAR_LIMIT),
            priority,
            focus: EditorFocus::Name,
            error: None,
        }
    }

    pub fn action(&self) -> EditorAction {
        self.action
    }

    pub fn name(&self) -> &str {
        self.name.value()
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn focus(&self) -> EditorFocus {
        self.focus
    }

    pub fn key_context(&self) -> KeyContext {
        match self.focus {
            EditorFocus::Name => KeyContext::EditorName,
            EditorFocus::Priority => KeyContext::EditorPriority,
        }
    }

    pub fn handle(&mut self, cmd: Command) -> Transition {
        match cmd {
            Command::Cancel => return Transition::Dismiss,
            Command::Submit => match self.focus {
                EditorFocus::Name => self.advance(),
                EditorFocus::Priority => {
                    if self.check_name() {
                        return Transition::Complete(Event::EditorCompleted(EditorResult {
                            action: self.action,
                            name: self.name.value().trim().to_string(),
                            priority: self.priority,
                        }));
                    }
                }
            },
            Command::FocusNext if self.focus == EditorFocus::Name => self.advance(),
            Command::FocusPrev => self.focus = EditorFocus::Name,
            Command::FocusLeft if self.focus == EditorFocus::Priority => {
                self.priority = Priority::from_index(self.priority.index().saturating_sub(1));
            }
            Command::FocusRight if self.focus == EditorFocus::Priority => {
                self.priority = Priority::from_index(self.priority.index() + 1);
            }
            Command::Text(edit) if self.focus == EditorFocus::Name => {
                if self.name.apply(edit) {
                    self.error = None;
                }
            }
            _ => {}
        }
        Transition::Stay
    }

    fn advance(&mut self) {
        if self.check_name() {
            self.focus = EditorFocus::Priority;
        }
    }

    /// Flag a blank name; returns true when the name is usable
    fn check_name(&mut self) -> bool {
        if self.name.value().trim().is_empty() {
            self.error = Some(EMPTY_NAME);
            self.focus = EditorFocus::Name;
            false
        } else {
            self.error = None;
            true
        }
    }

    pub fn view(&self) -> EditorView {
        let title = match self.action {
            EditorAction::Create => "Create new task",
            EditorAction::Edit => "Edit task",
        };
        let options = Priority::ALL
            .iter()
            .map(|&priority| PriorityOption {
                priority,
                selected: priority == self.priority,
            })
            .collect();
        EditorView {
            title,
            name: self.name.value().to_string(),
            caret_col: self.name.caret_col(),
            options,
            focus: self.focus,
            error: self.error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::keymap::TextEdit;

    fn type_into(session: &mut EditorSession, text: &str) {
        for c in text.chars() {
            assert_eq!(
                session.handle(Command::Text(TextEdit::Insert(c))),
                Transition::Stay
            );
        }
    }

    #[test]
    fn submit_on_name_moves_focus() {
        let mut session = EditorSession::new(EditorAction::Create, "", Priority::Low);
        type_into(&mut session, "Buy milk");
        assert_eq!(session.handle(Command::Submit), Transition::Stay);
        assert_eq!(session.focus(), EditorFocus::Priority);
        assert_eq!(session.key_context(), KeyContext::EditorPriority);
    }

    #[test]
    fn submit_on_priority_returns_trimmed_result() {
        let mut session = EditorSession::new(EditorAction::Edit, "  walk dog  ", Priority::Low);
        session.handle(Command::FocusNext);
        session.handle(Command::FocusRight);
        let transition = session.handle(Command::Submit);
        assert_eq!(
            transition,
            Transition::Complete(Event::EditorCompleted(EditorResult {
                action: EditorAction::Edit,
                name: "walk dog".into(),
                priority: Priority::High,
            }))
        );
    }

    #[test]
    fn priority_clamps_at_both_ends() {
        let mut session = EditorSession::new(EditorAction::Create, "x", Priority::Low);
        session.handle(Command::FocusNext);
        session.handle(Command::FocusLeft);
        assert_eq!(session.priority(), Priority::Low);
        for _ in 0..4 {
            session.handle(Command::FocusRight);
        }
        assert_eq!(session.priority(), Priority::Fire);
    }

    #[test]
    fn left_right_ignored_while_name_focused() {
        let mut session = EditorSession::new(EditorAction::Create, "x", Priority::Low);
        session.handle(Command::FocusRight);
        assert_eq!(session.priority(), Priority::Low);
    }

    #[test]
    fn text_ignored_while_priority_focused() {
        let mut session = EditorSession::new(EditorAction::Create, "x", Priority::Low);
        session.handle(Command::FocusNext);
        assert_eq!(session.focus(), EditorFocus::Priority);
        type_into(&mut session, "yz");
        assert_eq!(session.name(), "x");
    }

    #[test]
    fn focus_moves_one_way_each() {
        let mut session = EditorSession::new(EditorAction::Create, "x", Priority::Low);
        session.handle(Command::FocusPrev);
        assert_eq!(session.focus(), EditorFocus::Name);
        session.handle(Command::FocusNext);
        session.handle(Command::FocusNext);
        assert_eq!(session.focus(), EditorFocus::Priority);
        session.handle(Command::FocusPrev);
        assert_eq!(session.focus(), EditorFocus::Name);
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut session = EditorSession::new(EditorAction::Create, "   ", Priority::Low);
        assert_eq!(session.handle(Command::Submit), Transition::Stay);
        assert_eq!(session.focus(), EditorFocus::Name);
        assert_eq!(session.view().error, Some("Name cannot be empty"));

        session.handle(Command::FocusNext);
        assert_eq!(session.focus(), EditorFocus::Name);

        type_into(&mut session, "a");
        assert_eq!(session.view().error, None);
        session.handle(Command::FocusNext);
        assert_eq!(session.focus(), EditorFocus::Priority);
    }

    #[test]
    fn blank_name_is_rejected_on_save() {
        let mut session = EditorSession::new(EditorAction::Edit, "ab", Priority::Low);
        session.handle(Command::FocusNext);
        session.handle(Command::FocusPrev);
        session.handle(Command::Text(TextEdit::Backspace));
        session.handle(Command::Text(TextEdit::Backspace));
        session.handle(Command::Text(TextEdit::Insert(' ')));
        session.focus = EditorFocus::Priority;
        assert_eq!(session.handle(Command::Submit), Transition::Stay);
        assert_eq!(session.focus(), EditorFocus::Name);
        assert_eq!(session.view().error, Some("Name cannot be empty"));
    }

    #[test]
    fn cancel_dismisses_without_result() {
        let mut session = EditorSession::new(EditorAction::Create, "", Priority::Low);
        type_into(&mut session, "draft");
        assert_eq!(session.handle(Command::Cancel), Transition::Dismiss);
    }

    #[test]
    fn view_reflects_state() {
        let session = EditorSession::new(EditorAction::Edit, "abc", Priority::Fire);
        let view = session.view();
        assert_eq!(view.title, "Edit task");
        assert_eq!(view.name, "abc");
        assert_eq!(view.caret_col, 3);
        assert_eq!(view.focus, EditorFocus::Name);
        let selected: Vec<Priority> = view
            .options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.priority)
            .collect();
        assert_eq!(selected, vec![Priority::Fire]);
        assert_eq!(view.options.len(), 3);

        let create = EditorSession::new(EditorAction::Create, "", Priority::Low);
        assert_eq!(create.view().title, "Create new task");
    }

    #[test]
    fn name_is_limited() {
        let long = "x".repeat(200);
        let session = EditorSession::new(EditorAction::Edit, &long, Priority::Low);
        assert_eq!(session.name().chars().count(), NAME_CHAR_LIMIT);
    }
}
