//! Read-only snapshots handed to the renderer.

use crate::model::Priority;

use super::input::EditorFocus;

/// One row of the task list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub name: String,
    pub is_cursor: bool,
    pub is_done: bool,
    pub priority_symbol: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub rows: Vec<TaskRow>,
    pub help_expanded: bool,
}

/// One selectable priority in the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityOption {
    pub priority: Priority,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorView {
    pub title: &'static str,
    pub name: String,
    /// Caret position in terminal cells
    pub caret_col: usize,
    pub options: Vec<PriorityOption>,
    pub focus: EditorFocus,
    pub error: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmView {
    pub message: String,
    /// `true` when "Yes" is highlighted
    pub yes_selected: bool,
}
