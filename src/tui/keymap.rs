use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Abstract input symbols. Sessions never see physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveUp,
    MoveDown,
    Add,
    Edit,
    ToggleDone,
    Delete,
    ClearCompleted,
    ToggleHelp,
    Quit,
    Submit,
    Cancel,
    FocusLeft,
    FocusRight,
    FocusNext,
    FocusPrev,
    Text(TextEdit),
}

/// Edits forwarded to the single-line text input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    Insert(char),
    Backspace,
    DeleteForward,
    DeleteWordBack,
    CaretLeft,
    CaretRight,
    WordLeft,
    WordRight,
    Home,
    End,
}

/// Which bindings apply to the next key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    List,
    EditorName,
    EditorPriority,
    Confirm,
}

/// Map a physical key to a command for the given context
pub fn command_for(context: KeyContext, key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(match context {
            KeyContext::List => Command::Quit,
            _ => Command::Cancel,
        });
    }
    match context {
        KeyContext::List => list_command(key),
        KeyContext::EditorName => editor_name_command(key),
        KeyContext::EditorPriority => editor_priority_command(key),
        KeyContext::Confirm => confirm_command(key),
    }
}

fn list_command(key: KeyEvent) -> Option<Command> {
    let cmd = match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Up | KeyCode::Char('k')) => Command::MoveUp,
        (KeyModifiers::NONE, KeyCode::Down | KeyCode::Char('j')) => Command::MoveDown,
        (KeyModifiers::NONE, KeyCode::Char('a')) => Command::Add,
        (KeyModifiers::NONE, KeyCode::Char('e')) => Command::Edit,
        (KeyModifiers::NONE, KeyCode::Char(' ') | KeyCode::Enter) => Command::ToggleDone,
        (KeyModifiers::NONE, KeyCode::Char('d')) => Command::Delete,
        (KeyModifiers::NONE, KeyCode::Char('c')) => Command::ClearCompleted,
        (KeyModifiers::NONE, KeyCode::Char('h')) => Command::ToggleHelp,
        // '?' arrives with SHIFT on most terminals
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('?')) => Command::ToggleHelp,
        (KeyModifiers::NONE, KeyCode::Char('q')) => Command::Quit,
        (_, KeyCode::Esc) => Command::Quit,
        _ => return None,
    };
    Some(cmd)
}

fn editor_common(key: KeyEvent) -> Option<Command> {
    let cmd = match key.code {
        KeyCode::Enter => Command::Submit,
        KeyCode::Esc => Command::Cancel,
        KeyCode::Tab | KeyCode::Down => Command::FocusNext,
        KeyCode::BackTab | KeyCode::Up => Command::FocusPrev,
        _ => return None,
    };
    Some(cmd)
}

fn editor_name_command(key: KeyEvent) -> Option<Command> {
    if let Some(cmd) = editor_common(key) {
        return Some(cmd);
    }
    let word = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    let edit = match key.code {
        KeyCode::Left if word => TextEdit::WordLeft,
        KeyCode::Right if word => TextEdit::WordRight,
        KeyCode::Left => TextEdit::CaretLeft,
        KeyCode::Right => TextEdit::CaretRight,
        KeyCode::Home => TextEdit::Home,
        KeyCode::End => TextEdit::End,
        KeyCode::Backspace if word => TextEdit::DeleteWordBack,
        KeyCode::Backspace => TextEdit::Backspace,
        KeyCode::Delete => TextEdit::DeleteForward,
        KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => TextEdit::Home,
        KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => TextEdit::End,
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            TextEdit::DeleteWordBack
        }
        KeyCode::Char(c) if !word => TextEdit::Insert(c),
        _ => return None,
    };
    Some(Command::Text(edit))
}

fn editor_priority_command(key: KeyEvent) -> Option<Command> {
    if let Some(cmd) = editor_common(key) {
        return Some(cmd);
    }
    let cmd = match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Left | KeyCode::Char('h')) => Command::FocusLeft,
        (KeyModifiers::NONE, KeyCode::Right | KeyCode::Char('l')) => Command::FocusRight,
        _ => return None,
    };
    Some(cmd)
}

fn confirm_command(key: KeyEvent) -> Option<Command> {
    let cmd = match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('y')) => {
            Command::FocusLeft
        }
        (KeyModifiers::NONE, KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n')) => {
            Command::FocusRight
        }
        (KeyModifiers::NONE, KeyCode::Enter) => Command::Submit,
        (_, KeyCode::Esc) => Command::Cancel,
        _ => return None,
    };
    Some(cmd)
}

/// One line of the help display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHelp {
    pub keys: &'static str,
    pub desc: &'static str,
}

const fn help(keys: &'static str, desc: &'static str) -> KeyHelp {
    KeyHelp { keys, desc }
}

/// Collapsed help line
pub const SHORT_HELP: &[KeyHelp] = &[help("h", "help"), help("q", "quit")];

/// Expanded help, one column per group
pub const FULL_HELP: &[&[KeyHelp]] = &[
    &[help("\u{2191}/k", "move up"), help("\u{2193}/j", "move down")],
    &[
        help("a", "add task"),
        help("e", "edit task"),
        help("space", "mark task"),
        help("d", "delete task"),
        help("c", "clear completed tasks"),
    ],
    &[help("h", "toggle help"), help("q", "quit")],
];

/// Hints shown under the editor popup
pub const EDITOR_HELP: &[KeyHelp] = &[
    help("enter", "next / save"),
    help("tab", "switch field"),
    help("\u{2190}/\u{2192}", "priority"),
    help("esc", "cancel"),
];

/// Hints shown under the confirm popup
pub const CONFIRM_HELP: &[KeyHelp] = &[
    help("\u{2190}/\u{2192}", "choose"),
    help("enter", "submit"),
    help("esc", "decline"),
];
