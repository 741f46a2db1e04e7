use std::io;

use crossterm::event::{self, Event as TermEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::ConfigStore;
use crate::model::{Config, Priority, Task};

use super::input::{self, ConfirmSession, EditorSession};
use super::keymap::{Command, KeyContext};
use super::render;
use super::theme::Theme;
use super::view_model::{ListView, TaskRow};

/// What an editor session was opened for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    Create,
    Edit,
}

/// Destructive action gated by a confirm session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteCurrent,
    ClearCompleted,
}

/// Submitted editor values. The name is already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorResult {
    pub action: EditorAction,
    pub name: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmResult {
    pub action: ConfirmAction,
    pub confirmed: bool,
}

/// Everything the focused session can receive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Input(Command),
    EditorCompleted(EditorResult),
    ConfirmCompleted(ConfirmResult),
}

/// A modal session pushed on top of the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    Editor(EditorSession),
    Confirm(ConfirmSession),
}

/// What a modal wants after handling a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Keep the modal open
    Stay,
    /// Close the modal without a result
    Dismiss,
    /// Close the modal and deliver this event to the list
    Complete(Event),
}

/// Main application state: the task list, its cursor, and at most one modal
pub struct App {
    pub tasks: Vec<Task>,
    /// Index into `tasks`; 0 when the list is empty
    pub cursor: usize,
    pub modal: Option<Modal>,
    /// Expanded help visible
    pub show_help: bool,
    pub should_quit: bool,
    pub theme: Theme,
}

impl App {
    /// Start a session over `tasks` in their stored order
    pub fn new(tasks: Vec<Task>) -> Self {
        App {
            tasks,
            cursor: 0,
            modal: None,
            show_help: false,
            should_quit: false,
            theme: Theme::default(),
        }
    }

    /// The task under the cursor
    pub fn current_task(&self) -> Option<&Task> {
        self.tasks.get(self.cursor)
    }

    /// Feed one event to whichever session holds focus
    pub fn handle_event(&mut self, event: Event) {
        input::dispatch(self, event);
    }

    /// Key bindings for the focused session
    pub fn key_context(&self) -> KeyContext {
        match &self.modal {
            None => KeyContext::List,
            Some(Modal::Editor(editor)) => editor.key_context(),
            Some(Modal::Confirm(_)) => KeyContext::Confirm,
        }
    }

    /// Read-only rows for rendering
    pub fn list_view(&self) -> ListView {
        let rows = self
            .tasks
            .iter()
            .enumerate()
            .map(|(i, task)| TaskRow {
                name: task.name.clone(),
                is_cursor: i == self.cursor,
                is_done: task.done,
                priority_symbol: task.priority.symbol(),
            })
            .collect();
        ListView {
            rows,
            help_expanded: self.show_help,
        }
    }

    /// The document to persist
    pub fn to_config(&self) -> Config {
        Config {
            tasks: self.tasks.clone(),
        }
    }
}

/// Load the task file, run the interactive session, then save.
pub fn run(store: &ConfigStore) -> Result<(), Box<dyn std::error::Error>> {
    // Startup errors abort before the terminal is touched
    let config = store.load()?;
    let mut app = App::new(config.tasks);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Restore the terminal before the default panic output
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let looped = run_event_loop(&mut terminal, &mut app);

    // Save while still in the alternate screen so a failed restore cannot
    // lose the session's edits
    let saved = store.save(&app.to_config());
    let restored = restore_terminal(&mut terminal);

    collect_errors(vec![looped, saved.map_err(Into::into), restored.map_err(Into::into)])
}

/// Leave raw mode and the alternate screen. Every step runs even if an
/// earlier one fails.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let cursor = terminal.show_cursor();
    raw.and(screen).and(cursor)
}

/// Ok if every step succeeded. A single failure is returned as-is; several
/// are joined in order into one message.
fn collect_errors(
    outcomes: Vec<Result<(), Box<dyn std::error::Error>>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut errors: Vec<Box<dyn std::error::Error>> =
        outcomes.into_iter().filter_map(Result::err).collect();
    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => {
            let joined: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            Err(joined.join("; ").into())
        }
    }
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    while !app.should_quit {
        terminal.draw(|frame| render::render(frame, app))?;

        // Block until the next event; resizes just fall through to a redraw
        if let TermEvent::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::new("First", Priority::Fire),
            Task {
                done: true,
                ..Task::new("Second", Priority::Low)
            },
        ]
    }

    #[test]
    fn new_app_starts_at_top_without_modal() {
        let app = App::new(sample_tasks());
        assert_eq!(app.cursor, 0);
        assert!(app.modal.is_none());
        assert!(!app.show_help);
        assert!(!app.should_quit);
        assert_eq!(app.key_context(), KeyContext::List);
        assert_eq!(app.current_task().map(|t| t.name.as_str()), Some("First"));
    }

    #[test]
    fn list_view_marks_cursor_and_done() {
        let mut app = App::new(sample_tasks());
        app.cursor = 1;
        let view = app.list_view();
        assert_eq!(view.rows.len(), 2);
        assert!(!view.rows[0].is_cursor);
        assert!(view.rows[1].is_cursor);
        assert!(view.rows[1].is_done);
        assert_eq!(view.rows[0].priority_symbol, Priority::Fire.symbol());
    }

    #[test]
    fn to_config_keeps_order() {
        let app = App::new(sample_tasks());
        assert_eq!(app.to_config().tasks, sample_tasks());
    }

    #[test]
    fn collect_errors_keeps_every_failure() {
        use crate::io::config_io::ConfigError;

        assert!(collect_errors(vec![Ok(()), Ok(())]).is_ok());

        // a lone save failure keeps its type
        let err = collect_errors(vec![Ok(()), Err(ConfigError::NoHomeDir.into()), Ok(())])
            .unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());

        // loop and save both failing: neither message is dropped, loop first
        let err = collect_errors(vec![
            Err(io::Error::other("terminal gone").into()),
            Err(ConfigError::NoHomeDir.into()),
            Ok(()),
        ])
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "terminal gone; could not determine the home directory"
        );
    }

    #[test]
    fn empty_list_has_no_current_task() {
        let app = App::new(Vec::new());
        assert!(app.current_task().is_none());
        assert!(app.list_view().rows.is_empty());
    }
}
