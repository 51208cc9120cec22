//! Interactive terminal list for browsing backups
//!
//! One screen: the project's backups, newest first, with load/rename/delete
//! actions. Terminal state is restored on exit and on panic.

pub mod app;
pub mod view;

use std::io::{self, Stdout};
use std::panic;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::archive::BackupMetadata;

pub use app::{ListAction, ListChoice};
use app::ListApp;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    // Restore the terminal before printing panic info
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state
fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the interactive backup list
///
/// Backups are displayed in the order given (callers sort newest first).
/// Returns the user's choice, or `None` if they quit without selecting.
pub fn run_list_ui(backups: &[BackupMetadata]) -> Result<Option<ListChoice>> {
    let mut terminal = init_terminal()?;
    let mut app = ListApp::new(backups);

    let result = loop {
        terminal.draw(|frame| view::render(frame, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break Ok(app.choice);
        }
    };

    restore_terminal()?;
    result
}
