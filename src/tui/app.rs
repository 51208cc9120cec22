//! State and key handling for the interactive backup list

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::archive::BackupMetadata;

/// What the user asked to do with the selected backup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    Load,
    Rename,
    Delete,
}

/// A selection made in the list: an action and the index of the backup it
/// targets, in the order the backups were passed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListChoice {
    pub action: ListAction,
    pub index: usize,
}

/// Application state for the backup list screen
pub struct ListApp<'a> {
    /// Backups in display order (callers sort newest first)
    pub backups: &'a [BackupMetadata],
    /// Currently highlighted row
    pub cursor: usize,
    /// Selection made by the user, if any
    pub choice: Option<ListChoice>,
    /// Whether the event loop should exit
    pub should_quit: bool,
}

impl<'a> ListApp<'a> {
    /// Create list state over the given backups
    pub fn new(backups: &'a [BackupMetadata]) -> Self {
        Self {
            backups,
            cursor: 0,
            choice: None,
            should_quit: false,
        }
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < self.backups.len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Enter => self.select(ListAction::Load),
            KeyCode::Char('r') => self.select(ListAction::Rename),
            KeyCode::Char('d') => self.select(ListAction::Delete),
            _ => {}
        }
    }

    fn select(&mut self, action: ListAction) {
        if !self.backups.is_empty() {
            self.choice = Some(ListChoice {
                action,
                index: self.cursor,
            });
            self.should_quit = true;
        }
    }
}
