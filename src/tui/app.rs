//! Application state and key handling.

use crate::config::Config;
use crate::games::tictactoe::{GameState, GeometryError, Position, View};
use crossterm::event::KeyCode;
use ratatui::widgets::ListState;
use tracing::{debug, info, instrument};

use super::input::{digit_position, move_cursor};

/// Which panel receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys select a history entry.
    History,
}

impl Focus {
    /// Toggles between the two panels.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    history_state: ListState,
    message: Option<String>,
    show_win_line: bool,
    quit: bool,
}

impl App {
    /// Creates a new application.
    #[instrument(skip(config))]
    pub fn new(config: &Config) -> Self {
        let mut history_state = ListState::default();
        history_state.select(Some(0));
        Self {
            game: GameState::new(),
            cursor: *config.start_cursor(),
            focus: Focus::default(),
            history_state,
            message: None,
            show_win_line: *config.show_win_line(),
            quit: false,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Last feedback message (rejected play, jump, ...).
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether to draw the winning-line overlay.
    pub fn show_win_line(&self) -> bool {
        self.show_win_line
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Selection state of the history list.
    pub fn history_state_mut(&mut self) -> &mut ListState {
        &mut self.history_state
    }

    /// Derives the view of the current game.
    pub fn view(&self) -> Result<View, GeometryError> {
        View::of(&self.game)
    }

    /// Routes one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.quit = true;
            }
            KeyCode::Char('r') => {
                self.game.restart();
                self.sync_history_selection();
                self.message = Some("Game restarted".to_string());
            }
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                debug!(focus = ?self.focus, "Focus changed");
            }
            KeyCode::Char(c) => match digit_position(key) {
                Some(pos) => self.play_at(pos),
                None if c == ' ' && self.focus == Focus::Board => self.play_at(self.cursor),
                None => {}
            },
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::History => self.handle_history_key(key),
            },
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter => self.play_at(self.cursor),
            _ => self.cursor = move_cursor(self.cursor, key),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        let last = self.game.history().len() - 1;
        let selected = self.history_state.selected().unwrap_or(0).min(last);
        match key {
            KeyCode::Up => self.history_state.select(Some(selected.saturating_sub(1))),
            KeyCode::Down => self.history_state.select(Some((selected + 1).min(last))),
            KeyCode::Home => self.history_state.select(Some(0)),
            KeyCode::End => self.history_state.select(Some(last)),
            KeyCode::Enter => self.jump_to(selected),
            _ => {}
        }
    }

    /// Plays the current player's mark at `pos`, reporting rejections.
    #[instrument(skip(self))]
    pub fn play_at(&mut self, pos: Position) {
        self.cursor = pos;
        self.message = match self.game.play(pos) {
            Ok(action) => {
                self.sync_history_selection();
                Some(format!("{} played {}", action.player, action.position))
            }
            Err(e) => Some(e.to_string()),
        };
    }

    /// Shows the snapshot after `move_number` moves.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, move_number: usize) {
        self.message = match self.game.jump_to(move_number) {
            Ok(()) => {
                self.sync_history_selection();
                Some(if move_number == 0 {
                    "Showing game start".to_string()
                } else {
                    format!("Showing move #{}", move_number)
                })
            }
            Err(e) => Some(e.to_string()),
        };
    }

    fn sync_history_selection(&mut self) {
        self.history_state.select(Some(self.game.current_move()));
    }
}
