//! Tic-tac-toe with move history and a winning-line overlay.
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw detection over a [`Board`]
//! - **Geometry**: the segment striking through a winning line
//! - **Game state**: board snapshots plus a pointer; play and jump back
//! - **View**: what a front end draws, derived from the game state
//! - **TUI**: ratatui front end driving the game from the keyboard
//!
//! # Example
//!
//! ```
//! use tictactoe_history::{GameState, Position, View};
//!
//! let mut game = GameState::new();
//! for pos in [
//!     Position::TopLeft,
//!     Position::MiddleLeft,
//!     Position::TopCenter,
//!     Position::Center,
//!     Position::TopRight,
//! ] {
//!     game.play(pos).unwrap();
//! }
//!
//! let view = View::of(&game).unwrap();
//! assert_eq!(view.status(), "Winner: X");
//! assert!(view.win_line().is_some());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod games;
mod tui;

// Crate-level exports - CLI and configuration
pub use cli::{Cli, Command};
pub use config::{Config, ConfigError, DEFAULT_CONFIG_PATH};

// Crate-level exports - Terminal UI
pub use tui::{App, Focus, run_tui};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Bar, Board, GameState, GameStatus, GeometryError, HistoryEntry, Move, MoveError,
    NO_MOVES_LEFT, Player, Position, Segment, Square, View, WinLine, WinResult, check_winner,
    detect_winner, history_label, is_draw, is_full, line_for, line_for_win, move_between,
};

/// Geometry table and grid frame.
pub use games::tictactoe::geometry;

/// Win and draw rules, including the ordered line list.
pub use games::tictactoe::rules;

/// Game-state invariants.
pub use games::tictactoe::invariants;
