//! Tic-tac-toe with move history.

mod action;
mod game;
pub mod geometry;
pub mod invariants;
mod position;
pub mod rules;
pub mod types;
mod view;

pub use action::{Move, MoveError};
pub use game::{GameState, GameStatus, move_between};
pub use geometry::{Bar, GeometryError, Segment, line_for, line_for_win};
pub use position::Position;
pub use rules::{WinResult, check_winner, detect_winner, is_draw, is_full};
pub use types::{Board, Player, Square};
pub use view::{HistoryEntry, NO_MOVES_LEFT, View, WinLine, history_label};
