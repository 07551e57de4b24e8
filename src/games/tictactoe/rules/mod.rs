//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules never touch the
//! history; the game state consults them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinResult, check_winner, detect_winner};
