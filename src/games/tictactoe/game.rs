//! Game state with full move history.
//!
//! The state is the ordered list of board snapshots plus a pointer to the
//! one being shown. Whose turn it is, the winner and the status line are
//! all derived from the pointed-at snapshot and never stored.
//!
//! ```
//! use tictactoe_history::{GameState, Position};
//!
//! let mut game = GameState::new();
//! game.play(Position::Center).unwrap();
//! game.play(Position::TopLeft).unwrap();
//! assert_eq!(game.status().to_string(), "Next player: X");
//!
//! game.jump_to(0).unwrap();
//! assert_eq!(game.history().len(), 3);
//! assert_eq!(game.status().to_string(), "Next player: X");
//! ```

use super::action::{Move, MoveError};
use super::geometry::{GeometryError, Segment, line_for_win};
#[cfg(debug_assertions)]
use super::invariants::{GameInvariants, InvariantSet};
use super::rules::{WinResult, detect_winner, is_full};
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Status line for the shown board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// The board has a completed line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// No winner yet; the given player moves next.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// Tic-tac-toe session with undo-then-branch history.
///
/// Invariants:
/// - `history[0]` is the empty board
/// - each snapshot adds exactly one mark to the previous one
/// - `current_move < history.len()`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) history: Vec<Board>,
    pub(crate) current_move: usize,
}

impl GameState {
    /// Creates a new game: one empty snapshot, pointer at move 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
        }
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Discards any snapshots after the current move before appending, so
    /// playing from an earlier point drops the old continuation.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the shown board already has a winner
    /// - [`MoveError::SquareOccupied`] if `pos` is taken
    ///
    /// The state is unchanged on error.
    #[instrument(skip(self), fields(current_move = self.current_move, player = %self.to_move()))]
    pub fn play(&mut self, pos: Position) -> Result<Move, MoveError> {
        let board = *self.current_board();

        if let Some(win) = detect_winner(&board) {
            warn!(winner = %win.player, "Rejected play after game end");
            return Err(MoveError::GameOver);
        }
        if !board.is_empty(pos) {
            warn!("Rejected play on occupied square");
            return Err(MoveError::SquareOccupied(pos));
        }

        let action = Move::new(self.to_move(), pos);
        let mut next_board = board;
        next_board.set(pos, Square::Occupied(action.player));

        let mut next = self.clone();
        let discarded = next.history.len() - (next.current_move + 1);
        next.history.truncate(next.current_move + 1);
        next.history.push(next_board);
        next.current_move = next.history.len() - 1;

        // Postcondition: verify in debug builds before committing
        #[cfg(debug_assertions)]
        GameInvariants::check_all(&next).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        *self = next;
        info!(%action, move_number = self.current_move, discarded, "Move played");
        Ok(action)
    }

    /// Index-based entry point for [`play`](Self::play).
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] for indices past 8, otherwise as `play`.
    #[instrument(skip(self))]
    pub fn play_index(&mut self, index: usize) -> Result<Move, MoveError> {
        let pos = Position::from_index(index).ok_or_else(|| {
            warn!("Rejected play off the board");
            MoveError::OutOfBounds(index)
        })?;
        self.play(pos)
    }

    /// Shows the snapshot after `move_number` moves. History is untouched.
    ///
    /// # Errors
    ///
    /// [`MoveError::NoSuchMove`] if no such snapshot exists.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, move_number: usize) -> Result<(), MoveError> {
        if move_number >= self.history.len() {
            warn!("Rejected jump past end of history");
            return Err(MoveError::NoSuchMove {
                requested: move_number,
                len: self.history.len(),
            });
        }
        self.current_move = move_number;
        debug!("Jumped");
        Ok(())
    }

    /// Drops all history and starts over.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(discarded = self.history.len() - 1, "Restarting game");
        *self = Self::new();
    }

    /// All snapshots, starting with the empty board.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the shown snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// The shown board.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Player to move on the shown board.
    pub fn to_move(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Completed line on the shown board, if any.
    pub fn winner(&self) -> Option<WinResult> {
        detect_winner(self.current_board())
    }

    /// Whether plays are still possible on the shown board.
    pub fn is_over(&self) -> bool {
        self.winner().is_some() || is_full(self.current_board())
    }

    /// Status line for the shown board.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(win) => GameStatus::Winner(win.player),
            None => GameStatus::NextPlayer(self.to_move()),
        }
    }

    /// Strike-through segment for the shown board's winning line.
    ///
    /// # Errors
    ///
    /// Propagates [`GeometryError`] if the winning line has no segment.
    pub fn win_line(&self) -> Result<Option<Segment>, GeometryError> {
        self.winner().as_ref().map(line_for_win).transpose()
    }

    /// Every recorded move, including those after the shown snapshot.
    pub fn moves(&self) -> Vec<Move> {
        self.history
            .windows(2)
            .filter_map(|pair| move_between(&pair[0], &pair[1]))
            .collect()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// The single mark added between two snapshots.
///
/// `None` unless exactly one square went from empty to occupied and
/// nothing else changed.
pub fn move_between(before: &Board, after: &Board) -> Option<Move> {
    let mut added = None;
    for pos in Position::ALL {
        match (before.get(pos), after.get(pos)) {
            (a, b) if a == b => {}
            (Square::Empty, Square::Occupied(player)) if added.is_none() => {
                added = Some(Move::new(player, pos));
            }
            _ => return None,
        }
    }
    added
}
