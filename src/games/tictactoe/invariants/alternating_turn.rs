//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::Player;
use super::super::game::{GameState, move_between};
use super::Invariant;

/// Invariant: the mark added by move k+1 belongs to X when k is even.
///
/// Steps that are not a single added mark are left to
/// [`MonotonicBoardInvariant`](super::MonotonicBoardInvariant).
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .windows(2)
            .enumerate()
            .all(|(k, pair)| match move_between(&pair[0], &pair[1]) {
                Some(mov) => mov.player == Player::for_move(k),
                None => true,
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
