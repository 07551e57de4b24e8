//! Monotonic board invariant: each snapshot adds exactly one mark.

use super::super::game::{GameState, move_between};
use super::super::Square;
use super::Invariant;

/// Invariant: the history starts empty and grows one mark at a time.
///
/// Consecutive snapshots differ in exactly one square, which goes from
/// empty to occupied. Marks are never overwritten or removed.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        let starts_empty = history
            .first()
            .is_some_and(|b| b.squares().iter().all(|s| *s == Square::Empty));

        starts_empty
            && history
                .windows(2)
                .all(|pair| move_between(&pair[0], &pair[1]).is_some())
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to an empty square"
    }
}
