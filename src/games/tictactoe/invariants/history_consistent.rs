//! History consistency invariant: the pointer stays inside the history.

use super::super::game::GameState;
use super::Invariant;

/// Invariant: history is non-empty and `current_move` indexes into it.
///
/// Also checks that snapshot k holds exactly k marks, so the pointer's
/// parity always names the right player.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        game.current_move() < history.len()
            && history
                .iter()
                .enumerate()
                .all(|(k, board)| board.occupied() == k)
    }

    fn description() -> &'static str {
        "Current move points into the history and snapshot k has k marks"
    }
}
