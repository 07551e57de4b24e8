//! Presentation data derived from a game state.
//!
//! A [`View`] is everything a front end needs to draw one frame: the shown
//! board, the status line, the optional strike-through segment and the
//! jump-to list. It is rebuilt after every transition.

use super::action::Move;
use super::game::GameState;
use super::geometry::{Bar, GeometryError, Segment};
use super::rules::is_draw;
use super::{Board, Player};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{error, instrument};

/// Segment striking through the winning line, with its bar placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WinLine {
    /// Endpoints in grid pixels.
    pub segment: Segment,
    /// Bar placement derived from the segment.
    pub bar: Bar,
}

/// One entry of the jump-to list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct HistoryEntry {
    /// Snapshot index to jump to.
    move_number: usize,
    /// Button text.
    label: String,
    /// The move that produced this snapshot (none for game start).
    played: Option<Move>,
    /// Whether this snapshot is the one shown.
    current: bool,
}

/// Hint shown under the status when the board is exhausted.
pub const NO_MOVES_LEFT: &str = "No moves left";

/// Button text for a history entry.
pub fn history_label(move_number: usize) -> String {
    if move_number > 0 {
        format!("Go to move #{}", move_number)
    } else {
        "Go to game start".to_string()
    }
}

/// Everything needed to draw the game.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct View {
    /// Labels of the nine cells, row-major.
    board: [Option<Player>; 9],
    /// "Winner: X" or "Next player: O".
    status: String,
    /// Present only when the shown board has a winner.
    win_line: Option<WinLine>,
    /// The shown board is full and nobody won.
    no_moves_left: bool,
    /// One entry per snapshot.
    history: Vec<HistoryEntry>,
    /// Index of the shown snapshot.
    current_move: usize,
}

impl View {
    /// Derives the view of `game`.
    ///
    /// # Errors
    ///
    /// Fails if the winning line has no segment rather than drawing a
    /// degenerate one.
    #[instrument(skip(game), fields(current_move = game.current_move()))]
    pub fn of(game: &GameState) -> Result<Self, GeometryError> {
        let win_line = game
            .win_line()
            .inspect_err(|e| error!(error = %e, "Winning line has no segment"))?
            .map(|segment| WinLine {
                segment,
                bar: segment.bar(),
            });

        let moves = game.moves();
        let history = (0..game.history().len())
            .map(|move_number| HistoryEntry {
                move_number,
                label: history_label(move_number),
                played: move_number.checked_sub(1).and_then(|i| moves.get(i).copied()),
                current: move_number == game.current_move(),
            })
            .collect();

        Ok(Self {
            board: game.current_board().squares().map(|s| s.player()),
            status: game.status().to_string(),
            win_line,
            no_moves_left: is_draw(game.current_board()),
            history,
            current_move: game.current_move(),
        })
    }

    /// Plain-text rendering for terminals without the TUI.
    pub fn render_text(&self) -> String {
        let mut squares = [super::Square::Empty; 9];
        for (square, cell) in squares.iter_mut().zip(self.board) {
            if let Some(player) = cell {
                *square = super::Square::Occupied(player);
            }
        }

        let mut out = self.status.clone();
        if self.no_moves_left {
            out.push_str(&format!("\n{}", NO_MOVES_LEFT));
        }
        out.push_str(&format!("\n\n{}\n", Board::from(squares).display()));

        if let Some(line) = &self.win_line {
            let s = line.segment;
            out.push_str(&format!(
                "\nWinning line: ({}, {}) -> ({}, {}), angle {:.2} deg, length {:.2}\n",
                s.start_x, s.start_y, s.end_x, s.end_y, line.bar.rotation_degrees, line.bar.width
            ));
        }

        out.push_str("\nHistory:\n");
        for entry in &self.history {
            let marker = if entry.current { '>' } else { ' ' };
            match entry.played {
                Some(mov) => out.push_str(&format!("{} {} ({})\n", marker, entry.label, mov)),
                None => out.push_str(&format!("{} {}\n", marker, entry.label)),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_history_labels() {
        assert_eq!(history_label(0), "Go to game start");
        assert_eq!(history_label(1), "Go to move #1");
        assert_eq!(history_label(9), "Go to move #9");
    }

    #[test]
    fn test_view_of_new_game() {
        let view = View::of(&GameState::new()).unwrap();
        assert_eq!(view.status(), "Next player: X");
        assert_eq!(view.board(), &[None; 9]);
        assert!(view.win_line().is_none());
        assert!(!*view.no_moves_left());
        assert_eq!(view.history().len(), 1);
        assert!(*view.history()[0].current());
        assert_eq!(*view.history()[0].played(), None);
    }

    #[test]
    fn test_view_entries_carry_moves_and_current_marker() {
        let mut game = GameState::new();
        game.play(Position::Center).unwrap();
        game.play(Position::TopLeft).unwrap();
        game.jump_to(1).unwrap();

        let view = View::of(&game).unwrap();
        let entries = view.history();
        assert_eq!(entries.len(), 3);
        assert_eq!(
            *entries[2].played(),
            Some(Move::new(Player::O, Position::TopLeft))
        );
        assert!(*entries[1].current());
        assert!(!*entries[2].current());
        assert_eq!(view.board()[4], Some(Player::X));
        assert_eq!(view.board()[0], None);
    }

    #[test]
    fn test_render_text_shows_status_and_history() {
        let mut game = GameState::new();
        game.play(Position::TopLeft).unwrap();
        let text = View::of(&game).unwrap().render_text();
        assert!(text.starts_with("Next player: O\n"));
        assert!(text.contains("X|2|3"));
        assert!(text.contains("> Go to move #1 (X -> Top-left)"));
        assert!(text.contains("  Go to game start"));
    }

    #[test]
    fn test_full_board_without_winner_says_no_moves_left() {
        let mut game = GameState::new();
        for cell in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            game.play_index(cell).unwrap();
        }

        let view = View::of(&game).unwrap();
        assert!(*view.no_moves_left());
        assert_eq!(view.status(), "Next player: O");
        assert!(view.win_line().is_none());

        let text = view.render_text();
        assert!(text.starts_with("Next player: O\nNo moves left\n\n"));
    }

    #[test]
    fn test_won_board_is_not_reported_as_exhausted() {
        let mut game = GameState::new();
        // X completes the top row with the ninth mark.
        for cell in [0, 3, 1, 4, 5, 7, 6, 8, 2] {
            game.play_index(cell).unwrap();
        }
        assert_eq!(game.winner().map(|w| w.player), Some(Player::X));

        let view = View::of(&game).unwrap();
        assert!(!*view.no_moves_left());
        assert!(!view.render_text().contains(NO_MOVES_LEFT));
    }
}
