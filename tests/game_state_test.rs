//! Tests for the game state: turns, rejections, time travel.

use tictactoe_history::{
    Board, GameState, GameStatus, Move, MoveError, NO_MOVES_LEFT, Player, Position, Square, View,
};

fn play_all(game: &mut GameState, cells: &[usize]) {
    for &cell in cells {
        game.play_index(cell).expect("legal move");
    }
}

fn board_of(cells: [Option<Player>; 9]) -> Board {
    Board::from(cells.map(|c| c.map_or(Square::Empty, Square::Occupied)))
}

#[test]
fn test_new_game() {
    let game = GameState::new();
    assert_eq!(game.history(), &[Board::new()]);
    assert_eq!(game.current_move(), 0);
    assert_eq!(game.to_move(), Player::X);
    assert_eq!(game.status(), GameStatus::NextPlayer(Player::X));
    assert!(game.winner().is_none());
}

#[test]
fn test_opening_sequence_status() {
    let mut game = GameState::new();

    game.play_index(0).unwrap();
    assert_eq!(
        *game.current_board(),
        board_of([Some(Player::X), None, None, None, None, None, None, None, None])
    );
    assert_eq!(game.status().to_string(), "Next player: O");

    game.play_index(4).unwrap();
    assert_eq!(game.current_board().get(Position::Center), Square::Occupied(Player::O));
    assert_eq!(game.status().to_string(), "Next player: X");

    game.play_index(1).unwrap();
    assert_eq!(game.current_board().get(Position::TopCenter), Square::Occupied(Player::X));
}

#[test]
fn test_canonical_top_row_win() {
    let mut game = GameState::new();
    // X: 0, 1, 2 on turns 0, 2, 4; O: 3, 4 on turns 1, 3
    play_all(&mut game, &[0, 3, 1, 4, 2]);

    assert_eq!(game.status().to_string(), "Winner: X");
    let win = game.winner().expect("X completed the top row");
    assert_eq!(win.key(), (Position::TopLeft, Position::TopCenter));

    let segment = game.win_line().unwrap().expect("winning line has a segment");
    assert_eq!(
        (segment.start_x, segment.start_y, segment.end_x, segment.end_y),
        (20.0, 64.0, 120.0, 64.0)
    );
}

#[test]
fn test_jump_to_start_restores_empty_board() {
    let mut game = GameState::new();
    play_all(&mut game, &[0, 4, 1, 3]);

    game.jump_to(0).unwrap();
    assert_eq!(*game.current_board(), Board::new());
    assert_eq!(game.status().to_string(), "Next player: X");
    assert_eq!(game.history().len(), 5);
}

#[test]
fn test_jump_shows_exact_snapshot_without_changing_history() {
    let mut game = GameState::new();
    play_all(&mut game, &[4, 0, 8, 2, 6]);
    let before = game.history().to_vec();

    for k in 0..before.len() {
        game.jump_to(k).unwrap();
        assert_eq!(*game.current_board(), before[k]);
        assert_eq!(game.history(), before.as_slice());
    }
}

#[test]
fn test_jump_out_of_range_is_rejected() {
    let mut game = GameState::new();
    play_all(&mut game, &[4]);

    let err = game.jump_to(2).unwrap_err();
    assert_eq!(err, MoveError::NoSuchMove { requested: 2, len: 2 });
    assert_eq!(game.current_move(), 1);
}

#[test]
fn test_play_after_jump_truncates_future() {
    let mut game = GameState::new();
    play_all(&mut game, &[0, 4, 1, 3]);
    let kept = game.history()[..=2].to_vec();

    game.jump_to(2).unwrap();
    game.play_index(8).unwrap();

    assert_eq!(game.history().len(), 4);
    assert_eq!(&game.history()[..=2], kept.as_slice());
    assert_eq!(game.current_move(), 3);
    assert_eq!(game.current_board().get(Position::BottomRight), Square::Occupied(Player::X));
    assert_eq!(game.current_board().get(Position::MiddleLeft), Square::Empty);
}

#[test]
fn test_play_from_start_discards_everything() {
    let mut game = GameState::new();
    play_all(&mut game, &[0, 4, 1]);
    game.jump_to(0).unwrap();
    game.play_index(8).unwrap();

    assert_eq!(game.history().len(), 2);
    assert_eq!(game.moves(), vec![Move::new(Player::X, Position::BottomRight)]);
}

#[test]
fn test_occupied_square_is_rejected_unchanged() {
    let mut game = GameState::new();
    play_all(&mut game, &[4]);
    let before = game.clone();

    assert_eq!(game.play(Position::Center), Err(MoveError::SquareOccupied(Position::Center)));
    assert_eq!(game, before);
}

#[test]
fn test_play_after_win_is_rejected_for_every_square() {
    let mut game = GameState::new();
    play_all(&mut game, &[0, 3, 1, 4, 2]);
    let before = game.clone();

    for pos in Position::ALL {
        assert!(game.play(pos).is_err());
        assert_eq!(game, before);
    }
    assert_eq!(game.play(Position::BottomRight), Err(MoveError::GameOver));
}

#[test]
fn test_jump_back_before_win_reopens_play() {
    let mut game = GameState::new();
    play_all(&mut game, &[0, 3, 1, 4, 2]);

    game.jump_to(4).unwrap();
    assert!(game.winner().is_none());
    game.play_index(5).unwrap();

    assert_eq!(game.history().len(), 6);
    assert_eq!(game.status().to_string(), "Next player: O");

    // Browsing forward again is no longer possible past the branch
    assert!(game.jump_to(6).is_err());
}

#[test]
fn test_full_board_without_winner_rejects_all_plays() {
    let mut game = GameState::new();
    // X O X / X O O / O X X
    play_all(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert!(game.winner().is_none());
    assert!(game.is_over());
    let before = game.clone();

    for pos in Position::ALL {
        assert_eq!(game.play(pos), Err(MoveError::SquareOccupied(pos)));
    }
    assert_eq!(game, before);
    assert_eq!(game.status().to_string(), "Next player: O");

    let view = View::of(&game).unwrap();
    assert!(*view.no_moves_left());
    assert!(view.render_text().contains(NO_MOVES_LEFT));
}

#[test]
fn test_out_of_bounds_index_is_rejected() {
    let mut game = GameState::new();
    assert_eq!(game.play_index(9), Err(MoveError::OutOfBounds(9)));
    assert_eq!(game, GameState::new());
}

#[test]
fn test_turn_alternation_matches_move_parity() {
    let mut game = GameState::new();
    play_all(&mut game, &[4, 0, 8, 2, 1, 7, 6, 3]);

    for (k, mov) in game.moves().iter().enumerate() {
        let expected = if k % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(mov.player, expected, "move {}", k + 1);
    }
}

#[test]
fn test_parity_follows_pointer_after_jump() {
    let mut game = GameState::new();
    play_all(&mut game, &[4, 0, 8]);

    game.jump_to(1).unwrap();
    assert_eq!(game.to_move(), Player::O);
    game.play_index(2).unwrap();
    assert_eq!(game.current_board().get(Position::TopRight), Square::Occupied(Player::O));
}

#[test]
fn test_restart() {
    let mut game = GameState::new();
    play_all(&mut game, &[0, 3, 1, 4, 2]);
    game.restart();
    assert_eq!(game, GameState::new());
}

#[test]
fn test_view_history_labels() {
    let mut game = GameState::new();
    play_all(&mut game, &[0, 3]);
    let view = View::of(&game).unwrap();

    let labels: Vec<_> = view.history().iter().map(|e| e.label().as_str()).collect();
    assert_eq!(labels, ["Go to game start", "Go to move #1", "Go to move #2"]);
}

#[test]
fn test_view_serializes_to_json() {
    let mut game = GameState::new();
    play_all(&mut game, &[0, 3, 1, 4, 2]);
    let view = View::of(&game).unwrap();

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["status"], "Winner: X");
    assert_eq!(json["board"][0], "X");
    assert_eq!(json["board"][5], serde_json::Value::Null);
    assert_eq!(json["win_line"]["segment"]["start_y"], 64.0);
    assert_eq!(json["history"][5]["label"], "Go to move #5");
    assert_eq!(json["current_move"], 5);
    assert_eq!(json["no_moves_left"], false);
}
