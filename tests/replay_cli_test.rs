//! Tests for the headless `replay` command.

use std::process::{Command, Output};

fn replay(args: &[&str]) -> Output {
    let dir = tempfile::tempdir().unwrap();
    Command::new(env!("CARGO_BIN_EXE_tictactoe_history"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("replay")
        .args(args)
        .output()
        .expect("run tictactoe_history")
}

fn replay_json(args: &[&str]) -> serde_json::Value {
    let output = replay(args);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_replay_winning_game_as_json() {
    let json = replay_json(&["0", "3", "1", "4", "2", "--json"]);
    assert_eq!(json["status"], "Winner: X");
    assert_eq!(json["current_move"], 5);
    assert_eq!(json["win_line"]["segment"]["start_x"], 20.0);
    assert_eq!(json["win_line"]["segment"]["end_x"], 120.0);
    assert_eq!(json["no_moves_left"], false);
}

#[test]
fn test_replay_skips_rejected_plays() {
    // Second 0 is occupied; 8 comes after X already won.
    let json = replay_json(&["0", "0", "3", "1", "4", "2", "8", "--json"]);
    assert_eq!(json["status"], "Winner: X");
    assert_eq!(json["history"].as_array().unwrap().len(), 6);
    assert_eq!(json["board"][8], serde_json::Value::Null);
}

#[test]
fn test_replay_jump_shows_earlier_snapshot() {
    let json = replay_json(&["0", "3", "1", "4", "2", "--jump", "2", "--json"]);
    assert_eq!(json["current_move"], 2);
    assert_eq!(json["status"], "Next player: X");
    assert_eq!(json["win_line"], serde_json::Value::Null);
    // Jumping never discards later snapshots.
    assert_eq!(json["history"].as_array().unwrap().len(), 6);
    assert_eq!(json["history"][2]["current"], true);
}

#[test]
fn test_replay_jump_out_of_range_fails() {
    let output = replay(&["0", "--jump", "4"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_replay_text_reports_exhausted_board() {
    let output = replay(&["0", "1", "2", "4", "3", "5", "7", "6", "8"]);
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.starts_with("Next player: O\nNo moves left\n"));
    assert!(text.contains("> Go to move #9"));
}
