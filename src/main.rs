//! Tic-tac-toe with move history - CLI entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tictactoe_history::{Cli, Command, Config, GameState, View, run_tui};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            init_tracing(&config, true)?;
            run_tui(&config)
        }
        Command::Replay { cells, jump, json } => {
            init_tracing(&config, false)?;
            replay(&cells, jump, json)
        }
    }
}

/// Installs the subscriber. The TUI owns the terminal, so it logs to a file.
fn init_tracing(config: &Config, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    if to_file {
        let log_file = std::fs::File::create(config.log_file()).with_context(|| {
            format!("Failed to create log file {}", config.log_file().display())
        })?;
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Arc::new(log_file))
            .with_ansi(false)
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
    Ok(())
}

/// Plays `cells` in order, optionally jumps, and prints the view.
#[instrument(skip(cells), fields(moves = cells.len()))]
fn replay(cells: &[usize], jump: Option<usize>, json: bool) -> Result<()> {
    let mut game = GameState::new();
    for &cell in cells {
        if let Err(e) = game.play_index(cell) {
            warn!(cell, error = %e, "Skipping rejected play");
        }
    }
    if let Some(move_number) = jump {
        game.jump_to(move_number)?;
    }
    info!(status = %game.status(), "Replay finished");

    let view = View::of(&game)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", view.render_text());
    }
    Ok(())
}
