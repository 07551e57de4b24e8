//! Terminal UI for tic-tac-toe.

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, error, info, instrument};

use crate::config::Config;
pub use app::{App, Focus};

/// Runs the interactive game until the user quits.
#[instrument(skip_all)]
pub fn run_tui(config: &Config) -> Result<()> {
    info!("Starting TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(moves = app.game().history().len() - 1, "TUI closed");
    res
}

/// Draw, read one key, apply it. Each key press is one transition.
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        let view = app.view()?;
        terminal.draw(|f| ui::draw(f, app, &view))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                debug!(code = ?key.code, "Key pressed");
                app.handle_key(key.code);
            }
        }
    }
    Ok(())
}
