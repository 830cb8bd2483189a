//! Terminal front end for Tic Tac Toe Classic.
//!
//! A thin presentation layer: it renders the engine's [`GameView`](crate::GameView)
//! and turns key presses into moves, history jumps and resets.

mod app;
mod guard;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, Focus};

use crate::Settings;
use anyhow::Result;
use guard::TerminalGuard;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the TUI until the user quits.
#[instrument(skip_all)]
pub fn run(settings: Settings) -> Result<()> {
    info!("Starting terminal front end");

    enable_raw_mode()?;
    let guard = TerminalGuard::new(restore_terminal);
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = App::new(settings);
    let res = run_app(&mut terminal, &mut app);

    guard.restore()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!(moves = app.engine().step(), "Terminal front end stopped");
    res
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}

fn run_app(terminal: &mut Term, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
    Ok(())
}
