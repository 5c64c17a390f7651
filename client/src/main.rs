use std::{io::stdout, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use engine::{
    check_terminal_size, render::format_elapsed, Game, GameConfig, Outcome, Surface, SystemClock,
};
use terminal::{KeyboardInput, Terminal, TerminalGuard};
use tracing::info;

mod logging;
mod terminal;

#[derive(Parser, Debug)]
#[command(
    about = "Two-player pong in the terminal. W/S move the left paddle, the arrows the right one."
)]
struct Cli {
    /// Milliseconds between two ball moves
    #[arg(long, env = "PONG_TICK_MS", default_value_t = 100)]
    tick_ms: u64,
    /// Write logs to this file (filtered by RUST_LOG, default info)
    #[arg(long, env = "PONG_LOG_FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;
    let config = GameConfig::with_tick_millis(cli.tick_ms)?;
    let (cols, rows) = terminal::size().context("failed to read terminal size")?;
    check_terminal_size(cols, rows)?;

    let guard = TerminalGuard::enter().context("failed to set up terminal")?;
    let mut game = Game::new(
        config,
        Terminal::new(stdout()),
        KeyboardInput::new(),
        SystemClock::new(),
    );
    let outcome = game.run();
    if matches!(outcome, Ok(Outcome::Won { .. })) {
        game.surface_mut().write_at(0, 3, "press any key to exit")?;
        game.surface_mut().flush()?;
        game.input_mut().wait_for_any_key()?;
    }
    drop(guard);

    match outcome? {
        Outcome::Won { winner, elapsed } => {
            info!(%winner, ?elapsed, "session finished");
            println!("{winner} player won! ({})", format_elapsed(elapsed));
        }
        Outcome::Interrupted { .. } => println!("^C"),
    }
    Ok(())
}
