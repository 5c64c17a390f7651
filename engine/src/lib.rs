use std::io;

use game_state::{FIELD_LENGTH, FIELD_WIDTH};

pub mod clock;
pub mod config;
pub mod game;
pub mod game_state;
pub mod input;
pub mod physics;
pub mod render;
pub mod surface;

pub use clock::{Clock, ManualClock, SystemClock, TickScheduler};
pub use config::GameConfig;
pub use game::{Game, Outcome, TickOutcome};
pub use game_state::{Ball, GameState, Paddle, Score, Side};
pub use input::{InputSource, Key, ScriptedInput};
pub use surface::{Canvas, Surface};

/// the smallest terminal (columns, rows) that can hold the field, both border rows included.
pub const REQUIRED_TERMINAL_SIZE: (u16, u16) = (FIELD_LENGTH, FIELD_WIDTH + 2);

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error(
        "terminal is {cols}x{rows} but the field needs at least {required_cols}x{required_rows}"
    )]
    TerminalTooSmall {
        cols: u16,
        rows: u16,
        required_cols: u16,
        required_rows: u16,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// startup precondition for any terminal back-end: the whole field must fit on screen.
pub fn check_terminal_size(cols: u16, rows: u16) -> Result<(), GameError> {
    let (required_cols, required_rows) = REQUIRED_TERMINAL_SIZE;
    if cols < required_cols || rows < required_rows {
        return Err(GameError::TerminalTooSmall {
            cols,
            rows,
            required_cols,
            required_rows,
        });
    }
    Ok(())
}

#[cfg(test)]
#[macro_export]
macro_rules! assert_row {
    ($canvas:expr, $y:expr, $expected:expr $(,)?) => {
        assert_eq!($canvas.row($y).trim_end(), $expected)
    };
}
