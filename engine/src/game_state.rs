use std::fmt::Display;

use tracing::debug;

use crate::input::Key;

pub const FIELD_LENGTH: u16 = 50;
pub const FIELD_WIDTH: u16 = 15;
pub const PADDLE_LENGTH: u16 = 3;
pub const WIN_SCORE: u8 = 10;

pub const FIELD_TILE: char = '#';
pub const PADDLE_TILE: char = '|';
pub const BALL_TILE: char = 'O';

/// the lowest row offset a paddle can take. the bottom interior row is never covered by a paddle.
pub const PADDLE_MAX_OFFSET: u16 = FIELD_WIDTH - PADDLE_LENGTH - 1;

/// column the ball has to reach to be checked against the left paddle.
pub const LEFT_GOAL_X: u16 = 1;
/// column the ball has to reach to be checked against the right paddle.
pub const RIGHT_GOAL_X: u16 = FIELD_LENGTH - 2;

pub const SCOREBOARD_X: u16 = FIELD_LENGTH / 2 - 2;
pub const SCOREBOARD_Y: u16 = FIELD_WIDTH + 1;

const _CHECKS: () = {
    assert!(
        PADDLE_LENGTH + 1 < FIELD_WIDTH,
        "paddle is too long to move within the field"
    );
    assert!(
        FIELD_LENGTH >= 8,
        "field is too short to hold two paddles, a ball lane and the scoreboard"
    );
    assert!(
        FIELD_LENGTH / 2 > LEFT_GOAL_X && FIELD_LENGTH / 2 < RIGHT_GOAL_X,
        "ball must start between the goals"
    );
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => Display::fmt("Left", f),
            Side::Right => Display::fmt("Right", f),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Paddle {
    offset: u16,
}

impl Paddle {
    pub fn new(offset: u16) -> Self {
        Self {
            offset: offset.min(PADDLE_MAX_OFFSET),
        }
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn move_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.offset < PADDLE_MAX_OFFSET {
            self.offset += 1;
        }
    }

    /// the field rows this paddle occupies.
    pub fn rows(&self) -> std::ops::RangeInclusive<u16> {
        self.offset + 1..=self.offset + PADDLE_LENGTH
    }

    pub fn covers(&self, y: u16) -> bool {
        self.rows().contains(&y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ball {
    pub x: u16,
    pub y: u16,
    pub moving_right: bool,
    pub moving_down: bool,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            x: FIELD_LENGTH / 2,
            y: FIELD_WIDTH / 2,
            moving_right: true,
            moving_down: true,
        }
    }

    /// puts the ball back in the centre of the field. direction is kept.
    pub fn reset_position(&mut self) {
        self.x = FIELD_LENGTH / 2;
        self.y = FIELD_WIDTH / 2;
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,
    pub right: u8,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left = self.left.saturating_add(1),
            Side::Right => self.right = self.right.saturating_add(1),
        }
    }

    pub fn is_over(&self) -> bool {
        self.left >= WIN_SCORE || self.right >= WIN_SCORE
    }

    /// the right player is checked first; the left player wins any other finished game.
    pub fn winner(&self) -> Option<Side> {
        if !self.is_over() {
            None
        } else if self.right >= WIN_SCORE {
            Some(Side::Right)
        } else {
            Some(Side::Left)
        }
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | {}", self.left, self.right)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameState {
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub ball: Ball,
    pub score: Score,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            left_paddle: Paddle::new(0),
            right_paddle: Paddle::new(0),
            ball: Ball::new(),
            score: Score::default(),
        }
    }

    /// moves a paddle for a recognised key. the arrows drive the right paddle, w and s the left.
    pub fn apply_key(&mut self, key: Key) {
        let (side, paddle, up) = match key {
            Key::Up => (Side::Right, &mut self.right_paddle, true),
            Key::Down => (Side::Right, &mut self.right_paddle, false),
            Key::W => (Side::Left, &mut self.left_paddle, true),
            Key::S => (Side::Left, &mut self.left_paddle, false),
            Key::Interrupt | Key::Other => return,
        };
        if up {
            paddle.move_up();
        } else {
            paddle.move_down();
        }
        debug!(%side, offset = paddle.offset(), "paddle moved");
    }
}
