use std::{io, time::Duration};

use crate::{
    game_state::{
        Ball, GameState, Paddle, Side, BALL_TILE, FIELD_LENGTH, FIELD_TILE, FIELD_WIDTH,
        PADDLE_TILE, SCOREBOARD_X, SCOREBOARD_Y,
    },
    surface::Surface,
};

const LEFT_PADDLE_X: u16 = 0;
const RIGHT_PADDLE_X: u16 = FIELD_LENGTH - 1;

pub fn draw_borders<S: Surface>(surface: &mut S) -> io::Result<()> {
    let barrier = FIELD_TILE.to_string().repeat(FIELD_LENGTH as usize);
    surface.write_at(0, 0, &barrier)?;
    surface.write_at(0, FIELD_WIDTH + 1, &barrier)
}

/// clears the whole surface and puts the borders back.
pub fn redraw_field<S: Surface>(surface: &mut S) -> io::Result<()> {
    surface.clear()?;
    draw_borders(surface)
}

pub fn draw_frame<S: Surface>(surface: &mut S, state: &GameState) -> io::Result<()> {
    draw_paddle(surface, LEFT_PADDLE_X, &state.left_paddle)?;
    draw_paddle(surface, RIGHT_PADDLE_X, &state.right_paddle)?;
    surface.write_at(state.ball.x, state.ball.y, &BALL_TILE.to_string())?;
    surface.write_at(SCOREBOARD_X, SCOREBOARD_Y, &state.score.to_string())
}

/// blanks the ball's cell so it leaves no trail when it moves.
pub fn erase_ball<S: Surface>(surface: &mut S, ball: &Ball) -> io::Result<()> {
    surface.write_at(ball.x, ball.y, " ")
}

pub fn draw_winner<S: Surface>(surface: &mut S, winner: Side, elapsed: Duration) -> io::Result<()> {
    surface.clear()?;
    surface.write_at(0, 0, &format!("{winner} player won!"))?;
    surface.write_at(0, 1, &format!("Elapsed time: {}", format_elapsed(elapsed)))
}

/// `hh:mm:ss.mmm`
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        secs / 3600,
        secs / 60 % 60,
        secs % 60,
        elapsed.subsec_millis()
    )
}

fn draw_paddle<S: Surface>(surface: &mut S, x: u16, paddle: &Paddle) -> io::Result<()> {
    for y in 1..=FIELD_WIDTH {
        let glyph = if paddle.covers(y) { PADDLE_TILE } else { ' ' };
        surface.write_at(x, y, &glyph.to_string())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::{
        assert_row,
        game_state::{Ball, GameState, Paddle, Score, Side, FIELD_LENGTH, FIELD_WIDTH},
        render::{draw_borders, draw_frame, draw_winner, erase_ball, format_elapsed, redraw_field},
        surface::{Canvas, Surface},
    };

    fn canvas() -> Canvas {
        Canvas::new(FIELD_LENGTH, FIELD_WIDTH + 2)
    }

    fn paddle_cells(canvas: &Canvas) -> Vec<(u16, u16)> {
        canvas
            .find('|')
            .into_iter()
            .filter(|(x, _)| *x == 0 || *x == FIELD_LENGTH - 1)
            .collect()
    }

    #[test]
    fn borders() {
        let mut canvas = canvas();
        draw_borders(&mut canvas).unwrap();
        let barrier = "#".repeat(50);
        assert_row!(canvas, 0, barrier);
        assert_row!(canvas, 16, barrier);
        assert_row!(canvas, 1, "");
    }

    #[test]
    fn frame() {
        let mut canvas = canvas();
        let mut state = GameState::new();
        state.right_paddle = Paddle::new(4);
        state.score = Score { left: 2, right: 7 };
        draw_borders(&mut canvas).unwrap();
        draw_frame(&mut canvas, &state).unwrap();
        // the scoreboard's separator is a '|' too, so only the paddle columns count.
        assert_eq!(
            paddle_cells(&canvas),
            vec![(0, 1), (0, 2), (0, 3), (49, 5), (49, 6), (49, 7)]
        );
        assert_eq!(canvas.char_at(25, 16), Some('|'));
        assert_eq!(canvas.find('O'), vec![(25, 7)]);
        // the scoreboard sits on the bottom border.
        assert_eq!(&canvas.row(16)[23..28], "2 | 7");
        assert_eq!(canvas.char_at(22, 16), Some('#'));
        assert_eq!(canvas.char_at(28, 16), Some('#'));
    }

    #[test]
    fn paddles_leave_no_trail() {
        let mut canvas = canvas();
        let mut state = GameState::new();
        draw_frame(&mut canvas, &state).unwrap();
        state.left_paddle = Paddle::new(6);
        draw_frame(&mut canvas, &state).unwrap();
        assert_eq!(
            paddle_cells(&canvas),
            vec![(49, 1), (49, 2), (49, 3), (0, 7), (0, 8), (0, 9)]
        );
    }

    #[test]
    fn ball_erased_before_move() {
        let mut canvas = canvas();
        let mut state = GameState::new();
        draw_frame(&mut canvas, &state).unwrap();
        erase_ball(&mut canvas, &state.ball).unwrap();
        state.ball = Ball {
            x: 26,
            y: 8,
            ..state.ball
        };
        draw_frame(&mut canvas, &state).unwrap();
        assert_eq!(canvas.find('O'), vec![(26, 8)]);
    }

    #[test]
    fn redraw_clears_stale_frame() {
        let mut canvas = canvas();
        draw_frame(&mut canvas, &GameState::new()).unwrap();
        redraw_field(&mut canvas).unwrap();
        assert!(canvas.find('O').is_empty());
        assert!(canvas.find('|').is_empty());
        assert_eq!(canvas.find('#').len(), 100);
    }

    #[test]
    fn winner_screen() {
        let mut canvas = canvas();
        draw_borders(&mut canvas).unwrap();
        draw_winner(&mut canvas, Side::Right, Duration::from_millis(83_250)).unwrap();
        assert_row!(canvas, 0, "Right player won!");
        assert_row!(canvas, 1, "Elapsed time: 00:01:23.250");
        assert!(canvas.find('#').is_empty());
        canvas.clear().unwrap();
        draw_winner(&mut canvas, Side::Left, Duration::ZERO).unwrap();
        assert_row!(canvas, 0, "Left player won!");
    }

    #[test]
    fn elapsed_format() {
        assert_eq!(format_elapsed(Duration::ZERO), "00:00:00.000");
        assert_eq!(
            format_elapsed(Duration::from_millis(3_723_004)),
            "01:02:03.004"
        );
    }
}
