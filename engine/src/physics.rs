use tracing::debug;

use crate::game_state::{Ball, GameState, Side, FIELD_WIDTH, LEFT_GOAL_X, RIGHT_GOAL_X};

/// moves the ball one cell diagonally.
pub fn advance_ball(ball: &mut Ball) {
    if ball.moving_right {
        ball.x += 1;
    } else {
        ball.x = ball.x.saturating_sub(1);
    }
    if ball.moving_down {
        ball.y += 1;
    } else {
        ball.y = ball.y.saturating_sub(1);
    }
}

/// applies the bounce and goal rules to the ball's new position.
/// on a miss the point is awarded, the ball is recentred and the scoring side is returned.
pub fn resolve_collisions(state: &mut GameState) -> Option<Side> {
    let ball = &mut state.ball;
    if ball.y == 1 || ball.y == FIELD_WIDTH {
        ball.moving_down = !ball.moving_down;
    }
    // a ball passing a paddle scores for the opposite player.
    let scorer = if ball.x == LEFT_GOAL_X {
        let blocked = state.left_paddle.covers(ball.y);
        bounce_or_score(ball, blocked, Side::Right)
    } else if ball.x == RIGHT_GOAL_X {
        let blocked = state.right_paddle.covers(ball.y);
        bounce_or_score(ball, blocked, Side::Left)
    } else {
        None
    };
    if let Some(side) = scorer {
        state.score.award(side);
        state.ball.reset_position();
    }
    scorer
}

fn bounce_or_score(ball: &mut Ball, blocked: bool, opponent: Side) -> Option<Side> {
    if blocked {
        ball.moving_right = !ball.moving_right;
        debug!(x = ball.x, y = ball.y, "ball hit paddle");
        None
    } else {
        Some(opponent)
    }
}
