//! Ball collisions against bricks and the paddle
//!
//! Only the ball's top-left corner is tested, not its whole rectangle. On
//! some approach angles the ball passes through a brick edge; that is how the
//! game has always played.

use super::ball::Ball;
use super::brick::Brick;
use super::level::Level;
use super::paddle::Paddle;

/// Vertical direction the ball takes after touching `brick`, if it does.
///
/// A corner strictly inside the brick sends the ball down; a corner exactly
/// on the brick's top row sends it up.
pub fn ball_brick_collision(ball: &Ball, brick: &Brick) -> Option<i32> {
    let (x, y) = (ball.pos.x, ball.pos.y);
    if x < brick.pos.x || x >= brick.right() {
        return None;
    }
    if y > brick.pos.y && y < brick.bottom() {
        Some(1)
    } else if y >= brick.pos.y && y < brick.bottom() {
        Some(-1)
    } else {
        None
    }
}

/// Run the ball against every brick, then drop destroyed bricks.
///
/// Returns the number of bricks removed.
pub fn collide_with_bricks(ball: &mut Ball, level: &mut Level) -> usize {
    for brick in level.bricks.iter_mut() {
        if let Some(direction_y) = ball_brick_collision(ball, brick) {
            ball.direction.y = direction_y;
            brick.hit();
            log::trace!(
                "brick at ({}, {}) hit, {} lives left",
                brick.pos.x,
                brick.pos.y,
                brick.life_count
            );
        }
    }
    level.remove_destroyed()
}

/// Bounce the ball up when its corner is over the paddle and its bottom edge
/// has reached the paddle's top. Returns whether it bounced.
pub fn collide_with_paddle(paddle: &Paddle, ball: &mut Ball) -> bool {
    let over_paddle = ball.pos.x >= paddle.pos.x && ball.pos.x <= paddle.right();
    if over_paddle && ball.bottom() >= paddle.pos.y {
        ball.direction.y = -1;
        true
    } else {
        false
    }
}
