//! Per-frame simulation step
//!
//! Order within a frame: paddle input, brick pass, ball move, paddle pass,
//! lost-life check, game-over check.

use super::collision::{collide_with_bricks, collide_with_paddle};
use super::paddle::Direction;
use super::state::{GamePhase, GameState};

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Paddle movement requested this frame
    pub paddle: Option<Direction>,
}

/// What happened during a frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub bricks_removed: usize,
    pub paddle_bounce: bool,
    pub life_lost: bool,
}

/// Advance the game by one frame. Does nothing once the game is lost.
pub fn tick(state: &mut GameState, input: &TickInput) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    if state.phase == GamePhase::Lost {
        return outcome;
    }

    if let Some(direction) = input.paddle {
        state.paddle.step(direction, state.settings.paddle_speed);
    }

    outcome.bricks_removed = collide_with_bricks(&mut state.ball, &mut state.level);
    state.ball.move_by(state.settings.ball_speed);
    outcome.paddle_bounce = collide_with_paddle(&state.paddle, &mut state.ball);
    outcome.life_lost = state.check_lose_life();

    if state.has_lost() {
        log::info!("Game over after {} frames", state.frame);
        state.phase = GamePhase::Lost;
    }

    state.frame += 1;
    outcome
}
