//! Game state and the lives counter
//!
//! Everything the frame loop mutates lives in one `GameState` owned by the
//! app.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::level::Level;
use super::paddle::Paddle;
use crate::color::Color;
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Out of lives (terminal)
    Lost,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub settings: Settings,
    pub paddle: Paddle,
    pub ball: Ball,
    pub level: Level,
    /// Lives left
    pub lives: u32,
    pub phase: GamePhase,
    /// Where the ball respawns after a lost life
    pub ball_start: IVec2,
    /// Frames simulated so far
    pub frame: u64,
}

impl GameState {
    /// Place paddle and ball at their start positions around `level`
    pub fn new(settings: Settings, level: Level) -> Self {
        let paddle = Paddle::new(
            settings.paddle_start(),
            IVec2::new(settings.paddle_width, settings.paddle_height),
            settings.window_width,
            Color::WHITE,
        );
        let ball_start = settings.ball_start();
        let ball = Ball::new(
            ball_start,
            IVec2::splat(settings.ball_size),
            settings.window_size(),
            Color::WHITE,
        );
        let lives = settings.lives;
        Self {
            settings,
            paddle,
            ball,
            level,
            lives,
            phase: if lives == 0 {
                GamePhase::Lost
            } else {
                GamePhase::Running
            },
            ball_start,
            frame: 0,
        }
    }

    /// Take a life if the ball's bottom edge is below the window, respawning
    /// it at the start position heading up. Returns whether a life was lost.
    pub fn check_lose_life(&mut self) -> bool {
        if self.ball.bottom() <= self.settings.window_height {
            return false;
        }
        self.lives = self.lives.saturating_sub(1);
        self.ball.reset_to(self.ball_start);
        log::info!("Ball lost, {} lives left", self.lives);
        true
    }

    pub fn has_lost(&self) -> bool {
        self.lives == 0
    }
}
