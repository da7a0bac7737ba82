//! Game settings
//!
//! Every field defaults to the built-in constants; a JSON file may override
//! any subset of them.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    pub window_title: String,
    pub window_width: i32,
    pub window_height: i32,

    // === Paddle ===
    pub paddle_width: i32,
    pub paddle_height: i32,
    /// Distance from the paddle's top edge to the window bottom
    pub paddle_bottom_offset: i32,
    /// Pixels per key press
    pub paddle_speed: i32,

    // === Ball ===
    pub ball_size: i32,
    /// Pixels per frame on each axis
    pub ball_speed: i32,
    pub lives: u32,

    // === Bricks ===
    pub brick_width: i32,
    pub brick_height: i32,
    pub grid_origin_x: i32,
    pub grid_origin_y: i32,
    pub grid_spacing_x: i32,
    pub grid_spacing_y: i32,
    /// Lives of each brick in an unseeded generated level
    pub grid_brick_lives: u32,

    // === HUD ===
    pub font_size: f32,
    /// Top-left corner of the lives counter
    pub hud_x: i32,
    pub hud_y: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: WINDOW_TITLE.to_string(),
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,
            paddle_speed: PADDLE_MOVE_AMOUNT,

            ball_size: BALL_SIZE,
            ball_speed: BALL_MOVE_AMOUNT,
            lives: START_LIVES,

            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            grid_origin_x: GRID_ORIGIN_X,
            grid_origin_y: GRID_ORIGIN_Y,
            grid_spacing_x: GRID_SPACING_X,
            grid_spacing_y: GRID_SPACING_Y,
            grid_brick_lives: GRID_BRICK_LIVES,

            font_size: FONT_SIZE,
            hud_x: HUD_X,
            hud_y: HUD_Y,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file and validate them
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        let settings: Settings = serde_json::from_str(&json)
            .with_context(|| format!("invalid settings file {}", path.display()))?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject sizes, speeds and positions the game cannot run with.
    ///
    /// Everything must fit inside a window of at most `MAX_WINDOW_SIZE`, so
    /// positions stay far from `i32` overflow.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            (1..=MAX_WINDOW_SIZE).contains(&self.window_width)
                && (1..=MAX_WINDOW_SIZE).contains(&self.window_height),
            "window size must be between 1 and {MAX_WINDOW_SIZE}, got {}x{}",
            self.window_width,
            self.window_height
        );
        let fits_x = |v: i32| (1..=self.window_width).contains(&v);
        let fits_y = |v: i32| (1..=self.window_height).contains(&v);
        let inside_x = |v: i32| (0..=self.window_width).contains(&v);
        let inside_y = |v: i32| (0..=self.window_height).contains(&v);

        ensure!(
            fits_x(self.paddle_width) && fits_y(self.paddle_height),
            "paddle size must be positive and fit the window"
        );
        ensure!(
            inside_y(self.paddle_bottom_offset),
            "paddle offset must be within the window height"
        );
        ensure!(
            fits_x(self.ball_size) && fits_y(self.ball_size),
            "ball size must be positive and fit the window"
        );
        ensure!(
            fits_x(self.brick_width) && fits_y(self.brick_height),
            "brick size must be positive and fit the window"
        );
        ensure!(
            fits_x(self.paddle_speed),
            "paddle speed must be between 1 and the window width"
        );
        ensure!(
            fits_x(self.ball_speed) && fits_y(self.ball_speed),
            "ball speed must be between 1 and the window size"
        );
        ensure!(
            inside_x(self.grid_origin_x) && inside_y(self.grid_origin_y),
            "grid origin must be inside the window"
        );
        ensure!(
            inside_x(self.grid_spacing_x) && inside_y(self.grid_spacing_y),
            "grid spacing must be between 0 and the window size"
        );
        ensure!(
            inside_x(self.hud_x) && inside_y(self.hud_y),
            "HUD position must be inside the window"
        );
        ensure!(self.lives > 0, "lives must be at least 1");
        ensure!(self.font_size > 0.0, "font size must be positive");
        Ok(())
    }

    pub fn window_size(&self) -> IVec2 {
        IVec2::new(self.window_width, self.window_height)
    }

    /// Paddle centered horizontally, `paddle_bottom_offset` above the bottom
    pub fn paddle_start(&self) -> IVec2 {
        IVec2::new(
            self.window_width / 2 - self.paddle_width / 2,
            self.window_height - self.paddle_bottom_offset,
        )
    }

    /// Ball centered in the window
    pub fn ball_start(&self) -> IVec2 {
        IVec2::new(
            self.window_width / 2 - self.ball_size / 2,
            self.window_height / 2 - self.ball_size / 2,
        )
    }
}
