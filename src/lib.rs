//! Bricks - a small Breakout clone
//!
//! Core modules:
//! - `sim`: Entities, level loading, collisions and the per-frame tick
//! - `event`: Maps the window's input queue to one game event per frame
//! - `renderer`: Rectangle/text drawing over the egui painter
//! - `settings`: Tunable constants, optionally loaded from JSON
//! - `app`: The eframe application that runs the frame loop

pub mod app;
pub mod color;
pub mod event;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use color::Color;
pub use settings::Settings;

/// Game configuration defaults
pub mod consts {
    /// Window
    pub const WINDOW_WIDTH: i32 = 800;
    pub const WINDOW_HEIGHT: i32 = 600;
    pub const WINDOW_TITLE: &str = "Bricks";
    /// Largest accepted window dimension
    pub const MAX_WINDOW_SIZE: i32 = 16_384;

    /// Paddle defaults (start centered, 30px above the bottom edge)
    pub const PADDLE_MOVE_AMOUNT: i32 = 10;
    pub const PADDLE_WIDTH: i32 = 100;
    pub const PADDLE_HEIGHT: i32 = 20;
    pub const PADDLE_BOTTOM_OFFSET: i32 = 30;

    /// Ball defaults (square, starts in the window center)
    pub const BALL_MOVE_AMOUNT: i32 = 5;
    pub const BALL_SIZE: i32 = 10;

    /// Lives at the start of a game
    pub const START_LIVES: u32 = 10;

    /// Brick size, shared by file levels and generated levels
    pub const BRICK_WIDTH: i32 = 40;
    pub const BRICK_HEIGHT: i32 = 10;

    /// Generated grid layout
    pub const GRID_ORIGIN_X: i32 = 10;
    pub const GRID_ORIGIN_Y: i32 = 50;
    pub const GRID_SPACING_X: i32 = 10;
    pub const GRID_SPACING_Y: i32 = 10;
    pub const GRID_BRICK_LIVES: u32 = 2;
    pub const GRID_MAX_BRICKS: usize = 500;
    /// Upper bound for seeded life counts (inclusive)
    pub const GRID_MAX_SEEDED_LIVES: u32 = 3;

    /// HUD defaults
    pub const FONT_SIZE: f32 = 12.0;
    pub const HUD_X: i32 = 10;
    pub const HUD_Y: i32 = 10;
}
