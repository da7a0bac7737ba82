//! Rendering module
//!
//! The game draws through the small `Renderer` trait: clear, filled
//! rectangles, text, present. `EguiRenderer` implements it on top of an egui
//! painter; eframe owns the window and presents through wgpu.

pub mod egui_renderer;
pub mod frame;

pub use egui_renderer::{EguiRenderer, native_options};
pub use frame::draw_frame;

use anyhow::Result;

use crate::color::Color;

/// Immediate-mode 2D drawing surface
pub trait Renderer {
    /// Start a new frame filled with `color`
    fn clear(&mut self, color: Color);

    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);

    /// Draw `text` with its top-left corner at (x, y)
    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color) -> Result<()>;

    /// Hand the finished frame to the screen
    fn present(&mut self);
}
