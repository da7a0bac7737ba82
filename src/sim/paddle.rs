//! The player's paddle

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Horizontal movement request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: IVec2,
    pub size: IVec2,
    pub window_width: i32,
    pub color: Color,
}

impl Paddle {
    pub fn new(pos: IVec2, size: IVec2, window_width: i32, color: Color) -> Self {
        Self {
            pos,
            size,
            window_width,
            color,
        }
    }

    /// Move left unless already past the left edge.
    /// Not clamped: can end up to `amount` left of zero.
    pub fn move_left(&mut self, amount: i32) {
        if self.pos.x >= 0 {
            self.pos.x -= amount;
        }
    }

    /// Move right unless already touching the right edge.
    /// Not clamped: can end up to `amount` past the edge.
    pub fn move_right(&mut self, amount: i32) {
        if self.pos.x + self.size.x < self.window_width {
            self.pos.x += amount;
        }
    }

    pub fn step(&mut self, direction: Direction, amount: i32) {
        match direction {
            Direction::Left => self.move_left(amount),
            Direction::Right => self.move_right(amount),
        }
    }

    /// Right edge x coordinate
    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }
}
