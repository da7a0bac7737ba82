//! Destructible bricks

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// A brick entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    /// Top-left corner
    pub pos: IVec2,
    pub size: IVec2,
    /// Remaining hits before the brick is removed
    pub life_count: u32,
    pub color: Color,
}

impl Brick {
    pub fn new(x: i32, y: i32, width: i32, height: i32, life_count: u32, color: Color) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(width, height),
            life_count,
            color,
        }
    }

    /// Take one hit and show the weakened tint
    pub fn hit(&mut self) {
        self.life_count = self.life_count.saturating_sub(1);
        self.color = Color::BRICK_WEAK;
    }

    pub fn is_destroyed(&self) -> bool {
        self.life_count == 0
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }
}
