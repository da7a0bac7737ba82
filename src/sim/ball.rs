//! The ball: a square that travels diagonally and reflects off window edges

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: IVec2,
    pub size: IVec2,
    pub color: Color,
    /// Window the ball bounces inside
    pub bounds: IVec2,
    /// Per-axis travel sign, each component is -1 or +1
    pub direction: IVec2,
}

impl Ball {
    /// New ball moving right and up
    pub fn new(pos: IVec2, size: IVec2, bounds: IVec2, color: Color) -> Self {
        Self {
            pos,
            size,
            color,
            bounds,
            direction: IVec2::new(1, -1),
        }
    }

    /// Advance by `amount` along each axis.
    ///
    /// Edges are checked before moving, so the ball may sit on or past an
    /// edge for one frame before it turns around.
    pub fn move_by(&mut self, amount: i32) {
        if self.pos.x <= 0 {
            self.direction.x = 1;
        }
        if self.pos.x >= self.bounds.x {
            self.direction.x = -1;
        }
        if self.pos.y <= 0 {
            self.direction.y = 1;
        }
        if self.pos.y >= self.bounds.y {
            self.direction.y = -1;
        }
        self.pos += self.direction * amount;
    }

    /// Respawn at `pos`, heading up
    pub fn reset_to(&mut self, pos: IVec2) {
        self.pos = pos;
        self.direction.y = -1;
    }

    /// Bottom edge y coordinate
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }
}
