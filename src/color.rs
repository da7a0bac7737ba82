//! RGBA colors used by entities and the renderer

use serde::{Deserialize, Serialize};

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Brick that has taken at least one hit
    pub const BRICK_WEAK: Color = Color::rgb(155, 0, 0);

    /// Opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl From<Color> for egui::Color32 {
    fn from(c: Color) -> Self {
        egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_is_opaque() {
        for c in [Color::BLACK, Color::WHITE, Color::BRICK_WEAK] {
            assert_eq!(c.a, 255);
        }
    }

    #[test]
    fn test_into_color32() {
        let c: egui::Color32 = Color::BRICK_WEAK.into();
        assert_eq!(c, egui::Color32::from_rgb(155, 0, 0));
    }
}
