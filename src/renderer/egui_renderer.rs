//! `Renderer` over an egui painter

use anyhow::{Result, ensure};
use egui::{FontId, Painter, Pos2, Rect, Shape, Vec2};

use super::Renderer;
use crate::color::Color;
use crate::settings::Settings;

/// Window configuration: fixed size, titled, centered, vsync on the wgpu
/// backend.
pub fn native_options(settings: &Settings) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window_title.clone())
            .with_inner_size([settings.window_width as f32, settings.window_height as f32])
            .with_resizable(false),
        renderer: eframe::Renderer::Wgpu,
        vsync: true,
        centered: true,
        ..Default::default()
    }
}

/// Buffers one frame of shapes and paints them on `present`
pub struct EguiRenderer {
    painter: Painter,
    font_id: FontId,
    shapes: Vec<Shape>,
}

impl EguiRenderer {
    pub fn new(painter: Painter, font_size: f32) -> Self {
        Self {
            painter,
            font_id: FontId::proportional(font_size),
            shapes: Vec::new(),
        }
    }
}

impl Renderer for EguiRenderer {
    fn clear(&mut self, color: Color) {
        self.shapes.clear();
        self.shapes
            .push(Shape::rect_filled(self.painter.clip_rect(), 0.0, color));
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        let rect = Rect::from_min_size(
            Pos2::new(x as f32, y as f32),
            Vec2::new(width as f32, height as f32),
        );
        self.shapes.push(Shape::rect_filled(rect, 0.0, color));
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color) -> Result<()> {
        let font_id = self.font_id.clone();
        let has_glyphs = self.painter.ctx().fonts(|f| f.has_glyphs(&font_id, text));
        ensure!(has_glyphs, "font cannot render {text:?}");

        let galley = self
            .painter
            .layout_no_wrap(text.to_owned(), font_id, color.into());
        self.shapes.push(Shape::galley(
            Pos2::new(x as f32, y as f32),
            galley,
            color.into(),
        ));
        Ok(())
    }

    fn present(&mut self) {
        self.painter.extend(self.shapes.drain(..));
    }
}
