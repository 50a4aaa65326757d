use egui::{Align2, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2};
use glam::DVec3;

use super::camera::OrbitCamera;
use crate::overlay::{LabelStyle, OverlayPainter};

/// Smallest on-screen marker radius, so far-away endpoints stay visible.
const MIN_MARKER_RADIUS: f32 = 2.5;

/// [`OverlayPainter`] that projects through an [`OrbitCamera`] into an egui painter.
pub struct EguiOverlayPainter<'a> {
    painter: &'a Painter,
    camera: &'a OrbitCamera,
    rect: Rect,
}

impl<'a> EguiOverlayPainter<'a> {
    pub fn new(painter: &'a Painter, camera: &'a OrbitCamera, rect: Rect) -> Self {
        Self {
            painter,
            camera,
            rect,
        }
    }

    fn project_pair(&self, from: DVec3, to: DVec3) -> Option<[Pos2; 2]> {
        Some([
            self.camera.project(from, self.rect)?,
            self.camera.project(to, self.rect)?,
        ])
    }
}

impl OverlayPainter for EguiOverlayPainter<'_> {
    fn line(&mut self, from: DVec3, to: DVec3, color: egui::Color32, width: f32) {
        if let Some(points) = self.project_pair(from, to) {
            self.painter.line_segment(points, Stroke::new(width, color));
        }
    }

    fn dashed_line(&mut self, from: DVec3, to: DVec3, color: egui::Color32, width: f32, dash: f32) {
        if let Some(points) = self.project_pair(from, to) {
            let shapes = Shape::dashed_line(&points, Stroke::new(width, color), dash, dash);
            self.painter.extend(shapes);
        }
    }

    fn sphere(&mut self, center: DVec3, diameter: f64, color: egui::Color32) {
        let Some(pos) = self.camera.project(center, self.rect) else {
            return;
        };
        let ppu = self.camera.pixels_per_unit(center, self.rect).unwrap_or(0.0);
        let radius = (diameter as f32 * 0.5 * ppu).max(MIN_MARKER_RADIUS);
        self.painter.circle_filled(pos, radius, color);
        self.painter
            .circle_stroke(pos, radius, Stroke::new(1.0, color.gamma_multiply(0.6)));
    }

    fn label(&mut self, anchor: DVec3, text: &str, style: &LabelStyle) {
        let Some(pos) = self.camera.project(anchor, self.rect) else {
            return;
        };
        let font = FontId::proportional(style.font_size);
        let galley = self
            .painter
            .layout_no_wrap(text.to_string(), font.clone(), style.color);
        let text_rect = Align2::CENTER_BOTTOM.anchor_size(pos, galley.size());
        self.painter
            .rect_filled(text_rect.expand(3.0), 2.0, style.background);
        if style.bold {
            // egui ships no bold face; overdraw with a half-point offset.
            self.painter.text(
                text_rect.min + Vec2::new(0.5, 0.0),
                Align2::LEFT_TOP,
                text,
                font,
                style.color,
            );
        }
        self.painter.galley(text_rect.min, galley, style.color);
    }
}
