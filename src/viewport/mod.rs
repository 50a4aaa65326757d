//! Demo host viewport: orbit camera, box scene, click picking and the
//! egui rendition of the measurement overlay.

pub mod camera;
pub mod painter;
pub mod picking;
pub mod scene;

use egui::{Color32, PointerButton, Sense, Ui};
use glam::DVec3;

use crate::engine::MeasureEngine;
use crate::input::{KeyModifiers, PointerDown};
use crate::overlay::draw_overlay;

use camera::OrbitCamera;
use painter::EguiOverlayPainter;
use picking::resolve_world_point;
use scene::DemoScene;

#[derive(Default)]
pub struct Viewport {
    pub camera: OrbitCamera,
    pub scene: DemoScene,
}

impl Viewport {
    /// World point under a screen position inside `rect`.
    pub fn pick(&self, pos: egui::Pos2, rect: egui::Rect) -> Option<DVec3> {
        let ray = self.camera.ray(pos, rect)?;
        Some(resolve_world_point(&ray, Some(&self.scene)))
    }

    /// Draw the scene and overlay, and feed viewport input to the engine.
    pub fn show(&mut self, ui: &mut Ui, engine: &mut MeasureEngine) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let rect = response.rect;
        painter.rect_filled(rect, 0.0, Color32::from_gray(24));

        // Orbit with the secondary or middle button; primary stays free for picking.
        if response.dragged_by(PointerButton::Secondary) || response.dragged_by(PointerButton::Middle) {
            self.camera.orbit(response.drag_delta());
        }
        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                self.camera.zoom(scroll);
            }
        }

        let (pressed, press_pos, modifiers, hover) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.interact_pos(),
                i.modifiers,
                i.pointer.hover_pos(),
            )
        });
        if pressed && response.hovered() {
            if let Some(pos) = press_pos {
                let event = PointerDown::primary(
                    [pos.x - rect.min.x, pos.y - rect.min.y],
                    KeyModifiers::from(modifiers),
                );
                let picker = |p: [f32; 2]| self.pick(rect.min + egui::vec2(p[0], p[1]), rect);
                engine.handle_pointer_down(&event, &picker);
            }
        }

        self.scene.draw(&painter, &self.camera, rect);

        let cursor = hover
            .filter(|p| rect.contains(*p))
            .and_then(|p| self.pick(p, rect));
        let mut overlay = EguiOverlayPainter::new(&painter, &self.camera, rect);
        draw_overlay(engine, &mut overlay, cursor);

        // The preview segment follows the pointer.
        if engine.is_active() && engine.pending_point().is_some() && response.hovered() {
            ui.ctx().request_repaint();
        }
    }
}
