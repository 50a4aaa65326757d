//! Viewport overlay: world-space lines, markers and labels for the measurements.
//!
//! The drawing routine only talks to an [`OverlayPainter`], so the same code
//! drives the egui viewport and the recording painter used in tests.

use egui::Color32;
use glam::DVec3;

use crate::data::gizmo::GizmoSettings;
use crate::data::measurement::distance;
use crate::engine::MeasureEngine;

/// Label lift above the midpoint of a recorded line.
pub const LINE_LABEL_LIFT: f64 = 0.3;
/// Label lift above the pending point.
pub const POINT_LABEL_LIFT: f64 = 0.2;
/// Label lift above the midpoint of the preview segment.
pub const PREVIEW_LABEL_LIFT: f64 = 0.5;
/// Dash length (screen points) of the preview segment.
pub const PREVIEW_DASH: f32 = 5.0;

/// Color of the pending point marker.
pub const PENDING_COLOR: Color32 = Color32::RED;

#[derive(Debug, Clone, PartialEq)]
pub struct LabelStyle {
    pub font_size: f32,
    pub color: Color32,
    pub bold: bool,
    pub background: Color32,
}

impl LabelStyle {
    pub fn from_settings(settings: &GizmoSettings, bold: bool) -> Self {
        Self {
            font_size: settings.font_size as f32,
            color: settings.text_color,
            bold,
            background: GizmoSettings::label_background(),
        }
    }
}

/// World-anchored drawing primitives supplied by the host.
pub trait OverlayPainter {
    fn line(&mut self, from: DVec3, to: DVec3, color: Color32, width: f32);
    fn dashed_line(&mut self, from: DVec3, to: DVec3, color: Color32, width: f32, dash: f32);
    /// Sphere marker with the given world-space diameter.
    fn sphere(&mut self, center: DVec3, diameter: f64, color: Color32);
    fn label(&mut self, anchor: DVec3, text: &str, style: &LabelStyle);
}

/// Draw the whole overlay for one frame.
///
/// `cursor` is the world point under the pointer, when the host can resolve
/// one; it drives the preview segment from the pending point.  Nothing is
/// drawn while the tool is inactive.
pub fn draw_overlay(engine: &MeasureEngine, painter: &mut impl OverlayPainter, cursor: Option<DVec3>) {
    if !engine.is_active() {
        return;
    }
    draw_history(engine, painter);
    draw_pending(engine, painter, cursor);
}

fn draw_history(engine: &MeasureEngine, painter: &mut impl OverlayPainter) {
    let settings = engine.settings();
    let style = LabelStyle::from_settings(settings, false);
    for line in engine.history() {
        let color = line.snap_mode().color();
        painter.line(line.start(), line.end(), color, settings.line_width);
        painter.sphere(line.start(), settings.sphere_size, color);
        painter.sphere(line.end(), settings.sphere_size, color);
        let text = format!("{}\n{:.2}m", line.name(), line.distance());
        painter.label(line.midpoint() + DVec3::Y * LINE_LABEL_LIFT, &text, &style);
    }
}

fn draw_pending(engine: &MeasureEngine, painter: &mut impl OverlayPainter, cursor: Option<DVec3>) {
    let Some(anchor) = engine.pending_point() else {
        return;
    };
    let settings = engine.settings();
    painter.sphere(anchor, settings.sphere_size, PENDING_COLOR);
    painter.label(
        anchor + DVec3::Y * POINT_LABEL_LIFT,
        "P1",
        &LabelStyle::from_settings(settings, true),
    );

    if let Some(cursor) = cursor {
        let mode = engine.snap_mode();
        let snapped = mode.apply(anchor, cursor);
        painter.dashed_line(anchor, snapped, mode.preview_color(), settings.line_width, PREVIEW_DASH);
        let mid = (anchor + snapped) * 0.5;
        painter.label(
            mid + DVec3::Y * PREVIEW_LABEL_LIFT,
            &format!("{:.2}m", distance(anchor, snapped)),
            &LabelStyle::from_settings(settings, false),
        );
    }
}
