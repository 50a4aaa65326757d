//! GizmoSettings: visual styling of the viewport overlay.

use egui::Color32;

pub const FONT_SIZE_RANGE: std::ops::RangeInclusive<u32> = 8..=32;
pub const SPHERE_SIZE_RANGE: std::ops::RangeInclusive<f64> = 0.01..=0.5;

/// Style of labels and markers drawn in the viewport.
///
/// This is a plain value: the UI keeps its own draft copy and hands a clone to
/// [`MeasureEngine::set_gizmo_settings`](crate::engine::MeasureEngine::set_gizmo_settings).
#[derive(Debug, Clone, PartialEq)]
pub struct GizmoSettings {
    pub font_size: u32,
    pub text_color: Color32,
    /// Marker sphere diameter in world units.
    pub sphere_size: f64,
    pub line_width: f32,
    /// Whether history rows list endpoint coordinates.
    pub show_coordinates: bool,
}

impl Default for GizmoSettings {
    fn default() -> Self {
        Self {
            font_size: 12,
            text_color: Color32::WHITE,
            sphere_size: 0.1,
            line_width: 2.0,
            show_coordinates: true,
        }
    }
}

impl GizmoSettings {
    pub fn new(font_size: u32, text_color: Color32, sphere_size: f64) -> Self {
        Self {
            font_size,
            text_color,
            sphere_size,
            ..Default::default()
        }
    }

    /// Semi-transparent backdrop behind overlay labels.
    pub fn label_background() -> Color32 {
        Color32::from_black_alpha(178)
    }
}
