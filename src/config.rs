//! Startup configuration for the measurement tool window.

use egui::Color32;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::data::gizmo::{GizmoSettings, FONT_SIZE_RANGE, SPHERE_SIZE_RANGE};
use crate::data::snap::SnapMode;
use crate::error::{MeasureError, MeasureResult};

/// Configuration for [`run_viewport_measure`](crate::run_viewport_measure).
pub struct MeasureConfig {
    /// Window title.
    pub title: String,
    /// Initial gizmo style.
    pub gizmo: GizmoSettings,
    /// Snap mode selected at startup.
    pub snap_mode: SnapMode,
    /// Whether the tool starts enabled.
    pub start_active: bool,
    /// Optional eframe window options.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self {
            title: "Viewport Measure".to_string(),
            gizmo: GizmoSettings::default(),
            snap_mode: SnapMode::Free,
            start_active: false,
            native_options: None,
        }
    }
}

/// Serializable subset of [`MeasureConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasureConfigFile {
    pub title: Option<String>,
    pub font_size: u32,
    pub text_color_rgba: [u8; 4],
    pub sphere_size: f64,
    pub line_width: f32,
    pub snap_mode: SnapMode,
    pub start_active: bool,
    pub show_coordinates: bool,
}

impl Default for MeasureConfigFile {
    fn default() -> Self {
        MeasureConfigFile::from(&MeasureConfig::default())
    }
}

impl From<&MeasureConfig> for MeasureConfigFile {
    fn from(c: &MeasureConfig) -> Self {
        let col = c.gizmo.text_color;
        Self {
            title: Some(c.title.clone()),
            font_size: c.gizmo.font_size,
            text_color_rgba: [col.r(), col.g(), col.b(), col.a()],
            sphere_size: c.gizmo.sphere_size,
            line_width: c.gizmo.line_width,
            snap_mode: c.snap_mode,
            start_active: c.start_active,
            show_coordinates: c.gizmo.show_coordinates,
        }
    }
}

impl MeasureConfigFile {
    /// Check ranges and build a full configuration.
    pub fn into_config(self) -> MeasureResult<MeasureConfig> {
        if !FONT_SIZE_RANGE.contains(&self.font_size) {
            return Err(MeasureError::invalid_config(format!(
                "font_size {} outside {:?}",
                self.font_size, FONT_SIZE_RANGE
            )));
        }
        if !SPHERE_SIZE_RANGE.contains(&self.sphere_size) {
            return Err(MeasureError::invalid_config(format!(
                "sphere_size {} outside {:?}",
                self.sphere_size, SPHERE_SIZE_RANGE
            )));
        }
        if !(self.line_width > 0.0) {
            return Err(MeasureError::invalid_config(format!(
                "line_width {} must be positive",
                self.line_width
            )));
        }
        let [r, g, b, a] = self.text_color_rgba;
        let defaults = MeasureConfig::default();
        Ok(MeasureConfig {
            title: self.title.unwrap_or(defaults.title),
            gizmo: GizmoSettings {
                font_size: self.font_size,
                text_color: Color32::from_rgba_unmultiplied(r, g, b, a),
                sphere_size: self.sphere_size,
                line_width: self.line_width,
                show_coordinates: self.show_coordinates,
            },
            snap_mode: self.snap_mode,
            start_active: self.start_active,
            native_options: None,
        })
    }
}

impl MeasureConfig {
    /// Parse a JSON configuration.  Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> MeasureResult<Self> {
        let file: MeasureConfigFile = serde_json::from_str(json)?;
        file.into_config().inspect_err(|e| warn!(error = %e, "rejected configuration"))
    }

    /// Serialize the serializable subset as pretty JSON.
    pub fn to_json_string(&self) -> MeasureResult<String> {
        Ok(serde_json::to_string_pretty(&MeasureConfigFile::from(self))?)
    }
}
