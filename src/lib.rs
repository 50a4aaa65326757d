//! Viewport measurement tool.
//!
//! Click two points in a 3D viewport (Ctrl or Cmd + left click) to measure the
//! straight-line distance between them.  The second point can be constrained
//! to a single world axis relative to the first.  Completed measurements are
//! kept in a history that can be inspected, pruned and cleared.
//!
//! Module layout:
//! - `engine`: the two-click state machine, history and tool state
//! - `data`: snap modes, measurement lines, gizmo style and status strings
//! - `events`: change notifications for observers of the engine
//! - `input`: pointer events and the world-point picker seam
//! - `overlay`: host-independent drawing of lines, markers and labels
//! - `panels`: tool, style and history sections of the control window
//! - `viewport`: orbit camera, demo scene and picking for the egui host
//! - `app`: eframe shell and [`run_viewport_measure`]

pub mod app;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod events;
pub mod input;
pub mod overlay;
pub mod panels;
pub mod viewport;

pub use app::{run_viewport_measure, MeasureApp};
pub use config::{MeasureConfig, MeasureConfigFile};
pub use data::gizmo::GizmoSettings;
pub use data::measurement::MeasurementLine;
pub use data::snap::{apply_axis_snap, SnapMode};
pub use engine::{MeasureEngine, PointBuffer, RecordOutcome};
pub use error::{MeasureError, MeasureResult};
pub use events::{EventController, EventFilter, EventKind, LineMeta, MeasureEvent};
pub use input::{KeyModifiers, PointerButton, PointerDown, WorldPicker};
pub use overlay::{draw_overlay, LabelStyle, OverlayPainter};
