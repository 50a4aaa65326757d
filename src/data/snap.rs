//! Axis snapping for the second point of a measurement.

use egui::Color32;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Constraint applied to the second point of a pair.
///
/// Every axis mode frees exactly one coordinate of the candidate and pins the
/// other two to the anchor; `Free` leaves the candidate untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SnapMode {
    #[default]
    Free,
    AxisX,
    AxisY,
    AxisZ,
}

impl SnapMode {
    /// All modes in dropdown order.
    pub const ALL: [SnapMode; 4] = [
        SnapMode::Free,
        SnapMode::AxisX,
        SnapMode::AxisY,
        SnapMode::AxisZ,
    ];

    /// Label used by the snap-mode dropdown.
    pub fn label(self) -> &'static str {
        match self {
            SnapMode::Free => "Free",
            SnapMode::AxisX => "Axis X",
            SnapMode::AxisY => "Axis Y",
            SnapMode::AxisZ => "Axis Z",
        }
    }

    /// Short tag shown next to history rows.
    pub fn tag(self) -> &'static str {
        match self {
            SnapMode::Free => "FREE",
            SnapMode::AxisX => "X",
            SnapMode::AxisY => "Y",
            SnapMode::AxisZ => "Z",
        }
    }

    /// Annotation appended to the status prompt.
    pub fn status_suffix(self) -> &'static str {
        match self {
            SnapMode::Free => " (Free)",
            SnapMode::AxisX => " (X-Axis)",
            SnapMode::AxisY => " (Y-Axis)",
            SnapMode::AxisZ => " (Z-Axis)",
        }
    }

    /// Color of lines, markers and tags recorded in this mode.
    ///
    /// Both the viewport overlay and the history panel go through this lookup.
    pub fn color(self) -> Color32 {
        match self {
            SnapMode::Free => Color32::YELLOW,
            SnapMode::AxisX => Color32::RED,
            SnapMode::AxisY => Color32::GREEN,
            SnapMode::AxisZ => Color32::BLUE,
        }
    }

    /// Dimmed variant of [`color`](Self::color) used for the live preview segment.
    pub fn preview_color(self) -> Color32 {
        self.color().linear_multiply(0.7)
    }

    /// Pin two coordinates of `candidate` to `anchor`; `Free` returns it unchanged.
    pub fn apply(self, anchor: DVec3, candidate: DVec3) -> DVec3 {
        apply_axis_snap(self, anchor, candidate)
    }
}

impl std::fmt::Display for SnapMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Pin two coordinates of `candidate` to `anchor` according to `mode`.
pub fn apply_axis_snap(mode: SnapMode, anchor: DVec3, candidate: DVec3) -> DVec3 {
    match mode {
        SnapMode::Free => candidate,
        SnapMode::AxisX => DVec3::new(candidate.x, anchor.y, anchor.z),
        SnapMode::AxisY => DVec3::new(anchor.x, candidate.y, anchor.z),
        SnapMode::AxisZ => DVec3::new(anchor.x, anchor.y, candidate.z),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANCHOR: DVec3 = DVec3::new(1.0, 1.0, 1.0);
    const RAW: DVec3 = DVec3::new(5.0, 9.0, -3.0);

    #[test]
    fn free_mode_is_identity() {
        assert_eq!(apply_axis_snap(SnapMode::Free, ANCHOR, RAW), RAW);
    }

    #[test]
    fn axis_modes_free_exactly_one_coordinate() {
        assert_eq!(SnapMode::AxisX.apply(ANCHOR, RAW), DVec3::new(5.0, 1.0, 1.0));
        assert_eq!(SnapMode::AxisY.apply(ANCHOR, RAW), DVec3::new(1.0, 9.0, 1.0));
        assert_eq!(SnapMode::AxisZ.apply(ANCHOR, RAW), DVec3::new(1.0, 1.0, -3.0));
    }

    #[test]
    fn snapping_is_idempotent() {
        for mode in SnapMode::ALL {
            let once = mode.apply(ANCHOR, RAW);
            let twice = mode.apply(ANCHOR, once);
            assert_eq!(once, twice, "mode {mode:?} is not idempotent");
        }
    }

    #[test]
    fn color_lookup_is_fixed() {
        assert_eq!(SnapMode::AxisX.color(), Color32::RED);
        assert_eq!(SnapMode::AxisY.color(), Color32::GREEN);
        assert_eq!(SnapMode::AxisZ.color(), Color32::BLUE);
        assert_eq!(SnapMode::Free.color(), Color32::YELLOW);
    }

    #[test]
    fn preview_color_is_dimmer() {
        let full = SnapMode::AxisX.color();
        let dim = SnapMode::AxisX.preview_color();
        assert!(dim.r() < full.r());
        assert!(dim.a() < full.a());
    }

    #[test]
    fn tags_and_suffixes() {
        assert_eq!(SnapMode::Free.tag(), "FREE");
        assert_eq!(SnapMode::AxisZ.tag(), "Z");
        assert_eq!(SnapMode::AxisY.status_suffix(), " (Y-Axis)");
    }
}
