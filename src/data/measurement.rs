use glam::DVec3;

use super::snap::SnapMode;

/// One completed two-point measurement.
///
/// Fields are private so a line cannot change after it has been recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementLine {
    start: DVec3,
    end: DVec3,
    distance: f64,
    name: String,
    snap_mode: SnapMode,
}

impl MeasurementLine {
    /// Create a line named after the current local time (`Line HH:MM:SS`).
    pub fn new(start: DVec3, end: DVec3, snap_mode: SnapMode) -> Self {
        let name = format!("Line {}", chrono::Local::now().format("%H:%M:%S"));
        Self::with_name(start, end, snap_mode, name)
    }

    /// Create a line with an explicit display name.
    pub fn with_name(start: DVec3, end: DVec3, snap_mode: SnapMode, name: impl Into<String>) -> Self {
        Self {
            start,
            end,
            distance: distance(start, end),
            name: name.into(),
            snap_mode,
        }
    }

    pub fn start(&self) -> DVec3 {
        self.start
    }

    pub fn end(&self) -> DVec3 {
        self.end
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Snap mode that was active when the line was recorded.
    pub fn snap_mode(&self) -> SnapMode {
        self.snap_mode
    }

    pub fn midpoint(&self) -> DVec3 {
        (self.start + self.end) * 0.5
    }
}

/// Euclidean distance between two world points.
pub fn distance(a: DVec3, b: DVec3) -> f64 {
    (a - b).length()
}

/// Format a world point as `(x, y, z)` with two decimals.
pub fn format_point(p: DVec3) -> String {
    format!("({:.2}, {:.2}, {:.2})", p.x, p.y, p.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric_and_euclidean() {
        let pairs = [
            (DVec3::ZERO, DVec3::new(3.0, 4.0, 0.0)),
            (DVec3::new(-1.5, 2.0, 7.0), DVec3::new(4.0, -3.0, 0.25)),
            (DVec3::new(1e3, 1e-3, -5.0), DVec3::new(-2.0, 8.0, 6.0)),
        ];
        for (a, b) in pairs {
            let d = distance(a, b);
            assert_eq!(d, distance(b, a));
            let diff = a - b;
            let expected = (diff.x * diff.x + diff.y * diff.y + diff.z * diff.z).sqrt();
            assert!((d - expected).abs() < 1e-9);
            assert!(d > 0.0);
        }
        let p = DVec3::new(2.0, -7.0, 0.5);
        assert_eq!(distance(p, p), 0.0);
    }

    #[test]
    fn line_derives_distance_and_name() {
        let line = MeasurementLine::new(DVec3::ZERO, DVec3::new(3.0, 4.0, 0.0), SnapMode::Free);
        assert!((line.distance() - 5.0).abs() < 1e-12);
        assert!(line.name().starts_with("Line "));
        // "Line " + HH:MM:SS
        assert_eq!(line.name().len(), 13);
        assert_eq!(line.snap_mode(), SnapMode::Free);
    }

    #[test]
    fn midpoint_and_formatting() {
        let line = MeasurementLine::with_name(
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(2.0, 4.0, -6.0),
            SnapMode::AxisZ,
            "M",
        );
        assert_eq!(line.midpoint(), DVec3::new(1.0, 2.0, -3.0));
        assert_eq!(format_point(line.end()), "(2.00, 4.00, -6.00)");
    }
}
