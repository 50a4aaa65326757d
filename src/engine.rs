//! The measurement engine: pending point, history, snap mode and gizmo style.
//!
//! One [`MeasureEngine`] exists per editing session.  The host owns it and
//! lends it to the panels and the overlay each frame; observers learn about
//! changes through [`MeasureEngine::subscribe`].

use std::sync::mpsc::Receiver;

use glam::DVec3;
use tracing::debug;

use crate::data::gizmo::GizmoSettings;
use crate::data::measurement::MeasurementLine;
use crate::data::snap::SnapMode;
use crate::events::{EventController, EventFilter, EventKind, LineMeta, MeasureEvent};
use crate::input::{PointerDown, WorldPicker};

/// The in-progress point buffer.  It never holds two points: the second click
/// resolves straight into a [`MeasurementLine`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PointBuffer {
    #[default]
    Empty,
    OnePending(DVec3),
}

impl PointBuffer {
    pub fn pending(&self) -> Option<DVec3> {
        match self {
            PointBuffer::Empty => None,
            PointBuffer::OnePending(p) => Some(*p),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            PointBuffer::Empty => 0,
            PointBuffer::OnePending(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, PointBuffer::Empty)
    }
}

/// What [`MeasureEngine::record_point`] did with a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecordOutcome {
    /// Stored as the first point of a pair.
    Pending(DVec3),
    /// Completed a pair; the new line sits at `index` in the history.
    Completed { index: usize, distance: f64 },
}

pub struct MeasureEngine {
    buffer: PointBuffer,
    history: Vec<MeasurementLine>,
    active: bool,
    snap_mode: SnapMode,
    settings: GizmoSettings,
    events: EventController,
    repaint_requested: bool,
    last_completed: Option<f64>,
}

impl Default for MeasureEngine {
    fn default() -> Self {
        Self::new(GizmoSettings::default(), SnapMode::Free)
    }
}

impl MeasureEngine {
    /// Create an inactive engine with an empty history.
    pub fn new(settings: GizmoSettings, snap_mode: SnapMode) -> Self {
        Self {
            buffer: PointBuffer::Empty,
            history: Vec::new(),
            active: false,
            snap_mode,
            settings,
            events: EventController::new(),
            repaint_requested: false,
            last_completed: None,
        }
    }

    // ── Queries ────────────────────────────────────────────────────────────

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn snap_mode(&self) -> SnapMode {
        self.snap_mode
    }

    pub fn settings(&self) -> &GizmoSettings {
        &self.settings
    }

    pub fn history(&self) -> &[MeasurementLine] {
        &self.history
    }

    pub fn buffer(&self) -> PointBuffer {
        self.buffer
    }

    pub fn pending_point(&self) -> Option<DVec3> {
        self.buffer.pending()
    }

    /// Distance of the most recently completed measurement, while that line
    /// is still in the history.
    pub fn last_distance(&self) -> Option<f64> {
        self.last_completed
    }

    /// Subscribe to engine events matching `filter`.
    pub fn subscribe(&mut self, filter: EventFilter) -> Receiver<MeasureEvent> {
        self.events.subscribe(filter)
    }

    /// Return and reset the pending repaint request.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requested)
    }

    // ── Mutations ──────────────────────────────────────────────────────────

    /// Enable or disable input processing.  Disabling drops a pending point
    /// but keeps the history.
    pub fn set_active(&mut self, active: bool) {
        if !active && !self.buffer.is_empty() {
            self.clear_current();
        }
        if self.active != active {
            self.active = active;
            debug!(active, "measurement tool toggled");
            let mut evt = MeasureEvent::new(EventKind::ACTIVE_CHANGED, self.history.len());
            evt.active = Some(active);
            self.events.emit(evt);
        }
        self.repaint_requested = true;
    }

    /// Feed one resolved click into the point buffer.
    pub fn record_point(&mut self, point: DVec3) -> RecordOutcome {
        self.repaint_requested = true;
        match self.buffer {
            PointBuffer::Empty => {
                self.buffer = PointBuffer::OnePending(point);
                debug!(?point, "first measurement point placed");
                let mut evt = MeasureEvent::new(EventKind::POINT_PLACED, self.history.len());
                evt.point = Some(point);
                self.events.emit(evt);
                RecordOutcome::Pending(point)
            }
            PointBuffer::OnePending(anchor) => {
                let end = self.snap_mode.apply(anchor, point);
                let line = MeasurementLine::new(anchor, end, self.snap_mode);
                let distance = line.distance();
                let index = self.history.len();
                let meta = line_meta(index, &line);
                self.history.push(line);
                self.last_completed = Some(distance);
                self.buffer = PointBuffer::Empty;
                debug!(index, distance, mode = ?self.snap_mode, "measurement completed");

                let mut evt = MeasureEvent::new(EventKind::MEASUREMENT_COMPLETE, self.history.len());
                evt.line = Some(meta);
                self.events.emit(evt);
                RecordOutcome::Completed { index, distance }
            }
        }
    }

    /// Handle a pointer press from the viewport.
    ///
    /// Returns `true` when the press was consumed as a measurement click.
    /// Inactive tool, other buttons, missing modifier and unresolvable
    /// positions are all ignored without side effects.
    pub fn handle_pointer_down(&mut self, event: &PointerDown, picker: &impl WorldPicker) -> bool {
        if !self.active || !event.is_measure_click() {
            return false;
        }
        match picker.pick(event.screen_pos) {
            Some(point) => {
                self.record_point(point);
                true
            }
            None => false,
        }
    }

    /// Drop the pending point, if any.
    pub fn clear_current(&mut self) {
        self.buffer = PointBuffer::Empty;
        debug!("pending measurement point cleared");
        self.events
            .emit(MeasureEvent::new(EventKind::PENDING_CLEARED, self.history.len()));
        self.repaint_requested = true;
    }

    pub fn clear_all_history(&mut self) {
        let removed = self.history.len();
        self.history.clear();
        self.last_completed = None;
        debug!(removed, "measurement history cleared");
        self.events
            .emit(MeasureEvent::new(EventKind::HISTORY_CLEARED, 0));
        self.repaint_requested = true;
    }

    /// Remove the entry at `index`.
    ///
    /// An out-of-range index (for example from a list row rendered before
    /// the history shrank) is a silent no-op: nothing is emitted and `None`
    /// is returned.
    pub fn remove_at(&mut self, index: usize) -> Option<MeasurementLine> {
        if index >= self.history.len() {
            debug!(index, len = self.history.len(), "ignoring stale history index");
            return None;
        }
        // Completed lines are appended, so the newest one is always last.
        if index + 1 == self.history.len() {
            self.last_completed = None;
        }
        let line = self.history.remove(index);
        debug!(index, name = line.name(), "measurement removed");
        let mut evt = MeasureEvent::new(EventKind::MEASUREMENT_REMOVED, self.history.len());
        evt.line = Some(line_meta(index, &line));
        self.events.emit(evt);
        self.repaint_requested = true;
        Some(line)
    }

    /// Change the snap mode used for future pairs.  Recorded lines keep the
    /// mode they were created with.
    pub fn set_snap_mode(&mut self, mode: SnapMode) {
        if self.snap_mode == mode {
            return;
        }
        self.snap_mode = mode;
        debug!(?mode, "snap mode changed");
        let mut evt = MeasureEvent::new(EventKind::SNAP_MODE_CHANGED, self.history.len());
        evt.snap_mode = Some(mode);
        self.events.emit(evt);
        self.repaint_requested = true;
    }

    /// Replace the gizmo style.  Values are taken as given; the UI clamps them.
    pub fn set_gizmo_settings(&mut self, settings: GizmoSettings) {
        self.settings = settings;
        self.events
            .emit(MeasureEvent::new(EventKind::SETTINGS_CHANGED, self.history.len()));
        self.repaint_requested = true;
    }

    /// The host entered its live-run mode.
    pub fn enter_live_run(&mut self) {
        self.clear_current();
    }
}

fn line_meta(index: usize, line: &MeasurementLine) -> LineMeta {
    LineMeta {
        index,
        name: line.name().to_string(),
        start: line.start(),
        end: line.end(),
        distance: line.distance(),
        snap_mode: line.snap_mode(),
    }
}
