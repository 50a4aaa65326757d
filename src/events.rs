//! Change notifications emitted by the measurement engine.
//!
//! Observers subscribe through [`EventController::subscribe`] with an
//! [`EventFilter`] and receive [`MeasureEvent`]s on an `mpsc` channel.  Each
//! event carries a set of [`EventKind`] flags, so one occurrence can match
//! several categories (completing a pair is both `MEASUREMENT_COMPLETE` and,
//! through [`EventKind::HISTORY_CHANGED`], a history change).

use std::sync::mpsc::{Receiver, Sender};
use std::time::Instant;

use glam::DVec3;

use crate::data::snap::SnapMode;

// ─────────────────────────────────────────────────────────────────────────────
// EventKind – bitflags
// ─────────────────────────────────────────────────────────────────────────────

/// Bitflags describing the categories an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventKind(pub u32);

impl EventKind {
    /// A first point was stored in the pending buffer.
    pub const POINT_PLACED: Self = Self(1 << 0);
    /// A second point completed a pair and a line was appended to history.
    pub const MEASUREMENT_COMPLETE: Self = Self(1 << 1);
    /// One history entry was removed.
    pub const MEASUREMENT_REMOVED: Self = Self(1 << 2);
    /// The whole history was cleared.
    pub const HISTORY_CLEARED: Self = Self(1 << 3);
    /// The pending point was discarded.
    pub const PENDING_CLEARED: Self = Self(1 << 4);
    /// The tool was enabled or disabled.
    pub const ACTIVE_CHANGED: Self = Self(1 << 5);
    /// The current snap mode changed.
    pub const SNAP_MODE_CHANGED: Self = Self(1 << 6);
    /// Gizmo style settings were replaced.
    pub const SETTINGS_CHANGED: Self = Self(1 << 7);

    /// Any change to the history list.
    pub const HISTORY_CHANGED: Self = Self(
        Self::MEASUREMENT_COMPLETE.0 | Self::MEASUREMENT_REMOVED.0 | Self::HISTORY_CLEARED.0,
    );

    /// Wildcard: matches every event kind.
    pub const ALL: Self = Self(u32::MAX);

    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check whether `self` contains all bits in `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check whether `self` shares at least one bit with `other`.
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for EventKind {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for EventKind {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "EMPTY");
        }
        if *self == EventKind::ALL {
            return write!(f, "ALL");
        }

        let pairs: &[(EventKind, &str)] = &[
            (EventKind::POINT_PLACED, "POINT_PLACED"),
            (EventKind::MEASUREMENT_COMPLETE, "MEASUREMENT_COMPLETE"),
            (EventKind::MEASUREMENT_REMOVED, "MEASUREMENT_REMOVED"),
            (EventKind::HISTORY_CLEARED, "HISTORY_CLEARED"),
            (EventKind::PENDING_CLEARED, "PENDING_CLEARED"),
            (EventKind::ACTIVE_CHANGED, "ACTIVE_CHANGED"),
            (EventKind::SNAP_MODE_CHANGED, "SNAP_MODE_CHANGED"),
            (EventKind::SETTINGS_CHANGED, "SETTINGS_CHANGED"),
        ];

        let mut names = Vec::new();
        let mut known_bits = 0u32;
        for (kind, name) in pairs {
            known_bits |= kind.0;
            if self.contains(*kind) {
                names.push((*name).to_string());
            }
        }
        let extra = self.0 & !known_bits;
        if extra != 0 {
            names.push(format!("0x{extra:x}"));
        }
        write!(f, "{}", names.join("|"))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// MeasureEvent
// ─────────────────────────────────────────────────────────────────────────────

/// Payload for events that concern one history entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LineMeta {
    /// Index of the entry at the time of the event.
    pub index: usize,
    pub name: String,
    pub start: DVec3,
    pub end: DVec3,
    pub distance: f64,
    pub snap_mode: SnapMode,
}

/// An event emitted by the engine.
#[derive(Debug, Clone)]
pub struct MeasureEvent {
    pub kinds: EventKind,
    /// Seconds since the controller was created, set on emit.
    pub timestamp: f64,
    /// History length after the change.
    pub history_len: usize,
    /// Point stored by `POINT_PLACED`.
    pub point: Option<DVec3>,
    /// Entry added or removed.
    pub line: Option<LineMeta>,
    pub active: Option<bool>,
    pub snap_mode: Option<SnapMode>,
}

impl MeasureEvent {
    pub fn new(kinds: EventKind, history_len: usize) -> Self {
        Self {
            kinds,
            timestamp: 0.0,
            history_len,
            point: None,
            line: None,
            active: None,
            snap_mode: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventFilter
// ─────────────────────────────────────────────────────────────────────────────

/// OR-mask selecting which categories a subscriber receives.
#[derive(Debug, Clone, Copy)]
pub struct EventFilter {
    pub mask: EventKind,
}

impl EventFilter {
    pub const fn all() -> Self {
        Self {
            mask: EventKind::ALL,
        }
    }

    pub const fn only(mask: EventKind) -> Self {
        Self { mask }
    }

    /// Filter for the "history changed" notification.
    pub const fn history() -> Self {
        Self::only(EventKind::HISTORY_CHANGED)
    }

    #[inline]
    pub fn matches(&self, event: &MeasureEvent) -> bool {
        event.kinds.intersects(self.mask)
    }
}

impl Default for EventFilter {
    fn default() -> Self {
        Self::all()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventController
// ─────────────────────────────────────────────────────────────────────────────

struct Subscriber {
    filter: EventFilter,
    sender: Sender<MeasureEvent>,
}

/// Fan-out of engine events to any number of subscribers.
///
/// Owned by the engine and driven from the UI thread only, so no locking.
pub struct EventController {
    subscribers: Vec<Subscriber>,
    start_instant: Instant,
}

impl EventController {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            start_instant: Instant::now(),
        }
    }

    /// Subscribe to events matching `filter`.
    pub fn subscribe(&mut self, filter: EventFilter) -> Receiver<MeasureEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        self.subscribers.push(Subscriber { filter, sender: tx });
        rx
    }

    pub fn subscribe_all(&mut self) -> Receiver<MeasureEvent> {
        self.subscribe(EventFilter::all())
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Deliver `event` to every matching subscriber.
    ///
    /// Subscribers whose receiver has been dropped are removed when a send to
    /// them fails.
    pub fn emit(&mut self, mut event: MeasureEvent) {
        event.timestamp = self.start_instant.elapsed().as_secs_f64();
        self.subscribers.retain(|sub| {
            if sub.filter.matches(&event) {
                sub.sender.send(event.clone()).is_ok()
            } else {
                true
            }
        });
    }
}

impl Default for EventController {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_changed_covers_history_kinds_only() {
        let h = EventKind::HISTORY_CHANGED;
        assert!(h.contains(EventKind::MEASUREMENT_COMPLETE));
        assert!(h.contains(EventKind::MEASUREMENT_REMOVED));
        assert!(h.contains(EventKind::HISTORY_CLEARED));
        assert!(!h.intersects(EventKind::POINT_PLACED));
        assert!(!h.intersects(EventKind::PENDING_CLEARED));
        assert!(!h.intersects(EventKind::SETTINGS_CHANGED));
    }

    #[test]
    fn event_kinds_do_not_overlap() {
        let all_kinds = [
            EventKind::POINT_PLACED,
            EventKind::MEASUREMENT_COMPLETE,
            EventKind::MEASUREMENT_REMOVED,
            EventKind::HISTORY_CLEARED,
            EventKind::PENDING_CLEARED,
            EventKind::ACTIVE_CHANGED,
            EventKind::SNAP_MODE_CHANGED,
            EventKind::SETTINGS_CHANGED,
        ];
        for (i, a) in all_kinds.iter().enumerate() {
            for (j, b) in all_kinds.iter().enumerate() {
                if i != j {
                    assert!(!a.intersects(*b), "bits {i} and {j} overlap");
                }
            }
        }
    }

    #[test]
    fn filtered_delivery() {
        let mut ctrl = EventController::new();
        let rx_all = ctrl.subscribe_all();
        let rx_history = ctrl.subscribe(EventFilter::history());

        ctrl.emit(MeasureEvent::new(EventKind::POINT_PLACED, 0));
        assert!(rx_all.try_recv().is_ok());
        assert!(rx_history.try_recv().is_err());

        ctrl.emit(MeasureEvent::new(EventKind::MEASUREMENT_COMPLETE, 1));
        assert!(rx_all.try_recv().is_ok());
        let evt = rx_history.try_recv().unwrap();
        assert_eq!(evt.history_len, 1);
    }

    #[test]
    fn dropped_receiver_is_pruned() {
        let mut ctrl = EventController::new();
        let rx1 = ctrl.subscribe_all();
        let rx2 = ctrl.subscribe_all();
        drop(rx1);

        ctrl.emit(MeasureEvent::new(EventKind::ACTIVE_CHANGED, 0));
        assert!(rx2.try_recv().is_ok());
        assert_eq!(ctrl.subscriber_count(), 1);
    }

    #[test]
    fn timestamp_set_on_emit() {
        let mut ctrl = EventController::new();
        let rx = ctrl.subscribe_all();
        std::thread::sleep(std::time::Duration::from_millis(5));
        ctrl.emit(MeasureEvent::new(EventKind::SNAP_MODE_CHANGED, 0));
        assert!(rx.try_recv().unwrap().timestamp > 0.0);
    }

    #[test]
    fn event_kind_display() {
        assert_eq!(EventKind::POINT_PLACED.to_string(), "POINT_PLACED");
        assert_eq!(
            EventKind::HISTORY_CHANGED.to_string(),
            "MEASUREMENT_COMPLETE|MEASUREMENT_REMOVED|HISTORY_CLEARED"
        );
        assert_eq!(EventKind::ALL.to_string(), "ALL");
        assert_eq!(EventKind(0).to_string(), "EMPTY");
        assert!(EventKind(1 << 31).to_string().starts_with("0x"));
    }
}
