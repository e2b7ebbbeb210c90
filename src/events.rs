//! Event system for BoundaryPlot.
//!
//! External code can observe the session through [`EventController`]. Each
//! event carries a set of [`EventKind`] flags (bitflags-style) so that a
//! single occurrence can match multiple categories (a noise-slider change is
//! both `NOISE_CHANGED` and `DATA_REGENERATED`, and also `METRICS_UPDATED`).
//!
//! The caller specifies an [`EventFilter`] to receive only the events they
//! care about. The filter is a simple OR mask: an event is delivered when
//! `(event.kinds & filter) != 0`.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex};

use crate::data::geometry::DecisionLine;
use crate::data::interaction::DragState;
use crate::data::metrics::{ConfusionCounts, Metrics};

// ─────────────────────────────────────────────────────────────────────────────
// EventKind – bitflags
// ─────────────────────────────────────────────────────────────────────────────

/// Bitflags describing the *categories* an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventKind(pub u32);

impl EventKind {
    /// The point set was replaced (reset button or noise change).
    pub const DATA_REGENERATED: Self = Self(1 << 0);
    /// The noise slider moved.
    pub const NOISE_CHANGED: Self = Self(1 << 1);
    /// A press grabbed one of the line endpoints.
    pub const DRAG_STARTED: Self = Self(1 << 2);
    /// An endpoint was moved.
    pub const LINE_MOVED: Self = Self(1 << 3);
    /// The active drag ended.
    pub const DRAG_ENDED: Self = Self(1 << 4);
    /// Confusion counts and metrics were recomputed.
    pub const METRICS_UPDATED: Self = Self(1 << 5);
    /// The canvas changed size.
    pub const RESIZE: Self = Self(1 << 6);
    /// A screenshot was taken.
    pub const SCREENSHOT: Self = Self(1 << 7);

    /// Wildcard: matches *every* event kind.
    pub const ALL: Self = Self(u32::MAX);

    /// Check whether `self` contains all bits in `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check whether `self` intersects with `other` (at least one bit in common).
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
            (EventKind::DATA_REGENERATED, "DATA_REGENERATED"),
            (EventKind::NOISE_CHANGED, "NOISE_CHANGED"),
            (EventKind::DRAG_STARTED, "DRAG_STARTED"),
            (EventKind::LINE_MOVED, "LINE_MOVED"),
            (EventKind::DRAG_ENDED, "DRAG_ENDED"),
            (EventKind::METRICS_UPDATED, "METRICS_UPDATED"),
            (EventKind::RESIZE, "RESIZE"),
            (EventKind::SCREENSHOT, "SCREENSHOT"),
        ];
        let names: Vec<&str> = pairs
            .iter()
            .filter(|(k, _)| self.contains(*k))
            .map(|(_, n)| *n)
            .collect();
        if names.is_empty() {
            write!(f, "0x{:x}", self.0)
        } else {
            write!(f, "{}", names.join("|"))
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// LabEvent
// ─────────────────────────────────────────────────────────────────────────────

/// A single event with whatever payload is relevant to its kinds.
#[derive(Debug, Clone)]
pub struct LabEvent {
    pub kinds: EventKind,
    /// Seconds since the controller was created.
    pub timestamp: f64,
    pub noise_level: Option<i32>,
    pub line: Option<DecisionLine>,
    pub drag: Option<DragState>,
    pub counts: Option<ConfusionCounts>,
    pub metrics: Option<Metrics>,
    /// New canvas size in logical pixels (for `RESIZE`).
    pub size: Option<[f32; 2]>,
    /// Where a screenshot was written (for `SCREENSHOT`).
    pub path: Option<String>,
}

impl LabEvent {
    pub fn new(kinds: EventKind) -> Self {
        Self {
            kinds,
            timestamp: 0.0,
            noise_level: None,
            line: None,
            drag: None,
            counts: None,
            metrics: None,
            size: None,
            path: None,
        }
    }
}

/// OR-mask filter over [`EventKind`].
#[derive(Debug, Clone, Copy)]
pub struct EventFilter {
    pub mask: EventKind,
}

impl EventFilter {
    pub fn all() -> Self {
        Self {
            mask: EventKind::ALL,
        }
    }

    pub fn only(mask: EventKind) -> Self {
        Self { mask }
    }

    pub fn matches(&self, event: &LabEvent) -> bool {
        event.kinds.intersects(self.mask)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventController
// ─────────────────────────────────────────────────────────────────────────────

struct Subscriber {
    filter: EventFilter,
    sender: Sender<LabEvent>,
}

struct EventCtrlInner {
    subscribers: Vec<Subscriber>,
    start_instant: std::time::Instant,
}

/// Cloneable handle; all clones share the same subscriber list.
#[derive(Clone)]
pub struct EventController {
    inner: Arc<Mutex<EventCtrlInner>>,
}

impl EventController {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(EventCtrlInner {
                subscribers: Vec::new(),
                start_instant: std::time::Instant::now(),
            })),
        }
    }

    /// Subscribe to events matching `filter`.
    pub fn subscribe(&self, filter: EventFilter) -> Receiver<LabEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        if let Ok(mut inner) = self.inner.lock() {
            inner.subscribers.push(Subscriber { filter, sender: tx });
        }
        rx
    }

    pub fn subscribe_all(&self) -> Receiver<LabEvent> {
        self.subscribe(EventFilter::all())
    }

    /// Deliver `event` to matching subscribers, dropping any whose receiver
    /// has gone away.
    pub fn emit(&self, mut event: LabEvent) {
        let Ok(mut inner) = self.inner.lock() else {
            return;
        };
        event.timestamp = inner.start_instant.elapsed().as_secs_f64();
        inner.subscribers.retain(|sub| {
            if sub.filter.matches(&event) {
                sub.sender.send(event.clone()).is_ok()
            } else {
                true
            }
        });
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().map(|i| i.subscribers.len()).unwrap_or(0)
    }
}

impl Default for EventController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_union_and_intersection() {
        let k = EventKind::LINE_MOVED | EventKind::METRICS_UPDATED;
        assert!(k.contains(EventKind::LINE_MOVED));
        assert!(k.intersects(EventKind::METRICS_UPDATED));
        assert!(!k.intersects(EventKind::RESIZE));
        assert!(EventKind::ALL.contains(EventKind::SCREENSHOT));
    }

    #[test]
    fn display_joins_names() {
        let k = EventKind::DATA_REGENERATED | EventKind::NOISE_CHANGED;
        assert_eq!(k.to_string(), "DATA_REGENERATED|NOISE_CHANGED");
        assert_eq!(EventKind(0).to_string(), "EMPTY");
        assert_eq!(EventKind::ALL.to_string(), "ALL");
    }

    #[test]
    fn subscribers_only_get_matching_events() {
        let ctrl = EventController::new();
        let rx_all = ctrl.subscribe_all();
        let rx_drag = ctrl.subscribe(EventFilter::only(EventKind::DRAG_STARTED | EventKind::DRAG_ENDED));
        let rx_resize = ctrl.subscribe(EventFilter::only(EventKind::RESIZE));

        ctrl.emit(LabEvent::new(EventKind::DRAG_STARTED));

        assert!(rx_all.try_recv().is_ok());
        assert!(rx_drag.try_recv().is_ok());
        assert!(rx_resize.try_recv().is_err());
    }

    #[test]
    fn dropped_receivers_are_pruned() {
        let ctrl = EventController::new();
        let rx = ctrl.subscribe_all();
        drop(rx);
        let _keep = ctrl.subscribe_all();
        ctrl.emit(LabEvent::new(EventKind::RESIZE));
        assert_eq!(ctrl.subscriber_count(), 1);
    }
}
