//! The single owned session: points, decision line, drag state and the last
//! computed metrics.
//!
//! Every mutator recomputes metrics before returning, so readers always see
//! counts that match the current points and line.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::data::generator::{generate_with, GeneratorParams};
use crate::data::geometry::{DecisionLine, Point};
use crate::data::interaction::{transition, DragState, GrabTolerance, PointerEvent, Viewport};
use crate::data::metrics::{compute_metrics, ConfusionCounts, Metrics};

/// What a pointer event did to the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerOutcome {
    pub drag_started: bool,
    pub line_moved: bool,
    pub drag_ended: bool,
}

pub struct Session {
    points: Vec<Point>,
    line: DecisionLine,
    drag: DragState,
    counts: ConfusionCounts,
    metrics: Metrics,
    noise_level: i32,
    params: GeneratorParams,
    rng: StdRng,
}

impl Session {
    /// New session with freshly generated points.
    ///
    /// `seed` makes generation reproducible; `None` seeds from the OS.
    pub fn new(
        params: GeneratorParams,
        noise_level: i32,
        line: DecisionLine,
        seed: Option<u64>,
    ) -> Self {
        let line = checked_line(line);
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        let mut session = Self {
            points: Vec::new(),
            line,
            drag: DragState::Idle,
            counts: ConfusionCounts::default(),
            metrics: Metrics::default(),
            noise_level,
            params,
            rng,
        };
        session.regenerate(noise_level);
        session
    }

    /// Session over an explicit point set (no generation).
    pub fn with_points(points: Vec<Point>, line: DecisionLine) -> Self {
        let line = checked_line(line);
        let mut session = Self {
            points,
            line,
            drag: DragState::Idle,
            counts: ConfusionCounts::default(),
            metrics: Metrics::default(),
            noise_level: 0,
            params: GeneratorParams::default(),
            rng: StdRng::seed_from_u64(0),
        };
        session.recompute();
        session
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn line(&self) -> &DecisionLine {
        &self.line
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn counts(&self) -> &ConfusionCounts {
        &self.counts
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn noise_level(&self) -> i32 {
        self.noise_level
    }

    pub fn params(&self) -> &GeneratorParams {
        &self.params
    }

    /// Replace all points using `noise_level`. The line is kept.
    pub fn regenerate(&mut self, noise_level: i32) {
        self.noise_level = noise_level;
        self.points = generate_with(&self.params, noise_level, &mut self.rng);
        self.recompute();
        tracing::info!(
            noise_level,
            points = self.points.len(),
            accuracy = self.metrics.accuracy,
            "regenerated data"
        );
    }

    /// Feed one pointer event through the drag state machine.
    pub fn handle_pointer(
        &mut self,
        event: PointerEvent,
        viewport: &Viewport,
        tolerance: &GrabTolerance,
    ) -> PointerOutcome {
        let before = self.drag;
        let t = transition(before, self.line, event, viewport, tolerance);
        self.drag = t.state;
        let outcome = PointerOutcome {
            drag_started: !before.is_dragging() && t.state.is_dragging(),
            line_moved: t.line_changed,
            drag_ended: before.is_dragging() && !t.state.is_dragging(),
        };
        if outcome.drag_started {
            tracing::debug!(state = ?t.state, "drag started");
        }
        if t.line_changed {
            self.line = t.line;
            self.recompute();
            tracing::trace!(line = ?self.line, "line moved");
        }
        if outcome.drag_ended {
            tracing::debug!(line = ?self.line, "drag ended");
        }
        outcome
    }

    fn recompute(&mut self) {
        let (counts, metrics) = compute_metrics(&self.points, &self.line);
        self.counts = counts;
        self.metrics = metrics;
    }
}

/// Endpoints outside `[0,1]` (or NaN) never enter session state.
fn checked_line(line: DecisionLine) -> DecisionLine {
    let clamped = line.clamped();
    if clamped != line {
        tracing::warn!(requested = ?line, stored = ?clamped, "decision line clamped into [0,1]");
    }
    clamped
}
