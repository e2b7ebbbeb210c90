//! Pointer-driven endpoint dragging as a pure state machine.
//!
//! [`transition`] takes the current [`DragState`], the line, and one
//! [`PointerEvent`] in surface pixels, and returns the next state together
//! with the (possibly moved) line. It never touches metrics or rendering;
//! the session decides what to recompute from the returned [`Transition`].

use serde::{Deserialize, Serialize};

use crate::data::geometry::{DecisionLine, Endpoint};

/// Active drag target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DragState {
    #[default]
    Idle,
    DraggingEndpoint1,
    DraggingEndpoint2,
}

impl DragState {
    pub fn dragging(endpoint: Endpoint) -> Self {
        match endpoint {
            Endpoint::First => DragState::DraggingEndpoint1,
            Endpoint::Second => DragState::DraggingEndpoint2,
        }
    }

    /// The endpoint being dragged, if any.
    pub fn endpoint(self) -> Option<Endpoint> {
        match self {
            DragState::Idle => None,
            DragState::DraggingEndpoint1 => Some(Endpoint::First),
            DragState::DraggingEndpoint2 => Some(Endpoint::Second),
        }
    }

    pub fn is_dragging(self) -> bool {
        self != DragState::Idle
    }
}

/// Pointer input in surface-relative pixels (origin top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    /// A release anywhere, inside the surface or not.
    Release,
}

/// Current pixel size of the drawing surface.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero or negative extent in either axis.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Pixel position to normalized coordinates (no clamping).
    pub fn normalize(&self, x: f32, y: f32) -> [f64; 2] {
        [
            f64::from(x) / f64::from(self.width),
            f64::from(y) / f64::from(self.height),
        ]
    }

    /// Normalized coordinates to pixel position.
    pub fn denormalize(&self, p: [f64; 2]) -> [f32; 2] {
        [
            (p[0] * f64::from(self.width)) as f32,
            (p[1] * f64::from(self.height)) as f32,
        ]
    }
}

/// How close a press must land to an endpoint to grab it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrabTolerance {
    /// Distance between the press and the denormalized endpoint, in pixels.
    Pixels(f32),
    /// Distance in normalized `[0,1]` units.
    Normalized(f64),
}

impl Default for GrabTolerance {
    fn default() -> Self {
        GrabTolerance::Pixels(12.0)
    }
}

impl GrabTolerance {
    fn is_within(&self, press_px: [f32; 2], endpoint: [f64; 2], viewport: &Viewport) -> bool {
        match *self {
            GrabTolerance::Pixels(tol) => {
                let e = viewport.denormalize(endpoint);
                let (dx, dy) = (press_px[0] - e[0], press_px[1] - e[1]);
                (dx * dx + dy * dy).sqrt() < tol
            }
            GrabTolerance::Normalized(tol) => {
                let p = viewport.normalize(press_px[0], press_px[1]);
                let (dx, dy) = (p[0] - endpoint[0], p[1] - endpoint[1]);
                (dx * dx + dy * dy).sqrt() < tol
            }
        }
    }
}

/// The endpoint a press at pixel `(x, y)` would grab, testing endpoint 1
/// first.
pub fn endpoint_at(
    line: &DecisionLine,
    x: f32,
    y: f32,
    viewport: &Viewport,
    tolerance: &GrabTolerance,
) -> Option<Endpoint> {
    if viewport.is_empty() {
        return None;
    }
    [Endpoint::First, Endpoint::Second]
        .into_iter()
        .find(|&e| tolerance.is_within([x, y], line.endpoint(e), viewport))
}

/// Result of applying one pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub state: DragState,
    pub line: DecisionLine,
    /// `true` when an endpoint was written (metrics must be recomputed).
    pub line_changed: bool,
}

/// Apply `event` to `(state, line)`.
///
/// Endpoint 1 is tested before endpoint 2, so when both are in reach the
/// first one wins. Moves are clamped into `[0,1]` before being stored. With
/// an empty viewport, presses and moves are ignored; a release always ends
/// the drag.
pub fn transition(
    state: DragState,
    line: DecisionLine,
    event: PointerEvent,
    viewport: &Viewport,
    tolerance: &GrabTolerance,
) -> Transition {
    let unchanged = Transition {
        state,
        line,
        line_changed: false,
    };

    match event {
        PointerEvent::Release => Transition {
            state: DragState::Idle,
            line,
            line_changed: false,
        },
        _ if viewport.is_empty() => unchanged,
        PointerEvent::Press { x, y } => {
            if state.is_dragging() {
                return unchanged;
            }
            match endpoint_at(&line, x, y, viewport, tolerance) {
                Some(e) => Transition {
                    state: DragState::dragging(e),
                    line,
                    line_changed: false,
                },
                None => unchanged,
            }
        }
        PointerEvent::Move { x, y } => {
            let Some(endpoint) = state.endpoint() else {
                return unchanged;
            };
            let p = viewport.normalize(x, y);
            let clamped = [p[0].clamp(0.0, 1.0), p[1].clamp(0.0, 1.0)];
            let mut moved = line;
            moved.set_endpoint(endpoint, clamped);
            Transition {
                state,
                line: moved,
                line_changed: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VP: Viewport = Viewport {
        width: 500.0,
        height: 400.0,
    };

    fn px(line: &DecisionLine, e: Endpoint) -> [f32; 2] {
        VP.denormalize(line.endpoint(e))
    }

    #[test]
    fn press_near_endpoint_two_starts_drag() {
        let line = DecisionLine::default();
        let [x, y] = px(&line, Endpoint::Second);
        let t = transition(
            DragState::Idle,
            line,
            PointerEvent::Press { x: x + 3.0, y: y - 2.0 },
            &VP,
            &GrabTolerance::default(),
        );
        assert_eq!(t.state, DragState::DraggingEndpoint2);
        assert!(!t.line_changed);
    }

    #[test]
    fn press_far_from_endpoints_stays_idle() {
        let line = DecisionLine::default();
        let t = transition(
            DragState::Idle,
            line,
            PointerEvent::Press { x: 250.0, y: 200.0 },
            &VP,
            &GrabTolerance::default(),
        );
        assert_eq!(t.state, DragState::Idle);
    }

    #[test]
    fn coincident_endpoints_prefer_first() {
        let line = DecisionLine::new(0.5, 0.5, 0.5, 0.5);
        let t = transition(
            DragState::Idle,
            line,
            PointerEvent::Press { x: 250.0, y: 200.0 },
            &VP,
            &GrabTolerance::default(),
        );
        assert_eq!(t.state, DragState::DraggingEndpoint1);
    }

    #[test]
    fn move_clamps_into_unit_square() {
        let line = DecisionLine::default();
        let t = transition(
            DragState::DraggingEndpoint1,
            line,
            PointerEvent::Move { x: -0.2 * 500.0, y: 1.3 * 400.0 },
            &VP,
            &GrabTolerance::default(),
        );
        assert!(t.line_changed);
        assert_eq!(t.line.endpoint(Endpoint::First), [0.0, 1.0]);
        assert_eq!(t.line.endpoint(Endpoint::Second), [0.8, 0.2]);
    }

    #[test]
    fn move_while_idle_is_ignored() {
        let line = DecisionLine::default();
        let t = transition(
            DragState::Idle,
            line,
            PointerEvent::Move { x: 10.0, y: 10.0 },
            &VP,
            &GrabTolerance::default(),
        );
        assert_eq!(t.line, line);
        assert!(!t.line_changed);
    }

    #[test]
    fn release_always_returns_to_idle() {
        let line = DecisionLine::default();
        for s in [
            DragState::Idle,
            DragState::DraggingEndpoint1,
            DragState::DraggingEndpoint2,
        ] {
            let t = transition(s, line, PointerEvent::Release, &Viewport::default(), &GrabTolerance::default());
            assert_eq!(t.state, DragState::Idle);
        }
    }

    #[test]
    fn empty_viewport_ignores_press() {
        let line = DecisionLine::new(0.0, 0.0, 1.0, 1.0);
        let t = transition(
            DragState::Idle,
            line,
            PointerEvent::Press { x: 0.0, y: 0.0 },
            &Viewport::new(0.0, 300.0),
            &GrabTolerance::default(),
        );
        assert_eq!(t.state, DragState::Idle);
    }

    #[test]
    fn normalized_tolerance_measures_in_unit_space() {
        let line = DecisionLine::default();
        let tol = GrabTolerance::Normalized(0.05);
        // 0.04 to the right of endpoint 1 in normalized space
        let t = transition(
            DragState::Idle,
            line,
            PointerEvent::Press { x: 0.24 * 500.0, y: 0.8 * 400.0 },
            &VP,
            &tol,
        );
        assert_eq!(t.state, DragState::DraggingEndpoint1);
    }
}
