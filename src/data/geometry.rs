//! Normalized-space geometry: labeled points, the decision line, and the
//! side-of-line classifier shared by metrics and rendering.

use serde::{Deserialize, Serialize};

/// Binary class label. `Negative` is `0`, `Positive` is `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Negative,
    Positive,
}

impl Label {
    /// Numeric form (`0` or `1`).
    pub fn as_u8(self) -> u8 {
        match self {
            Label::Negative => 0,
            Label::Positive => 1,
        }
    }
}

impl From<Label> for u8 {
    fn from(l: Label) -> Self {
        l.as_u8()
    }
}

/// A labeled sample in normalized `[0,1]×[0,1]` surface coordinates.
///
/// Generated points are not clamped, so `x`/`y` may fall slightly outside
/// the unit square at high noise levels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub actual: Label,
}

impl Point {
    pub fn new(x: f64, y: f64, actual: Label) -> Self {
        Self { x, y, actual }
    }
}

/// Which endpoint of a [`DecisionLine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    First,
    Second,
}

/// The user-placed boundary, given by two endpoints in normalized space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecisionLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Default for DecisionLine {
    fn default() -> Self {
        Self {
            x1: 0.2,
            y1: 0.8,
            x2: 0.8,
            y2: 0.2,
        }
    }
}

impl DecisionLine {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// z-component of `(p - p1) × (p2 - p1)`.
    pub fn cross(&self, x: f64, y: f64) -> f64 {
        (x - self.x1) * (self.y2 - self.y1) - (y - self.y1) * (self.x2 - self.x1)
    }

    /// Both endpoints coincide; the line has no direction.
    pub fn is_degenerate(&self) -> bool {
        self.x1 == self.x2 && self.y1 == self.y2
    }

    pub fn endpoint(&self, which: Endpoint) -> [f64; 2] {
        match which {
            Endpoint::First => [self.x1, self.y1],
            Endpoint::Second => [self.x2, self.y2],
        }
    }

    pub fn set_endpoint(&mut self, which: Endpoint, pos: [f64; 2]) {
        match which {
            Endpoint::First => {
                self.x1 = pos[0];
                self.y1 = pos[1];
            }
            Endpoint::Second => {
                self.x2 = pos[0];
                self.y2 = pos[1];
            }
        }
    }

    /// Every coordinate forced into `[0,1]`; NaN becomes `0`.
    pub fn clamped(&self) -> Self {
        let unit = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
        Self::new(unit(self.x1), unit(self.y1), unit(self.x2), unit(self.y2))
    }

    pub fn midpoint(&self) -> [f64; 2] {
        [(self.x1 + self.x2) * 0.5, (self.y1 + self.y2) * 0.5]
    }
}

/// Predicted label for `point`: `Positive` iff the cross product is strictly
/// positive. A degenerate line yields zero everywhere, hence `Negative`.
pub fn classify(point: &Point, line: &DecisionLine) -> Label {
    classify_xy(point.x, point.y, line)
}

/// [`classify`] for a bare coordinate pair (used for probe points).
pub fn classify_xy(x: f64, y: f64, line: &DecisionLine) -> Label {
    if line.cross(x, y) > 0.0 {
        Label::Positive
    } else {
        Label::Negative
    }
}
