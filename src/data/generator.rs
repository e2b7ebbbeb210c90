//! Synthetic two-cluster data generation.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::data::geometry::{Label, Point};

/// Default total number of generated points (half per class).
pub const TOTAL_POINTS: usize = 200;

/// Cluster layout used by [`generate_with`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorParams {
    /// Total number of points; each class receives `total_points / 2`.
    pub total_points: usize,
    /// Centre of the positive (`actual = 1`) cluster.
    pub positive_center: [f64; 2],
    /// Centre of the negative (`actual = 0`) cluster.
    pub negative_center: [f64; 2],
    /// Width of the uniform spread at noise level 0.
    pub base_spread: f64,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            total_points: TOTAL_POINTS,
            positive_center: [0.7, 0.3],
            negative_center: [0.3, 0.7],
            base_spread: 0.3,
        }
    }
}

impl GeneratorParams {
    /// Full spread width for a noise level: `base_spread + noise_level / 200`.
    ///
    /// The noise level is taken as-is; values outside `0..=100` simply widen
    /// or narrow the clusters further.
    pub fn spread(&self, noise_level: i32) -> f64 {
        self.base_spread + f64::from(noise_level) / 200.0
    }
}

/// Generate the default 200-point data set for `noise_level`.
pub fn generate<R: Rng + ?Sized>(noise_level: i32, rng: &mut R) -> Vec<Point> {
    generate_with(&GeneratorParams::default(), noise_level, rng)
}

/// Generate `params.total_points` points: all positives first, then all
/// negatives. Coordinates are not clamped to the unit square.
pub fn generate_with<R: Rng + ?Sized>(
    params: &GeneratorParams,
    noise_level: i32,
    rng: &mut R,
) -> Vec<Point> {
    let spread = params.spread(noise_level);
    let per_class = params.total_points / 2;
    let mut points = Vec::with_capacity(per_class * 2);

    for (center, label) in [
        (params.positive_center, Label::Positive),
        (params.negative_center, Label::Negative),
    ] {
        for _ in 0..per_class {
            let x = center[0] + (rng.random::<f64>() - 0.5) * spread;
            let y = center[1] + (rng.random::<f64>() - 0.5) * spread;
            points.push(Point::new(x, y, label));
        }
    }
    points
}
