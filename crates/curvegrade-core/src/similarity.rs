//! Curve similarity scoring.
//!
//! Two point sets are compared with nearest-point distances in both
//! directions. The mean of the two directed means drives the score; the
//! discrete Hausdorff distance adds a flat penalty for any single large
//! excursion that averaging would hide.

use serde::{Deserialize, Serialize};

use crate::error::GradeError;
use crate::geometry::Point;
use crate::model::GradingThresholds;

/// Distance diagnostics and the resulting score for one comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Average of the two directed mean nearest-point distances.
    pub mean_distance: f64,
    /// Largest nearest-point distance in either direction.
    pub hausdorff_distance: f64,
    /// Similarity in `[0, 100]`.
    pub score: f64,
}

impl ComparisonResult {
    /// Whether the score meets `pass_score`.
    pub fn passes(&self, pass_score: f64) -> bool {
        self.score >= pass_score
    }
}

/// Mean and max of the per-point nearest distances from one set to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectedDistance {
    pub mean: f64,
    pub max: f64,
}

/// For every point of `from`, the distance to its nearest point in `to`.
///
/// Both slices must be non-empty.
pub fn directed_distance(from: &[Point], to: &[Point]) -> DirectedDistance {
    let mut sum = 0.0;
    let mut max = 0.0f64;
    for &a in from {
        let best = to
            .iter()
            .map(|&b| a.distance(b))
            .fold(f64::INFINITY, f64::min);
        sum += best;
        max = max.max(best);
    }
    DirectedDistance {
        mean: sum / from.len() as f64,
        max,
    }
}

/// Compare a user curve against a reference curve.
///
/// Inputs are normally both resampled to the same length, but the metric
/// does not pair points by index.
pub fn compare(
    user: &[Point],
    reference: &[Point],
    thresholds: &GradingThresholds,
) -> Result<ComparisonResult, GradeError> {
    if user.is_empty() || reference.is_empty() {
        return Err(GradeError::EmptyPolyline);
    }

    let forward = directed_distance(user, reference);
    let backward = directed_distance(reference, user);

    let mean_distance = (forward.mean + backward.mean) / 2.0;
    let hausdorff_distance = forward.max.max(backward.max);

    let mean_score = 100.0 * (1.0 - mean_distance / thresholds.max_mean_distance);
    let penalty = if hausdorff_distance > thresholds.max_hausdorff {
        thresholds.hausdorff_penalty
    } else {
        0.0
    };
    // NaN survives `clamp`; a comparison that cannot be measured scores 0.
    let score = match (mean_score - penalty).clamp(0.0, 100.0) {
        s if s.is_nan() => 0.0,
        s => s,
    };

    tracing::debug!(
        mean_distance,
        hausdorff_distance,
        mean_score,
        penalty,
        score,
        "compared curves"
    );

    Ok(ComparisonResult {
        mean_distance,
        hausdorff_distance,
        score,
    })
}
