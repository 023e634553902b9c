//! Turns raw strokes into the candidate curve that gets graded.

use crate::geometry::Point;
use crate::model::GradingThresholds;
use crate::normalize::PlotRect;

/// The result of preparing a drawing for grading.
#[derive(Debug, Clone, PartialEq)]
pub enum Candidate {
    /// Nothing was drawn.
    Empty,
    /// The longest stroke has fewer samples than the minimum.
    TooShort { points: usize },
    /// Normalized, X-sorted candidate curve anchored at the origin.
    Ready(Vec<Point>),
}

/// Pick the stroke to grade: the one with the most samples.
///
/// Strokes are never merged. On ties the earliest stroke wins.
pub fn longest_stroke(strokes: &[Vec<Point>]) -> Option<&[Point]> {
    strokes
        .iter()
        .reduce(|best, s| if s.len() > best.len() { s } else { best })
        .map(Vec::as_slice)
}

/// Select, validate, and normalize the candidate stroke.
///
/// The grading domain treats the answer as a single-valued function of the
/// horizontal axis, so samples are ordered by raw X before normalizing, and
/// the first sample is pinned to the normalized origin.
pub fn prepare_candidate(
    strokes: &[Vec<Point>],
    plot: &PlotRect,
    thresholds: &GradingThresholds,
) -> Candidate {
    let Some(stroke) = longest_stroke(strokes).filter(|s| !s.is_empty()) else {
        return Candidate::Empty;
    };

    if stroke.len() < thresholds.min_stroke_points {
        tracing::debug!(
            points = stroke.len(),
            min = thresholds.min_stroke_points,
            "candidate stroke too short"
        );
        return Candidate::TooShort {
            points: stroke.len(),
        };
    }

    let mut sorted = stroke.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x));

    let mut curve: Vec<Point> = sorted.into_iter().map(|p| plot.to_normalized(p)).collect();
    curve[0] = Point::ORIGIN;

    Candidate::Ready(curve)
}
