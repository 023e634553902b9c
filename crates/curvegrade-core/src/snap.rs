//! Nearest-target snapping for drag-and-drop widgets.
//!
//! Truss members snap their ends to joints; gears snap their centers to
//! pegs. Both are plain nearest-neighbour searches inside a radius. Once
//! placed, a layout is checked all-or-nothing against the expected answer.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Something a dragged item can snap onto (a joint, a peg).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapTarget {
    pub id: String,
    pub position: Point,
}

impl SnapTarget {
    pub fn new(id: impl Into<String>, position: Point) -> Self {
        Self {
            id: id.into(),
            position,
        }
    }
}

/// The closest target within `radius` of `point`, skipping `exclude`.
pub fn nearest<'a>(
    point: Point,
    targets: &'a [SnapTarget],
    radius: f64,
    exclude: Option<&str>,
) -> Option<&'a SnapTarget> {
    let mut best: Option<(&SnapTarget, f64)> = None;
    for target in targets {
        if exclude == Some(target.id.as_str()) {
            continue;
        }
        let d = point.distance(target.position);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((target, d)),
        }
    }
    best.filter(|&(_, d)| d <= radius).map(|(t, _)| t)
}

/// Where both ends of a segment landed after snapping.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentSnap {
    pub start: Point,
    pub end: Point,
    /// Target id the start snapped to, if any.
    pub start_target: Option<String>,
    /// Target id the end snapped to, if any.
    pub end_target: Option<String>,
}

impl SegmentSnap {
    /// Whether the segment connects exactly the two given targets, in either
    /// direction.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        match (self.start_target.as_deref(), self.end_target.as_deref()) {
            (Some(s), Some(e)) => (s == a && e == b) || (s == b && e == a),
            _ => false,
        }
    }
}

/// Snap both ends of a segment. The end cannot take the target the start
/// already took; ends that find nothing stay where they are.
pub fn snap_segment(start: Point, end: Point, targets: &[SnapTarget], radius: f64) -> SegmentSnap {
    let first = nearest(start, targets, radius, None);
    let second = nearest(end, targets, radius, first.map(|t| t.id.as_str()));

    SegmentSnap {
        start: first.map_or(start, |t| t.position),
        end: second.map_or(end, |t| t.position),
        start_target: first.map(|t| t.id.clone()),
        end_target: second.map(|t| t.id.clone()),
    }
}

/// The peg a dropped item centered at `center` should snap to.
///
/// Only the single nearest peg is considered: if it is out of range or
/// already occupied the item stays unsnapped.
pub fn snap_to_peg<'a>(
    center: Point,
    pegs: &'a [SnapTarget],
    radius: f64,
    occupied: &HashSet<String>,
) -> Option<&'a SnapTarget> {
    let peg = pegs.iter().min_by(|a, b| {
        center
            .distance_squared(a.position)
            .total_cmp(&center.distance_squared(b.position))
    })?;

    if center.distance_squared(peg.position) > radius * radius {
        return None;
    }
    if occupied.contains(&peg.id) {
        tracing::debug!(peg = %peg.id, "nearest peg already occupied");
        return None;
    }
    Some(peg)
}

/// Expected teeth count on each peg for the maximum-reduction gear train.
pub const GEAR_TRAIN_ANSWER: [(&str, u32); 5] =
    [("p1", 8), ("p2", 12), ("p3", 24), ("p4", 12), ("p5", 24)];

/// The two joints the missing truss member must connect.
pub const TRUSS_MEMBER_ANSWER: (&str, &str) = ("G", "H");

pub const GEAR_TRAIN_CORRECT: &str = "Correct! Nice gear train. (Max reduction target achieved.)";
pub const GEAR_TRAIN_RETRY: &str =
    "Not quite. Try using smaller gears early and larger gears later for more reduction.";

/// All-or-nothing result of checking a snapped layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementVerdict {
    /// 100 when correct, 0 otherwise.
    pub score: f64,
    pub correct: bool,
}

impl PlacementVerdict {
    fn from_correct(correct: bool) -> Self {
        Self {
            score: if correct { 100.0 } else { 0.0 },
            correct,
        }
    }
}

/// Check a gear layout given as peg id -> teeth of the gear snapped there.
///
/// Every expected peg must carry a gear with exactly the expected teeth.
/// Gears on pegs not listed in `expected` are ignored.
pub fn gear_train_score(placed: &HashMap<String, u32>, expected: &[(&str, u32)]) -> PlacementVerdict {
    let correct = expected
        .iter()
        .all(|&(peg, teeth)| placed.get(peg) == Some(&teeth));
    tracing::debug!(pegs = placed.len(), correct, "checked gear train");
    PlacementVerdict::from_correct(correct)
}

/// Feedback line for a gear-train verdict.
pub fn gear_train_message(verdict: &PlacementVerdict) -> &'static str {
    if verdict.correct {
        GEAR_TRAIN_CORRECT
    } else {
        GEAR_TRAIN_RETRY
    }
}

/// Check that a snapped truss member spans the two expected joints.
pub fn truss_member_score(member: &SegmentSnap, joints: (&str, &str)) -> PlacementVerdict {
    PlacementVerdict::from_correct(member.connects(joints.0, joints.1))
}
