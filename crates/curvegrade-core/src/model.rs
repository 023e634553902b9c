//! Core data model types for curvegrade.
//!
//! A [`ProblemDescriptor`] carries everything the grader needs for one
//! problem type: the reference curve, the plotting rectangle, and the
//! scoring thresholds. A [`Drawing`] is the raw user input for one attempt.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GradeError;
use crate::geometry::Point;
use crate::normalize::PlotRect;

/// Id of the built-in steel stress–strain problem.
pub const STRESS_STRAIN_STEEL: &str = "stress-strain-steel";

/// Tunable constants of the grading pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingThresholds {
    /// Number of points both curves are resampled to.
    #[serde(default = "default_resample_count")]
    pub resample_count: usize,
    /// Minimum score counted as solved.
    #[serde(default = "default_pass_score")]
    pub pass_score: f64,
    /// Mean distance (normalized units) at which the mean score reaches zero.
    #[serde(default = "default_max_mean_distance")]
    pub max_mean_distance: f64,
    /// Hausdorff distance above which the flat penalty applies.
    #[serde(default = "default_max_hausdorff")]
    pub max_hausdorff: f64,
    /// Points subtracted when the Hausdorff ceiling is exceeded.
    #[serde(default = "default_hausdorff_penalty")]
    pub hausdorff_penalty: f64,
    /// Fewer raw samples than this in the longest stroke is "too short".
    #[serde(default = "default_min_stroke_points")]
    pub min_stroke_points: usize,
}

impl Default for GradingThresholds {
    fn default() -> Self {
        Self {
            resample_count: default_resample_count(),
            pass_score: default_pass_score(),
            max_mean_distance: default_max_mean_distance(),
            max_hausdorff: default_max_hausdorff(),
            hausdorff_penalty: default_hausdorff_penalty(),
            min_stroke_points: default_min_stroke_points(),
        }
    }
}

fn default_resample_count() -> usize {
    160
}
fn default_pass_score() -> f64 {
    60.0
}
fn default_max_mean_distance() -> f64 {
    0.35
}
fn default_max_hausdorff() -> f64 {
    0.22
}
fn default_hausdorff_penalty() -> f64 {
    35.0
}
fn default_min_stroke_points() -> usize {
    10
}

/// One gradable problem type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDescriptor {
    /// Unique identifier (e.g. "stress-strain-steel").
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Instruction shown to the user.
    #[serde(default)]
    pub prompt: String,
    /// Appended to the message of a failed attempt.
    #[serde(default)]
    pub hint: Option<String>,
    /// Plotting rectangle in raw space.
    pub plot: PlotRect,
    /// Scoring constants.
    #[serde(default)]
    pub thresholds: GradingThresholds,
    /// Expected curve in normalized space.
    pub reference: Vec<Point>,
}

impl ProblemDescriptor {
    /// The steel stress–strain problem: linear elastic rise, a yield dip,
    /// strain hardening up to the ultimate strength, then necking.
    pub fn stress_strain_steel() -> Self {
        Self {
            id: STRESS_STRAIN_STEEL.into(),
            name: "Stress-strain curve (steel)".into(),
            prompt: "Draw the stress–strain curve for steel.".into(),
            hint: Some("Steel has a clear yield point.".into()),
            plot: PlotRect {
                origin_x: 80.0,
                origin_y: 40.0,
                width: 560.0,
                height: 350.0,
            },
            thresholds: GradingThresholds::default(),
            reference: vec![
                Point::new(0.0, 0.0),
                Point::new(0.18, 0.55),
                Point::new(0.27, 0.5),
                Point::new(0.55, 0.78),
                Point::new(0.92, 0.6),
            ],
        }
    }

    /// Look up a built-in problem by id.
    pub fn builtin(id: &str) -> Option<Self> {
        match id {
            STRESS_STRAIN_STEEL => Some(Self::stress_strain_steel()),
            _ => None,
        }
    }

    /// Ids of every built-in problem.
    pub fn builtin_ids() -> &'static [&'static str] {
        &[STRESS_STRAIN_STEEL]
    }

    /// Reject descriptors the grader cannot run with.
    pub fn validate(&self) -> Result<(), GradeError> {
        let invalid = |reason: &str| GradeError::InvalidProblem {
            id: self.id.clone(),
            reason: reason.to_string(),
        };

        self.plot.validate()?;
        if self.reference.is_empty() {
            return Err(invalid("reference curve has no points"));
        }
        if self.thresholds.resample_count < 2 {
            return Err(invalid("resample_count must be at least 2"));
        }
        if !is_positive(self.thresholds.max_mean_distance) {
            return Err(invalid("max_mean_distance must be positive"));
        }
        if !is_positive(self.thresholds.max_hausdorff) {
            return Err(invalid("max_hausdorff must be positive"));
        }
        Ok(())
    }
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Raw freehand input: one entry per continuous pointer drag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    #[serde(default)]
    pub strokes: Vec<Vec<Point>>,
}

impl Drawing {
    pub fn new(strokes: Vec<Vec<Point>>) -> Self {
        Self { strokes }
    }

    /// Whether the drawing contains no samples at all.
    pub fn is_empty(&self) -> bool {
        self.strokes.iter().all(|s| s.is_empty())
    }
}

/// How an attempt is recorded downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttemptStatus {
    Solved,
    Attempted,
}

impl fmt::Display for AttemptStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptStatus::Solved => write!(f, "solved"),
            AttemptStatus::Attempted => write!(f, "attempted"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_default() {
        let t = GradingThresholds::default();
        assert_eq!(t.resample_count, 160);
        assert_eq!(t.pass_score, 60.0);
        assert_eq!(t.max_mean_distance, 0.35);
        assert_eq!(t.max_hausdorff, 0.22);
        assert_eq!(t.hausdorff_penalty, 35.0);
        assert_eq!(t.min_stroke_points, 10);
    }

    #[test]
    fn builtin_lookup() {
        let steel = ProblemDescriptor::builtin(STRESS_STRAIN_STEEL).unwrap();
        assert_eq!(steel.reference.len(), 5);
        assert_eq!(steel.plot.width, 560.0);
        assert!(steel.validate().is_ok());
        assert!(ProblemDescriptor::builtin("aluminum").is_none());
    }

    #[test]
    fn validate_rejects_empty_reference() {
        let mut p = ProblemDescriptor::stress_strain_steel();
        p.reference.clear();
        let err = p.validate().unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("no points"));
    }

    #[test]
    fn validate_rejects_nan_threshold() {
        let mut p = ProblemDescriptor::stress_strain_steel();
        p.thresholds.max_mean_distance = f64::NAN;
        assert!(p.validate().is_err());
    }

    #[test]
    fn drawing_emptiness() {
        assert!(Drawing::default().is_empty());
        assert!(Drawing::new(vec![vec![], vec![]]).is_empty());
        assert!(!Drawing::new(vec![vec![Point::ORIGIN]]).is_empty());
    }

    #[test]
    fn drawing_parses_from_json() {
        let json = r#"{"strokes": [[{"x": 1.0, "y": 2.0}, {"x": 3.0, "y": 4.0}]]}"#;
        let d: Drawing = serde_json::from_str(json).unwrap();
        assert_eq!(d.strokes[0][1], Point::new(3.0, 4.0));
    }

    #[test]
    fn attempt_status_display() {
        assert_eq!(AttemptStatus::Solved.to_string(), "solved");
        assert_eq!(
            serde_json::to_string(&AttemptStatus::Attempted).unwrap(),
            "\"attempted\""
        );
    }
}
