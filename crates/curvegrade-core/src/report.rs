//! Grade report types with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::AttemptStatus;
use crate::similarity::ComparisonResult;

/// What the grader concluded about a drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GradeOutcome {
    /// No drawing was submitted.
    Empty,
    /// The longest stroke had too few samples.
    TooShort { points: usize },
    /// The curve was compared against the reference.
    Scored(ComparisonResult),
}

impl GradeOutcome {
    /// The score for this outcome; rejected drawings score zero.
    pub fn score(&self) -> f64 {
        match self {
            GradeOutcome::Scored(c) => c.score,
            GradeOutcome::Empty | GradeOutcome::TooShort { .. } => 0.0,
        }
    }

    /// Distance diagnostics, when the curve was actually compared.
    pub fn comparison(&self) -> Option<&ComparisonResult> {
        match self {
            GradeOutcome::Scored(c) => Some(c),
            _ => None,
        }
    }
}

/// The result of grading one attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the attempt was graded.
    pub graded_at: DateTime<Utc>,
    /// Problem the attempt was graded against.
    pub problem_id: String,
    /// Detailed outcome.
    pub outcome: GradeOutcome,
    /// Score in `[0, 100]`.
    pub score: f64,
    /// Whether the score reached the problem's pass threshold.
    pub pass: bool,
    /// How the attempt should be recorded.
    pub status: AttemptStatus,
    /// Feedback shown to the user.
    pub message: String,
}

impl GradeReport {
    /// Value a best-score-per-problem record should hold after this attempt:
    /// the rounded score, never lower than `previous`.
    pub fn best_score(&self, previous: Option<f64>) -> f64 {
        let current = self.score.round().clamp(0.0, 100.0);
        previous.map_or(current, |p| p.max(current))
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: GradeReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(score: f64) -> GradeReport {
        GradeReport {
            id: Uuid::nil(),
            graded_at: Utc::now(),
            problem_id: "p".into(),
            outcome: GradeOutcome::Scored(ComparisonResult {
                mean_distance: 0.1,
                hausdorff_distance: 0.2,
                score,
            }),
            score,
            pass: score >= 60.0,
            status: if score >= 60.0 {
                AttemptStatus::Solved
            } else {
                AttemptStatus::Attempted
            },
            message: String::new(),
        }
    }

    #[test]
    fn best_score_keeps_maximum() {
        let r = report(71.6);
        assert_eq!(r.best_score(None), 72.0);
        assert_eq!(r.best_score(Some(50.0)), 72.0);
        assert_eq!(r.best_score(Some(90.0)), 90.0);
    }

    #[test]
    fn rejected_outcomes_score_zero() {
        assert_eq!(GradeOutcome::Empty.score(), 0.0);
        assert_eq!(GradeOutcome::TooShort { points: 3 }.score(), 0.0);
        assert!(GradeOutcome::Empty.comparison().is_none());
    }

    #[test]
    fn outcome_json_is_tagged() {
        let json = serde_json::to_value(GradeOutcome::TooShort { points: 9 }).unwrap();
        assert_eq!(json["kind"], "too_short");
        assert_eq!(json["points"], 9);

        let scored = serde_json::to_value(report(80.0).outcome).unwrap();
        assert_eq!(scored["kind"], "scored");
        assert_eq!(scored["score"], 80.0);
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.json");
        let r = report(65.0);
        r.save_json(&path).unwrap();

        let loaded = GradeReport::load_json(&path).unwrap();
        assert_eq!(loaded.score, 65.0);
        assert_eq!(loaded.status, AttemptStatus::Solved);
        assert_eq!(loaded.outcome, r.outcome);
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = GradeReport::load_json(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read report"));
    }
}
