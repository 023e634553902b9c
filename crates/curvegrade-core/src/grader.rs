//! The curve grader: preprocess, resample, compare, and phrase the verdict.

use chrono::Utc;
use uuid::Uuid;

use crate::error::GradeError;
use crate::geometry::Point;
use crate::model::{AttemptStatus, Drawing, ProblemDescriptor};
use crate::preprocess::{prepare_candidate, Candidate};
use crate::report::{GradeOutcome, GradeReport};
use crate::resample::resample;
use crate::similarity::compare;

pub const EMPTY_MESSAGE: &str = "Draw your curve first.";
pub const TOO_SHORT_MESSAGE: &str = "Your curve is too short. Draw a longer continuous curve.";

/// Grades drawings against one problem.
///
/// The reference curve is resampled once at construction; grading itself
/// holds no mutable state.
#[derive(Debug, Clone)]
pub struct CurveGrader {
    problem: ProblemDescriptor,
    reference: Vec<Point>,
}

impl CurveGrader {
    pub fn new(problem: ProblemDescriptor) -> Result<Self, GradeError> {
        problem.validate()?;
        let reference = resample(&problem.reference, problem.thresholds.resample_count)?;
        Ok(Self { problem, reference })
    }

    pub fn problem(&self) -> &ProblemDescriptor {
        &self.problem
    }

    /// The resampled reference curve in normalized space.
    pub fn resampled_reference(&self) -> &[Point] {
        &self.reference
    }

    /// The reference curve mapped into raw space, for drawing an overlay.
    pub fn reference_overlay(&self) -> Vec<Point> {
        self.problem
            .reference
            .iter()
            .map(|&p| self.problem.plot.to_raw(p))
            .collect()
    }

    /// Grade one drawing.
    pub fn grade(&self, drawing: &Drawing) -> Result<GradeReport, GradeError> {
        let thresholds = &self.problem.thresholds;

        let outcome = match prepare_candidate(&drawing.strokes, &self.problem.plot, thresholds) {
            Candidate::Empty => GradeOutcome::Empty,
            Candidate::TooShort { points } => GradeOutcome::TooShort { points },
            Candidate::Ready(curve) => {
                let user = resample(&curve, thresholds.resample_count)?;
                GradeOutcome::Scored(compare(&user, &self.reference, thresholds)?)
            }
        };

        let score = outcome.score();
        let pass = matches!(&outcome, GradeOutcome::Scored(c) if c.passes(thresholds.pass_score));
        let status = if pass {
            AttemptStatus::Solved
        } else {
            AttemptStatus::Attempted
        };
        let message = self.message(&outcome, pass);

        tracing::info!(
            problem = %self.problem.id,
            score,
            pass,
            "graded attempt"
        );

        Ok(GradeReport {
            id: Uuid::new_v4(),
            graded_at: Utc::now(),
            problem_id: self.problem.id.clone(),
            outcome,
            score,
            pass,
            status,
            message,
        })
    }

    fn message(&self, outcome: &GradeOutcome, pass: bool) -> String {
        match outcome {
            GradeOutcome::Empty => EMPTY_MESSAGE.to_string(),
            GradeOutcome::TooShort { .. } => TOO_SHORT_MESSAGE.to_string(),
            GradeOutcome::Scored(c) if pass => {
                format!("Nice! Your curve is pretty close. Score: {:.0}/100", c.score)
            }
            GradeOutcome::Scored(c) => match &self.problem.hint {
                Some(hint) => format!("Not quite. Score: {:.0}/100. Hint: {hint}", c.score),
                None => format!("Not quite. Score: {:.0}/100.", c.score),
            },
        }
    }
}
