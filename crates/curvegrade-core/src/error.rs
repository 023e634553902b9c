//! Grading error types.
//!
//! Degenerate user input (no drawing, a stroke that is too short) is not an
//! error: it produces an explicit zero-score outcome. These variants cover
//! misuse of the pipeline and invalid problem descriptors.

use thiserror::Error;

/// Errors raised by the grading pipeline.
#[derive(Debug, Error, PartialEq)]
pub enum GradeError {
    /// A polyline with no points was passed where at least one is required.
    #[error("polyline has no points")]
    EmptyPolyline,

    /// Resampling needs at least two output points.
    #[error("resample count must be at least 2, got {0}")]
    InvalidSampleCount(usize),

    /// The plotting rectangle has a non-positive or non-finite size.
    #[error("invalid plot rectangle: width {width}, height {height}")]
    InvalidPlot { width: f64, height: f64 },

    /// A problem descriptor failed validation.
    #[error("invalid problem '{id}': {reason}")]
    InvalidProblem { id: String, reason: String },
}

impl GradeError {
    /// Returns `true` if the error comes from a bad problem definition rather
    /// than from a call with bad arguments.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            GradeError::InvalidPlot { .. } | GradeError::InvalidProblem { .. }
        )
    }
}
