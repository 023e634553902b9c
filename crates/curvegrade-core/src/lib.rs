//! curvegrade-core — Freehand curve grading and drag-and-drop snapping.
//!
//! This crate defines the problem model, the normalize → resample → compare
//! grading pipeline, and the pure geometry helpers the drawing widgets use.

pub mod capture;
pub mod error;
pub mod geometry;
pub mod grader;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod preprocess;
pub mod report;
pub mod resample;
pub mod similarity;
pub mod snap;

pub use error::GradeError;
pub use geometry::Point;
pub use grader::CurveGrader;
pub use model::{Drawing, GradingThresholds, ProblemDescriptor};
pub use report::GradeReport;
