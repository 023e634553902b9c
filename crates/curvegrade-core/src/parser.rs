//! TOML problem descriptor parser.
//!
//! Loads problem descriptors from TOML files and directories, and validates
//! them.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::geometry::Point;
use crate::model::{GradingThresholds, ProblemDescriptor};
use crate::normalize::PlotRect;

/// Intermediate TOML structure for parsing problem files.
#[derive(Debug, Deserialize)]
struct TomlProblemFile {
    problem: TomlProblemHeader,
    plot: TomlPlot,
    #[serde(default)]
    thresholds: GradingThresholds,
}

#[derive(Debug, Deserialize)]
struct TomlProblemHeader {
    id: String,
    name: String,
    #[serde(default)]
    prompt: String,
    #[serde(default)]
    hint: Option<String>,
    reference: Vec<Point>,
}

#[derive(Debug, Deserialize)]
struct TomlPlot {
    origin_x: f64,
    origin_y: f64,
    width: f64,
    height: f64,
}

/// Parse a single TOML file into a `ProblemDescriptor`.
pub fn parse_problem(path: &Path) -> Result<ProblemDescriptor> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read problem file: {}", path.display()))?;

    parse_problem_str(&content, path)
}

/// Parse a TOML string into a `ProblemDescriptor` (useful for testing).
pub fn parse_problem_str(content: &str, source_path: &Path) -> Result<ProblemDescriptor> {
    let parsed: TomlProblemFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let plot = PlotRect::new(
        parsed.plot.origin_x,
        parsed.plot.origin_y,
        parsed.plot.width,
        parsed.plot.height,
    )
    .with_context(|| format!("invalid [plot] in {}", source_path.display()))?;

    let problem = ProblemDescriptor {
        id: parsed.problem.id,
        name: parsed.problem.name,
        prompt: parsed.problem.prompt,
        hint: parsed.problem.hint.filter(|h| !h.trim().is_empty()),
        plot,
        thresholds: parsed.thresholds,
        reference: parsed.problem.reference,
    };

    problem
        .validate()
        .with_context(|| format!("invalid problem in {}", source_path.display()))?;

    Ok(problem)
}

/// Resolve a problem argument: a built-in id, or a path to a TOML file.
pub fn resolve_problem(name: &str) -> Result<ProblemDescriptor> {
    if let Some(problem) = ProblemDescriptor::builtin(name) {
        return Ok(problem);
    }
    let path = Path::new(name);
    if path.is_file() {
        return parse_problem(path);
    }
    anyhow::bail!(
        "unknown problem '{name}': not a built-in id ({}) and not a file",
        ProblemDescriptor::builtin_ids().join(", ")
    )
}

/// Recursively load all `.toml` problem files from a directory.
pub fn load_problem_directory(dir: &Path) -> Result<Vec<ProblemDescriptor>> {
    let mut problems = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.path());

    for entry in entries {
        let path = entry.path();

        if path.is_dir() {
            problems.extend(load_problem_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_problem(&path) {
                Ok(problem) => problems.push(problem),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(problems)
}

/// A warning from problem validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The problem ID.
    pub problem_id: String,
    /// Warning message.
    pub message: String,
}

/// Check a problem descriptor for issues that make grading unreliable
/// without making it impossible.
pub fn validate_problem(problem: &ProblemDescriptor) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let mut warn = |message: String| {
        warnings.push(ValidationWarning {
            problem_id: problem.id.clone(),
            message,
        })
    };

    if problem.reference.len() < 2 {
        warn("reference curve has fewer than 2 points".into());
    }

    for (i, p) in problem.reference.iter().enumerate() {
        if !(0.0..=1.0).contains(&p.x) || !(0.0..=1.0).contains(&p.y) {
            warn(format!("reference point {i} {p} is outside the unit square"));
        }
    }

    if problem.reference.windows(2).any(|w| w[1].x < w[0].x) {
        warn("reference curve is not sorted by x; drawn curves are".into());
    }

    let t = &problem.thresholds;
    if !(0.0..=100.0).contains(&t.pass_score) {
        warn(format!("pass_score {} is outside [0, 100]", t.pass_score));
    }
    if t.max_mean_distance <= 0.0 {
        warn("max_mean_distance must be positive".into());
    }
    if t.max_hausdorff <= 0.0 {
        warn("max_hausdorff must be positive".into());
    }
    if t.hausdorff_penalty < 0.0 {
        warn("hausdorff_penalty is negative".into());
    }
    if t.resample_count < 2 {
        warn(format!("resample_count {} is below 2", t.resample_count));
    }
    if t.min_stroke_points < 2 {
        warn(format!(
            "min_stroke_points {} accepts single-point strokes",
            t.min_stroke_points
        ));
    }
    if problem.prompt.trim().is_empty() {
        warn("prompt is empty".into());
    }

    warnings
}
