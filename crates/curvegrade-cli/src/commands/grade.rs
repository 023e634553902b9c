//! The `curvegrade grade` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use curvegrade_core::report::GradeOutcome;
use curvegrade_core::{CurveGrader, Drawing, GradeReport};

use crate::config::load_config_from;

pub struct GradeArgs {
    pub drawing: PathBuf,
    pub problem: Option<String>,
    pub format: String,
    pub output: Option<PathBuf>,
    pub save: bool,
    pub require_pass: bool,
    pub config: Option<PathBuf>,
}

pub fn execute(args: GradeArgs) -> Result<()> {
    let config = load_config_from(args.config.as_deref())?;
    let problem = super::load_problem(args.problem.as_deref(), &config)?;

    let content = std::fs::read_to_string(&args.drawing)
        .with_context(|| format!("failed to read drawing: {}", args.drawing.display()))?;
    let drawing: Drawing = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse drawing JSON: {}", args.drawing.display()))?;

    let grader = CurveGrader::new(problem)?;
    let report = grader.grade(&drawing)?;

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => print_text(&report),
    }

    if let Some(path) = &args.output {
        report.save_json(path)?;
        eprintln!("Report saved to: {}", path.display());
    }
    if args.save {
        let timestamp = report.graded_at.format("%Y-%m-%dT%H%M%S");
        let path = config
            .output_dir
            .join(format!("{}-{timestamp}.json", report.problem_id));
        report.save_json(&path)?;
        eprintln!("Report saved to: {}", path.display());
    }

    if args.require_pass && !report.pass {
        std::process::exit(1);
    }

    Ok(())
}

fn print_text(report: &GradeReport) {
    println!("{}", report.message);
    println!("Problem: {}", report.problem_id);
    println!("Score:   {:.1}/100", report.score);
    println!("Status:  {}", report.status);
    match &report.outcome {
        GradeOutcome::Scored(c) => {
            println!("Mean distance:      {:.4}", c.mean_distance);
            println!("Hausdorff distance: {:.4}", c.hausdorff_distance);
        }
        GradeOutcome::TooShort { points } => {
            println!("Longest stroke has {points} point(s)");
        }
        GradeOutcome::Empty => {}
    }
}
