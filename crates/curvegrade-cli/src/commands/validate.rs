//! The `curvegrade validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(problem_path: PathBuf) -> Result<()> {
    let problems = if problem_path.is_dir() {
        curvegrade_core::parser::load_problem_directory(&problem_path)?
    } else {
        vec![curvegrade_core::parser::parse_problem(&problem_path)?]
    };

    let mut total_warnings = 0;

    for problem in &problems {
        println!(
            "Problem: {} ({} reference points)",
            problem.name,
            problem.reference.len()
        );

        let warnings = curvegrade_core::parser::validate_problem(problem);
        for w in &warnings {
            println!("  [{}] WARNING: {}", w.problem_id, w.message);
        }
        total_warnings += warnings.len();
    }

    if problems.is_empty() {
        println!("No problem files found.");
    } else if total_warnings == 0 {
        println!("All problems valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
