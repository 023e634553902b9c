//! The `curvegrade reference` command.

use std::path::PathBuf;

use anyhow::Result;

use curvegrade_core::CurveGrader;

use crate::config::load_config_from;

pub fn execute(problem: Option<String>, format: String, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let problem = super::load_problem(problem.as_deref(), &config)?;
    let grader = CurveGrader::new(problem)?;
    let overlay = grader.reference_overlay();

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&overlay)?),
        _ => {
            let problem = grader.problem();
            println!("{} ({})", problem.name, problem.id);
            for (norm, raw) in problem.reference.iter().zip(&overlay) {
                println!("  {norm} -> {raw}");
            }
        }
    }

    Ok(())
}
