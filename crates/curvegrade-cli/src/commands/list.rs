//! The `curvegrade list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use curvegrade_core::parser::load_problem_directory;
use curvegrade_core::ProblemDescriptor;

use crate::config::load_config_from;

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let mut problems: Vec<(ProblemDescriptor, &str)> = ProblemDescriptor::builtin_ids()
        .iter()
        .filter_map(|id| ProblemDescriptor::builtin(id))
        .map(|p| (p, "built-in"))
        .collect();

    if config.problems_dir.is_dir() {
        for p in load_problem_directory(&config.problems_dir)? {
            problems.push((p, "file"));
        }
    } else {
        tracing::debug!(
            "problems directory {} not found",
            config.problems_dir.display()
        );
    }

    let mut table = Table::new();
    table.set_header(vec!["Id", "Name", "Source", "Points", "Pass"]);
    for (p, source) in &problems {
        table.add_row(vec![
            Cell::new(&p.id),
            Cell::new(&p.name),
            Cell::new(source),
            Cell::new(p.reference.len()),
            Cell::new(format!("{:.0}", p.thresholds.pass_score)),
        ]);
    }

    println!("{table}");
    Ok(())
}
