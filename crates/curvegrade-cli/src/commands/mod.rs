pub mod grade;
pub mod init;
pub mod list;
pub mod reference;
pub mod validate;

use anyhow::Result;

use curvegrade_core::parser::{load_problem_directory, parse_problem, resolve_problem};
use curvegrade_core::ProblemDescriptor;

use crate::config::CurvegradeConfig;

/// Resolve `--problem`, falling back to the configured default.
///
/// Lookup order: built-in id, then the `id` field of the files in the
/// problems directory (the same ids `list` prints), then
/// `<problems_dir>/<name>.toml`, then `name` as a path.
pub(crate) fn load_problem(
    problem: Option<&str>,
    config: &CurvegradeConfig,
) -> Result<ProblemDescriptor> {
    let name = problem.unwrap_or(config.default_problem.as_str());
    if let Some(builtin) = ProblemDescriptor::builtin(name) {
        return Ok(builtin);
    }

    if config.problems_dir.is_dir() {
        let on_disk = load_problem_directory(&config.problems_dir)?;
        if let Some(found) = on_disk.into_iter().find(|p| p.id == name) {
            return Ok(found);
        }

        let in_dir = config.problems_dir.join(format!("{name}.toml"));
        if in_dir.is_file() {
            return parse_problem(&in_dir);
        }
    }

    resolve_problem(name)
}
