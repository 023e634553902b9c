//! CLI configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use curvegrade_core::model::STRESS_STRAIN_STEEL;

/// Top-level curvegrade configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurvegradeConfig {
    /// Directory scanned for problem TOML files.
    #[serde(default = "default_problems_dir")]
    pub problems_dir: PathBuf,
    /// Problem used when `--problem` is not given.
    #[serde(default = "default_problem")]
    pub default_problem: String,
    /// Where `grade --save` writes reports.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_problems_dir() -> PathBuf {
    PathBuf::from("./problems")
}
fn default_problem() -> String {
    STRESS_STRAIN_STEEL.to_string()
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./curvegrade-results")
}

impl Default for CurvegradeConfig {
    fn default() -> Self {
        Self {
            problems_dir: default_problems_dir(),
            default_problem: default_problem(),
            output_dir: default_output_dir(),
        }
    }
}

/// Expand `${VAR}` references from the environment. Unset variables expand
/// to nothing; substituted values are not expanded again, and an unterminated
/// `${` is left as written.
fn resolve_env_vars(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(open) = rest.find("${") {
        let Some(len) = rest[open + 2..].find('}') else {
            break;
        };
        let var = &rest[open + 2..open + 2 + len];
        out.push_str(&rest[..open]);
        out.push_str(&std::env::var(var).unwrap_or_default());
        rest = &rest[open + 3 + len..];
    }
    out.push_str(rest);
    out
}

fn resolve_path(p: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&p.to_string_lossy()))
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `curvegrade.toml` in the current directory
/// 2. `~/.config/curvegrade/config.toml`
///
/// Environment variable overrides: `CURVEGRADE_PROBLEMS_DIR`,
/// `CURVEGRADE_DEFAULT_PROBLEM`.
pub fn load_config_from(path: Option<&Path>) -> Result<CurvegradeConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("curvegrade.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<CurvegradeConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => CurvegradeConfig::default(),
    };

    if let Ok(dir) = std::env::var("CURVEGRADE_PROBLEMS_DIR") {
        config.problems_dir = PathBuf::from(dir);
    }
    if let Ok(problem) = std::env::var("CURVEGRADE_DEFAULT_PROBLEM") {
        config.default_problem = problem;
    }

    config.problems_dir = resolve_path(&config.problems_dir);
    config.output_dir = resolve_path(&config.output_dir);
    config.default_problem = resolve_env_vars(&config.default_problem);

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("curvegrade"))
}
