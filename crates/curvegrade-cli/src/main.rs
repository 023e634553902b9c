//! curvegrade CLI — grade freehand curves from the command line.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "curvegrade", version, about = "Freehand curve grader")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade a drawing against a problem
    Grade {
        /// Drawing JSON: {"strokes": [[{"x": .., "y": ..}, ...], ...]}
        #[arg(long)]
        drawing: PathBuf,

        /// Built-in problem id or path to a problem .toml
        #[arg(long)]
        problem: Option<String>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Also save the JSON report to this file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Save the JSON report into the configured output directory
        #[arg(long)]
        save: bool,

        /// Exit code 1 if the attempt does not pass
        #[arg(long)]
        require_pass: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate problem TOML files
    Validate {
        /// Path to problem file or directory
        #[arg(long)]
        problem: PathBuf,
    },

    /// Print a problem's reference curve in raw coordinates
    Reference {
        /// Built-in problem id or path to a problem .toml
        #[arg(long)]
        problem: Option<String>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List available problems
    List {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and example problem
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("curvegrade=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Grade {
            drawing,
            problem,
            format,
            output,
            save,
            require_pass,
            config,
        } => commands::grade::execute(commands::grade::GradeArgs {
            drawing,
            problem,
            format,
            output,
            save,
            require_pass,
            config,
        }),
        Commands::Validate { problem } => commands::validate::execute(problem),
        Commands::Reference {
            problem,
            format,
            config,
        } => commands::reference::execute(problem, format, config),
        Commands::List { config } => commands::list::execute(config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
