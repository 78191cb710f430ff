use clap::{Parser, Subcommand};
use std::path::PathBuf;

use prompt_ops::application::dto::{OutputFormat, DEFAULT_MODEL};

/// Plan and scaffold prompt optimization projects
#[derive(Parser, Debug)]
#[command(name = "prompt-ops")]
#[command(version)]
#[command(about = "Plan and scaffold prompt optimization projects", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project with a sample config, dataset and prompt
    Init {
        /// Directory to create the project in (defaults to current directory)
        dir: Option<PathBuf>,

        /// Model written into the generated config
        #[arg(short, long, default_value = DEFAULT_MODEL)]
        model: String,

        /// Read templates from this directory instead of the built-in ones
        #[arg(short, long, value_name = "DIR")]
        templates: Option<PathBuf>,

        /// Overwrite files that already exist
        #[arg(long)]
        force: bool,
    },

    /// Show the optimization plan for a project without running it
    Plan {
        /// Path to the project directory (defaults to current directory)
        #[arg(short, long, conflicts_with = "config")]
        path: Option<PathBuf>,

        /// Path to the config file (defaults to prompt-ops.config.yml in the project)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Shorthand for --format json
        #[arg(long, conflicts_with = "format")]
        json: bool,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
