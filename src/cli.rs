//! CLI argument parsing for spacey-steps.

use clap::Parser;
use std::path::PathBuf;

use crate::output::OutputFormat;

/// spacey-steps - Flatten JavaScript programs into an ordered table of steps
#[derive(Parser, Debug, Default)]
#[command(name = "spacey-steps")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Analyze inline code instead of files
    #[arg(short, long, value_name = "CODE", conflicts_with = "files")]
    pub eval: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log filter, e.g. `debug` or `spacey_analyzer=trace`
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// JavaScript files to analyze; starts the REPL when none are given
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}
