use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "license-literals",
    about = "Extract comments and strings from source files and isolate license-relevant text",
    version
)]
pub struct Cli {
    /// Files or directories to scan
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Config file [default: ./.license-literals/config.toml, fallback ~/.config/license-literals/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Treat every file as this MIME type (e.g. text/x-c) instead of detecting it
    #[arg(long, value_name = "MIME")]
    pub mime: Option<String>,

    /// Only extract comments, not string literals
    #[arg(long)]
    pub no_strings: bool,

    /// Keep comments on adjacent lines separate
    #[arg(long)]
    pub no_collapse: bool,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// With `--report text`, print only the license-relevant text
    #[arg(long)]
    pub relevant_only: bool,

    /// Show every file (not just relevant/failed ones) and debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
    Text,
}
