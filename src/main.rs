//! `license-literals` — pull comments and string literals out of source files
//! and separate the license-relevant ones.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config ([`license_literals::config::load_config`]); CLI flags override it.
//! 3. Expand paths into files ([`license_literals::scan::Scanner::collect_files`]).
//! 4. Extract and split each file ([`license_literals::scan::Scanner::scan_file`]).
//! 5. Render the requested report ([`report`]).
//! 6. Exit `0` (clean) or `1` (at least one file the XML reader rejected).

mod cli;
mod report;

use anyhow::{bail, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use cli::{Cli, ReportFormat};
use license_literals::config::load_config;
use license_literals::models::{MimeType, ScanStatus};
use license_literals::scan::Scanner;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Config is looked up relative to the first path (or its directory)
    let root = cli
        .paths
        .first()
        .map(|p| match p.parent() {
            Some(parent) if p.is_file() => parent.to_path_buf(),
            _ => p.clone(),
        })
        .unwrap_or_else(|| std::path::PathBuf::from("."));
    let mut config = load_config(&root, cli.config.as_deref())?;

    if cli.no_strings {
        config.extract.include_strings = false;
    }
    if cli.no_collapse {
        config.extract.collapse_comments = false;
    }

    let mut scanner = Scanner::new(&config);
    if let Some(raw) = cli.mime.as_deref() {
        let mime = MimeType::from_mime(raw);
        if mime == MimeType::Unknown {
            bail!("unsupported MIME type: {}", raw);
        }
        scanner = scanner.with_mime(mime);
    }

    let files = scanner.collect_files(&cli.paths);
    if files.is_empty() {
        eprintln!("No files found");
        std::process::exit(1);
    }
    info!(count = files.len(), "scanning files");

    let pb = if !cli.quiet && files.len() > 1 && cli.report == ReportFormat::Terminal {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut reports = Vec::with_capacity(files.len());
    for file in &files {
        reports.push(scanner.scan_file(file));
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    match cli.report {
        ReportFormat::Terminal => report::terminal::render(&reports, cli.verbose, cli.quiet)?,
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        ReportFormat::Text => {
            let stdout = std::io::stdout();
            report::text::render(&mut stdout.lock(), &reports, cli.relevant_only)?;
        }
    }

    let has_failures = reports
        .iter()
        .any(|r| matches!(r.status, ScanStatus::Failed(_)));

    if has_failures {
        std::process::exit(1);
    }

    Ok(())
}
