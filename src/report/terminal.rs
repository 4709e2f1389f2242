use std::collections::HashMap;

use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use license_literals::models::{FileReport, ScanStatus};

/// Render a colored terminal report.
pub fn render(reports: &[FileReport], verbose: bool, quiet: bool) -> Result<()> {
    let total = reports.len();
    let relevant_count = count(reports, |s| matches!(s, ScanStatus::Relevant));
    let clean_count = count(reports, |s| matches!(s, ScanStatus::Clean));
    let unsupported_count = count(reports, |s| matches!(s, ScanStatus::Unsupported));
    let skipped_count = count(reports, |s| matches!(s, ScanStatus::Skipped(_)));
    let failed_count = count(reports, |s| matches!(s, ScanStatus::Failed(_)));

    if quiet {
        println!(
            "Files: {}  Relevant: {}  Clean: {}  Unsupported: {}  Skipped: {}  Failed: {}",
            total,
            relevant_count.to_string().green(),
            clean_count,
            unsupported_count.to_string().dimmed(),
            skipped_count.to_string().yellow(),
            failed_count.to_string().red(),
        );
        return Ok(());
    }

    println!(
        "\n {} v{}\n",
        "license-literals".bold(),
        env!("CARGO_PKG_VERSION")
    );

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(" │  {:<48} │", format!("Files scanned      : {}", total));
    println!(
        " │  {:<48} │",
        format!("{}  Relevant        : {:>4}  {}", "§".green(), relevant_count, summarize_types(reports))
    );
    println!(" │  {:<48} │", format!("·  Clean           : {:>4}", clean_count));
    println!(
        " │  {:<48} │",
        format!("·  Unsupported     : {:>4}", unsupported_count)
    );
    println!(
        " │  {:<48} │",
        format!("{}  Skipped         : {:>4}", "⚠".yellow(), skipped_count)
    );
    println!(
        " │  {:<48} │",
        format!("{}  Failed          : {:>4}", "✗".red(), failed_count)
    );
    println!(" └────────────────────────────────────────────────────┘\n");

    if failed_count > 0 {
        println!(" {} Files the XML reader rejected:\n", "[FAILED]".red().bold());
        render_table(reports, |s| matches!(s, ScanStatus::Failed(_)));
        println!();
    }

    if relevant_count > 0 {
        println!(" {} Files with license-relevant text:\n", "[LICENSE]".green().bold());
        render_table(reports, |s| matches!(s, ScanStatus::Relevant));
        println!();
    }

    if verbose {
        let rest = |s: &ScanStatus| !matches!(s, ScanStatus::Relevant | ScanStatus::Failed(_));
        if reports.iter().any(|r| rest(&r.status)) {
            println!(" {} Remaining files:\n", "[OTHER]".bold());
            render_table(reports, rest);
            println!();
        }
    }

    Ok(())
}

fn count(reports: &[FileReport], pred: impl Fn(&ScanStatus) -> bool) -> usize {
    reports.iter().filter(|r| pred(&r.status)).count()
}

fn render_table(reports: &[FileReport], filter: impl Fn(&ScanStatus) -> bool) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("File").add_attribute(Attribute::Bold),
            Cell::new("Type").add_attribute(Attribute::Bold),
            Cell::new("Literals").add_attribute(Attribute::Bold),
            Cell::new("Relevant lines").add_attribute(Attribute::Bold),
            Cell::new("Header").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
        ]);

    for report in reports.iter().filter(|r| filter(&r.status)) {
        let status_color = match report.status {
            ScanStatus::Relevant => Color::Green,
            ScanStatus::Clean => Color::Reset,
            ScanStatus::Unsupported => Color::DarkGrey,
            ScanStatus::Skipped(_) => Color::Yellow,
            ScanStatus::Failed(_) => Color::Red,
        };

        let header = report
            .best_comment
            .as_deref()
            .map(first_line)
            .unwrap_or_default();

        table.add_row(vec![
            Cell::new(report.path.display()),
            Cell::new(report.mime.to_string()),
            Cell::new(report.literals.len()).set_alignment(CellAlignment::Right),
            Cell::new(report.relevant.lines().count()).set_alignment(CellAlignment::Right),
            Cell::new(header),
            Cell::new(report.status.to_string()).fg(status_color),
        ]);
    }

    println!("{}", table);
}

/// First non-empty line, shortened for a table cell.
fn first_line(text: &str) -> String {
    const MAX: usize = 60;
    let line = text.lines().map(str::trim).find(|l| !l.is_empty()).unwrap_or("");
    if line.chars().count() > MAX {
        let cut: String = line.chars().take(MAX).collect();
        format!("{}…", cut)
    } else {
        line.to_string()
    }
}

fn summarize_types(reports: &[FileReport]) -> String {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for report in reports.iter().filter(|r| r.status == ScanStatus::Relevant) {
        *counts.entry(report.mime.to_string()).or_insert(0) += 1;
    }

    let mut pairs: Vec<(String, usize)> = counts.into_iter().collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let summary: Vec<String> = pairs
        .iter()
        .take(2)
        .map(|(mime, cnt)| format!("{} ({})", mime.trim_start_matches("text/"), cnt))
        .collect();

    if summary.is_empty() {
        String::new()
    } else {
        format!("[{}]", summary.join(", "))
    }
}
