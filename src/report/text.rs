use std::io::Write;

use anyhow::Result;

use license_literals::models::{FileReport, ScanStatus};

/// Write the extracted text per file.
///
/// Each file starts with a `==> path <==` line. Files with nothing extracted
/// are left out.
pub fn render<W: Write>(out: &mut W, reports: &[FileReport], relevant_only: bool) -> Result<()> {
    for report in reports {
        if !matches!(report.status, ScanStatus::Relevant | ScanStatus::Clean) {
            continue;
        }
        if relevant_only && report.relevant.is_empty() {
            continue;
        }

        writeln!(out, "==> {} <==", report.path.display())?;
        if relevant_only {
            write!(out, "{}", report.relevant)?;
        } else {
            if !report.relevant.is_empty() {
                writeln!(out, "--- license-relevant")?;
                write!(out, "{}", report.relevant)?;
            }
            if !report.other.is_empty() {
                writeln!(out, "--- other")?;
                write!(out, "{}", report.other)?;
            }
        }
        writeln!(out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use license_literals::models::MimeType;
    use std::path::PathBuf;

    fn report(name: &str, relevant: &str, other: &str, status: ScanStatus) -> FileReport {
        FileReport {
            path: PathBuf::from(name),
            mime: MimeType::C,
            literals: Vec::new(),
            relevant: relevant.to_string(),
            other: other.to_string(),
            best_comment: None,
            status,
        }
    }

    #[test]
    fn test_relevant_only() {
        let reports = vec![
            report("a.c", "Copyright 2020\n", "foo()\n", ScanStatus::Relevant),
            report("b.c", "", "bar\n", ScanStatus::Clean),
        ];
        let mut out = Vec::new();
        render(&mut out, &reports, true).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "==> a.c <==\nCopyright 2020\n\n");
    }

    #[test]
    fn test_both_blobs() {
        let reports = vec![
            report("a.c", "Copyright 2020\n", "foo()\n", ScanStatus::Relevant),
            report("x.bin", "", "", ScanStatus::Skipped("not UTF-8".into())),
        ];
        let mut out = Vec::new();
        render(&mut out, &reports, false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "==> a.c <==\n--- license-relevant\nCopyright 2020\n--- other\nfoo()\n\n"
        );
    }
}
