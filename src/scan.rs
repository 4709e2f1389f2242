//! Batch driver: walk paths, extract literals from each file, never let one
//! file stop the others.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::Config;
use crate::detector::detect_mime;
use crate::extractor::parse_items_or_empty;
use crate::models::{FileReport, MimeType, ParsedItem, ScanStatus};
use crate::relevance::{best_license_comment, split_relevant};

/// Scanner bound to one configuration.
pub struct Scanner<'a> {
    config: &'a Config,
    overrides: HashMap<String, MimeType>,
    forced_mime: Option<MimeType>,
}

impl<'a> Scanner<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            overrides: config.mime_overrides(),
            forced_mime: None,
        }
    }

    /// Treat every file as `mime` instead of detecting it.
    pub fn with_mime(mut self, mime: MimeType) -> Self {
        self.forced_mime = Some(mime);
        self
    }

    /// Expand `paths` into the regular files below them, sorted per root.
    /// Hidden directories (`.git`, `.license-literals`) are not entered.
    pub fn collect_files(&self, paths: &[PathBuf]) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for root in paths {
            let walker = WalkDir::new(root)
                .follow_links(self.config.scan.follow_links)
                .sort_by_file_name()
                .into_iter()
                .filter_entry(|e| e.depth() == 0 || !is_hidden(e.path()));

            for entry in walker {
                match entry {
                    Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
                    Ok(_) => {}
                    Err(e) => warn!("skipping unreadable entry: {}", e),
                }
            }
        }

        files
    }

    /// Extract and classify one file.
    pub fn scan_file(&self, path: &Path) -> FileReport {
        let content = match self.read(path) {
            Ok(content) => content,
            Err(reason) => {
                debug!(path = %path.display(), %reason, "skipped");
                return FileReport {
                    path: path.to_path_buf(),
                    mime: MimeType::Unknown,
                    literals: Vec::new(),
                    relevant: String::new(),
                    other: String::new(),
                    best_comment: None,
                    status: ScanStatus::Skipped(reason),
                };
            }
        };

        let mime = self
            .forced_mime
            .unwrap_or_else(|| detect_mime(path, &content, &self.overrides));

        let mut report = FileReport {
            path: path.to_path_buf(),
            mime,
            literals: Vec::new(),
            relevant: String::new(),
            other: String::new(),
            best_comment: None,
            status: ScanStatus::Unsupported,
        };

        match parse_items_or_empty(&content, mime, &self.config.extract) {
            Ok(items) => {
                report.best_comment = best_license_comment(&items);
                let literals: Vec<String> = items.into_iter().map(ParsedItem::into_text).collect();
                let split = split_relevant(&literals);
                report.status = if mime == MimeType::Unknown {
                    ScanStatus::Unsupported
                } else if split.has_relevant() {
                    ScanStatus::Relevant
                } else {
                    ScanStatus::Clean
                };
                report.relevant = split.relevant;
                report.other = split.other;
                report.literals = literals;
            }
            Err(e) => {
                warn!(path = %path.display(), "extraction failed: {}", e);
                report.status = ScanStatus::Failed(e.to_string());
            }
        }

        report
    }

    fn read(&self, path: &Path) -> Result<String, String> {
        let meta = std::fs::metadata(path).map_err(|e| e.to_string())?;
        if meta.len() > self.config.scan.max_file_bytes {
            return Err(format!("larger than {} bytes", self.config.scan.max_file_bytes));
        }
        let bytes = std::fs::read(path).map_err(|e| e.to_string())?;
        String::from_utf8(bytes).map_err(|_| "not UTF-8".to_string())
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_scan_relevant_c_file() {
        let dir = TempDir::new().unwrap();
        let path = write(
            dir.path(),
            "main.c",
            "/*\n * Copyright (c) 2020 ACME\n */\nint main() { puts(\"hi\"); }\n",
        );
        let config = Config::default();
        let report = Scanner::new(&config).scan_file(&path);

        assert_eq!(report.mime, MimeType::C);
        assert_eq!(report.status, ScanStatus::Relevant);
        assert_eq!(report.literals, vec!["\n* Copyright (c) 2020 ACME\n", "hi"]);
        assert_eq!(report.other, "hi\n");
        assert!(report.best_comment.is_some());
    }

    #[test]
    fn test_best_comment_ignores_strings() {
        let dir = TempDir::new().unwrap();
        let path = write(
            dir.path(),
            "tag.py",
            "# Copyright 2020 ACME
TAG = \"SPDX-License-Identifier: GPL-2.0\"\n",
        );
        let config = Config::default();
        let report = Scanner::new(&config).scan_file(&path);

        assert_eq!(report.best_comment.as_deref(), Some("Copyright 2020 ACME"));
        assert_eq!(report.literals.len(), 2);
    }

    #[test]
    fn test_truncated_html_still_scanned() {
        let dir = TempDir::new().unwrap();
        let path = write(
            dir.path(),
            "page.html",
            "<!-- Copyright 2020 ACME -->\n<p>hello</p>\n<!-- trunc",
        );
        let config = Config::default();
        let report = Scanner::new(&config).scan_file(&path);

        assert_eq!(report.status, ScanStatus::Relevant);
        assert_eq!(report.relevant, "Copyright 2020 ACME\n");
    }

    #[test]
    fn test_unknown_type_is_unsupported_not_error() {
        let dir = TempDir::new().unwrap();
        let path = write(dir.path(), "error_file.scratch", "Copyright nobody");
        let config = Config::default();
        let report = Scanner::new(&config).scan_file(&path);

        assert_eq!(report.status, ScanStatus::Unsupported);
        assert!(report.literals.is_empty());
    }

    #[test]
    fn test_forced_mime() {
        let dir = TempDir::new().unwrap();
        let path = write(dir.path(), "notes.txt", "# licensed under MIT\n");
        let config = Config::default();
        let report = Scanner::new(&config)
            .with_mime(MimeType::Shell)
            .scan_file(&path);

        assert_eq!(report.status, ScanStatus::Relevant);
        assert_eq!(report.relevant, "licensed under MIT\n");
    }

    #[test]
    fn test_oversized_file_skipped() {
        let dir = TempDir::new().unwrap();
        let path = write(dir.path(), "big.c", "// 0123456789\n");
        let mut config = Config::default();
        config.scan.max_file_bytes = 4;
        let report = Scanner::new(&config).scan_file(&path);

        assert!(matches!(report.status, ScanStatus::Skipped(_)));
    }

    #[test]
    fn test_markup_failure_recorded() {
        let dir = TempDir::new().unwrap();
        let path = write(dir.path(), "broken.xml", "<a><!-- unterminated");
        let config = Config::default();
        let report = Scanner::new(&config).scan_file(&path);

        assert!(matches!(report.status, ScanStatus::Failed(_)));
    }

    #[test]
    fn test_collect_files_skips_hidden() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "b.py", "");
        write(dir.path(), "a.c", "");
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        write(&dir.path().join(".git"), "config", "");

        let config = Config::default();
        let files = Scanner::new(&config).collect_files(&[dir.path().to_path_buf()]);
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.c", "b.py"]);
    }
}
