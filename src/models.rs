use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Closed set of file types the extractor understands.
///
/// Produced by the file-type detection layer ([`crate::detector`]); anything it
/// cannot map ends up as [`MimeType::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MimeType {
    #[serde(rename = "text/x-c")]
    C,
    #[serde(rename = "text/x-c++")]
    CPlusPlus,
    #[serde(rename = "text/x-java")]
    Java,
    #[serde(rename = "text/html")]
    Html,
    #[serde(rename = "text/xml")]
    Xml,
    #[serde(rename = "text/sgml")]
    Sgml,
    #[serde(rename = "text/x-python")]
    Python,
    #[serde(rename = "text/x-shellscript")]
    Shell,
    #[serde(rename = "text/x-php")]
    Php,
    #[serde(rename = "unknown filetype")]
    Unknown,
}

impl MimeType {
    /// Canonical MIME string.
    pub fn as_str(&self) -> &'static str {
        match self {
            MimeType::C => "text/x-c",
            MimeType::CPlusPlus => "text/x-c++",
            MimeType::Java => "text/x-java",
            MimeType::Html => "text/html",
            MimeType::Xml => "text/xml",
            MimeType::Sgml => "text/sgml",
            MimeType::Python => "text/x-python",
            MimeType::Shell => "text/x-shellscript",
            MimeType::Php => "text/x-php",
            MimeType::Unknown => "unknown filetype",
        }
    }

    /// Parse a MIME string. Unrecognized values map to [`MimeType::Unknown`].
    pub fn from_mime(raw: &str) -> MimeType {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text/x-c" | "text/x-csrc" | "text/x-chdr" => MimeType::C,
            "text/x-c++" | "text/x-c++src" | "text/x-c++hdr" => MimeType::CPlusPlus,
            "text/x-java" | "text/x-java-source" => MimeType::Java,
            "text/html" | "application/xhtml+xml" => MimeType::Html,
            "text/xml" | "application/xml" => MimeType::Xml,
            "text/sgml" | "application/sgml" => MimeType::Sgml,
            "text/x-python" | "text/x-script.python" => MimeType::Python,
            "text/x-shellscript" | "application/x-sh" | "text/x-sh" => MimeType::Shell,
            "text/x-php" | "application/x-php" => MimeType::Php,
            _ => MimeType::Unknown,
        }
    }

    /// Map a `file(1)`-style description (e.g. `"C source, ASCII text"`).
    pub fn from_description(description: &str) -> MimeType {
        const MAPPING: &[(&str, MimeType)] = &[
            ("C++ source", MimeType::CPlusPlus),
            ("C source", MimeType::C),
            ("Java source", MimeType::Java),
            ("HTML document", MimeType::Html),
            ("XML 1.0 document", MimeType::Xml),
            ("SGML document", MimeType::Sgml),
            ("Python script", MimeType::Python),
            ("POSIX shell script", MimeType::Shell),
            ("PHP document", MimeType::Php),
            ("PHP script", MimeType::Php),
        ];

        let description = description.trim();
        MAPPING
            .iter()
            .find(|(prefix, _)| description.starts_with(prefix))
            .map(|(_, mime)| *mime)
            .unwrap_or(MimeType::Unknown)
    }
}

impl std::fmt::Display for MimeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A comment, possibly spanning several physical lines.
///
/// Line numbers are 1-based and inclusive. Markup comments carry the line
/// the reader was on when the node started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub body: Vec<String>,
    pub start_line: usize,
    pub end_line: usize,
    /// Spans several lines, or absorbed another comment.
    pub multiline: bool,
}

impl Comment {
    pub fn new(body: Vec<String>, start_line: usize, end_line: usize) -> Self {
        debug_assert!(start_line <= end_line);
        Self {
            body,
            start_line,
            end_line,
            multiline: start_line != end_line,
        }
    }

    /// Single physical line comment.
    pub fn single(text: impl Into<String>, line: usize) -> Self {
        Self::new(vec![text.into()], line, line)
    }

    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    /// Absorb `next`, which must come after this comment in the document.
    pub fn append(&mut self, next: Comment) {
        self.body.extend(next.body);
        self.end_line = next.end_line;
        self.multiline = true;
    }

    pub fn text(&self) -> String {
        self.body.join("\n")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    pub text: String,
    /// Line the literal was found on; approximate for markup text nodes.
    pub line: usize,
}

impl StringLiteral {
    pub fn new(text: impl Into<String>, line: usize) -> Self {
        Self {
            text: text.into(),
            line,
        }
    }
}

/// Anything the lexer pulls out of a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedItem {
    Comment(Comment),
    String(StringLiteral),
}

impl ParsedItem {
    pub fn last_line_number(&self) -> usize {
        match self {
            ParsedItem::Comment(c) => c.end_line,
            ParsedItem::String(s) => s.line,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            ParsedItem::Comment(c) => c.text(),
            ParsedItem::String(s) => s.text,
        }
    }
}

/// Per-file result of a batch scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub mime: MimeType,
    pub literals: Vec<String>,
    pub relevant: String,
    pub other: String,
    pub best_comment: Option<String>,
    pub status: ScanStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    /// At least one license-relevant literal was found.
    Relevant,
    /// Literals were extracted but none look license related.
    Clean,
    /// No extractor for this file type.
    Unsupported,
    /// File was not read (too large, not UTF-8).
    Skipped(String),
    /// The XML reader rejected the document.
    Failed(String),
}

impl std::fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanStatus::Relevant => write!(f, "relevant"),
            ScanStatus::Clean => write!(f, "clean"),
            ScanStatus::Unsupported => write!(f, "unsupported"),
            ScanStatus::Skipped(reason) => write!(f, "skipped ({})", reason),
            ScanStatus::Failed(reason) => write!(f, "failed ({})", reason),
        }
    }
}
