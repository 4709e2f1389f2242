//! Tree-structured documents: comments become comments, text nodes become
//! strings.
//!
//! - [`html`] — html5ever tokenizer for HTML and SGML. Never fails: stray `<`,
//!   unclosed tags and a comment cut off at end of input are all tolerated.
//! - [`xml`] — quick-xml event reader; a document it rejects is an error.

pub mod html;
pub mod xml;

use super::profile::MarkupDialect;
use crate::error::Result;
use crate::models::{Comment, ParsedItem, StringLiteral};

/// Extract comments and text nodes with the reader for `dialect`.
pub fn parse(content: &str, dialect: MarkupDialect, include_strings: bool) -> Result<Vec<ParsedItem>> {
    match dialect {
        MarkupDialect::Html => Ok(html::parse(content, include_strings)),
        MarkupDialect::Xml => xml::parse(content, include_strings),
    }
}

/// Each raw line becomes one body line, so the span matches the source.
fn comment_node(raw: &str, line: usize) -> Comment {
    let body: Vec<String> = raw.split('\n').map(|l| l.trim().to_string()).collect();
    let end = line + body.len() - 1;
    Comment::new(body, line, end)
}

/// Trimmed text starting at `line`; whitespace-only text is dropped.
fn text_node(raw: &str, line: usize) -> Option<StringLiteral> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let leading = &raw[..raw.len() - raw.trim_start().len()];
    let offset = leading.matches('\n').count();
    Some(StringLiteral::new(trimmed, line + offset))
}
