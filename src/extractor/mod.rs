//! Comment and string-literal extraction.
//!
//! - [`profile`] — maps a [`MimeType`] to the syntax used to lex it.
//! - [`lexer`] — delimiter-driven line lexer for C-like, Python, shell and PHP.
//! - [`markup`] — HTML/SGML via the html5ever tokenizer, XML via quick-xml.
//! - [`merge`] — collapses comments on adjacent lines into one.
//!
//! [`extract`] is the strict entry point; [`extract_or_empty`] is what batch
//! callers should use, since it turns an unsupported file type into an empty
//! result instead of an error.

pub mod lexer;
pub mod markup;
pub mod merge;
pub mod profile;

use serde::Deserialize;
use tracing::debug;

use crate::error::{ExtractError, Result};
use crate::models::{MimeType, ParsedItem};

pub use lexer::UnterminatedBlock;
use profile::{profile_for, LanguageProfile};

/// Knobs for a single extraction call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    /// Also return quoted strings (and markup text nodes).
    pub include_strings: bool,
    /// Merge adjacent comments and order everything by line.
    /// When off, items come back in lexer discovery order.
    pub collapse_comments: bool,
    pub unterminated: UnterminatedBlock,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            include_strings: true,
            collapse_comments: true,
            unterminated: UnterminatedBlock::Emit,
        }
    }
}

/// Extract comments and strings from `content` as an ordered list of texts.
///
/// Fails with [`ExtractError::UnsupportedLanguage`] for MIME types without a
/// profile, and with [`ExtractError::Markup`] when the XML reader rejects the
/// document. HTML and SGML never fail.
pub fn extract(content: &str, mime: MimeType, options: &ExtractOptions) -> Result<Vec<String>> {
    Ok(parse_items(content, mime, options)?
        .into_iter()
        .map(ParsedItem::into_text)
        .collect())
}

/// Like [`extract`], but an unsupported MIME type yields an empty list.
pub fn extract_or_empty(
    content: &str,
    mime: MimeType,
    options: &ExtractOptions,
) -> Result<Vec<String>> {
    Ok(parse_items_or_empty(content, mime, options)?
        .into_iter()
        .map(ParsedItem::into_text)
        .collect())
}

/// Like [`parse_items`], but an unsupported MIME type yields no items.
pub fn parse_items_or_empty(
    content: &str,
    mime: MimeType,
    options: &ExtractOptions,
) -> Result<Vec<ParsedItem>> {
    match parse_items(content, mime, options) {
        Err(ExtractError::UnsupportedLanguage(mime)) => {
            debug!(%mime, "could not extract comments or strings");
            Ok(Vec::new())
        }
        other => other,
    }
}

/// Lex, merge and order the items of one document.
pub fn parse_items(
    content: &str,
    mime: MimeType,
    options: &ExtractOptions,
) -> Result<Vec<ParsedItem>> {
    let items = match profile_for(mime)? {
        LanguageProfile::Delimited(syntax) => lexer::lex(
            content,
            syntax,
            options.include_strings,
            options.unterminated,
        ),
        LanguageProfile::Markup(dialect) => {
            markup::parse(content, *dialect, options.include_strings)?
        }
    };

    if !options.collapse_comments {
        return Ok(items);
    }

    let mut comments = Vec::new();
    let mut strings = Vec::new();
    for (rank, item) in items.into_iter().enumerate() {
        match item {
            ParsedItem::Comment(c) => comments.push((rank, c)),
            other => strings.push((rank, other)),
        }
    }

    let mut ordered: Vec<(usize, ParsedItem)> = merge::collapse_ranked(comments)
        .into_iter()
        .map(|(rank, c)| (rank, ParsedItem::Comment(c)))
        .chain(strings)
        .collect();
    // items ending on the same line keep discovery order
    ordered.sort_by_key(|(rank, item)| (item.last_line_number(), *rank));

    Ok(ordered.into_iter().map(|(_, item)| item).collect())
}
