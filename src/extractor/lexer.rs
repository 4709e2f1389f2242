//! Line-oriented comment and string lexer for delimiter-based languages.
//!
//! This is not a grammar: every physical line is trimmed and classified on
//! its own, with a single piece of state tracking whether we are inside a
//! block comment. Lines that belong to one block comment are accumulated and
//! emitted as a single [`Comment`] once the close token is seen.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use tracing::{debug, warn};

use super::profile::{BlockComment, DelimitedSyntax};
use crate::models::{Comment, ParsedItem, StringLiteral};

/// Double-quoted string, honoring backslash escapes.
static DOUBLE_QUOTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""((?:[^"\\]|\\.)*)""#).expect("valid double-quote pattern"));

/// Single-quoted string, honoring backslash escapes.
static SINGLE_QUOTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"'((?:[^'\\]|\\.)*)'").expect("valid single-quote pattern"));

/// What to do with a block comment still open at end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnterminatedBlock {
    /// Emit the buffered lines as a comment ending at the last buffered line.
    #[default]
    Emit,
    /// Drop the buffered lines.
    Discard,
}

/// Lex `content` with the given syntax.
///
/// Items are returned in discovery order: for each line, a comment (if any)
/// precedes the strings found on that line.
pub fn lex(
    content: &str,
    syntax: &DelimitedSyntax,
    include_strings: bool,
    unterminated: UnterminatedBlock,
) -> Vec<ParsedItem> {
    let mut lexer = BlockLexer::new(syntax);
    let mut items = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line_number = index + 1;
        let text = raw.trim();
        if text.is_empty() {
            continue;
        }

        if let Some(comment) = lexer.feed(text, line_number) {
            items.push(ParsedItem::Comment(comment));
        }

        if include_strings {
            items.extend(
                scan_strings(text, syntax.quotes, line_number).map(ParsedItem::String),
            );
        }
    }

    if let Some(comment) = lexer.finish(unterminated) {
        items.push(ParsedItem::Comment(comment));
    }

    items
}

/// Comment state machine over trimmed, non-blank lines.
struct BlockLexer<'a> {
    syntax: &'a DelimitedSyntax,
    buffer: Vec<(String, usize)>,
    in_block: bool,
}

impl<'a> BlockLexer<'a> {
    fn new(syntax: &'a DelimitedSyntax) -> Self {
        Self {
            syntax,
            buffer: Vec::new(),
            in_block: false,
        }
    }

    /// Classify one line, returning a comment when one is complete.
    fn feed(&mut self, text: &str, line: usize) -> Option<Comment> {
        if self.in_block {
            // in_block is only ever set when a block syntax exists
            let block = self.syntax.block_comment?;
            return self.continue_block(block, text, line);
        }

        if let Some(rest) = self.syntax.line_comment.and_then(|p| text.strip_prefix(p)) {
            return Some(Comment::single(rest.trim(), line));
        }

        let block = self.syntax.block_comment?;
        let rest = text.strip_prefix(block.open)?;

        // `/* ... */` written on one line
        if text.len() >= block.open.len() + block.close.len() {
            if let Some(inner) = rest.strip_suffix(block.close) {
                return Some(Comment::single(inner.trim(), line));
            }
        }

        // `/* ... */ trailing_code();` keeps only the comment part
        if let Some(end) = rest.find(block.close) {
            return Some(Comment::single(rest[..end].trim(), line));
        }

        self.in_block = true;
        self.buffer.push((rest.trim().to_string(), line));
        None
    }

    fn continue_block(&mut self, block: BlockComment, text: &str, line: usize) -> Option<Comment> {
        if let Some(rest) = text.strip_suffix(block.close) {
            self.buffer
                .push((strip_interior(rest.trim(), block.interior), line));
            return self.flush();
        }

        if !text.starts_with(block.open) {
            self.buffer.push((strip_interior(text, block.interior), line));
        }
        None
    }

    fn flush(&mut self) -> Option<Comment> {
        self.in_block = false;
        let buffer = std::mem::take(&mut self.buffer);
        let start = buffer.first()?.1;
        let end = buffer.last()?.1;
        let body = buffer.into_iter().map(|(text, _)| text).collect();
        Some(Comment::new(body, start, end))
    }

    fn finish(mut self, policy: UnterminatedBlock) -> Option<Comment> {
        if !self.in_block {
            return None;
        }
        let start = self.buffer.first().map(|(_, line)| *line).unwrap_or_default();
        match policy {
            UnterminatedBlock::Emit => {
                warn!(start_line = start, "block comment not terminated before end of input");
                self.flush()
            }
            UnterminatedBlock::Discard => {
                debug!(start_line = start, "discarding unterminated block comment");
                None
            }
        }
    }
}

fn strip_interior(text: &str, interior: Option<&str>) -> String {
    match interior.and_then(|p| text.strip_prefix(p)) {
        Some(rest) => rest.trim().to_string(),
        None => text.to_string(),
    }
}

fn quote_pattern(quote: char) -> Option<&'static Regex> {
    match quote {
        '"' => Some(&DOUBLE_QUOTED),
        '\'' => Some(&SINGLE_QUOTED),
        _ => None,
    }
}

/// All quoted strings on one line, one quote style after another.
fn scan_strings<'t>(
    text: &'t str,
    quotes: &'static [char],
    line: usize,
) -> impl Iterator<Item = StringLiteral> + 't {
    quotes
        .iter()
        .filter_map(|q| quote_pattern(*q))
        .flat_map(move |re| re.captures_iter(text))
        .filter_map(|caps| caps.get(1))
        .map(move |m| StringLiteral::new(m.as_str(), line))
}
