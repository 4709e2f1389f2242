use std::borrow::Cow;

use quick_xml::events::Event;
use quick_xml::Reader;

use super::{comment_node, text_node};
use crate::error::{ExtractError, Result};
use crate::models::ParsedItem;

/// Extract comments and text nodes from an XML document.
///
/// Uses the quick-xml event API with end-tag checks relaxed, so mismatched
/// closing tags do not abort the scan. Line numbers are derived from the
/// reader's byte offset.
///
/// XML declarations and processing instructions are reported as comments.
/// Reader errors are returned unchanged as [`ExtractError::Markup`].
pub fn parse(content: &str, include_strings: bool) -> Result<Vec<ParsedItem>> {
    let mut reader = Reader::from_str(content);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;

    let mut lines = LineCounter::new(content);
    let mut items = Vec::new();

    loop {
        let start = reader.buffer_position() as usize;
        let event = reader.read_event().map_err(|e| ExtractError::Markup {
            position: reader.buffer_position() as u64,
            source: e,
        })?;
        let line = lines.line_at(start);

        match event {
            Event::Comment(e) => {
                items.push(ParsedItem::Comment(comment_node(&String::from_utf8_lossy(&e), line)));
            }
            Event::Decl(_) | Event::PI(_) => {
                let end = reader.buffer_position() as usize;
                let inner = instruction_body(content, start, end);
                items.push(ParsedItem::Comment(comment_node(inner, line)));
            }
            Event::Text(e) if include_strings => {
                let text = match e.unescape() {
                    Ok(text) => text,
                    // HTML entities such as &nbsp; are unknown to an XML reader
                    Err(_) => Cow::Owned(String::from_utf8_lossy(&e).into_owned()),
                };
                if let Some(literal) = text_node(&text, line) {
                    items.push(ParsedItem::String(literal));
                }
            }
            Event::CData(e) if include_strings => {
                if let Some(literal) = text_node(&String::from_utf8_lossy(&e), line) {
                    items.push(ParsedItem::String(literal));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(items)
}

/// Text between `<?` and `?>` of the instruction at `start..end`.
fn instruction_body(content: &str, start: usize, end: usize) -> &str {
    let raw = content.get(start..end).unwrap_or("").trim();
    raw.strip_prefix("<?")
        .and_then(|r| r.strip_suffix("?>"))
        .unwrap_or(raw)
}

/// Maps byte offsets to 1-based line numbers. Offsets must not decrease.
struct LineCounter<'a> {
    bytes: &'a [u8],
    pos: usize,
    line: usize,
}

impl<'a> LineCounter<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            bytes: content.as_bytes(),
            pos: 0,
            line: 1,
        }
    }

    fn line_at(&mut self, offset: usize) -> usize {
        let offset = offset.min(self.bytes.len());
        if offset > self.pos {
            self.line += self.bytes[self.pos..offset]
                .iter()
                .filter(|b| **b == b'\n')
                .count();
            self.pos = offset;
        }
        self.line
    }
}
