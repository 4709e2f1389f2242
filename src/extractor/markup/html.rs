use std::cell::{Cell, RefCell};

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use tracing::trace;

use super::{comment_node, text_node};
use crate::models::ParsedItem;

/// Extract comments and text nodes from HTML (or SGML) in document order.
///
/// Runs the html5ever tokenizer without a tree builder, so nothing the
/// document contains can make it fail. A `<` that does not open a tag stays
/// in the text, `<script>` and `<style>` bodies are read as raw text, and a
/// comment left open at end of input is still reported.
pub fn parse(content: &str, include_strings: bool) -> Vec<ParsedItem> {
    let input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(content));

    let tokenizer = Tokenizer::new(NodeSink::new(include_strings), TokenizerOpts::default());
    let _ = tokenizer.feed(&input);
    tokenizer.end();

    tokenizer.sink.finish()
}

/// Collects nodes as the tokenizer emits them.
///
/// Character data arrives in chunks; chunks are buffered until the next
/// non-text token so that one text node becomes one string.
struct NodeSink {
    include_strings: bool,
    items: RefCell<Vec<ParsedItem>>,
    text: RefCell<String>,
    text_line: Cell<usize>,
}

impl NodeSink {
    fn new(include_strings: bool) -> Self {
        Self {
            include_strings,
            items: RefCell::new(Vec::new()),
            text: RefCell::new(String::new()),
            text_line: Cell::new(1),
        }
    }

    /// `line` is where the tokenizer stands after `chunk`.
    fn push_text(&self, chunk: &str, line: usize) {
        if !self.include_strings {
            return;
        }
        let mut text = self.text.borrow_mut();
        if text.is_empty() {
            self.text_line.set(line.saturating_sub(chunk.matches('\n').count()));
        }
        text.push_str(chunk);
    }

    fn flush_text(&self) {
        let text = self.text.take();
        if let Some(literal) = text_node(&text, self.text_line.get()) {
            self.items.borrow_mut().push(ParsedItem::String(literal));
        }
    }

    /// `line` is where the comment ends.
    fn push_comment(&self, raw: &str, line: usize) {
        // `<?xml ...?>` reaches the tokenizer as a bogus comment
        let raw = raw
            .strip_prefix('?')
            .map(|r| r.strip_suffix('?').unwrap_or(r))
            .unwrap_or(raw);
        let start = line.saturating_sub(raw.matches('\n').count());
        self.items
            .borrow_mut()
            .push(ParsedItem::Comment(comment_node(raw, start)));
    }

    fn finish(&self) -> Vec<ParsedItem> {
        self.flush_text();
        self.items.take()
    }
}

/// Elements whose content the tokenizer must not read as markup.
fn raw_text_kind(tag: &Tag) -> Option<RawKind> {
    if tag.kind != TagKind::StartTag || tag.self_closing {
        return None;
    }
    match &*tag.name {
        "script" => Some(RawKind::ScriptData),
        "style" | "xmp" | "iframe" | "noembed" | "noframes" => Some(RawKind::Rawtext),
        "title" | "textarea" => Some(RawKind::Rcdata),
        _ => None,
    }
}

impl TokenSink for NodeSink {
    type Handle = ();

    fn process_token(&self, token: Token, line_number: u64) -> TokenSinkResult<()> {
        let line = line_number as usize;
        match token {
            Token::CharacterTokens(chunk) => self.push_text(&chunk, line),
            Token::NullCharacterToken => {}
            Token::ParseError(reason) => trace!(line, %reason, "tolerated markup error"),
            Token::CommentToken(raw) => {
                self.flush_text();
                self.push_comment(&raw, line);
            }
            Token::TagToken(tag) => {
                self.flush_text();
                if let Some(kind) = raw_text_kind(&tag) {
                    return TokenSinkResult::RawData(kind);
                }
            }
            _ => self.flush_text(),
        }
        TokenSinkResult::Continue
    }
}
