//! Table header extraction over a token stream.
//!
//! The markup is never built into a tree: start tags, end tags and character
//! data are consumed in document order while three flags track whether the
//! scan is inside the target table, its `thead`, and a `th` cell.

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
    TokenizerResult,
};

struct HeaderSink<'a> {
    table_id: &'a str,
    in_table: bool,
    in_header: bool,
    in_cell: bool,
    buffer: String,
    headers: Vec<String>,
}

impl<'a> HeaderSink<'a> {
    fn new(table_id: &'a str) -> Self {
        HeaderSink {
            table_id,
            in_table: false,
            in_header: false,
            in_cell: false,
            buffer: String::new(),
            headers: Vec::new(),
        }
    }

    fn start_tag(&mut self, tag: &Tag) {
        let name: &str = &tag.name;
        if name == "table" && attr(tag, "id") == Some(self.table_id) {
            self.in_table = true;
        } else if self.in_table && name == "thead" {
            self.in_header = true;
        } else if self.in_table && self.in_header && name == "th" {
            self.in_cell = true;
            self.buffer.clear();
        }
    }

    fn end_tag(&mut self, tag: &Tag) {
        let name: &str = &tag.name;
        if name == "table" && self.in_table {
            self.in_table = false;
        } else if name == "thead" && self.in_table {
            self.in_header = false;
        } else if name == "th" && self.in_table && self.in_header && self.in_cell {
            let text = self.buffer.trim();
            if !text.is_empty() {
                self.headers.push(text.to_string());
            }
            self.in_cell = false;
            self.buffer.clear();
        }
    }

    fn capturing(&self) -> bool {
        self.in_table && self.in_header && self.in_cell
    }
}

impl TokenSink for HeaderSink<'_> {
    type Handle = ();

    fn process_token(&mut self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(tag) => match tag.kind {
                TagKind::StartTag => {
                    self.start_tag(&tag);
                    // Without a tree builder the tokenizer needs to be told
                    // where raw text begins, or script bodies turn into tags.
                    match &*tag.name {
                        "script" => return TokenSinkResult::RawData(RawKind::ScriptData),
                        "style" | "xmp" | "iframe" | "noembed" | "noframes" | "noscript" => {
                            return TokenSinkResult::RawData(RawKind::Rawtext)
                        }
                        "title" | "textarea" => {
                            return TokenSinkResult::RawData(RawKind::Rcdata)
                        }
                        "plaintext" => return TokenSinkResult::Plaintext,
                        _ => {}
                    }
                }
                TagKind::EndTag => self.end_tag(&tag),
            },
            Token::CharacterTokens(text) if self.capturing() => self.buffer.push_str(&text),
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

fn attr<'t>(tag: &'t Tag, name: &str) -> Option<&'t str> {
    tag.attrs
        .iter()
        .find(|a| &*a.name.local == name)
        .map(|a| &*a.value)
}

/// Collects the trimmed, non-empty `th` labels inside the `thead` of the
/// table whose `id` equals `table_id`, in document order.
///
/// Malformed or missing structure is not an error; it just yields fewer
/// labels.
pub fn extract_table_headers(html: &str, table_id: &str) -> Vec<String> {
    let mut queue = BufferQueue::new();
    queue.push_back(StrTendril::from_slice(html));

    let mut tokenizer = Tokenizer::new(HeaderSink::new(table_id), TokenizerOpts::default());
    match tokenizer.feed(&mut queue) {
        TokenizerResult::Done => {}
        // The sink never hands back a script node, so feeding cannot pause.
        TokenizerResult::Script(()) => log::warn!("Tokenizer paused at a script in #{}", table_id),
    }
    tokenizer.end();

    let headers = std::mem::take(&mut tokenizer.sink.headers);
    log::debug!("Extracted {} header labels from #{}", headers.len(), table_id);
    headers
}
