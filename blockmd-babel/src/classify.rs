//! Per-line recognizers for the Markdown block parser.
//!
//! Each classifier looks at one line and either yields a [`LineClass`] or
//! declines, never both. The parser runs them through [`CLASSIFIERS`], a
//! single priority-ordered table with first-match-wins semantics; the chain
//! order is an invariant, not an accident of code layout. List items are
//! classified before headers so that the parser's list buffer is flushed as
//! one contiguous block instead of letting a later match slip in mid-list.
//!
//! Code fences are not in the table: a fence spans multiple lines and is
//! consumed by the parser itself before the chain runs.

use crate::block::Block;
use crate::inline;
use once_cell::sync::Lazy;
use regex::Regex;

static HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,6})\s(.+)$").unwrap());
static IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[([^\]]+)\]\(([^)]+)\)").unwrap());
static UNORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^- (.+)$").unwrap());
static ORDINAL_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d\. .+$").unwrap());
// A `<` followed by a non-space run that never closes before end of line.
// This is the marker the serializer emits on the line after an image
// (`<caption`); the guard keeps it from surfacing as a spurious paragraph.
static UNTERMINATED_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^ >]+[^>]*$").unwrap());

/// Outcome of running one line through the classifier chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// One item of a (possibly ongoing) list, inline formatting applied.
    Item(String),
    /// A complete block.
    Block(Block),
    /// Recognized and deliberately discarded.
    Drop,
}

pub type Classifier = fn(&str) -> Option<LineClass>;

/// The priority-ordered classifier chain. First match wins; the remaining
/// classifiers are skipped for that line.
pub const CLASSIFIERS: [(&str, Classifier); 5] = [
    ("list-item", list_item),
    ("header", header),
    ("image", image),
    ("blockquote", blockquote),
    ("paragraph", paragraph),
];

/// Run a line through the chain. `None` means the line produced nothing
/// (blank, or rejected by the paragraph guard).
pub fn classify(line: &str) -> Option<LineClass> {
    CLASSIFIERS
        .iter()
        .find_map(|(_, classifier)| classifier(line))
}

/// Shared ordered-item test: a single-digit ordinal prefix like `1. `.
/// The serializer uses the same test, so list style cannot flip across a
/// render/parse round trip.
pub fn is_ordinal_item(text: &str) -> bool {
    ORDINAL_ITEM.is_match(text)
}

/// `- item` yields the bare text; an ordinal line keeps its `N. ` prefix so
/// the serializer can re-emit it verbatim.
fn list_item(line: &str) -> Option<LineClass> {
    if let Some(caps) = UNORDERED_ITEM.captures(line) {
        return Some(LineClass::Item(inline::to_html_tags(&caps[1])));
    }
    if ORDINAL_ITEM.is_match(line) {
        return Some(LineClass::Item(inline::to_html_tags(line)));
    }
    None
}

/// `^(#{1,6}) text`; seven or more `#` do not match and fall through.
fn header(line: &str) -> Option<LineClass> {
    let caps = HEADER.captures(line)?;
    Some(LineClass::Block(Block::Header {
        level: caps[1].len() as u8,
        text: caps[2].to_string(),
    }))
}

/// `![caption](url)` anywhere in the line, first occurrence only.
fn image(line: &str) -> Option<LineClass> {
    let caps = IMAGE.captures(line)?;
    Some(LineClass::Block(Block::Image {
        url: caps[2].to_string(),
        caption: caps[1].to_string(),
    }))
}

/// Blockquote lines are discarded unconditionally; the content is not
/// preserved. A known lossy simplification.
fn blockquote(line: &str) -> Option<LineClass> {
    line.starts_with('>').then_some(LineClass::Drop)
}

/// Fallback. Drops the unterminated-tag artifact, skips blank lines, wraps
/// everything else as an inline-formatted paragraph.
fn paragraph(line: &str) -> Option<LineClass> {
    if UNTERMINATED_TAG.is_match(line) {
        return Some(LineClass::Drop);
    }
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(LineClass::Block(Block::Paragraph {
        text: inline::to_html_tags(trimmed),
    }))
}
