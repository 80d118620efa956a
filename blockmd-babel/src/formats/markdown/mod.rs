//! Markdown format implementation
//!
//! This module implements bidirectional conversion between the block model
//! and line-oriented Markdown.
//!
//! # Parsing approach
//!
//! There is deliberately no Markdown grammar library here. The supported
//! subset is recovered with ordered regex dispatch over lines (see
//! [`crate::classify`] and [`crate::parser`]) plus the FAQ pre-pass in
//! [`crate::faq`]. Anything outside the subset falls through to the
//! paragraph rule or is dropped.
//!
//! # Element mapping table
//!
//! | Block       | Markdown                    | Notes                                        |
//! |-------------|-----------------------------|----------------------------------------------|
//! | Header      | `# text` … `###### text`    | level = number of `#` (1-6)                  |
//! | Image       | `![caption](url)` + `<caption` marker line | marker line is re-consumed on parse |
//! | SimpleImage | same as Image               | plain-text caption                           |
//! | Paragraph   | inline-converted text       | `<b>/<i>/<a>` ⇄ `**`/`_`/`[](url)`          |
//! | List        | `- item` / `1. item`        | ordinal items keep their prefix verbatim     |
//! | Code        | ``` fenced lines            | content verbatim, no info string             |
//! | (FAQ pair)  | `<question>/<answer>` tags  | question becomes a synthetic level-5 header  |
//!
//! # Lossy conversions
//!
//! - Blockquote lines are discarded entirely on parse.
//! - Italic text serializes as `*text*`, which the parser keeps as literal
//!   paragraph text; the block sequence is stable from the second parse on.
//! - Nested lists, tables and mixed emphasis are out of scope.

pub mod parser;
pub mod serializer;

use crate::block::Document;
use crate::error::ConvertError;
use crate::faq::FaqRules;
use crate::format::Format;

/// Knobs for Markdown serialization.
#[derive(Debug, Clone)]
pub struct MarkdownRules {
    /// Marker emitted before unordered list items. The parser only
    /// recognizes `-`; any other marker is render-only.
    pub unordered_marker: char,
}

impl Default for MarkdownRules {
    fn default() -> Self {
        MarkdownRules {
            unordered_marker: '-',
        }
    }
}

/// Format implementation for Markdown
#[derive(Default)]
pub struct MarkdownFormat {
    faq: FaqRules,
    rules: MarkdownRules,
}

impl MarkdownFormat {
    pub fn new(faq: FaqRules, rules: MarkdownRules) -> Self {
        MarkdownFormat { faq, rules }
    }
}

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Line-oriented Markdown with an embedded FAQ micro-format"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, ConvertError> {
        parser::parse_from_markdown_with_rules(source, &self.faq)
    }

    fn serialize(&self, doc: &Document) -> Result<String, ConvertError> {
        serializer::serialize_to_markdown_with_rules(doc, &self.rules)
    }
}
