//! Markdown serialization (blocks → Markdown export)
//!
//! Straight per-block template expansion. The only subtlety is the image
//! caption marker: every image emits a `<caption` line after itself, which
//! the parser's unterminated-tag guard swallows on the way back in, so the
//! caption never turns into a stray paragraph.

use super::MarkdownRules;
use crate::block::{Block, Document};
use crate::classify::is_ordinal_item;
use crate::error::ConvertError;
use crate::inline;
use std::fmt::Write;

/// Serialize a document to Markdown with default rules.
pub fn serialize_to_markdown(doc: &Document) -> Result<String, ConvertError> {
    serialize_to_markdown_with_rules(doc, &MarkdownRules::default())
}

/// Serialize a document to Markdown with explicit rules.
pub fn serialize_to_markdown_with_rules(
    doc: &Document,
    rules: &MarkdownRules,
) -> Result<String, ConvertError> {
    let mut out = String::new();
    for block in &doc.blocks {
        match block {
            Block::Header { level, text } => {
                let hashes = "#".repeat(usize::from(*level));
                let _ = writeln!(out, "{hashes} {text}\n");
            }
            Block::Image { url, caption } | Block::SimpleImage { url, caption } => {
                let _ = writeln!(out, "![{caption}]({url})\n<{caption}\n");
            }
            Block::Paragraph { text } => {
                let _ = writeln!(out, "{}\n", inline::to_markdown(text));
            }
            Block::List { items } => {
                for item in items {
                    if is_ordinal_item(item) {
                        let _ = writeln!(out, "{item}");
                    } else {
                        let _ = writeln!(out, "{} {item}", rules.unordered_marker);
                    }
                }
                out.push('\n');
            }
            Block::Code { code } => {
                let _ = writeln!(out, "```\n{code}\n```\n");
            }
        }
    }
    Ok(out.trim().to_string())
}
