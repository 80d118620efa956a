//! Markdown parsing (Markdown → blocks import)
//!
//! Pipeline: Markdown string → FAQ sectioner → line parser → Document.
//! The sectioner handles the `<question>`/`<answer>` region; everything
//! else goes straight through the classifier chain.

use crate::block::Document;
use crate::error::ConvertError;
use crate::faq::{self, FaqRules};

/// Parse a Markdown string with default FAQ rules.
pub fn parse_from_markdown(source: &str) -> Result<Document, ConvertError> {
    parse_from_markdown_with_rules(source, &FaqRules::default())
}

/// Parse a Markdown string with explicit FAQ rules.
pub fn parse_from_markdown_with_rules(
    source: &str,
    rules: &FaqRules,
) -> Result<Document, ConvertError> {
    faq::parse_document(source, rules).map(Document::with_blocks)
}
