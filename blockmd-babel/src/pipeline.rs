//! Whole-conversion pipelines.
//!
//! Functional entry points chaining a parse and a serialize step, for
//! callers that do not need the registry. Each has a zero-configuration
//! variant using the production capabilities and a `_with` variant taking
//! explicit rules and capabilities.

use crate::block::Document;
use crate::error::ConvertError;
use crate::faq::FaqRules;
use crate::formats::clean_json::serializer::{clean_json_value, serialize_to_clean_json};
use crate::formats::clean_json::CleanJsonOptions;
use crate::formats::markdown::parser::parse_from_markdown_with_rules;
use crate::formats::markdown::serializer::serialize_to_markdown_with_rules;
use crate::formats::markdown::MarkdownRules;
use crate::formats::sectioned::metadata::to_title_blocks;
use crate::formats::sectioned::parser::sectioned_to_markdown;
use crate::formats::sectioned::serializer::sections_from_markdown;
use crate::formats::sectioned::SectionedDocument;
use crate::ids::{Clock, IdSource, RandomIds, SystemClock, UuidIds};
use serde_json::json;

/// Markdown text → clean JSON string.
pub fn md_to_clean_json(markdown: &str) -> Result<String, ConvertError> {
    md_to_clean_json_with(
        markdown,
        &FaqRules::default(),
        &CleanJsonOptions::default(),
        &RandomIds,
        &SystemClock,
    )
}

pub fn md_to_clean_json_with(
    markdown: &str,
    faq: &FaqRules,
    options: &CleanJsonOptions,
    ids: &dyn IdSource,
    clock: &dyn Clock,
) -> Result<String, ConvertError> {
    let doc = parse_from_markdown_with_rules(markdown, faq)?;
    serialize_to_clean_json(&doc, ids, clock, options)
}

/// Clean JSON string → Markdown text.
pub fn clean_json_to_md(source: &str) -> Result<String, ConvertError> {
    clean_json_to_md_with(source, &MarkdownRules::default())
}

pub fn clean_json_to_md_with(
    source: &str,
    rules: &MarkdownRules,
) -> Result<String, ConvertError> {
    let doc = crate::formats::clean_json::parser::parse_from_clean_json(source)?;
    serialize_to_markdown_with_rules(&doc, rules)
}

/// Sectioned JSON string → Markdown text (section expansion only, no block
/// round trip).
pub fn sectioned_to_md(source: &str) -> Result<String, ConvertError> {
    let sectioned: SectionedDocument = serde_json::from_str(source)
        .map_err(|e| ConvertError::ParseError(format!("invalid sectioned document: {e}")))?;
    sectioned_to_markdown(&sectioned)
}

/// Markdown text → sectioned JSON string.
pub fn md_to_sectioned(markdown: &str) -> Result<String, ConvertError> {
    md_to_sectioned_with(markdown, &UuidIds, &SystemClock)
}

pub fn md_to_sectioned_with(
    markdown: &str,
    ids: &dyn IdSource,
    clock: &dyn Clock,
) -> Result<String, ConvertError> {
    let sectioned = SectionedDocument {
        metadata: None,
        content: sections_from_markdown(markdown, ids, clock),
    };
    serde_json::to_string_pretty(&sectioned)
        .map_err(|e| ConvertError::SerializationError(format!("sectioned encoding failed: {e}")))
}

/// Sectioned JSON string → combined clean JSON output:
/// `{ "titleBlocks": …, "bodyBlocks": … }`.
///
/// Title blocks come from the document metadata; body blocks from expanding
/// the sections to Markdown and re-parsing. Metadata is required here —
/// a sectioned document without it cannot produce a title.
pub fn sectioned_to_clean_json(source: &str) -> Result<String, ConvertError> {
    sectioned_to_clean_json_with(
        source,
        &FaqRules::default(),
        &CleanJsonOptions::default(),
        &RandomIds,
        &SystemClock,
    )
}

pub fn sectioned_to_clean_json_with(
    source: &str,
    faq: &FaqRules,
    options: &CleanJsonOptions,
    ids: &dyn IdSource,
    clock: &dyn Clock,
) -> Result<String, ConvertError> {
    let sectioned: SectionedDocument = serde_json::from_str(source)
        .map_err(|e| ConvertError::ParseError(format!("invalid sectioned document: {e}")))?;
    let metadata = sectioned.metadata.as_ref().ok_or_else(|| {
        ConvertError::ParseError("sectioned document has no metadata".to_string())
    })?;

    let title_doc = to_title_blocks(metadata);
    let markdown = sectioned_to_markdown(&sectioned)?;
    let body_doc: Document = parse_from_markdown_with_rules(&markdown, faq)?;

    let combined = json!({
        "titleBlocks": clean_json_value(&title_doc, ids, clock, options),
        "bodyBlocks": clean_json_value(&body_doc, ids, clock, options),
    });
    serde_json::to_string_pretty(&combined)
        .map_err(|e| ConvertError::SerializationError(format!("clean JSON encoding failed: {e}")))
}
