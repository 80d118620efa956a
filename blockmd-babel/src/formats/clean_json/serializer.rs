//! Clean JSON serialization (blocks → clean JSON export)

use super::CleanJsonOptions;
use crate::block::{Block, Document};
use crate::classify::is_ordinal_item;
use crate::error::ConvertError;
use crate::ids::{Clock, IdSource};
use serde_json::{json, Value};

/// Serialize a document to a clean JSON string.
pub fn serialize_to_clean_json(
    doc: &Document,
    ids: &dyn IdSource,
    clock: &dyn Clock,
    options: &CleanJsonOptions,
) -> Result<String, ConvertError> {
    let value = clean_json_value(doc, ids, clock, options);
    let rendered = if options.pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };
    rendered.map_err(|e| ConvertError::SerializationError(format!("clean JSON encoding failed: {e}")))
}

/// Build the clean JSON document as a `serde_json::Value`, for callers that
/// embed it in a larger structure.
pub fn clean_json_value(
    doc: &Document,
    ids: &dyn IdSource,
    clock: &dyn Clock,
    options: &CleanJsonOptions,
) -> Value {
    let blocks: Vec<Value> = doc.blocks.iter().map(|block| clean_block(block, ids)).collect();
    json!({
        "time": clock.now_millis(),
        "blocks": blocks,
        "version": options.version,
    })
}

fn clean_block(block: &Block, ids: &dyn IdSource) -> Value {
    let (kind, data) = match block {
        Block::Header { level, text } => ("header", json!({ "text": text, "level": level })),
        Block::Image { url, caption } => (
            "image",
            json!({
                "file": { "url": url },
                "caption": caption,
                "withBorder": false,
                "stretched": false,
                "withBackground": false,
            }),
        ),
        Block::SimpleImage { url, caption } => (
            "simpleImage",
            json!({
                "url": url,
                "caption": caption,
                "withBorder": false,
                "stretched": false,
                "withBackground": false,
            }),
        ),
        Block::Paragraph { text } => ("paragraph", json!({ "text": text })),
        Block::List { items } => (
            "list",
            json!({ "style": list_style(items), "items": items }),
        ),
        Block::Code { code } => ("code", json!({ "code": code })),
    };
    json!({ "id": ids.next_id(), "type": kind, "data": data })
}

/// A list is ordered only when every item carries an ordinal prefix; the
/// test is shared with the parser so style survives round trips.
fn list_style(items: &[String]) -> &'static str {
    if !items.is_empty() && items.iter().all(|item| is_ordinal_item(item)) {
        "ordered"
    } else {
        "unordered"
    }
}
