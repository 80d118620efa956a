//! Clean JSON parsing (clean JSON → blocks import)

use crate::block::{Block, Document};
use crate::error::ConvertError;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct RawDocument {
    blocks: Vec<RawBlock>,
}

#[derive(Debug, Deserialize)]
struct RawBlock {
    #[serde(rename = "type")]
    kind: String,
    data: Value,
}

/// Parse a clean JSON document into blocks.
///
/// Unknown block types are a hard error; malformed `data` shapes report the
/// missing field.
pub fn parse_from_clean_json(source: &str) -> Result<Document, ConvertError> {
    let raw: RawDocument = serde_json::from_str(source)
        .map_err(|e| ConvertError::ParseError(format!("invalid clean JSON document: {e}")))?;

    let mut blocks = Vec::with_capacity(raw.blocks.len());
    for block in raw.blocks {
        blocks.push(convert_block(block)?);
    }
    Ok(Document::with_blocks(blocks))
}

fn convert_block(block: RawBlock) -> Result<Block, ConvertError> {
    let data = &block.data;
    match block.kind.as_str() {
        "header" => Ok(Block::Header {
            level: level_field(data)?,
            text: str_field(data, "text")?,
        }),
        "image" => Ok(Block::Image {
            url: image_url(data)?,
            caption: optional_str(data, "caption"),
        }),
        "simpleImage" => Ok(Block::SimpleImage {
            url: str_field(data, "url")?,
            caption: optional_str(data, "caption"),
        }),
        "paragraph" => Ok(Block::Paragraph {
            text: str_field(data, "text")?,
        }),
        "list" => Ok(Block::List {
            items: items_field(data)?,
        }),
        "code" => Ok(Block::Code {
            code: str_field(data, "code")?,
        }),
        other => Err(ConvertError::UnknownBlockType(other.to_string())),
    }
}

fn str_field(data: &Value, name: &str) -> Result<String, ConvertError> {
    data.get(name)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            ConvertError::ParseError(format!("block data is missing string field '{name}'"))
        })
}

/// Captions are routinely absent in editor output; default to empty.
fn optional_str(data: &Value, name: &str) -> String {
    data.get(name)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn level_field(data: &Value) -> Result<u8, ConvertError> {
    data.get("level")
        .and_then(Value::as_u64)
        .map(|level| level as u8)
        .ok_or_else(|| {
            ConvertError::ParseError("header block is missing numeric field 'level'".to_string())
        })
}

/// Image URLs appear either flat (`data.url`) or nested under the upload
/// descriptor (`data.file.url`).
fn image_url(data: &Value) -> Result<String, ConvertError> {
    if let Some(url) = data.get("url").and_then(Value::as_str) {
        return Ok(url.to_string());
    }
    data.get("file")
        .and_then(|file| file.get("url"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            ConvertError::ParseError(
                "image block has neither 'url' nor 'file.url'".to_string(),
            )
        })
}

fn items_field(data: &Value) -> Result<Vec<String>, ConvertError> {
    let items = data.get("items").and_then(Value::as_array).ok_or_else(|| {
        ConvertError::ParseError("list block is missing array field 'items'".to_string())
    })?;
    items
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                ConvertError::ParseError("list items must be strings".to_string())
            })
        })
        .collect()
}
