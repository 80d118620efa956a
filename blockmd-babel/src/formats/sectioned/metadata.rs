//! Document metadata → title blocks.
//!
//! Sectioned documents can carry page metadata (title, social image). The
//! combined clean-JSON pipeline turns that metadata into a small block
//! document of its own, separate from the body blocks.

use crate::block::{Block, Document};
use serde::{Deserialize, Serialize};

/// Page-level metadata attached to a sectioned document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocMetadata {
    pub title: String,
    #[serde(default)]
    pub og_image: String,
    #[serde(default)]
    pub og_image_alt: String,
    #[serde(default)]
    pub og_image_caption: String,
}

/// Title header plus, when a social image is set, a simple image block.
pub fn to_title_blocks(metadata: &DocMetadata) -> Document {
    let mut blocks = vec![Block::Header {
        level: 1,
        text: metadata.title.clone(),
    }];
    if !metadata.og_image.is_empty() {
        blocks.push(Block::SimpleImage {
            url: metadata.og_image.clone(),
            caption: metadata.og_image_caption.clone(),
        });
    }
    Document::with_blocks(blocks)
}
