//! The typed block model shared by every format.
//!
//! Blocks are transient: each conversion builds a fresh sequence, hands it to
//! the next stage and drops it. Nothing here is persisted or shared.

/// One structural unit of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Heading, `level` is the number of leading `#` characters (1-6).
    Header { level: u8, text: String },
    /// Image with an inline-formatted caption.
    Image { url: String, caption: String },
    /// Image whose caption is plain text (metadata-derived images).
    SimpleImage { url: String, caption: String },
    /// Paragraph text; may carry `<b>`/`<i>`/`<a>` tags, well-formed and
    /// non-nested.
    Paragraph { text: String },
    /// Never empty. Ordered items keep their `"N. "` prefix inside the item
    /// string; unordered items store the bare text.
    List { items: Vec<String> },
    /// Raw multi-line text, formatting untouched.
    Code { code: String },
}

/// An ordered sequence of blocks, the unit the [`Format`](crate::Format)
/// trait parses and serializes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a document from a block sequence.
    pub fn with_blocks(blocks: Vec<Block>) -> Self {
        Document { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
