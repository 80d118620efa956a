//! Sectioned JSON format implementation
//!
//! The FAQ-aware, section-per-heading schema:
//!
//! ```json
//! {
//!   "metadata": { "title": "…", "ogImage": "…" },
//!   "content": [
//!     { "sectionId": "…", "type": "default", "header": "…", "text": "…",
//!       "summary": "", "lastEdited": 1712345678901 },
//!     { "sectionId": "…", "type": "faq", "header": "…", "text": "…",
//!       "summary": "", "lastEdited": 1712345678901,
//!       "questions": ["…"], "answers": ["…"] }
//!   ]
//! }
//! ```
//!
//! A document serializes by rendering to Markdown and splitting at `\n## `
//! level-2 headings; a heading wrapped in `<faq>` tags marks its section as
//! FAQ and its question/answer spans are lifted into parallel arrays.
//! Parsing expands each section back to Markdown (FAQ sections re-interleave
//! their tag pairs) and runs the result through the Markdown parser.
//!
//! `lastEdited` is epoch milliseconds from the injected clock, like every
//! other timestamp in this workspace.

pub mod metadata;
pub mod parser;
pub mod serializer;

use crate::block::Document;
use crate::error::ConvertError;
use crate::faq::FaqRules;
use crate::format::Format;
use crate::formats::markdown::MarkdownRules;
use crate::ids::{Clock, IdSource, SystemClock, UuidIds};
use metadata::DocMetadata;
use serde::{Deserialize, Serialize};

/// A sectioned document: optional metadata plus ordered sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionedDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DocMetadata>,
    pub content: Vec<Section>,
}

/// One section, delimited by a level-2 heading in the Markdown rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub section_id: String,
    #[serde(rename = "type")]
    pub kind: SectionKind,
    pub header: String,
    pub text: String,
    #[serde(default)]
    pub summary: String,
    pub last_edited: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub questions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub answers: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Default,
    Faq,
}

/// Format implementation for sectioned JSON.
///
/// Claims no file extension: `.json` auto-detects as clean-json, so this
/// format must be named explicitly.
pub struct SectionedJsonFormat {
    ids: Box<dyn IdSource>,
    clock: Box<dyn Clock>,
    markdown: MarkdownRules,
    faq: FaqRules,
}

impl SectionedJsonFormat {
    pub fn new(
        ids: Box<dyn IdSource>,
        clock: Box<dyn Clock>,
        markdown: MarkdownRules,
        faq: FaqRules,
    ) -> Self {
        SectionedJsonFormat {
            ids,
            clock,
            markdown,
            faq,
        }
    }
}

impl Default for SectionedJsonFormat {
    fn default() -> Self {
        SectionedJsonFormat::new(
            Box::new(UuidIds),
            Box::new(SystemClock),
            MarkdownRules::default(),
            FaqRules::default(),
        )
    }
}

impl Format for SectionedJsonFormat {
    fn name(&self) -> &str {
        "sectioned-json"
    }

    fn description(&self) -> &str {
        "Sectioned FAQ-aware JSON keyed by level-2 headings"
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, ConvertError> {
        parser::parse_from_sectioned(source, &self.faq)
    }

    fn serialize(&self, doc: &Document) -> Result<String, ConvertError> {
        serializer::serialize_to_sectioned(
            doc,
            self.ids.as_ref(),
            self.clock.as_ref(),
            &self.markdown,
        )
    }
}
