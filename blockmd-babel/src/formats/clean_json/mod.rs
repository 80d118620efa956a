//! Clean JSON format implementation
//!
//! The block-array schema used by the rich-text editor:
//!
//! ```json
//! {
//!   "time": 1712345678901,
//!   "blocks": [ { "id": "…", "type": "header", "data": { "text": "…", "level": 1 } } ],
//!   "version": "2.28.2"
//! }
//! ```
//!
//! Parsing maps each `{id, type, data}` entry onto a typed [`Block`];
//! a `type` outside the known set is rejected with
//! [`ConvertError::UnknownBlockType`] rather than dropped, so round-trips
//! cannot silently lose content. Serialization stamps every block with an
//! opaque id from the injected [`IdSource`] and the document with the
//! injected [`Clock`]'s epoch milliseconds, keeping the adapter itself a
//! pure function.
//!
//! [`Block`]: crate::block::Block
//! [`ConvertError::UnknownBlockType`]: crate::error::ConvertError
//! [`IdSource`]: crate::ids::IdSource
//! [`Clock`]: crate::ids::Clock

pub mod parser;
pub mod serializer;

use crate::block::Document;
use crate::error::ConvertError;
use crate::format::Format;
use crate::ids::{Clock, IdSource, RandomIds, SystemClock};
use std::collections::HashMap;

/// Knobs for clean JSON serialization.
#[derive(Debug, Clone)]
pub struct CleanJsonOptions {
    /// Schema version string stamped on the output document.
    pub version: String,
    /// Pretty-print with two-space indentation.
    pub pretty: bool,
}

impl Default for CleanJsonOptions {
    fn default() -> Self {
        CleanJsonOptions {
            version: "2.28.2".to_string(),
            pretty: true,
        }
    }
}

/// Format implementation for the clean JSON block schema.
pub struct CleanJsonFormat {
    ids: Box<dyn IdSource>,
    clock: Box<dyn Clock>,
    options: CleanJsonOptions,
}

impl CleanJsonFormat {
    pub fn new(ids: Box<dyn IdSource>, clock: Box<dyn Clock>, options: CleanJsonOptions) -> Self {
        CleanJsonFormat {
            ids,
            clock,
            options,
        }
    }
}

impl Default for CleanJsonFormat {
    fn default() -> Self {
        CleanJsonFormat::new(
            Box::new(RandomIds),
            Box::new(SystemClock),
            CleanJsonOptions::default(),
        )
    }
}

impl Format for CleanJsonFormat {
    fn name(&self) -> &str {
        "clean-json"
    }

    fn description(&self) -> &str {
        "Block-array JSON with per-block ids and document time/version"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, ConvertError> {
        parser::parse_from_clean_json(source)
    }

    fn serialize(&self, doc: &Document) -> Result<String, ConvertError> {
        serializer::serialize_to_clean_json(doc, self.ids.as_ref(), self.clock.as_ref(), &self.options)
    }

    /// Supported options: `version` (schema version string) and `pretty`
    /// (`true`/`false`). Anything else is rejected.
    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, ConvertError> {
        let mut effective = self.options.clone();
        for (key, value) in options {
            match key.as_str() {
                "version" => effective.version = value.clone(),
                "pretty" => {
                    effective.pretty = match value.as_str() {
                        "true" | "1" | "yes" => true,
                        "false" | "0" | "no" => false,
                        other => {
                            return Err(ConvertError::NotSupported(format!(
                                "Invalid value '{other}' for clean-json option 'pretty'"
                            )))
                        }
                    }
                }
                other => {
                    return Err(ConvertError::NotSupported(format!(
                        "Format 'clean-json' does not support option '{other}'"
                    )))
                }
            }
        }
        serializer::serialize_to_clean_json(doc, self.ids.as_ref(), self.clock.as_ref(), &effective)
    }
}
