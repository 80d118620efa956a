//! Bidirectional conversion between block-document JSON and Markdown
//!
//!     This crate provides a uniform interface for converting between the
//!     block model used by rich-text editors and its external representations
//!     (Markdown, the clean JSON block array, the sectioned FAQ-aware JSON).
//!
//! Architecture
//!
//!     All conversions go through one internal representation: the typed
//!     block sequence in ./block.rs. Formats parse into it and serialize out
//!     of it, never into each other directly. The Format trait (./format.rs)
//!     gives every format the same parse/serialize surface and the
//!     FormatRegistry (./registry.rs) handles discovery and extension-based
//!     detection.
//!
//!     This is a pure lib, that is, it powers the blockmd-cli but is shell
//!     agnostic: no std print, no env vars, no filesystem access. The only
//!     non-deterministic inputs (block ids, timestamps) are injected through
//!     the capability traits in ./ids.rs.
//!
//!     The file structure:
//!     .
//!     ├── error.rs                # ConvertError
//!     ├── block.rs                # Block + Document model
//!     ├── inline.rs               # inline Markdown ⇄ tag conversion
//!     ├── classify.rs             # per-line recognizers, ordered chain
//!     ├── parser.rs               # line-oriented block parser
//!     ├── faq.rs                  # FAQ region sectioning
//!     ├── ids.rs                  # injected id/clock capabilities
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── pipeline.rs             # whole-conversion entry points
//!     ├── formats
//!     │   ├── markdown            # parser.rs / serializer.rs / mod.rs
//!     │   ├── clean_json          # parser.rs / serializer.rs / mod.rs
//!     │   └── sectioned           # parser.rs / serializer.rs / metadata.rs
//!     └── lib.rs
//!
//! Core Algorithm
//!
//!     The only nontrivial direction is Markdown → blocks. There is no
//!     grammar: structure is recovered line by line through an ordered chain
//!     of regex classifiers (./classify.rs) with two pieces of cross-line
//!     state in the parser (./parser.rs) — fenced code regions consumed
//!     atomically, and consecutive list-item lines buffered into a single
//!     list block. A pre-pass (./faq.rs) splices an embedded
//!     question/answer region into the surrounding content in document
//!     order. The forward direction is plain per-block template expansion.
//!
//! Format Selection
//!
//!     - Markdown: the editing surface, both in and out.
//!     - clean-json: the editor's persisted block array, both in and out.
//!     - sectioned-json: the CMS section schema; expands through Markdown on
//!       both sides, so it inherits every Markdown parsing rule.

pub mod block;
pub mod classify;
pub mod error;
pub mod faq;
pub mod format;
pub mod formats;
pub mod ids;
pub mod inline;
pub mod parser;
pub mod pipeline;
pub mod registry;

pub use block::{Block, Document};
pub use error::ConvertError;
pub use format::Format;
pub use registry::FormatRegistry;
