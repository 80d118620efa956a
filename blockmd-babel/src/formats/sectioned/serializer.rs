//! Sectioned JSON serialization (blocks → sectioned export)

use super::{Section, SectionKind, SectionedDocument};
use crate::block::Document;
use crate::error::ConvertError;
use crate::faq::{answers_in, questions_in};
use crate::formats::markdown::serializer::serialize_to_markdown_with_rules;
use crate::formats::markdown::MarkdownRules;
use crate::ids::{Clock, IdSource};

const FAQ_OPEN: &str = "<faq>";
const FAQ_CLOSE: &str = "</faq>";

/// Serialize a document to sectioned JSON by rendering it to Markdown and
/// splitting at level-2 headings.
pub fn serialize_to_sectioned(
    doc: &Document,
    ids: &dyn IdSource,
    clock: &dyn Clock,
    markdown: &MarkdownRules,
) -> Result<String, ConvertError> {
    let rendered = serialize_to_markdown_with_rules(doc, markdown)?;
    let sectioned = SectionedDocument {
        metadata: None,
        content: sections_from_markdown(&rendered, ids, clock),
    };
    serde_json::to_string_pretty(&sectioned)
        .map_err(|e| ConvertError::SerializationError(format!("sectioned encoding failed: {e}")))
}

/// Split Markdown text into sections at `\n## ` boundaries. Content before
/// the first level-2 heading is not part of any section and is discarded.
pub(crate) fn sections_from_markdown(
    markdown: &str,
    ids: &dyn IdSource,
    clock: &dyn Clock,
) -> Vec<Section> {
    // Guarantee the split also catches a heading on the very first line.
    let text = if markdown.starts_with('\n') {
        markdown.to_string()
    } else {
        format!("\n{markdown}")
    };

    let mut sections = Vec::new();
    for raw in text.split("\n## ").skip(1) {
        let (header, body) = raw.split_once('\n').unwrap_or((raw, ""));
        let mut section = Section {
            section_id: ids.next_id(),
            kind: SectionKind::Default,
            header: header.to_string(),
            text: body.to_string(),
            summary: String::new(),
            last_edited: clock.now_millis(),
            questions: Vec::new(),
            answers: Vec::new(),
        };
        if section.header.contains(FAQ_OPEN) {
            section.header = section.header.replace(FAQ_OPEN, "").replace(FAQ_CLOSE, "");
            section.kind = SectionKind::Faq;
            section.questions = questions_in(&section.text);
            section.answers = answers_in(&section.text);
        }
        sections.push(section);
    }
    sections
}
