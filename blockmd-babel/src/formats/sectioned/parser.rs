//! Sectioned JSON parsing (sectioned → blocks import)

use super::{SectionKind, SectionedDocument};
use crate::block::Document;
use crate::error::ConvertError;
use crate::faq::FaqRules;
use crate::formats::markdown::parser::parse_from_markdown_with_rules;
use std::fmt::Write;

/// Parse a sectioned JSON document into blocks by expanding it back to
/// Markdown and running the Markdown parser.
pub fn parse_from_sectioned(source: &str, faq: &FaqRules) -> Result<Document, ConvertError> {
    let sectioned: SectionedDocument = serde_json::from_str(source)
        .map_err(|e| ConvertError::ParseError(format!("invalid sectioned document: {e}")))?;
    let markdown = sectioned_to_markdown(&sectioned)?;
    parse_from_markdown_with_rules(&markdown, faq)
}

/// Expand sections back into Markdown text. Default sections become a
/// level-2 heading plus their body; FAQ sections re-interleave their
/// question/answer arrays as tag pairs.
pub(crate) fn sectioned_to_markdown(doc: &SectionedDocument) -> Result<String, ConvertError> {
    let mut markdown = String::new();
    for section in &doc.content {
        match section.kind {
            SectionKind::Default => {
                let _ = writeln!(markdown, "## {}\n{}", section.header, section.text);
            }
            SectionKind::Faq => {
                let _ = writeln!(markdown, "## {}", section.header);
                if section.questions.len() != section.answers.len() {
                    return Err(ConvertError::QuestionAnswerMismatch {
                        questions: section.questions.len(),
                        answers: section.answers.len(),
                    });
                }
                for (question, answer) in section.questions.iter().zip(&section.answers) {
                    let _ = writeln!(
                        markdown,
                        "<question>\n{question}\n</question>\n<answer>\n{answer}\n</answer>"
                    );
                }
            }
        }
    }
    Ok(markdown)
}
