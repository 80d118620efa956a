//! FAQ sectioning.
//!
//! Documents may embed one region of `<question>...</question>` /
//! `<answer>...</answer>` pairs. The sectioner isolates that region from the
//! surrounding plain content, turns each question into a synthetic header
//! and feeds each answer back through the full line parser, then reassembles
//! everything in document order:
//!
//! `parse(before) ++ [header(q) ++ parse(a) per pair] ++ parse(after)`

use crate::block::Block;
use crate::error::ConvertError;
use crate::parser::parse_lines;
use once_cell::sync::Lazy;
use regex::Regex;

const QUESTION_OPEN: &str = "<question>";
const ANSWER_CLOSE: &str = "</answer>";

static QUESTION_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<question>(.*?)</question>").unwrap());
static ANSWER_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<answer>(.*?)</answer>").unwrap());

/// What to do when a FAQ region holds differing numbers of questions and
/// answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MismatchPolicy {
    /// Reject the document. Nothing is ever paired with an absent answer.
    #[default]
    Error,
    /// Keep the first `min(questions, answers)` pairs and drop the excess.
    Truncate,
}

/// Knobs for FAQ extraction.
#[derive(Debug, Clone)]
pub struct FaqRules {
    /// Header level given to synthetic question headers.
    pub question_level: u8,
    pub mismatch: MismatchPolicy,
}

impl Default for FaqRules {
    fn default() -> Self {
        FaqRules {
            question_level: 5,
            mismatch: MismatchPolicy::Error,
        }
    }
}

/// Parse a full document, FAQ region included.
pub fn parse_document(source: &str, rules: &FaqRules) -> Result<Vec<Block>, ConvertError> {
    let split = split_faq(source);

    let mut blocks = parse_lines(split.before);
    if let Some(region) = split.region {
        for (question, answer) in extract_pairs(region, rules)? {
            blocks.push(Block::Header {
                level: rules.question_level,
                text: question,
            });
            blocks.extend(parse_lines(&answer));
        }
    }
    if !split.after.is_empty() {
        blocks.extend(parse_lines(split.after));
    }
    Ok(blocks)
}

struct FaqSplit<'a> {
    before: &'a str,
    region: Option<&'a str>,
    after: &'a str,
}

/// Split at the first `<question>` and the last `</answer>`. If either tag
/// is absent, or the closing tag precedes the opening one, the whole
/// document is "before" content; there is no partial or garbled split.
fn split_faq(text: &str) -> FaqSplit<'_> {
    match (text.find(QUESTION_OPEN), text.rfind(ANSWER_CLOSE)) {
        (Some(open), Some(close)) if close > open => {
            let end = close + ANSWER_CLOSE.len();
            FaqSplit {
                before: &text[..open],
                region: Some(&text[open..end]),
                after: &text[end..],
            }
        }
        _ => FaqSplit {
            before: text,
            region: None,
            after: "",
        },
    }
}

/// All `<question>` span contents in order, trimmed.
pub(crate) fn questions_in(text: &str) -> Vec<String> {
    QUESTION_SPAN
        .captures_iter(text)
        .map(|caps| caps[1].trim().to_string())
        .collect()
}

/// All `<answer>` span contents in order, trimmed.
pub(crate) fn answers_in(text: &str) -> Vec<String> {
    ANSWER_SPAN
        .captures_iter(text)
        .map(|caps| caps[1].trim().to_string())
        .collect()
}

/// Pair questions and answers positionally. The two tag kinds are collected
/// in two independent passes, so interleaving does not matter; only the
/// counts do.
fn extract_pairs(
    region: &str,
    rules: &FaqRules,
) -> Result<Vec<(String, String)>, ConvertError> {
    let questions = questions_in(region);
    let answers = answers_in(region);

    if questions.len() != answers.len() && rules.mismatch == MismatchPolicy::Error {
        return Err(ConvertError::QuestionAnswerMismatch {
            questions: questions.len(),
            answers: answers.len(),
        });
    }

    Ok(questions.into_iter().zip(answers).collect())
}
