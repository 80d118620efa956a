//! FAQ sectioning through the public Markdown format surface.

use blockmd_babel::faq::{FaqRules, MismatchPolicy};
use blockmd_babel::format::Format;
use blockmd_babel::formats::markdown::{MarkdownFormat, MarkdownRules};
use blockmd_babel::{Block, ConvertError};

#[test]
fn test_single_pair() {
    let md = "<question>\nQ1\n</question>\n<answer>\nA1\n</answer>\n";
    let doc = MarkdownFormat::default().parse(md).unwrap();
    assert_eq!(
        doc.blocks,
        vec![
            Block::Header {
                level: 5,
                text: "Q1".to_string()
            },
            Block::Paragraph {
                text: "A1".to_string()
            },
        ]
    );
}

#[test]
fn test_multiple_pairs_in_order() {
    let md = "<question>\nQ1\n</question>\n<answer>\nA1\n</answer>\n\
              <question>\nQ2\n</question>\n<answer>\nA2\n</answer>\n";
    let doc = MarkdownFormat::default().parse(md).unwrap();
    let headers: Vec<&str> = doc
        .blocks
        .iter()
        .filter_map(|b| match b {
            Block::Header { level: 5, text } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(headers, vec!["Q1", "Q2"]);
}

#[test]
fn test_answers_can_hold_any_block_kind() {
    let md = "<question>\nQ\n</question>\n<answer>\n### Sub\n- a\n```\nc\n```\n</answer>\n";
    let doc = MarkdownFormat::default().parse(md).unwrap();
    assert_eq!(
        doc.blocks,
        vec![
            Block::Header {
                level: 5,
                text: "Q".to_string()
            },
            Block::Header {
                level: 3,
                text: "Sub".to_string()
            },
            Block::List {
                items: vec!["a".to_string()]
            },
            Block::Code {
                code: "c".to_string()
            },
        ]
    );
}

#[test]
fn test_content_around_the_region_is_spliced_in_order() {
    let md = "# Intro\n<question>\nQ\n</question>\n<answer>\nA\n</answer>\n# Outro\n";
    let doc = MarkdownFormat::default().parse(md).unwrap();
    assert_eq!(
        doc.blocks,
        vec![
            Block::Header {
                level: 1,
                text: "Intro".to_string()
            },
            Block::Header {
                level: 5,
                text: "Q".to_string()
            },
            Block::Paragraph {
                text: "A".to_string()
            },
            Block::Header {
                level: 1,
                text: "Outro".to_string()
            },
        ]
    );
}

#[test]
fn test_mismatch_is_an_error_by_default() {
    let md = "<question>\nQ1\n</question>\n<question>\nQ2\n</question>\n<answer>\nA1\n</answer>\n";
    let err = MarkdownFormat::default().parse(md).unwrap_err();
    assert_eq!(
        err,
        ConvertError::QuestionAnswerMismatch {
            questions: 2,
            answers: 1
        }
    );
}

#[test]
fn test_mismatch_truncation_is_opt_in() {
    let md = "<question>\nQ1\n</question>\n<question>\nQ2\n</question>\n<answer>\nA1\n</answer>\n";
    let rules = FaqRules {
        mismatch: MismatchPolicy::Truncate,
        ..FaqRules::default()
    };
    let format = MarkdownFormat::new(rules, MarkdownRules::default());
    let doc = format.parse(md).unwrap();
    assert_eq!(doc.blocks.len(), 2);
}

#[test]
fn test_unclosed_region_degrades_to_plain_content() {
    let md = "<question>\nno closing tag here\n";
    let doc = MarkdownFormat::default().parse(md).unwrap();
    // No splice happened: no level-5 header was synthesized.
    assert!(doc
        .blocks
        .iter()
        .all(|b| !matches!(b, Block::Header { level: 5, .. })));
}
