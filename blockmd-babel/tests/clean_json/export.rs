//! Export tests for the clean JSON format (blocks → clean JSON)
//!
//! The format's id source and clock are injected, so exports are fully
//! deterministic here.

use crate::common::{FixedClock, SeqIds};
use blockmd_babel::format::Format;
use blockmd_babel::formats::clean_json::{CleanJsonFormat, CleanJsonOptions};
use blockmd_babel::{Block, Document};
use insta::assert_snapshot;
use std::collections::HashMap;

fn deterministic_format() -> CleanJsonFormat {
    CleanJsonFormat::new(
        Box::new(SeqIds::new()),
        Box::new(FixedClock(1700000000000)),
        CleanJsonOptions::default(),
    )
}

#[test]
fn test_envelope_and_block_shape() {
    let doc = Document::with_blocks(vec![Block::Header {
        level: 1,
        text: "Title".to_string(),
    }]);
    let out = deterministic_format().serialize(&doc).unwrap();

    assert_snapshot!(out, @r#"
{
  "blocks": [
    {
      "data": {
        "level": 1,
        "text": "Title"
      },
      "id": "id000",
      "type": "header"
    }
  ],
  "time": 1700000000000,
  "version": "2.28.2"
}
"#);
}

#[test]
fn test_every_block_gets_its_own_id() {
    let doc = Document::with_blocks(vec![
        Block::Paragraph {
            text: "a".to_string(),
        },
        Block::Paragraph {
            text: "b".to_string(),
        },
    ]);
    let out = deterministic_format().serialize(&doc).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["blocks"][0]["id"], "id000");
    assert_eq!(value["blocks"][1]["id"], "id001");
}

#[test]
fn test_version_and_pretty_options() {
    let doc = Document::with_blocks(vec![]);
    let mut options = HashMap::new();
    options.insert("version".to_string(), "9.9.9".to_string());
    options.insert("pretty".to_string(), "false".to_string());

    let out = deterministic_format()
        .serialize_with_options(&doc, &options)
        .unwrap();
    assert!(!out.contains('\n'));
    assert!(out.contains(r#""version":"9.9.9""#));
}

#[test]
fn test_unknown_option_is_rejected() {
    let doc = Document::with_blocks(vec![]);
    let mut options = HashMap::new();
    options.insert("theme".to_string(), "dark".to_string());

    assert!(deterministic_format()
        .serialize_with_options(&doc, &options)
        .is_err());
}

#[test]
fn test_markdown_to_clean_json_end_to_end() {
    use blockmd_babel::formats::markdown::MarkdownFormat;

    let doc = MarkdownFormat::default()
        .parse("# T\n\n- a\n- b\n")
        .unwrap();
    let out = deterministic_format().serialize(&doc).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value["blocks"][0]["type"], "header");
    assert_eq!(value["blocks"][1]["type"], "list");
    assert_eq!(value["blocks"][1]["data"]["style"], "unordered");
    assert_eq!(value["blocks"][1]["data"]["items"][1], "b");
}

#[test]
fn test_clean_json_round_trip_preserves_blocks() {
    let original = Document::with_blocks(vec![
        Block::Header {
            level: 2,
            text: "H".to_string(),
        },
        Block::Image {
            url: "u".to_string(),
            caption: "c".to_string(),
        },
        Block::SimpleImage {
            url: "u2".to_string(),
            caption: "c2".to_string(),
        },
        Block::Paragraph {
            text: "p".to_string(),
        },
        Block::List {
            items: vec!["1. a".to_string()],
        },
        Block::Code {
            code: "x".to_string(),
        },
    ]);
    let format = deterministic_format();
    let encoded = format.serialize(&original).unwrap();
    let decoded = format.parse(&encoded).unwrap();
    assert_eq!(original, decoded);
}
