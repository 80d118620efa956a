//! Import tests for the clean JSON format (clean JSON → blocks)

use blockmd_babel::format::Format;
use blockmd_babel::formats::clean_json::CleanJsonFormat;
use blockmd_babel::{Block, ConvertError};

#[test]
fn test_editor_document_parses() {
    let source = r#"{
        "time": 1712345678901,
        "blocks": [
            { "id": "abc", "type": "header", "data": { "text": "Title", "level": 1 } },
            { "id": "def", "type": "paragraph", "data": { "text": "body" } },
            { "id": "ghi", "type": "list", "data": { "style": "unordered", "items": ["a", "b"] } }
        ],
        "version": "2.28.2"
    }"#;
    let doc = CleanJsonFormat::default().parse(source).unwrap();
    assert_eq!(
        doc.blocks,
        vec![
            Block::Header {
                level: 1,
                text: "Title".to_string()
            },
            Block::Paragraph {
                text: "body".to_string()
            },
            Block::List {
                items: vec!["a".to_string(), "b".to_string()]
            },
        ]
    );
}

#[test]
fn test_image_url_from_upload_descriptor() {
    let source = r#"{ "blocks": [
        { "id": "a", "type": "image",
          "data": { "file": { "url": "https://cdn/x.png" }, "caption": "x" } }
    ] }"#;
    let doc = CleanJsonFormat::default().parse(source).unwrap();
    assert_eq!(
        doc.blocks,
        vec![Block::Image {
            url: "https://cdn/x.png".to_string(),
            caption: "x".to_string()
        }]
    );
}

#[test]
fn test_unknown_block_type_fails_loudly() {
    let source = r#"{ "blocks": [ { "id": "a", "type": "table", "data": {} } ] }"#;
    assert_eq!(
        CleanJsonFormat::default().parse(source).unwrap_err(),
        ConvertError::UnknownBlockType("table".to_string())
    );
}

#[test]
fn test_unknown_type_does_not_drop_silently() {
    // Even when every other block is valid, one unknown type rejects the
    // whole document.
    let source = r#"{ "blocks": [
        { "id": "a", "type": "paragraph", "data": { "text": "fine" } },
        { "id": "b", "type": "quote", "data": { "text": "nope" } }
    ] }"#;
    assert!(matches!(
        CleanJsonFormat::default().parse(source).unwrap_err(),
        ConvertError::UnknownBlockType(_)
    ));
}

#[test]
fn test_malformed_document_is_a_parse_error() {
    assert!(matches!(
        CleanJsonFormat::default().parse("[]").unwrap_err(),
        ConvertError::ParseError(_)
    ));
}
