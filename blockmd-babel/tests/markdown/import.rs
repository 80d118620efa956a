//! Import tests for the Markdown format (Markdown → blocks)
//!
//! These verify the classifier priorities and the cross-line state handling
//! (list buffering, fence extraction) through the public Format surface.

use blockmd_babel::format::Format;
use blockmd_babel::formats::markdown::MarkdownFormat;
use blockmd_babel::Block;

/// Helper to parse Markdown to blocks with default rules
fn md_to_blocks(md: &str) -> Vec<Block> {
    MarkdownFormat::default()
        .parse(md)
        .expect("Should parse markdown")
        .blocks
}

#[test]
fn test_single_header() {
    assert_eq!(
        md_to_blocks("# Title\n"),
        vec![Block::Header {
            level: 1,
            text: "Title".to_string()
        }]
    );
}

#[test]
fn test_header_levels_one_through_six() {
    for level in 1..=6u8 {
        let line = format!("{} H\n", "#".repeat(level as usize));
        assert_eq!(
            md_to_blocks(&line),
            vec![Block::Header {
                level,
                text: "H".to_string()
            }],
            "level {level} should parse"
        );
    }
}

#[test]
fn test_seven_hashes_are_not_a_header() {
    assert_eq!(
        md_to_blocks("####### H\n"),
        vec![Block::Paragraph {
            text: "####### H".to_string()
        }]
    );
}

#[test]
fn test_consecutive_items_collect_into_one_list() {
    assert_eq!(
        md_to_blocks("- a\n- b\n"),
        vec![Block::List {
            items: vec!["a".to_string(), "b".to_string()]
        }]
    );
}

#[test]
fn test_blank_line_between_items_splits_the_list() {
    let blocks = md_to_blocks("- a\n\n- b\n");
    assert_eq!(
        blocks,
        vec![
            Block::List {
                items: vec!["a".to_string()]
            },
            Block::List {
                items: vec!["b".to_string()]
            },
        ]
    );
}

#[test]
fn test_header_between_items_splits_the_list() {
    let blocks = md_to_blocks("- a\n## Mid\n- b\n");
    assert_eq!(blocks.len(), 3);
    assert!(matches!(blocks[1], Block::Header { level: 2, .. }));
}

#[test]
fn test_ordinal_items_keep_their_prefix() {
    assert_eq!(
        md_to_blocks("1. first\n2. second\n"),
        vec![Block::List {
            items: vec!["1. first".to_string(), "2. second".to_string()]
        }]
    );
}

#[test]
fn test_code_fence() {
    assert_eq!(
        md_to_blocks("```\nx=1\n```\n"),
        vec![Block::Code {
            code: "x=1".to_string()
        }]
    );
}

#[test]
fn test_unterminated_fence_consumes_to_end() {
    let blocks = md_to_blocks("```\nx=1\nY\n");
    assert_eq!(blocks.len(), 1);
    assert!(matches!(blocks[0], Block::Code { .. }));
}

#[test]
fn test_fence_shields_markdown_syntax() {
    assert_eq!(
        md_to_blocks("```\n# kept verbatim\n- kept too\n```\n"),
        vec![Block::Code {
            code: "# kept verbatim\n- kept too".to_string()
        }]
    );
}

#[test]
fn test_image_line() {
    assert_eq!(
        md_to_blocks("![cat](https://example.com/cat.png)\n"),
        vec![Block::Image {
            url: "https://example.com/cat.png".to_string(),
            caption: "cat".to_string()
        }]
    );
}

#[test]
fn test_caption_marker_line_is_suppressed() {
    // The serializer emits `<caption` after each image; re-importing must
    // not surface it as a paragraph.
    let blocks = md_to_blocks("![cat](https://example.com/cat.png)\n<cat\n");
    assert_eq!(blocks.len(), 1);
    assert!(matches!(blocks[0], Block::Image { .. }));
}

#[test]
fn test_blockquote_content_is_not_preserved() {
    assert_eq!(
        md_to_blocks("> lost\nkept\n"),
        vec![Block::Paragraph {
            text: "kept".to_string()
        }]
    );
}

#[test]
fn test_inline_formatting_in_paragraphs() {
    assert_eq!(
        md_to_blocks("has **bold**, _italic_ and [a link](https://x.dev)\n"),
        vec![Block::Paragraph {
            text: r#"has <b>bold</b>, <i>italic</i> and <a href="https://x.dev">a link</a>"#
                .to_string()
        }]
    );
}

#[test]
fn test_snake_case_survives_import() {
    assert_eq!(
        md_to_blocks("uses snake_case_names everywhere\n"),
        vec![Block::Paragraph {
            text: "uses snake_case_names everywhere".to_string()
        }]
    );
}

#[test]
fn test_block_order_mirrors_line_order() {
    let md = "# One\n\npara\n\n- item\n\n```\ncode\n```\n\n## Two\n";
    let blocks = md_to_blocks(md);
    assert!(matches!(blocks[0], Block::Header { level: 1, .. }));
    assert!(matches!(blocks[1], Block::Paragraph { .. }));
    assert!(matches!(blocks[2], Block::List { .. }));
    assert!(matches!(blocks[3], Block::Code { .. }));
    assert!(matches!(blocks[4], Block::Header { level: 2, .. }));
}

#[test]
fn test_empty_document() {
    assert!(md_to_blocks("").is_empty());
    assert!(md_to_blocks("\n\n").is_empty());
}
