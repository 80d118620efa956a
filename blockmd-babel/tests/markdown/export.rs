//! Export tests for the Markdown format (blocks → Markdown)

use blockmd_babel::format::Format;
use blockmd_babel::formats::markdown::MarkdownFormat;
use blockmd_babel::{Block, Document};
use insta::assert_snapshot;

fn blocks_to_md(blocks: Vec<Block>) -> String {
    MarkdownFormat::default()
        .serialize(&Document::with_blocks(blocks))
        .expect("Should serialize to markdown")
}

#[test]
fn test_full_document_export() {
    let md = blocks_to_md(vec![
        Block::Header {
            level: 1,
            text: "Title".to_string(),
        },
        Block::Paragraph {
            text: "plain with <b>bold</b>".to_string(),
        },
        Block::Image {
            url: "https://example.com/a.png".to_string(),
            caption: "pic".to_string(),
        },
        Block::List {
            items: vec!["one".to_string(), "1. numbered".to_string()],
        },
        Block::Code {
            code: "let x = 1;".to_string(),
        },
    ]);

    assert_snapshot!(md, @r"
# Title

plain with **bold**

![pic](https://example.com/a.png)
<pic

- one
1. numbered

```
let x = 1;
```
");
}

#[test]
fn test_simple_image_exports_like_image() {
    let md = blocks_to_md(vec![Block::SimpleImage {
        url: "u".to_string(),
        caption: "c".to_string(),
    }]);
    assert_eq!(md, "![c](u)\n<c");
}

#[test]
fn test_links_convert_back() {
    let md = blocks_to_md(vec![Block::Paragraph {
        text: r#"see <a href="https://x.dev">docs</a>"#.to_string(),
    }]);
    assert_eq!(md, "see [docs](https://x.dev)");
}

#[test]
fn test_italic_exports_as_star() {
    let md = blocks_to_md(vec![Block::Paragraph {
        text: "<i>x</i>".to_string(),
    }]);
    assert_eq!(md, "*x*");
}

#[test]
fn test_list_items_are_emitted_raw() {
    // Item text keeps its tags on export; only paragraphs get the inline
    // back-conversion.
    let md = blocks_to_md(vec![Block::List {
        items: vec!["<b>x</b>".to_string()],
    }]);
    assert_eq!(md, "- <b>x</b>");
}
