//! Line-oriented block parser.
//!
//! The document is split into lines and each line is routed through the
//! classifier chain. Two things need state across lines: fenced code regions
//! (consumed as one atomic block, repositioning the line index) and list
//! items (buffered greedily across consecutive matching lines and flushed as
//! a single `List` block on the first line that is not an item).

use crate::block::Block;
use crate::classify::{classify, LineClass};

/// Parse plain Markdown text (no FAQ handling) into a block sequence.
///
/// Infallible by design: unrecognized lines are dropped, never reported.
pub fn parse_lines(source: &str) -> Vec<Block> {
    let lines: Vec<&str> = source.split('\n').collect();
    let mut blocks = Vec::new();
    let mut items: Vec<String> = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        // Fences first: they can swallow a multi-line span.
        if let Some((code, resume)) = take_code_fence(&lines, i) {
            flush_items(&mut items, &mut blocks);
            blocks.push(code);
            i = resume;
            continue;
        }

        match classify(lines[i]) {
            Some(LineClass::Item(item)) => items.push(item),
            Some(LineClass::Block(block)) => {
                // Flush before pushing so block order mirrors line order.
                flush_items(&mut items, &mut blocks);
                blocks.push(block);
            }
            Some(LineClass::Drop) | None => flush_items(&mut items, &mut blocks),
        }
        i += 1;
    }

    flush_items(&mut items, &mut blocks);
    blocks
}

/// Emit buffered list items as one `List` block. A list block is only ever
/// materialized here, so it is never empty.
fn flush_items(items: &mut Vec<String>, blocks: &mut Vec<Block>) {
    if !items.is_empty() {
        blocks.push(Block::List {
            items: std::mem::take(items),
        });
    }
}

/// If `start` sits on a bare ``` line, consume lines verbatim until the
/// closing fence (or end of input) and return the code block together with
/// the index to resume at.
fn take_code_fence(lines: &[&str], start: usize) -> Option<(Block, usize)> {
    if lines[start].trim() != "```" {
        return None;
    }
    let mut end = start + 1;
    let mut code = Vec::new();
    while end < lines.len() && lines[end].trim() != "```" {
        code.push(lines[end]);
        end += 1;
    }
    if end < lines.len() {
        end += 1; // skip the closing fence
    }
    Some((
        Block::Code {
            code: code.join("\n"),
        },
        end,
    ))
}
