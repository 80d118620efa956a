//! Inline formatting conversion between Markdown syntax and HTML-like tags.
//!
//! Paragraph and list-item text travels through the block model with `<b>`,
//! `<i>` and `<a>` tags; Markdown input is rewritten into that form on parse
//! and back out on serialization. Both directions are pure string transforms
//! over non-nested spans.
//!
//! Ordering matters on the way in: both bold forms are rewritten before the
//! italic rule runs, so `__bold__` is never half-consumed as two italic
//! underscores.

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD_STARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static BOLD_UNDERSCORES: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.*?)__").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

static TAG_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<a href="([^"]+)">([^<]+)</a>"#).unwrap());
static TAG_BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"<b>([^<]+)</b>").unwrap());
static TAG_ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"<i>([^<]+)</i>").unwrap());

/// Rewrite Markdown inline syntax into HTML-like tags.
///
/// `**x**` and `__x__` become `<b>x</b>`, `_x_` becomes `<i>x</i>` (with the
/// word-boundary restrictions below), `[text](url)` becomes
/// `<a href="url">text</a>`.
pub fn to_html_tags(line: &str) -> String {
    let line = BOLD_STARS.replace_all(line, "<b>$1</b>");
    let line = BOLD_UNDERSCORES.replace_all(&line, "<b>$1</b>");
    let line = italicize(&line);
    LINK.replace_all(&line, r#"<a href="$2">$1</a>"#).into_owned()
}

/// Rewrite HTML-like tags back into Markdown inline syntax.
///
/// Single pass, non-greedy, non-nested: `<a>` first, then `<b>`, then `<i>`.
pub fn to_markdown(line: &str) -> String {
    let line = TAG_LINK.replace_all(line, "[$2]($1)");
    let line = TAG_BOLD.replace_all(&line, "**$1**");
    TAG_ITALIC.replace_all(&line, "*$1*").into_owned()
}

/// Replace `_x_` spans with `<i>x</i>`.
///
/// A span opens at an underscore not preceded by a word character or a
/// backslash, its content must start and end with a non-space non-underscore
/// character, and it closes at the nearest underscore that is not escaped and
/// not followed by a word character. Underscores inside identifiers like
/// `snake_case` therefore never open or close a span.
///
/// The `regex` crate has no lookaround, so the boundary conditions are
/// checked by scanning the neighbors of each candidate span directly.
fn italicize(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut out = String::with_capacity(line.len() + 16);
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '_' && can_open(&chars, i) {
            if let Some(close) = find_close(&chars, i) {
                out.push_str("<i>");
                out.extend(&chars[i + 1..close]);
                out.push_str("</i>");
                i = close + 1;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn can_open(chars: &[char], i: usize) -> bool {
    match i.checked_sub(1).and_then(|prev| chars.get(prev)) {
        Some(&prev) => !is_word(prev) && prev != '\\',
        None => true,
    }
}

/// Nearest viable closing underscore for a span opened at `open`, or `None`
/// when the opening position cannot start a span at all.
fn find_close(chars: &[char], open: usize) -> Option<usize> {
    let first = *chars.get(open + 1)?;
    if first == '_' || first.is_whitespace() {
        return None;
    }
    let mut j = open + 2;
    while j < chars.len() {
        if chars[j] == '_' {
            let last = chars[j - 1];
            let content_edge_ok = !last.is_whitespace() && last != '_' && last != '\\';
            let boundary_ok = chars.get(j + 1).map_or(true, |&next| !is_word(next));
            if content_edge_ok && boundary_ok {
                return Some(j);
            }
        }
        j += 1;
    }
    None
}
