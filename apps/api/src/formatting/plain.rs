//! Copy-as-text rendering: strips markup from model output.

use std::sync::LazyLock;

use regex::Regex;

use crate::formatting::html::looks_like_html;

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("Invalid br regex"));
static BLOCK_CLOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</(p|h[1-6]|li|blockquote|pre|tr|ul|ol|table)\s*>")
        .expect("Invalid block close regex")
});
static LIST_ITEM_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<li(\s[^>]*)?>").expect("Invalid li regex"));
static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("Invalid tag regex"));

static HEADING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*#{1,6}[ \t]+").expect("Invalid heading regex"));
static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*```.*$\n?").expect("Invalid fence regex"));
static BULLET_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*[-*+][ \t]+").expect("Invalid bullet regex"));
static NUMBER_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*\d+\.[ \t]+").expect("Invalid number regex"));
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*\n]+?)\*\*").expect("Invalid bold regex"));
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*\n]+?)\*").expect("Invalid italic regex"));
static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`\n]+)`").expect("Invalid inline code regex"));
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]\n]+)\]\([^)\n]+\)").expect("Invalid link regex"));

static TRAILING_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)[ \t]+$").expect("Invalid trailing whitespace regex"));
static LEADING_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]+").expect("Invalid leading whitespace regex"));
static BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("Invalid blank run regex"));

const BULLET: &str = "• ";

/// Plain-text version of model output, HTML or Markdown.
pub fn to_plain_text(content: &str) -> String {
    let content = content.replace("\r\n", "\n");
    let text = if looks_like_html(&content) {
        strip_html(&content)
    } else {
        strip_markdown(&content)
    };

    let text = TRAILING_WHITESPACE.replace_all(&text, "");
    let text = BLANK_RUN.replace_all(&text, "\n\n");
    text.trim().to_string()
}

fn strip_html(html: &str) -> String {
    let text = LINE_BREAK.replace_all(html, "\n");
    let text = BLOCK_CLOSE.replace_all(&text, "\n");
    let text = LIST_ITEM_OPEN.replace_all(&text, BULLET);
    let text = ANY_TAG.replace_all(&text, "");
    let text = LEADING_WHITESPACE.replace_all(&text, "");
    decode_entities(&text)
}

fn strip_markdown(markdown: &str) -> String {
    let text = CODE_FENCE.replace_all(markdown, "");
    let text = HEADING_MARKER.replace_all(&text, "");
    // Bullets go first so a leading `*` is not read as emphasis.
    let text = BULLET_MARKER.replace_all(&text, BULLET);
    let text = NUMBER_MARKER.replace_all(&text, "");
    let text = BOLD.replace_all(&text, "$1");
    let text = ITALIC.replace_all(&text, "$1");
    let text = INLINE_CODE.replace_all(&text, "$1");
    LINK.replace_all(&text, "$1").into_owned()
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
