//! Display normalization: turns model output into styled HTML for the page.
//!
//! HTML input gets presentation classes injected per tag. Markdown input is
//! converted line by line into the same tag vocabulary, already styled.
//! Re-running on either output is a fixpoint: detection sees the emitted block
//! tags and injection replaces, rather than appends, the `class` attribute.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Presentation classes per tag.
const TAG_CLASSES: &[(&str, &str)] = &[
    ("h1", "text-4xl font-bold mb-6 mt-8 text-gray-900 border-b border-gray-200 pb-2"),
    ("h2", "text-3xl font-semibold mb-4 mt-8 text-gray-800"),
    ("h3", "text-2xl font-medium mb-3 mt-6 text-gray-700"),
    ("h4", "text-xl font-medium mb-2 mt-4 text-gray-700"),
    ("h5", "text-lg font-medium mb-2 mt-3 text-gray-700"),
    ("h6", "text-base font-medium mb-2 mt-3 text-gray-700"),
    ("p", "mb-4 leading-relaxed text-gray-700 text-base"),
    ("ul", "list-disc ml-6 mb-4 space-y-2"),
    ("ol", "list-decimal ml-6 mb-4 space-y-2"),
    ("li", "mb-1 text-gray-700"),
    ("strong", "font-bold text-gray-900"),
    ("em", "italic text-gray-700"),
    (
        "blockquote",
        "border-l-4 border-blue-500 pl-6 py-2 my-4 bg-blue-50 italic text-gray-600",
    ),
    ("code", "bg-gray-100 text-gray-800 px-2 py-1 rounded text-sm font-mono"),
    ("pre", "bg-gray-900 text-gray-100 p-4 rounded-lg overflow-x-auto mb-4 text-sm"),
    ("a", "text-blue-600 hover:text-blue-800 underline"),
    ("table", "w-full border-collapse border border-gray-300 mb-4"),
    ("th", "border border-gray-300 px-4 py-2 bg-gray-50 font-semibold text-left"),
    ("td", "border border-gray-300 px-4 py-2"),
];

static BLOCK_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(h[1-6]|p|ul|ol|blockquote|pre|table)(\s[^>]*)?>")
        .expect("Invalid block tag regex")
});

static STYLED_OPEN_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)<(h[1-6]|p|ul|ol|li|strong|em|blockquote|code|pre|a|table|th|td)(\s[^>]*)?>",
    )
    .expect("Invalid open tag regex")
});

static CLASS_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\s+class\s*=\s*("[^"]*"|'[^']*'|[^\s>]+)"#).expect("Invalid class regex")
});

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.*)$").expect("Invalid heading regex"));
static BLOCKQUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^>\s?(.*)$").expect("Invalid blockquote regex"));
static BULLET_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*+]\s+(.*)$").expect("Invalid bullet regex"));
static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+(.*)$").expect("Invalid numbered regex"));
static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`\n]+)`").expect("Invalid inline code regex"));
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*\n]+?)\*\*").expect("Invalid bold regex"));
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*\n]+?)\*").expect("Invalid italic regex"));
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]\n]+)\]\(([^)\s]+)\)").expect("Invalid link regex"));

fn class_for(tag: &str) -> Option<&'static str> {
    TAG_CLASSES
        .iter()
        .find(|(t, _)| t.eq_ignore_ascii_case(tag))
        .map(|(_, class)| *class)
}

/// Opening tag with its presentation class, e.g. `<p class="...">`.
fn open_tag(tag: &str) -> String {
    match class_for(tag) {
        Some(class) => format!(r#"<{tag} class="{class}">"#),
        None => format!("<{tag}>"),
    }
}

/// Normalizes raw model output into styled HTML. Never fails; text that
/// matches nothing is passed through.
pub fn normalize_for_display(raw: &str) -> String {
    if looks_like_html(raw) {
        inject_presentation(raw)
    } else {
        markdown_to_html(raw)
    }
}

/// True when the text already contains block-level markup.
pub fn looks_like_html(text: &str) -> bool {
    BLOCK_TAG.is_match(text)
}

/// Adds (or replaces) the presentation class on every styled opening tag,
/// leaving nesting, other attributes and text untouched.
pub fn inject_presentation(html: &str) -> String {
    STYLED_OPEN_TAG
        .replace_all(html, |caps: &Captures| {
            let tag = &caps[1];
            let attrs = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            let attrs = CLASS_ATTR.replace_all(attrs, "");
            match class_for(tag) {
                Some(class) => format!(r#"<{tag}{attrs} class="{class}">"#),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

/// Line-oriented Markdown → HTML conversion.
#[derive(Default)]
struct MarkdownRenderer {
    blocks: Vec<String>,
    paragraph: Vec<String>,
    list: Option<(ListKind, Vec<String>)>,
    code: Option<Vec<String>>,
}

impl MarkdownRenderer {
    fn line(&mut self, line: &str) {
        if let Some(code) = self.code.as_mut() {
            if line.trim_start().starts_with("```") {
                self.close_code();
            } else {
                code.push(line.to_string());
            }
            return;
        }

        let trimmed = line.trim();

        if trimmed.starts_with("```") {
            self.close_open_blocks();
            self.code = Some(Vec::new());
        } else if trimmed.is_empty() {
            self.close_open_blocks();
        } else if let Some(caps) = HEADING.captures(trimmed) {
            self.close_open_blocks();
            let tag = format!("h{}", caps[1].len());
            self.blocks.push(format!(
                "{}{}</{tag}>",
                open_tag(&tag),
                render_inline(caps[2].trim())
            ));
        } else if let Some(caps) = BLOCKQUOTE.captures(trimmed) {
            self.close_open_blocks();
            self.blocks.push(format!(
                "{}{}</blockquote>",
                open_tag("blockquote"),
                render_inline(caps[1].trim())
            ));
        } else if let Some(caps) = BULLET_ITEM.captures(trimmed) {
            self.list_item(ListKind::Unordered, &caps[1]);
        } else if let Some(caps) = NUMBERED_ITEM.captures(trimmed) {
            self.list_item(ListKind::Ordered, &caps[1]);
        } else {
            self.close_list();
            self.paragraph.push(trimmed.to_string());
        }
    }

    fn list_item(&mut self, kind: ListKind, text: &str) {
        self.close_paragraph();
        if self.list.as_ref().is_some_and(|(open, _)| *open != kind) {
            self.close_list();
        }
        let item = format!("{}{}</li>", open_tag("li"), render_inline(text.trim()));
        self.list
            .get_or_insert_with(|| (kind, Vec::new()))
            .1
            .push(item);
    }

    fn close_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let text = self.paragraph.join(" ");
        self.paragraph.clear();
        self.blocks
            .push(format!("{}{}</p>", open_tag("p"), render_inline(&text)));
    }

    fn close_list(&mut self) {
        if let Some((kind, items)) = self.list.take() {
            let tag = kind.tag();
            self.blocks
                .push(format!("{}\n{}\n</{tag}>", open_tag(tag), items.join("\n")));
        }
    }

    fn close_code(&mut self) {
        if let Some(lines) = self.code.take() {
            self.blocks.push(format!(
                "{}{}{}</code></pre>",
                open_tag("pre"),
                open_tag("code"),
                escape_html(&lines.join("\n"))
            ));
        }
    }

    fn close_open_blocks(&mut self) {
        self.close_paragraph();
        self.close_list();
    }

    fn finish(mut self) -> String {
        // An unterminated fence still renders as code.
        self.close_code();
        self.close_open_blocks();
        self.blocks.join("\n")
    }
}

/// Converts Markdown into the styled HTML vocabulary.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut renderer = MarkdownRenderer::default();
    for line in markdown.lines() {
        renderer.line(line);
    }
    renderer.finish()
}

/// Inline code spans first; emphasis and links only outside them.
fn render_inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for caps in INLINE_CODE.captures_iter(text) {
        let Some(span) = caps.get(0) else { continue };
        out.push_str(&render_emphasis(&text[last..span.start()]));
        out.push_str(&open_tag("code"));
        out.push_str(&escape_html(&caps[1]));
        out.push_str("</code>");
        last = span.end();
    }

    out.push_str(&render_emphasis(&text[last..]));
    out
}

fn render_emphasis(text: &str) -> String {
    let text = BOLD.replace_all(text, |caps: &Captures| {
        format!("{}{}</strong>", open_tag("strong"), &caps[1])
    });
    let text = ITALIC.replace_all(&text, |caps: &Captures| {
        format!("{}{}</em>", open_tag("em"), &caps[1])
    });
    LINK.replace_all(&text, |caps: &Captures| {
        format!(
            r#"<a href="{}" class="{}">{}</a>"#,
            &caps[2],
            class_for("a").unwrap_or_default(),
            &caps[1]
        )
    })
    .into_owned()
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
