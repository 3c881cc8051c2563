//! Platform export: rewrites model output as Markdown the Medium editor
//! accepts on paste.
//!
//! The editor ignores `#` headings, so markers are stripped, then list and
//! emphasis spacing is repaired. The whole pass is re-run until the text stops
//! changing, which makes `normalize_for_platform_export` idempotent even when a
//! split line re-pairs emphasis markers.

use std::sync::LazyLock;

use regex::Regex;

/// Upper bound on repair passes before the current text is returned as is.
const MAX_PASSES: usize = 8;

/// A single-line document shorter than this is promoted to a title.
const TITLE_MAX_CHARS: usize = 100;

static HEADING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*#+[ \t]+").expect("Invalid heading marker regex"));
static INLINE_NUMBERED_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\.\*\*([^*:\n]+?)(?::\*\*|\*\*:)").expect("Invalid numbered label regex")
});
static BULLET_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*[-*+][ \t]+").expect("Invalid bullet regex"));
static NUMBER_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*(\d+)\.[ \t]+").expect("Invalid number regex"));
static HEADING_SPACING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*(#{1,6})[ \t]+").expect("Invalid heading regex"));
static TRAILING_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)[ \t]+$").expect("Invalid trailing whitespace regex"));
static BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("Invalid blank run regex"));
static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[-*+]\s|\d+\.\s)").expect("Invalid list item regex"));

/// Normalizes raw model output for paste into the Medium editor.
/// Never fails; unmatched text passes through.
pub fn normalize_for_platform_export(raw: &str) -> String {
    let mut current = raw.replace("\r\n", "\n");

    for _ in 0..MAX_PASSES {
        let next = export_pass(&current);
        if next == current {
            break;
        }
        current = next;
    }

    current
}

fn export_pass(text: &str) -> String {
    let stripped = HEADING_MARKER.replace_all(text, "");
    promote_title(repair_markdown(&stripped))
}

/// Repairs list, heading and emphasis spacing without removing structure.
pub fn repair_markdown(text: &str) -> String {
    let text = split_inline_numbered_labels(text);
    let text = BULLET_MARKER.replace_all(&text, "- ");
    let text = NUMBER_MARKER.replace_all(&text, "${1}. ");
    let text = HEADING_SPACING.replace_all(&text, "$1 ");
    let text = hug_emphasis_markers(&text);
    let text = TRAILING_WHITESPACE.replace_all(&text, "");
    let text = BLANK_RUN.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// `1.**Label:**text` → `\n1. **Label:**text`. A colon right after the
/// closing marker (`1.**Label**:`) is moved inside it.
pub fn split_inline_numbered_labels(text: &str) -> String {
    INLINE_NUMBERED_LABEL
        .replace_all(text, "\n${1}. **${2}:**")
        .into_owned()
}

/// Removes whitespace just inside paired `*`/`**` markers, line by line.
pub fn hug_emphasis_markers(text: &str) -> String {
    text.split('\n').map(hug_line).collect::<Vec<_>>().join("\n")
}

fn hug_line(line: &str) -> String {
    let bytes = line.as_bytes();
    let mut runs: Vec<(usize, usize)> = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'*' {
            let start = i;
            while i < bytes.len() && bytes[i] == b'*' {
                i += 1;
            }
            runs.push((start, i));
        } else {
            i += 1;
        }
    }

    let mut removed = vec![false; bytes.len()];
    for width in [1, 2] {
        let mut open: Option<usize> = None;
        for &(start, end) in runs.iter().filter(|(s, e)| e - s == width) {
            let Some(open_end) = open.take() else {
                open = Some(end);
                continue;
            };

            let inner = &line[open_end..start];
            if inner.trim().is_empty() {
                continue;
            }
            let leading = inner.len() - inner.trim_start().len();
            let trailing = inner.len() - inner.trim_end().len();
            removed[open_end..open_end + leading].fill(true);
            removed[start - trailing..start].fill(true);
        }
    }

    line.char_indices()
        .filter(|(idx, _)| !removed[*idx])
        .map(|(_, c)| c)
        .collect()
}

/// A lone short plain line becomes the document title.
fn promote_title(text: String) -> String {
    let is_title = !text.is_empty()
        && !text.contains('\n')
        && !text.starts_with('#')
        && !text.starts_with('>')
        && !text.starts_with('<')
        && !text.contains("**")
        && !LIST_ITEM.is_match(&text)
        && text.chars().count() < TITLE_MAX_CHARS;

    if is_title {
        format!("# {text}")
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_stripped_and_blank_run_collapsed() {
        assert_eq!(
            normalize_for_platform_export("# Title\n\n\n\nBody"),
            "Title\n\nBody"
        );
    }

    #[test]
    fn test_every_heading_level_is_stripped() {
        let out = normalize_for_platform_export("# One\n## Two\n   ### Three\n###### Six\nPlain");
        assert_eq!(out, "One\nTwo\nThree\nSix\nPlain");
    }

    #[test]
    fn test_inline_numbered_label_starts_new_line() {
        let split = split_inline_numbered_labels("1.**Label:**text");
        assert_eq!(split, "\n1. **Label:**text");

        let out = normalize_for_platform_export("Intro: 1.**Label:**text");
        assert_eq!(out, "Intro:\n1. **Label:**text");
    }

    #[test]
    fn test_inline_label_with_colon_after_marker() {
        assert_eq!(
            split_inline_numbered_labels("2.**Setup**:rest"),
            "\n2. **Setup:**rest"
        );
    }

    #[test]
    fn test_bullets_are_canonicalised() {
        let out = repair_markdown("* a\n+ b\n-   c\n  - d");
        assert_eq!(out, "- a\n- b\n- c\n- d");
    }

    #[test]
    fn test_numbered_markers_get_one_space() {
        assert_eq!(repair_markdown("1.   first\n2.\tsecond"), "1. first\n2. second");
    }

    #[test]
    fn test_heading_spacing_repaired() {
        assert_eq!(repair_markdown("##   Title"), "## Title");
    }

    #[test]
    fn test_emphasis_markers_hug_text() {
        assert_eq!(
            hug_emphasis_markers("** bold ** and * it *"),
            "**bold** and *it*"
        );
    }

    #[test]
    fn test_whitespace_outside_markers_untouched() {
        assert_eq!(hug_emphasis_markers("a ** b ** c"), "a **b** c");
        assert_eq!(hug_emphasis_markers("**a** **b**"), "**a** **b**");
    }

    #[test]
    fn test_blank_emphasis_and_lone_markers_left_alone() {
        assert_eq!(hug_emphasis_markers("** ** and a lone * star"), "** ** and a lone * star");
    }

    #[test]
    fn test_emphasis_pairs_do_not_cross_lines() {
        assert_eq!(hug_emphasis_markers("*a \n b*"), "*a \n b*");
    }

    #[test]
    fn test_trailing_whitespace_and_document_trimmed() {
        let out = normalize_for_platform_export("\n\n First line   \nSecond\t\n\n");
        assert_eq!(out, "First line\nSecond");
    }

    #[test]
    fn test_crlf_line_endings_normalised() {
        let out = normalize_for_platform_export("## Intro\r\n\r\n\r\n\r\nBody\r\n");
        assert_eq!(out, "Intro\n\nBody");
    }

    #[test]
    fn test_single_short_line_is_promoted() {
        assert_eq!(normalize_for_platform_export("Why caching fails"), "# Why caching fails");
        assert_eq!(normalize_for_platform_export("## Why caching fails"), "# Why caching fails");
    }

    #[test]
    fn test_title_not_promoted_when_long_bold_or_list() {
        let long = "x".repeat(TITLE_MAX_CHARS);
        assert_eq!(normalize_for_platform_export(&long), long);
        assert_eq!(normalize_for_platform_export("**Bold**"), "**Bold**");
        assert_eq!(normalize_for_platform_export("- item"), "- item");
        assert_eq!(normalize_for_platform_export("1. item"), "1. item");
        assert_eq!(normalize_for_platform_export("<p>Hi</p>"), "<p>Hi</p>");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_for_platform_export(""), "");
        assert_eq!(normalize_for_platform_export(" \n\n\t"), "");
    }

    #[test]
    fn test_export_is_idempotent() {
        let samples = [
            "# Title\n\n\n\nBody",
            "Title only",
            "1.**Label:**text 2.**Next**:more",
            "* ** bold ** item\n+ *  it *\n\n\n\n3.  step",
            "## Heading\nSome text with ** spaced ** emphasis   \n\n```\ncode\n```",
            "<h1>Hi</h1><p>html passes through</p>",
            "a * b * c ** d",
            "*x 1.**A:**y*",
            "",
        ];
        for sample in samples {
            let once = normalize_for_platform_export(sample);
            let twice = normalize_for_platform_export(&once);
            assert_eq!(once, twice, "not idempotent for {sample:?}");
        }
    }
}
