//! Prompt Builder: renders a `BlogRequest` into the six-pillar prompt.
//!
//! Pure and deterministic: no I/O, no randomness, input is only borrowed.
//! Callers must run `BlogRequest::validate()` first.

use std::collections::HashSet;

use crate::generation::catalog::{
    audience_display_name, tone_description, tone_display_name, ElementCatalog, Pillar,
};
use crate::generation::models::BlogRequest;
use crate::generation::prompts::BLOG_PROMPT_TEMPLATE;

/// Builds the full generation prompt for a validated request.
pub fn build_prompt(request: &BlogRequest) -> String {
    let sections: Vec<String> = Pillar::ALL
        .iter()
        .map(|&pillar| render_pillar_section(pillar.catalog(), request.selection(pillar)))
        .collect();

    let audience = audience_display_name(&request.audience);
    let tone_description = tone_description(&request.tone);

    render_template(
        BLOG_PROMPT_TEMPLATE,
        &[
            ("topic", request.topic.as_str()),
            ("audience", audience),
            ("main_problem", request.main_problem.as_str()),
            ("evidence_section", sections[0].as_str()),
            ("practical_section", sections[1].as_str()),
            ("analytical_section", sections[2].as_str()),
            ("speculative_section", sections[3].as_str()),
            ("contextual_section", sections[4].as_str()),
            ("engagement_section", sections[5].as_str()),
            ("tone_name", tone_display_name(&request.tone)),
            ("tone_description", tone_description.as_str()),
        ],
    )
}

/// Renders one pillar's selected elements, one canned block per distinct key.
///
/// Empty selection → the fixed "No <pillar> elements selected." line.
/// Unknown key → a generic one-line instruction naming the key.
pub fn render_pillar_section(catalog: &ElementCatalog, selected: &[String]) -> String {
    if selected.is_empty() {
        return format!("No {} elements selected.", catalog.pillar.name());
    }

    let mut seen = HashSet::new();
    selected
        .iter()
        .filter(|key| seen.insert(key.as_str()))
        .map(|key| match catalog.describe(key) {
            Some(block) => block.to_string(),
            None => format!(
                "**[{key} SELECTED]** - Include relevant {} elements.",
                catalog.fallback_noun
            ),
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Replaces `{name}` placeholders in one pass over the template.
/// Substituted values are never rescanned, so user text containing braces is
/// emitted verbatim. Unknown `{…}` sequences are left untouched.
fn render_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let substitution = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });

        match substitution {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
