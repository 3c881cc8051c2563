//! Page-ready rendition of a generated blog.

use serde::Serialize;

use crate::formatting::html::normalize_for_display;
use crate::generation::catalog::{audience_display_name, tone_display_name};
use crate::generation::models::GeneratedBlog;

const DEFAULT_TONE_LABEL: &str = "Professional";
const DEFAULT_AUDIENCE_LABEL: &str = "Technical Audience";

/// e.g. `October 19, 2026 at 03:04 PM`
const GENERATED_ON_FORMAT: &str = "%B %-d, %Y at %I:%M %p";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPreview {
    pub title: String,
    pub tone: String,
    pub audience: String,
    pub generated_on: String,
    pub html: String,
}

impl BlogPreview {
    pub fn from_blog(blog: &GeneratedBlog) -> Self {
        let request = &blog.request;
        Self {
            title: request.topic.clone(),
            tone: label_or(tone_display_name(request.tone.trim()), DEFAULT_TONE_LABEL),
            audience: label_or(
                audience_display_name(request.audience.trim()),
                DEFAULT_AUDIENCE_LABEL,
            ),
            generated_on: blog.generated_at.format(GENERATED_ON_FORMAT).to_string(),
            html: normalize_for_display(&blog.content),
        }
    }
}

fn label_or(label: &str, default: &str) -> String {
    if label.is_empty() {
        default.to_string()
    } else {
        label.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::test_support::sample_blog;

    #[test]
    fn test_preview_labels_and_html() {
        let mut blog = sample_blog("# Title\n\nBody");
        blog.request.audience = "architects".into();
        blog.request.tone = "educational".into();

        let preview = BlogPreview::from_blog(&blog);
        assert_eq!(preview.title, blog.request.topic);
        assert_eq!(preview.tone, "Educational & Explanatory");
        assert_eq!(preview.audience, "Solution Architects");
        assert!(preview.html.starts_with("<h1 class="));
    }

    #[test]
    fn test_blank_labels_fall_back() {
        let mut blog = sample_blog("<p>x</p>");
        blog.request.audience = String::new();
        blog.request.tone = "  ".into();

        let preview = BlogPreview::from_blog(&blog);
        assert_eq!(preview.tone, "Professional");
        assert_eq!(preview.audience, "Technical Audience");
    }

    #[test]
    fn test_generated_on_is_human_readable() {
        let mut blog = sample_blog("<p>x</p>");
        blog.generated_at = Utc.with_ymd_and_hms(2026, 10, 19, 15, 4, 0).unwrap();
        assert_eq!(
            BlogPreview::from_blog(&blog).generated_on,
            "October 19, 2026 at 03:04 PM"
        );
    }

    #[test]
    fn test_preview_serializes_camel_case() {
        let value = serde_json::to_value(BlogPreview::from_blog(&sample_blog("text"))).unwrap();
        assert!(value["generatedOn"].is_string());
        assert!(value["html"].as_str().unwrap().contains("<p class="));
    }
}
