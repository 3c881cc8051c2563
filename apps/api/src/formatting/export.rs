//! Downloadable renditions of a generated blog.

use serde::Deserialize;

use crate::errors::AppError;
use crate::formatting::medium::normalize_for_platform_export;
use crate::formatting::plain::to_plain_text;
use crate::generation::models::GeneratedBlog;

/// Slug used when the topic has no characters to keep.
const FALLBACK_SLUG: &str = "blog";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Raw model content as an HTML file.
    #[default]
    Html,
    /// Platform-export Markdown.
    Medium,
    /// Copy-as-text rendition.
    Text,
}

impl ExportFormat {
    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Html => "text/html; charset=utf-8",
            ExportFormat::Medium => "text/markdown; charset=utf-8",
            ExportFormat::Text => "text/plain; charset=utf-8",
        }
    }

    fn file_suffix(self) -> &'static str {
        match self {
            ExportFormat::Html => ".html",
            ExportFormat::Medium => "-medium-format.md",
            ExportFormat::Text => ".txt",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub body: String,
}

/// Every char outside `[A-Za-z0-9]` becomes `-`, then lowercased.
pub fn export_slug(topic: &str) -> String {
    if topic.trim().is_empty() {
        return FALLBACK_SLUG.to_string();
    }
    topic
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}

pub fn export_file_name(topic: &str, format: ExportFormat) -> String {
    format!("{}{}", export_slug(topic), format.file_suffix())
}

/// Renders the blog in the requested format. Blank content is rejected.
pub fn render_export(blog: &GeneratedBlog, format: ExportFormat) -> Result<ExportFile, AppError> {
    if blog.content.trim().is_empty() {
        return Err(AppError::Validation(
            "No blog content to export".to_string(),
        ));
    }

    let body = match format {
        ExportFormat::Html => blog.content.clone(),
        ExportFormat::Medium => normalize_for_platform_export(&blog.content),
        ExportFormat::Text => to_plain_text(&blog.content),
    };

    Ok(ExportFile {
        file_name: export_file_name(&blog.request.topic, format),
        content_type: format.content_type(),
        body,
    })
}
