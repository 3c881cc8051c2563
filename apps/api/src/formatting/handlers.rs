//! Axum route handlers for rendering a stored blog.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query,
    },
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::formatting::export::{render_export, ExportFormat};
use crate::formatting::preview::BlogPreview;
use crate::generation::models::GeneratedBlog;

#[derive(Debug, Default, Deserialize)]
pub struct ExportQuery {
    #[serde(default)]
    pub format: ExportFormat,
}

/// POST /api/blog/preview
///
/// Styled HTML plus header labels for the stored blog.
pub async fn handle_preview(
    payload: Result<Json<GeneratedBlog>, JsonRejection>,
) -> Result<Json<BlogPreview>, AppError> {
    let Json(blog) = payload?;
    if blog.content.trim().is_empty() {
        return Err(AppError::Validation(
            "No blog content to preview".to_string(),
        ));
    }

    Ok(Json(BlogPreview::from_blog(&blog)))
}

/// POST /api/blog/export?format=html|medium|text
///
/// Returns the blog as a file attachment.
pub async fn handle_export(
    query: Result<Query<ExportQuery>, QueryRejection>,
    payload: Result<Json<GeneratedBlog>, JsonRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query?;
    let Json(blog) = payload?;

    let file = render_export(&blog, query.format)?;
    info!(
        "Exporting '{}' as {:?} ({} bytes)",
        file.file_name,
        query.format,
        file.body.len()
    );

    let disposition = format!("attachment; filename=\"{}\"", file.file_name);
    Ok((
        [
            (header::CONTENT_TYPE, file.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.body,
    )
        .into_response())
}
