//! Axum route handler for the Generation API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::generation::builder::build_prompt;
use crate::generation::models::BlogRequest;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub content: String,
}

/// POST /api/generate
///
/// Validate → build prompt → one model call. No retry; the raw content is
/// returned for the client to store and render.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<BlogRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let Json(request) = payload?;
    request.validate()?;

    let prompt = build_prompt(&request);
    info!(
        "Generating blog for topic '{}' ({} chars of prompt)",
        request.topic,
        prompt.len()
    );

    let content = state.writer.write(&prompt).await?;
    if content.trim().is_empty() {
        return Err(AppError::Llm("Model returned empty content".to_string()));
    }

    Ok(Json(GenerateResponse { content }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::errors::{GENERATION_FAILED_MESSAGE, MISSING_CREDENTIALS_MESSAGE};
    use crate::test_support::{post_json, post_raw, send, test_router, StubReply, StubWriter};

    fn form() -> serde_json::Value {
        json!({
            "topic": "X",
            "audience": "junior-developers",
            "mainProblem": "Y",
            "tone": "professional",
            "evidence": ["stats"],
            "practical": [],
            "analytical": [],
            "speculative": [],
            "contextual": [],
            "engagement": []
        })
    }

    fn json_body(bytes: Vec<u8>) -> serde_json::Value {
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_generate_returns_model_content() {
        let writer = StubWriter::replying("<h1>X</h1><p>Body</p>");
        let (status, _, body) = send(test_router(writer.clone()), post_json("/api/generate", &form())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(body), json!({ "content": "<h1>X</h1><p>Body</p>" }));
        assert_eq!(writer.calls(), 1);
    }

    #[tokio::test]
    async fn test_generate_sends_built_prompt() {
        let writer = StubWriter::replying("ok");
        send(test_router(writer.clone()), post_json("/api/generate", &form())).await;

        let prompt = writer.last_prompt().unwrap();
        assert!(prompt.contains("Current Statistics & Benchmarks SELECTED"));
        assert!(prompt.contains("Junior Developers"));
        assert!(prompt.contains("No practical elements selected."));
    }

    #[tokio::test]
    async fn test_missing_topic_is_rejected_before_model_call() {
        let writer = StubWriter::replying("unused");
        let mut form = form();
        form.as_object_mut().unwrap().remove("topic");

        let (status, _, body) = send(test_router(writer.clone()), post_json("/api/generate", &form)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body = json_body(body);
        assert!(body["error"].as_str().unwrap().contains("topic"));
        assert_eq!(writer.calls(), 0);
    }

    #[tokio::test]
    async fn test_blank_main_problem_is_rejected() {
        let writer = StubWriter::replying("unused");
        let mut form = form();
        form["mainProblem"] = json!("   ");

        let (status, _, body) = send(test_router(writer.clone()), post_json("/api/generate", &form)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(body)["error"],
            "Missing required fields: mainProblem"
        );
        assert_eq!(writer.calls(), 0);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let writer = StubWriter::replying("unused");
        let (status, _, body) = send(test_router(writer.clone()), post_raw("/api/generate", "{not json")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json_body(body)["error"].is_string());
        assert_eq!(writer.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_credentials_message() {
        let writer = StubWriter::failing(StubReply::MissingCredentials);
        let (status, _, body) = send(test_router(writer), post_json("/api/generate", &form())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(body)["error"], MISSING_CREDENTIALS_MESSAGE);
    }

    #[tokio::test]
    async fn test_upstream_failure_is_generic() {
        let writer = StubWriter::failing(StubReply::Failure);
        let (status, _, body) = send(test_router(writer.clone()), post_json("/api/generate", &form())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(body)["error"], GENERATION_FAILED_MESSAGE);
        assert_eq!(writer.calls(), 1, "no retry");
    }

    #[tokio::test]
    async fn test_blank_model_output_is_a_failure() {
        let writer = StubWriter::replying("  \n");
        let (status, _, body) = send(test_router(writer), post_json("/api/generate", &form())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(body)["error"], GENERATION_FAILED_MESSAGE);
    }
}
