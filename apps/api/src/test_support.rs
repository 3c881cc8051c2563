//! Fixtures shared by handler and router tests.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::errors::AppError;
use crate::generation::models::{BlogRequest, GeneratedBlog};
use crate::generation::writer::BlogWriter;
use crate::routes::build_router;
use crate::state::AppState;

pub enum StubReply {
    Content(String),
    MissingCredentials,
    Failure,
}

/// `BlogWriter` that records prompts instead of calling a model.
pub struct StubWriter {
    reply: StubReply,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl StubWriter {
    pub fn replying(content: &str) -> Arc<Self> {
        Self::new(StubReply::Content(content.to_string()))
    }

    pub fn failing(reply: StubReply) -> Arc<Self> {
        Self::new(reply)
    }

    fn new(reply: StubReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl BlogWriter for StubWriter {
    async fn write(&self, prompt: &str) -> Result<String, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        match &self.reply {
            StubReply::Content(content) => Ok(content.clone()),
            StubReply::MissingCredentials => Err(AppError::MissingCredentials),
            StubReply::Failure => Err(AppError::Llm("status 503: overloaded".to_string())),
        }
    }
}

pub fn test_router(writer: Arc<StubWriter>) -> Router {
    build_router(AppState { writer })
}

pub fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    post_raw(uri, &body.to_string())
}

pub fn post_raw(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Drives the router once and collects the whole response.
pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Vec<u8>) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, bytes.to_vec())
}

pub fn sample_blog(content: &str) -> GeneratedBlog {
    GeneratedBlog {
        request: BlogRequest {
            topic: "Async Rust".into(),
            audience: "senior-engineers".into(),
            main_problem: "Executors are confusing".into(),
            ..BlogRequest::default()
        },
        content: content.to_string(),
        generated_at: Utc.with_ymd_and_hms(2026, 10, 19, 15, 4, 0).unwrap(),
    }
}
