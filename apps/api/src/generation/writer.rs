//! Blog writer: pluggable, trait-based seam between the generate endpoint and
//! the model.
//!
//! Default: `LlmBlogWriter` (chat completion through `llm_client`).
//! `AppState` holds an `Arc<dyn BlogWriter>`; tests swap in a stub.

use async_trait::async_trait;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::BLOG_WRITER_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};

/// Turns a fully built prompt into raw blog content (HTML or Markdown).
#[async_trait]
pub trait BlogWriter: Send + Sync {
    async fn write(&self, prompt: &str) -> Result<String, AppError>;
}

/// Production writer backed by the chat-completion API.
pub struct LlmBlogWriter {
    llm: LlmClient,
}

impl LlmBlogWriter {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl BlogWriter for LlmBlogWriter {
    async fn write(&self, prompt: &str) -> Result<String, AppError> {
        let content = self
            .llm
            .complete(prompt, BLOG_WRITER_SYSTEM)
            .await
            .map_err(map_llm_error)?;

        info!("Model returned {} chars of content", content.len());
        Ok(content)
    }
}

/// Credential problems get their own user-facing error; everything else,
/// empty output included, is a generic generation failure.
fn map_llm_error(err: LlmError) -> AppError {
    if err.is_credential_error() {
        AppError::MissingCredentials
    } else {
        AppError::Llm(format!("Blog generation failed: {err}"))
    }
}
