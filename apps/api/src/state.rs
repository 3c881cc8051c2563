use std::sync::Arc;

use crate::generation::writer::BlogWriter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable blog writer. Default: LlmBlogWriter. Tests use a stub.
    pub writer: Arc<dyn BlogWriter>,
}
