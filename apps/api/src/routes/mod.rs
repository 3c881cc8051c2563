pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::formatting::handlers as formatting;
use crate::generation::handlers as generation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation API
        .route("/api/generate", post(generation::handle_generate))
        // Display / export of a stored blog
        .route("/api/blog/preview", post(formatting::handle_preview))
        .route("/api/blog/export", post(formatting::handle_export))
        .with_state(state)
}
