pub mod ask;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Plain-text liveness probe.
async fn liveness_handler() -> &'static str {
    "OK"
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(liveness_handler))
        .route("/health", get(health::health_handler))
        .route("/ask_from_resume", post(ask::ask_handler))
        .with_state(state)
}
