use std::sync::Arc;

use crate::answer::AnswerBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable answer backend. Default: document-backed keyword search.
    /// Swap to the static classifier via ANSWER_MODE env.
    pub backend: Arc<dyn AnswerBackend>,
}
