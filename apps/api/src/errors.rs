use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant maps to a fixed, user-facing message; internal detail is
/// logged server-side and never placed in a response body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("question is missing or empty")]
    MissingQuestion,

    #[error("knowledge base is empty after reload")]
    KnowledgeBaseUnavailable,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingQuestion => {
                (StatusCode::BAD_REQUEST, "Please provide a question.".to_string())
            }
            AppError::KnowledgeBaseUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "The resume documents are not available or are empty at the moment. \
                 Please ensure the PDF files exist and contain text."
                    .to_string(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred in the resume chat service. Please try again later."
                        .to_string(),
                )
            }
        };

        let body = Json(json!({ "answer": message }));

        (status, body).into_response()
    }
}
