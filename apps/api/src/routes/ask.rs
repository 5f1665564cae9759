use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

/// POST /ask_from_resume
///
/// Validates the question, then delegates to the configured answer backend.
/// A missing or empty question is a 400; backend failures map through
/// `AppError` to fixed 500 bodies.
pub async fn ask_handler(
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    let question = req.question.as_deref().map(str::trim).unwrap_or("");
    if question.is_empty() {
        return Err(AppError::MissingQuestion);
    }

    info!("Received question: {question}");
    let answer = state.backend.answer(question).await?;

    Ok(Json(AskResponse { answer }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::answer::record::ResumeRecord;
    use crate::answer::{DocumentSearchBackend, StaticRecordBackend};
    use crate::corpus::KnowledgeBase;
    use crate::routes::build_router;
    use crate::state::AppState;

    fn static_app() -> axum::Router {
        build_router(AppState {
            backend: Arc::new(StaticRecordBackend::new(ResumeRecord::default())),
        })
    }

    fn document_app(corpus: &str) -> axum::Router {
        let knowledge = Arc::new(KnowledgeBase::from_text(corpus));
        build_router(AppState {
            backend: Arc::new(DocumentSearchBackend::new(knowledge)),
        })
    }

    fn ask_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/ask_from_resume")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_liveness_root_returns_ok() {
        let response = static_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_empty_question_is_400_never_200() {
        let response = static_app()
            .oneshot(ask_request(r#"{"question": ""}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["answer"], "Please provide a question.");
    }

    #[tokio::test]
    async fn test_missing_question_field_is_400() {
        let response = static_app().oneshot(ask_request("{}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_empty_body_is_not_200() {
        let response = static_app().oneshot(ask_request("")).await.unwrap();
        assert_ne!(response.status(), StatusCode::OK);
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_frameworks_roundtrip_lists_every_entry_in_order() {
        let response = static_app()
            .oneshot(ask_request(
                &json!({"question": "What frameworks do you use?"}).to_string(),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let answer = body["answer"].as_str().unwrap();
        let record = ResumeRecord::default();
        assert!(answer.contains(&record.frameworks_tools.join(", ")));
    }

    #[tokio::test]
    async fn test_internship_roundtrip_contains_company_and_duration() {
        let response = static_app()
            .oneshot(ask_request(
                &json!({"question": "Tell me about your internship"}).to_string(),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let answer = body["answer"].as_str().unwrap();
        let record = ResumeRecord::default();
        assert!(answer.contains(&record.internship.company));
        assert!(answer.contains(&record.internship.duration));
    }

    #[tokio::test]
    async fn test_document_mode_roundtrip() {
        let app = document_app("Lorens knows Java. He built a chatbot. Contact via LinkedIn.");
        let response = app
            .oneshot(ask_request(&json!({"question": "chatbot"}).to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(
            body["answer"],
            "Based on the provided documents: He built a chatbot.."
        );
    }

    #[tokio::test]
    async fn test_document_mode_empty_corpus_is_500_with_fixed_message() {
        let app = document_app("");
        let response = app
            .oneshot(ask_request(&json!({"question": "anything"}).to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        let answer = body["answer"].as_str().unwrap();
        assert!(answer.contains("not available or are empty"));
    }
}
