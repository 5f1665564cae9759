mod answer;
mod config;
mod corpus;
mod errors;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::answer::record::ResumeRecord;
use crate::answer::{AnswerBackend, DocumentSearchBackend, StaticRecordBackend};
use crate::config::{AnswerMode, Config};
use crate::corpus::KnowledgeBase;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume QA API v{}", env!("CARGO_PKG_VERSION"));

    // Build the answer backend once; requests only read it.
    let backend: Arc<dyn AnswerBackend> = match config.answer_mode {
        AnswerMode::Documents => {
            let knowledge = Arc::new(KnowledgeBase::new(config::document_paths()));
            knowledge.reload().await;
            info!("Answer backend: document keyword search");
            Arc::new(DocumentSearchBackend::new(knowledge))
        }
        AnswerMode::Static => {
            info!("Answer backend: static record classifier");
            Arc::new(StaticRecordBackend::new(ResumeRecord::default()))
        }
    };

    let state = AppState { backend };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
