//! Answer backends — pluggable, trait-based sources for `/ask_from_resume`.
//!
//! Default: `DocumentSearchBackend` (keyword search over extracted PDF text).
//! Alternative: `StaticRecordBackend` (topic classifier over a literal
//! record), kept behind ANSWER_MODE. The two are never combined.
//!
//! `AppState` holds an `Arc<dyn AnswerBackend>`, chosen once at startup.

pub mod classifier;
pub mod record;
pub mod search;

use std::sync::Arc;

use async_trait::async_trait;

use crate::answer::record::ResumeRecord;
use crate::corpus::KnowledgeBase;
use crate::errors::AppError;

/// The answer backend seam. Implement this to swap answering strategies
/// without touching the route handler.
#[async_trait]
pub trait AnswerBackend: Send + Sync {
    async fn answer(&self, question: &str) -> Result<String, AppError>;
}

/// Keyword search over the document corpus.
///
/// If the corpus is empty when a question arrives, one synchronous reload is
/// attempted before answering; a still-empty corpus short-circuits to
/// [`AppError::KnowledgeBaseUnavailable`] without running the search.
pub struct DocumentSearchBackend {
    knowledge: Arc<KnowledgeBase>,
}

impl DocumentSearchBackend {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self { knowledge }
    }
}

#[async_trait]
impl AnswerBackend for DocumentSearchBackend {
    async fn answer(&self, question: &str) -> Result<String, AppError> {
        let mut corpus = self.knowledge.snapshot().await;
        if corpus.trim().is_empty() {
            self.knowledge.reload().await;
            corpus = self.knowledge.snapshot().await;
            if corpus.trim().is_empty() {
                return Err(AppError::KnowledgeBaseUnavailable);
            }
        }
        Ok(search::search(question, &corpus))
    }
}

/// Topic classification over the static résumé record.
pub struct StaticRecordBackend {
    record: ResumeRecord,
}

impl StaticRecordBackend {
    pub fn new(record: ResumeRecord) -> Self {
        Self { record }
    }
}

#[async_trait]
impl AnswerBackend for StaticRecordBackend {
    async fn answer(&self, question: &str) -> Result<String, AppError> {
        Ok(classifier::classify(question, &self.record))
    }
}
