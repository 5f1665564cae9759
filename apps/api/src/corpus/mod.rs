//! Knowledge base — the combined plain text of every configured resume PDF.
//!
//! The corpus is an immutable `Arc<str>` snapshot behind a `tokio::sync::RwLock`.
//! `reload` rebuilds the full string off to the side and swaps it in under the
//! write lock, so a concurrent reader always observes either the old corpus or
//! the new one, never a partially rebuilt string.

pub mod extract;

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

/// Separator inserted after each document's contribution to the corpus.
pub const DOCUMENT_BOUNDARY: &str = "\n\n--- Document Boundary ---\n\n";

/// Owns the corpus and the ordered list of source documents it is built from.
pub struct KnowledgeBase {
    sources: Vec<PathBuf>,
    corpus: RwLock<Arc<str>>,
}

impl KnowledgeBase {
    /// An empty knowledge base over the given sources. Call [`reload`] to
    /// populate it.
    ///
    /// [`reload`]: KnowledgeBase::reload
    pub fn new(sources: Vec<PathBuf>) -> Self {
        Self {
            sources,
            corpus: RwLock::new(Arc::from("")),
        }
    }

    /// A knowledge base seeded with literal text and no sources; reloading
    /// clears it. For tests that do not want PDFs on disk.
    #[cfg(test)]
    pub fn from_text(text: &str) -> Self {
        Self {
            sources: Vec::new(),
            corpus: RwLock::new(Arc::from(text)),
        }
    }

    /// Rebuilds the corpus from the configured sources and swaps it in.
    ///
    /// Idempotent with respect to final content: rebuilding from the same
    /// files yields the same corpus. Missing or unextractable documents are
    /// logged and skipped; if every document fails the corpus is empty, which
    /// is not itself an error.
    pub async fn reload(&self) {
        let rebuilt = build_corpus(&self.sources);
        *self.corpus.write().await = Arc::from(rebuilt);
    }

    /// The current corpus snapshot. Cheap to clone; stays valid across a
    /// concurrent reload.
    pub async fn snapshot(&self) -> Arc<str> {
        self.corpus.read().await.clone()
    }
}

/// Loads and concatenates the text of each source document in order.
fn build_corpus(sources: &[PathBuf]) -> String {
    info!("Loading knowledge base from {} document(s)", sources.len());
    let mut combined = String::new();

    for path in sources {
        if !path.exists() {
            warn!("Document '{}' not found, skipping", path.display());
            continue;
        }
        match extract::extract_text(path) {
            Ok(text) if !text.trim().is_empty() => {
                combined.push_str(&text);
                combined.push_str(DOCUMENT_BOUNDARY);
                info!("Loaded text from '{}'", path.display());
            }
            Ok(_) => {
                warn!(
                    "Document '{}' produced no text; it may be empty or image-only",
                    path.display()
                );
            }
            Err(e) => {
                warn!("Failed to extract text from '{}': {e:#}", path.display());
            }
        }
    }

    if combined.trim().is_empty() {
        warn!("No document content loaded; document-backed answers are unavailable");
    } else {
        info!("Knowledge base ready ({} bytes)", combined.len());
    }
    combined
}
