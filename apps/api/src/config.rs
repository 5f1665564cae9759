use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// The documents that make up the knowledge base, resolved relative to the
/// working directory at startup. A fixed list by design — the deployment
/// ships the PDFs alongside the binary.
pub const DOCUMENT_FILES: &[&str] = &["resume.pdf", "resume2.pdf"];

/// Which answer backend serves `/ask_from_resume`.
///
/// `Documents` is canonical; `Static` is the earlier hand-rolled classifier
/// kept behind explicit configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerMode {
    Documents,
    Static,
}

/// Application configuration loaded from environment variables.
/// Every variable has a default, so an empty environment is a valid one.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub answer_mode: AnswerMode,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let answer_mode = match std::env::var("ANSWER_MODE").as_deref() {
            Ok("static") => AnswerMode::Static,
            Ok("documents") | Err(_) => AnswerMode::Documents,
            Ok(other) => bail!("ANSWER_MODE must be 'documents' or 'static', got '{other}'"),
        };

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            answer_mode,
        })
    }
}

/// The configured document list as resolved paths.
pub fn document_paths() -> Vec<PathBuf> {
    DOCUMENT_FILES.iter().map(PathBuf::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_paths_preserve_declared_order() {
        let paths = document_paths();
        assert_eq!(paths.len(), DOCUMENT_FILES.len());
        for (path, name) in paths.iter().zip(DOCUMENT_FILES) {
            assert_eq!(path, &PathBuf::from(name));
        }
    }
}
