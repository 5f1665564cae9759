use std::path::Path;

use anyhow::{Context, Result};

/// Extracts the plain text of a PDF, pages concatenated in page order.
pub fn extract_text(path: &Path) -> Result<String> {
    pdf_extract::extract_text(path)
        .with_context(|| format!("pdf text extraction failed for '{}'", path.display()))
}
