// file: src/reader/pdf.rs
// description: PDF text extraction
// reference: https://docs.rs/pdf-extract

use crate::error::{HunterError, Result};
use std::path::Path;
use tracing::debug;

pub fn read_pdf(path: &Path) -> Result<String> {
    debug!("Extracting text from PDF: {}", path.display());

    pdf_extract::extract_text(path).map_err(|e| HunterError::Decode {
        path: path.to_path_buf(),
        message: format!("PDF extraction failed: {}", e),
    })
}
