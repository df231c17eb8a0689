// file: src/reader/mod.rs
// description: file decoding dispatch, any supported format to plain text
// reference: per-file failures are recoverable and must not abort a batch

pub mod docx;
pub mod pdf;
pub mod text;

use crate::error::Result;
use std::path::Path;

/// Turn a file into a single string. PDF and DOCX get dedicated decoders;
/// everything else (plain text, logs, source code) is read as strict UTF-8.
pub fn decode(path: &Path) -> Result<String> {
    match extension(path).as_deref() {
        Some("pdf") => pdf::read_pdf(path),
        Some("docx") => docx::read_docx(path),
        _ => text::read_text(path),
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}
