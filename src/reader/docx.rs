// file: src/reader/docx.rs
// description: DOCX text extraction via the zip container and document.xml
// reference: ECMA-376 WordprocessingML

use crate::error::{HunterError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

lazy_static! {
    static ref XML_TAG: Regex = Regex::new(r"<[^>]+>").expect("XML_TAG regex is valid");
}

/// A .docx file is a zip archive; the document body lives in
/// word/document.xml. Paragraph closes become newlines, all other markup is
/// stripped, and the five predefined XML entities are decoded.
pub fn read_docx(path: &Path) -> Result<String> {
    debug!("Extracting text from DOCX: {}", path.display());

    let file = File::open(path).map_err(|source| HunterError::FileOperation {
        path: path.to_path_buf(),
        source,
    })?;

    let mut archive = zip::ZipArchive::new(file).map_err(|e| HunterError::Decode {
        path: path.to_path_buf(),
        message: format!("not a zip archive: {}", e),
    })?;

    let mut document = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| HunterError::Decode {
            path: path.to_path_buf(),
            message: format!("missing word/document.xml: {}", e),
        })?
        .read_to_string(&mut document)
        .map_err(|e| HunterError::Decode {
            path: path.to_path_buf(),
            message: format!("unreadable document.xml: {}", e),
        })?;

    Ok(document_text(&document))
}

fn document_text(document_xml: &str) -> String {
    let with_breaks = document_xml.replace("</w:p>", "\n");
    let stripped = XML_TAG.replace_all(&with_breaks, "");
    decode_entities(&stripped)
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
