// file: src/reader/text.rs
// description: strict UTF-8 text reading with recoverable errors

use crate::error::{HunterError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::InvalidData => HunterError::Decode {
            path: path.to_path_buf(),
            message: "file is not valid UTF-8".to_string(),
        },
        _ => HunterError::FileOperation {
            path: path.to_path_buf(),
            source,
        },
    })
}
