// file: src/utils/validation.rs
// description: preflight validation helpers for paths and content
// reference: input validation patterns

use crate::error::{HunterError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    /// Tail mode requires a file, not a directory.
    pub fn validate_tail_target(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(HunterError::Validation(format!(
                "Path does not exist: {}",
                path.display()
            )));
        }

        if !path.is_file() {
            return Err(HunterError::Validation(format!(
                "Tail mode requires a file, not a folder: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn validate_scan_target(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(HunterError::Validation(format!(
                "Path does not exist: {}",
                path.display()
            )));
        }

        Ok(())
    }

}
