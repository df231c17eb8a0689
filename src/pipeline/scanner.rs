// file: src/pipeline/scanner.rs
// description: file discovery with skip-pattern and size filtering
// reference: https://docs.rs/walkdir

use crate::config::PipelineConfig;
use crate::error::{HunterError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

pub struct FileScanner {
    config: PipelineConfig,
}

#[derive(Debug, Clone)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub file_name: String,
    pub size: u64,
}

impl FileScanner {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Gather candidate files. A file path yields itself; a directory
    /// yields its files, descending only when `recursive` is set.
    pub fn gather(&self, path: &Path, recursive: bool) -> Result<Vec<ScannedFile>> {
        if path.is_file() {
            return Ok(self.scan_single(path).into_iter().collect());
        }

        if !path.is_dir() {
            return Err(HunterError::Validation(format!(
                "Path does not exist: {}",
                path.display()
            )));
        }

        info!("Scanning directory: {}", path.display());
        let mut files = Vec::new();

        let mut walker = WalkDir::new(path).follow_links(false);
        if !recursive {
            walker = walker.max_depth(1);
        }

        for entry in walker.into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }

            if let Some(file) = self.scan_single(entry.path()) {
                files.push(file);
            }
        }

        info!("Found {} candidate file(s)", files.len());
        Ok(files)
    }

    fn scan_single(&self, path: &Path) -> Option<ScannedFile> {
        if self.should_skip(path) {
            debug!("Skipping file: {}", path.display());
            return None;
        }

        let metadata = path.metadata().ok()?;
        let size = metadata.len();
        let max_size = (self.config.max_file_size_mb * 1024 * 1024) as u64;

        if size > max_size {
            debug!(
                "Skipping large file ({} MB): {}",
                size / 1024 / 1024,
                path.display()
            );
            return None;
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        Some(ScannedFile {
            path: path.to_path_buf(),
            file_name,
            size,
        })
    }

    fn should_skip(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.config.skip_patterns {
            if pattern.contains('*') {
                let pattern_without_star = pattern.replace("*.", ".");
                if path_str.ends_with(&pattern_without_star) {
                    return true;
                }
            } else if path_str.contains(pattern) {
                return true;
            }
        }

        false
    }
}
