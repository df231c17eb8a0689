// file: src/models/report.rs
// description: per-file extraction result mapping and batch scan report

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Result of a single extraction call: label to deduplicated, validated
/// values. BTreeMap keeps serialization order stable across runs.
pub type IocMap = BTreeMap<String, Vec<String>>;

/// Aggregated batch result keyed by file name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanReport {
    #[serde(flatten)]
    pub files: BTreeMap<String, IocMap>,
}

impl ScanReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, file_name: String, iocs: IocMap) {
        self.files.insert(file_name, iocs);
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Total value count across all files and labels.
    pub fn total_iocs(&self) -> usize {
        self.files
            .values()
            .map(|iocs| iocs.values().map(Vec::len).sum::<usize>())
            .sum()
    }
}
