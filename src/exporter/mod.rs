// file: src/exporter/mod.rs
// description: output format selection and export dispatch
// reference: internal module structure

pub mod csv;
pub mod json;
pub mod text;

pub use csv::CsvExporter;
pub use json::JsonExporter;
pub use text::TextExporter;

use crate::error::Result;
use crate::models::ScanReport;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Supported output serializations. Parsed by clap and by the config layer,
/// so an unsupported format is rejected before any extraction work begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Csv,
    Text,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "text",
        }
    }
}

/// Write the report to `path` in the requested format.
pub fn export(report: &ScanReport, path: &Path, format: OutputFormat, pretty: bool) -> Result<()> {
    match format {
        OutputFormat::Json => JsonExporter::new(pretty).export(report, path),
        OutputFormat::Csv => CsvExporter::new().export(report, path),
        OutputFormat::Text => TextExporter::new().export(report, path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IocMap;
    use std::fs;
    use tempfile::TempDir;

    pub(crate) fn sample_report() -> ScanReport {
        let mut iocs = IocMap::new();
        iocs.insert("IP".to_string(), vec!["1.2.3.4".to_string()]);
        iocs.insert(
            "HASH".to_string(),
            vec!["e99a18c428cb38d5f260853678922e03".to_string()],
        );

        let mut report = ScanReport::new();
        report.insert("alert.txt".to_string(), iocs);
        report
    }

    #[test]
    fn test_export_dispatch() {
        let temp = TempDir::new().unwrap();
        let report = sample_report();

        for format in [OutputFormat::Json, OutputFormat::Csv, OutputFormat::Text] {
            let path = temp.path().join(format!("out.{}", format.as_str()));
            export(&report, &path, format, false).unwrap();
            assert!(fs::metadata(&path).unwrap().len() > 0);
        }
    }
}
