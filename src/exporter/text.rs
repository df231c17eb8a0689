// file: src/exporter/text.rs
// description: line-oriented text export

use crate::error::Result;
use crate::models::ScanReport;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct TextExporter;

impl TextExporter {
    pub fn new() -> Self {
        Self
    }

    pub fn export(&self, report: &ScanReport, path: &Path) -> Result<()> {
        fs::write(path, Self::render(report))?;
        info!(
            "Exported {} file(s) as text to {}",
            report.file_count(),
            path.display()
        );
        Ok(())
    }

    fn render(report: &ScanReport) -> String {
        let mut out = String::new();
        for (file_name, iocs) in &report.files {
            out.push_str(&format!("File: {}\n", file_name));
            for (label, values) in iocs {
                out.push_str(&format!("{}: {}\n", label, values.join(", ")));
            }
            out.push('\n');
        }
        out
    }
}
