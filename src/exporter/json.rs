// file: src/exporter/json.rs
// description: json export of scan reports

use crate::error::Result;
use crate::models::ScanReport;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    pretty: bool,
}

impl JsonExporter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn export(&self, report: &ScanReport, path: &Path) -> Result<()> {
        let payload = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };

        fs::write(path, payload)?;

        info!(
            "Exported {} file(s), {} IOC value(s) to {}",
            report.file_count(),
            report.total_iocs(),
            path.display()
        );
        Ok(())
    }
}
