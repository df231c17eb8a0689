// file: src/exporter/csv.rs
// description: csv export, one row per extracted value
// reference: https://docs.rs/csv

use crate::error::Result;
use crate::models::ScanReport;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct CsvExporter;

impl CsvExporter {
    pub fn new() -> Self {
        Self
    }

    pub fn export(&self, report: &ScanReport, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(["filename", "ioc_type", "ioc_value"])?;

        let mut rows = 0usize;
        for (file_name, iocs) in &report.files {
            for (label, values) in iocs {
                for value in values {
                    writer.write_record([file_name.as_str(), label.as_str(), value.as_str()])?;
                    rows += 1;
                }
            }
        }

        writer.flush()?;
        info!("Exported {} CSV row(s) to {}", rows, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exporter::tests::sample_report;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_export_rows() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.csv");

        CsvExporter::new().export(&sample_report(), &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = written.lines().collect();

        assert_eq!(lines[0], "filename,ioc_type,ioc_value");
        assert!(lines.contains(&"alert.txt,IP,1.2.3.4"));
        assert!(lines.contains(&"alert.txt,HASH,e99a18c428cb38d5f260853678922e03"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_export_empty_report_has_header_only() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.csv");

        CsvExporter::new().export(&ScanReport::new(), &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 1);
    }
}
