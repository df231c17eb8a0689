// file: src/pipeline/processor.rs
// description: sequential batch driver, decode then extract per file
// reference: per-file failures are reported and skipped, never fatal

use crate::error::Result;
use crate::extractor::IocExtractor;
use crate::models::{IocMap, ScanReport};
use crate::pipeline::progress::ProgressTracker;
use crate::pipeline::scanner::ScannedFile;
use crate::reader;
use tracing::{debug, error, info};

pub struct FileProcessor {
    extractor: IocExtractor,
}

impl FileProcessor {
    pub fn new(extractor: IocExtractor) -> Self {
        Self { extractor }
    }

    /// Decode one file and run the extraction call on its text.
    pub fn process_file(&self, file: &ScannedFile) -> Result<IocMap> {
        debug!("Processing file: {}", file.file_name);
        let text = reader::decode(&file.path)?;
        Ok(self.extractor.extract(&text))
    }

    /// One extraction call per file, in order. Files that fail to decode
    /// are logged and skipped; files with no detections are omitted from
    /// the report.
    pub fn process_batch(
        &self,
        files: &[ScannedFile],
        tracker: &mut ProgressTracker,
    ) -> ScanReport {
        let mut report = ScanReport::new();

        for file in files {
            match self.process_file(file) {
                Ok(iocs) => {
                    let count = iocs.values().map(Vec::len).sum::<usize>();
                    tracker.file_done(count);
                    if !iocs.is_empty() {
                        report.insert(file.file_name.clone(), iocs);
                    }
                }
                Err(e) => {
                    error!("Failed to process {}: {}", file.path.display(), e);
                    tracker.file_failed();
                }
            }
        }

        info!(
            "Batch complete: {} of {} file(s) had indicators",
            report.file_count(),
            files.len()
        );
        report
    }

    /// Extract from a single line of text; used by tail mode.
    pub fn process_line(&self, line: &str) -> IocMap {
        self.extractor.extract(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{Detection, EntityClassifier};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    struct SilentClassifier;

    impl EntityClassifier for SilentClassifier {
        fn classify(&self, _text: &str) -> Vec<Detection> {
            Vec::new()
        }
    }

    fn processor() -> FileProcessor {
        FileProcessor::new(IocExtractor::new(Box::new(SilentClassifier)))
    }

    fn scanned(path: &Path) -> ScannedFile {
        ScannedFile {
            path: path.to_path_buf(),
            file_name: path.file_name().unwrap().to_string_lossy().to_string(),
            size: 0,
        }
    }

    #[test]
    fn test_process_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("alert.txt");
        fs::write(&path, "beacon to 198.51.100.7").unwrap();

        let iocs = processor().process_file(&scanned(&path)).unwrap();
        assert_eq!(iocs["IP"], vec!["198.51.100.7".to_string()]);
    }

    #[test]
    fn test_batch_skips_failures_and_empty_files() {
        let temp = TempDir::new().unwrap();

        let with_iocs = temp.path().join("hit.txt");
        fs::write(&with_iocs, "contacted evil.com").unwrap();

        let without_iocs = temp.path().join("clean.txt");
        fs::write(&without_iocs, "nothing here").unwrap();

        let missing = temp.path().join("gone.txt");

        let files = vec![
            scanned(&with_iocs),
            scanned(&without_iocs),
            scanned(&missing),
        ];

        let mut tracker = ProgressTracker::with_color(files.len(), false);
        let report = processor().process_batch(&files, &mut tracker);

        assert_eq!(report.file_count(), 1);
        assert!(report.files.contains_key("hit.txt"));

        let stats = tracker.stats();
        assert_eq!(stats.files_processed, 2);
        assert_eq!(stats.files_failed, 1);
    }

    #[test]
    fn test_process_line() {
        let iocs = processor().process_line("GET hxxp://bad.site/x");
        assert_eq!(iocs["URL"], vec!["hxxp://bad.site/x".to_string()]);
    }
}
