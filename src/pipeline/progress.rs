// file: src/pipeline/progress.rs
// description: progress tracking and statistics reporting for batch scans
// reference: uses indicatif for progress bars and tracks processing metrics

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    pub files_processed: usize,
    pub files_failed: usize,
    pub files_with_iocs: usize,
    pub iocs_found: usize,
    pub duration_secs: u64,
}

impl ScanStats {
    pub fn files_per_second(&self) -> f64 {
        if self.duration_secs == 0 {
            return 0.0;
        }
        self.files_processed as f64 / self.duration_secs as f64
    }

    pub fn success_rate(&self) -> f64 {
        let total = self.files_processed + self.files_failed;
        if total == 0 {
            return 0.0;
        }
        (self.files_processed as f64 / total as f64) * 100.0
    }

    pub fn summary(&self) -> String {
        format!(
            "{} file(s) processed, {} failed, {} IOC value(s) in {} file(s)",
            self.files_processed, self.files_failed, self.iocs_found, self.files_with_iocs
        )
    }
}

pub struct ProgressTracker {
    bar: ProgressBar,
    files_processed: usize,
    files_failed: usize,
    files_with_iocs: usize,
    iocs_found: usize,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn new(total_files: usize) -> Self {
        Self::with_color(total_files, true)
    }

    pub fn with_color(total_files: usize, colored: bool) -> Self {
        let bar = create_progress_bar(total_files as u64, colored);

        Self {
            bar,
            files_processed: 0,
            files_failed: 0,
            files_with_iocs: 0,
            iocs_found: 0,
            start_time: Instant::now(),
        }
    }

    pub fn file_done(&mut self, ioc_count: usize) {
        self.files_processed += 1;
        if ioc_count > 0 {
            self.files_with_iocs += 1;
            self.iocs_found += ioc_count;
        }
        self.bar.inc(1);
        self.update_message();
    }

    pub fn file_failed(&mut self) {
        self.files_failed += 1;
        self.bar.inc(1);
        self.update_message();
    }

    pub fn finish(&self) {
        self.bar.finish_with_message("Processing complete");
    }

    pub fn stats(&self) -> ScanStats {
        ScanStats {
            files_processed: self.files_processed,
            files_failed: self.files_failed,
            files_with_iocs: self.files_with_iocs,
            iocs_found: self.iocs_found,
            duration_secs: self.start_time.elapsed().as_secs(),
        }
    }

    fn update_message(&self) {
        self.bar.set_message(format!(
            "IOCs: {} | Failed: {}",
            self.iocs_found, self.files_failed
        ));
    }
}

pub fn print_summary(stats: &ScanStats) {
    println!("{}", stats.summary().green());
}

fn create_progress_bar(total: u64, colored: bool) -> ProgressBar {
    let bar = ProgressBar::new(total);
    if colored {
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}",
                )
                .expect("Failed to create progress bar template")
                .progress_chars("█▓▒░"),
        );
    } else {
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({eta}) {msg}")
                .expect("Failed to create progress bar template")
                .progress_chars("=>-"),
        );
    }
    bar
}
