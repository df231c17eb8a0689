// file: src/pipeline/tail.rs
// description: live file tailing, seek to end then poll for appended lines

use crate::error::{HunterError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;
use std::time::Duration;

/// Follows a file like `tail -f`: existing content is skipped, only lines
/// appended after construction are returned. Partial lines (no trailing
/// newline yet) stay buffered until completed by a later write.
pub struct TailFollower {
    reader: BufReader<File>,
    pending: String,
}

impl TailFollower {
    pub fn open(path: &Path) -> Result<Self> {
        let mut file = File::open(path).map_err(|source| HunterError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;
        file.seek(SeekFrom::End(0))?;

        Ok(Self {
            reader: BufReader::new(file),
            pending: String::new(),
        })
    }

    /// Drain complete lines appended since the last poll.
    pub fn poll(&mut self) -> Result<Vec<String>> {
        let mut lines = Vec::new();

        loop {
            let mut chunk = String::new();
            let read = self.reader.read_line(&mut chunk)?;
            if read == 0 {
                break;
            }

            self.pending.push_str(&chunk);
            if self.pending.ends_with('\n') {
                lines.push(self.pending.trim_end_matches(['\n', '\r']).to_string());
                self.pending.clear();
            }
        }

        Ok(lines)
    }

    /// Poll on an interval forever, handing each appended line to the
    /// callback. Returns only on IO error; the process is expected to be
    /// interrupted externally.
    pub fn follow<F>(&mut self, interval: Duration, mut on_line: F) -> Result<()>
    where
        F: FnMut(&str),
    {
        loop {
            for line in self.poll()? {
                on_line(&line);
            }
            std::thread::sleep(interval);
        }
    }
}
