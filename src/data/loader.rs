// ============================================================
// Layer 4 — JSONL Record Loader
// ============================================================
// Streams JSON objects from a newline-delimited JSON file.
//
// Each line goes through:
//
//   line ──► [line budget reached?] ──► stop
//        ──► [optional "{" prefix check] ──► skip (non-record)
//        ──► serde_json parse ──► not an object / error ──► skip (malformed)
//        ──► callback(Record) ──► Break ──► stop
//
// A malformed line is the only recoverable failure: it is
// logged at debug level, counted, and reading continues.
// I/O failures (missing file, unreadable bytes) are fatal.

use anyhow::{Context, Result};
use serde_json::Value;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    ops::ControlFlow,
    path::PathBuf,
};

use crate::domain::record::{LoadStats, Record};
use crate::domain::traits::RecordSource;

/// Reads records from a JSONL file.
/// Implements the RecordSource trait from Layer 3.
pub struct JsonlLoader {
    /// Path to the input file
    path: PathBuf,

    /// Skip lines whose trimmed form does not start with "{"
    require_object_prefix: bool,

    /// Stop after this many input lines (counted before any skipping)
    max_lines: Option<usize>,
}

impl JsonlLoader {
    /// Create a loader with no prefix check and no line budget
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            require_object_prefix: false,
            max_lines: None,
        }
    }

    /// Reject header lines such as "question id" before parsing
    pub fn require_object_prefix(mut self, yes: bool) -> Self {
        self.require_object_prefix = yes;
        self
    }

    /// Only look at the first `max` lines of the file
    pub fn max_lines(mut self, max: usize) -> Self {
        self.max_lines = Some(max);
        self
    }
}

impl RecordSource for JsonlLoader {
    type Reader = BufReader<File>;

    fn open(&self) -> Result<Self::Reader> {
        let file = File::open(&self.path)
            .with_context(|| format!("Cannot open input file '{}'", self.path.display()))?;
        Ok(BufReader::new(file))
    }

    fn stream<F>(&self, reader: Self::Reader, mut visit: F) -> Result<LoadStats>
    where
        F: FnMut(Record) -> Result<ControlFlow<()>>,
    {
        let mut stats = LoadStats::default();

        for (line_no, line) in reader.lines().enumerate() {
            if self.max_lines.is_some_and(|max| line_no >= max) {
                tracing::debug!("Line budget of {} reached", line_no);
                break;
            }

            let line = line.with_context(|| {
                format!("Cannot read line {} of '{}'", line_no + 1, self.path.display())
            })?;
            stats.lines_read += 1;

            if self.require_object_prefix && !line.trim().starts_with('{') {
                stats.non_record += 1;
                continue;
            }

            match serde_json::from_str::<Value>(&line) {
                Ok(Value::Object(record)) => {
                    stats.records += 1;
                    if visit(record)?.is_break() {
                        break;
                    }
                }
                Ok(_) => {
                    tracing::debug!("Line {}: JSON value is not an object, skipping", line_no + 1);
                    stats.malformed += 1;
                }
                Err(e) => {
                    tracing::debug!("Line {}: malformed JSON ({}), skipping", line_no + 1, e);
                    stats.malformed += 1;
                }
            }
        }

        tracing::info!(
            "Read {} lines from '{}': {} records, {} skipped",
            stats.lines_read,
            self.path.display(),
            stats.records,
            stats.skipped()
        );
        Ok(stats)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn jsonl(lines: &[&str]) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(f, "{line}").unwrap();
        }
        f
    }

    fn collect(loader: &JsonlLoader) -> (Vec<Record>, LoadStats) {
        let mut seen  = Vec::new();
        let stats = loader
            .for_each_record(|r| {
                seen.push(r);
                Ok(ControlFlow::Continue(()))
            })
            .unwrap();
        (seen, stats)
    }

    #[test]
    fn test_skips_malformed_lines() {
        let f = jsonl(&[r#"{"id": 1}"#, "question id", r#"{"id": 2}"#, "[1, 2]", ""]);
        let (records, stats) = collect(&JsonlLoader::new(f.path()));
        assert_eq!(records.len(), 2);
        assert_eq!(stats.lines_read, 5);
        assert_eq!(stats.records, 2);
        assert_eq!(stats.malformed, 3);
        assert_eq!(stats.non_record, 0);
    }

    #[test]
    fn test_prefix_check_counts_headers_separately() {
        let f = jsonl(&["question id", r#"  {"id": 1}"#, r#"{"id": "#]);
        let loader = JsonlLoader::new(f.path()).require_object_prefix(true);
        let (records, stats) = collect(&loader);
        assert_eq!(records.len(), 1);
        assert_eq!(stats.non_record, 1);
        assert_eq!(stats.malformed, 1);
    }

    #[test]
    fn test_line_budget_counts_every_line() {
        let f = jsonl(&["bad", r#"{"n": 1}"#, r#"{"n": 2}"#, r#"{"n": 3}"#]);
        let loader = JsonlLoader::new(f.path()).max_lines(3);
        let (records, stats) = collect(&loader);
        assert_eq!(records.len(), 2);
        assert_eq!(stats.lines_read, 3);
    }

    #[test]
    fn test_callback_can_stop_early() {
        let f = jsonl(&[r#"{"n": 1}"#, r#"{"n": 2}"#, r#"{"n": 3}"#]);
        let loader = JsonlLoader::new(f.path());
        let mut count = 0;
        let stats = loader
            .for_each_record(|_| {
                count += 1;
                Ok(if count == 2 { ControlFlow::Break(()) } else { ControlFlow::Continue(()) })
            })
            .unwrap();
        assert_eq!(count, 2);
        assert_eq!(stats.records, 2);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let loader = JsonlLoader::new("/definitely/not/here.jsonl");
        let err = loader
            .for_each_record(|_| Ok(ControlFlow::Continue(())))
            .unwrap_err();
        assert!(err.to_string().contains("Cannot open input file"));
    }
}
