// ============================================================
// Layer 4 — Output Writers
// ============================================================
// Two output shapes:
//
//   JsonlWriter   — one record per line, spaced separators,
//                   used by the `clean` and `preprocess` runs
//   write_corpus  — one pretty-printed (2-space indent) JSON
//                   document, used by the `paragraphs` run
//
// The output file is opened once per run and buffered; the
// caller must call `finish()` so a failed flush surfaces as an
// error instead of being lost in Drop.

use anyhow::{Context, Result};
use serde::Serialize;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::data::flatten::write_spaced;
use crate::domain::record::ProcessedCorpus;

/// Buffered newline-delimited JSON writer.
pub struct JsonlWriter {
    out:     BufWriter<File>,
    path:    PathBuf,
    written: usize,
}

impl JsonlWriter {
    /// Create (or truncate) the output file.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = File::create(&path)
            .with_context(|| format!("Cannot create output file '{}'", path.display()))?;
        Ok(Self {
            out: BufWriter::new(file),
            path,
            written: 0,
        })
    }

    /// Append one value as a single JSON line.
    pub fn write<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        write_spaced(&mut self.out, value)
            .with_context(|| format!("Cannot write record to '{}'", self.path.display()))?;
        self.out.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    /// Number of lines written so far
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush buffered output and return the number of lines written.
    pub fn finish(mut self) -> Result<usize> {
        self.out
            .flush()
            .with_context(|| format!("Cannot flush '{}'", self.path.display()))?;
        tracing::debug!("Wrote {} lines to '{}'", self.written, self.path.display());
        Ok(self.written)
    }
}

/// Write the paragraph corpus as one pretty-printed JSON document.
pub fn write_corpus(path: &Path, corpus: &ProcessedCorpus) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Cannot create output file '{}'", path.display()))?;
    let mut out = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut out, corpus)
        .with_context(|| format!("Cannot write corpus to '{}'", path.display()))?;
    out.flush()
        .with_context(|| format!("Cannot flush '{}'", path.display()))?;

    tracing::debug!(
        "Wrote {} paragraphs to '{}'",
        corpus.metadata.processed_entries,
        path.display()
    );
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::FLATTEN_METHOD_LABEL;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_jsonl_writer_one_line_per_record() {
        let dir  = TempDir::new().unwrap();
        let path = dir.path().join("out.jsonl");

        let mut w = JsonlWriter::create(&path).unwrap();
        w.write(&json!({"id": 1, "ctxs": ["a b"]})).unwrap();
        w.write(&json!({"id": 2})).unwrap();
        assert_eq!(w.finish().unwrap(), 2);

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "{\"id\": 1, \"ctxs\": [\"a b\"]}\n{\"id\": 2}\n");
    }

    #[test]
    fn test_corpus_is_pretty_printed() {
        let dir    = TempDir::new().unwrap();
        let path   = dir.path().join("corpus.json");
        let corpus = ProcessedCorpus::new(
            "ELI5.jsonl",
            FLATTEN_METHOD_LABEL,
            vec!["What is the speed of light???".to_string()],
        );

        write_corpus(&path, &corpus).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("{\n  \"metadata\": {\n    \"source\": \"ELI5.jsonl\""));
        let back: ProcessedCorpus = serde_json::from_str(&text).unwrap();
        assert_eq!(back, corpus);
    }

    #[test]
    fn test_create_in_missing_directory_fails() {
        let err = JsonlWriter::create("/no/such/dir/out.jsonl").err().unwrap();
        assert!(err.to_string().contains("Cannot create output file"));
    }
}
