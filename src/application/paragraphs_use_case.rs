// ============================================================
// Layer 2 — ParagraphsUseCase (Mode A)
// ============================================================
// Turns the first N lines of a QA dataset into a corpus of
// readable paragraphs:
//
//   Step 1: Stream records from the first `max_lines` lines
//   Step 2: Flatten each record (metadata keys skipped)
//   Step 3: Keep paragraphs with at least `min_words` words
//   Step 4: Write {metadata, paragraphs} as one JSON document

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::ops::ControlFlow;
use std::path::Path;

use crate::application::report::RunReport;
use crate::data::{
    flatten::flatten_record,
    loader::JsonlLoader,
    normalizer::FlattenCleaner,
    writer::write_corpus,
};
use crate::domain::record::{ProcessedCorpus, FLATTEN_METHOD_LABEL};
use crate::domain::traits::{RecordSource, TextCleaner};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParagraphsConfig {
    pub input:     String,
    pub output:    String,
    pub max_lines: usize,
    pub min_words: usize,
}

impl Default for ParagraphsConfig {
    fn default() -> Self {
        Self {
            input:     "ELI5.jsonl".to_string(),
            output:    "ELI5_clean_paragraphs.json".to_string(),
            max_lines: 1000,
            min_words: 4,
        }
    }
}

pub struct ParagraphsUseCase {
    config: ParagraphsConfig,
}

impl ParagraphsUseCase {
    pub fn new(config: ParagraphsConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<RunReport> {
        let cfg     = &self.config;
        let cleaner = FlattenCleaner::new();

        // ── Steps 1-3: Flatten and filter ────────────────────────────────────
        tracing::info!(
            "Flattening up to {} lines of '{}' with the {} cleaner",
            cfg.max_lines,
            cfg.input,
            cleaner.name()
        );
        let loader = JsonlLoader::new(&cfg.input).max_lines(cfg.max_lines);

        let mut paragraphs = Vec::new();
        let stats = loader.for_each_record(|record| {
            let paragraph = flatten_record(&record, &cleaner);
            if !paragraph.is_empty() && paragraph.split_whitespace().count() >= cfg.min_words {
                paragraphs.push(paragraph);
            }
            Ok(ControlFlow::Continue(()))
        })?;

        // ── Step 4: Write the corpus ─────────────────────────────────────────
        let corpus = ProcessedCorpus::new(source_name(&cfg.input), FLATTEN_METHOD_LABEL, paragraphs);
        write_corpus(Path::new(&cfg.output), &corpus)?;

        tracing::info!(
            "{} of {} records kept as paragraphs",
            corpus.metadata.processed_entries,
            stats.records
        );

        Ok(RunReport {
            written: corpus.metadata.processed_entries,
            stats,
            output:  cfg.output.clone().into(),
        })
    }
}

/// The input's file name, used as the corpus `source`
fn source_name(input: &str) -> String {
    Path::new(input)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(input)
        .to_string()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn run(dir: &TempDir, lines: &[String]) -> (RunReport, ProcessedCorpus) {
        let input  = dir.path().join("ELI5.jsonl");
        let output = dir.path().join("paragraphs.json");
        fs::write(&input, lines.join("\n")).unwrap();

        let config = ParagraphsConfig {
            input:  input.to_string_lossy().into_owned(),
            output: output.to_string_lossy().into_owned(),
            ..ParagraphsConfig::default()
        };
        let report = ParagraphsUseCase::new(config).execute().unwrap();
        let corpus = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        (report, corpus)
    }

    #[test]
    fn test_end_to_end_single_question() {
        let dir = TempDir::new().unwrap();
        let (report, corpus) = run(
            &dir,
            &[r#"{"id": 1, "question": "What is  the {speed} of light???"}"#.to_string()],
        );

        assert_eq!(report.written, 1);
        assert_eq!(corpus.metadata.processed_entries, 1);
        assert_eq!(corpus.metadata.source, "ELI5.jsonl");
        assert_eq!(corpus.metadata.cleaning_method, "basic_clean_v3");
        assert!(corpus.paragraphs[0].starts_with("What is the speed of light???"));
    }

    #[test]
    fn test_malformed_and_short_entries_are_dropped() {
        let dir = TempDir::new().unwrap();
        let (report, corpus) = run(
            &dir,
            &[
                "question id".to_string(),
                r#"{"id": 2, "score": 10}"#.to_string(),
                r#"{"question": "too short"}"#.to_string(),
                r#"{"question": "why do cats purr so much", "answers": ["contentment"]}"#.to_string(),
            ],
        );

        assert_eq!(report.stats.malformed, 1);
        assert_eq!(corpus.metadata.processed_entries, 1);
        assert_eq!(corpus.paragraphs, vec!["Why do cats purr so much Contentment"]);
    }

    #[test]
    fn test_stops_after_line_budget() {
        let dir   = TempDir::new().unwrap();
        let lines: Vec<String> = (0..1001)
            .map(|i| format!(r#"{{"id": {i}, "question": "question number {i} about light"}}"#))
            .collect();

        let (report, corpus) = run(&dir, &lines);

        assert_eq!(report.stats.lines_read, 1000);
        assert_eq!(corpus.metadata.processed_entries, 1000);
        assert_eq!(corpus.paragraphs.len(), 1000);
    }

    #[test]
    fn test_output_contains_no_artifacts() {
        let dir = TempDir::new().unwrap();
        let (_, corpus) = run(
            &dir,
            &[r#"{"question": "see http://a.b/c [link] for \"more\" info", "ctxs": [{"text": "nested {value} here"}]}"#.to_string()],
        );

        let para = &corpus.paragraphs[0];
        for bad in ["{", "}", "[", "]", "\"", "http", "www"] {
            assert!(!para.contains(bad), "found {bad:?} in {para:?}");
        }
        assert!(para.chars().next().unwrap().is_uppercase());
    }
}
