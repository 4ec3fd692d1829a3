// ============================================================
// Layer 2 — PreprocessUseCase (Mode C)
// ============================================================
// Prepares a (usually already cleaned) QA dataset for model
// input by running linguistic normalisation over its text:
//
//   Step 1: Load or build the lexicon (stopwords + lemmas)
//   Step 2: For every record
//             "question" → normalised if it is a string
//             "answers"  → each string item normalised
//             "ctxs"     → passage strings / {"text": ..} items
//   Step 3: Write each record as one JSON line

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::ops::ControlFlow;

use crate::application::report::RunReport;
use crate::data::{
    loader::JsonlLoader,
    normalizer::LinguisticNormalizer,
    traversal::{clean_passages, clean_string_field, clean_string_items},
    writer::JsonlWriter,
};
use crate::domain::record::Record;
use crate::domain::traits::{RecordSource, TextCleaner};
use crate::infra::lexicon_store::LexiconStore;

pub const QUESTION_FIELD: &str = "question";
pub const ANSWERS_FIELD: &str = "answers";
pub const CONTEXTS_FIELD: &str = "ctxs";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessConfig {
    pub input:       String,
    pub output:      String,
    pub lexicon_dir: String,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            input:       "ELI5_cleaned.jsonl".to_string(),
            output:      "ELI5_preprocessed.jsonl".to_string(),
            lexicon_dir: "lexicon".to_string(),
        }
    }
}

pub struct PreprocessUseCase {
    config: PreprocessConfig,
}

impl PreprocessUseCase {
    pub fn new(config: PreprocessConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<RunReport> {
        let cfg = &self.config;

        // ── Step 1: Lexicon ──────────────────────────────────────────────────
        // Loaded once here and lent to the normaliser for the whole run
        let lexicon    = LexiconStore::new(&cfg.lexicon_dir).load_or_build()?;
        let normalizer = LinguisticNormalizer::new(&lexicon);

        // ── Steps 2-3: Normalise and write ───────────────────────────────────
        tracing::info!("Preprocessing '{}' with the {} cleaner", cfg.input, normalizer.name());
        let loader     = JsonlLoader::new(&cfg.input);
        // Open the input first so a missing file leaves the old output intact
        let input      = loader.open()?;
        let mut writer = JsonlWriter::create(&cfg.output)?;

        let stats = loader.stream(input, |mut record| {
            preprocess_record(&mut record, &normalizer);
            writer.write(&record)?;
            Ok(ControlFlow::Continue(()))
        })?;

        let written = writer.finish()?;
        tracing::info!("Preprocessed {} records into '{}'", written, cfg.output);

        Ok(RunReport {
            written,
            stats,
            output: cfg.output.clone().into(),
        })
    }
}

/// Normalise the question, answers and contexts of one record.
fn preprocess_record<C: TextCleaner>(record: &mut Record, cleaner: &C) {
    clean_string_field(record, QUESTION_FIELD, cleaner);
    clean_string_items(record, ANSWERS_FIELD, cleaner);
    if let Some(ctxs) = record.get_mut(CONTEXTS_FIELD) {
        clean_passages(ctxs, cleaner);
    }
}
