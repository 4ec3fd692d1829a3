// ============================================================
// Layer 2 — CleanUseCase (Mode B)
// ============================================================
// Light, structure-preserving cleanup of a QA dataset:
//
//   Step 1: Stream records, skipping header lines that do not
//           start with "{" and lines that fail to parse
//   Step 2: Leaf-clean the configured fields (default "ctxs")
//             passage mode → strings and {"text": ..} items
//             deep mode    → every string below the field
//   Step 3: Write each record as one JSON line, stopping once
//           `max_records` lines have been written

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::ops::ControlFlow;

use crate::application::report::RunReport;
use crate::data::{
    loader::JsonlLoader,
    normalizer::LeafCleaner,
    traversal::{clean_leaves, clean_passages},
    writer::JsonlWriter,
};
use crate::domain::traits::{RecordSource, TextCleaner};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanConfig {
    pub input:       String,
    pub output:      String,
    pub max_records: usize,
    pub fields:      Vec<String>,
    pub deep:        bool,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            input:       "ELI5.jsonl".to_string(),
            output:      "ELI5_cleaned.jsonl".to_string(),
            max_records: 1000,
            fields:      vec!["ctxs".to_string()],
            deep:        false,
        }
    }
}

pub struct CleanUseCase {
    config: CleanConfig,
}

impl CleanUseCase {
    pub fn new(config: CleanConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<RunReport> {
        let cfg     = &self.config;
        let cleaner = LeafCleaner::new();

        tracing::info!(
            "Cleaning fields {:?} of '{}' with the {} cleaner{}",
            cfg.fields,
            cfg.input,
            cleaner.name(),
            if cfg.deep { " (deep)" } else { "" }
        );

        let loader     = JsonlLoader::new(&cfg.input).require_object_prefix(true);
        // Open the input first so a missing file leaves the old output intact
        let input      = loader.open()?;
        let mut writer = JsonlWriter::create(&cfg.output)?;

        let stats = loader.stream(input, |mut record| {
            if writer.written() >= cfg.max_records {
                return Ok(ControlFlow::Break(()));
            }

            for field in &cfg.fields {
                if let Some(value) = record.get_mut(field.as_str()) {
                    if cfg.deep {
                        clean_leaves(value, &cleaner);
                    } else {
                        clean_passages(value, &cleaner);
                    }
                }
            }

            writer.write(&record)?;
            if writer.written() >= cfg.max_records {
                return Ok(ControlFlow::Break(()));
            }
            Ok(ControlFlow::Continue(()))
        })?;

        let written = writer.finish()?;
        tracing::info!("Cleaned {} records into '{}'", written, cfg.output);

        Ok(RunReport {
            written,
            stats,
            output: cfg.output.clone().into(),
        })
    }
}
