// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the raw JSONL file and the cleaned output.
//
//   ELI5.jsonl
//       │
//       ▼
//   JsonlLoader        → parses lines, skips malformed ones
//       │
//       ▼
//   flatten / traversal → pick what text to clean in a record
//       │
//       ▼
//   normalizer         → FlattenCleaner / LeafCleaner /
//       │                LinguisticNormalizer
//       │                  (tokenizer + lemmatizer)
//       ▼
//   writer             → JSON corpus or JSONL lines
//
// Each module does exactly one step and is tested on its own.

/// Streams records from newline-delimited JSON
pub mod loader;

/// The three cleaning modes
pub mod normalizer;

/// Value-to-text conversion and record flattening
pub mod flatten;

/// Structure-preserving cleaning of record fields
pub mod traversal;

/// Word/punctuation tokenisation
pub mod tokenizer;

/// Noun base-form reduction
pub mod lemmatizer;

/// JSONL and corpus output
pub mod writer;
