// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types and traits that describe what the tool
// works with: records, the corpus it produces, and the
// abstractions the data layer implements.
//
// Rules for this layer:
//   - NO file I/O
//   - NO regexes or tokenizer types
//   - Only structs, type aliases and traits
//
// Everything the cleaning pipeline passes between layers
// is defined here, so the use cases never depend on a
// concrete loader or cleaner.

// A parsed JSONL record and the corpus built from records
pub mod record;

// The stopword / lemma resource used by linguistic normalisation
pub mod lexicon;

// Core abstractions (traits) that the data layer implements
pub mod traits;
