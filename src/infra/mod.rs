// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting resources that are not part of any one
// cleaning step:
//
//   lexicon_store.rs — the stopword / lemma-exception files
//                      behind linguistic normalisation. Writes
//                      built-in defaults on first use and loads
//                      the cached copy on every later run.

/// Lexicon persistence
pub mod lexicon_store;
