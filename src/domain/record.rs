// ============================================================
// Layer 3 — Record and Corpus Types
// ============================================================
// A Record is one JSON object from the input dataset, e.g.
//
//   {"id": 7, "question": "Why is the sky blue?",
//    "answers": ["Rayleigh scattering ..."],
//    "ctxs": [{"text": "..."}, "..."]}
//
// serde_json's Value is already a tagged union over
// string / number / bool / null / array / object, so the
// record is simply an ordered map of field name to Value
// (the `preserve_order` feature keeps input field order).
//
// The ProcessedCorpus is the Mode A output document:
//
//   {
//     "metadata": {"source": ..., "processed_entries": N,
//                  "cleaning_method": "basic_clean_v3"},
//     "paragraphs": ["...", "..."]
//   }

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One parsed JSON object from the dataset.
pub type Record = Map<String, Value>;

/// Label written into the corpus metadata for flatten-and-clean runs
pub const FLATTEN_METHOD_LABEL: &str = "basic_clean_v3";

/// Field names that carry bookkeeping rather than text.
/// Compared case-insensitively when flattening a record.
pub const METADATA_KEYS: [&str; 4] = ["id", "question_id", "index", "score"];

/// Returns true if `key` names a metadata field that should not
/// contribute text to a paragraph.
pub fn is_metadata_key(key: &str) -> bool {
    let key = key.to_lowercase();
    METADATA_KEYS.contains(&key.as_str())
}

/// Summary block written at the top of the corpus document.
/// Field order here is the order in the output JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusMetadata {
    /// Input file name the paragraphs came from
    pub source: String,

    /// Number of paragraphs that survived the length filter
    pub processed_entries: usize,

    /// Which cleaning routine produced the paragraphs
    pub cleaning_method: String,
}

/// The full Mode A output: metadata plus cleaned paragraphs.
/// Built once at the end of a run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedCorpus {
    pub metadata: CorpusMetadata,
    pub paragraphs: Vec<String>,
}

impl ProcessedCorpus {
    /// Wrap the surviving paragraphs, deriving `processed_entries`
    /// from their count so the two can never disagree.
    pub fn new(
        source:          impl Into<String>,
        cleaning_method: impl Into<String>,
        paragraphs:      Vec<String>,
    ) -> Self {
        Self {
            metadata: CorpusMetadata {
                source:            source.into(),
                processed_entries: paragraphs.len(),
                cleaning_method:   cleaning_method.into(),
            },
            paragraphs,
        }
    }
}

/// Counters collected while reading a JSONL file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Input lines considered (including skipped ones)
    pub lines_read: usize,

    /// Lines that parsed into a JSON object
    pub records: usize,

    /// Lines that failed to parse, or parsed to a non-object
    pub malformed: usize,

    /// Lines rejected before parsing (headers, blank lines)
    pub non_record: usize,
}

impl LoadStats {
    /// Total lines that did not produce a record
    pub fn skipped(&self) -> usize {
        self.malformed + self.non_record
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_keys_are_case_insensitive() {
        assert!(is_metadata_key("id"));
        assert!(is_metadata_key("Question_ID"));
        assert!(is_metadata_key("SCORE"));
        assert!(!is_metadata_key("question"));
        assert!(!is_metadata_key("ctxs"));
    }

    #[test]
    fn test_corpus_counts_paragraphs() {
        let corpus = ProcessedCorpus::new(
            "ELI5.jsonl",
            FLATTEN_METHOD_LABEL,
            vec!["One two three four".to_string(), "Five six seven eight".to_string()],
        );
        assert_eq!(corpus.metadata.processed_entries, 2);
        assert_eq!(corpus.metadata.cleaning_method, "basic_clean_v3");
    }

    #[test]
    fn test_metadata_serialises_in_declared_order() {
        let corpus = ProcessedCorpus::new("in.jsonl", FLATTEN_METHOD_LABEL, Vec::new());
        let json   = serde_json::to_string(&corpus).unwrap();
        assert_eq!(
            json,
            r#"{"metadata":{"source":"in.jsonl","processed_entries":0,"cleaning_method":"basic_clean_v3"},"paragraphs":[]}"#
        );
    }

    #[test]
    fn test_skipped_sums_both_kinds() {
        let stats = LoadStats { lines_read: 5, records: 2, malformed: 2, non_record: 1 };
        assert_eq!(stats.skipped(), 3);
    }
}
