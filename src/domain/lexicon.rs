// ============================================================
// Layer 3 — Lexicon
// ============================================================
// The read-only language resource behind linguistic
// normalisation: an English stopword set and a table of
// irregular noun forms ("children" → "child").
//
// A Lexicon is loaded once per run by the LexiconStore
// (Layer 6) and then handed to the normaliser by reference.
// Nothing mutates it after construction.

use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    stopwords:  HashSet<String>,
    exceptions: HashMap<String, String>,
}

impl Lexicon {
    /// Build a lexicon from already-parsed entries.
    /// Stopwords and exception keys are stored lowercase.
    pub fn new(
        stopwords:  impl IntoIterator<Item = String>,
        exceptions: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self {
            stopwords: stopwords
                .into_iter()
                .map(|w| w.to_lowercase())
                .collect(),
            exceptions: exceptions
                .into_iter()
                .map(|(inflected, base)| (inflected.to_lowercase(), base))
                .collect(),
        }
    }

    /// True if `word` (already lowercase) is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Irregular base form for `word`, if the table has one
    pub fn exception(&self, word: &str) -> Option<&str> {
        self.exceptions.get(word).map(String::as_str)
    }

    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }

    pub fn exception_count(&self) -> usize {
        self.exceptions.len()
    }
}
