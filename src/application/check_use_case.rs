// ============================================================
// Layer 2 — CheckUseCase
// ============================================================
// Verifies the linguistic resources are in place before a
// long preprocessing run: builds the lexicon if it is
// missing, then tokenises a sample sentence.

use anyhow::Result;

use crate::data::tokenizer::WordTokenizer;
use crate::infra::lexicon_store::LexiconStore;

/// What the resource check found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub stopwords:  usize,
    pub exceptions: usize,
    pub tokens:     Vec<String>,
}

pub struct CheckUseCase {
    lexicon_dir: String,
    sample:      String,
}

impl CheckUseCase {
    pub fn new(lexicon_dir: impl Into<String>, sample: impl Into<String>) -> Self {
        Self {
            lexicon_dir: lexicon_dir.into(),
            sample:      sample.into(),
        }
    }

    pub fn execute(&self) -> Result<CheckReport> {
        let lexicon = LexiconStore::new(&self.lexicon_dir).load_or_build()?;
        let tokens  = WordTokenizer::new().tokenize(&self.sample)?;

        Ok(CheckReport {
            stopwords:  lexicon.stopword_count(),
            exceptions: lexicon.exception_count(),
            tokens,
        })
    }
}
