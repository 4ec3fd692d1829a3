// ============================================================
// Layer 6 — Lexicon Store
// ============================================================
// Manages the on-disk language resource used by linguistic
// normalisation. On first use the built-in English lists are
// written to the lexicon directory; later runs load them back
// from there, so a user can edit or replace either file.
//
// File layout:
//   lexicon/
//     stopwords/english            ← one stopword per line
//     lemmas/noun_exceptions.txt   ← "inflected base" per line
//
// Blank lines and lines starting with '#' are ignored in both.

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::lexicon::Lexicon;

const STOPWORDS_FILE: &str = "stopwords/english";
const EXCEPTIONS_FILE: &str = "lemmas/noun_exceptions.txt";

/// Standard English stopword list (lowercase, apostrophes kept)
const DEFAULT_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're",
    "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "she's", "her", "hers", "herself", "it", "it's",
    "its", "itself", "they", "them", "their", "theirs", "themselves", "what",
    "which", "who", "whom", "this", "that", "that'll", "these", "those", "am", "is",
    "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about",
    "against", "between", "into", "through", "during", "before", "after", "above",
    "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some",
    "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very",
    "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn",
    "couldn't", "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn",
    "hasn't", "haven", "haven't", "isn", "isn't", "ma", "mightn", "mightn't",
    "mustn", "mustn't", "needn", "needn't", "shan", "shan't", "shouldn",
    "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// Irregular nouns, and regular-looking words the suffix rules
/// would otherwise damage (mapped to themselves)
const DEFAULT_NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("lice", "louse"),
    ("oxen", "ox"),
    ("data", "datum"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("theses", "thesis"),
    ("hypotheses", "hypothesis"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("vertices", "vertex"),
    ("leaves", "leaf"),
    ("knives", "knife"),
    ("wives", "wife"),
    ("lives", "life"),
    ("wolves", "wolf"),
    ("halves", "half"),
    ("selves", "self"),
    ("shelves", "shelf"),
    ("calves", "calf"),
    ("loaves", "loaf"),
    ("thieves", "thief"),
    ("buses", "bus"),
    ("movies", "movie"),
    ("cookies", "cookie"),
    ("aches", "ache"),
    ("headaches", "headache"),
    ("niches", "niche"),
    ("caches", "cache"),
    ("shoes", "shoe"),
    ("horseshoes", "horseshoe"),
    ("toes", "toe"),
    ("tiptoes", "tiptoe"),
    ("canoes", "canoe"),
    ("oboes", "oboe"),
    ("gases", "gas"),
    ("biases", "bias"),
    ("aliases", "alias"),
    ("atlases", "atlas"),
    ("canvases", "canvas"),
    ("series", "series"),
    ("species", "species"),
    ("news", "news"),
    ("physics", "physics"),
    ("mathematics", "mathematics"),
    ("economics", "economics"),
    ("always", "always"),
    ("perhaps", "perhaps"),
    ("sometimes", "sometimes"),
    ("whereas", "whereas"),
    ("towards", "towards"),
    ("afterwards", "afterwards"),
    ("besides", "besides"),
    ("thus", "thus"),
    ("plus", "plus"),
    ("yes", "yes"),
    ("lens", "lens"),
    ("canvas", "canvas"),
    ("chaos", "chaos"),
    ("atlas", "atlas"),
    ("alias", "alias"),
    ("bias", "bias"),
];

/// Loads the lexicon from a directory, creating it if needed.
pub struct LexiconStore {
    dir: PathBuf,
}

impl LexiconStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn stopwords_path(&self) -> PathBuf {
        self.dir.join(STOPWORDS_FILE)
    }

    fn exceptions_path(&self) -> PathBuf {
        self.dir.join(EXCEPTIONS_FILE)
    }

    /// Load an existing lexicon, or write the defaults first
    pub fn load_or_build(&self) -> Result<Lexicon> {
        if self.stopwords_path().exists() && self.exceptions_path().exists() {
            tracing::info!("Loading lexicon from '{}'", self.dir.display());
        } else {
            tracing::info!("Building default lexicon in '{}'", self.dir.display());
            self.build_and_save()?;
        }
        self.load()
    }

    /// Load a previously saved lexicon
    pub fn load(&self) -> Result<Lexicon> {
        let stop_path = self.stopwords_path();
        let stop_text = fs::read_to_string(&stop_path)
            .with_context(|| format!("Cannot read stopwords from '{}'", stop_path.display()))?;

        let exc_path = self.exceptions_path();
        let exc_text = fs::read_to_string(&exc_path)
            .with_context(|| format!("Cannot read lemma exceptions from '{}'", exc_path.display()))?;

        let lexicon = Lexicon::new(parse_stopwords(&stop_text), parse_exceptions(&exc_text));
        tracing::debug!(
            "Lexicon ready: {} stopwords, {} exceptions",
            lexicon.stopword_count(),
            lexicon.exception_count()
        );
        Ok(lexicon)
    }

    /// Write only the files that are missing, leaving edited ones alone
    fn build_and_save(&self) -> Result<()> {
        let stop_path = self.stopwords_path();
        if !stop_path.exists() {
            write_lines(&stop_path, DEFAULT_STOPWORDS.iter().map(|w| w.to_string()))?;
        }

        let exc_path = self.exceptions_path();
        if !exc_path.exists() {
            write_lines(
                &exc_path,
                DEFAULT_NOUN_EXCEPTIONS
                    .iter()
                    .map(|(inflected, base)| format!("{inflected} {base}")),
            )?;
        }
        Ok(())
    }
}

fn write_lines(path: &Path, lines: impl Iterator<Item = String>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
    }
    let mut body = lines.collect::<Vec<_>>().join("\n");
    body.push('\n');
    fs::write(path, body).with_context(|| format!("Cannot write '{}'", path.display()))
}

fn content_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

fn parse_stopwords(text: &str) -> Vec<String> {
    content_lines(text).map(str::to_string).collect()
}

fn parse_exceptions(text: &str) -> Vec<(String, String)> {
    content_lines(text)
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            match (parts.next(), parts.next(), parts.next()) {
                (Some(inflected), Some(base), None) => {
                    Some((inflected.to_string(), base.to_string()))
                }
                _ => {
                    tracing::warn!("Ignoring malformed lemma exception line: '{line}'");
                    None
                }
            }
        })
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::lemmatizer::Lemmatizer;
    use tempfile::TempDir;

    #[test]
    fn test_first_use_writes_defaults() {
        let dir   = TempDir::new().unwrap();
        let store = LexiconStore::new(dir.path().join("lexicon"));

        let lex = store.load_or_build().unwrap();

        assert!(dir.path().join("lexicon/stopwords/english").exists());
        assert!(dir.path().join("lexicon/lemmas/noun_exceptions.txt").exists());
        assert_eq!(lex.stopword_count(), DEFAULT_STOPWORDS.len());
        assert_eq!(lex.exception_count(), DEFAULT_NOUN_EXCEPTIONS.len());
        assert!(lex.is_stopword("the"));
        assert_eq!(lex.exception("children"), Some("child"));
    }

    #[test]
    fn test_second_use_reads_edited_files() {
        let dir   = TempDir::new().unwrap();
        let store = LexiconStore::new(dir.path());
        store.load_or_build().unwrap();

        fs::write(dir.path().join(STOPWORDS_FILE), "# custom\nfoo\n\nbar\n").unwrap();

        let lex = store.load_or_build().unwrap();
        assert_eq!(lex.stopword_count(), 2);
        assert!(lex.is_stopword("foo"));
        assert!(!lex.is_stopword("the"));
    }

    #[test]
    fn test_load_without_files_fails() {
        let dir = TempDir::new().unwrap();
        let err = LexiconStore::new(dir.path()).load().unwrap_err();
        assert!(err.to_string().contains("Cannot read stopwords"));
    }

    #[test]
    fn test_parse_exceptions_skips_bad_lines() {
        let parsed = parse_exceptions("geese goose\nlonely\n# note\na b c\nmice mouse\n");
        assert_eq!(
            parsed,
            vec![
                ("geese".to_string(), "goose".to_string()),
                ("mice".to_string(), "mouse".to_string()),
            ]
        );
    }

    #[test]
    fn test_defaults_cover_es_plurals_the_rules_miss() {
        let dir = TempDir::new().unwrap();
        let lex = LexiconStore::new(dir.path()).load_or_build().unwrap();
        let l   = Lemmatizer::new(&lex);

        assert_eq!(l.lemmatize("gases"), "gas");
        assert_eq!(l.lemmatize("biases"), "bias");
        assert_eq!(l.lemmatize("shoes"), "shoe");
        assert_eq!(l.lemmatize("canoes"), "canoe");
        assert_eq!(l.lemmatize("heroes"), "hero");
        assert_eq!(l.lemmatize("cases"), "case");
        assert_eq!(l.lemmatize("phases"), "phase");
    }

    #[test]
    fn test_default_stopwords_are_unique() {
        let mut sorted = DEFAULT_STOPWORDS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), DEFAULT_STOPWORDS.len());
    }
}
