// ============================================================
// Layer 4 — Noun Lemmatizer
// ============================================================
// Reduces a lowercase token to its dictionary (noun) base form.
//
// Two stages:
//   1. Irregular forms from the lexicon's exception table
//      ("children" → "child", "leaves" → "leaf", "series" → "series")
//   2. Regular plural suffix rules
//        -ies   → -y     (flies → fly, only for words of 5+ chars)
//        -sses  → -ss    (classes → class)
//        -ches  → -ch    (churches → church)
//        -shes  → -sh    (dishes → dish)
//        -xes   → -x     (boxes → box)
//        -zzes  → -zz    (buzzes → buzz)
//        -oes   → -o     (heroes → hero)
//        -s     → ""     (cats → cat), but never for -ss, -us, -is
//
// -oes and -ses words that keep their "e" (shoes, cases) or
// double nothing (gases) are settled by the exception table.
//
// Tokens of three characters or fewer, and tokens containing
// anything but ASCII letters, are returned unchanged.

use crate::domain::lexicon::Lexicon;

/// Suffixes where the plural adds "es" rather than "s"
const ES_SUFFIXES: [&str; 6] = ["sses", "ches", "shes", "xes", "zzes", "oes"];

/// Endings that look plural but usually are not
const SINGULAR_S_ENDINGS: [&str; 3] = ["ss", "us", "is"];

pub struct Lemmatizer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Lemmatizer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lemmatize(&self, word: &str) -> String {
        if let Some(base) = self.lexicon.exception(word) {
            return base.to_string();
        }

        if word.len() <= 3 || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return word.to_string();
        }

        regular_noun_base(word).unwrap_or_else(|| word.to_string())
    }
}

/// Apply the suffix rules; `None` means the word is left as is.
fn regular_noun_base(word: &str) -> Option<String> {
    if word.len() > 4 {
        if let Some(stem) = word.strip_suffix("ies") {
            return Some(format!("{stem}y"));
        }
    }

    if ES_SUFFIXES.iter().any(|suffix| word.ends_with(suffix)) {
        return Some(word[..word.len() - 2].to_string());
    }

    if SINGULAR_S_ENDINGS.iter().any(|ending| word.ends_with(ending)) {
        return None;
    }

    word.strip_suffix('s').map(str::to_string)
}
