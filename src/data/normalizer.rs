// ============================================================
// Layer 4 — Text Normalisers
// ============================================================
// Three cleaning modes, each its own type implementing the
// TextCleaner trait from Layer 3. They are NOT variations of
// one routine: each keeps a different character set and a
// different case policy, tuned to the output it feeds.
//
//   FlattenCleaner       → paragraph corpus (Mode A)
//     1. JSON artefacts  { } [ ] " \   → space
//     2. URLs (http…, www…)           → space
//     3. anything but word chars, whitespace and . , ! ? ; : ' -
//                                      → space
//     4. drop 1-char tokens except "i" / "a"
//     5. "word ,next" → "word, next"
//     6. collapse whitespace, trim
//     7. upper-case the first character
//
//   LeafCleaner          → cleaned JSONL (Mode B)
//     delete smart and straight quotes, collapse whitespace,
//     trim; case untouched
//
//   LinguisticNormalizer → preprocessed JSONL (Mode C)
//     lowercase, keep [a-z0-9 whitespace . , ! ?], tokenise,
//     drop stopwords, lemmatise, join with single spaces

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::data::flatten::value_to_text;
use crate::data::lemmatizer::Lemmatizer;
use crate::data::tokenizer::WordTokenizer;
use crate::domain::lexicon::Lexicon;
use crate::domain::traits::TextCleaner;

static JSON_ARTIFACTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[{}\[\]"\\]"#).expect("valid JSON artefact pattern"));

static URLS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"http\S+|www\S+|https\S+").expect("valid URL pattern"));

static DISALLOWED_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s.,!?;:'-]").expect("valid character filter"));

static SPACE_BEFORE_PUNCT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+([.,!?;:])\s*").expect("valid punctuation pattern"));

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

static QUOTES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[“”‘’"']"#).expect("valid quote pattern"));

static NON_ASCII_WORD_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9\s.,!?]").expect("valid linguistic filter"));

/// Collapse every whitespace run to one space and trim both ends.
/// Running it twice gives the same result as running it once.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Upper-case the first character, leave the rest as is.
fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None        => String::new(),
    }
}

/// A token survives unless it is a single character other than "i"/"a".
/// The whole lowercase form is compared: "İ" lowers to two chars.
fn keep_token(word: &str) -> bool {
    word.chars().count() > 1 || matches!(word.to_lowercase().as_str(), "i" | "a")
}

// ─── FlattenCleaner ───────────────────────────────────────────────────────────

/// Flatten-and-clean: strips structural noise so a whole record
/// can be read as one human-readable paragraph.
#[derive(Debug, Default, Clone, Copy)]
pub struct FlattenCleaner;

impl FlattenCleaner {
    pub fn new() -> Self {
        Self
    }

    /// Clean any JSON value. Scalars are stringified, arrays and
    /// objects are serialised to JSON text first, null yields "".
    pub fn clean_value(&self, value: &Value) -> String {
        match value_to_text(value) {
            Some(text) => self.clean(&text),
            None       => String::new(),
        }
    }
}

impl TextCleaner for FlattenCleaner {
    fn clean(&self, text: &str) -> String {
        // ── Step 1: Character-level noise ────────────────────────────────────
        let text = JSON_ARTIFACTS.replace_all(text, " ");
        let text = URLS.replace_all(&text, " ");
        let text = DISALLOWED_CHARS.replace_all(&text, " ");

        // ── Step 2: Drop stray single characters ─────────────────────────────
        let text = text
            .split_whitespace()
            .filter(|w| keep_token(w))
            .collect::<Vec<_>>()
            .join(" ");

        // ── Step 3: Punctuation spacing and whitespace ───────────────────────
        let text = SPACE_BEFORE_PUNCT.replace_all(&text, "${1} ");
        let text = normalize_whitespace(&text);

        capitalize_first(&text)
    }

    fn name(&self) -> &'static str {
        "flatten"
    }
}

// ─── LeafCleaner ──────────────────────────────────────────────────────────────

/// Leaf-clean: light touch for passage text that keeps its
/// structure. Quotes are deleted outright (not replaced by a space).
#[derive(Debug, Default, Clone, Copy)]
pub struct LeafCleaner;

impl LeafCleaner {
    pub fn new() -> Self {
        Self
    }
}

impl TextCleaner for LeafCleaner {
    fn clean(&self, text: &str) -> String {
        let text = QUOTES.replace_all(text, "");
        normalize_whitespace(&text)
    }

    fn name(&self) -> &'static str {
        "leaf"
    }
}

// ─── LinguisticNormalizer ─────────────────────────────────────────────────────

/// Linguistic normalisation for model input: lowercased,
/// stopword-free, lemmatised tokens joined by single spaces.
///
/// Borrows the lexicon so one loaded resource serves every record.
pub struct LinguisticNormalizer<'a> {
    lexicon:    &'a Lexicon,
    tokenizer:  WordTokenizer,
    lemmatizer: Lemmatizer<'a>,
}

impl<'a> LinguisticNormalizer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            lexicon,
            tokenizer:  WordTokenizer::new(),
            lemmatizer: Lemmatizer::new(lexicon),
        }
    }
}

impl TextCleaner for LinguisticNormalizer<'_> {
    fn clean(&self, text: &str) -> String {
        let lowered  = text.to_lowercase();
        let filtered = NON_ASCII_WORD_CHARS.replace_all(&lowered, "");

        self.tokenizer
            .tokenize_or_split(&filtered)
            .into_iter()
            .filter(|token| !self.lexicon.is_stopword(token))
            .map(|token| self.lemmatizer.lemmatize(&token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn name(&self) -> &'static str {
        "linguistic"
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lexicon() -> Lexicon {
        Lexicon::new(
            ["the", "are", "is", "a", "of", "this"].iter().map(|s| s.to_string()),
            vec![("children".to_string(), "child".to_string())],
        )
    }

    // ── FlattenCleaner ───────────────────────────────────────────────────────

    #[test]
    fn test_flatten_strips_braces_and_collapses_spaces() {
        let c = FlattenCleaner::new();
        assert_eq!(
            c.clean("What is  the {speed} of light???"),
            "What is the speed of light???"
        );
    }

    #[test]
    fn test_flatten_removes_urls() {
        let c   = FlattenCleaner::new();
        let out = c.clean("see https://example.com/a?b=1 and www.foo.org or http://x.y for more");
        assert!(!out.contains("http"));
        assert!(!out.contains("www"));
        assert!(!out.contains("://"));
        assert_eq!(out, "See and or for more");
    }

    #[test]
    fn test_flatten_never_emits_json_artifacts() {
        let c   = FlattenCleaner::new();
        let out = c.clean(r#"{"a": ["b", {"c": "d \"e\""}], "x\\y": null}"#);
        for bad in ['{', '}', '[', ']', '"'] {
            assert!(!out.contains(bad), "found {bad:?} in {out:?}");
        }
    }

    #[test]
    fn test_flatten_drops_single_chars_except_i_and_a() {
        let c = FlattenCleaner::new();
        assert_eq!(c.clean("x marks a spot I think b"), "Marks a spot I think");
    }

    #[test]
    fn test_flatten_drops_dotted_capital_i() {
        let c = FlattenCleaner::new();
        assert_eq!(c.clean("İ went home"), "Went home");
        assert_eq!(c.clean("I went home"), "I went home");
    }

    #[test]
    fn test_flatten_fixes_space_before_punctuation() {
        let c = FlattenCleaner::new();
        assert_eq!(c.clean("hello ,world ;again"), "Hello, world; again");
    }

    #[test]
    fn test_flatten_replaces_symbols_with_space() {
        let c = FlattenCleaner::new();
        assert_eq!(c.clean("cats&dogs #tag it's well-known"), "Cats dogs tag it's well-known");
    }

    #[test]
    fn test_flatten_capitalises_only_first_char() {
        let c = FlattenCleaner::new();
        assert_eq!(c.clean("élan vital is NOT here"), "Élan vital is NOT here");
        assert_eq!(c.clean("a"), "A");
    }

    #[test]
    fn test_flatten_empty_input() {
        let c = FlattenCleaner::new();
        assert_eq!(c.clean(""), "");
        assert_eq!(c.clean("{ } [ ] \" \\"), "");
    }

    #[test]
    fn test_flatten_clean_value_coerces_scalars() {
        let c = FlattenCleaner::new();
        assert_eq!(c.clean_value(&json!(42)), "42");
        assert_eq!(c.clean_value(&json!(true)), "True");
        assert_eq!(c.clean_value(&Value::Null), "");
    }

    #[test]
    fn test_flatten_clean_value_flattens_structures() {
        let c   = FlattenCleaner::new();
        let out = c.clean_value(&json!(["first answer", {"text": "second answer"}]));
        // the lone "," and ":" left behind by the separators are dropped
        assert_eq!(out, "First answer text second answer");
    }

    // ── LeafCleaner ──────────────────────────────────────────────────────────

    #[test]
    fn test_leaf_deletes_quotes_without_spacing() {
        let c = LeafCleaner::new();
        assert_eq!(c.clean("“Don’t” say \"it's\""), "Dont say its");
    }

    #[test]
    fn test_leaf_keeps_case_and_punctuation() {
        let c = LeafCleaner::new();
        assert_eq!(c.clean("  The {Sky}   is\tBLUE.  "), "The {Sky} is BLUE.");
    }

    #[test]
    fn test_whitespace_normalisation_is_idempotent() {
        let once  = normalize_whitespace("  a \n\n b\t\tc  ");
        let twice = normalize_whitespace(&once);
        assert_eq!(once, "a b c");
        assert_eq!(once, twice);
    }

    // ── LinguisticNormalizer ─────────────────────────────────────────────────

    #[test]
    fn test_linguistic_pipeline() {
        let lex = lexicon();
        let n   = LinguisticNormalizer::new(&lex);
        assert_eq!(n.clean("The cats are running!"), "cat running !");
    }

    #[test]
    fn test_linguistic_strips_non_ascii_symbols() {
        let lex = lexicon();
        let n   = LinguisticNormalizer::new(&lex);
        assert_eq!(n.clean("Café’s #1 choice"), "caf 1 choice");
    }

    #[test]
    fn test_linguistic_uses_exceptions() {
        let lex = lexicon();
        let n   = LinguisticNormalizer::new(&lex);
        assert_eq!(n.clean("This is a story of children, boxes and flies."), "story child , box and fly .");
    }

    #[test]
    fn test_linguistic_keeps_decimals_ellipses_and_abbreviations() {
        let lex = Lexicon::default();
        let n   = LinguisticNormalizer::new(&lex);
        assert_eq!(
            n.clean("it costs 3.50 dollars... in the u.s. 1,000 times"),
            "it cost 3.50 dollar ... in the u.s. 1,000 time"
        );
    }

    #[test]
    fn test_linguistic_empty_input() {
        let lex = lexicon();
        let n   = LinguisticNormalizer::new(&lex);
        assert_eq!(n.clean(""), "");
        assert_eq!(n.clean("the a is"), "");
    }

    #[test]
    fn test_cleaner_names() {
        let lex = lexicon();
        assert_eq!(FlattenCleaner::new().name(), "flatten");
        assert_eq!(LeafCleaner::new().name(), "leaf");
        assert_eq!(LinguisticNormalizer::new(&lex).name(), "linguistic");
    }
}
