// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the four subcommands and their flags:
//
//   paragraphs  — Mode A, flatten-and-clean into one JSON corpus
//   clean       — Mode B, leaf-clean passages into JSONL
//   preprocess  — Mode C, linguistic normalisation into JSONL
//   check       — make sure the lexicon resource is available
//
// Every file name defaults to the dataset's conventional name,
// so running a subcommand with no flags in the dataset folder
// just works.

use clap::{Args, Subcommand};

use crate::application::{
    clean_use_case::CleanConfig,
    paragraphs_use_case::ParagraphsConfig,
    preprocess_use_case::PreprocessConfig,
};

/// The top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Flatten each record into a cleaned paragraph (JSON corpus)
    Paragraphs(ParagraphsArgs),

    /// Strip quotes and extra whitespace from passage fields (JSONL)
    Clean(CleanArgs),

    /// Lowercase, drop stopwords and lemmatise question/answers/ctxs (JSONL)
    Preprocess(PreprocessArgs),

    /// Build or verify the lexicon and tokenise a sample sentence
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct ParagraphsArgs {
    /// Input JSONL dataset
    #[arg(long, default_value = "ELI5.jsonl")]
    pub input: String,

    /// Output JSON corpus
    #[arg(long, default_value = "ELI5_clean_paragraphs.json")]
    pub output: String,

    /// Number of input lines to consider (malformed lines included)
    #[arg(long, default_value_t = 1000)]
    pub max_lines: usize,

    /// Paragraphs with fewer words than this are dropped
    #[arg(long, default_value_t = 4)]
    pub min_words: usize,
}

/// Layer 1 → Layer 2 boundary: the use case never sees clap types.
impl From<ParagraphsArgs> for ParagraphsConfig {
    fn from(a: ParagraphsArgs) -> Self {
        ParagraphsConfig {
            input:     a.input,
            output:    a.output,
            max_lines: a.max_lines,
            min_words: a.min_words,
        }
    }
}

#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Input JSONL dataset (header lines are skipped)
    #[arg(long, default_value = "ELI5.jsonl")]
    pub input: String,

    /// Output JSONL file
    #[arg(long, default_value = "ELI5_cleaned.jsonl")]
    pub output: String,

    /// Stop after writing this many records
    #[arg(long, default_value_t = 1000)]
    pub max_records: usize,

    /// Field to clean; repeat the flag for several fields
    #[arg(long = "field", default_value = "ctxs")]
    pub fields: Vec<String>,

    /// Clean every string inside the fields instead of passage items only
    #[arg(long)]
    pub deep: bool,
}

impl From<CleanArgs> for CleanConfig {
    fn from(a: CleanArgs) -> Self {
        CleanConfig {
            input:       a.input,
            output:      a.output,
            max_records: a.max_records,
            fields:      a.fields,
            deep:        a.deep,
        }
    }
}

#[derive(Args, Debug)]
pub struct PreprocessArgs {
    /// Input JSONL dataset, usually the output of `clean`
    #[arg(long, default_value = "ELI5_cleaned.jsonl")]
    pub input: String,

    /// Output JSONL file
    #[arg(long, default_value = "ELI5_preprocessed.jsonl")]
    pub output: String,

    /// Directory holding the stopword and lemma files
    #[arg(long, default_value = "lexicon")]
    pub lexicon_dir: String,
}

impl From<PreprocessArgs> for PreprocessConfig {
    fn from(a: PreprocessArgs) -> Self {
        PreprocessConfig {
            input:       a.input,
            output:      a.output,
            lexicon_dir: a.lexicon_dir,
        }
    }
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Directory holding the stopword and lemma files
    #[arg(long, default_value = "lexicon")]
    pub lexicon_dir: String,

    /// Sentence to tokenise
    #[arg(long, default_value = "This should work now!")]
    pub sample: String,
}
