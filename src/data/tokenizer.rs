// ============================================================
// Layer 4 — Word Tokenizer
// ============================================================
// Splits text into word and punctuation tokens for linguistic
// normalisation, e.g.
//
//   "this should work now!" → ["this", "should", "work", "now", "!"]
//
// Uses the BERT pre-tokenizer from the `tokenizers` crate:
// it splits on whitespace and isolates every punctuation
// character as its own token. No vocabulary is involved, so
// there is nothing to train or load.
//
// Pieces that touch (no gap in the byte offsets) are then
// glued back together when they form one of:
//   number        3.50, 1,000,000
//   ellipsis      ..., ..
//   abbreviation  u.s., e.g.

use anyhow::Result;
use tokenizers::pre_tokenizers::bert::BertPreTokenizer;
use tokenizers::{OffsetReferential, OffsetType, PreTokenizedString, PreTokenizer};

pub struct WordTokenizer {
    pre_tokenizer: BertPreTokenizer,
}

impl WordTokenizer {
    pub fn new() -> Self {
        Self { pre_tokenizer: BertPreTokenizer }
    }

    /// Split `text` into tokens, in order.
    pub fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let mut pretokenized = PreTokenizedString::from(text);
        self.pre_tokenizer
            .pre_tokenize(&mut pretokenized)
            .map_err(|e| anyhow::anyhow!("Pre-tokenisation error: {e}"))?;

        let pieces: Vec<Piece<'_>> = pretokenized
            .get_splits(OffsetReferential::Original, OffsetType::Byte)
            .into_iter()
            .map(|(token, offsets, _)| (token, offsets))
            .collect();

        Ok(merge_spans(&pieces))
    }

    /// Like `tokenize`, but falls back to a plain whitespace split
    /// if the pre-tokenizer reports an error. Never fails.
    pub fn tokenize_or_split(&self, text: &str) -> Vec<String> {
        match self.tokenize(text) {
            Ok(tokens) => tokens,
            Err(e) => {
                tracing::warn!("{e}; falling back to whitespace split");
                text.split_whitespace().map(str::to_string).collect()
            }
        }
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Span merging ─────────────────────────────────────────────────────────────

/// A pre-tokenized piece and its byte offsets in the input
type Piece<'s> = (&'s str, (usize, usize));

fn merge_spans(pieces: &[Piece<'_>]) -> Vec<String> {
    let mut tokens = Vec::with_capacity(pieces.len());
    let mut i = 0;
    while i < pieces.len() {
        let len = number_span(pieces, i)
            .or_else(|| ellipsis_span(pieces, i))
            .or_else(|| abbreviation_span(pieces, i))
            .unwrap_or(1);
        tokens.push(pieces[i..i + len].iter().map(|(text, _)| *text).collect::<String>());
        i += len;
    }
    tokens
}

/// True if piece `i + 1` starts exactly where piece `i` ends
fn touches(pieces: &[Piece<'_>], i: usize) -> bool {
    i + 1 < pieces.len() && pieces[i].1 .1 == pieces[i + 1].1 .0
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn is_single_letter(text: &str) -> bool {
    let mut chars = text.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
}

/// digits ( [.,] digits )+
fn number_span(pieces: &[Piece<'_>], start: usize) -> Option<usize> {
    if !is_digits(pieces[start].0) {
        return None;
    }
    let mut end = start + 1;
    while end + 1 < pieces.len()
        && touches(pieces, end - 1)
        && touches(pieces, end)
        && matches!(pieces[end].0, "." | ",")
        && is_digits(pieces[end + 1].0)
    {
        end += 2;
    }
    (end > start + 1).then_some(end - start)
}

/// Two or more dots in a row
fn ellipsis_span(pieces: &[Piece<'_>], start: usize) -> Option<usize> {
    if pieces[start].0 != "." {
        return None;
    }
    let mut end = start + 1;
    while end < pieces.len() && touches(pieces, end - 1) && pieces[end].0 == "." {
        end += 1;
    }
    (end - start >= 2).then_some(end - start)
}

/// ( letter "." ){2,}
fn abbreviation_span(pieces: &[Piece<'_>], start: usize) -> Option<usize> {
    let mut end = start;
    while end + 1 < pieces.len()
        && (end == start || touches(pieces, end - 1))
        && is_single_letter(pieces[end].0)
        && touches(pieces, end)
        && pieces[end + 1].0 == "."
    {
        end += 2;
    }
    (end - start >= 4).then_some(end - start)
}
