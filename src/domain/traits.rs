// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The use cases program against these traits rather than the
// concrete cleaners and loaders in Layer 4:
//   - FlattenCleaner, LeafCleaner and LinguisticNormalizer
//     all implement TextCleaner
//   - JsonlLoader implements RecordSource
//
// The three cleaners deliberately stay separate types: they
// keep different character sets and case policies and must
// not drift into one another.

use anyhow::Result;
use std::ops::ControlFlow;

use crate::domain::record::{LoadStats, Record};

// ─── TextCleaner ──────────────────────────────────────────────────────────────
/// Any component that turns one piece of text into its cleaned form.
///
/// Cleaning never fails: an input that cleans down to nothing
/// yields an empty string and the caller decides what to do with it.
pub trait TextCleaner {
    /// Clean a single string.
    fn clean(&self, text: &str) -> String;

    /// Short name used in log lines and summaries
    fn name(&self) -> &'static str;
}

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Any component that can stream JSON records to a callback.
///
/// Opening and streaming are separate steps so a caller can make
/// sure the input exists before it truncates an output file.
/// The callback returns `ControlFlow::Break` to stop reading early
/// (e.g. once an output cap has been reached).
pub trait RecordSource {
    /// Handle on the opened input
    type Reader;

    /// Open the input, failing if it is missing or unreadable.
    fn open(&self) -> Result<Self::Reader>;

    /// Feed every record from an opened input to `visit` in order.
    /// Returns the read counters once the input is exhausted or
    /// the callback breaks.
    fn stream<F>(&self, reader: Self::Reader, visit: F) -> Result<LoadStats>
    where
        F: FnMut(Record) -> Result<ControlFlow<()>>;

    /// Open and stream in one go.
    fn for_each_record<F>(&self, visit: F) -> Result<LoadStats>
    where
        F: FnMut(Record) -> Result<ControlFlow<()>>,
    {
        let reader = self.open()?;
        self.stream(reader, visit)
    }
}
