// ============================================================
// Layer 2 — Run Report
// ============================================================
// What a finished cleaning run hands back to the CLI layer
// for printing. The use cases never print themselves.

use std::path::PathBuf;

use crate::domain::record::LoadStats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Entries written to the output (paragraphs or JSONL lines)
    pub written: usize,

    /// Loader counters for the input file
    pub stats: LoadStats,

    /// Where the output went
    pub output: PathBuf,
}
