// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// One use case per command. Each one wires a loader, a
// cleaner and a writer together and returns a report.
//
// Rules for this layer:
//   - No regexes or cleaning rules here (that's Layer 4)
//   - No printing here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern

// Mode A: flatten records into a paragraph corpus
pub mod paragraphs_use_case;

// Mode B: leaf-clean passage fields, JSONL out
pub mod clean_use_case;

// Mode C: linguistic normalisation, JSONL out
pub mod preprocess_use_case;

// Resource availability check
pub mod check_use_case;

// Summary returned by the cleaning runs
pub mod report;
