// ============================================================
// Layer 4 — Structured Value Traversal
// ============================================================
// Cleans text inside a record while keeping its structure.
// Each helper dispatches on the serde_json::Value variant:
//
//   clean_passages      — the "ctxs" shape: a list of passages
//                         where each item is either a string or
//                         an object with a "text" field
//   clean_leaves        — every string anywhere below a value
//   clean_string_field  — one top-level string field
//   clean_string_items  — every string item of a top-level list

use serde_json::Value;

use crate::domain::record::Record;
use crate::domain::traits::TextCleaner;

/// Key holding the passage body inside a passage object
pub const PASSAGE_TEXT_KEY: &str = "text";

/// Clean a passage list in place.
///
/// Items are handled as follows:
///   - string                 → cleaned
///   - object with "text"     → "text" cleaned if it is a string
///   - anything else          → dropped from the list
///
/// A value that is not a list is left alone.
pub fn clean_passages<C>(value: &mut Value, cleaner: &C)
where
    C: TextCleaner + ?Sized,
{
    let Value::Array(items) = value else {
        return;
    };

    let passages = std::mem::take(items);
    *items = passages
        .into_iter()
        .filter_map(|item| match item {
            Value::String(text) => Some(Value::String(cleaner.clean(&text))),
            Value::Object(mut passage) if passage.contains_key(PASSAGE_TEXT_KEY) => {
                if let Some(Value::String(text)) = passage.get_mut(PASSAGE_TEXT_KEY) {
                    *text = cleaner.clean(text);
                }
                Some(Value::Object(passage))
            }
            _ => None,
        })
        .collect();
}

/// Recursively clean every string leaf below `value`.
/// Numbers, booleans and nulls are untouched; object keys too.
pub fn clean_leaves<C>(value: &mut Value, cleaner: &C)
where
    C: TextCleaner + ?Sized,
{
    match value {
        Value::String(text) => *text = cleaner.clean(text),
        Value::Array(items) => {
            for item in items {
                clean_leaves(item, cleaner);
            }
        }
        Value::Object(fields) => {
            for (_, field) in fields.iter_mut() {
                clean_leaves(field, cleaner);
            }
        }
        Value::Number(_) | Value::Bool(_) | Value::Null => {}
    }
}

/// Clean `record[key]` if it exists and is a string.
pub fn clean_string_field<C>(record: &mut Record, key: &str, cleaner: &C)
where
    C: TextCleaner + ?Sized,
{
    if let Some(Value::String(text)) = record.get_mut(key) {
        *text = cleaner.clean(text);
    }
}

/// Clean each string item of `record[key]` if it is a list.
/// Non-string items keep their place unchanged.
pub fn clean_string_items<C>(record: &mut Record, key: &str, cleaner: &C)
where
    C: TextCleaner + ?Sized,
{
    if let Some(Value::Array(items)) = record.get_mut(key) {
        for item in items.iter_mut() {
            if let Value::String(text) = item {
                *text = cleaner.clean(text);
            }
        }
    }
}
