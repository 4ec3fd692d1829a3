// ============================================================
// Layer 4 — Value Flattening
// ============================================================
// Turns JSON values (or whole records) into plain text so the
// flatten-and-clean mode can treat them as prose.
//
//   "text"          → text
//   42 / 1.5        → "42" / "1.5"
//   true            → "true"
//   [..] / {..}     → JSON text with ", " and ": " separators
//   null            → nothing
//
// The spaced separators matter: after the cleaner blanks out
// quotes and brackets, "[1, 2]" leaves "1," as a token while a
// compact "[1,2]" would leave "1,2". The same formatter writes
// the JSONL outputs so records keep the dataset's layout.

use anyhow::Result;
use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::Value;
use std::io;

use crate::data::normalizer::FlattenCleaner;
use crate::domain::record::{is_metadata_key, Record};

/// serde_json formatter that writes `, ` between items and `: `
/// after keys, on a single line.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Serialise `value` to `writer` using the spaced separators.
pub fn write_spaced<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let mut ser = serde_json::Serializer::with_formatter(writer, SpacedFormatter);
    value.serialize(&mut ser)?;
    Ok(())
}

/// Serialise `value` to a String using the spaced separators.
pub fn to_spaced_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut buf = Vec::new();
    write_spaced(&mut buf, value)?;
    Ok(String::from_utf8(buf)?)
}

/// Text form of a value before cleaning. `None` for null.
pub fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b)   => Some(b.to_string()),
        Value::Array(_) | Value::Object(_) => {
            // Serialising an in-memory Value cannot fail
            Some(to_spaced_string(value).unwrap_or_else(|_| value.to_string()))
        }
        Value::Null      => None,
    }
}

/// Build one paragraph from a record: every non-metadata field is
/// flatten-cleaned and the non-empty results are joined by spaces.
pub fn flatten_record(record: &Record, cleaner: &FlattenCleaner) -> String {
    record
        .iter()
        .filter(|(key, _)| !is_metadata_key(key))
        .map(|(_, value)| cleaner.clean_value(value))
        .filter(|cleaned| !cleaned.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
