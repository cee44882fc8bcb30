//! Session metadata stored alongside each archive in the `metadata` column.

use serde_json::{Map, Value};
use time::OffsetDateTime;

use crate::clock::to_rfc3339;

/// JSON object stored in the `metadata` column.
pub type Metadata = Map<String, Value>;

/// Shallow key-wise union of `incoming` into `existing`; incoming values win.
pub fn merge_metadata(existing: &mut Metadata, incoming: Metadata) {
    for (key, value) in incoming {
        existing.insert(key, value);
    }
}

/// Metadata written by `save`: the archive's file name, its byte length and
/// the time it was stored.
pub(crate) fn archive_metadata(
    original_filename: &str,
    size: usize,
    now: OffsetDateTime,
) -> Metadata {
    let mut metadata = Metadata::new();
    metadata.insert(
        "originalFilename".to_string(),
        Value::String(original_filename.to_string()),
    );
    metadata.insert("size".to_string(), Value::from(size));
    metadata.insert("lastModified".to_string(), Value::String(to_rfc3339(now)));
    metadata
}

/// Interprets a decoded `metadata` column. `NULL` and non-object values read
/// as an empty map.
pub(crate) fn from_column(value: Option<Value>) -> Metadata {
    match value {
        Some(Value::Object(map)) => map,
        Some(Value::String(text)) => match serde_json::from_str(&text) {
            Ok(Value::Object(map)) => map,
            _ => Metadata::new(),
        },
        _ => Metadata::new(),
    }
}
