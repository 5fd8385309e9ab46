//! Record classification
//!
//! Turns one raw NDJSON line into a [`Schema`] describing the fields it
//! carries. Classification is total: malformed input yields an empty
//! schema and a diagnostic, never an error.

use super::types::{ScalarType, Schema};
use serde_json::Value;
use tracing::warn;

/// Longest fragment of a bad record quoted in diagnostics.
const EXCERPT_LEN: usize = 100;

/// Classify one raw record into a field -> type mapping.
///
/// The record must parse as a JSON object. A line that fails to parse, or
/// parses to a non-object (array, scalar, null), contributes no fields;
/// it is logged with a truncated excerpt and skipped. This keeps a single
/// corrupt line from aborting a whole run.
pub fn classify_record(raw: &str) -> Schema {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            warn!("could not parse record '{}': {err}", excerpt(raw));
            return Schema::new();
        }
    };

    let Value::Object(map) = value else {
        warn!("record is not a JSON object: '{}'", excerpt(raw));
        return Schema::new();
    };

    let mut schema = Schema::new();
    for (field, value) in &map {
        schema.observe(field.clone(), ScalarType::of_value(value));
    }
    schema
}

/// Truncate a record for log output, respecting char boundaries.
fn excerpt(raw: &str) -> String {
    if raw.chars().count() <= EXCERPT_LEN {
        raw.to_string()
    } else {
        raw.chars().take(EXCERPT_LEN).collect()
    }
}
