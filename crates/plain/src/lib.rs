//! Plain-value serialization for the persistence-to-presentation boundary.
//!
//! Repositories hand back entities carrying `chrono` timestamps and nested
//! relations. Before any of that crosses to a client it is reduced here to a
//! plain JSON tree: primitives, sequences and string-keyed maps only.
//! Strings pass through byte-for-byte; date/time fields render in the fixed
//! `YYYY-MM-DDTHH:mm:ss.sssZ` form via the [`timestamp`] serde module, which
//! entity types attach with `#[serde(with = "plain::timestamp")]`. Apply
//! [`to_plain`] at every such boundary instead of re-deriving the conversion
//! per call site.
//!
//! The transformation is idempotent: the output contains nothing left to
//! transform.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Recursion limit for nested values. Graphs nesting deeper than this fail
/// instead of hanging or blowing the stack.
const MAX_DEPTH: usize = 128;

#[derive(Debug, Error)]
pub enum PlainError {
    #[error("value is not serializable: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("value nests deeper than {MAX_DEPTH} levels")]
    DepthExceeded,
}

/// Serde `with` module rendering a `DateTime<Utc>` in the fixed
/// `YYYY-MM-DDTHH:mm:ss.sssZ` form. Chrono's default rendering varies its
/// precision with the value; this pins every timestamp field to
/// milliseconds in UTC.
pub mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&text)
            .map(|instant| instant.with_timezone(&Utc))
            .map_err(D::Error::custom)
    }
}

/// Reduce a serializable value to a plain JSON tree.
///
/// Serde already strips a value down to its own data fields; this pass
/// bounds the nesting depth and guarantees the result is built from
/// primitives, sequences and string-keyed maps only. String values are
/// never reinterpreted, so raw scraped text (including timestamp-looking
/// strings) survives unchanged. The input is never mutated.
pub fn to_plain<T: Serialize>(value: &T) -> Result<Value, PlainError> {
    let raw = serde_json::to_value(value)?;
    check_depth(&raw, 0)?;
    Ok(raw)
}

fn check_depth(value: &Value, depth: usize) -> Result<(), PlainError> {
    if depth > MAX_DEPTH {
        return Err(PlainError::DepthExceeded);
    }

    match value {
        Value::Array(items) => {
            for item in items {
                check_depth(item, depth + 1)?;
            }
        }
        Value::Object(entries) => {
            // Key order is preserved (serde_json's preserve_order map)
            for entry in entries.values() {
                check_depth(entry, depth + 1)?;
            }
        }
        _ => {}
    }

    Ok(())
}
