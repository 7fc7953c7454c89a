//! Response envelope normalization.
//!
//! The Endpoint Manager API wraps result payloads in several envelope shapes
//! depending on endpoint and API vintage: `{"$I": {"data": [...]}}`,
//! `{"$D": [...]}`, `{"data": [...]}`, or a bare array. [`normalize`]
//! reduces all of them to one of two cases.

use serde_json::Value;

/// A response payload with its envelope stripped.
#[derive(Clone, Debug, PartialEq)]
pub enum Normalized {
    /// An ordered sequence of records.
    Records(Vec<Value>),
    /// A single record that matched none of the sequence envelopes.
    Single(Value),
}

impl Normalized {
    /// Number of records; a single record counts as one.
    pub fn len(&self) -> usize {
        match self {
            Normalized::Records(records) => records.len(),
            Normalized::Single(_) => 1,
        }
    }

    /// True only for an empty record sequence; a single record is never empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, Normalized::Records(records) if records.is_empty())
    }
}

/// Strips the envelope from a raw API response.
///
/// Shapes are tried in a fixed priority order. The nested `$I.data` form
/// wins over a top-level `data` because some responses carry both, and the
/// nested one is authoritative.
pub fn normalize(mut raw: Value) -> Normalized {
    for pointer in ["/$I/data", "/$D", "/data"] {
        if let Some(records) = take_array(&mut raw, pointer) {
            return Normalized::Records(records);
        }
    }
    if let Value::Array(records) = raw {
        return Normalized::Records(records);
    }
    Normalized::Single(raw)
}

/// Takes the array at `pointer`, leaving non-array values untouched so later
/// shape checks still see them.
fn take_array(raw: &mut Value, pointer: &str) -> Option<Vec<Value>> {
    match raw.pointer_mut(pointer)? {
        Value::Array(records) => Some(std::mem::take(records)),
        _ => None,
    }
}

/// Extracts a human-readable reason from a structured `$E` error body, as
/// `"<message> (code <error_code>)"`.
pub(crate) fn error_reason(body: &str) -> Option<String> {
    let parsed: Value = serde_json::from_str(body).ok()?;
    let envelope = parsed.get("$E")?;
    let message = envelope.get("message")?.as_str()?.to_string();
    Some(match envelope.get("error_code").and_then(Value::as_i64) {
        Some(code) => format!("{} (code {})", message, code),
        None => message,
    })
}
