//! Canonical JSON bytes: the single serialization-for-hashing implementation.
//!
//! # Canonicalization rules
//!
//! 1. Object keys are sorted lexicographically (byte order).
//! 2. Compact form, no whitespace.
//! 3. Numbers must be integers. Floats are rejected so that digests never
//!    depend on float formatting.

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanonError {
    /// A JSON number was not an integer.
    #[error("non-integer number in canonical JSON: {raw}")]
    NonIntegerNumber { raw: String },
    /// `serde_json` failed to write the value.
    #[error("canonical JSON serialization failed: {detail}")]
    Serialize { detail: String },
}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number is not an `i64`/`u64`.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    let sorted = canonicalize(value)?;
    serde_json::to_vec(&sorted).map_err(|e| CanonError::Serialize {
        detail: e.to_string(),
    })
}

/// Rebuild `value` with every object's keys inserted in sorted order.
///
/// Insertion order is also iteration order when `serde_json` is built with
/// `preserve_order`, so the output is sorted under either map backend.
fn canonicalize(value: &serde_json::Value) -> Result<serde_json::Value, CanonError> {
    use serde_json::Value;

    Ok(match value {
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                Value::Number(n.clone())
            } else {
                return Err(CanonError::NonIntegerNumber { raw: n.to_string() });
            }
        }
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(canonicalize)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut out = serde_json::Map::new();
            for key in keys {
                out.insert(key.clone(), canonicalize(&map[key])?);
            }
            Value::Object(out)
        }
        Value::Null | Value::Bool(_) | Value::String(_) => value.clone(),
    })
}
