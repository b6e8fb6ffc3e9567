//! Key case conversions
//!
//! Converts between the server's snake_case keys and the domain model's
//! camelCase keys. All functions here are pure and total.

use serde_json::{Map, Value};

/// Convert a snake_case identifier to camelCase.
///
/// Identifiers without underscores pass through unchanged, which makes the
/// conversion idempotent: `to_camel_case(to_camel_case(s)) == to_camel_case(s)`.
pub fn to_camel_case(s: &str) -> String {
    if !s.contains('_') {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut first = true;
    for segment in s.split('_').filter(|seg| !seg.is_empty()) {
        if first {
            out.push_str(segment);
            first = false;
        } else {
            let mut chars = segment.chars();
            if let Some(head) = chars.next() {
                out.extend(head.to_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }
    out
}

/// Convert a camelCase identifier to snake_case.
///
/// Identifiers without uppercase letters pass through unchanged.
pub fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        if c.is_uppercase() {
            out.push('_');
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Recursively convert every object key in a JSON value to camelCase.
///
/// Array elements and non-object scalars are untouched except for nested
/// objects within them. Keys already in camelCase stay as they are, so the
/// normalization is idempotent.
pub fn camelize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, inner) in map {
                out.insert(to_camel_case(&key), camelize_keys(inner));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(camelize_keys).collect()),
        other => other,
    }
}
