//! URL query encoding of request options
//!
//! Serializes an options value into `(key, value)` query pairs, translating
//! camelCase domain keys into snake_case wire keys.

use super::case::to_snake_case;
use crate::error::Result;
use serde::Serialize;
use serde_json::Value;

/// The one option whose *value* is also a domain-cased identifier.
///
/// Sort fields are camelCase in the domain model (e.g. `wilsonScore`) but the
/// server only understands their snake_case spelling (`wilson_score`), so the
/// encoder snake-cases the value as well as the key for this option alone.
const SORT_FIELD_KEY: &str = "sortField";

/// Encode an options value into URL query pairs.
///
/// Every key is snake-cased. Values are stringified as-is (strings unquoted,
/// scalars via their display form), except the sort-field value which is
/// snake-cased too. Pair ordering is not significant to the server.
pub fn encode(options: &impl Serialize) -> Result<Vec<(String, String)>> {
    let value = serde_json::to_value(options)?;

    let Value::Object(map) = value else {
        return Ok(Vec::new());
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, inner) in map {
        if inner.is_null() {
            continue;
        }
        let rendered = if key == SORT_FIELD_KEY {
            to_snake_case(&stringify(&inner))
        } else {
            stringify(&inner)
        };
        pairs.push((to_snake_case(&key), rendered));
    }
    Ok(pairs)
}

/// Render a JSON scalar the way it should appear in a query string.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
