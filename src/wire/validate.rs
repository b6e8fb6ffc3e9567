//! Response validation
//!
//! Normalizes wire keys, then structurally validates the payload against the
//! requested type. This is the only place a raw server payload becomes a
//! domain value.

use super::case::camelize_keys;
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Validate a raw server payload against the domain type `T`.
///
/// Keys are normalized to camelCase first, so `T` only ever sees domain
/// casing. A payload that does not conform to `T` fails with
/// [`Error::Shape`], carrying the JSON path of the offending key.
pub fn from_wire<T: DeserializeOwned>(raw: Value) -> Result<T> {
    let normalized = camelize_keys(raw);
    serde_path_to_error::deserialize(normalized).map_err(|err| Error::Shape {
        path: err.path().to_string(),
        message: err.inner().to_string(),
    })
}
