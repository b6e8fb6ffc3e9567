//! Wire format reconciliation
//!
//! The server speaks snake_case JSON; the domain model speaks camelCase.
//! This module is the single place where the two meet.
//!
//! # Overview
//!
//! The wire module provides:
//! - `case` - key case conversions and recursive key normalization
//! - `query` - URL query encoding of request options
//! - `validate` - normalize-then-deserialize response validation
//!
//! The pipeline is an explicit two-step composition: normalize keys first,
//! validate shape second. No other module may assume a particular casing.

mod case;
mod query;
mod validate;

pub use case::{camelize_keys, to_camel_case, to_snake_case};
pub use query::encode;
pub use validate::from_wire;
