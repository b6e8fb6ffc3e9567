//! Stream adapter types
//!
//! Defines the page shape, the fetcher contract, and the cursor value the
//! adapters operate on.

use crate::client::ConnectionConfig;
use crate::error::Result;
use crate::options::SearchOptions;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;
use std::future::Future;

/// One fetched page of results, decoupled from the resource-specific
/// collection key ("images", "tags", ...).
///
/// `total` is advisory: it may be approximate or stale under concurrent
/// writes, and the adapters never consult it. An empty `items` vector is the
/// only reliable exhaustion signal.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// Advisory total count reported by the server
    pub total: u64,
    /// The items of this page, in server order
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Create a page
    pub fn new(total: u64, items: Vec<T>) -> Self {
        Self { total, items }
    }

    /// Number of items in this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether this page signals exhaustion
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Contract between the stream adapters and the per-resource endpoint
/// functions: fetch one bounded page of results for the given options.
///
/// Implementations must return `Err` (never a silently truncated page) on
/// HTTP-level or shape-validation failure. A blanket implementation covers
/// any `FnMut(ConnectionConfig, SearchOptions) -> Future` closure, which is
/// how the per-resource streaming wrappers bind their endpoint functions.
pub trait PageFetcher<T> {
    /// Future returned by [`PageFetcher::fetch_page`]
    type Fut: Future<Output = Result<Page<T>>>;

    /// Fetch a single page
    fn fetch_page(&mut self, config: ConnectionConfig, options: SearchOptions) -> Self::Fut;
}

impl<T, F, Fut> PageFetcher<T> for F
where
    F: FnMut(ConnectionConfig, SearchOptions) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    type Fut = Fut;

    fn fetch_page(&mut self, config: ConnectionConfig, options: SearchOptions) -> Self::Fut {
        self(config, options)
    }
}

/// The value of a designated sortable field, taken from the last item of the
/// most recently fetched page and used to request the next page by range.
///
/// `None` before the first fetch, updated after every non-empty page, never
/// reset mid-stream. The `Display` form is the wire rendering used inside
/// range predicates (`id.gt:500`).
#[derive(Debug, Clone, PartialEq)]
pub enum Cursor {
    /// Integer-valued sort fields (ids, counts, sizes)
    Int(i64),
    /// Float-valued sort fields (scores, aspect ratios, durations)
    Float(f64),
    /// Text-valued sort fields (RFC 3339 timestamps)
    Text(String),
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cursor::Int(v) => write!(f, "{v}"),
            Cursor::Float(v) => write!(f, "{v}"),
            Cursor::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for Cursor {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for Cursor {
    fn from(value: u64) -> Self {
        Self::Int(value as i64)
    }
}

impl From<u32> for Cursor {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Cursor {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for Cursor {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Cursor {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<DateTime<Utc>> for Cursor {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Text(value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}
