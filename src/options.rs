//! Request options for paginated and single-entity endpoints
//!
//! Options are plain structs with chained builder methods. They serialize to
//! camelCase (the domain casing); the wire layer snake-cases them on the way
//! out.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Largest `per_page` the server accepts.
pub const MAX_PER_PAGE: u32 = 50;

/// `per_page` applied by the server when none is sent.
pub const DEFAULT_PER_PAGE: u32 = 25;

/// Sort direction for search endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order (smallest first)
    #[default]
    Asc,
    /// Descending order (largest first)
    Desc,
}

/// Options accepted by every paginated search endpoint
///
/// `page` is meaningless in cursor mode and is overwritten by the offset
/// stream adapter; set it only for one-shot page fetches. `filter_id` is
/// honored by image search and ignored elsewhere.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    /// Optional authentication token. If omitted, no user is authenticated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Current page of the response. Empty values default to the first page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Number of results per page, up to a limit of 50. The server default
    /// is 25.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,

    /// The current search query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,

    /// The sort field, as a domain-cased identifier (e.g. `wilsonScore`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_field: Option<String>,

    /// The sort direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<SortDirection>,

    /// Overrides the current filter for this request, if the authenticated
    /// user can access the given filter ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_id: Option<u64>,
}

impl SearchOptions {
    /// Create empty options (server defaults apply)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the authentication key
    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the page number
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the number of results per page
    #[must_use]
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Set the search query
    #[must_use]
    pub fn query(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    /// Set the sort field (domain-cased, e.g. `wilsonScore`)
    #[must_use]
    pub fn sort_field(mut self, field: impl Into<String>) -> Self {
        self.sort_field = Some(field.into());
        self
    }

    /// Set the sort direction
    #[must_use]
    pub fn sort_direction(mut self, direction: SortDirection) -> Self {
        self.sort_direction = Some(direction);
        self
    }

    /// Set the filter override (image search only)
    #[must_use]
    pub fn filter_id(mut self, filter_id: u64) -> Self {
        self.filter_id = Some(filter_id);
        self
    }

    /// Check the options against the server's documented bounds.
    ///
    /// Called by every endpoint function before any request is sent, so a
    /// bad value never costs a network round-trip.
    pub fn validate(&self) -> Result<()> {
        if let Some(per_page) = self.per_page {
            if !(1..=MAX_PER_PAGE).contains(&per_page) {
                return Err(Error::invalid_options(
                    "perPage",
                    format!("must be between 1 and {MAX_PER_PAGE}, got {per_page}"),
                ));
            }
        }
        Ok(())
    }
}

/// Options for fetching a single image
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetImageOptions {
    /// Optional authentication token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Overrides the current filter for this request. Primarily useful for
    /// unauthenticated API access.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_id: Option<u64>,
}

impl GetImageOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the authentication key
    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the filter override
    #[must_use]
    pub fn filter_id(mut self, filter_id: u64) -> Self {
        self.filter_id = Some(filter_id);
        self
    }
}
