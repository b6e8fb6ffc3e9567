//! Filter endpoints

use crate::client::{api_get, ConnectionConfig};
use crate::error::{Error, Result};
use crate::models::Filter;
use serde::Deserialize;

/// A list of filters
#[derive(Debug, Clone, Deserialize)]
pub struct FilterCollection {
    /// Advisory total number of results
    pub total: u64,
    /// The filters of this page
    pub filters: Vec<Filter>,
}

#[derive(Debug, Deserialize)]
struct SingleFilter {
    filter: Filter,
}

/// Get a single filter by its ID.
pub async fn get_filter(config: &ConnectionConfig, id: u64) -> Result<Filter> {
    let response: SingleFilter = api_get(config, &format!("filters/{id}")).await?;
    Ok(response.filter)
}

/// Get the filters flagged as system filters, which are usable by anyone.
pub async fn get_system_filters(config: &ConnectionConfig) -> Result<FilterCollection> {
    api_get(config, "filters/system").await
}

/// Get the filters belonging to the currently-authenticated user.
///
/// Requires an API key on the config; fails fast without one.
pub async fn get_user_filters(config: &ConnectionConfig) -> Result<FilterCollection> {
    if config.api_key().is_none() {
        return Err(Error::invalid_options(
            "key",
            "an API key is required to list user filters",
        ));
    }
    api_get(config, "filters/user").await
}
