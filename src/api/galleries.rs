//! Gallery endpoints

use crate::client::{api_request, ConnectionConfig};
use crate::error::Result;
use crate::models::Gallery;
use crate::options::SearchOptions;
use crate::stream::{paged_stream, Page};
use futures::Stream;
use serde::Deserialize;

/// One page of gallery search results
#[derive(Debug, Clone, Deserialize)]
pub struct GalleryCollection {
    /// Advisory total number of results
    pub total: u64,
    /// The galleries of this page
    pub galleries: Vec<Gallery>,
}

impl From<GalleryCollection> for Page<Gallery> {
    fn from(collection: GalleryCollection) -> Self {
        Page::new(collection.total, collection.galleries)
    }
}

/// Execute the gallery search query defined by the options and return one
/// page of results.
pub async fn search_galleries(
    config: &ConnectionConfig,
    options: &SearchOptions,
) -> Result<GalleryCollection> {
    options.validate()?;
    api_request(config, "search/galleries", Some(options)).await
}

/// Stream the results of a gallery search, using offset pagination.
pub fn stream_search_galleries(
    config: &ConnectionConfig,
    options: &SearchOptions,
    limit: Option<u64>,
) -> impl Stream<Item = Result<Gallery>> {
    paged_stream(
        config.clone(),
        |config: ConnectionConfig, options: SearchOptions| async move {
            search_galleries(&config, &options).await.map(Page::from)
        },
        options.clone(),
        limit,
    )
}
