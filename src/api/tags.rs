//! Tag endpoints

use crate::client::{api_get, api_request, ConnectionConfig};
use crate::error::Result;
use crate::models::Tag;
use crate::options::SearchOptions;
use crate::stream::{paged_stream, Page};
use futures::Stream;
use serde::Deserialize;

/// One page of tag search results
#[derive(Debug, Clone, Deserialize)]
pub struct TagCollection {
    /// Advisory total number of results
    pub total: u64,
    /// The tags of this page
    pub tags: Vec<Tag>,
}

impl From<TagCollection> for Page<Tag> {
    fn from(collection: TagCollection) -> Self {
        Page::new(collection.total, collection.tags)
    }
}

#[derive(Debug, Deserialize)]
struct SingleTag {
    tag: Tag,
}

/// Get a single tag by its ID.
pub async fn get_tag(config: &ConnectionConfig, id: u64) -> Result<Tag> {
    let response: SingleTag = api_get(config, &format!("tags/{id}")).await?;
    Ok(response.tag)
}

/// Execute the tag search query defined by the options and return one page
/// of results.
pub async fn search_tags(
    config: &ConnectionConfig,
    options: &SearchOptions,
) -> Result<TagCollection> {
    options.validate()?;
    api_request(config, "search/tags", Some(options)).await
}

/// Stream the results of a tag search, using offset pagination.
pub fn stream_search_tags(
    config: &ConnectionConfig,
    options: &SearchOptions,
    limit: Option<u64>,
) -> impl Stream<Item = Result<Tag>> {
    paged_stream(
        config.clone(),
        |config: ConnectionConfig, options: SearchOptions| async move {
            search_tags(&config, &options).await.map(Page::from)
        },
        options.clone(),
        limit,
    )
}
