//! Comment endpoints

use crate::client::{api_get, api_request, ConnectionConfig};
use crate::error::Result;
use crate::models::Comment;
use crate::options::SearchOptions;
use crate::stream::{paged_stream, Page};
use futures::Stream;
use serde::Deserialize;

/// One page of comment search results
#[derive(Debug, Clone, Deserialize)]
pub struct CommentCollection {
    /// Advisory total number of results
    pub total: u64,
    /// The comments of this page
    pub comments: Vec<Comment>,
}

impl From<CommentCollection> for Page<Comment> {
    fn from(collection: CommentCollection) -> Self {
        Page::new(collection.total, collection.comments)
    }
}

#[derive(Debug, Deserialize)]
struct SingleComment {
    comment: Comment,
}

/// Get a single comment by its ID.
pub async fn get_comment(config: &ConnectionConfig, id: u64) -> Result<Comment> {
    let response: SingleComment = api_get(config, &format!("comments/{id}")).await?;
    Ok(response.comment)
}

/// Execute the comment search query defined by the options and return one
/// page of results.
pub async fn search_comments(
    config: &ConnectionConfig,
    options: &SearchOptions,
) -> Result<CommentCollection> {
    options.validate()?;
    api_request(config, "search/comments", Some(options)).await
}

/// Retrieve the comments on the image with the given ID.
///
/// Internally this is a comment search with an `image_id:<id>` clause merged
/// into any caller-supplied query by comma conjunction.
pub async fn get_image_comments(
    config: &ConnectionConfig,
    image_id: u64,
    options: Option<&SearchOptions>,
) -> Result<CommentCollection> {
    search_comments(config, &with_image_clause(image_id, options)).await
}

fn with_image_clause(image_id: u64, options: Option<&SearchOptions>) -> SearchOptions {
    let mut options = options.cloned().unwrap_or_default();
    let clause = format!("image_id:{image_id}");
    options.q = Some(match options.q.take() {
        Some(q) => format!("{clause},{q}"),
        None => clause,
    });
    options
}

/// Stream the results of a comment search, using offset pagination.
pub fn stream_search_comments(
    config: &ConnectionConfig,
    options: &SearchOptions,
    limit: Option<u64>,
) -> impl Stream<Item = Result<Comment>> {
    paged_stream(
        config.clone(),
        |config: ConnectionConfig, options: SearchOptions| async move {
            search_comments(&config, &options).await.map(Page::from)
        },
        options.clone(),
        limit,
    )
}

/// Stream the comments on the image with the given ID.
pub fn stream_image_comments(
    config: &ConnectionConfig,
    image_id: u64,
    options: Option<&SearchOptions>,
    limit: Option<u64>,
) -> impl Stream<Item = Result<Comment>> {
    paged_stream(
        config.clone(),
        move |config: ConnectionConfig, options: SearchOptions| async move {
            get_image_comments(&config, image_id, Some(&options))
                .await
                .map(Page::from)
        },
        options.cloned().unwrap_or_default(),
        limit,
    )
}
