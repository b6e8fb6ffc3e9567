//! Forum, topic and post endpoints

use crate::client::{api_get, api_request, ConnectionConfig};
use crate::error::Result;
use crate::models::{Forum, Post, Topic};
use crate::options::SearchOptions;
use crate::stream::{paged_stream, Page};
use futures::Stream;
use serde::Deserialize;

/// One page of forums
#[derive(Debug, Clone, Deserialize)]
pub struct ForumCollection {
    /// Advisory total number of results
    pub total: u64,
    /// The forums of this page
    pub forums: Vec<Forum>,
}

impl From<ForumCollection> for Page<Forum> {
    fn from(collection: ForumCollection) -> Self {
        Page::new(collection.total, collection.forums)
    }
}

/// One page of topics
#[derive(Debug, Clone, Deserialize)]
pub struct TopicCollection {
    /// Advisory total number of results
    pub total: u64,
    /// The topics of this page
    pub topics: Vec<Topic>,
}

impl From<TopicCollection> for Page<Topic> {
    fn from(collection: TopicCollection) -> Self {
        Page::new(collection.total, collection.topics)
    }
}

/// One page of posts
#[derive(Debug, Clone, Deserialize)]
pub struct PostCollection {
    /// Advisory total number of results
    pub total: u64,
    /// The posts of this page
    pub posts: Vec<Post>,
}

impl From<PostCollection> for Page<Post> {
    fn from(collection: PostCollection) -> Self {
        Page::new(collection.total, collection.posts)
    }
}

#[derive(Debug, Deserialize)]
struct SingleForum {
    forum: Forum,
}

#[derive(Debug, Deserialize)]
struct SingleTopic {
    topic: Topic,
}

/// Get one page of the forum list.
pub async fn get_forums(config: &ConnectionConfig) -> Result<ForumCollection> {
    api_get(config, "forums").await
}

/// Get a single forum by its short name.
pub async fn get_forum(config: &ConnectionConfig, short_name: &str) -> Result<Forum> {
    let response: SingleForum = api_get(config, &format!("forums/{short_name}")).await?;
    Ok(response.forum)
}

/// Get one page of the topics in a forum.
pub async fn get_forum_topics(
    config: &ConnectionConfig,
    short_name: &str,
    options: Option<&SearchOptions>,
) -> Result<TopicCollection> {
    if let Some(options) = options {
        options.validate()?;
    }
    api_request(config, &format!("forums/{short_name}/topics"), options).await
}

/// Get a single topic in a forum by its slug.
pub async fn get_forum_topic(
    config: &ConnectionConfig,
    short_name: &str,
    topic_slug: &str,
) -> Result<Topic> {
    let response: SingleTopic =
        api_get(config, &format!("forums/{short_name}/topics/{topic_slug}")).await?;
    Ok(response.topic)
}

/// Get one page of the posts in a forum topic.
pub async fn get_forum_topic_posts(
    config: &ConnectionConfig,
    short_name: &str,
    topic_slug: &str,
    options: Option<&SearchOptions>,
) -> Result<PostCollection> {
    if let Some(options) = options {
        options.validate()?;
    }
    api_request(
        config,
        &format!("forums/{short_name}/topics/{topic_slug}/posts"),
        options,
    )
    .await
}

/// Execute the post search query defined by the options and return one page
/// of results.
pub async fn search_posts(
    config: &ConnectionConfig,
    options: &SearchOptions,
) -> Result<PostCollection> {
    options.validate()?;
    api_request(config, "search/posts", Some(options)).await
}

/// Stream the forum list, using offset pagination.
pub fn stream_forums(
    config: &ConnectionConfig,
    limit: Option<u64>,
) -> impl Stream<Item = Result<Forum>> {
    paged_stream(
        config.clone(),
        |config: ConnectionConfig, options: SearchOptions| async move {
            api_request::<ForumCollection, _>(&config, "forums", Some(&options))
                .await
                .map(Page::from)
        },
        SearchOptions::new(),
        limit,
    )
}

/// Stream the topics in a forum, using offset pagination.
pub fn stream_forum_topics(
    config: &ConnectionConfig,
    short_name: &str,
    options: Option<&SearchOptions>,
    limit: Option<u64>,
) -> impl Stream<Item = Result<Topic>> {
    let short_name = short_name.to_string();
    paged_stream(
        config.clone(),
        move |config: ConnectionConfig, options: SearchOptions| {
            let short_name = short_name.clone();
            async move {
                get_forum_topics(&config, &short_name, Some(&options))
                    .await
                    .map(Page::from)
            }
        },
        options.cloned().unwrap_or_default(),
        limit,
    )
}

/// Stream the posts in a forum topic, using offset pagination.
pub fn stream_forum_topic_posts(
    config: &ConnectionConfig,
    short_name: &str,
    topic_slug: &str,
    options: Option<&SearchOptions>,
    limit: Option<u64>,
) -> impl Stream<Item = Result<Post>> {
    let short_name = short_name.to_string();
    let topic_slug = topic_slug.to_string();
    paged_stream(
        config.clone(),
        move |config: ConnectionConfig, options: SearchOptions| {
            let short_name = short_name.clone();
            let topic_slug = topic_slug.clone();
            async move {
                get_forum_topic_posts(&config, &short_name, &topic_slug, Some(&options))
                    .await
                    .map(Page::from)
            }
        },
        options.cloned().unwrap_or_default(),
        limit,
    )
}

/// Stream the results of a post search, using offset pagination.
pub fn stream_search_posts(
    config: &ConnectionConfig,
    options: &SearchOptions,
    limit: Option<u64>,
) -> impl Stream<Item = Result<Post>> {
    paged_stream(
        config.clone(),
        |config: ConnectionConfig, options: SearchOptions| async move {
            search_posts(&config, &options).await.map(Page::from)
        },
        options.clone(),
        limit,
    )
}
