//! Forum, topic and post models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A discussion forum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forum {
    /// The forum's name.
    pub name: String,
    /// The forum's short name, used to identify it.
    pub short_name: String,
    /// The forum's description.
    pub description: String,
    /// The number of topics in the forum.
    pub topic_count: u32,
    /// The number of posts in the forum.
    pub post_count: u32,
}

/// A topic within a forum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    /// The topic's slug, used to identify it.
    pub slug: String,
    /// The topic's title.
    pub title: String,
    /// The number of posts in the topic.
    pub post_count: u32,
    /// The number of views the topic has received.
    pub view_count: u32,
    /// Whether the topic is sticky.
    pub sticky: bool,
    /// The time, in UTC, when the last reply was made.
    pub last_replied_to_at: DateTime<Utc>,
    /// Whether the topic is locked.
    pub locked: bool,
    /// The ID of the user who made the topic. `None` if posted anonymously.
    pub user_id: Option<u64>,
    /// The name of the user who made the topic.
    pub author: String,
}

/// A post within a forum topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// The post's author.
    pub author: String,
    /// The URL of the author's avatar. May be a CDN path or a data: URI.
    pub avatar: String,
    /// The post's text.
    pub body: String,
    /// The creation time, in UTC, of the post.
    pub created_at: DateTime<Utc>,
    /// The edit reason for this post, if any.
    pub edit_reason: Option<String>,
    /// The time, in UTC, this post was last edited at. `None` if never
    /// edited.
    pub edited_at: Option<DateTime<Utc>>,
    /// The post's ID, used to identify it.
    pub id: u64,
    /// The time, in UTC, the post was last updated at.
    pub updated_at: Option<DateTime<Utc>>,
    /// The ID of the user the post belongs to, if any.
    pub user_id: Option<u64>,
}
