//! User, user link and award models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A verified artist link registered by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLink {
    /// The ID of the user who owns this link.
    pub user_id: u64,
    /// The creation time, in UTC, of this link.
    pub created_at: DateTime<Utc>,
    /// The state of this link.
    pub state: String,
    /// The ID of an associated tag for this link. `None` if no tag is linked.
    pub tag_id: Option<u64>,
}

/// A badge awarded to a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Award {
    /// The URL of this award.
    pub image_url: String,
    /// The title of this award.
    pub title: String,
    /// The ID of the badge this award is derived from.
    pub id: u64,
    /// The label of this award.
    pub label: String,
    /// The time, in UTC, when this award was given.
    pub awarded_on: DateTime<Utc>,
}

/// A registered user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// The ID of the user.
    pub id: u64,
    /// The name of the user.
    pub name: String,
    /// The slug of the user.
    pub slug: String,
    /// The role of the user.
    pub role: String,
    /// The description (bio) of the user.
    pub description: String,
    /// The URL of the user's thumbnail. `None` if the avatar is not set.
    pub avatar_url: Option<String>,
    /// The creation time, in UTC, of the user.
    pub created_at: DateTime<Utc>,
    /// The comment count of the user.
    pub comments_count: u32,
    /// The upload count of the user.
    pub uploads_count: u32,
    /// The forum posts count of the user.
    pub posts_count: u32,
    /// The forum topics count of the user.
    pub topics_count: u32,
    /// The links the user has registered.
    pub links: Vec<UserLink>,
    /// The awards/badges of the user.
    pub awards: Vec<Award>,
}
