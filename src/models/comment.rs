//! The comment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment on an image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// The comment's author.
    pub author: String,
    /// The URL of the author's avatar. May be a CDN path or a data: URI.
    pub avatar: String,
    /// The comment text.
    pub body: String,
    /// The creation time, in UTC, of the comment.
    pub created_at: DateTime<Utc>,
    /// The edit reason for this comment, if any.
    pub edit_reason: Option<String>,
    /// The time, in UTC, this comment was last edited at. `None` if never
    /// edited.
    pub edited_at: Option<DateTime<Utc>>,
    /// The comment's ID.
    pub id: u64,
    /// The ID of the image the comment belongs to.
    pub image_id: u64,
    /// The time, in UTC, the comment was last updated at.
    pub updated_at: DateTime<Utc>,
    /// The ID of the user the comment belongs to, if any.
    pub user_id: Option<u64>,
}
