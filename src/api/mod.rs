//! Per-resource endpoint functions
//!
//! One thin async function per API operation, plus a streaming wrapper per
//! collection endpoint. Every function takes a
//! [`ConnectionConfig`](crate::ConnectionConfig) explicitly and validates its
//! options before any request is sent.
//!
//! Image search streams by cursor (image search supports server-side range
//! predicates on every sort field); the remaining collections stream by page
//! offset.

pub mod comments;
pub mod filters;
pub mod forums;
pub mod galleries;
pub mod images;
pub mod tags;
pub mod users;

pub use comments::{
    get_comment, get_image_comments, search_comments, stream_image_comments,
    stream_search_comments, CommentCollection,
};
pub use filters::{get_filter, get_system_filters, get_user_filters, FilterCollection};
pub use forums::{
    get_forum, get_forum_topic, get_forum_topic_posts, get_forum_topics, get_forums, search_posts,
    stream_forum_topic_posts, stream_forum_topics, stream_forums, stream_search_posts,
    ForumCollection, PostCollection, TopicCollection,
};
pub use galleries::{search_galleries, stream_search_galleries, GalleryCollection};
pub use images::{
    get_featured_image, get_image, search_images, stream_search_images, ImageCollection,
    ImageSortField,
};
pub use tags::{get_tag, search_tags, stream_search_tags, TagCollection};
pub use users::get_user;
