//! The image model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// MIME types the server stores images under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageMimeType {
    #[serde(rename = "image/gif")]
    Gif,
    #[serde(rename = "image/jpeg")]
    Jpeg,
    #[serde(rename = "image/png")]
    Png,
    #[serde(rename = "image/svg+xml")]
    Svg,
    #[serde(rename = "video/webm")]
    Webm,
}

/// File extensions images are served with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Gif,
    Jpg,
    Jpeg,
    Png,
    Svg,
    Webm,
}

/// Corner intensity data used internally for duplicate detection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageIntensities {
    pub nw: f64,
    pub ne: f64,
    pub sw: f64,
    pub se: f64,
}

/// URLs of the server-generated renditions of an image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRepresentations {
    pub full: String,
    pub large: String,
    pub medium: String,
    pub small: String,
    pub tall: String,
    pub thumb: String,
    pub thumb_small: String,
    pub thumb_tiny: String,
}

/// An uploaded image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Whether the image is animated.
    pub animated: bool,
    /// The image's width divided by its height.
    pub aspect_ratio: f64,
    /// The number of comments made on the image.
    pub comment_count: u32,
    /// The creation time, in UTC, of the image.
    pub created_at: DateTime<Utc>,
    /// The hide reason for the image. Only set on images deleted for a rule
    /// violation.
    pub deletion_reason: Option<String>,
    /// The image's description.
    pub description: String,
    /// The number of downvotes the image has.
    pub downvotes: u32,
    /// The ID of the target image. Only set on images merged into another
    /// image.
    pub duplicate_of: Option<u64>,
    /// The number of seconds the image lasts, if animated, otherwise .04.
    pub duration: f64,
    /// The number of faves the image has.
    pub faves: u32,
    /// The time, in UTC, the image was first seen (before any duplicate
    /// merging).
    pub first_seen_at: DateTime<Utc>,
    /// The file extension of the image.
    pub format: ImageFormat,
    /// The image's height, in pixels.
    pub height: u32,
    /// Whether the image is hidden. An image is hidden if it is merged or
    /// deleted for a rule violation.
    pub hidden_from_users: bool,
    /// The image's ID.
    pub id: u64,
    /// Internal intensity data for deduplication. `None` if intensities have
    /// not yet been generated.
    pub intensities: Option<ImageIntensities>,
    /// The MIME type of this image.
    pub mime_type: ImageMimeType,
    /// The filename that the image was uploaded with.
    pub name: String,
    /// The SHA512 hash of the image as it was originally uploaded.
    pub orig_sha512_hash: Option<String>,
    /// Whether the image has finished optimization.
    pub processed: bool,
    /// A mapping of representation names to their respective URLs.
    pub representations: ImageRepresentations,
    /// The image's number of upvotes minus the image's number of downvotes.
    pub score: i64,
    /// The SHA512 hash of this image after it has been processed.
    pub sha512_hash: String,
    /// The number of bytes the image's file contains.
    pub size: u64,
    /// All source URLs provided for the image; may be empty.
    pub source_urls: Vec<String>,
    /// Whether the image is hit by the current filter.
    pub spoilered: bool,
    /// The number of tags present on the image.
    pub tag_count: u32,
    /// The IDs of the tags the image contains.
    pub tag_ids: Vec<u64>,
    /// The names of the tags the image contains.
    pub tags: Vec<String>,
    /// Whether the image has finished thumbnail generation. Do not load
    /// `view_url` or representations while this is false.
    pub thumbnails_generated: bool,
    /// The time, in UTC, the image was last updated.
    pub updated_at: DateTime<Utc>,
    /// The image's uploader.
    pub uploader: String,
    /// The ID of the image's uploader. `None` if uploaded anonymously.
    pub uploader_id: Option<u64>,
    /// The image's number of upvotes.
    pub upvotes: u32,
    /// The image's view URL, including tags.
    pub view_url: String,
    /// The image's width, in pixels.
    pub width: u32,
    /// The lower bound of the Wilson score interval for the image, based on
    /// its upvotes and downvotes.
    pub wilson_score: f64,
}
