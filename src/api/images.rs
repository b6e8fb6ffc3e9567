//! Image endpoints

use crate::client::{api_get, api_request, ConnectionConfig};
use crate::error::{Error, Result};
use crate::models::Image;
use crate::options::{GetImageOptions, SearchOptions};
use crate::stream::{cursor_stream, Cursor, Page};
use futures::Stream;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// The fields an image search can sort on.
///
/// Every variant maps to a field of [`Image`], which is what lets the cursor
/// stream resume from the last item of a page regardless of the chosen sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSortField {
    FirstSeenAt,
    Id,
    UpdatedAt,
    AspectRatio,
    Faves,
    Upvotes,
    Downvotes,
    Score,
    WilsonScore,
    Width,
    Height,
    CommentCount,
    TagCount,
    Size,
    Duration,
}

impl ImageSortField {
    /// The domain-cased identifier carried by `SearchOptions::sort_field`
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstSeenAt => "firstSeenAt",
            Self::Id => "id",
            Self::UpdatedAt => "updatedAt",
            Self::AspectRatio => "aspectRatio",
            Self::Faves => "faves",
            Self::Upvotes => "upvotes",
            Self::Downvotes => "downvotes",
            Self::Score => "score",
            Self::WilsonScore => "wilsonScore",
            Self::Width => "width",
            Self::Height => "height",
            Self::CommentCount => "commentCount",
            Self::TagCount => "tagCount",
            Self::Size => "size",
            Self::Duration => "duration",
        }
    }

    /// Read this field's value off an image, for cursor resumption
    pub fn cursor_of(self, image: &Image) -> Cursor {
        match self {
            Self::FirstSeenAt => Cursor::from(image.first_seen_at),
            Self::Id => Cursor::from(image.id),
            Self::UpdatedAt => Cursor::from(image.updated_at),
            Self::AspectRatio => Cursor::from(image.aspect_ratio),
            Self::Faves => Cursor::from(image.faves),
            Self::Upvotes => Cursor::from(image.upvotes),
            Self::Downvotes => Cursor::from(image.downvotes),
            Self::Score => Cursor::from(image.score),
            Self::WilsonScore => Cursor::from(image.wilson_score),
            Self::Width => Cursor::from(image.width),
            Self::Height => Cursor::from(image.height),
            Self::CommentCount => Cursor::from(image.comment_count),
            Self::TagCount => Cursor::from(image.tag_count),
            Self::Size => Cursor::from(image.size),
            Self::Duration => Cursor::from(image.duration),
        }
    }
}

impl fmt::Display for ImageSortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ImageSortField> for String {
    fn from(field: ImageSortField) -> Self {
        field.as_str().to_string()
    }
}

impl FromStr for ImageSortField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "firstSeenAt" => Ok(Self::FirstSeenAt),
            "id" => Ok(Self::Id),
            "updatedAt" => Ok(Self::UpdatedAt),
            "aspectRatio" => Ok(Self::AspectRatio),
            "faves" => Ok(Self::Faves),
            "upvotes" => Ok(Self::Upvotes),
            "downvotes" => Ok(Self::Downvotes),
            "score" => Ok(Self::Score),
            "wilsonScore" => Ok(Self::WilsonScore),
            "width" => Ok(Self::Width),
            "height" => Ok(Self::Height),
            "commentCount" => Ok(Self::CommentCount),
            "tagCount" => Ok(Self::TagCount),
            "size" => Ok(Self::Size),
            "duration" => Ok(Self::Duration),
            other => Err(Error::invalid_options(
                "sortField",
                format!("unknown image sort field '{other}'"),
            )),
        }
    }
}

/// One page of image search results
#[derive(Debug, Clone, Deserialize)]
pub struct ImageCollection {
    /// Advisory total number of results
    pub total: u64,
    /// The images of this page
    pub images: Vec<Image>,
}

impl From<ImageCollection> for Page<Image> {
    fn from(collection: ImageCollection) -> Self {
        Page::new(collection.total, collection.images)
    }
}

#[derive(Debug, Deserialize)]
struct SingleImage {
    image: Image,
}

/// Get a single image by its ID.
pub async fn get_image(
    config: &ConnectionConfig,
    id: u64,
    options: Option<&GetImageOptions>,
) -> Result<Image> {
    let response: SingleImage = api_request(config, &format!("images/{id}"), options).await?;
    Ok(response.image)
}

/// Get the current featured image.
pub async fn get_featured_image(config: &ConnectionConfig) -> Result<Image> {
    let response: SingleImage = api_get(config, "images/featured").await?;
    Ok(response.image)
}

/// Execute the image search query defined by the options and return one page
/// of results.
pub async fn search_images(
    config: &ConnectionConfig,
    options: &SearchOptions,
) -> Result<ImageCollection> {
    options.validate()?;
    api_request(config, "search/images", Some(options)).await
}

/// Stream the results of an image search.
///
/// Uses cursor pagination on the requested sort field (default `id`,
/// ascending), so the stream stays correct while images are being uploaded
/// or deleted concurrently. An unrecognized sort field name is rejected
/// before any request is sent. `limit` is a soft maximum: up to
/// `per_page - 1` extra items may be yielded past it.
pub fn stream_search_images(
    config: &ConnectionConfig,
    options: &SearchOptions,
    limit: Option<u64>,
) -> Result<impl Stream<Item = Result<Image>>> {
    let sort_field = match options.sort_field.as_deref() {
        Some(name) => name.parse::<ImageSortField>()?,
        None => ImageSortField::Id,
    };
    let direction = options.sort_direction.unwrap_or_default();

    Ok(cursor_stream(
        config.clone(),
        |config: ConnectionConfig, options: SearchOptions| async move {
            search_images(&config, &options).await.map(Page::from)
        },
        options.clone(),
        sort_field.as_str(),
        direction,
        limit,
        move |image: &Image| sort_field.cursor_of(image),
    ))
}
