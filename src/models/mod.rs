//! Entity models
//!
//! Typed representations of the entities the API serves. All models
//! deserialize from the domain (camelCase) casing produced by the wire
//! layer's key normalization; raw server payloads never reach them directly.

mod comment;
mod filter;
mod forum;
mod gallery;
mod image;
mod tag;
mod user;

pub use comment::Comment;
pub use filter::Filter;
pub use forum::{Forum, Post, Topic};
pub use gallery::Gallery;
pub use image::{Image, ImageFormat, ImageIntensities, ImageMimeType, ImageRepresentations};
pub use tag::{Tag, TagCategory};
pub use user::{Award, User, UserLink};
