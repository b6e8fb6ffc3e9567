//! The tag model

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Category classes a tag may belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TagCategory {
    Character,
    ContentFanmade,
    ContentOfficial,
    Error,
    Oc,
    Origin,
    Rating,
    Species,
    Spoiler,
}

/// A tag attachable to images
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// The slug of the tag this tag is aliased to, if any.
    pub aliased_tag: Option<String>,
    /// The slugs of the tags aliased to this tag.
    pub aliases: Vec<String>,
    /// The category class of the tag.
    pub category: Option<TagCategory>,
    /// The long description for the tag.
    pub description: String,
    /// DNP entries claimed on the tag.
    pub dnp_entries: Vec<Value>,
    /// The tag's ID.
    pub id: u64,
    /// The image count of the tag.
    pub images: u64,
    /// The slugs of the tags this tag is implied by.
    pub implied_by_tags: Vec<String>,
    /// The slugs of the tags this tag implies.
    pub implied_tags: Vec<String>,
    /// The name of the tag.
    pub name: String,
    /// The name of the tag in its namespace.
    pub name_in_namespace: String,
    /// The namespace of the tag.
    pub namespace: Option<String>,
    /// The short description for the tag.
    pub short_description: Option<String>,
    /// The slug for the tag.
    pub slug: String,
    /// The spoiler image for the tag.
    pub spoiler_image_uri: Option<String>,
}
