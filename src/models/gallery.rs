//! The gallery model

use serde::{Deserialize, Serialize};

/// A user-curated gallery of images
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gallery {
    /// The gallery's description.
    pub description: String,
    /// The gallery's ID.
    pub id: u64,
    /// The gallery's spoiler warning.
    pub spoiler_warning: String,
    /// The ID of the cover image for the gallery.
    pub thumbnail_id: u64,
    /// The gallery's title.
    pub title: String,
    /// The name of the gallery's creator.
    pub user: String,
    /// The ID of the gallery's creator.
    pub user_id: u64,
}
