//! The filter model

use serde::{Deserialize, Serialize};

/// A content filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    /// The ID of the filter.
    pub id: u64,
    /// The name of the filter.
    pub name: String,
    /// The description of the filter.
    pub description: String,
    /// The ID of the user the filter belongs to. `None` for system filters.
    pub user_id: Option<u64>,
    /// The number of users employing this filter.
    pub user_count: u32,
    /// Whether this is a system filter. System filters are usable by anyone
    /// and have no `user_id`.
    pub system: bool,
    /// Whether this is a public filter. Public filters are usable by anyone.
    pub public: bool,
    /// The tag IDs this filter will spoil.
    pub spoilered_tag_ids: Vec<u64>,
    /// The complex spoiled filter.
    pub spoilered_complex: String,
    /// The tag IDs this filter will hide.
    pub hidden_tag_ids: Vec<u64>,
    /// The complex hidden filter.
    pub hidden_complex: String,
}
