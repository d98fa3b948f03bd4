use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Paging counters attached to listing responses
///
/// Purely descriptive: the client never follows pages on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    #[serde(deserialize_with = "null_as_default")]
    pub page: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub per_page: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub last_page: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub total_entries: u32,
}

impl Pagination {
    /// Whether a page after this one exists
    pub fn has_next(&self) -> bool {
        self.page < self.last_page
    }
}

/// `meta` envelope of listing responses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    #[serde(deserialize_with = "null_as_default")]
    pub pagination: Pagination,
}
