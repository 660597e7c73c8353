//! Shared paging envelope pieces

use serde::{Deserialize, Serialize};

/// Link to another page of a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageHref {
    pub href: String,
}

impl PageHref {
    /// Value of `offset` in the link's query string
    pub fn offset(&self) -> Option<String> {
        crate::pagination::query_param(&self.href, "offset")
    }
}
