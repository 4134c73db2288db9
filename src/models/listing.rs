//! Upstream listing response shape.
//!
//! Only the fields that end up in a [`Post`](super::Post) are modelled;
//! everything else in the response is ignored by serde.

use serde::Deserialize;

/// Top level of a `hot.json` response.
#[derive(Debug, Clone, Deserialize)]
pub struct Listing {
    pub data: ListingData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListingData {
    /// Entries in the order the API returned them
    pub children: Vec<ListingChild>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListingChild {
    pub data: ListingEntry,
}

/// Fields read from a single listing entry.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ListingEntry {
    pub title: String,
    pub score: i64,
    pub permalink: String,
    pub author: String,
}

impl Listing {
    /// Consume the listing, yielding its entries in order.
    pub fn into_entries(self) -> impl Iterator<Item = ListingEntry> {
        self.data.children.into_iter().map(|child| child.data)
    }
}
