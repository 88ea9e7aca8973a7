use serde::{Deserialize, Serialize};

use super::Person;

/// One server-paginated batch of people plus navigation links.
///
/// `next`/`previous` are `None` exactly at the respective boundary of the
/// total ordering. A page is wholly replaced by the next successful fetch,
/// never merged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PeoplePage {
    /// Total number of records across all pages
    #[serde(default)]
    pub count: u64,
    /// URL of the next page, absent on the last page
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, absent on the first page
    #[serde(default)]
    pub previous: Option<String>,
    /// The records of this page, in server order
    #[serde(default)]
    pub results: Vec<Person>,
}

impl PeoplePage {
    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Whether a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }
}
