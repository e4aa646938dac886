//! Category entry data structure.

use serde::{Deserialize, Serialize};

/// Display label for the whole-catalogue pseudo-category.
///
/// The site labels its first navigation entry "Books"; it is not a real
/// category but the union of all of them, so it gets a fixed sentinel name.
pub const ALL_BOOKS_LABEL: &str = "All Books";

/// A category discovered in the site navigation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryEntry {
    /// Numeric id embedded in the category URL (`.../travel_2/index.html` -> 2)
    pub id: u32,

    /// Display name, trimmed link text
    pub name: String,

    /// Absolute URL of the category's first index page
    pub url: String,
}

impl CategoryEntry {
    /// Whether this entry is the whole-catalogue pseudo-category.
    pub fn is_catch_all(&self) -> bool {
        self.name == ALL_BOOKS_LABEL
    }
}
