//! Service layer for the scraper application.
//!
//! This module contains the business logic for:
//! - Category discovery (`CategoryDirectory`)
//! - Category pagination (`CategoryWalker`)
//! - Product page extraction (`BookExtractor`)

mod books;
mod categories;
mod walker;

pub use books::BookExtractor;
pub use categories::CategoryDirectory;
pub use walker::CategoryWalker;

use scraper::Selector;

use crate::error::{AppError, Result};

/// Parse a CSS selector, mapping failures into the application error type.
pub(crate) fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| AppError::selector(selector, e))
}
