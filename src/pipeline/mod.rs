//! Pipeline entry points for scraper operations.
//!
//! - `run_all`: scrape every real category into per-category CSV files
//! - `run_category`: scrape a single category
//! - `run_probe`: extract a single product page and print its fields

pub mod probe;
pub mod scrape;

pub use probe::run_probe;
pub use scrape::{CategoryStats, ScrapeStats, run_all, run_category};
