//! Storage abstractions for extracted records.
//!
//! Every category gets its own output directory holding the category CSV
//! and one cover image per book:
//!
//! ```text
//! data/
//! └── 2_travel/
//!     ├── travel.csv
//!     └── 981_its_only_the_himalayas.png
//! ```

pub mod local;

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{BookRecord, CategoryEntry};

// Re-export for convenience
pub use local::LocalStorage;

/// Metadata about a category CSV write.
#[derive(Debug, Clone)]
pub struct WriteSummary {
    /// Path of the written CSV file
    pub csv_path: PathBuf,
    /// Number of data rows written (header excluded)
    pub row_count: usize,
}

/// Trait for record sinks.
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Write the category CSV, replacing any previous file for the category.
    ///
    /// Rows are written in the order given, after the fixed header.
    async fn write_records(
        &self,
        category: &CategoryEntry,
        records: &[BookRecord],
    ) -> Result<WriteSummary>;

    /// Save one book's cover image into the category directory.
    async fn save_image(
        &self,
        category: &CategoryEntry,
        record: &BookRecord,
        bytes: &[u8],
    ) -> Result<PathBuf>;
}
