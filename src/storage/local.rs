//! Local filesystem record sink.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::Result;
use crate::models::{BookRecord, CSV_HEADER, CategoryEntry};
use crate::storage::{RecordSink, WriteSummary};
use crate::utils::sanitize_name;
use crate::utils::url::entity_id;

/// Filesystem-backed sink writing per-category directories under a root.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root_dir: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Output directory for a category: `<root>/<id>_<sanitized name>/`.
    fn category_dir(&self, category: &CategoryEntry) -> PathBuf {
        self.root_dir
            .join(format!("{}_{}", category.id, sanitize_name(&category.name)))
    }

    /// Image file name for a record.
    ///
    /// The numeric id from the product URL prefixes the sanitized title to
    /// disambiguate distinct books sharing a title.
    fn image_name(record: &BookRecord) -> String {
        let title = sanitize_name(&record.title);
        match entity_id(&record.product_page_url) {
            Some(id) => format!("{id}_{title}.png"),
            None => format!("{title}.png"),
        }
    }

    /// Ensure the parent directory of a path exists.
    async fn ensure_dir(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
        Self::ensure_dir(path).await?;

        let tmp = path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, path).await?;
        Ok(())
    }
}

#[async_trait]
impl RecordSink for LocalStorage {
    async fn write_records(
        &self,
        category: &CategoryEntry,
        records: &[BookRecord],
    ) -> Result<WriteSummary> {
        let csv_path = self
            .category_dir(category)
            .join(format!("{}.csv", sanitize_name(&category.name)));

        let mut bytes = Vec::new();
        {
            let mut writer = csv::Writer::from_writer(&mut bytes);
            writer.write_record(CSV_HEADER)?;
            for record in records {
                writer.write_record(record.csv_record())?;
            }
            writer.flush()?;
        }
        Self::write_bytes(&csv_path, &bytes).await?;

        Ok(WriteSummary {
            csv_path,
            row_count: records.len(),
        })
    }

    async fn save_image(
        &self,
        category: &CategoryEntry,
        record: &BookRecord,
        bytes: &[u8],
    ) -> Result<PathBuf> {
        let path = self.category_dir(category).join(Self::image_name(record));
        Self::write_bytes(&path, bytes).await?;
        Ok(path)
    }
}
