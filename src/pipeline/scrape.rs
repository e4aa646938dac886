// src/pipeline/scrape.rs

//! Catalogue extraction pipeline.
//!
//! Orchestrates walker, extractor, and sink for one category at a time.
//! Work is strictly sequential; a single failed book aborts the category
//! rather than leaving a CSV with silently missing rows.

use chrono::{DateTime, Utc};
use reqwest::Client;
use scraper::Html;

use crate::error::{AppError, Result};
use crate::models::{CategoryEntry, Config};
use crate::services::{BookExtractor, CategoryWalker};
use crate::storage::RecordSink;
use crate::utils::http::{FetchOutcome, fetch_bytes, fetch_page};

/// Counts for a single scraped category.
#[derive(Debug, Default)]
pub struct CategoryStats {
    pub book_count: usize,
    pub image_count: usize,
}

/// Summary of a full scrape run.
#[derive(Debug)]
pub struct ScrapeStats {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub category_count: usize,
    pub book_count: usize,
    pub image_count: usize,
}

/// Scrape a single category end to end.
///
/// Walks the category, extracts every discovered book, saves its cover
/// image, and finally writes the category CSV in discovery order.
pub async fn run_category(
    client: &Client,
    config: &Config,
    sink: &dyn RecordSink,
    entry: &CategoryEntry,
) -> Result<CategoryStats> {
    log::info!("scraping category {} ({})", entry.name, entry.url);

    let walker = CategoryWalker::new(client, &config.site);
    let book_urls = walker.walk(&entry.url).await?;
    log::info!("found {} book(s) in {}", book_urls.len(), entry.name);

    let extractor = BookExtractor::new(&config.site.site_origin);
    let mut records = Vec::with_capacity(book_urls.len());
    let mut stats = CategoryStats::default();

    for book_url in &book_urls {
        let document = fetch_required(client, book_url).await?;
        let mut record = extractor.extract(&document, book_url)?;
        record.category = entry.name.clone();

        let image = fetch_bytes(client, &record.image_url)
            .await
            .map_err(|e| AppError::unreachable(&record.image_url, e))?
            .ok_or_else(|| {
                AppError::unreachable(&record.image_url, "cover image returned a non-success status")
            })?;
        sink.save_image(entry, &record, &image).await?;
        stats.image_count += 1;

        records.push(record);
    }

    let summary = sink.write_records(entry, &records).await?;
    stats.book_count = summary.row_count;
    log::info!(
        "wrote {} row(s) to {}",
        summary.row_count,
        summary.csv_path.display()
    );

    Ok(stats)
}

/// Scrape every real category sequentially.
///
/// The position-0 entry is the whole-catalogue pseudo-category; it spans
/// the others and is skipped. The first failing category aborts the run.
pub async fn run_all(
    client: &Client,
    config: &Config,
    sink: &dyn RecordSink,
    entries: &[CategoryEntry],
) -> Result<ScrapeStats> {
    let start_time = Utc::now();
    let mut book_count = 0;
    let mut image_count = 0;
    let mut category_count = 0;

    for entry in entries.iter().skip(1) {
        let stats = run_category(client, config, sink, entry).await?;
        book_count += stats.book_count;
        image_count += stats.image_count;
        category_count += 1;
    }

    let end_time = Utc::now();
    log::info!(
        "scraped {} categories, {} books, {} images in {}s",
        category_count,
        book_count,
        image_count,
        (end_time - start_time).num_seconds()
    );

    Ok(ScrapeStats {
        start_time,
        end_time,
        category_count,
        book_count,
        image_count,
    })
}

/// Fetch a page that must exist.
///
/// Unlike the walker's pagination probe, a non-success status here means a
/// discovered link is dead, which makes the category unreachable.
pub(crate) async fn fetch_required(client: &Client, url: &str) -> Result<Html> {
    match fetch_page(client, url).await {
        Ok(FetchOutcome::Page(document)) => Ok(document),
        Ok(FetchOutcome::NotFound) => Err(AppError::unreachable(
            url,
            "page returned a non-success status",
        )),
        Err(error) => Err(AppError::unreachable(url, error)),
    }
}
