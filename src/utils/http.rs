// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use scraper::Html;

use crate::error::Result;
use crate::models::ScraperConfig;

/// Outcome of a page fetch.
///
/// Pagination relies on the distinction: a non-success status is the
/// walker's end-of-pages signal, while transport faults surface as errors.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Parsed document for a successful response
    Page(Html),
    /// The server answered with a non-success status
    NotFound,
}

/// Create a configured HTTP client.
pub fn create_client(config: &ScraperConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Fetch a page and parse it as HTML.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<FetchOutcome> {
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        log::debug!("GET {} -> {}", url, response.status());
        return Ok(FetchOutcome::NotFound);
    }
    let text = response.text().await?;
    Ok(FetchOutcome::Page(Html::parse_document(&text)))
}

/// Fetch a raw body (cover images), `None` on a non-success status.
pub async fn fetch_bytes(client: &reqwest::Client, url: &str) -> Result<Option<Vec<u8>>> {
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        log::debug!("GET {} -> {}", url, response.status());
        return Ok(None);
    }
    Ok(Some(response.bytes().await?.to_vec()))
}
