// src/services/walker.rs

//! Category pagination walker.
//!
//! Enumerates every page of a category and collects the product page URLs
//! found on each. The site exposes no page count, so the walk advances
//! until a page fetch comes back with a non-success status.

use reqwest::Client;

use crate::error::{AppError, Result};
use crate::models::SiteConfig;
use crate::services::parse_selector;
use crate::utils::http::{FetchOutcome, fetch_page};
use crate::utils::url::{next_page_url, product_url};

/// Service for walking a category's index pages.
pub struct CategoryWalker<'a> {
    client: &'a Client,
    site: &'a SiteConfig,
}

impl<'a> CategoryWalker<'a> {
    /// Create a new walker using the given client and site conventions.
    pub fn new(client: &'a Client, site: &'a SiteConfig) -> Self {
        Self { client, site }
    }

    /// Enumerate every product page URL in a category.
    ///
    /// Returns URLs in page order, then document order within each page.
    /// Running past the last page terminates the walk; a transport fault
    /// fails it with no partial result.
    pub async fn walk(&self, category_index_url: &str) -> Result<Vec<String>> {
        let heading_link = parse_selector("h3 a")?;

        let mut product_urls = Vec::new();
        let mut page_url = category_index_url.to_string();
        let mut page = 1u32;

        loop {
            let document = match fetch_page(self.client, &page_url).await {
                Ok(FetchOutcome::Page(document)) => document,
                // Running past the last page is the loop's termination
                // signal, not an error.
                Ok(FetchOutcome::NotFound) => break,
                Err(error) => return Err(AppError::unreachable(&page_url, error)),
            };

            for anchor in document.select(&heading_link) {
                let href = anchor.value().attr("href").ok_or_else(|| {
                    AppError::structure("book heading link without an href attribute")
                })?;
                product_urls.push(product_url(&self.site.catalogue_origin, href));
            }

            page += 1;
            page_url = next_page_url(&page_url, page);
        }

        log::debug!(
            "walked {} page(s) of {}, found {} book(s)",
            page - 1,
            category_index_url,
            product_urls.len()
        );
        Ok(product_urls)
    }
}
