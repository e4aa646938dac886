// src/services/categories.rs

//! Category directory service.
//!
//! Discovers the site's category list from the home page side navigation.

use reqwest::Client;

use crate::error::{AppError, Result};
use crate::models::{ALL_BOOKS_LABEL, CategoryEntry, SiteConfig};
use crate::services::parse_selector;
use crate::utils::http::{FetchOutcome, fetch_page};
use crate::utils::url::{entity_id, resolve};

/// Service for listing the categories advertised on the home page.
pub struct CategoryDirectory<'a> {
    client: &'a Client,
    site: &'a SiteConfig,
}

impl<'a> CategoryDirectory<'a> {
    /// Create a new directory service.
    pub fn new(client: &'a Client, site: &'a SiteConfig) -> Self {
        Self { client, site }
    }

    /// Fetch the home page and map its navigation into category entries.
    ///
    /// Order follows the navigation markup. The first entry is the site's
    /// whole-catalogue pseudo-category; its label is normalized to
    /// [`ALL_BOOKS_LABEL`].
    pub async fn list_categories(&self) -> Result<Vec<CategoryEntry>> {
        let document = match fetch_page(self.client, &self.site.home_url).await {
            Ok(FetchOutcome::Page(document)) => document,
            Ok(FetchOutcome::NotFound) => {
                return Err(AppError::unreachable(
                    &self.site.home_url,
                    "home page returned a non-success status",
                ));
            }
            Err(error) => return Err(AppError::unreachable(&self.site.home_url, error)),
        };

        let nav_link = parse_selector("ul.nav-list a")?;
        let mut entries = Vec::new();

        for anchor in document.select(&nav_link) {
            let name = anchor.text().collect::<String>().trim().to_string();
            let href = anchor
                .value()
                .attr("href")
                .ok_or_else(|| AppError::structure("category link without an href attribute"))?;
            let url = resolve(&self.site.home_url, href)
                .ok_or_else(|| AppError::structure(format!("unresolvable category href {href}")))?;
            let id = entity_id(&url)
                .and_then(|digits| digits.parse().ok())
                .unwrap_or(entries.len() as u32);
            entries.push(CategoryEntry { id, name, url });
        }

        if entries.is_empty() {
            return Err(AppError::structure(
                "home page without a category navigation list",
            ));
        }

        entries[0].name = ALL_BOOKS_LABEL.to_string();
        Ok(entries)
    }
}
