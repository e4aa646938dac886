// src/pipeline/probe.rs

//! Single-book probe.
//!
//! Fetches one product page, extracts the record, and prints every field.
//! Unlike the category pipeline, the category name comes from the page's
//! own breadcrumb, since there is no walk supplying one.

use reqwest::Client;

use crate::error::{AppError, Result};
use crate::models::Config;
use crate::pipeline::scrape::fetch_required;
use crate::services::{BookExtractor, parse_selector};

/// Extract a single product page and print its fields to stdout.
pub async fn run_probe(client: &Client, config: &Config, url: &str) -> Result<()> {
    let document = fetch_required(client, url).await?;

    let extractor = BookExtractor::new(&config.site.site_origin);
    let mut record = extractor.extract(&document, url)?;

    // Third breadcrumb item is the category link.
    let breadcrumb = parse_selector("ul.breadcrumb li:nth-child(3) a")?;
    record.category = document
        .select(&breadcrumb)
        .next()
        .map(|a| a.text().collect::<String>().trim().to_string())
        .ok_or_else(|| AppError::structure("product page without a category breadcrumb"))?;

    println!("product_page_url : {}", record.product_page_url);
    println!("universal_product_code (upc) : {}", record.universal_product_code);
    println!("title : {}", record.title);
    println!("price_including_tax : {}", record.price_including_tax);
    println!("price_excluding_tax : {}", record.price_excluding_tax);
    println!("number_available : {}", record.number_available);
    println!(
        "product_description : {}",
        record.product_description.as_deref().unwrap_or("")
    );
    println!("category : {}", record.category);
    println!("review_rating : {}", record.review_rating);
    println!("image_url : {}", record.image_url);

    Ok(())
}
