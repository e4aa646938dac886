//! Book record data structure.

use serde::{Deserialize, Serialize};

/// Column order of the per-category CSV output.
pub const CSV_HEADER: [&str; 10] = [
    "Product_page_url",
    "universal_product_code",
    "title",
    "price_including_tax",
    "price_excluding_tax",
    "number_available",
    "product_description",
    "category",
    "review_rating",
    "image_url",
];

/// A book extracted from a product page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookRecord {
    /// URL of the product page the record was extracted from
    pub product_page_url: String,

    /// Site-assigned product code (opaque)
    pub universal_product_code: String,

    /// Book title, verbatim from the page heading
    pub title: String,

    /// Price with tax, currency symbol stripped
    pub price_including_tax: String,

    /// Price without tax, currency symbol stripped
    pub price_excluding_tax: String,

    /// Units in stock, digits extracted from the availability text
    pub number_available: String,

    /// Description text; `None` when the page has no description section
    pub product_description: Option<String>,

    /// Category the book was discovered under; filled by the caller
    pub category: String,

    /// Rating cell content, verbatim
    pub review_rating: String,

    /// Absolute URL of the cover image
    pub image_url: String,
}

impl BookRecord {
    /// Field values in CSV column order (matches [`CSV_HEADER`]).
    pub fn csv_record(&self) -> Vec<String> {
        vec![
            self.product_page_url.clone(),
            self.universal_product_code.clone(),
            self.title.clone(),
            self.price_including_tax.clone(),
            self.price_excluding_tax.clone(),
            self.number_available.clone(),
            self.product_description.clone().unwrap_or_default(),
            self.category.clone(),
            self.review_rating.clone(),
            self.image_url.clone(),
        ]
    }
}
