// src/services/books.rs

//! Book page extraction service.
//!
//! Reads the nine record fields out of a product page. The site serves no
//! machine-readable data, so extraction leans on the page's fixed document
//! structure: the single `<h1>` heading, the first `<img>`, and the product
//! information table read by cell position.

use scraper::{ElementRef, Html};

use crate::error::{AppError, Result};
use crate::models::BookRecord;
use crate::services::parse_selector;
use crate::utils::url::image_url;

/// Heading text that marks the description section.
const DESCRIPTION_HEADING: &str = "Product Description";

// Positions of record fields in the product information table. The table
// has no usable labels in its cells' markup, so cells are read by index;
// a layout change on the site shows up as wrong values, not as an error.
const TD_UPC: usize = 0;
const TD_PRICE_EXCL_TAX: usize = 2;
const TD_PRICE_INCL_TAX: usize = 3;
const TD_AVAILABILITY: usize = 5;
const TD_RATING: usize = 6;

/// Service for extracting book records from product pages.
pub struct BookExtractor {
    site_origin: String,
}

impl BookExtractor {
    /// Create an extractor rewriting image paths against the given origin.
    pub fn new(site_origin: impl Into<String>) -> Self {
        Self {
            site_origin: site_origin.into(),
        }
    }

    /// Extract a record from a fetched product page.
    ///
    /// The `category` field is left empty; the pipeline fills it with the
    /// category the book was discovered under.
    pub fn extract(&self, document: &Html, product_page_url: &str) -> Result<BookRecord> {
        let title = document
            .select(&parse_selector("h1")?)
            .next()
            .ok_or_else(|| AppError::structure("product page without an <h1> title"))?
            .text()
            .collect::<String>();

        let image_src = document
            .select(&parse_selector("img")?)
            .next()
            .and_then(|img| img.value().attr("src"))
            .ok_or_else(|| AppError::structure("product page without a cover image"))?;

        let cells: Vec<String> = document
            .select(&parse_selector("td")?)
            .map(|cell| cell.text().collect())
            .collect();
        if cells.len() <= TD_RATING {
            return Err(AppError::structure(format!(
                "product information table has {} cells, expected at least {}",
                cells.len(),
                TD_RATING + 1
            )));
        }

        Ok(BookRecord {
            product_page_url: product_page_url.to_string(),
            universal_product_code: cells[TD_UPC].clone(),
            title,
            price_including_tax: strip_currency(&cells[TD_PRICE_INCL_TAX]),
            price_excluding_tax: strip_currency(&cells[TD_PRICE_EXCL_TAX]),
            number_available: digits(&cells[TD_AVAILABILITY]),
            product_description: self.description(document)?,
            category: String::new(),
            review_rating: cells[TD_RATING].clone(),
            image_url: image_url(&self.site_origin, image_src),
        })
    }

    /// Find the description paragraph, if the page has one.
    ///
    /// Only the document's first `<h2>` is considered; when its text is not
    /// the sentinel heading the page has no description section.
    fn description(&self, document: &Html) -> Result<Option<String>> {
        let Some(heading) = document.select(&parse_selector("h2")?).next() else {
            return Ok(None);
        };
        let heading_text: String = heading.text().collect();
        if heading_text.trim() != DESCRIPTION_HEADING {
            return Ok(None);
        }

        let paragraph = following_paragraph(heading).ok_or_else(|| {
            AppError::structure("description heading without a following paragraph")
        })?;
        Ok(Some(paragraph.text().collect()))
    }
}

/// First `<p>` after the heading in document order.
///
/// On product pages the paragraph is not a direct sibling of the heading;
/// it follows the heading's wrapper `<div>`.
fn following_paragraph<'a>(heading: ElementRef<'a>) -> Option<ElementRef<'a>> {
    heading
        .next_siblings()
        .chain(heading.parent().into_iter().flat_map(|p| p.next_siblings()))
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "p")
}

/// Remove the pound sign from a raw price cell.
///
/// Handles both the correctly decoded symbol and the `Â£` mojibake left by
/// a UTF-8 response read as Latin-1; already-clean input passes through, so
/// the strip is idempotent.
fn strip_currency(raw: &str) -> String {
    raw.replace("Â£", "").replace('£', "")
}

/// Concatenate every ASCII digit of an availability cell.
///
/// The cell reads like "In stock (22 available)" and carries exactly one
/// number in practice.
fn digits(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "http://books.toscrape.com/";

    fn product_document(description: bool) -> Html {
        let description_section = if description {
            r#"<div id="product_description" class="sub-header">
                 <h2>Product Description</h2>
               </div>
               <p>It's hard to imagine a world without A Light in the Attic.</p>"#
        } else {
            ""
        };
        let html = format!(
            r#"<html><body>
              <div class="item active">
                <img src="../../media/cache/fe/72/cover.jpg" alt="A Light in the Attic"/>
              </div>
              <h1>A Light in the Attic</h1>
              {description_section}
              <table class="table table-striped">
                <tr><th>UPC</th><td>a897fe39b1053632</td></tr>
                <tr><th>Product Type</th><td>Books</td></tr>
                <tr><th>Price (excl. tax)</th><td>Â£51.77</td></tr>
                <tr><th>Price (incl. tax)</th><td>Â£51.77</td></tr>
                <tr><th>Tax</th><td>Â£0.00</td></tr>
                <tr><th>Availability</th><td>In stock (22 available)</td></tr>
                <tr><th>Number of reviews</th><td>0</td></tr>
              </table>
            </body></html>"#
        );
        Html::parse_document(&html)
    }

    #[test]
    fn test_extract_full_record() {
        let extractor = BookExtractor::new(ORIGIN);
        let url = "http://books.toscrape.com/catalogue/a-light-in-the-attic_1000/index.html";
        let record = extractor.extract(&product_document(true), url).unwrap();

        assert_eq!(record.product_page_url, url);
        assert_eq!(record.universal_product_code, "a897fe39b1053632");
        assert_eq!(record.title, "A Light in the Attic");
        assert_eq!(record.price_including_tax, "51.77");
        assert_eq!(record.price_excluding_tax, "51.77");
        assert_eq!(record.number_available, "22");
        assert_eq!(
            record.product_description.as_deref(),
            Some("It's hard to imagine a world without A Light in the Attic.")
        );
        assert_eq!(record.category, "");
        assert_eq!(record.review_rating, "0");
        assert_eq!(
            record.image_url,
            "http://books.toscrape.com/media/cache/fe/72/cover.jpg"
        );
    }

    #[test]
    fn test_extract_without_description_section() {
        let extractor = BookExtractor::new(ORIGIN);
        let record = extractor
            .extract(&product_document(false), "http://example.com/x_1/index.html")
            .unwrap();
        assert_eq!(record.product_description, None);
    }

    #[test]
    fn test_extract_ignores_non_sentinel_heading() {
        let extractor = BookExtractor::new(ORIGIN);
        let html = r#"<html><body>
            <img src="cover.jpg"/><h1>Title</h1>
            <h2>Products you recently viewed</h2><p>not a description</p>
            <table>
              <tr><td>upc</td></tr><tr><td>Books</td></tr><tr><td>£1.00</td></tr>
              <tr><td>£1.00</td></tr><tr><td>£0.00</td></tr>
              <tr><td>In stock (3 available)</td></tr><tr><td>0</td></tr>
            </table>
        </body></html>"#;
        let record = extractor
            .extract(
                &Html::parse_document(html),
                "http://example.com/x_1/index.html",
            )
            .unwrap();
        assert_eq!(record.product_description, None);
        assert_eq!(record.number_available, "3");
    }

    #[test]
    fn test_extract_missing_title_is_structure_mismatch() {
        let extractor = BookExtractor::new(ORIGIN);
        let html = "<html><body><p>no heading here</p></body></html>";
        let result = extractor.extract(
            &Html::parse_document(html),
            "http://example.com/x_1/index.html",
        );
        assert!(matches!(result, Err(AppError::StructureMismatch { .. })));
    }

    #[test]
    fn test_extract_short_table_is_structure_mismatch() {
        let extractor = BookExtractor::new(ORIGIN);
        let html = r#"<html><body>
            <img src="cover.jpg"/><h1>Title</h1>
            <table><tr><td>upc</td></tr><tr><td>Books</td></tr></table>
        </body></html>"#;
        let result = extractor.extract(
            &Html::parse_document(html),
            "http://example.com/x_1/index.html",
        );
        assert!(matches!(result, Err(AppError::StructureMismatch { .. })));
    }

    #[test]
    fn test_strip_currency_is_idempotent() {
        assert_eq!(strip_currency("Â£51.77"), "51.77");
        assert_eq!(strip_currency("£51.77"), "51.77");
        assert_eq!(strip_currency(&strip_currency("Â£51.77")), "51.77");
        assert_eq!(strip_currency("51.77"), "51.77");
    }

    #[test]
    fn test_digits() {
        assert_eq!(digits("In stock (22 available)"), "22");
        assert_eq!(digits("In stock (3 available)"), "3");
        assert_eq!(digits("Out of stock"), "");
    }
}
