// src/utils/url.rs

//! URL manipulation for the catalogue's fixed link conventions.
//!
//! The site offers no machine-readable pagination or canonical links, so
//! every rewrite here is a literal string substitution that must match the
//! site's URL shapes exactly.

use regex::Regex;
use url::Url;

/// Resolve a potentially relative href against a base URL.
pub fn resolve(base_url: &str, href: &str) -> Option<String> {
    Url::parse(base_url)
        .ok()
        .and_then(|base| base.join(href).ok())
        .map(|u| u.to_string())
}

/// Advance a category index URL to the given page number.
///
/// The first advance replaces `index.html` with `page-2.html`; every later
/// advance replaces `page-<n-1>.html` with `page-<n>.html`. Category URLs
/// carry no page number in any other recoverable form.
pub fn next_page_url(current: &str, page: u32) -> String {
    if page == 2 {
        current.replace("index.html", "page-2.html")
    } else {
        current.replace(
            &format!("page-{}.html", page - 1),
            &format!("page-{}.html", page),
        )
    }
}

/// Rewrite a book heading href into an absolute product page URL.
///
/// Hrefs on category pages are relative (`../../../some-book_42/index.html`);
/// every `../` segment is dropped and the catalogue origin prepended.
pub fn product_url(catalogue_origin: &str, href: &str) -> String {
    format!("{}{}", catalogue_origin, href.replace("../", ""))
}

/// Rewrite a product image src into an absolute URL.
///
/// Strips at most two leading `../` segments, never more: product and
/// category pages sit at different relative depths and anything past the
/// first two segments belongs to the real media path.
pub fn image_url(site_origin: &str, src: &str) -> String {
    let mut path = src;
    for _ in 0..2 {
        match path.strip_prefix("../") {
            Some(rest) => path = rest,
            None => break,
        }
    }
    format!("{site_origin}{path}")
}

/// Extract the numeric id embedded in a catalogue URL.
///
/// Product and category URLs both end in `_<digits>/index.html`.
pub fn entity_id(url: &str) -> Option<String> {
    let pattern = Regex::new(r"_(\d+)/index\.html").ok()?;
    let captures = pattern.captures(url)?;
    Some(captures.get(1)?.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_href() {
        assert_eq!(
            resolve(
                "http://books.toscrape.com/index.html",
                "catalogue/category/books/travel_2/index.html"
            ),
            Some("http://books.toscrape.com/catalogue/category/books/travel_2/index.html".into())
        );
    }

    #[test]
    fn test_resolve_absolute_href() {
        assert_eq!(
            resolve("http://books.toscrape.com/index.html", "http://other.com/x"),
            Some("http://other.com/x".into())
        );
    }

    #[test]
    fn test_next_page_url_first_advance() {
        assert_eq!(
            next_page_url(
                "http://books.toscrape.com/catalogue/category/books/travel_2/index.html",
                2
            ),
            "http://books.toscrape.com/catalogue/category/books/travel_2/page-2.html"
        );
    }

    #[test]
    fn test_next_page_url_subsequent_advance() {
        assert_eq!(
            next_page_url(
                "http://books.toscrape.com/catalogue/category/books/travel_2/page-2.html",
                3
            ),
            "http://books.toscrape.com/catalogue/category/books/travel_2/page-3.html"
        );
    }

    #[test]
    fn test_product_url_strips_all_parent_segments() {
        assert_eq!(
            product_url(
                "http://books.toscrape.com/catalogue/",
                "../../../its-only-the-himalayas_981/index.html"
            ),
            "http://books.toscrape.com/catalogue/its-only-the-himalayas_981/index.html"
        );
    }

    #[test]
    fn test_image_url_strips_exactly_two_leading_segments() {
        assert_eq!(
            image_url("http://books.toscrape.com/", "../../media/cache/fe/72/cover.jpg"),
            "http://books.toscrape.com/media/cache/fe/72/cover.jpg"
        );
    }

    #[test]
    fn test_image_url_keeps_later_segments_intact() {
        // A single leading segment loses only itself; inner segments survive.
        assert_eq!(
            image_url("http://books.toscrape.com/", "../media/../cover.jpg"),
            "http://books.toscrape.com/media/../cover.jpg"
        );
    }

    #[test]
    fn test_image_url_clean_path_is_untouched() {
        assert_eq!(
            image_url("http://books.toscrape.com/", "media/cover.jpg"),
            "http://books.toscrape.com/media/cover.jpg"
        );
    }

    #[test]
    fn test_entity_id() {
        assert_eq!(
            entity_id("http://books.toscrape.com/catalogue/sharp-objects_997/index.html"),
            Some("997".to_string())
        );
        assert_eq!(
            entity_id("http://books.toscrape.com/catalogue/category/books/travel_2/index.html"),
            Some("2".to_string())
        );
        assert_eq!(entity_id("http://books.toscrape.com/index.html"), None);
    }
}
