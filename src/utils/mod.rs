//! Utility functions and helpers.

pub mod http;
pub mod url;

/// Make a display name safe for use as a file or directory name.
///
/// Lowercases and replaces spaces and slashes with underscores, matching the
/// naming of the per-category output directories and image files.
pub fn sanitize_name(name: &str) -> String {
    name.to_lowercase().replace([' ', '/'], "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("Sharp Objects"), "sharp_objects");
        assert_eq!(
            sanitize_name("Off Sides (Off #1.5)/Officier"),
            "off_sides_(off_#1.5)_officier"
        );
        assert_eq!(sanitize_name("travel"), "travel");
    }
}
