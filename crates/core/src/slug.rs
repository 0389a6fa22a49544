//! URL slug generation and checking for package titles.

use std::sync::LazyLock;

use regex::Regex;

/// Pattern a stored slug must match. The empty slug is allowed and means
/// "derive one from the title".
pub const SLUG_PATTERN: &str = r"^[a-z0-9-]*$";

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SLUG_PATTERN).expect("valid regex"));

/// Generate a URL-safe slug from a package title.
///
/// Converts to lowercase, replaces spaces and special characters with hyphens,
/// collapses consecutive hyphens, and trims leading/trailing hyphens.
pub fn generate_slug(title: &str) -> String {
    let mut result = String::with_capacity(title.len());
    let mut prev_hyphen = false;

    for c in title.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c);
            prev_hyphen = false;
        } else if !prev_hyphen {
            result.push('-');
            prev_hyphen = true;
        }
    }

    result.trim_matches('-').to_string()
}

/// Whether `slug` only contains lowercase ASCII letters, digits and hyphens.
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_RE.is_match(slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_from_simple_title() {
        assert_eq!(generate_slug("Island Hopping Tour"), "island-hopping-tour");
    }

    #[test]
    fn slug_collapses_punctuation() {
        assert_eq!(
            generate_slug("Van + Ferry: El Nido -> Coron!"),
            "van-ferry-el-nido-coron"
        );
    }

    #[test]
    fn slug_trims_hyphens() {
        assert_eq!(generate_slug("  --Sunset Cruise--  "), "sunset-cruise");
    }

    #[test]
    fn slug_drops_non_ascii_letters() {
        assert_eq!(generate_slug("Café Crawl"), "caf-crawl");
    }

    #[test]
    fn slug_of_symbols_is_empty() {
        assert_eq!(generate_slug("!!!"), "");
    }

    #[test]
    fn generated_slugs_are_valid() {
        for title in ["Half-Day City Tour", "Tour #2 (Private)", "ÀÉÎ 2024"] {
            assert!(is_valid_slug(&generate_slug(title)), "{title}");
        }
    }

    #[test]
    fn valid_slugs() {
        assert!(is_valid_slug(""));
        assert!(is_valid_slug("el-nido-tour-a"));
        assert!(is_valid_slug("2-day"));
    }

    #[test]
    fn invalid_slugs() {
        assert!(!is_valid_slug("El-Nido"));
        assert!(!is_valid_slug("el nido"));
        assert!(!is_valid_slug("el_nido"));
        assert!(!is_valid_slug("tour/a"));
    }
}
