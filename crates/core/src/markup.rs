//! Plain-text measurement of rich-text editor output.
//!
//! The dashboard's editor emits HTML (`<p>`, `<br>`, lists, inline styles).
//! Length rules apply to what a reader sees, so markup is removed before
//! counting and padding with empty tags or `&nbsp;` earns nothing.

use std::sync::LazyLock;

use regex::Regex;

/// Matches any tag, including comments and tags carrying attributes.
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->|<[^>]*>").expect("valid regex"));

/// Whitespace runs, including the zero-width characters editors paste in.
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\s\x{200B}-\x{200D}\x{2060}\x{FEFF}]+").expect("valid regex")
});

/// Named, decimal and hexadecimal character references.
static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:#([0-9]{1,7})|#[xX]([0-9a-fA-F]{1,6})|([a-zA-Z]+));").expect("valid regex")
});

/// Decode one character reference, or `None` to leave it as written.
fn decode_entity(caps: &regex::Captures<'_>) -> Option<char> {
    if let Some(dec) = caps.get(1) {
        return dec.as_str().parse().ok().and_then(char::from_u32);
    }
    if let Some(hex) = caps.get(2) {
        return u32::from_str_radix(hex.as_str(), 16)
            .ok()
            .and_then(char::from_u32);
    }
    match caps.get(3)?.as_str() {
        "nbsp" => Some('\u{a0}'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "amp" => Some('&'),
        _ => None,
    }
}

/// Strip all markup from `html` and collapse the result to plain text.
///
/// Tags become whitespace (so `a<br>b` reads as two words), character
/// references are decoded in a single pass, whitespace runs collapse to a
/// single space, and the result is trimmed.
pub fn strip_markup(html: &str) -> String {
    let without_tags = TAG_RE.replace_all(html, " ");

    let decoded = ENTITY_RE.replace_all(&without_tags, |caps: &regex::Captures<'_>| {
        match decode_entity(caps) {
            Some(c) => c.to_string(),
            None => caps[0].to_string(),
        }
    });

    WHITESPACE_RE
        .replace_all(&decoded, " ")
        .trim()
        .to_string()
}

/// Character count of `html` after [`strip_markup`].
pub fn stripped_len(html: &str) -> usize {
    strip_markup(html).chars().count()
}
