// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Icon content helpers: URLs, quoted text, and pixel dimensions.

/// Parses a pure pixel integer: digits with an optional `px` suffix.
///
/// Returns `None` for anything else (`1.5px`, `2em`, `auto`), and for values
/// that do not fit in a `u32`.
///
/// # Example
///
/// ```rust
/// use skin_property::parse_pixel_integer;
///
/// assert_eq!(parse_pixel_integer("16px"), Some(16));
/// assert_eq!(parse_pixel_integer("16"), Some(16));
/// assert_eq!(parse_pixel_integer("1em"), None);
/// ```
#[must_use]
pub fn parse_pixel_integer(value: &str) -> Option<u32> {
    let digits = value.strip_suffix("px").unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Returns the URI inside a `url(...)` value, with one pair of quotes trimmed.
///
/// Returns `None` if `value` is not a URL reference.
///
/// # Example
///
/// ```rust
/// use skin_property::url_value;
///
/// assert_eq!(url_value("url('/images/x.png')"), Some("/images/x.png"));
/// assert_eq!(url_value("\"Hello\""), None);
/// ```
#[must_use]
pub fn url_value(value: &str) -> Option<&str> {
    let inner = value.strip_prefix("url(")?;
    let end = inner.find(')').unwrap_or(inner.len());
    Some(trim_quotes(&inner[..end]))
}

/// Trims one matching pair of leading/trailing quote characters.
///
/// Mismatched pairs (`"text'`) are returned unchanged.
#[must_use]
pub fn trim_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2
            && let Some(inner) = value
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

/// Returns `true` if `value` opens with one kind of quote and closes with the other.
#[must_use]
pub fn has_mismatched_quotes(value: &str) -> bool {
    value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('\''))
            || (value.starts_with('\'') && value.ends_with('"')))
}

/// Returns `true` if `uri` starts with a URI scheme (`http:`, `data:`, ...).
#[must_use]
pub fn is_absolute_uri(uri: &str) -> bool {
    let Some(colon) = uri.find(':') else {
        return false;
    };
    let scheme = &uri[..colon];
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_integers() {
        assert_eq!(parse_pixel_integer("0"), Some(0));
        assert_eq!(parse_pixel_integer("7px"), Some(7));
        assert_eq!(parse_pixel_integer("px"), None);
        assert_eq!(parse_pixel_integer("1.5px"), None);
        assert_eq!(parse_pixel_integer("-4px"), None);
        assert_eq!(parse_pixel_integer("99999999999px"), None);
    }

    #[test]
    fn url_values() {
        assert_eq!(url_value("url(/images/x.png)"), Some("/images/x.png"));
        assert_eq!(url_value("url(\"x.png\")"), Some("x.png"));
        assert_eq!(url_value("url(x.png"), Some("x.png"));
        assert_eq!(url_value("inhibit"), None);
    }

    #[test]
    fn quotes() {
        assert_eq!(trim_quotes("\"Hello\""), "Hello");
        assert_eq!(trim_quotes("'Hello'"), "Hello");
        assert_eq!(trim_quotes("\"Hello'"), "\"Hello'");
        assert_eq!(trim_quotes("\""), "\"");
        assert_eq!(trim_quotes("''"), "");
        assert!(has_mismatched_quotes("\"Hello'"));
        assert!(!has_mismatched_quotes("'Hello'"));
    }

    #[test]
    fn absolute_uris() {
        assert!(is_absolute_uri("http://example.com/x.png"));
        assert!(is_absolute_uri("data:image/png;base64,AAAA"));
        assert!(!is_absolute_uri("/images/x.png"));
        assert!(!is_absolute_uri("images/x.png"));
        assert!(!is_absolute_uri("1abc:foo"));
    }
}
