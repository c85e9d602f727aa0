// src/utils/text.rs

//! Text helpers shared by the extractors.

/// Marker appended to truncated descriptions.
pub const TRUNCATION_MARKER: &str = "...";

/// Collapse every whitespace run to a single space and trim the ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cut `s` to `max` characters and append [`TRUNCATION_MARKER`].
///
/// Strings of `max` characters or fewer are returned unchanged.
pub fn truncate_with_marker(s: String, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((byte_idx, _)) => {
            let mut cut = s[..byte_idx].to_string();
            cut.push_str(TRUNCATION_MARKER);
            cut
        }
        None => s,
    }
}

/// Parse the integer at the start of `s`, ignoring anything after it.
///
/// `"72%"` gives `Some(72)`, `" 1,204 reviews"` gives `Some(1)`, `"n/a"`
/// gives `None`.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let value: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Turn a hyphenated slug into words with an uppercase first letter.
///
/// `"reggio-emilia"` gives `"Reggio Emilia"`.
pub fn title_case_slug(slug: &str) -> String {
    slug.split('-')
        .map(upcase)
        .collect::<Vec<_>>()
        .join(" ")
}

fn upcase(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \n\n b\t c  "), "a b c");
        assert_eq!(collapse_whitespace(" \n "), "");
    }

    #[test]
    fn test_truncate_boundary() {
        let exact = "a".repeat(5000);
        assert_eq!(truncate_with_marker(exact.clone(), 5000), exact);

        let over = "a".repeat(5001);
        let cut = truncate_with_marker(over, 5000);
        assert_eq!(cut.chars().count(), 5003);
        assert!(cut.ends_with("a..."));
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let cut = truncate_with_marker("éééé".to_string(), 2);
        assert_eq!(cut, "éé...");
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("72"), Some(72));
        assert_eq!(parse_leading_int(" 72%"), Some(72));
        assert_eq!(parse_leading_int("0"), Some(0));
        assert_eq!(parse_leading_int("-5 points"), Some(-5));
        assert_eq!(parse_leading_int("1,204"), Some(1));
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("n/a"), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn test_title_case_slug() {
        assert_eq!(title_case_slug("bologna"), "Bologna");
        assert_eq!(title_case_slug("reggio-emilia"), "Reggio Emilia");
        assert_eq!(title_case_slug("san-josé"), "San José");
    }
}
