//! String predicates and extractors

use regex::RegexBuilder;

use crate::error::{AppKitError, Result};

/// Case-insensitive search for `pattern` anywhere in `text`.
///
/// `pattern` is a regular expression, so callers searching for literal user
/// input should pass it through [`regex::escape`] first.
///
/// # Errors
///
/// Returns `InvalidInput` if `pattern` does not compile.
pub fn regex_match(text: &str, pattern: &str) -> Result<bool> {
    let regex = RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| AppKitError::InvalidInput(format!("Invalid search pattern: {}", e)))?;
    Ok(regex.is_match(text))
}

/// True when every character is an ASCII digit. The empty string qualifies.
pub fn is_numeric(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit())
}

/// Keep only ASCII digits and decimal points, e.g. "$1,234.50" -> "1234.50".
pub fn extract_float_text(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect()
}

/// Keep only ASCII digits, e.g. "(555) 010-9999" -> "5550109999".
pub fn parse_only_numeric_string(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_match_case_insensitive() {
        assert!(regex_match("Hello World", "world").unwrap());
        assert!(regex_match("Hello World", "^hello").unwrap());
        assert!(!regex_match("Hello World", "planet").unwrap());
    }

    #[test]
    fn test_regex_match_multiline_text() {
        assert!(regex_match("first line\nSecond line", "second").unwrap());
        assert!(!regex_match("a\nb", "a.b").unwrap());
    }

    #[test]
    fn test_regex_match_escaped_literal() {
        assert!(regex_match("price: 3.50 (usd)", &regex::escape("(usd)")).unwrap());
    }

    #[test]
    fn test_regex_match_invalid_pattern() {
        let err = regex_match("abc", "(unclosed").unwrap_err();
        assert!(matches!(err, AppKitError::InvalidInput(_)));
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("0123456789"));
        assert!(is_numeric(""));
        assert!(!is_numeric("12a"));
        assert!(!is_numeric("-1"));
        assert!(!is_numeric("1.5"));
        assert!(!is_numeric("١٢"));
    }

    #[test]
    fn test_extract_float_text() {
        assert_eq!(extract_float_text("$1,234.50"), "1234.50");
        assert_eq!(extract_float_text("abc"), "");
    }

    #[test]
    fn test_parse_only_numeric_string_removes_every_non_digit() {
        assert_eq!(parse_only_numeric_string("(555) 010-9999"), "5550109999");
        assert_eq!(parse_only_numeric_string("+1 2"), "12");
    }
}
