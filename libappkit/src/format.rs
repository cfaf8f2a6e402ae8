//! Number and date formatting

use chrono::{Local, NaiveDate};
use std::fmt::Display;

/// Insert thousands separators into the leading run of digits.
///
/// An optional `-` sign and everything after the digit run are kept as-is:
/// `-1234567.891` becomes `-1,234,567.891` and non-numeric text is unchanged.
pub fn format_number_with_commas<N: Display>(num: N) -> String {
    let text = num.to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let (integer, rest) = unsigned.split_at(digits_end);

    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}{}{}", sign, grouped, rest)
}

/// Clamp `value` into `[min, max]`.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamp `value` into `[0.0, 1.0]`.
pub fn clamp01(value: f64) -> f64 {
    clamp(value, 0.0, 1.0)
}

/// Today's local date as `YYYY-MM-DD`.
pub fn current_ymd() -> String {
    format_ymd(Local::now().date_naive())
}

pub fn format_ymd(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_commas_integers() {
        assert_eq!(format_number_with_commas(0), "0");
        assert_eq!(format_number_with_commas(999), "999");
        assert_eq!(format_number_with_commas(1000), "1,000");
        assert_eq!(format_number_with_commas(1234567), "1,234,567");
        assert_eq!(format_number_with_commas(-9876543210i64), "-9,876,543,210");
    }

    #[test]
    fn test_format_number_with_commas_leaves_fraction_alone() {
        assert_eq!(format_number_with_commas(1234.5678), "1,234.5678");
        assert_eq!(format_number_with_commas("-1234567.891"), "-1,234,567.891");
    }

    #[test]
    fn test_format_number_with_commas_only_groups_digits() {
        assert_eq!(format_number_with_commas("abcdef"), "abcdef");
        assert_eq!(format_number_with_commas("1234567 items"), "1,234,567 items");
        assert_eq!(format_number_with_commas(""), "");
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5, 0, 10), 5);
        assert_eq!(clamp(-3, 0, 10), 0);
        assert_eq!(clamp(42, 0, 10), 10);
    }

    #[test]
    fn test_clamp01() {
        assert_eq!(clamp01(1.5), 1.0);
        assert_eq!(clamp01(-0.2), 0.0);
        assert_eq!(clamp01(0.25), 0.25);
    }

    #[test]
    fn test_format_ymd() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(format_ymd(date), "2024-03-07");
    }

    #[test]
    fn test_current_ymd_shape() {
        let today = current_ymd();
        assert_eq!(today.len(), 10);
        assert!(NaiveDate::parse_from_str(&today, "%Y-%m-%d").is_ok());
    }
}
