//! Formatting helpers
//!
//! Pure string transformations used by storefront views: currency and price
//! grouping, the fixed timestamp rendering, and Vietnamese-diacritic folding
//! for fallback avatars.

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Background color of generated fallback avatars
const FALLBACK_AVATAR_COLOR: &str = "#FF9966";

/// Formatting error type
#[derive(Debug, Error)]
pub enum FormatError {
    /// Input is not a number
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// Input is not a parseable timestamp
    #[error("Invalid date format: {0}")]
    InvalidDate(String),
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Format an integral amount with `.` thousand separators and no decimal
/// places: `1000000` becomes `"1.000.000"`.
pub fn format_currency(amount: i64) -> String {
    let grouped = group_thousands(&amount.unsigned_abs().to_string());
    if amount < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format a decimal amount, rounded to whole units, with `.` thousand
/// separators.
pub fn format_currency_decimal(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let grouped = group_thousands(&rounded.abs().to_string());
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Parse a numeric string and format it as currency. Non-numeric input is a
/// reportable error.
pub fn format_currency_str(input: &str) -> Result<String, FormatError> {
    let amount: Decimal = input
        .trim()
        .parse()
        .map_err(|_| FormatError::InvalidNumber(input.to_string()))?;
    Ok(format_currency_decimal(amount))
}

/// Group a price-input string for display. Fractional digits are dropped and
/// non-numeric input yields an empty string.
pub fn format_price_input(value: &str) -> String {
    let Ok(amount) = value.trim().parse::<Decimal>() else {
        return String::new();
    };
    if amount.is_zero() {
        return String::new();
    }
    let truncated = amount.trunc();
    let grouped = group_thousands(&truncated.abs().to_string());
    if truncated.is_sign_negative() {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Render a UTC instant as `HH:mm | DD/MM/YYYY`.
pub fn format_datetime(ts: DateTime<Utc>) -> String {
    ts.format("%H:%M | %d/%m/%Y").to_string()
}

/// Parse an RFC 3339 timestamp and render it as `HH:mm | DD/MM/YYYY`.
pub fn format_datetime_str(input: &str) -> Result<String, FormatError> {
    let ts = DateTime::parse_from_rfc3339(input)
        .map_err(|_| FormatError::InvalidDate(input.to_string()))?;
    Ok(format_datetime(ts.with_timezone(&Utc)))
}

/// Lower-case a string and strip Vietnamese diacritics (`"Đặng"` -> `"dang"`).
pub fn fold_vietnamese(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            'à' | 'á' | 'ạ' | 'ả' | 'ã' | 'â' | 'ầ' | 'ấ' | 'ậ' | 'ẩ' | 'ẫ' | 'ă' | 'ằ'
            | 'ắ' | 'ặ' | 'ẳ' | 'ẵ' => Some('a'),
            'è' | 'é' | 'ẹ' | 'ẻ' | 'ẽ' | 'ê' | 'ề' | 'ế' | 'ệ' | 'ể' | 'ễ' => Some('e'),
            'ì' | 'í' | 'ị' | 'ỉ' | 'ĩ' => Some('i'),
            'ò' | 'ó' | 'ọ' | 'ỏ' | 'õ' | 'ô' | 'ồ' | 'ố' | 'ộ' | 'ổ' | 'ỗ' | 'ơ' | 'ờ'
            | 'ớ' | 'ợ' | 'ở' | 'ỡ' => Some('o'),
            'ù' | 'ú' | 'ụ' | 'ủ' | 'ũ' | 'ư' | 'ừ' | 'ứ' | 'ự' | 'ử' | 'ữ' => Some('u'),
            'ỳ' | 'ý' | 'ỵ' | 'ỷ' | 'ỹ' => Some('y'),
            'đ' => Some('d'),
            // Combining tone and vowel marks left over from decomposed input
            '\u{0300}' | '\u{0301}' | '\u{0303}' | '\u{0309}' | '\u{0323}' | '\u{02C6}'
            | '\u{0306}' | '\u{031B}' => None,
            other => Some(other),
        })
        .collect()
}

/// Pick the single folded initial used on fallback avatars.
pub fn avatar_initial(fullname: &str) -> String {
    match fullname.chars().next() {
        Some(first) => fold_vietnamese(&first.to_uppercase().collect::<String>()),
        None => String::new(),
    }
}

/// Build an inline SVG fallback avatar (base64 data URL) from a display name.
pub fn fallback_avatar(fullname: &str) -> String {
    let initial = avatar_initial(fullname);
    let svg = format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="100%" height="100%" viewBox="0 0 100 100">
  <rect width="100%" height="100%" fill="{}" />
  <text x="50%" y="55%" dominant-baseline="middle" text-anchor="middle" fill="#ffffff" font-size="50">{}</text>
</svg>"##,
        FALLBACK_AVATAR_COLOR, initial
    );
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(1_000_000), "1.000.000");
        assert_eq!(format_currency(45_000), "45.000");
        assert_eq!(format_currency(999), "999");
        assert_eq!(format_currency(0), "0");
        assert_eq!(format_currency(-1_234_567), "-1.234.567");
    }

    #[test]
    fn test_format_currency_str() {
        assert_eq!(format_currency_str("1000000").unwrap(), "1.000.000");
        assert_eq!(format_currency_str("45000.4").unwrap(), "45.000");
        assert!(format_currency_str("not a number").is_err());
        assert!(format_currency_str("").is_err());
    }

    #[test]
    fn test_format_price_input() {
        assert_eq!(format_price_input("1234567"), "1.234.567");
        assert_eq!(format_price_input("1234567.89"), "1.234.567");
        assert_eq!(format_price_input("abc"), "");
        assert_eq!(format_price_input(""), "");
        assert_eq!(format_price_input("0"), "");
    }

    #[test]
    fn test_format_datetime_is_deterministic() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 7, 14, 5, 0).unwrap();
        assert_eq!(format_datetime(ts), "14:05 | 07/03/2024");

        assert_eq!(
            format_datetime_str("2024-03-07T14:05:00Z").unwrap(),
            "14:05 | 07/03/2024"
        );
        assert!(format_datetime_str("yesterday").is_err());
    }

    #[test]
    fn test_fold_vietnamese() {
        assert_eq!(fold_vietnamese("Đặng Văn Hùng"), "dang van hung");
        assert_eq!(fold_vietnamese("Phở Bò"), "pho bo");
        assert_eq!(fold_vietnamese("plain ascii"), "plain ascii");
    }

    #[test]
    fn test_avatar_initial() {
        assert_eq!(avatar_initial("Đặng Văn Hùng"), "d");
        assert_eq!(avatar_initial("An"), "a");
        assert_eq!(avatar_initial(""), "");
    }

    #[test]
    fn test_fallback_avatar_is_data_url() {
        let url = fallback_avatar("Đặng");
        assert!(url.starts_with("data:image/svg+xml;base64,"));

        let encoded = url.trim_start_matches("data:image/svg+xml;base64,");
        let svg = String::from_utf8(STANDARD.decode(encoded).unwrap()).unwrap();
        assert!(svg.contains(">d</text>"));
        assert!(svg.contains(FALLBACK_AVATAR_COLOR));
    }
}
