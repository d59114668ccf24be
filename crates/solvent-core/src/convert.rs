//! Numeric and byte conversions
//!
//! Conversions between the textual value forms the engine accepts
//! (hexadecimal literals, quoted text, date-times) and decimal numerals.

use crate::classify::{self, DateTimeStyle};
use crate::error::{Error, Result};
use crate::REFERENCE_EPOCH;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Convert a hexadecimal literal (`0x...`) to its decimal numeral string.
///
/// # Example
/// ```rust
/// use solvent_core::convert::hex_to_decimal_string;
///
/// assert_eq!(hex_to_decimal_string("0x10").unwrap(), "16");
/// ```
pub fn hex_to_decimal_string(s: &str) -> Result<String> {
    if !classify::is_hex(s) {
        return Err(Error::InvalidHex(s.to_string()));
    }
    let digits = &s[2..];
    let value = u64::from_str_radix(digits, 16).map_err(|_| Error::InvalidHex(s.to_string()))?;
    Ok(value.to_string())
}

/// Pack quoted text into a big-endian `u32` accumulator and render it as a
/// decimal numeral string.
///
/// Each character contributes its low byte: `acc = (acc << 8) | byte`.
/// Strings longer than four characters overflow silently, the high bytes
/// being shifted out, matching fixed-width native arithmetic.
pub fn quoted_text_to_packed_integer_string(s: &str) -> Result<String> {
    if !classify::is_quoted_text(s) {
        return Err(Error::NotQuotedText(s.to_string()));
    }
    let inner = &s[1..s.len() - 1];
    let mut acc: u32 = 0;
    for c in inner.chars() {
        acc = (acc << 8) | (c as u32 & 0xFF);
    }
    Ok(acc.to_string())
}

/// Convert a date-time string to whole seconds since the reference epoch
/// 1957-12-31T23:59:25.
///
/// Accepts the full date-time pattern of `style`, or a bare date taken at
/// midnight. Instants before the epoch are an error, as are instants too far
/// past it to fit in a `u32`.
pub fn date_time_to_epoch_seconds(s: &str, style: DateTimeStyle) -> Result<u32> {
    let s = s.trim();
    let (full_fmt, compact_fmt, date_fmt) = match style {
        DateTimeStyle::Java => ("%Y-%m-%d %H:%M:%S", "%Y-%m-%d%H:%M:%S", "%Y-%m-%d"),
        DateTimeStyle::Slashed => ("%d/%m/%Y %H:%M:%S", "%d/%m/%Y%H:%M:%S", "%d/%m/%Y"),
    };

    let parsed = NaiveDateTime::parse_from_str(s, full_fmt)
        .or_else(|_| NaiveDateTime::parse_from_str(s, compact_fmt))
        .or_else(|_| NaiveDate::parse_from_str(s, date_fmt).map(|d| d.and_time(NaiveTime::MIN)))
        .map_err(|_| Error::InvalidDateTime(s.to_string()))?;

    let seconds = (parsed - reference_epoch()).num_seconds();
    if seconds < 0 {
        return Err(Error::PreEpochDateTime(s.to_string()));
    }
    u32::try_from(seconds).map_err(|_| Error::EpochOverflow(s.to_string()))
}

/// Strip every whitespace character (spaces, tabs, newlines, carriage
/// returns), not just the ends.
pub fn trim_normalize(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Integer modulo over doubles: truncate both operands to `i64`, then `%`.
///
/// A zero divisor and negative operands are errors; the engine treats both
/// as arithmetic failures.
pub fn truncating_modulo(a: f64, b: f64) -> Result<i64> {
    let lhs = a.trunc() as i64;
    let rhs = b.trunc() as i64;
    if rhs == 0 {
        return Err(Error::ZeroModulus);
    }
    if lhs < 0 {
        return Err(Error::NegativeModuloOperand(lhs));
    }
    if rhs < 0 {
        return Err(Error::NegativeModuloOperand(rhs));
    }
    Ok(lhs % rhs)
}

fn reference_epoch() -> NaiveDateTime {
    let (y, mo, d, h, mi, s) = REFERENCE_EPOCH;
    NaiveDate::from_ymd_opt(y, mo, d)
        .and_then(|date| date.and_hms_opt(h, mi, s))
        .expect("reference epoch is a valid instant")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hex_to_decimal() {
        assert_eq!(hex_to_decimal_string("0x10").unwrap(), "16");
        assert_eq!(hex_to_decimal_string("0XFF").unwrap(), "255");
        assert_eq!(hex_to_decimal_string("0x0").unwrap(), "0");
        assert!(hex_to_decimal_string("10").is_err());
        assert!(hex_to_decimal_string("0xZZ").is_err());
    }

    #[test]
    fn test_quoted_text_packing() {
        // 'A' = 65
        assert_eq!(quoted_text_to_packed_integer_string("\"A\"").unwrap(), "65");
        // (65 << 8) | 66 = 16706
        assert_eq!(
            quoted_text_to_packed_integer_string("\"AB\"").unwrap(),
            "16706"
        );
        assert_eq!(quoted_text_to_packed_integer_string("\"\"").unwrap(), "0");
        assert!(quoted_text_to_packed_integer_string("AB").is_err());
    }

    #[test]
    fn test_quoted_text_packing_overflows_silently() {
        // Five characters: the first byte is shifted out of the u32.
        let five = quoted_text_to_packed_integer_string("\"ABCDE\"").unwrap();
        let four = quoted_text_to_packed_integer_string("\"BCDE\"").unwrap();
        assert_eq!(five, four);
    }

    #[test]
    fn test_date_time_to_epoch_seconds() {
        // One minute past the epoch: 23:59:25 + 35s reaches midnight, +25s more.
        assert_eq!(
            date_time_to_epoch_seconds("1958-01-01 00:00:25", DateTimeStyle::Java).unwrap(),
            60
        );
        assert_eq!(
            date_time_to_epoch_seconds("31/12/1957 23:59:25", DateTimeStyle::Slashed).unwrap(),
            0
        );
        // Whitespace-stripped form converts identically.
        assert_eq!(
            date_time_to_epoch_seconds("1958-01-0100:00:25", DateTimeStyle::Java).unwrap(),
            60
        );
        // Date-only input is taken at midnight.
        assert_eq!(
            date_time_to_epoch_seconds("1958-01-01", DateTimeStyle::Java).unwrap(),
            35
        );
        assert!(date_time_to_epoch_seconds("1957-01-01 00:00:00", DateTimeStyle::Java).is_err());
        assert!(date_time_to_epoch_seconds("not a date", DateTimeStyle::Java).is_err());
    }

    #[test]
    fn test_trim_normalize() {
        assert_eq!(trim_normalize(" 1 +\t2\n"), "1+2");
        assert_eq!(trim_normalize("abc"), "abc");
        assert_eq!(trim_normalize(" \r\n\t "), "");
    }

    #[test]
    fn test_truncating_modulo() {
        assert_eq!(truncating_modulo(10.0, 3.0).unwrap(), 1);
        assert_eq!(truncating_modulo(10.9, 3.9).unwrap(), 1);
        assert!(truncating_modulo(10.0, 0.0).is_err());
        assert!(truncating_modulo(-10.0, 3.0).is_err());
        assert!(truncating_modulo(10.0, -3.0).is_err());
    }
}
