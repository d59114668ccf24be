//! Text classification predicates
//!
//! Small, pure predicates that decide what kind of value a piece of text
//! represents. The expression engine uses these to route tokens to the right
//! conversion before evaluation.

use chrono::{NaiveDate, NaiveDateTime};
use lazy_regex::regex_is_match;

/// The arithmetic operator characters recognized by the engine.
pub const OPERATOR_CHARS: [char; 6] = ['+', '-', '*', '/', '%', '^'];

/// Date-time textual style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeStyle {
    /// `yyyy-MM-dd HH:mm:ss`
    Java,
    /// `dd/MM/yyyy HH:mm:ss`
    Slashed,
}

/// Date-time matching strictness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeMode {
    /// Full date and time required
    Strict,
    /// Date-only input also accepted
    Lenient,
}

/// Check whether `s` is a hexadecimal literal (`0x` or `0X` prefix).
pub fn is_hex(s: &str) -> bool {
    regex_is_match!(r"^0[xX][0-9a-fA-F]+$", s)
}

/// Check whether `s` is a variable identifier: a letter or underscore
/// followed by letters, digits or underscores.
pub fn is_variable(s: &str) -> bool {
    regex_is_match!(r"^[A-Za-z_][A-Za-z0-9_]*$", s)
}

/// Check whether `s` is quoted text: surrounded by double quotes.
pub fn is_quoted_text(s: &str) -> bool {
    s.len() >= 2 && s.starts_with('"') && s.ends_with('"')
}

/// Check whether `c` is an arithmetic operator character.
pub fn is_operator(c: char) -> bool {
    OPERATOR_CHARS.contains(&c)
}

/// Check whether `s` is nonempty and consists of ASCII digits only.
pub fn is_digits_only(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Check whether `s` is an integer literal: an optional sign followed by digits.
pub fn is_integer(s: &str) -> bool {
    regex_is_match!(r"^[+-]?[0-9]+$", s)
}

/// Check whether `s` is a date-time in the given style.
///
/// The pattern gate is a regex; the candidate is then validated by actually
/// parsing it, so `2024-02-30 00:00:00` is rejected even though it matches
/// the shape. The separator between date and time may be a single space or
/// absent entirely (expression normalization strips whitespace). In
/// [`DateTimeMode::Lenient`] a date without a time component is also
/// accepted.
pub fn is_date_time(s: &str, style: DateTimeStyle, mode: DateTimeMode) -> bool {
    let s = s.trim();
    let full = match style {
        DateTimeStyle::Java => {
            regex_is_match!(r"^\d{4}-\d{2}-\d{2} ?\d{2}:\d{2}:\d{2}$", s)
                && (NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").is_ok()
                    || NaiveDateTime::parse_from_str(s, "%Y-%m-%d%H:%M:%S").is_ok())
        }
        DateTimeStyle::Slashed => {
            regex_is_match!(r"^\d{2}/\d{2}/\d{4} ?\d{2}:\d{2}:\d{2}$", s)
                && (NaiveDateTime::parse_from_str(s, "%d/%m/%Y %H:%M:%S").is_ok()
                    || NaiveDateTime::parse_from_str(s, "%d/%m/%Y%H:%M:%S").is_ok())
        }
    };

    if full || mode == DateTimeMode::Strict {
        return full;
    }

    match style {
        DateTimeStyle::Java => {
            regex_is_match!(r"^\d{4}-\d{2}-\d{2}$", s)
                && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
        }
        DateTimeStyle::Slashed => {
            regex_is_match!(r"^\d{2}/\d{2}/\d{4}$", s)
                && NaiveDate::parse_from_str(s, "%d/%m/%Y").is_ok()
        }
    }
}

/// Check whether `s` is the `now` keyword (case-insensitive, padding allowed).
pub fn is_valid_now_token(s: &str) -> bool {
    s.trim().eq_ignore_ascii_case("now")
}
