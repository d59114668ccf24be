//! Balanced-substring scanning
//!
//! Character-level helpers for pulling delimited spans out of a string:
//! reading up to a delimiter, and extracting the contents of the innermost
//! matched bracket pair.

/// Return the prefix of `s` up to (not including) the first occurrence of
/// `delim`, or the whole string if the delimiter never appears.
pub fn read_until(s: &str, delim: char) -> &str {
    match s.find(delim) {
        Some(pos) => &s[..pos],
        None => s,
    }
}

/// Return the contents of the innermost matched `open`/`close` pair:
/// the span between the most recent `open` and the first `close` after it.
///
/// Returns `None` when no complete pair exists - no brackets at all, an
/// `open` that never closes, or a stray `close` before any `open`.
pub fn read_innermost_same_depth(s: &str, open: char, close: char) -> Option<&str> {
    let mut last_open: Option<usize> = None;

    for (i, c) in s.char_indices() {
        if c == open {
            last_open = Some(i);
        } else if c == close {
            return last_open.map(|o| &s[o + open.len_utf8()..i]);
        }
    }

    None
}
