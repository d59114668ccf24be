//! Sign normalization
//!
//! Collapses doubled and mixed leading-sign sequences into canonical
//! single-sign form. Substitution can create these: resolving `A` to `-5`
//! inside `2+A` yields `2+-5`, which normalizes to `2-5`.

/// Rewrite `++`/`--` to `+` and `+-`/`-+` to `-`, repeatedly, until the
/// string stops changing.
pub fn normalize_signs(s: &str) -> String {
    let mut out = s.to_string();
    loop {
        let next = out
            .replace("++", "+")
            .replace("--", "+")
            .replace("+-", "-")
            .replace("-+", "-");
        if next == out {
            return out;
        }
        out = next;
    }
}
