//! Bracket resolution
//!
//! Repeatedly extracts the innermost parenthesis pair, solves its contents,
//! and substitutes the resulting numeral back into the surrounding text.
//! Substitution is textual: a negative result leaves its minus sign loose in
//! the outer string, where it rebinds at the additive level on the next
//! pass - `(-4)^2` solves to `-16`, not `16`.
//!
//! Unmatched brackets are not detected here; the literal text falls through
//! to the parser, which reports them.

use crate::error::FormulaResult;
use crate::eval;
use crate::parser::parse_expression;
use crate::sign::normalize_signs;
use solvent_core::scan;

/// Replace every parenthesized group in `expr` with its solved numeral,
/// innermost pair first, returning the bracket-free expression text.
///
/// # Example
/// ```rust
/// use solvent_formula::resolve_brackets;
///
/// assert_eq!(resolve_brackets("(2+3)*4").unwrap(), "5*4");
/// assert_eq!(resolve_brackets("1-(3-5)").unwrap(), "1+2");
/// ```
pub fn resolve_brackets(expr: &str) -> FormulaResult<String> {
    let mut out = expr.to_string();

    while let Some(span) = scan::read_innermost_same_depth(&out, '(', ')') {
        let span = span.to_string();
        let solved = solve_flat(&span)?;
        let bracketed = format!("({})", span);
        tracing::trace!("bracket {bracketed:?} solved to {solved:?}");
        // A negative result detaches its sign into the outer text, where it
        // may meet another sign.
        out = normalize_signs(&out.replace(&bracketed, &solved));
    }

    Ok(out)
}

/// Solve a bracket-free span to a numeral string.
fn solve_flat(span: &str) -> FormulaResult<String> {
    let normalized = normalize_signs(span);
    let ast = parse_expression(&normalized)?;
    let value = eval::evaluate(&ast)?;
    Ok(eval::format_numeral(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_pair_substitutes() {
        assert_eq!(resolve_brackets("(2+3)*4").unwrap(), "5*4");
    }

    #[test]
    fn test_nested_pairs_resolve_innermost_first() {
        assert_eq!(resolve_brackets("((2+3)*(4-2))^2").unwrap(), "10^2");
        assert_eq!(resolve_brackets("((1+1))").unwrap(), "2");
    }

    #[test]
    fn test_negative_result_leaves_detached_sign() {
        assert_eq!(resolve_brackets("(-4)^2").unwrap(), "-4^2");
        assert_eq!(resolve_brackets("2*(3-5)^2").unwrap(), "2*-2^2");
    }

    #[test]
    fn test_detached_sign_normalizes_against_neighbor() {
        assert_eq!(resolve_brackets("1-(3-5)").unwrap(), "1+2");
        assert_eq!(resolve_brackets("1+(3-5)").unwrap(), "1-2");
    }

    #[test]
    fn test_repeated_group_replaced_everywhere() {
        assert_eq!(resolve_brackets("(1+2)*((1+2)+3)").unwrap(), "3*6");
    }

    #[test]
    fn test_unmatched_brackets_pass_through() {
        assert_eq!(resolve_brackets("(2+3").unwrap(), "(2+3");
        assert_eq!(resolve_brackets("2+3)").unwrap(), "2+3)");
    }

    #[test]
    fn test_failing_span_aborts() {
        assert!(resolve_brackets("()").is_err());
        assert!(resolve_brackets("(A+1)").is_err());
    }
}
