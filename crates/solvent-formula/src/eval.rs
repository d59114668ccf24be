//! Expression evaluator
//!
//! Walks a parsed [`Expr`] tree and produces a numeral string. All
//! computation is double-precision except modulo, which truncates both
//! operands to 64-bit integers.

use crate::ast::{BinaryOperator, Expr, UnaryOperator};
use crate::brackets::resolve_brackets;
use crate::error::{FormulaError, FormulaResult};
use crate::parser::parse_expression;
use crate::resolve::try_resolve_variables;
use crate::scope::ScopeChain;
use crate::sign::normalize_signs;
use solvent_core::convert;

/// Solve an infix arithmetic expression, returning its value as a numeral
/// string, or `None` on any failure.
///
/// This is the fail-soft surface; [`try_solve_formula`] reports the typed
/// error instead.
///
/// # Example
/// ```rust
/// use solvent_formula::solve_formula;
///
/// assert_eq!(solve_formula("2+3*4").as_deref(), Some("14"));
/// assert_eq!(solve_formula("(2+3)*4").as_deref(), Some("20"));
/// assert_eq!(solve_formula("(2+3"), None);
/// ```
pub fn solve_formula(expr: &str) -> Option<String> {
    match try_solve_formula(expr) {
        Ok(result) => Some(result),
        Err(err) => {
            tracing::debug!("formula solve failed for {expr:?}: {err}");
            None
        }
    }
}

/// Solve an expression, reporting failures as typed errors.
///
/// Parenthesized groups are solved innermost-first and substituted back as
/// text before the remaining bracket-free expression is parsed, so the sign
/// of a negative group result rebinds at the additive level: `(-4)^2` is
/// `-16`. Unmatched brackets fall through to the parser, which rejects them.
pub fn try_solve_formula(expr: &str) -> FormulaResult<String> {
    let normalized = normalize_signs(expr);
    let flat = resolve_brackets(&normalized)?;
    let ast = parse_expression(&flat)?;
    let value = evaluate(&ast)?;
    Ok(format_numeral(value))
}

/// Resolve variables against `scope`, then solve. `None` on any failure.
pub fn solve_with_scope(expr: &str, scope: &ScopeChain) -> Option<String> {
    match try_solve_with_scope(expr, scope) {
        Ok(result) => Some(result),
        Err(err) => {
            tracing::debug!("scoped solve failed for {expr:?}: {err}");
            None
        }
    }
}

/// Resolve-then-solve, reporting failures as typed errors.
pub fn try_solve_with_scope(expr: &str, scope: &ScopeChain) -> FormulaResult<String> {
    let resolved = try_resolve_variables(expr, scope)?;
    tracing::trace!("resolved {expr:?} to {resolved:?}");
    try_solve_formula(&resolved)
}

/// Evaluate an expression tree.
pub(crate) fn evaluate(expr: &Expr) -> FormulaResult<f64> {
    match expr {
        Expr::Number(n) => Ok(*n),

        Expr::UnaryOp { op, operand } => {
            let value = evaluate(operand)?;
            match op {
                UnaryOperator::Negate => Ok(-value),
            }
        }

        Expr::BinaryOp { op, left, right } => {
            let lhs = evaluate(left)?;
            let rhs = evaluate(right)?;

            let result = match op {
                BinaryOperator::Add => lhs + rhs,
                BinaryOperator::Subtract => lhs - rhs,
                BinaryOperator::Multiply => lhs * rhs,
                BinaryOperator::Divide => lhs / rhs,
                BinaryOperator::Power => lhs.powf(rhs),
                BinaryOperator::Modulo => convert::truncating_modulo(lhs, rhs)
                    .map_err(|e| FormulaError::Arithmetic(e.to_string()))?
                    as f64,
            };

            if result.is_finite() {
                Ok(result)
            } else {
                Err(FormulaError::Arithmetic(format!(
                    "Non-finite result from {:?}",
                    op
                )))
            }
        }
    }
}

/// Render a value as a numeral string: integral values print without a
/// fractional part, everything else through the default float formatter.
pub(crate) fn format_numeral(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}
