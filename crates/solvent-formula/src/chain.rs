//! Chained formula application
//!
//! Applies and reverses single-token transforms (`+N`, `-N`, `*N`, `/N`,
//! `%N`, `^N`, `sqrt`) and space-delimited chains of them to a numeric value.
//!
//! The public functions are fail-soft: a malformed token or an arithmetic
//! failure leaves the value unchanged, and chain processing continues with
//! the remaining tokens. The `try_` variants report the typed error.

use crate::error::{FormulaError, FormulaResult};
use solvent_core::convert;

/// Apply one formula token to `value`. On any failure the value is returned
/// unchanged.
///
/// # Example
/// ```rust
/// use solvent_formula::apply_one;
///
/// assert_eq!(apply_one(10.0, "+5"), 15.0);
/// assert_eq!(apply_one(16.0, "sqrt"), 4.0);
/// assert_eq!(apply_one(10.0, "bogus"), 10.0);
/// ```
pub fn apply_one(value: f64, token: &str) -> f64 {
    soften(value, token, try_apply_one(value, token))
}

/// Apply one token, reporting failures as typed errors.
pub fn try_apply_one(value: f64, token: &str) -> FormulaResult<f64> {
    let (op, operand) = split_token(token)?;
    let result = match op {
        Op::Add => value + operand,
        Op::Subtract => value - operand,
        Op::Multiply => value * operand,
        Op::Divide => value / operand,
        Op::Modulo => convert::truncating_modulo(value, operand)
            .map_err(|e| FormulaError::Arithmetic(e.to_string()))? as f64,
        Op::Power => value.powf(operand),
        Op::Sqrt => value.sqrt(),
    };
    check_finite(result)
}

/// Apply a space-delimited chain of tokens left-to-right. A failing step
/// leaves the running value unchanged and processing continues.
///
/// # Example
/// ```rust
/// use solvent_formula::apply_chain;
///
/// assert_eq!(apply_chain(10.0, "+5 *2"), 30.0);
/// ```
pub fn apply_chain(value: f64, chain: &str) -> f64 {
    chain
        .split_whitespace()
        .fold(value, |acc, token| apply_one(acc, token))
}

/// Reverse one formula token: the operator is inverted (`+` subtracts, `*`
/// divides, `^N` takes the `N`-th root, `sqrt` squares; `%` reapplies by
/// convention). On any failure the value is returned unchanged.
pub fn reverse_one(value: f64, token: &str) -> f64 {
    soften(value, token, try_reverse_one(value, token))
}

/// Reverse one token, reporting failures as typed errors.
pub fn try_reverse_one(value: f64, token: &str) -> FormulaResult<f64> {
    let (op, operand) = split_token(token)?;
    let result = match op {
        Op::Add => value - operand,
        Op::Subtract => value + operand,
        Op::Multiply => value / operand,
        Op::Divide => value * operand,
        // Modulo is lossy; reversing it reapplies the operation by convention.
        Op::Modulo => convert::truncating_modulo(value, operand)
            .map_err(|e| FormulaError::Arithmetic(e.to_string()))? as f64,
        Op::Power => value.powf(1.0 / operand),
        Op::Sqrt => value * value,
    };
    check_finite(result)
}

/// Reverse a chain: tokens are undone right-to-left.
///
/// For chains without `%` this inverts [`apply_chain`] up to floating
/// precision: `reverse_chain(apply_chain(v, f), f) == v`.
pub fn reverse_chain(value: f64, chain: &str) -> f64 {
    chain
        .split_whitespace()
        .rev()
        .fold(value, |acc, token| reverse_one(acc, token))
}

/// A formula token's operator
enum Op {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
    Sqrt,
}

/// Split a token into operator and operand. `sqrt` stands alone; everything
/// else is one operator character followed by a numeral.
fn split_token(token: &str) -> FormulaResult<(Op, f64)> {
    let token = token.trim();
    if token.eq_ignore_ascii_case("sqrt") {
        // The operand is unused for sqrt.
        return Ok((Op::Sqrt, 0.0));
    }

    let op_char = token
        .chars()
        .next()
        .ok_or_else(|| FormulaError::Parse("Empty formula token".into()))?;

    let op = match op_char {
        '+' => Op::Add,
        '-' => Op::Subtract,
        '*' | 'x' | 'X' => Op::Multiply,
        '/' => Op::Divide,
        '%' => Op::Modulo,
        '^' => Op::Power,
        c => {
            return Err(FormulaError::Parse(format!(
                "Unknown formula operator: '{}'",
                c
            )))
        }
    };

    let operand: f64 = token[op_char.len_utf8()..]
        .parse()
        .map_err(|_| FormulaError::Parse(format!("Malformed formula token: '{}'", token)))?;

    Ok((op, operand))
}

fn check_finite(result: f64) -> FormulaResult<f64> {
    if result.is_finite() {
        Ok(result)
    } else {
        Err(FormulaError::Arithmetic("Non-finite result".into()))
    }
}

fn soften(value: f64, token: &str, attempt: FormulaResult<f64>) -> f64 {
    match attempt {
        Ok(result) => result,
        Err(err) => {
            tracing::trace!("formula token {token:?} left value unchanged: {err}");
            value
        }
    }
}
