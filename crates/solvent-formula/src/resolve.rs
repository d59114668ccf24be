//! Variable resolution
//!
//! Substitutes symbolic tokens in an expression with decimal numerals before
//! parsing: variables are looked up in a caller-supplied [`ScopeChain`],
//! hexadecimal values convert to decimal, quoted text packs into a 32-bit
//! accumulator, and a whole-string date-time converts to epoch seconds.
//!
//! Resolution is all-or-nothing: any conversion failure aborts the pass, and
//! the fail-soft surface reports `None` rather than a partially substituted
//! string. A variable missing from every scope is not a failure - the token
//! is left untouched and the parser reports it later.
//!
//! Substitution is raw text replacement of every occurrence of the token's
//! spelling. A variable whose name also appears inside another token is
//! rewritten there too: with `x = 2`, the expression `x+0x10` becomes
//! `2+0210`. Callers pick variable names that do not collide with literal
//! spellings.

use crate::error::{FormulaError, FormulaResult};
use crate::parser::{tokenize, Token};
use crate::scope::ScopeChain;
use solvent_core::classify::{self, DateTimeMode, DateTimeStyle};
use solvent_core::{convert, scan};

/// Resolve every symbolic token in `expr` against `scope`, returning the
/// substituted expression, or `None` on any failure.
///
/// # Example
/// ```rust
/// use ahash::AHashMap;
/// use solvent_formula::{resolve_variables, ScopeChain};
///
/// let mut vars = AHashMap::new();
/// vars.insert("A".to_string(), "0x10".to_string());
/// let scope = ScopeChain::new().with_scope(vars);
///
/// assert_eq!(resolve_variables("A+1", &scope).as_deref(), Some("16+1"));
/// ```
pub fn resolve_variables(expr: &str, scope: &ScopeChain) -> Option<String> {
    match try_resolve_variables(expr, scope) {
        Ok(resolved) => Some(resolved),
        Err(err) => {
            tracing::debug!("variable resolution failed for {expr:?}: {err}");
            None
        }
    }
}

/// Resolve symbolic tokens, reporting failures as typed errors.
pub fn try_resolve_variables(expr: &str, scope: &ScopeChain) -> FormulaResult<String> {
    // Strip all whitespace, then keep only the first statement.
    let stripped = convert::trim_normalize(expr);
    let statement = scan::read_until(&stripped, ';');

    // A bare date-time literal has nothing to resolve; convert it directly.
    if classify::is_date_time(statement, DateTimeStyle::Java, DateTimeMode::Strict) {
        return epoch_seconds_text(statement);
    }

    let tokens = tokenize(statement)?;
    let mut out = statement.to_string();

    for token in &tokens {
        match token {
            Token::Variable(name) => {
                let value = match scope.lookup(name) {
                    Some(value) => value,
                    None => continue, // Unknown symbol: leave the token alone
                };
                let replacement = if classify::is_hex(value) {
                    convert::hex_to_decimal_string(value)
                        .map_err(|e| FormulaError::Parse(e.to_string()))?
                } else if classify::is_quoted_text(value) {
                    convert::quoted_text_to_packed_integer_string(value)
                        .map_err(|e| FormulaError::Parse(e.to_string()))?
                } else {
                    value.to_string()
                };
                out = out.replace(name.as_str(), &replacement);
            }

            Token::QuotedText(inner) => {
                let raw = format!("\"{}\"", inner);
                let packed = convert::quoted_text_to_packed_integer_string(&raw)
                    .map_err(|e| FormulaError::Parse(e.to_string()))?;
                out = out.replace(&raw, &packed);
            }

            Token::Hex(raw) => {
                let decimal = convert::hex_to_decimal_string(raw)
                    .map_err(|e| FormulaError::Parse(e.to_string()))?;
                out = out.replace(raw.as_str(), &decimal);
            }

            _ => {}
        }
    }

    // A substitution may have produced a date-time; the whole string converts
    // as one value.
    if classify::is_date_time(&out, DateTimeStyle::Java, DateTimeMode::Strict) {
        return epoch_seconds_text(&out);
    }

    Ok(out)
}

fn epoch_seconds_text(s: &str) -> FormulaResult<String> {
    convert::date_time_to_epoch_seconds(s, DateTimeStyle::Java)
        .map(|secs| secs.to_string())
        .map_err(|e| FormulaError::Parse(e.to_string()))
}
