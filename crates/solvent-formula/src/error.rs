//! Formula error types
//!
//! The public entry points keep the engine's fail-soft contract (a sentinel
//! instead of an error); these types back the `try_` variants so call sites
//! and tests can tell a deliberate no-op from a genuine failure.

use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur during formula parsing or evaluation
#[derive(Debug, Error)]
pub enum FormulaError {
    /// Malformed numeral, operator token or expression structure
    #[error("Parse error: {0}")]
    Parse(String),

    /// A symbol survived resolution and reached the parser
    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),

    /// Division, modulo or overflow failure
    #[error("Arithmetic error: {0}")]
    Arithmetic(String),

    /// Unmatched parenthesis
    #[error("Unbalanced bracket in: {0}")]
    UnbalancedBracket(String),
}
