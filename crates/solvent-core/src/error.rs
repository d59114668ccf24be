//! Error types for solvent-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in solvent-core
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed hexadecimal literal
    #[error("Invalid hexadecimal literal: {0}")]
    InvalidHex(String),

    /// Input was expected to be quoted text but is not
    #[error("Not a quoted text value: {0}")]
    NotQuotedText(String),

    /// Date-time string did not match any accepted pattern
    #[error("Invalid date-time: {0}")]
    InvalidDateTime(String),

    /// Date-time precedes the reference epoch
    #[error("Date-time precedes the reference epoch: {0}")]
    PreEpochDateTime(String),

    /// Date-time is too far past the reference epoch to encode
    #[error("Date-time out of encodable range: {0}")]
    EpochOverflow(String),

    /// Modulo with a zero divisor
    #[error("Modulo divisor is zero")]
    ZeroModulus,

    /// Modulo with a negative operand (unsupported)
    #[error("Negative modulo operand: {0}")]
    NegativeModuloOperand(i64),
}
