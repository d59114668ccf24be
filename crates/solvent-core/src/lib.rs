//! # solvent-core
//!
//! Collaborator services for the solvent expression engine:
//! - [`classify`] - text classification predicates (hex literals, identifiers,
//!   quoted text, date-times)
//! - [`convert`] - numeric and byte conversions (hex to decimal, quoted text
//!   to packed integers, date-times to epoch seconds)
//! - [`scan`] - balanced-substring scanning (delimiter reads, innermost
//!   bracket pairs)
//!
//! These services carry no state; every function is a pure computation over
//! its arguments.
//!
//! ## Example
//!
//! ```rust
//! use solvent_core::{classify, convert};
//!
//! assert!(classify::is_hex("0x1F"));
//! assert_eq!(convert::hex_to_decimal_string("0x1F").unwrap(), "31");
//! ```

pub mod classify;
pub mod convert;
pub mod error;
pub mod scan;

// Re-exports for convenience
pub use classify::{DateTimeMode, DateTimeStyle, OPERATOR_CHARS};
pub use error::{Error, Result};

/// The fixed reference epoch for date-time numeric encoding: 1957-12-31T23:59:25.
///
/// Date-times are encoded as whole seconds elapsed since this instant
/// ("TAI-seconds").
pub const REFERENCE_EPOCH: (i32, u32, u32, u32, u32, u32) = (1957, 12, 31, 23, 59, 25);
