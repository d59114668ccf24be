//! # solvent-formula
//!
//! Formula and expression evaluation for solvent.
//!
//! This crate provides two independent entry paths:
//! - Expression solving: parse and evaluate infix arithmetic with nested
//!   parentheses, unary signs and symbolic variables resolved from layered
//!   scopes ([`solve_formula`], [`solve_with_scope`]).
//! - Chained transforms: apply or reverse a space-delimited chain of
//!   single-token transforms over a numeric value ([`apply_chain`],
//!   [`reverse_chain`]).
//!
//! Every public operation is fail-soft: on failure it returns a sentinel
//! (`None` for solving and resolution, the unchanged input value for chain
//! application) instead of an error. The `try_` variants expose the typed
//! [`FormulaError`] for diagnostics.
//!
//! ## Example
//!
//! ```rust
//! use ahash::AHashMap;
//! use solvent_formula::{solve_formula, solve_with_scope, ScopeChain};
//!
//! assert_eq!(solve_formula("(2+3)*4").as_deref(), Some("20"));
//!
//! let mut vars = AHashMap::new();
//! vars.insert("A".to_string(), "0x10".to_string());
//! let scope = ScopeChain::new().with_scope(vars);
//! assert_eq!(solve_with_scope("A+1", &scope).as_deref(), Some("17"));
//! ```

pub mod ast;
pub mod brackets;
pub mod chain;
pub mod error;
pub mod eval;
pub mod parser;
pub mod resolve;
pub mod scope;
pub mod sign;

pub use ast::{BinaryOperator, Expr, UnaryOperator};
pub use brackets::resolve_brackets;
pub use chain::{
    apply_chain, apply_one, reverse_chain, reverse_one, try_apply_one, try_reverse_one,
};
pub use error::{FormulaError, FormulaResult};
pub use eval::{solve_formula, solve_with_scope, try_solve_formula, try_solve_with_scope};
pub use parser::parse_expression;
pub use resolve::{resolve_variables, try_resolve_variables};
pub use scope::ScopeChain;
pub use sign::normalize_signs;
