//! # quotient-fraction
//!
//! Exact rational arithmetic over machine integers.
//!
//! This crate provides:
//! - A reduced fraction value type (`Fraction`)
//! - Checked arithmetic returning `FractionError` on invalid input
//! - Dynamically typed operands (`Operand`) for callers driven by text
//!
//! ## Canonical form
//!
//! Every `Fraction` is stored in lowest terms with a positive denominator,
//! so two fractions are equal exactly when their fields are equal.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arithmetic;
pub mod error;
pub mod fraction;
pub mod operand;
pub mod parse;

#[cfg(test)]
mod proptests;

pub use error::{FractionError, Result};
pub use fraction::Fraction;
pub use operand::{evaluate, BinaryOp, Operand, Value};
