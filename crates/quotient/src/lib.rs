//! # Quotient
//!
//! Exact rational arithmetic for Rust.
//!
//! Quotient provides a reduced fraction type with exact arithmetic, a total
//! order computed without floating point, and runtime-typed operands for
//! callers that read expressions from text.
//!
//! ## Features
//!
//! - **Canonical Form**: lowest terms, positive denominator, zero as `0/1`
//! - **Checked Arithmetic**: every operation reports overflow and division
//!   by zero as a `FractionError`
//! - **Exact Ordering**: cross-multiplication in 128-bit intermediates
//! - **Text Input**: `FromStr` for fractions and a small expression evaluator
//!
//! ## Quick Start
//!
//! ```rust
//! use quotient::prelude::*;
//!
//! let half = Fraction::new(1, 2)?;
//! let third = Fraction::new(1, 3)?;
//! assert_eq!((half + third).to_string(), "5/6");
//! assert_eq!(Fraction::new(5, 2)?.to_mixed_string(), "2 and 1/2");
//! assert_eq!(half.checked_div(&Fraction::ZERO), Err(FractionError::DivisionByZero));
//! # Ok::<(), FractionError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use quotient_fraction as fraction;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use quotient_fraction::{evaluate, BinaryOp, Fraction, FractionError, Operand, Value};
}
