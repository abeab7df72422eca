//! Errors raised by fraction construction and arithmetic.

use thiserror::Error;

/// Errors that can occur when building or combining fractions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FractionError {
    /// The denominator was zero.
    #[error("denominator cannot be zero")]
    InvalidDenominator,

    /// A numerator or denominator was not an integer.
    #[error("numerator and denominator must be integers, got `{0}`")]
    InvalidArgumentType(String),

    /// A binary operator received an operand of the wrong kind.
    #[error("cannot apply `{op}` to an operand of type {found}")]
    InvalidOperandType {
        /// Symbol of the rejected operator.
        op: &'static str,
        /// Kind of the offending operand.
        found: &'static str,
    },

    /// Division by a zero fraction, or a negative power of zero.
    #[error("cannot divide by a fraction with numerator zero")]
    DivisionByZero,

    /// The reduced result does not fit in 64 bits.
    #[error("result does not fit in a 64-bit integer")]
    Overflow,

    /// An expression line could not be split into `lhs op rhs`.
    #[error("expected `<lhs> <op> <rhs>`, got `{0}`")]
    InvalidExpression(String),

    /// An operator symbol was not recognized.
    #[error("unknown operator `{0}`")]
    UnknownOperator(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FractionError>;
