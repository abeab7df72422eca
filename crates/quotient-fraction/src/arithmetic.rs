//! Arithmetic on fractions.
//!
//! The `checked_*` methods are the primary API and report failures as
//! [`FractionError`]. The operator traits wrap them and panic on failure,
//! the same way integer division panics on a zero divisor.
//!
//! Only addition accepts a bare integer on the right-hand side.

use std::iter::{Product, Sum};
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::{FractionError, Result};
use crate::fraction::Fraction;

impl Fraction {
    /// Widened parts `(a, b, c, d)` of `self = a/b` and `rhs = c/d`.
    fn wide_parts(&self, rhs: &Self) -> (i128, i128, i128, i128) {
        (
            i128::from(self.numerator()),
            i128::from(self.denominator()),
            i128::from(rhs.numerator()),
            i128::from(rhs.denominator()),
        )
    }

    /// Returns `self + rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::Overflow`] if the sum cannot be represented.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self> {
        let (a, b, c, d) = self.wide_parts(rhs);
        let numerator = (a * d)
            .checked_add(c * b)
            .ok_or(FractionError::Overflow)?;
        Self::from_wide(numerator, b * d)
    }

    /// Returns `self + n`, treating `n` as `n/1`.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::Overflow`] if the sum cannot be represented.
    pub fn checked_add_integer(&self, n: i64) -> Result<Self> {
        self.checked_add(&Self::from_integer(n))
    }

    /// Returns `self - rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::Overflow`] if the difference cannot be
    /// represented.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self> {
        let (a, b, c, d) = self.wide_parts(rhs);
        let numerator = (a * d)
            .checked_sub(c * b)
            .ok_or(FractionError::Overflow)?;
        Self::from_wide(numerator, b * d)
    }

    /// Returns `self * rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::Overflow`] if the product cannot be
    /// represented.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self> {
        let (a, b, c, d) = self.wide_parts(rhs);
        Self::from_wide(a * c, b * d)
    }

    /// Returns `self / rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::DivisionByZero`] if `rhs` is zero and
    /// [`FractionError::Overflow`] if the quotient cannot be represented.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        let (a, b, c, d) = self.wide_parts(rhs);
        Self::from_wide(a * d, b * c)
    }

    /// Raises `self` to an integer power. Negative exponents invert first.
    ///
    /// Bases `0`, `1` and `-1` accept any exponent.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::DivisionByZero`] for a negative power of
    /// zero and [`FractionError::Overflow`] if the result cannot be
    /// represented.
    pub fn checked_pow(&self, exp: i64) -> Result<Self> {
        let (base_numerator, base_denominator) = if exp >= 0 {
            (self.numerator(), self.denominator())
        } else if self.is_zero() {
            return Err(FractionError::DivisionByZero);
        } else {
            (self.denominator(), self.numerator())
        };

        let magnitude = exp.unsigned_abs();
        if base_denominator.unsigned_abs() == 1 && base_numerator.unsigned_abs() <= 1 {
            let base = base_numerator * base_denominator;
            let value = match (base, magnitude) {
                (_, 0) => 1,
                (-1, m) if m % 2 == 0 => 1,
                (b, _) => b,
            };
            return Ok(Self::from_integer(value));
        }

        // Any other base overflows long before the exponent leaves `u32`.
        let magnitude = u32::try_from(magnitude).map_err(|_| FractionError::Overflow)?;
        let numerator = i128::from(base_numerator)
            .checked_pow(magnitude)
            .ok_or(FractionError::Overflow)?;
        let denominator = i128::from(base_denominator)
            .checked_pow(magnitude)
            .ok_or(FractionError::Overflow)?;
        Self::from_wide(numerator, denominator)
    }

    /// Returns `-self`.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::Overflow`] for a numerator of `i64::MIN`.
    pub fn checked_neg(&self) -> Result<Self> {
        Self::from_wide(
            -i128::from(self.numerator()),
            i128::from(self.denominator()),
        )
    }

    /// Returns `|self|`.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::Overflow`] for a numerator of `i64::MIN`.
    pub fn checked_abs(&self) -> Result<Self> {
        Self::from_wide(
            i128::from(self.numerator()).abs(),
            i128::from(self.denominator()),
        )
    }

    /// Returns `1/self`.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::DivisionByZero`] if `self` is zero.
    pub fn recip(&self) -> Result<Self> {
        Self::ONE.checked_div(self)
    }

    /// Returns the absolute value.
    ///
    /// # Panics
    ///
    /// Panics if the numerator is `i64::MIN`.
    #[must_use]
    pub fn abs(&self) -> Self {
        unwrap_value(self.checked_abs())
    }

    /// Raises `self` to an integer power.
    ///
    /// # Panics
    ///
    /// Panics on a negative power of zero or if the result overflows.
    #[must_use]
    pub fn pow(&self, exp: i64) -> Self {
        unwrap_value(self.checked_pow(exp))
    }
}

#[track_caller]
fn unwrap_value(result: Result<Fraction>) -> Fraction {
    match result {
        Ok(value) => value,
        Err(err) => panic!("fraction arithmetic failed: {err}"),
    }
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl $trait for Fraction {
            type Output = Self;

            #[track_caller]
            fn $method(self, rhs: Self) -> Self::Output {
                unwrap_value(self.$checked(&rhs))
            }
        }

        impl $trait<&Fraction> for Fraction {
            type Output = Self;

            #[track_caller]
            fn $method(self, rhs: &Fraction) -> Self::Output {
                unwrap_value(self.$checked(rhs))
            }
        }

        impl $trait for &Fraction {
            type Output = Fraction;

            #[track_caller]
            fn $method(self, rhs: Self) -> Self::Output {
                unwrap_value(self.$checked(rhs))
            }
        }
    };
}

forward_binop!(Add, add, checked_add);
forward_binop!(Sub, sub, checked_sub);
forward_binop!(Mul, mul, checked_mul);
forward_binop!(Div, div, checked_div);

impl Add<i64> for Fraction {
    type Output = Self;

    #[track_caller]
    fn add(self, rhs: i64) -> Self::Output {
        unwrap_value(self.checked_add_integer(rhs))
    }
}

impl Neg for Fraction {
    type Output = Self;

    #[track_caller]
    fn neg(self) -> Self::Output {
        unwrap_value(self.checked_neg())
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    #[track_caller]
    fn neg(self) -> Self::Output {
        unwrap_value(self.checked_neg())
    }
}

/// # Panics
///
/// Panics if a partial sum overflows.
impl Sum for Fraction {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

/// # Panics
///
/// Panics if a partial sum overflows.
impl<'a> Sum<&'a Fraction> for Fraction {
    fn sum<I: Iterator<Item = &'a Fraction>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

/// # Panics
///
/// Panics if a partial product overflows.
impl Product for Fraction {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

/// # Panics
///
/// Panics if a partial product overflows.
impl<'a> Product<&'a Fraction> for Fraction {
    fn product<I: Iterator<Item = &'a Fraction>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}
