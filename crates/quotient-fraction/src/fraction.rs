//! Reduced fractions over 64-bit integers.
//!
//! This module holds the value type, its reducing constructor, ordering,
//! classification predicates and conversions. Arithmetic lives in
//! [`crate::arithmetic`].

use log::trace;
use num_integer::Integer as _;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{FractionError, Result};

/// An exact fraction in lowest terms.
///
/// The denominator is always positive and shares no factor with the
/// numerator; zero is stored as `0/1`.
#[derive(Clone, Copy)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    /// The fraction `0/1`.
    pub const ZERO: Self = Self {
        numerator: 0,
        denominator: 1,
    };

    /// The fraction `1/1`.
    pub const ONE: Self = Self {
        numerator: 1,
        denominator: 1,
    };

    /// Creates a fraction from a numerator and denominator, reducing it.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::InvalidDenominator`] if `denominator` is zero,
    /// and [`FractionError::Overflow`] if a reduced part does not fit in an
    /// `i64`. That takes an `i64::MIN` argument, as in `1 / i64::MIN`.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self> {
        Self::from_wide(i128::from(numerator), i128::from(denominator))
    }

    /// Creates the fraction `n/1`.
    #[must_use]
    pub const fn from_integer(n: i64) -> Self {
        Self {
            numerator: n,
            denominator: 1,
        }
    }

    /// Reduces a wide numerator/denominator pair.
    ///
    /// Every arithmetic result is built here.
    pub(crate) fn from_wide(numerator: i128, denominator: i128) -> Result<Self> {
        if denominator == 0 {
            return Err(FractionError::InvalidDenominator);
        }
        // `abs` of these has no i128 representation.
        if numerator == i128::MIN || denominator == i128::MIN {
            return Err(FractionError::Overflow);
        }

        // gcd(0, 0) never happens here, but 0/d must reduce to 0/1.
        let g = numerator.gcd(&denominator).max(1);
        let sign = denominator.signum();
        let reduced_numerator = numerator / g * sign;
        let reduced_denominator = denominator.abs() / g;

        if g != 1 || sign < 0 {
            trace!(
                "reduced {numerator}/{denominator} to {reduced_numerator}/{reduced_denominator}"
            );
        }

        Ok(Self {
            numerator: i64::try_from(reduced_numerator).map_err(|_| FractionError::Overflow)?,
            denominator: i64::try_from(reduced_denominator)
                .map_err(|_| FractionError::Overflow)?,
        })
    }

    /// Returns the numerator. Carries the sign of the fraction.
    #[must_use]
    pub const fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Returns the denominator. Always positive.
    #[must_use]
    pub const fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Returns `(numerator, denominator)`.
    #[must_use]
    pub const fn into_parts(self) -> (i64, i64) {
        (self.numerator, self.denominator)
    }

    /// Returns true if this fraction is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Returns true if the denominator divides the numerator exactly.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        self.numerator % self.denominator == 0
    }

    /// Returns true if the absolute value is strictly less than one.
    #[must_use]
    pub const fn is_proper(&self) -> bool {
        self.numerator.unsigned_abs() < self.denominator.unsigned_abs()
    }

    /// Returns true if the numerator is `1` or `-1`.
    #[must_use]
    pub const fn is_unit(&self) -> bool {
        self.numerator.unsigned_abs() == 1
    }

    /// Returns true if `|self - other|` is a unit fraction.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::Overflow`] if the difference cannot be
    /// represented.
    pub fn is_adjacent_to(&self, other: &Self) -> Result<bool> {
        let difference = self.checked_sub(other)?.checked_abs()?;
        Ok(difference.numerator == 1 && difference.denominator > 0)
    }

    /// Returns true if negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    /// Returns true if positive.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.numerator > 0
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub const fn signum(&self) -> i64 {
        self.numerator.signum()
    }

    /// Converts to the nearest `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Decimal value of the fraction. Same as [`Fraction::to_f64`].
    #[must_use]
    pub fn as_decimal(&self) -> f64 {
        self.to_f64()
    }

    /// Formats the fraction as a mixed number, e.g. `"2 and 1/2"`.
    ///
    /// The integer part is truncated toward zero; the remainder is printed
    /// without sign. Integers print as a bare number.
    #[must_use]
    pub fn to_mixed_string(&self) -> String {
        let integer_part = self.numerator / self.denominator;
        let remainder = (self.numerator % self.denominator).unsigned_abs();
        if remainder == 0 {
            integer_part.to_string()
        } else {
            format!("{integer_part} and {remainder}/{}", self.denominator)
        }
    }

    /// Cross products `(a*d, c*b)` for `self = a/b` and `other = c/d`.
    fn cross(&self, other: &Self) -> (i128, i128) {
        (
            i128::from(self.numerator) * i128::from(other.denominator),
            i128::from(other.numerator) * i128::from(self.denominator),
        )
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        let (lhs, rhs) = self.cross(other);
        lhs == rhs
    }
}

impl Eq for Fraction {}

// Consistent with `eq` since both sides are in lowest terms.
impl Hash for Fraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numerator.hash(state);
        self.denominator.hash(state);
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }

    fn lt(&self, other: &Self) -> bool {
        let (lhs, rhs) = self.cross(other);
        lhs < rhs
    }

    fn le(&self, other: &Self) -> bool {
        self.lt(other) || self.eq(other)
    }

    fn gt(&self, other: &Self) -> bool {
        !self.le(other)
    }

    fn ge(&self, other: &Self) -> bool {
        !self.lt(other)
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let (lhs, rhs) = self.cross(other);
        lhs.cmp(&rhs)
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

impl One for Fraction {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        *self == Self::ONE
    }
}

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction({self})")
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl From<i32> for Fraction {
    fn from(n: i32) -> Self {
        Self::from_integer(i64::from(n))
    }
}

impl TryFrom<(i64, i64)> for Fraction {
    type Error = FractionError;

    fn try_from((numerator, denominator): (i64, i64)) -> Result<Self> {
        Self::new(numerator, denominator)
    }
}

impl From<Fraction> for f64 {
    fn from(value: Fraction) -> Self {
        value.to_f64()
    }
}
