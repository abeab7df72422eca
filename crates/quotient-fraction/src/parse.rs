//! Parsing fractions from text.
//!
//! Accepted forms are `"<int>"` and `"<int>/<int>"`, with whitespace allowed
//! around each part.

use std::num::IntErrorKind;
use std::str::FromStr;

use crate::error::{FractionError, Result};
use crate::fraction::Fraction;

impl FromStr for Fraction {
    type Err = FractionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('/') {
            Some((numerator, denominator)) => {
                Self::new(parse_integer(numerator)?, parse_integer(denominator)?)
            }
            None => Ok(Self::from_integer(parse_integer(s)?)),
        }
    }
}

/// Parses one side of a fraction.
///
/// Anything that is not an integer literal (`"1.5"`, `"true"`, `""`) is an
/// [`FractionError::InvalidArgumentType`]; an integer literal outside the
/// `i64` range is an [`FractionError::Overflow`].
pub(crate) fn parse_integer(part: &str) -> Result<i64> {
    let part = part.trim();
    part.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => FractionError::Overflow,
        _ => FractionError::InvalidArgumentType(part.to_string()),
    })
}
