//! Dynamically typed operands.
//!
//! Text-driven callers do not know operand types up front. This module
//! checks them at runtime: addition accepts a fraction or an integer, the
//! other arithmetic and ordering operators accept only fractions, and
//! equality against anything that is not a fraction is simply `false`.

use log::debug;
use std::fmt;
use std::str::FromStr;

use crate::error::{FractionError, Result};
use crate::fraction::Fraction;
use crate::parse::parse_integer;

/// A right-hand operand whose type is only known at runtime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand {
    /// An exact fraction.
    Fraction(Fraction),
    /// A plain integer.
    Integer(i64),
    /// A floating-point number.
    Float(f64),
    /// A boolean.
    Boolean(bool),
}

impl Operand {
    /// Name of the operand's type, as used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Fraction(_) => "fraction",
            Operand::Integer(_) => "integer",
            Operand::Float(_) => "float",
            Operand::Boolean(_) => "boolean",
        }
    }

    /// Converts a fraction or integer operand to a fraction.
    ///
    /// # Errors
    ///
    /// Floats and booleans are not integers and fail with
    /// [`FractionError::InvalidArgumentType`].
    pub fn to_fraction(&self) -> Result<Fraction> {
        match *self {
            Operand::Fraction(f) => Ok(f),
            Operand::Integer(n) => Ok(Fraction::from_integer(n)),
            Operand::Float(x) => Err(FractionError::InvalidArgumentType(x.to_string())),
            Operand::Boolean(b) => Err(FractionError::InvalidArgumentType(b.to_string())),
        }
    }
}

impl From<Fraction> for Operand {
    fn from(f: Fraction) -> Self {
        Operand::Fraction(f)
    }
}

impl From<i64> for Operand {
    fn from(n: i64) -> Self {
        Operand::Integer(n)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Fraction(x) => write!(f, "{x}"),
            Operand::Integer(n) => write!(f, "{n}"),
            Operand::Float(x) => write!(f, "{x}"),
            Operand::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl FromStr for Operand {
    type Err = FractionError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s {
            "true" => Ok(Operand::Boolean(true)),
            "false" => Ok(Operand::Boolean(false)),
            _ if s.contains('/') => s.parse().map(Operand::Fraction),
            _ => match parse_integer(s) {
                Ok(n) => Ok(Operand::Integer(n)),
                Err(err) => s.parse::<f64>().map(Operand::Float).map_err(|_| err),
            },
        }
    }
}

/// Binary operators accepted by [`Fraction::apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `**`
    Pow,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `~`, adjacency test
    AdjacentTo,
}

impl BinaryOp {
    /// All operators, in display order.
    pub const ALL: [BinaryOp; 12] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Pow,
        BinaryOp::Eq,
        BinaryOp::Ne,
        BinaryOp::Lt,
        BinaryOp::Le,
        BinaryOp::Gt,
        BinaryOp::Ge,
        BinaryOp::AdjacentTo,
    ];

    /// The operator's textual symbol.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "**",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::AdjacentTo => "~",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for BinaryOp {
    type Err = FractionError;

    fn from_str(s: &str) -> Result<Self> {
        BinaryOp::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| FractionError::UnknownOperator(s.to_string()))
    }
}

/// Result of [`Fraction::apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Value {
    /// Result of an arithmetic operator.
    Fraction(Fraction),
    /// Result of a comparison or adjacency test.
    Bool(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Fraction(x) => write!(f, "{x}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

fn invalid_operand(op: BinaryOp, rhs: &Operand) -> FractionError {
    FractionError::InvalidOperandType {
        op: op.symbol(),
        found: rhs.type_name(),
    }
}

impl Fraction {
    /// Applies `op` with `self` on the left and a runtime-typed `rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::InvalidOperandType`] when `rhs` has the wrong
    /// type for `op`, and otherwise whatever the underlying checked
    /// operation returns.
    pub fn apply(&self, op: BinaryOp, rhs: &Operand) -> Result<Value> {
        debug!("applying `{op}` to {self} and {} {rhs}", rhs.type_name());
        match (op, rhs) {
            (BinaryOp::Add, Operand::Integer(n)) => {
                self.checked_add_integer(*n).map(Value::Fraction)
            }
            (BinaryOp::Pow, Operand::Integer(n)) => self.checked_pow(*n).map(Value::Fraction),
            (BinaryOp::Eq, Operand::Fraction(other)) => Ok(Value::Bool(self == other)),
            (BinaryOp::Eq, _) => Ok(Value::Bool(false)),
            (BinaryOp::Ne, Operand::Fraction(other)) => Ok(Value::Bool(self != other)),
            (BinaryOp::Ne, _) => Ok(Value::Bool(true)),
            (BinaryOp::Pow, _) => Err(invalid_operand(op, rhs)),
            (_, Operand::Fraction(other)) => self.apply_fraction(op, other),
            (_, _) => Err(invalid_operand(op, rhs)),
        }
    }

    fn apply_fraction(&self, op: BinaryOp, rhs: &Fraction) -> Result<Value> {
        let value = match op {
            BinaryOp::Add => Value::Fraction(self.checked_add(rhs)?),
            BinaryOp::Sub => Value::Fraction(self.checked_sub(rhs)?),
            BinaryOp::Mul => Value::Fraction(self.checked_mul(rhs)?),
            BinaryOp::Div => Value::Fraction(self.checked_div(rhs)?),
            BinaryOp::Eq => Value::Bool(self == rhs),
            BinaryOp::Ne => Value::Bool(self != rhs),
            BinaryOp::Lt => Value::Bool(self < rhs),
            BinaryOp::Le => Value::Bool(self <= rhs),
            BinaryOp::Gt => Value::Bool(self > rhs),
            BinaryOp::Ge => Value::Bool(self >= rhs),
            BinaryOp::AdjacentTo => Value::Bool(self.is_adjacent_to(rhs)?),
            BinaryOp::Pow => return Err(invalid_operand(op, &Operand::Fraction(*rhs))),
        };
        Ok(value)
    }
}

/// Evaluates a line of the form `"<lhs> <op> <rhs>"`.
///
/// Tokens are separated by whitespace, so `"1/2 / 3/4"` divides two
/// fractions. The left side must be a fraction or an integer.
///
/// # Errors
///
/// Returns [`FractionError::InvalidExpression`] for a line that is not three
/// tokens, [`FractionError::UnknownOperator`] for an unrecognized operator,
/// and otherwise the error from parsing or [`Fraction::apply`].
pub fn evaluate(line: &str) -> Result<Value> {
    let mut tokens = line.split_whitespace();
    let (Some(lhs), Some(op), Some(rhs), None) =
        (tokens.next(), tokens.next(), tokens.next(), tokens.next())
    else {
        return Err(FractionError::InvalidExpression(line.trim().to_string()));
    };

    let lhs = lhs.parse::<Operand>()?.to_fraction()?;
    let op = op.parse::<BinaryOp>()?;
    let rhs = rhs.parse::<Operand>()?;
    lhs.apply(op, &rhs)
}
