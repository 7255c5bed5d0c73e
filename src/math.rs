//! Arithmetic on mixed integer/float values
//!
//! Integers stay integers until a float joins the computation:
//! `Int + Int` is an `Int`, anything involving a `Float` is a `Float`.
//! Integers are arbitrary precision, so integer sums never overflow.

use miette::Diagnostic;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{FromPrimitive, Signed, ToPrimitive, Zero};
use std::fmt;
use thiserror::Error;

/// Errors raised by the arithmetic operations
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum ArithError {
    #[error("division by zero")]
    #[diagnostic(
        code(tally::math::division_by_zero),
        help("the divisor must be non-zero")
    )]
    DivisionByZero,

    #[error("quotient {quotient} cannot be represented as an integer")]
    #[diagnostic(code(tally::math::not_representable))]
    NotRepresentable { quotient: f64 },
}

/// A numeric value: either an integer or a floating-point number
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Int(BigInt),
    Float(f64),
}

impl Number {
    /// Turn a parsed float into an `Int` when it holds a whole number
    ///
    /// `3.0` becomes `Int(3)`, `1e19` becomes `Int(10000000000000000000)`,
    /// `2.2` stays `Float(2.2)`. NaN and infinities stay floats.
    pub fn normalize(value: f64) -> Self {
        if value.is_finite() && value.trunc() == value {
            if let Some(n) = BigInt::from_f64(value) {
                return Number::Int(n);
            }
        }
        Number::Float(value)
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Number::Int(_))
    }

    /// Widen to `f64`; integers beyond the float range become infinities
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(n) => n.to_f64().unwrap_or(if n.is_negative() {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }),
            Number::Float(x) => *x,
        }
    }

    fn is_zero(&self) -> bool {
        match self {
            Number::Int(n) => n.is_zero(),
            Number::Float(x) => *x == 0.0,
        }
    }
}

impl From<BigInt> for Number {
    fn from(n: BigInt) -> Self {
        Number::Int(n)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Int(n.into())
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::Int(n.into())
    }
}

impl From<f64> for Number {
    fn from(x: f64) -> Self {
        Number::Float(x)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{n}"),
            Number::Float(x) => fmt_float(*x, f),
        }
    }
}

/// Shortest round-trip float text that always reads as a float:
/// `3.0`, `3.2`, `1e+16`, `1e-05`, `inf`, `nan`.
fn fmt_float(x: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if x.is_nan() {
        return f.write_str("nan");
    }
    if x.is_infinite() {
        return f.write_str(if x > 0.0 { "inf" } else { "-inf" });
    }

    // Debug keeps the trailing `.0` and switches to exponent form
    // outside 1e-4 <= |x| < 1e16.
    let repr = format!("{x:?}");
    match repr.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            write!(f, "{mantissa}e{sign}{digits:0>2}")
        }
        None => f.write_str(&repr),
    }
}

/// Add two numbers
///
/// Two integers give an exact integer; any float operand promotes the
/// sum to a float.
pub fn add(x: impl Into<Number>, y: impl Into<Number>) -> Number {
    match (x.into(), y.into()) {
        (Number::Int(a), Number::Int(b)) => Number::Int(a + b),
        (a, b) => Number::Float(a.as_f64() + b.as_f64()),
    }
}

/// Floor-divide `x` by `y`, always returning an integer
///
/// `divide_int(3, 2) == 1` and `divide_int(3, 1.6) == 1`.
pub fn divide_int(x: impl Into<Number>, y: impl Into<Number>) -> Result<BigInt, ArithError> {
    let (x, y) = (x.into(), y.into());

    if y.is_zero() {
        return Err(ArithError::DivisionByZero);
    }

    if let (Number::Int(a), Number::Int(b)) = (&x, &y) {
        return Ok(a.div_floor(b));
    }

    let quotient = (x.as_f64() / y.as_f64()).floor();
    BigInt::from_f64(quotient).ok_or(ArithError::NotRepresentable { quotient })
}
