//! Type definitions shared across the parser, formatter and rounding modules.

use std::error::Error;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use crate::formatter::to_text;
use crate::parser::to_float;
use crate::rational::{Rational, from_float};

/// A fraction value, kept in whichever representation it was built from.
///
/// `Text` stores the original string exactly as constructed; it is not
/// validated or normalized until a conversion is requested. `Number` is the
/// canonical interchange representation between components.
#[derive(Debug, Clone, PartialEq)]
pub enum Fraction {
    Text(String),
    Number(f64),
}

impl Fraction {
    /// Convert this value to its floating-point form.
    ///
    /// Fails only when a textual value is neither fraction text nor a
    /// parseable plain number.
    pub fn to_float(&self) -> Result<f64, FormatError> {
        to_float(self)
    }

    /// The exact rational value of this fraction's float form, decomposed
    /// bit-for-bit from the IEEE-754 encoding.
    pub fn to_rational(&self) -> Result<Rational, FormatError> {
        Ok(from_float(self.to_float()?))
    }
}

impl From<f64> for Fraction {
    fn from(value: f64) -> Self {
        Fraction::Number(value)
    }
}

impl From<&str> for Fraction {
    fn from(value: &str) -> Self {
        Fraction::Text(value.to_string())
    }
}

impl From<String> for Fraction {
    fn from(value: String) -> Self {
        Fraction::Text(value)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fraction::Text(s) => f.write_str(s),
            Fraction::Number(n) => write!(f, "{n}"),
        }
    }
}

/// The four elementary operators combine both operands as floats and
/// reformat the result as fraction text. Lossy by design; exact rational
/// arithmetic would change observable output for existing callers.
macro_rules! float_round_trip_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Fraction {
            type Output = Result<Fraction, FormatError>;

            fn $method(self, rhs: Fraction) -> Self::Output {
                let combined = self.to_float()? $op rhs.to_float()?;
                Ok(Fraction::Text(to_text(combined, &ToTextOptions::default())?))
            }
        }
    };
}

float_round_trip_op!(Add, add, +);
float_round_trip_op!(Sub, sub, -);
float_round_trip_op!(Mul, mul, *);
float_round_trip_op!(Div, div, /);

/// Options accepted by [`to_text`](crate::to_text).
#[derive(Debug, Clone, Default)]
pub struct ToTextOptions {
    /// Snap the rendered fraction to the nearest multiple of this
    /// granularity, e.g. `"1/64"`.
    pub round_to_nearest: Option<Fraction>,
}

/// Input was neither a recognized fraction nor a parseable plain number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    input: String,
}

impl FormatError {
    pub(crate) fn new(input: &str) -> Self {
        FormatError {
            input: input.to_string(),
        }
    }

    /// The offending input string.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is neither a fraction nor a number", self.input)
    }
}

impl Error for FormatError {}
