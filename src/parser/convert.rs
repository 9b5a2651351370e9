//! Conversion of fraction text (or plain numeric text) to floats.

use crate::parser::grammar::{parse_mixed, parse_single};
use crate::types::{Fraction, FormatError};

/// Convert a fraction value to its floating-point form.
///
/// Textual input may be a single fraction, a mixed fraction, or any plain
/// number accepted by `str::parse::<f64>`; anything else is a
/// [`FormatError`]. Numeric input passes through unchanged.
pub fn to_float(value: &Fraction) -> Result<f64, FormatError> {
    match value {
        Fraction::Number(n) => Ok(*n),
        Fraction::Text(s) => parse_value(s),
    }
}

/// Text-only conversion backing [`to_float`].
///
/// A zero denominator is not guarded; it follows IEEE semantics and yields
/// infinity or NaN, which the rational layer represents with sentinel
/// values.
///
/// Known edge case: a mixed fraction is negated iff its whole part is less
/// than zero, so "-0 1/2" parses the whole part as -0.0 and converts to
/// +0.5.
pub(crate) fn parse_value(s: &str) -> Result<f64, FormatError> {
    if let Some(mixed) = parse_mixed(s) {
        let magnitude = mixed.whole.abs() + mixed.numerator / mixed.denominator;
        return Ok(if mixed.whole < 0.0 { -magnitude } else { magnitude });
    }
    if let Some(single) = parse_single(s) {
        return Ok(single.numerator / single.denominator);
    }
    s.trim().parse().map_err(|_| FormatError::new(s))
}
