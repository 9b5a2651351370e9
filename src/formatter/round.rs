//! Snapping values to the nearest multiple of a fraction.

use crate::parser::{parse_value, to_float};
use crate::types::{Fraction, FormatError, ToTextOptions};

/// Snap a value to the nearest multiple of `granularity`, rounding halves
/// away from zero.
///
/// The return representation matches the input: textual values are
/// re-rendered as fraction text, numeric values stay numeric. A zero
/// granularity is not an error; division follows IEEE semantics and the
/// result is non-finite.
pub fn round_to_nearest(
    value: &Fraction,
    granularity: &Fraction,
) -> Result<Fraction, FormatError> {
    match value {
        Fraction::Text(text) => Ok(Fraction::Text(round_fraction_text(text, granularity)?)),
        Fraction::Number(n) => {
            let step = to_float(granularity)?;
            Ok(Fraction::Number((n / step).round() * step))
        }
    }
}

/// Text-in, text-out rounding. The re-render does not carry the rounding
/// option forward, so recursion stops after one pass.
pub(super) fn round_fraction_text(
    text: &str,
    granularity: &Fraction,
) -> Result<String, FormatError> {
    let value = parse_value(text)?;
    let step = to_float(granularity)?;
    super::to_text((value / step).round() * step, &ToTextOptions::default())
}
