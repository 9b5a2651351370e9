//! Fraction text rendering.

use crate::formatter::round::round_fraction_text;
use crate::rational::{from_decimal, from_float};
use crate::types::{Fraction, FormatError, ToTextOptions};

/// Render a float as minimal fraction text: "N", "D1/D2" or "N D1/D2".
///
/// The fractional part goes through the decimal-expansion route: the
/// shortest decimal rendering of the magnitude, repeating-cycle detection,
/// then the exact rational printed as numerator/denominator. Reduction is
/// whatever that route naturally produces. Non-finite values render their
/// sentinel rationals ("0/0", "1/0", "-1/0").
///
/// Fails only when `options` names a rounding granularity that is neither
/// fraction text nor a number.
pub fn to_text(value: f64, options: &ToTextOptions) -> Result<String, FormatError> {
    if !value.is_finite() {
        return Ok(from_float(value).to_string());
    }

    let whole = value.trunc();
    if whole == 0.0 {
        let fractional =
            fractional_part_to_text(value.abs(), options.round_to_nearest.as_ref())?;
        if value.is_sign_negative() && fractional != "0" {
            return Ok(format!("-{fractional}"));
        }
        return Ok(fractional);
    }

    let remainder = value - whole;
    if remainder == 0.0 {
        return Ok(format!("{whole}"));
    }
    let fractional = fractional_part_to_text(remainder.abs(), options.round_to_nearest.as_ref())?;
    // A rounded fractional part can collapse to a whole step; fold it into
    // the whole number instead of rendering "2 1".
    if fractional == "0" || fractional == "1" {
        let folded = if fractional == "1" { whole + 1.0 } else { whole };
        return Ok(format!("{folded}"));
    }
    Ok(format!("{whole} {fractional}"))
}

/// Render a sub-1 magnitude as "numerator/denominator", optionally snapped
/// to the nearest multiple of a target fraction first.
fn fractional_part_to_text(
    magnitude: f64,
    round: Option<&Fraction>,
) -> Result<String, FormatError> {
    let rational = from_decimal(&magnitude.to_string());
    match round {
        Some(granularity) => round_fraction_text(&rational.to_string(), granularity),
        None => Ok(rational.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: f64) -> String {
        to_text(value, &ToTextOptions::default()).unwrap()
    }

    fn text_to_nearest(value: f64, granularity: &str) -> String {
        let options = ToTextOptions {
            round_to_nearest: Some(Fraction::from(granularity)),
        };
        to_text(value, &options).unwrap()
    }

    #[test]
    fn renders_single_fractions() {
        assert_eq!(text(0.5), "1/2");
        assert_eq!(text(0.875), "7/8");
        assert_eq!(text(-0.875), "-7/8");
        assert_eq!(text(0.140625), "9/64");
    }

    #[test]
    fn renders_mixed_fractions() {
        assert_eq!(text(1.5), "1 1/2");
        assert_eq!(text(1100.875), "1100 7/8");
        assert_eq!(text(-1100.875), "-1100 7/8");
    }

    #[test]
    fn renders_whole_numbers_alone() {
        assert_eq!(text(0.0), "0");
        assert_eq!(text(-0.0), "0");
        assert_eq!(text(3.0), "3");
        assert_eq!(text(-1100.0), "-1100");
    }

    #[test]
    fn renders_repeating_expansions_exactly() {
        assert_eq!(text(1.0 / 3.0), "1/3");
        assert_eq!(text(2.0 / 3.0), "2/3");
    }

    #[test]
    fn rounds_to_a_target_granularity() {
        assert_eq!(text_to_nearest(0.142857142857143, "1/64"), "9/64");
        assert_eq!(text_to_nearest(2.15, "1/4"), "2 1/4");
    }

    #[test]
    fn folds_rounded_whole_steps_into_the_integer_part() {
        assert_eq!(text_to_nearest(1100.875, "1/2"), "1101");
        assert_eq!(text_to_nearest(2.1, "1/2"), "2");
    }

    #[test]
    fn renders_sentinels_for_non_finite_values() {
        assert_eq!(text(f64::NAN), "0/0");
        assert_eq!(text(f64::INFINITY), "1/0");
        assert_eq!(text(f64::NEG_INFINITY), "-1/0");
    }

    #[test]
    fn rejects_malformed_granularity() {
        let options = ToTextOptions {
            round_to_nearest: Some(Fraction::from("n/a")),
        };
        assert!(to_text(0.5, &options).is_err());
    }
}
