//! Bit-exact decomposition of IEEE-754 doubles.

use num_bigint::BigInt;
use num_traits::{One, Zero};

use super::Rational;

const MANTISSA_BITS: u64 = 52;
const MANTISSA_MASK: u64 = (1 << MANTISSA_BITS) - 1;
const EXPONENT_MASK: u64 = 0x7ff;
const EXPONENT_BIAS: i64 = 1023;

/// The exact rational value of a double, reconstructed from its sign,
/// exponent and mantissa fields rather than through decimal rounding. For
/// finite inputs the result reproduces the float bit-for-bit.
///
/// NaN maps to the 0/0 sentinel and ±infinity to ±1/0. The result is not
/// reduced to lowest terms; call [`Rational::reduced`] when lowest terms
/// are required.
pub fn from_float(value: f64) -> Rational {
    if value.is_nan() {
        return Rational::new_raw(BigInt::zero(), BigInt::zero());
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { -1 } else { 1 };
        return Rational::new_raw(BigInt::from(sign), BigInt::zero());
    }

    let bits = value.to_bits();
    let negative = bits >> 63 == 1;
    let biased_exponent = ((bits >> MANTISSA_BITS) & EXPONENT_MASK) as i64;
    let mantissa = bits & MANTISSA_MASK;

    // Normal values carry an implicit leading 1; subnormals do not and use
    // the fixed exponent -1022.
    let (significand, exponent) = if biased_exponent == 0 {
        (mantissa, 1 - EXPONENT_BIAS)
    } else {
        (mantissa | (1 << MANTISSA_BITS), biased_exponent - EXPONENT_BIAS)
    };

    let mut numer = BigInt::from(significand);
    let mut denom = BigInt::one() << MANTISSA_BITS;
    if exponent >= 0 {
        numer <<= exponent as usize;
    } else {
        denom <<= (-exponent) as usize;
    }
    if negative {
        numer = -numer;
    }
    Rational::new_raw(numer, denom)
}
