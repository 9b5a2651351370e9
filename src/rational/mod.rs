//! Exact rational values.
//!
//! The float-to-rational decomposition and the repeating-decimal machinery
//! both land here. `Rational` is deliberately small: a numerator/denominator
//! pair of big integers with sign-on-numerator convention, plus the two
//! zero-denominator sentinels for NaN and infinity.

use std::fmt;
use std::ops::Neg;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

mod bits;
mod repeat;

pub use bits::from_float;
pub use repeat::{
    find_after_decimal, find_before_decimal, find_repeat, fractional_from_parts, from_decimal,
};

/// An exact numerator/denominator pair.
///
/// The sign lives on the numerator; the denominator is positive for every
/// finite value. Two sentinel forms carry the non-finite floats: 0/0 for
/// NaN and ±1/0 for ±infinity. Values are not necessarily in lowest terms;
/// [`Rational::new`] reduces, [`Rational::new_raw`] does not.
#[derive(Debug, Clone)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

impl Rational {
    /// Build a reduced rational with the sign normalized onto the
    /// numerator. A zero denominator is kept as a sentinel with the
    /// numerator collapsed to its sign.
    pub fn new(numer: BigInt, denom: BigInt) -> Self {
        if denom.is_zero() {
            return Rational {
                numer: numer.signum(),
                denom,
            };
        }
        let reduced = BigRational::new(numer, denom);
        Rational {
            numer: reduced.numer().clone(),
            denom: reduced.denom().clone(),
        }
    }

    /// Build a rational without reducing. The denominator must not be
    /// negative.
    pub fn new_raw(numer: BigInt, denom: BigInt) -> Self {
        Rational { numer, denom }
    }

    pub fn from_integer(n: BigInt) -> Self {
        Rational {
            numer: n,
            denom: BigInt::one(),
        }
    }

    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    /// NaN sentinel (0/0).
    pub fn is_nan(&self) -> bool {
        self.denom.is_zero() && self.numer.is_zero()
    }

    /// Infinity sentinel (±1/0).
    pub fn is_infinite(&self) -> bool {
        self.denom.is_zero() && !self.numer.is_zero()
    }

    /// This value in lowest terms.
    pub fn reduced(&self) -> Self {
        Rational::new(self.numer.clone(), self.denom.clone())
    }
}

/// Compares by cross-multiplication so unreduced values equal their
/// lowest-terms form without a float round-trip. Sentinels only equal
/// sentinels of the same kind and sign.
impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        if self.denom.is_zero() || other.denom.is_zero() {
            return self.denom == other.denom && self.numer.signum() == other.numer.signum();
        }
        &self.numer * &other.denom == &other.numer * &self.denom
    }
}

impl Eq for Rational {}

/// Negation flips the numerator, which also turns +1/0 into -1/0 and
/// leaves the NaN sentinel alone.
impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom.is_one() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}
