//! Repeating-decimal detection and conversion to exact rationals.

use num_bigint::BigInt;
use num_traits::{One, Pow, Zero};

use super::Rational;

/// Find the repeating block at the end of a decimal string.
///
/// Scans candidate suffix blocks of increasing length and keeps the longest
/// block that also occupies the positions immediately before the suffix; a
/// cycle is only recognized once two full consecutive repetitions are
/// observable. "0.333" reports "3", "3.142857142857" reports "142857", and
/// "1.03" reports nothing.
///
/// The scan is iterative and bounded by half the input length.
pub fn find_repeat(decimal: &str) -> Option<&str> {
    if !decimal.is_ascii() {
        return None;
    }
    let bytes = decimal.as_bytes();
    let mut best = None;
    let mut len = 1;
    while len * 2 <= bytes.len() {
        let tail = &bytes[bytes.len() - len..];
        let lead = &bytes[bytes.len() - 2 * len..bytes.len() - len];
        if tail == lead {
            best = Some(&decimal[decimal.len() - len..]);
        }
        len += 1;
    }
    best
}

/// Digits before the decimal point, or an empty string when the integer
/// part is zero.
pub fn find_before_decimal(decimal: &str) -> &str {
    let before = match decimal.split_once('.') {
        Some((before, _)) => before,
        None => decimal,
    };
    if before.chars().all(|c| c == '0' || c == '-') {
        ""
    } else {
        before
    }
}

/// Fractional digits between the decimal point and the start of the
/// repeating suffix; all of them when no block is detected.
///
/// The split is anchored to the tail: the detected block is grown backward
/// while the digits stay periodic, so a prefix digit that happens to equal a
/// cycle digit (as in "0.31533") is kept rather than swallowed.
pub fn find_after_decimal(decimal: &str) -> &str {
    let Some(dot) = decimal.find('.') else {
        return "";
    };
    let first = dot + 1;
    match find_repeat(decimal) {
        Some(repeat) => {
            let period = repeat.len();
            let bytes = decimal.as_bytes();
            let mut start = (decimal.len() - 2 * period).max(first);
            while start > first && bytes[start - 1] == bytes[start - 1 + period] {
                start -= 1;
            }
            &decimal[first..start]
        }
        None => &decimal[first..],
    }
}

/// Exact rational for a repeating decimal split into integer digits,
/// non-repeating fractional digits and the repeating cycle.
///
/// Shifting the expansion by the cycle length and subtracting cancels the
/// repeating tail: `(int(b+a+r) - int(b+a)) / (10^(|a|+|r|) - 10^|a|)`. The
/// cycle must be nonempty; terminating decimals are handled directly by
/// [`from_decimal`].
pub fn fractional_from_parts(before: &str, after: &str, repeat: &str) -> Rational {
    let with_repeat = digits(&format!("{before}{after}{repeat}"));
    let without = digits(&format!("{before}{after}"));
    let denom = pow10(after.len() + repeat.len()) - pow10(after.len());
    Rational::new(with_repeat - without, denom)
}

/// Convert a decimal string to an exact rational: through
/// [`fractional_from_parts`] when a repeating tail is detected, otherwise as
/// a terminating decimal over a power of ten.
///
/// The sign is stripped before the split so "-0.333..." keeps it even
/// though its integer digits collapse to nothing.
pub fn from_decimal(decimal: &str) -> Rational {
    if let Some(positive) = decimal.strip_prefix('-') {
        return -from_decimal(positive);
    }
    if let Some(repeat) = find_repeat(decimal) {
        return fractional_from_parts(
            find_before_decimal(decimal),
            find_after_decimal(decimal),
            repeat,
        );
    }
    match decimal.split_once('.') {
        Some((before, after)) => {
            Rational::new(digits(&format!("{before}{after}")), pow10(after.len()))
        }
        None => Rational::new(digits(decimal), BigInt::one()),
    }
}

fn digits(s: &str) -> BigInt {
    s.parse().unwrap_or_else(|_| BigInt::zero())
}

fn pow10(exp: usize) -> BigInt {
    Pow::pow(BigInt::from(10), exp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(numer: i64, denom: i64) -> Rational {
        Rational::new(BigInt::from(numer), BigInt::from(denom))
    }

    #[test]
    fn finds_single_digit_repeat() {
        assert_eq!(find_repeat("0.333"), Some("3"));
    }

    #[test]
    fn finds_multi_digit_repeat() {
        assert_eq!(find_repeat("3.142857142857"), Some("142857"));
    }

    #[test]
    fn reports_no_repeat_for_terminating_decimals() {
        assert_eq!(find_repeat("1.03"), None);
        assert_eq!(find_repeat("0.875"), None);
        assert_eq!(find_repeat("0.5"), None);
    }

    #[test]
    fn prefers_the_longest_observable_cycle() {
        assert_eq!(find_repeat("0.3333"), Some("33"));
        assert_eq!(find_repeat("0.583333333"), Some("333"));
    }

    #[test]
    fn splits_around_the_decimal_point() {
        assert_eq!(find_before_decimal("0.5833"), "");
        assert_eq!(find_before_decimal("12.25"), "12");
        assert_eq!(find_after_decimal("0.58333333"), "58");
        assert_eq!(find_after_decimal("0.142857142857"), "");
    }

    #[test]
    fn keeps_prefix_digits_that_echo_the_cycle() {
        // the "3" in "315" must not be mistaken for the start of the tail
        assert_eq!(find_after_decimal("0.31533"), "315");
        assert_eq!(find_after_decimal("0.1333"), "1");
    }

    #[test]
    fn converts_repeating_parts_to_rationals() {
        assert_eq!(fractional_from_parts("", "", "3"), ratio(1, 3));
        assert_eq!(fractional_from_parts("", "58", "3"), ratio(7, 12));
        assert_eq!(fractional_from_parts("", "", "142857"), ratio(1, 7));
    }

    #[test]
    fn converts_terminating_decimals() {
        assert_eq!(from_decimal("0.5"), ratio(1, 2));
        assert_eq!(from_decimal("0.875"), ratio(7, 8));
        assert_eq!(from_decimal("-0.875"), ratio(-7, 8));
        assert_eq!(from_decimal("3"), ratio(3, 1));
        assert_eq!(from_decimal("0"), ratio(0, 1));
    }

    #[test]
    fn converts_repeating_decimals() {
        assert_eq!(from_decimal("0.3333333333333333"), ratio(1, 3));
        assert_eq!(from_decimal("0.5833333333333333"), ratio(7, 12));
        assert_eq!(from_decimal("0.31533"), ratio(473, 1500));
    }

    #[test]
    fn keeps_the_sign_of_negative_repeating_decimals() {
        assert_eq!(from_decimal("-0.3333333333333333"), ratio(-1, 3));
        assert_eq!(from_decimal("-0.5833333333333333"), ratio(-7, 12));
        assert_eq!(from_decimal("-1.3333333333333333"), ratio(-4, 3));
    }
}
