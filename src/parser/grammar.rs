//! Matchers for single and mixed fraction text.
//!
//! Compiled winnow parsers standing in for the anchored regexes of older
//! implementations. Each matcher trims surrounding whitespace and then
//! requires the entire remaining input to match; stray characters, doubled
//! fraction groups ("2/3 9/5") or whitespace adjacent to '/' are rejected.
//! The predicates are pure and never panic.

use winnow::ascii::{digit1, multispace0, multispace1};
use winnow::combinator::{delimited, opt, separated_pair};
use winnow::{ModalResult, Parser};

/// Parts of a single fraction `N/D`. Either side may carry its own sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SingleFraction {
    pub numerator: f64,
    pub denominator: f64,
}

/// Parts of a mixed fraction `W N/D`. The whole part keeps its parsed sign
/// (including -0.0) so conversion can decide whether to negate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MixedFraction {
    pub whole: f64,
    pub numerator: f64,
    pub denominator: f64,
}

fn signed_int(input: &mut &str) -> ModalResult<f64> {
    (opt('-'), digit1).take().parse_to().parse_next(input)
}

fn unsigned_int(input: &mut &str) -> ModalResult<f64> {
    digit1.parse_to().parse_next(input)
}

fn single_fraction(input: &mut &str) -> ModalResult<SingleFraction> {
    separated_pair(signed_int, '/', signed_int)
        .map(|(numerator, denominator)| SingleFraction {
            numerator,
            denominator,
        })
        .parse_next(input)
}

fn mixed_fraction(input: &mut &str) -> ModalResult<MixedFraction> {
    separated_pair(
        signed_int,
        multispace1,
        separated_pair(unsigned_int, '/', unsigned_int),
    )
    .map(|(whole, (numerator, denominator))| MixedFraction {
        whole,
        numerator,
        denominator,
    })
    .parse_next(input)
}

pub(crate) fn parse_single(s: &str) -> Option<SingleFraction> {
    delimited(multispace0, single_fraction, multispace0)
        .parse(s)
        .ok()
}

pub(crate) fn parse_mixed(s: &str) -> Option<MixedFraction> {
    delimited(multispace0, mixed_fraction, multispace0)
        .parse(s)
        .ok()
}

/// True iff the trimmed input is exactly `<int>/<int>`, with an optional
/// leading `-` on either integer.
pub fn is_single_fraction(s: &str) -> bool {
    parse_single(s).is_some()
}

/// True iff the trimmed input is a signed whole number, a run of
/// whitespace, and a non-negative `<int>/<int>` pair. The whole part's sign
/// applies to the entire value.
pub fn is_mixed_fraction(s: &str) -> bool {
    parse_mixed(s).is_some()
}

/// True iff the input is fraction text of either kind.
pub fn is_fraction(s: &str) -> bool {
    is_single_fraction(s) || is_mixed_fraction(s)
}
