//! Fraction text classification and conversion to floats.
//!
//! The grammar is the crate's entry point for textual input: it decides
//! whether a string is a single fraction ("7/8"), a mixed fraction
//! ("1 7/8"), or neither, and `to_float` turns any accepted form into the
//! canonical floating-point representation.

mod convert;
mod grammar;

pub use convert::to_float;
pub use grammar::{is_fraction, is_mixed_fraction, is_single_fraction};

pub(crate) use convert::parse_value;
