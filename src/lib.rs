pub mod formatter;
pub mod parser;
pub mod rational;
pub mod types;

// Re-export the main API
pub use formatter::{round_to_nearest, to_text};
pub use parser::{is_fraction, is_mixed_fraction, is_single_fraction, to_float};
pub use types::{Fraction, FormatError, ToTextOptions};
