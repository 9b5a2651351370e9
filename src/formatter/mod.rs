//! Rendering floats as fraction text and snapping values to fraction
//! multiples.

mod core;
mod round;

pub use self::core::to_text;
pub use round::round_to_nearest;
