//! Mantissa of a number.

mod div;
mod mantissa;
mod mul;

pub use mantissa::Mantissa;
