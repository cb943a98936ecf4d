//! Definitions.

use core::fmt::Display;
use std::collections::TryReserveError;

/// A word.
pub type Word = u64;

/// Doubled word.
pub type DoubleWord = u128;

/// An exponent.
pub type Exponent = i64;

/// Maximum exponent value.
pub const EXPONENT_MAX: Exponent = (1 << 60) - 1;

/// Minimum exponent value.
pub const EXPONENT_MIN: Exponent = 1 - (1 << 60);

/// Maximum value of a word.
pub const WORD_MAX: Word = Word::MAX;

/// Base of words.
pub const WORD_BASE: DoubleWord = WORD_MAX as DoubleWord + 1;

/// Size of a word in bits.
pub const WORD_BIT_SIZE: usize = core::mem::size_of::<Word>() * 8;

/// Word with the most significant bit set.
pub const WORD_SIGNIFICANT_BIT: Word = WORD_MAX << (WORD_BIT_SIZE - 1);

/// Extra bits added to the initial working precision of a Ziv loop.
pub const ZIV_EXTRA_BITS: usize = 3;

/// Sign.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Sign {
    /// Negative.
    Neg = -1,

    /// Positive.
    Pos = 1,
}

impl Sign {
    /// Changes the sign to the opposite.
    pub fn invert(&self) -> Self {
        match *self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }

    /// Returns true if `self` is positive.
    pub fn is_positive(&self) -> bool {
        *self == Sign::Pos
    }

    /// Returns true if `self` is negative.
    pub fn is_negative(&self) -> bool {
        *self == Sign::Neg
    }

    /// Returns 1 for the positive sign and -1 for the negative sign.
    pub fn to_int(&self) -> i8 {
        *self as i8
    }

    /// Returns the sign of the product of two values with signs `self` and `s`.
    pub fn mul(&self, s: Sign) -> Self {
        if *self == s {
            Sign::Pos
        } else {
            Sign::Neg
        }
    }
}

/// Possible errors.
///
/// Mathematical outcomes (NaN, infinities, overflow, underflow, inexactness) are
/// never reported as errors: they are part of the result and of the context flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Invalid argument, e.g. zero precision or an empty exponent range.
    InvalidArgument,

    /// Memory allocation error.
    MemoryAllocation,
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let repr = match self {
            Error::InvalidArgument => "invalid argument",
            Error::MemoryAllocation => "memory allocation failure",
        };
        f.write_str(repr)
    }
}

impl From<TryReserveError> for Error {
    fn from(_: TryReserveError) -> Self {
        Error::MemoryAllocation
    }
}

/// Rounding modes.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum RoundingMode {
    /// Round toward positive infinity.
    Up = 2,

    /// Round toward negative infinity.
    Down = 4,

    /// Round toward zero.
    ToZero = 8,

    /// Round away from zero.
    FromZero = 16,

    /// Round to nearest, ties to even.
    ToEven = 32,
}

impl RoundingMode {
    /// Returns true for the rounding to nearest.
    pub fn is_nearest(&self) -> bool {
        *self == RoundingMode::ToEven
    }

    /// Returns true if the rounding mode decreases the magnitude of a number with the sign `s`.
    pub fn is_like_to_zero(&self, s: Sign) -> bool {
        match self {
            RoundingMode::ToZero => true,
            RoundingMode::Up => s.is_negative(),
            RoundingMode::Down => s.is_positive(),
            _ => false,
        }
    }

    /// Returns the rounding mode giving the same result for the negated argument.
    pub fn invert(&self) -> Self {
        match self {
            RoundingMode::Up => RoundingMode::Down,
            RoundingMode::Down => RoundingMode::Up,
            rm => *rm,
        }
    }
}

/// The direction of rounding: the relation of a rounded result to the exact mathematical value.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum Ternary {
    /// The result is less than the exact value.
    RoundedDown = -1,

    /// The result is equal to the exact value.
    Exact = 0,

    /// The result is greater than the exact value.
    RoundedUp = 1,
}

impl Ternary {
    /// Returns the ternary value of a result with the sign `s`
    /// which magnitude was increased if `away` is true, and decreased otherwise.
    pub fn from_magnitude(s: Sign, away: bool) -> Self {
        if away == s.is_positive() {
            Ternary::RoundedUp
        } else {
            Ternary::RoundedDown
        }
    }

    /// Returns the ternary value for the negated result.
    pub fn invert(&self) -> Self {
        match self {
            Ternary::RoundedDown => Ternary::RoundedUp,
            Ternary::Exact => Ternary::Exact,
            Ternary::RoundedUp => Ternary::RoundedDown,
        }
    }

    /// Returns true if the result is exact.
    pub fn is_exact(&self) -> bool {
        *self == Ternary::Exact
    }

    /// Returns -1, 0, or 1.
    pub fn to_int(&self) -> i8 {
        *self as i8
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_ternary() {
        assert_eq!(Ternary::from_magnitude(Sign::Pos, true), Ternary::RoundedUp);
        assert_eq!(Ternary::from_magnitude(Sign::Pos, false), Ternary::RoundedDown);
        assert_eq!(Ternary::from_magnitude(Sign::Neg, true), Ternary::RoundedDown);
        assert_eq!(Ternary::from_magnitude(Sign::Neg, false), Ternary::RoundedUp);
        assert_eq!(Ternary::RoundedUp.invert(), Ternary::RoundedDown);
        assert_eq!(Ternary::Exact.invert().to_int(), 0);

        assert!(RoundingMode::ToZero.is_like_to_zero(Sign::Neg));
        assert!(RoundingMode::Down.is_like_to_zero(Sign::Pos));
        assert!(!RoundingMode::Down.is_like_to_zero(Sign::Neg));
        assert!(!RoundingMode::ToEven.is_like_to_zero(Sign::Pos));
        assert_eq!(RoundingMode::Up.invert(), RoundingMode::Down);
        assert_eq!(Sign::Neg.mul(Sign::Neg), Sign::Pos);
    }
}
