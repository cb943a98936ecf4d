//! Astro-ziv is a library of correctly rounded elementary functions for multiple precision binary floating point numbers.
//!
//! Every function returns the exact mathematical result rounded once to the precision of the destination
//! with one of five rounding modes, together with the ternary value: the direction in which the result was rounded.
//! Results are computed with Ziv's strategy: an approximation with a known error bound is recomputed
//! with a higher working precision until it can be rounded correctly.
//!
//! Implemented functions: the exponential, the trigonometric functions `sin`, `cos`, `tan`, `cot`, `sec`, `csc`,
//! and the hyperbolic functions `sinh`, `cosh`, `tanh`, `coth`, `sech`, `csch`.
//! The constants π and ln(2) are computed to arbitrary precision and cached in the context.
//!
//! ## Examples
//!
//! ```
//! use astro_ziv::{BigFloat, Context, RoundingMode, Ternary};
//!
//! let mut ctx = Context::new();
//!
//! let x = BigFloat::from_i64(1, 64).unwrap();
//! let (y, t) = x.exp(53, RoundingMode::ToEven, &mut ctx).unwrap();
//!
//! // e rounded to 53 bits is below e
//! assert_eq!(t, Ternary::RoundedDown);
//! assert_eq!(y.exponent(), Some(2));
//! ```

#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::module_inception)]

mod common;
mod ctx;
mod defs;
mod ext;
mod mantissa;
mod num;
mod ops;

pub use crate::ctx::Context;
pub use crate::ctx::Flags;
pub use crate::ctx::ZivStats;
pub use crate::defs::Error;
pub use crate::defs::Exponent;
pub use crate::defs::RoundingMode;
pub use crate::defs::Sign;
pub use crate::defs::Ternary;
pub use crate::defs::Word;
pub use crate::defs::EXPONENT_MAX;
pub use crate::defs::EXPONENT_MIN;
pub use crate::defs::WORD_BIT_SIZE;
pub use crate::ext::BigFloat;
pub use crate::ext::Kind;

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_ziv() {
        // tan(x) * cot(x) = 1 within 2 units in the last place
        let mut ctx = Context::new();
        let p = 1000;
        let rm = RoundingMode::ToEven;

        let x = BigFloat::from_i64(12345, 64).unwrap();
        let (t, _) = x.tan(p, rm, &mut ctx).unwrap();
        let (c, _) = x.cot(p, rm, &mut ctx).unwrap();

        let (one, _) = t.mul(&c, p, rm, &mut ctx).unwrap();
        let (d, _) = one.sub(&BigFloat::from_i64(1, 1).unwrap(), p, rm, &mut ctx).unwrap();
        assert!(d.is_zero() || d.exponent().unwrap() <= 2 - p as Exponent);

        // the inner loop of cot is counted too
        let stats = ctx.ziv_stats();
        assert!(stats.loops >= 3);
        assert!(stats.max_retries <= 3);
        assert_eq!(ctx.flags(), Flags::INEXACT);
    }
}
