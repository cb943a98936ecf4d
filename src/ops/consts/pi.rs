//! π number.

use super::recip_series;
use super::series_precision;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::Ternary;
use crate::ext::BigFloat;
use crate::num::BigFloatNumber;
use crate::ops::range::ExponentGuard;
use crate::ops::ziv::ziv;

/// Computes π with the error below `2^(EXP - wg - 2)` using Machin's formula
/// `π = 16 * atan(1/5) - 4 * atan(1/239)`.
pub(super) fn compute_pi(wg: usize) -> Result<BigFloatNumber, Error> {
    let w = series_precision(wg);

    let mut a = recip_series(5, true, w)?;
    a.set_exponent(a.exponent() + 4);

    let mut b = recip_series(239, true, w)?;
    b.set_exponent(b.exponent() + 2);

    Ok(a.sub(&b, w, RoundingMode::ToEven)?.0)
}

impl BigFloat {
    /// Sets `self` to π.
    pub fn set_pi(&mut self, rm: RoundingMode, ctx: &mut Context) -> Result<Ternary, Error> {
        let mut guard = ExponentGuard::new(ctx);

        let t = ziv(self, rm, &mut guard, |m, ctx| Ok((ctx.consts().pi(m)?, m as isize)))?;

        Ok(guard.finish(self, t, rm))
    }
}
