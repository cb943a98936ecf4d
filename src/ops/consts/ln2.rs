//! ln(2)

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

/// Computes ln(2) with the error below `2^(EXP - wg - 2)` as `2 * atanh(1/3)`.
pub(super) fn compute_ln2(wg: usize) -> Result<BigFloatNumber, Error> {
    let w = series_precision(wg);

    let mut ret = recip_series(3, false, w)?;
    ret.set_exponent(ret.exponent() + 1);

    Ok(ret)
}

impl BigFloat {
    /// Sets `self` to the natural logarithm of 2.
    pub fn set_ln2(&mut self, rm: RoundingMode, ctx: &mut Context) -> Result<Ternary, Error> {
        let mut guard = ExponentGuard::new(ctx);

        let t = ziv(self, rm, &mut guard, |m, ctx| Ok((ctx.consts().ln2(m)?, m as isize)))?;

        Ok(guard.finish(self, t, rm))
    }
}
