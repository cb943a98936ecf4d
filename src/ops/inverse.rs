//! Functions computed as the reciprocal of another correctly rounded function.

use crate::ctx::Context;
use crate::ctx::Flags;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::Ternary;
use crate::ext::BigFloat;
use crate::num::BigFloatNumber;
use crate::ops::range::ExponentGuard;
use crate::ops::special::dispatch;
use crate::ops::special::SpecialValues;
use crate::ops::ziv::ZivLoop;
use tracing::debug;

/// Function `f(x) = 1 / g(x)`.
pub(crate) trait InverseFn: SpecialValues {
    /// Sets `dst` to `g(x)` correctly rounded.
    fn inverse(
        dst: &mut BigFloat,
        x: &BigFloat,
        rm: RoundingMode,
        ctx: &mut Context,
    ) -> Result<Ternary, Error>;

    /// Returns `f(x)` rounded to precision `p` if it can be obtained without the Ziv loop.
    fn shortcut(
        _x: &BigFloatNumber,
        _p: usize,
        _rm: RoundingMode,
    ) -> Result<Option<(BigFloatNumber, Ternary)>, Error> {
        Ok(None)
    }
}

/// Sets `dst` to `f(x)` of the function `F`.
///
/// `g(x)` is computed with the working precision `m` rounded toward zero, its reciprocal is rounded to nearest,
/// which gives the result within 4 units in the last place: the error bound is `m - 2` bits.
/// If `g(x)` overflows, `f(x)` underflows, and the other way round.
/// An exact `g(x)` gives `f(x)` with a single division.
pub(crate) fn gen_inverse<F: InverseFn>(
    dst: &mut BigFloat,
    x: &BigFloat,
    rm: RoundingMode,
    ctx: &mut Context,
) -> Result<Ternary, Error> {
    let mut guard = ExponentGuard::new(ctx);

    if let Some(t) = dispatch::<F>(dst, x, &mut guard)? {
        return Ok(guard.finish(dst, t, rm));
    }

    let p = dst.precision();

    if let Some((c, t)) = F::shortcut(x.number(), p, rm)? {
        dst.set_number(c);
        return Ok(guard.finish(dst, t, rm));
    }

    let mut zl = ZivLoop::new(p);

    loop {
        let m = zl.precision();

        let mut y = BigFloat::new(m)?;
        let ty = F::inverse(&mut y, x, RoundingMode::ToZero, &mut guard)?;

        if y.is_zero() {
            debug!(p, m, "inner underflow turns into overflow");
            return Ok(guard.overflow(dst, rm, y.sign()));
        }

        if guard.flags().contains(Flags::OVERFLOW) {
            debug!(p, m, "inner overflow turns into underflow");

            let s = y.sign();
            let rm = if rm == RoundingMode::ToEven {
                RoundingMode::ToZero
            } else {
                rm
            };

            return Ok(guard.underflow(dst, rm, s));
        }

        if ty.is_exact() {
            guard.record_ziv(zl.retries());
            let (z, t) = y.number().reciprocal(p, rm)?;
            dst.set_number(z);
            return Ok(guard.finish(dst, t, rm));
        }

        let (z, _) = y.number().reciprocal(m, RoundingMode::ToEven)?;

        if z.can_round(m as isize - 2, p, rm) {
            guard.record_ziv(zl.retries());
            let t = dst.set_rounded(&z, rm)?;
            return Ok(guard.finish(dst, t, rm));
        }

        zl.next();
    }
}
