//! Sine.

use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::Ternary;
use crate::ext::BigFloat;
use crate::ops::range::ExponentGuard;
use crate::ops::special::dispatch;
use crate::ops::special::Special;
use crate::ops::special::SpecialValues;
use crate::ops::ziv::ziv;

struct Sin;

impl SpecialValues for Sin {
    fn on_inf(_s: Sign) -> Special {
        Special::Nan
    }

    fn on_zero(s: Sign) -> Special {
        Special::Zero(s)
    }
}

impl BigFloat {
    /// Sets `self` to the sine of `x`. The argument is an angle in radians.
    pub fn set_sin(
        &mut self,
        x: &BigFloat,
        rm: RoundingMode,
        ctx: &mut Context,
    ) -> Result<Ternary, Error> {
        let mut guard = ExponentGuard::new(ctx);

        if let Some(t) = dispatch::<Sin>(self, x, &mut guard)? {
            return Ok(guard.finish(self, t, rm));
        }

        let n = x.number();
        let p = self.precision();
        let e = n.exponent();

        // x - sin(x) < |x|^3 / 4
        if 2 * e <= -(((p + 1).max(n.precision())) as Exponent) - 1 {
            let t = self.set_correction(n, n.sign().invert(), rm)?;
            return Ok(guard.finish(self, t, rm));
        }

        let t = ziv(self, rm, &mut guard, |m, ctx| {
            Ok((n.sin_approx(m, ctx)?, m as isize - 2))
        })?;

        Ok(guard.finish(self, t, rm))
    }
}
