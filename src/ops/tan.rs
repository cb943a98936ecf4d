//! Tangent.

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

struct Tan;

impl SpecialValues for Tan {
    fn on_inf(_s: Sign) -> Special {
        Special::Nan
    }

    fn on_zero(s: Sign) -> Special {
        Special::Zero(s)
    }
}

impl BigFloat {
    /// Sets `self` to the tangent of `x`. The argument is an angle in radians.
    pub fn set_tan(
        &mut self,
        x: &BigFloat,
        rm: RoundingMode,
        ctx: &mut Context,
    ) -> Result<Ternary, Error> {
        let mut guard = ExponentGuard::new(ctx);

        if let Some(t) = dispatch::<Tan>(self, x, &mut guard)? {
            return Ok(guard.finish(self, t, rm));
        }

        let n = x.number();
        let p = self.precision();
        let e = n.exponent();

        // tan(x) - x < |x|^3 / 2
        if 2 * e <= -(((p + 1).max(n.precision())) as Exponent) - 2 {
            let t = self.set_correction(n, n.sign(), rm)?;
            return Ok(guard.finish(self, t, rm));
        }

        let t = ziv(self, rm, &mut guard, |m, ctx| {
            Ok((n.tan_approx(m, ctx)?, m as isize - 3))
        })?;

        Ok(guard.finish(self, t, rm))
    }
}
