//! Cosine.

use crate::common::consts::ONE;
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

struct Cos;

impl SpecialValues for Cos {
    fn on_inf(_s: Sign) -> Special {
        Special::Nan
    }

    fn on_zero(_s: Sign) -> Special {
        Special::Int(1)
    }
}

impl BigFloat {
    /// Sets `self` to the cosine of `x`. The argument is an angle in radians.
    pub fn set_cos(
        &mut self,
        x: &BigFloat,
        rm: RoundingMode,
        ctx: &mut Context,
    ) -> Result<Ternary, Error> {
        let mut guard = ExponentGuard::new(ctx);

        if let Some(t) = dispatch::<Cos>(self, x, &mut guard)? {
            return Ok(guard.finish(self, t, rm));
        }

        let n = x.number();
        let p = self.precision();
        let e = n.exponent();

        // 1 - cos(x) < x^2 / 2
        if 2 * e <= -(p as Exponent) - 2 {
            let t = self.set_correction(&ONE, Sign::Neg, rm)?;
            return Ok(guard.finish(self, t, rm));
        }

        let t = ziv(self, rm, &mut guard, |m, ctx| {
            Ok((n.cos_approx(m, ctx)?, m as isize - 2))
        })?;

        Ok(guard.finish(self, t, rm))
    }
}
