//! Hyperbolic sine.

use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::Ternary;
use crate::ext::BigFloat;
use crate::ops::exp::EXP_ARG_MAX_EXPONENT;
use crate::ops::range::ExponentGuard;
use crate::ops::special::dispatch;
use crate::ops::special::Special;
use crate::ops::special::SpecialValues;
use crate::ops::ziv::ziv;

struct Sinh;

impl SpecialValues for Sinh {
    fn on_inf(s: Sign) -> Special {
        Special::Inf(s)
    }

    fn on_zero(s: Sign) -> Special {
        Special::Zero(s)
    }
}

impl BigFloat {
    /// Sets `self` to the hyperbolic sine of `x`.
    pub fn set_sinh(
        &mut self,
        x: &BigFloat,
        rm: RoundingMode,
        ctx: &mut Context,
    ) -> Result<Ternary, Error> {
        let mut guard = ExponentGuard::new(ctx);

        if let Some(t) = dispatch::<Sinh>(self, x, &mut guard)? {
            return Ok(guard.finish(self, t, rm));
        }

        let n = x.number();
        let p = self.precision();
        let e = n.exponent();

        if e > EXP_ARG_MAX_EXPONENT {
            return Ok(guard.overflow(self, rm, n.sign()));
        }

        // sinh(x) - x < |x|^3 / 4
        if 2 * e <= -(((p + 1).max(n.precision())) as Exponent) - 1 {
            let t = self.set_correction(n, n.sign(), rm)?;
            return Ok(guard.finish(self, t, rm));
        }

        let a = n.abs()?;

        // cancellation in e^a - e^(-a) for small a
        let c = (-e).max(0) as usize;

        let t = ziv(self, rm, &mut guard, |m, ctx| {
            let w = m + c + 5;

            let ea = a.exp_approx(w, ctx)?;
            let (ra, _) = ea.reciprocal(w, RoundingMode::ToEven)?;
            let (mut ret, _) = ea.sub(&ra, w, RoundingMode::ToEven)?;

            ret.set_exponent(ret.exponent() - 1);
            ret.set_sign(n.sign());

            Ok((ret, m as isize))
        })?;

        Ok(guard.finish(self, t, rm))
    }
}
