//! Hyperbolic cosine.

use crate::common::consts::ONE;
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

struct Cosh;

impl SpecialValues for Cosh {
    fn on_inf(_s: Sign) -> Special {
        Special::Inf(Sign::Pos)
    }

    fn on_zero(_s: Sign) -> Special {
        Special::Int(1)
    }
}

impl BigFloat {
    /// Sets `self` to the hyperbolic cosine of `x`.
    pub fn set_cosh(
        &mut self,
        x: &BigFloat,
        rm: RoundingMode,
        ctx: &mut Context,
    ) -> Result<Ternary, Error> {
        let mut guard = ExponentGuard::new(ctx);

        if let Some(t) = dispatch::<Cosh>(self, x, &mut guard)? {
            return Ok(guard.finish(self, t, rm));
        }

        let n = x.number();
        let p = self.precision();
        let e = n.exponent();

        if e > EXP_ARG_MAX_EXPONENT {
            return Ok(guard.overflow(self, rm, Sign::Pos));
        }

        // cosh(x) - 1 < x^2
        if 2 * e <= -(p as Exponent) - 3 {
            let t = self.set_correction(&ONE, Sign::Pos, rm)?;
            return Ok(guard.finish(self, t, rm));
        }

        let a = n.abs()?;

        let t = ziv(self, rm, &mut guard, |m, ctx| {
            let w = m + 3;

            let ea = a.exp_approx(w, ctx)?;
            let (ra, _) = ea.reciprocal(w, RoundingMode::ToEven)?;
            let (mut ret, _) = ea.add(&ra, w, RoundingMode::ToEven)?;

            ret.set_exponent(ret.exponent() - 1);

            Ok((ret, m as isize))
        })?;

        Ok(guard.finish(self, t, rm))
    }
}
