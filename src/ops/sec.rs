//! Secant.

use crate::common::consts::ONE;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::Ternary;
use crate::ext::BigFloat;
use crate::num::BigFloatNumber;
use crate::ops::inverse::gen_inverse;
use crate::ops::inverse::InverseFn;
use crate::ops::special::Special;
use crate::ops::special::SpecialValues;

struct Sec;

impl SpecialValues for Sec {
    fn on_inf(_s: Sign) -> Special {
        Special::Nan
    }

    fn on_zero(_s: Sign) -> Special {
        Special::Int(1)
    }
}

impl InverseFn for Sec {
    fn inverse(
        dst: &mut BigFloat,
        x: &BigFloat,
        rm: RoundingMode,
        ctx: &mut Context,
    ) -> Result<Ternary, Error> {
        dst.set_cos(x, rm, ctx)
    }

    fn shortcut(
        x: &BigFloatNumber,
        p: usize,
        rm: RoundingMode,
    ) -> Result<Option<(BigFloatNumber, Ternary)>, Error> {
        // sec(x) - 1 < x^2
        if 2 * x.exponent() <= -(p as Exponent) - 3 {
            return ONE.add_correction(Sign::Pos, p, rm).map(Some);
        }

        Ok(None)
    }
}

impl BigFloat {
    /// Sets `self` to the secant of `x`. The argument is an angle in radians.
    pub fn set_sec(
        &mut self,
        x: &BigFloat,
        rm: RoundingMode,
        ctx: &mut Context,
    ) -> Result<Ternary, Error> {
        gen_inverse::<Sec>(self, x, rm, ctx)
    }
}
