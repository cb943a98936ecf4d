//! Hyperbolic secant.

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

struct Sech;

impl SpecialValues for Sech {
    fn on_inf(_s: Sign) -> Special {
        Special::Zero(Sign::Pos)
    }

    fn on_zero(_s: Sign) -> Special {
        Special::Int(1)
    }
}

impl InverseFn for Sech {
    fn inverse(
        dst: &mut BigFloat,
        x: &BigFloat,
        rm: RoundingMode,
        ctx: &mut Context,
    ) -> Result<Ternary, Error> {
        dst.set_cosh(x, rm, ctx)
    }

    fn shortcut(
        x: &BigFloatNumber,
        p: usize,
        rm: RoundingMode,
    ) -> Result<Option<(BigFloatNumber, Ternary)>, Error> {
        // 1 - sech(x) < x^2 / 2
        if 2 * x.exponent() <= -(p as Exponent) - 2 {
            return ONE.add_correction(Sign::Neg, p, rm).map(Some);
        }

        Ok(None)
    }
}

impl BigFloat {
    /// Sets `self` to the hyperbolic secant of `x`.
    pub fn set_sech(
        &mut self,
        x: &BigFloat,
        rm: RoundingMode,
        ctx: &mut Context,
    ) -> Result<Ternary, Error> {
        gen_inverse::<Sech>(self, x, rm, ctx)
    }
}
