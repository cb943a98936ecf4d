//! Cosecant.

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

struct Csc;

impl SpecialValues for Csc {
    fn on_inf(_s: Sign) -> Special {
        Special::Nan
    }

    fn on_zero(s: Sign) -> Special {
        Special::Pole(s)
    }
}

impl InverseFn for Csc {
    fn inverse(
        dst: &mut BigFloat,
        x: &BigFloat,
        rm: RoundingMode,
        ctx: &mut Context,
    ) -> Result<Ternary, Error> {
        dst.set_sin(x, rm, ctx)
    }

    fn shortcut(
        x: &BigFloatNumber,
        p: usize,
        rm: RoundingMode,
    ) -> Result<Option<(BigFloatNumber, Ternary)>, Error> {
        // csc(x) - 1/x < x/6
        if x.exponent() <= -2 * (x.precision().max(p) as Exponent) {
            return x.recip_correction(x.sign(), p, rm).map(Some);
        }

        Ok(None)
    }
}

impl BigFloat {
    /// Sets `self` to the cosecant of `x`. The argument is an angle in radians.
    pub fn set_csc(
        &mut self,
        x: &BigFloat,
        rm: RoundingMode,
        ctx: &mut Context,
    ) -> Result<Ternary, Error> {
        gen_inverse::<Csc>(self, x, rm, ctx)
    }
}
