//! Hyperbolic cotangent.

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
use crate::ops::tanh::signed_one;
use crate::ops::tanh::tanh_near_one;

struct Coth;

impl SpecialValues for Coth {
    fn on_inf(s: Sign) -> Special {
        Special::Int(s.to_int() as i64)
    }

    fn on_zero(s: Sign) -> Special {
        Special::Pole(s)
    }
}

impl InverseFn for Coth {
    fn inverse(
        dst: &mut BigFloat,
        x: &BigFloat,
        rm: RoundingMode,
        ctx: &mut Context,
    ) -> Result<Ternary, Error> {
        dst.set_tanh(x, rm, ctx)
    }

    fn shortcut(
        x: &BigFloatNumber,
        p: usize,
        rm: RoundingMode,
    ) -> Result<Option<(BigFloatNumber, Ternary)>, Error> {
        let e = x.exponent();

        // coth(x) - 1/x < x/3
        if e <= -2 * (x.precision().max(p) as Exponent) {
            return x.recip_correction(x.sign(), p, rm).map(Some);
        }

        if tanh_near_one(e, p) {
            return signed_one(x.sign())?
                .add_correction(x.sign(), p, rm)
                .map(Some);
        }

        Ok(None)
    }
}

impl BigFloat {
    /// Sets `self` to the hyperbolic cotangent of `x`.
    pub fn set_coth(
        &mut self,
        x: &BigFloat,
        rm: RoundingMode,
        ctx: &mut Context,
    ) -> Result<Ternary, Error> {
        gen_inverse::<Coth>(self, x, rm, ctx)
    }
}
