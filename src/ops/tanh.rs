//! Hyperbolic tangent.

use crate::common::consts::ONE;
use crate::common::util::log2_ceil;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::Ternary;
use crate::ext::BigFloat;
use crate::num::BigFloatNumber;
use crate::ops::range::ExponentGuard;
use crate::ops::special::dispatch;
use crate::ops::special::Special;
use crate::ops::special::SpecialValues;
use crate::ops::ziv::ziv;

struct Tanh;

impl SpecialValues for Tanh {
    fn on_inf(s: Sign) -> Special {
        Special::Int(s.to_int() as i64)
    }

    fn on_zero(s: Sign) -> Special {
        Special::Zero(s)
    }
}

/// Returns true if `|1 - |tanh(x)|| < 2^(-p - 3)` for `x` with the exponent `e`.
pub(crate) fn tanh_near_one(e: Exponent, p: usize) -> bool {
    // 1 - tanh(|x|) < 2 * e^(-2|x|), and |x| >= (p + 4) / 2
    e > 0 && e as usize >= log2_ceil(p + 4)
}

/// Returns 1 with the sign `s`.
pub(crate) fn signed_one(s: Sign) -> Result<BigFloatNumber, Error> {
    let mut ret = ONE.clone()?;
    ret.set_sign(s);
    Ok(ret)
}

impl BigFloat {
    /// Sets `self` to the hyperbolic tangent of `x`.
    pub fn set_tanh(
        &mut self,
        x: &BigFloat,
        rm: RoundingMode,
        ctx: &mut Context,
    ) -> Result<Ternary, Error> {
        let mut guard = ExponentGuard::new(ctx);

        if let Some(t) = dispatch::<Tanh>(self, x, &mut guard)? {
            return Ok(guard.finish(self, t, rm));
        }

        let n = x.number();
        let p = self.precision();
        let e = n.exponent();

        // x - tanh(x) < |x|^3 / 2
        if 2 * e <= -(((p + 1).max(n.precision())) as Exponent) - 2 {
            let t = self.set_correction(n, n.sign().invert(), rm)?;
            return Ok(guard.finish(self, t, rm));
        }

        if tanh_near_one(e, p) {
            let t = self.set_correction(&signed_one(n.sign())?, n.sign().invert(), rm)?;
            return Ok(guard.finish(self, t, rm));
        }

        // 2|x|
        let mut a2 = n.abs()?;
        a2.set_exponent(e + 1);

        let c = (-e).max(0) as usize;

        let t = ziv(self, rm, &mut guard, |m, ctx| {
            let w = m + c + 5;
            let rm = RoundingMode::ToEven;

            // (e^(2|x|) - 1) / (e^(2|x|) + 1)
            let e2 = a2.exp_approx(w, ctx)?;
            let (num, _) = e2.sub(&ONE, w, rm)?;
            let (den, _) = e2.add(&ONE, w, rm)?;
            let (mut ret, _) = num.div(&den, w, rm)?;

            ret.set_sign(n.sign());

            Ok((ret, m as isize))
        })?;

        Ok(guard.finish(self, t, rm))
    }
}
