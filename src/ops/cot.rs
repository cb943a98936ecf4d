//! Cotangent.

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

struct Cot;

impl SpecialValues for Cot {
    fn on_inf(_s: Sign) -> Special {
        Special::Nan
    }

    fn on_zero(s: Sign) -> Special {
        Special::Pole(s)
    }
}

impl InverseFn for Cot {
    fn inverse(
        dst: &mut BigFloat,
        x: &BigFloat,
        rm: RoundingMode,
        ctx: &mut Context,
    ) -> Result<Ternary, Error> {
        dst.set_tan(x, rm, ctx)
    }

    fn shortcut(
        x: &BigFloatNumber,
        p: usize,
        rm: RoundingMode,
    ) -> Result<Option<(BigFloatNumber, Ternary)>, Error> {
        // 1/x - cot(x) < x/3
        if x.exponent() <= -2 * (x.precision().max(p) as Exponent) {
            return x.recip_correction(x.sign().invert(), p, rm).map(Some);
        }

        Ok(None)
    }
}

impl BigFloat {
    /// Sets `self` to the cotangent of `x`. The argument is an angle in radians.
    pub fn set_cot(
        &mut self,
        x: &BigFloat,
        rm: RoundingMode,
        ctx: &mut Context,
    ) -> Result<Ternary, Error> {
        gen_inverse::<Cot>(self, x, rm, ctx)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::ctx::Flags;
    use crate::ops::test_util::assert_parts;

    #[test]
    fn test_cot() {
        let mut ctx = Context::new();

        let one = BigFloat::from_i64(1, 64).unwrap();
        let (d, t) = one.cot(53, RoundingMode::ToEven, &mut ctx).unwrap();
        assert_parts(&d, &[0xa4602e8270e7f000], 0, Sign::Pos);
        assert_eq!(t, Ternary::RoundedUp);

        let x = BigFloat::from_i64(-3, 64).unwrap();
        let (d, t) = x.cot(64, RoundingMode::Up, &mut ctx).unwrap();
        assert_parts(&d, &[0xe07cf2eb32f0ac84], 3, Sign::Pos);
        assert_eq!(t, Ternary::RoundedUp);

        // tiny argument
        let x = BigFloat::from_raw_parts(&[1 << 63], 1, Sign::Pos, -200).unwrap();
        let (d, t) = x.cot(20, RoundingMode::Down, &mut ctx).unwrap();
        assert_parts(&d, &[0xFFFFF00000000000], 201, Sign::Pos);
        assert_eq!(t, Ternary::RoundedDown);

        // special values
        ctx.clear_flags();
        let (d, t) = BigFloat::new(10).unwrap().cot(10, RoundingMode::Down, &mut ctx).unwrap();
        assert!(d.is_inf() && d.sign() == Sign::Pos);
        assert_eq!(t, Ternary::Exact);
        assert_eq!(ctx.flags(), Flags::DIVBY0);

        let (d, _) = BigFloat::inf(10, Sign::Pos).unwrap().cot(10, RoundingMode::ToEven, &mut ctx).unwrap();
        assert!(d.is_nan());
        assert_eq!(ctx.flags(), Flags::DIVBY0 | Flags::NAN);
    }
}
