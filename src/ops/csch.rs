//! Hyperbolic cosecant.

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

struct Csch;

impl SpecialValues for Csch {
    fn on_inf(s: Sign) -> Special {
        Special::Zero(s)
    }

    fn on_zero(s: Sign) -> Special {
        Special::Pole(s)
    }
}

impl InverseFn for Csch {
    fn inverse(
        dst: &mut BigFloat,
        x: &BigFloat,
        rm: RoundingMode,
        ctx: &mut Context,
    ) -> Result<Ternary, Error> {
        dst.set_sinh(x, rm, ctx)
    }

    fn shortcut(
        x: &BigFloatNumber,
        p: usize,
        rm: RoundingMode,
    ) -> Result<Option<(BigFloatNumber, Ternary)>, Error> {
        // 1/x - csch(x) < x/6
        if x.exponent() <= -2 * (x.precision().max(p) as Exponent) {
            return x.recip_correction(x.sign().invert(), p, rm).map(Some);
        }

        Ok(None)
    }
}

impl BigFloat {
    /// Sets `self` to the hyperbolic cosecant of `x`.
    pub fn set_csch(
        &mut self,
        x: &BigFloat,
        rm: RoundingMode,
        ctx: &mut Context,
    ) -> Result<Ternary, Error> {
        gen_inverse::<Csch>(self, x, rm, ctx)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::ctx::Flags;
    use crate::ops::test_util::assert_parts;
    use crate::ops::test_util::frac;

    #[test]
    fn test_csch() {
        let mut ctx = Context::new();

        let one = BigFloat::from_i64(1, 64).unwrap();
        let (d, t) = one.csch(53, RoundingMode::ToEven, &mut ctx).unwrap();
        assert_parts(&d, &[0xd9d5c53c5c860800], 0, Sign::Pos);
        assert_eq!(t, Ternary::RoundedUp);

        let x = frac(Sign::Neg, 0);
        let (d, t) = x.csch(30, RoundingMode::ToZero, &mut ctx).unwrap();
        assert_parts(&d, &[0xf5a2ee4400000000], 1, Sign::Neg);
        assert_eq!(t, Ternary::RoundedUp);

        // tiny argument
        let x = BigFloat::from_raw_parts(&[1 << 63], 1, Sign::Neg, -200).unwrap();
        let (d, t) = x.csch(20, RoundingMode::ToZero, &mut ctx).unwrap();
        assert_parts(&d, &[0xFFFFF00000000000], 201, Sign::Neg);
        assert_eq!(t, Ternary::RoundedUp);

        // large argument
        ctx.clear_flags();
        let x = BigFloat::from_i64(-1000, 64).unwrap();
        let (d, t) = x.csch(20, RoundingMode::ToEven, &mut ctx).unwrap();
        assert_parts(&d, &[0x9E21100000000000], -1441, Sign::Neg);
        assert_eq!(t, Ternary::RoundedDown);
        assert_eq!(ctx.flags(), Flags::INEXACT);

        ctx.set_emin(-1000).unwrap();
        let (d, t) = x.csch(20, RoundingMode::ToEven, &mut ctx).unwrap();
        assert!(d.is_zero() && d.sign() == Sign::Neg);
        assert_eq!(t, Ternary::RoundedUp);
        assert!(ctx.flags().contains(Flags::UNDERFLOW));

        // sinh overflows
        let huge = BigFloat::from_raw_parts(&[1 << 63], 1, Sign::Neg, 62).unwrap();
        for rm in [RoundingMode::ToEven, RoundingMode::ToZero] {
            ctx.clear_flags();
            let (d, t) = huge.csch(20, rm, &mut ctx).unwrap();
            assert!(d.is_zero() && d.sign() == Sign::Neg);
            assert_eq!(t, Ternary::RoundedUp);
            assert_eq!(ctx.flags(), Flags::UNDERFLOW | Flags::INEXACT);
        }

        // special values
        ctx.clear_flags();
        let (d, _) = BigFloat::new(10).unwrap().neg().unwrap().csch(10, RoundingMode::ToEven, &mut ctx).unwrap();
        assert!(d.is_inf() && d.sign() == Sign::Neg);
        assert_eq!(ctx.flags(), Flags::DIVBY0);

        let (d, _) = BigFloat::inf(10, Sign::Neg).unwrap().csch(10, RoundingMode::ToEven, &mut ctx).unwrap();
        assert!(d.is_zero() && d.sign() == Sign::Neg);
    }
}
