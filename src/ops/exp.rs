//! Exponential.

use crate::common::consts::ONE;
use crate::common::util::log2_ceil;
use crate::common::util::sqrt_int;
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

/// Largest exponent of an argument for which the exponent of the result fits in `Exponent`.
pub(crate) const EXP_ARG_MAX_EXPONENT: Exponent = 61;

struct Exp;

impl SpecialValues for Exp {
    fn on_inf(s: Sign) -> Special {
        if s.is_positive() {
            Special::Inf(Sign::Pos)
        } else {
            Special::Zero(Sign::Pos)
        }
    }

    fn on_zero(_s: Sign) -> Special {
        Special::Int(1)
    }
}

impl BigFloatNumber {
    /// Computes `e^self` with the relative error below `2^(-w)`.
    /// The exponent of `self` must not exceed `EXP_ARG_MAX_EXPONENT`.
    ///
    /// The argument is reduced as `self = k*ln(2) + r`, then `r` is divided by `2^s`,
    /// the series is summed, and the sum is squared `s` times.
    pub(crate) fn exp_approx(&self, w: usize, ctx: &mut Context) -> Result<Self, Error> {
        debug_assert!(self.exponent() <= EXP_ARG_MAX_EXPONENT);

        let rm = RoundingMode::ToEven;
        let ex = self.exponent();

        let (mut r, k) = if ex > 0 {
            let ln2 = ctx.consts().ln2(w + ex as usize + 10)?;

            let (q, _) = self.div(&ln2, ex as usize + 16, RoundingMode::ToZero)?;
            let k = q.round_to_int(RoundingMode::ToEven)?;
            let ki = k.to_i64().ok_or(Error::InvalidArgument)?;

            let (r, _) = self.sub(&k.mul_full(&ln2)?, w + 8, rm)?;

            (r, ki)
        } else {
            (self.clone()?, 0)
        };

        let s = sqrt_int(w) / 2 + 1;
        let wp = w + s + log2_ceil(w + s + 64) + 12;

        if !r.is_zero() {
            r.set_exponent(r.exponent() - s as Exponent);
        }

        // 1 + r + r^2/2! + ...
        let mut sum = ONE.round(wp, rm)?.0;
        let mut term = ONE.round(wp, rm)?.0;
        let mut n: i64 = 0;

        loop {
            n += 1;

            let d = BigFloatNumber::from_i64(n, 64, rm)?.0;
            term = term.mul(&r, wp, rm)?.0.div(&d, wp, rm)?.0;

            if term.is_zero() || term.exponent() < -(wp as Exponent) {
                break;
            }

            sum = sum.add(&term, wp, rm)?.0;
        }

        for _ in 0..s {
            sum = sum.mul(&sum, wp, rm)?.0;
        }

        sum.set_exponent(sum.exponent() + k);

        Ok(sum)
    }
}

impl BigFloat {
    /// Sets `self` to `e` to the power of `x`.
    pub fn set_exp(
        &mut self,
        x: &BigFloat,
        rm: RoundingMode,
        ctx: &mut Context,
    ) -> Result<Ternary, Error> {
        let mut guard = ExponentGuard::new(ctx);

        if let Some(t) = dispatch::<Exp>(self, x, &mut guard)? {
            return Ok(guard.finish(self, t, rm));
        }

        let n = x.number();
        let p = self.precision();
        let e = n.exponent();

        if e > EXP_ARG_MAX_EXPONENT {
            return Ok(if n.is_positive() {
                guard.overflow(self, rm, Sign::Pos)
            } else {
                let rm = if rm == RoundingMode::ToEven {
                    RoundingMode::ToZero
                } else {
                    rm
                };
                guard.underflow(self, rm, Sign::Pos)
            });
        }

        // |e^x - 1| < 2|x|
        if e + 1 <= -(p as Exponent) - 3 {
            let t = self.set_correction(&ONE, n.sign(), rm)?;
            return Ok(guard.finish(self, t, rm));
        }

        let t = ziv(self, rm, &mut guard, |m, ctx| Ok((n.exp_approx(m, ctx)?, m as isize - 1)))?;

        Ok(guard.finish(self, t, rm))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::ctx::Flags;
    use crate::ops::test_util::assert_parts;
    use crate::ops::test_util::frac;

    #[test]
    fn test_exp() {
        let mut ctx = Context::new();
        let one = BigFloat::from_i64(1, 64).unwrap();

        let (d, t) = one.exp(53, RoundingMode::ToEven, &mut ctx).unwrap();
        assert_parts(&d, &[0xadf85458a2bb4800], 2, Sign::Pos);
        assert_eq!(t, Ternary::RoundedDown);

        let (d, t) = one.neg().unwrap().exp(10, RoundingMode::Up, &mut ctx).unwrap();
        assert_parts(&d, &[0xbc80000000000000], -1, Sign::Pos);
        assert_eq!(t, Ternary::RoundedUp);

        let x = BigFloat::from_i64(100, 64).unwrap();
        let (d, t) = x.exp(64, RoundingMode::ToZero, &mut ctx).unwrap();
        assert_parts(&d, &[0x9a4a54d8b8dfa566], 145, Sign::Pos);
        assert_eq!(t, Ternary::RoundedDown);

        let x = frac(Sign::Pos, -9);
        let (d, t) = x.exp(20, RoundingMode::Down, &mut ctx).unwrap();
        assert_parts(&d, &[0x8020000000000000], 1, Sign::Pos);
        assert_eq!(t, Ternary::RoundedDown);

        assert_eq!(ctx.flags(), Flags::INEXACT);
    }

    #[test]
    fn test_exp_tiny() {
        let mut ctx = Context::new();
        let x = frac(Sign::Pos, -99);

        let (d, t) = x.exp(20, RoundingMode::Down, &mut ctx).unwrap();
        assert_eq!(d, BigFloat::from_i64(1, 1).unwrap());
        assert_eq!(t, Ternary::RoundedDown);

        let (d, t) = x.exp(20, RoundingMode::Up, &mut ctx).unwrap();
        assert_parts(&d, &[0x8000100000000000], 1, Sign::Pos);
        assert_eq!(t, Ternary::RoundedUp);

        let (d, t) = x.neg().unwrap().exp(20, RoundingMode::Down, &mut ctx).unwrap();
        assert_parts(&d, &[0xFFFFF00000000000], 0, Sign::Pos);
        assert_eq!(t, Ternary::RoundedDown);

        // the result is found without the Ziv loop
        assert_eq!(ctx.ziv_stats().loops, 0);
    }

    #[test]
    fn test_exp_special() {
        let mut ctx = Context::new();
        let rm = RoundingMode::ToEven;

        let (d, t) = BigFloat::nan(10).unwrap().exp(10, rm, &mut ctx).unwrap();
        assert!(d.is_nan());
        assert_eq!(t, Ternary::Exact);
        assert_eq!(ctx.flags(), Flags::NAN);

        let (d, _) = BigFloat::inf(10, Sign::Pos).unwrap().exp(10, rm, &mut ctx).unwrap();
        assert!(d.is_inf() && d.sign() == Sign::Pos);

        let (d, _) = BigFloat::inf(10, Sign::Neg).unwrap().exp(10, rm, &mut ctx).unwrap();
        assert!(d.is_zero() && d.sign() == Sign::Pos);

        let (d, t) = BigFloat::new(10).unwrap().neg().unwrap().exp(10, rm, &mut ctx).unwrap();
        assert_eq!(d, BigFloat::from_i64(1, 1).unwrap());
        assert_eq!(t, Ternary::Exact);

        // out of range
        ctx.clear_flags();
        let huge = BigFloat::from_raw_parts(&[1 << 63], 1, Sign::Pos, 100).unwrap();
        let (d, t) = huge.exp(10, rm, &mut ctx).unwrap();
        assert!(d.is_inf());
        assert_eq!(t, Ternary::RoundedUp);
        assert_eq!(ctx.flags(), Flags::OVERFLOW | Flags::INEXACT);

        let (d, t) = huge.neg().unwrap().exp(10, rm, &mut ctx).unwrap();
        assert!(d.is_zero() && d.sign() == Sign::Pos);
        assert_eq!(t, Ternary::RoundedDown);
        assert!(ctx.flags().contains(Flags::UNDERFLOW));

        let (d, t) = huge.neg().unwrap().exp(10, RoundingMode::Up, &mut ctx).unwrap();
        assert_eq!(d.exponent(), Some(crate::defs::EXPONENT_MIN));
        assert_eq!(t, Ternary::RoundedUp);

        ctx.set_emax(10).unwrap();
        let x = BigFloat::from_i64(8, 10).unwrap();
        let (d, t) = x.exp(10, RoundingMode::ToZero, &mut ctx).unwrap();
        assert_eq!(d.exponent(), Some(10));
        assert_eq!(t, Ternary::RoundedDown);
    }
}
