//! Argument reduction and series of trigonometric functions.

use crate::common::consts::ONE;
use crate::common::util::log2_ceil;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::num::BigFloatNumber;
use tracing::trace;

/// Reduces `x` to `r = x - k*π/2` with `|r| <= π/4` if `|x| >= 1`, or returns `x` itself.
/// Returns `r` with the relative error below `2^(-w - 9)` and `k mod 4`.
///
/// The precision of π/2 is increased until it covers the cancellation in the subtraction.
fn reduce(x: &BigFloatNumber, w: usize, ctx: &mut Context) -> Result<(BigFloatNumber, u8), Error> {
    let ex = x.exponent();

    if ex <= 0 {
        return Ok((x.clone()?, 0));
    }

    let ex = ex as usize;
    let mut wpi = w + ex + 12;

    loop {
        let mut half_pi = ctx.consts().pi(wpi)?;
        half_pi.set_exponent(half_pi.exponent() - 1);

        let (q, _) = x.div(&half_pi, ex + 16, RoundingMode::ToZero)?;
        let k = q.round_to_int(RoundingMode::ToEven)?;

        let (r, _) = x.sub(&k.mul_full(&half_pi)?, w + 10, RoundingMode::ToEven)?;

        if r.is_zero() {
            wpi *= 2;
            continue;
        }

        // the error of k*π/2 is below 2^(ex + 1 - wpi)
        let need = w + ex + 12 + (-r.exponent()).max(0) as usize;

        if wpi >= need {
            return Ok((r, k.int_mod4()));
        }

        trace!(wpi, need, "argument reduction retry");

        wpi = need;
    }
}

/// Sums the series of `sin(r)` if `odd` is true, or `cos(r)` otherwise, for `|r| < 1`.
/// The relative error of the result is below `2^(-w - 8)`.
fn series(r: &BigFloatNumber, odd: bool, w: usize) -> Result<BigFloatNumber, Error> {
    let rm = RoundingMode::ToEven;
    let wp = w + log2_ceil(w + 64) + 10;

    let r2 = r.mul(r, wp, rm)?.0.neg()?;

    let (mut term, mut n) = if odd {
        (r.round(wp, rm)?.0, 1)
    } else {
        (ONE.round(wp, rm)?.0, 0)
    };

    let mut sum = term.clone()?;

    loop {
        // -r^2 / ((n + 1)(n + 2))
        let d = BigFloatNumber::from_i64((n + 1) * (n + 2), 64, rm)?.0;
        n += 2;

        term = term.mul(&r2, wp, rm)?.0.div(&d, wp, rm)?.0;

        if term.is_zero() || term.exponent() < sum.exponent() - wp as Exponent - 2 {
            break;
        }

        sum = sum.add(&term, wp, rm)?.0;
    }

    Ok(sum)
}

impl BigFloatNumber {
    /// Computes the sine of `self` with the relative error below `2^(-w - 6)`.
    pub(crate) fn sin_approx(&self, w: usize, ctx: &mut Context) -> Result<Self, Error> {
        let (r, q) = reduce(self, w, ctx)?;

        let mut ret = series(&r, q & 1 == 0, w)?;

        if q >= 2 {
            ret.set_sign(ret.sign().invert());
        }

        Ok(ret)
    }

    /// Computes the cosine of `self` with the relative error below `2^(-w - 6)`.
    pub(crate) fn cos_approx(&self, w: usize, ctx: &mut Context) -> Result<Self, Error> {
        let (r, q) = reduce(self, w, ctx)?;

        let mut ret = series(&r, q & 1 == 1, w)?;

        if q == 1 || q == 2 {
            ret.set_sign(ret.sign().invert());
        }

        Ok(ret)
    }

    /// Computes the tangent of `self` with the relative error below `2^(-w - 5)`.
    pub(crate) fn tan_approx(&self, w: usize, ctx: &mut Context) -> Result<Self, Error> {
        let (r, q) = reduce(self, w, ctx)?;

        let s = series(&r, true, w)?;
        let c = series(&r, false, w)?;

        if q & 1 == 0 {
            Ok(s.div(&c, w + 8, RoundingMode::ToEven)?.0)
        } else {
            // tan(r + π/2) = -cot(r)
            Ok(c.div(&s, w + 8, RoundingMode::ToEven)?.0.neg()?)
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::Sign;

    #[test]
    fn test_reduce() {
        let mut ctx = Context::new();

        let x = BigFloatNumber::from_i64(10, 64, RoundingMode::ToEven).unwrap().0;
        let (r, q) = reduce(&x, 64, &mut ctx).unwrap();
        assert_eq!(q, 2);
        assert_eq!(r.exponent(), 0);
        assert_eq!(r.round(20, RoundingMode::ToZero).unwrap().0.mantissa().digits(), &[0x9341C00000000000]);

        let x = BigFloatNumber::from_i64(-7, 64, RoundingMode::ToEven).unwrap().0;
        let (r, q) = reduce(&x, 64, &mut ctx).unwrap();
        assert_eq!(q, 0);
        assert_eq!(r.sign(), Sign::Neg);
        assert_eq!(r.round(22, RoundingMode::ToZero).unwrap().0.mantissa().digits(), &[0xB781280000000000]);

        // |x| < 1 is not reduced
        let x = BigFloatNumber::from_raw_parts(&[0xE000000000000000], 3, Sign::Pos, 0).unwrap();
        let (r, q) = reduce(&x, 64, &mut ctx).unwrap();
        assert_eq!(q, 0);
        assert_eq!(r.cmp(&x), core::cmp::Ordering::Equal);
    }

    #[test]
    fn test_series() {
        // cos(0.5) and sin(0.5)
        let r = BigFloatNumber::from_raw_parts(&[0x8000000000000000], 1, Sign::Pos, 0).unwrap();

        let c = series(&r, false, 64).unwrap();
        let (c, _) = c.round(30, RoundingMode::Down).unwrap();
        assert_eq!(c.mantissa().digits(), &[0xe0a9403000000000]);

        let s = series(&r.neg().unwrap(), true, 64).unwrap();
        assert!(s.is_negative());
        assert_eq!(s.exponent(), -1);
    }
}
