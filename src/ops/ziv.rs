//! Ziv's strategy: evaluate with an increasing working precision until the result can be correctly rounded.

use crate::common::util::log2_ceil;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::Ternary;
use crate::defs::ZIV_EXTRA_BITS;
use crate::ext::BigFloat;
use crate::num::BigFloatNumber;
use tracing::trace;

/// Working precision control of a Ziv loop for the target precision `p`.
#[derive(Debug)]
pub(crate) struct ZivLoop {
    p: usize,
    m: usize,
    retries: usize,
}

impl ZivLoop {
    pub fn new(p: usize) -> Self {
        ZivLoop {
            p,
            m: p + log2_ceil(p) + ZIV_EXTRA_BITS,
            retries: 0,
        }
    }

    /// Current working precision.
    #[inline]
    pub fn precision(&self) -> usize {
        self.m
    }

    #[inline]
    pub fn retries(&self) -> usize {
        self.retries
    }

    /// Doubles the excess of the working precision over the target precision.
    pub fn next(&mut self) {
        self.m += self.m - self.p;
        self.retries += 1;
        trace!(p = self.p, m = self.m, retries = self.retries, "ziv retry");
    }
}

/// Runs a Ziv loop for the precision of `dst`.
///
/// `compute` receives the working precision `m` and returns an approximation `z`
/// with the precision not smaller than the returned error bound `err`,
/// such that the exact value is within `2^(EXP(z) - err)` of `z`.
/// The first approximation which can be rounded is stored in `dst`.
pub(crate) fn ziv<F>(
    dst: &mut BigFloat,
    rm: RoundingMode,
    ctx: &mut Context,
    mut compute: F,
) -> Result<Ternary, Error>
where
    F: FnMut(usize, &mut Context) -> Result<(BigFloatNumber, isize), Error>,
{
    let p = dst.precision();
    let mut zl = ZivLoop::new(p);

    loop {
        let (z, err) = compute(zl.precision(), ctx)?;

        if z.can_round(err, p, rm) {
            ctx.record_ziv(zl.retries());
            return dst.set_rounded(&z, rm);
        }

        zl.next();
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_ziv_loop() {
        let mut zl = ZivLoop::new(53);
        assert_eq!(zl.precision(), 62);
        zl.next();
        assert_eq!(zl.precision(), 71);
        zl.next();
        assert_eq!(zl.precision(), 89);
        assert_eq!(zl.retries(), 2);

        let zl = ZivLoop::new(1);
        assert_eq!(zl.precision(), 4);
    }

    #[test]
    fn test_ziv() {
        // 1/3 with the error bound growing with the working precision
        let mut ctx = Context::new();
        let mut dst = BigFloat::new(10).unwrap();
        let three = BigFloatNumber::from_i64(3, 2, RoundingMode::ToEven).unwrap().0;
        let mut calls = 0;

        let t = ziv(&mut dst, RoundingMode::ToEven, &mut ctx, |m, _| {
            calls += 1;
            let (z, _) = three.reciprocal(m, RoundingMode::ToEven)?;
            Ok((z, if calls < 3 { 0 } else { m as isize - 1 }))
        })
        .unwrap();

        assert_eq!(calls, 3);
        assert_eq!(t, Ternary::RoundedUp);
        assert_eq!(dst.as_raw_parts().unwrap().0, &[0xAAC0000000000000]);
        assert_eq!(ctx.ziv_stats().max_retries, 2);
        assert_eq!(ctx.ziv_stats().loops, 1);
    }
}
