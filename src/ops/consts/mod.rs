//! Cache of mathematical constants.

mod ln2;
mod pi;

use crate::common::util::log2_ceil;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::num::BigFloatNumber;

/// Computes the constant with the error below `2^(EXP - w - 2)`.
type ComputeFn = fn(usize) -> Result<BigFloatNumber, Error>;

/// Holds the most precise value of a constant computed so far.
#[derive(Debug)]
struct ConstCache {
    val: Option<(BigFloatNumber, usize)>,
    compute: ComputeFn,
}

impl ConstCache {
    fn new(compute: ComputeFn) -> Self {
        ConstCache { val: None, compute }
    }

    /// Returns the value of the constant rounded to precision `w` with the error below `2^(EXP - w)`.
    fn for_prec(&mut self, w: usize) -> Result<BigFloatNumber, Error> {
        let wg = match &self.val {
            Some((v, good)) if *good > w => return Ok(v.round(w, RoundingMode::ToEven)?.0),
            Some((_, good)) => (w + 16).max(good * 2),
            None => w + 16,
        };

        let v = (self.compute)(wg)?;
        let ret = v.round(w, RoundingMode::ToEven)?.0;

        self.val = Some((v, wg));

        Ok(ret)
    }
}

/// Constants cache of a context.
///
/// Values are computed lazily on the first request and recomputed when a higher precision is requested.
#[derive(Debug)]
pub(crate) struct Consts {
    pi: ConstCache,
    ln2: ConstCache,
}

impl Consts {
    pub fn new() -> Self {
        Consts {
            pi: ConstCache::new(pi::compute_pi),
            ln2: ConstCache::new(ln2::compute_ln2),
        }
    }

    /// Returns π rounded to precision `w` with the error below `2^(EXP - w)`.
    pub fn pi(&mut self, w: usize) -> Result<BigFloatNumber, Error> {
        self.pi.for_prec(w)
    }

    /// Returns ln(2) rounded to precision `w` with the error below `2^(EXP - w)`.
    pub fn ln2(&mut self, w: usize) -> Result<BigFloatNumber, Error> {
        self.ln2.for_prec(w)
    }
}

/// Working precision of the series for the target precision `wg`.
fn series_precision(wg: usize) -> usize {
    wg + log2_ceil(wg + 64) + 12
}

/// Sums `s^k / ((2k + 1) n^(2k + 1))` for `k = 0, 1, ...` with precision `w`,
/// where `s` is -1 if `alternate` is true, and 1 otherwise.
/// The result is `atan(1/n)` or `atanh(1/n)` respectively, with the error below `(k + 3)` units in the last place.
fn recip_series(n: i64, alternate: bool, w: usize) -> Result<BigFloatNumber, Error> {
    let rm = RoundingMode::ToEven;

    let nn = BigFloatNumber::from_i64(n * n, 64, rm)?.0;
    let mut pw = BigFloatNumber::from_i64(n, 64, rm)?.0.reciprocal(w, rm)?.0;
    let mut sum = pw.clone()?;
    let mut k: i64 = 0;

    loop {
        k += 1;

        pw = pw.div(&nn, w, rm)?.0;
        let d = BigFloatNumber::from_i64(2 * k + 1, 64, rm)?.0;
        let term = pw.div(&d, w, rm)?.0;

        if term.exponent() < sum.exponent() - w as Exponent - 2 {
            break;
        }

        sum = if alternate && k & 1 == 1 {
            sum.sub(&term, w, rm)?.0
        } else {
            sum.add(&term, w, rm)?.0
        };
    }

    Ok(sum)
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_consts() {
        let mut cc = Consts::new();

        let pi = cc.pi(64).unwrap();
        assert_eq!(pi.exponent(), 2);
        assert_eq!(pi.mantissa().digits(), &[0xc90fdaa22168c235]);

        let pi = cc.pi(32).unwrap();
        assert_eq!(pi.mantissa().digits(), &[0xc90fdaa200000000]);

        let ln2 = cc.ln2(64).unwrap();
        assert_eq!(ln2.exponent(), 0);
        assert_eq!(ln2.mantissa().digits(), &[0xb17217f7d1cf79ac]);

        // recomputed for a larger precision
        let pi = cc.pi(1000).unwrap();
        assert_eq!(pi.precision(), 1000);
        assert_eq!(pi.mantissa().digits()[15], 0xc90fdaa22168c234);
    }
}
