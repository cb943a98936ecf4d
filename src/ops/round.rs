//! Rounding decisions for approximations with a known error bound.

use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::Ternary;
use crate::num::BigFloatNumber;

impl BigFloatNumber {
    /// Determines if the approximation `self` of an unknown value `v` satisfying
    /// `|self - v| < 2^(EXP(self) - err)` can be rounded to precision `p` with the rounding mode `rm`
    /// giving the same result as rounding `v` itself.
    ///
    /// An error bound exceeding the precision of `self` means `self` is exact,
    /// so the caller must guarantee the precision of `self` is not smaller than `err`.
    pub fn can_round(&self, err: isize, p: usize, rm: RoundingMode) -> bool {
        if self.is_zero() || err <= 0 {
            return false;
        }

        let err = err as usize;

        if err > self.precision() {
            return true;
        }

        // one more bit to see the midpoint
        let p = p + rm.is_nearest() as usize;

        if err <= p {
            return false;
        }

        !self.mantissa().bits_uniform(p, err)
    }

    /// Rounds the value `self + d * dir` to precision `p`, where `d` is an unknown positive value
    /// smaller than `2^(EXP(self) - max(p + 1, prec(self)) - 3)`.
    /// `self` must not be zero. The returned ternary value is never exact.
    pub fn add_correction(
        &self,
        dir: Sign,
        p: usize,
        rm: RoundingMode,
    ) -> Result<(Self, Ternary), Error> {
        debug_assert!(!self.is_zero());

        let q = (p + 1).max(self.precision()) + 3;

        // u = 2^(EXP(self) - q)
        let mut u = Self::new(1)?;
        u.set_min_positive(dir, self.exponent() - q as Exponent + 1);

        let (sum, t) = self.add(&u, q, RoundingMode::ToZero)?;
        debug_assert!(t.is_exact());

        // the lowest bit of sum is set, so the rounding is never exact
        let (ret, t) = sum.round(p, rm)?;
        debug_assert!(!t.is_exact());

        Ok((ret, t))
    }

    /// Rounds the value `1/self + d * dir` to precision `p`, where `d` is an unknown positive value
    /// smaller than `|self|`, and `EXP(self) <= -2 * max(prec(self), p)`.
    pub fn recip_correction(
        &self,
        dir: Sign,
        p: usize,
        rm: RoundingMode,
    ) -> Result<(Self, Ternary), Error> {
        debug_assert!(self.exponent() <= -2 * (self.precision().max(p) as Exponent));

        // If 1/self is not a midpoint or a number of precision p, then d is too small to reach any of them.
        let (c, t) = self.reciprocal(p + 1, RoundingMode::ToZero)?;

        if t.is_exact() {
            c.add_correction(dir, p, rm)
        } else {
            self.reciprocal(p, rm)
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn num(w: u64, p: usize, e: Exponent) -> BigFloatNumber {
        BigFloatNumber::from_raw_parts(&[w], p, Sign::Pos, e).unwrap()
    }

    #[test]
    fn test_can_round() {
        let rm = RoundingMode::ToZero;

        // 0.1011 followed by zeroes
        let z = num(0xB000000000000000, 64, 0);
        assert!(!z.can_round(10, 4, rm));
        assert!(!z.can_round(0, 4, rm));
        assert!(!z.can_round(-5, 4, rm));
        assert!(!z.can_round(4, 4, rm));
        assert!(z.can_round(65, 4, rm));

        // 0.10111 followed by zeroes
        let z = num(0xB800000000000000, 64, 0);
        assert!(z.can_round(10, 4, rm));
        assert!(z.can_round(10, 4, RoundingMode::Up));
        assert!(!z.can_round(10, 4, RoundingMode::ToEven));
        assert!(!z.can_round(5, 4, RoundingMode::ToEven));

        // 0.1011 followed by ones
        let z = num(0xBFFFFFFFFFFFFFFF, 64, 0);
        assert!(!z.can_round(64, 4, rm));
        assert!(!z.can_round(64, 2, rm));
        assert!(z.can_round(64, 1, rm));
        assert!(!z.can_round(64, 1, RoundingMode::ToEven));

        assert!(!BigFloatNumber::new(64).unwrap().can_round(10, 4, rm));
    }

    #[test]
    fn test_add_correction() {
        let one = BigFloatNumber::from_i64(1, 1, RoundingMode::ToZero).unwrap().0;

        let (n, t) = one.add_correction(Sign::Neg, 10, RoundingMode::ToZero).unwrap();
        assert_eq!(n.exponent(), 0);
        assert_eq!(n.mantissa().digits(), &[0xFFC0000000000000]);
        assert_eq!(t, Ternary::RoundedDown);

        let (n, t) = one.add_correction(Sign::Neg, 10, RoundingMode::ToEven).unwrap();
        assert_eq!(n.exponent(), 1);
        assert!(n.is_power_of_two());
        assert_eq!(t, Ternary::RoundedUp);

        let (n, t) = one.add_correction(Sign::Pos, 10, RoundingMode::Up).unwrap();
        assert_eq!(n.exponent(), 1);
        assert_eq!(n.mantissa().digits(), &[0x8040000000000000]);
        assert_eq!(t, Ternary::RoundedUp);

        let (n, t) = one.add_correction(Sign::Pos, 10, RoundingMode::Down).unwrap();
        assert!(n.is_power_of_two());
        assert_eq!(t, Ternary::RoundedDown);

        let m1 = one.neg().unwrap();
        let (n, t) = m1.add_correction(Sign::Pos, 10, RoundingMode::ToZero).unwrap();
        assert!(n.is_negative());
        assert_eq!(n.mantissa().digits(), &[0xFFC0000000000000]);
        assert_eq!(t, Ternary::RoundedUp);
    }

    #[test]
    fn test_recip_correction() {
        // 1/x = 2^22 is exact
        let x = num(0x8000000000000000, 1, -21);
        let (n, t) = x.recip_correction(Sign::Pos, 10, RoundingMode::ToZero).unwrap();
        assert_eq!(n.exponent(), 23);
        assert!(n.is_power_of_two());
        assert_eq!(t, Ternary::RoundedDown);

        let (n, t) = x.recip_correction(Sign::Neg, 10, RoundingMode::ToZero).unwrap();
        assert_eq!(n.exponent(), 22);
        assert_eq!(n.mantissa().digits(), &[0xFFC0000000000000]);
        assert_eq!(t, Ternary::RoundedDown);

        // 1/x = 2^30/3 is not exact
        let x = num(0xC000000000000000, 2, -28);
        let (n, t) = x.recip_correction(Sign::Neg, 10, RoundingMode::ToEven).unwrap();
        assert_eq!(n.exponent(), 29);
        assert_eq!(n.mantissa().digits(), &[0xAAC0000000000000]);
        assert_eq!(t, Ternary::RoundedUp);
    }
}
