//! BigFloatNumber definition and basic arithmetic, comparison, and number manipulation operations.

use crate::common::buf::WordBuf;
use crate::common::consts::ONE;
use crate::common::util::add_carry;
use crate::common::util::count_leading_zeroes;
use crate::common::util::low_bits_nonzero;
use crate::common::util::shift_slice_left;
use crate::common::util::shift_slice_right;
use crate::common::util::sub_borrow;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::Ternary;
use crate::defs::Word;
use crate::defs::WORD_BIT_SIZE;
use crate::mantissa::Mantissa;
use core::cmp::Ordering;
use itertools::izip;

/// A finite floating point number `0.m * 2^e` with the mantissa `m` in `[1/2, 1)`, or zero.
///
/// The exponent is not limited by the exponent range of a context:
/// intermediate values of a computation may leave it.
#[derive(Debug, Hash)]
pub(crate) struct BigFloatNumber {
    e: Exponent,
    s: Sign,
    m: Mantissa,
}

impl BigFloatNumber {
    /// Returns a new number with value of 0 and precision of `p` bits.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory for mantissa.
    ///  - InvalidArgument: the precision is zero.
    pub fn new(p: usize) -> Result<Self, Error> {
        Self::new2(p, Sign::Pos)
    }

    /// Returns a new zero with the sign `s`.
    pub fn new2(p: usize, s: Sign) -> Result<Self, Error> {
        if p == 0 {
            return Err(Error::InvalidArgument);
        }

        Ok(BigFloatNumber {
            e: 0,
            s,
            m: Mantissa::new(p)?,
        })
    }

    /// Rounds the value `0.buf * 2^e` followed by the sticky bit to precision `p`.
    /// `buf` is used as a scratch buffer.
    pub(crate) fn round_words(
        buf: &mut [Word],
        sticky: bool,
        s: Sign,
        e: Exponent,
        p: usize,
        rm: RoundingMode,
    ) -> Result<(Self, Ternary), Error> {
        let lz = count_leading_zeroes(buf);

        if lz == buf.len() * WORD_BIT_SIZE {
            debug_assert!(!sticky);
            return Ok((Self::new2(p, s)?, Ternary::Exact));
        }

        shift_slice_left(buf, lz);

        let (m, carry, t) = Mantissa::round_from(buf, sticky, p, s, rm)?;

        let mut e = e - lz as Exponent;
        if carry {
            e += 1;
        }

        Ok((BigFloatNumber { e, s, m }, t))
    }

    /// Constructs a number from an integer rounded to precision `p`.
    pub fn from_i64(i: i64, p: usize, rm: RoundingMode) -> Result<(Self, Ternary), Error> {
        let s = if i < 0 { Sign::Neg } else { Sign::Pos };
        let mut buf = [i.unsigned_abs()];
        Self::round_words(&mut buf, false, s, WORD_BIT_SIZE as Exponent, p, rm)
    }

    /// Constructs a number from its parts. `m` must be normalized or all zeroes.
    pub fn from_raw_parts(m: &[Word], p: usize, s: Sign, e: Exponent) -> Result<Self, Error> {
        let m = Mantissa::from_words(p, m)?;
        let e = if m.is_zero() { 0 } else { e };
        Ok(BigFloatNumber { e, s, m })
    }

    /// Sets `self` to `±0.11...1 * 2^e` keeping the precision.
    pub fn set_max_value(&mut self, s: Sign, e: Exponent) {
        self.m.set_ones();
        self.s = s;
        self.e = e;
    }

    /// Sets `self` to `±0.1 * 2^e` keeping the precision.
    pub fn set_min_positive(&mut self, s: Sign, e: Exponent) {
        self.m.set_min();
        self.s = s;
        self.e = e;
    }

    /// Sets `self` to zero with the sign `s` keeping the precision.
    pub fn set_zero(&mut self, s: Sign) {
        self.m.set_zero();
        self.s = s;
        self.e = 0;
    }

    /// Returns a normalized number with random mantissa and an exponent in the range `exp_from` to `exp_to`.
    #[cfg(feature = "random")]
    pub fn random_normal(p: usize, exp_from: Exponent, exp_to: Exponent) -> Result<Self, Error> {
        if p == 0 || exp_from > exp_to {
            return Err(Error::InvalidArgument);
        }

        let m = Mantissa::random_normal(p)?;
        let span = (exp_to - exp_from) as u64 + 1;
        let e = exp_from + (rand::random::<u64>() % span) as Exponent;
        let s = if rand::random::<bool>() {
            Sign::Pos
        } else {
            Sign::Neg
        };

        Ok(BigFloatNumber { e, s, m })
    }

    /// Rounds `self` to precision `p`.
    pub fn round(&self, p: usize, rm: RoundingMode) -> Result<(Self, Ternary), Error> {
        if self.is_zero() {
            return Ok((Self::new2(p, self.s)?, Ternary::Exact));
        }

        let mut buf = WordBuf::from_slice(self.m.digits())?;
        Self::round_words(&mut buf, false, self.s, self.e, p, rm)
    }

    /// Adds `d2` to `self` and returns the result rounded to precision `p`.
    pub fn add(&self, d2: &Self, p: usize, rm: RoundingMode) -> Result<(Self, Ternary), Error> {
        self.add_sub(d2, p, rm, false)
    }

    /// Subtracts `d2` from `self` and returns the result rounded to precision `p`.
    pub fn sub(&self, d2: &Self, p: usize, rm: RoundingMode) -> Result<(Self, Ternary), Error> {
        self.add_sub(d2, p, rm, true)
    }

    fn add_sub(
        &self,
        d2: &Self,
        p: usize,
        rm: RoundingMode,
        subtract: bool,
    ) -> Result<(Self, Ternary), Error> {
        let s2 = if subtract { d2.s.invert() } else { d2.s };

        if d2.is_zero() {
            if self.is_zero() {
                let s = if self.s == s2 {
                    self.s
                } else {
                    Self::exact_zero_sign(rm)
                };
                return Ok((Self::new2(p, s)?, Ternary::Exact));
            }
            return self.round(p, rm);
        }

        if self.is_zero() {
            let mut n = d2.clone()?;
            n.s = s2;
            return n.round(p, rm);
        }

        // |a| >= |b|
        let (a, sa, b, sb) = if self.abs_cmp(d2) != Ordering::Less {
            (self, self.s, d2, s2)
        } else {
            (d2, s2, self, self.s)
        };

        let bits = p.max(a.precision()).max(b.precision()) + 2 * WORD_BIT_SIZE;
        let l = (bits + WORD_BIT_SIZE - 1) / WORD_BIT_SIZE + 1;

        let mut ba = WordBuf::new(l)?;
        let mut bb = WordBuf::new(l)?;
        let la = a.m.len();
        let lb = b.m.len();
        ba[l - 1 - la..l - 1].copy_from_slice(a.m.digits());
        bb[l - 1 - lb..l - 1].copy_from_slice(b.m.digits());

        let d = (a.e - b.e) as u64;
        let total = l * WORD_BIT_SIZE;
        let shift = if d > total as u64 { total } else { d as usize };

        let sticky = low_bits_nonzero(&bb, shift);
        shift_slice_right(&mut bb, shift);

        if sa == sb {
            let mut c = 0;
            for (x, y) in izip!(ba.iter_mut(), bb.iter()) {
                c = add_carry(*x, *y, c, x);
            }
            debug_assert!(c == 0);
        } else {
            let mut c = 0;
            for (x, y) in izip!(ba.iter_mut(), bb.iter()) {
                c = sub_borrow(*x, *y, c, x);
            }
            debug_assert!(c == 0);

            if sticky {
                // the shifted out bits of b are subtracted as one unit, the rest goes to the sticky bit
                let mut c = 1;
                for x in ba.iter_mut() {
                    c = sub_borrow(*x, 0, c, x);
                    if c == 0 {
                        break;
                    }
                }
            } else if ba.iter().all(|v| *v == 0) {
                return Ok((Self::new2(p, Self::exact_zero_sign(rm))?, Ternary::Exact));
            }
        }

        Self::round_words(&mut ba, sticky, sa, a.e + WORD_BIT_SIZE as Exponent, p, rm)
    }

    // Sign of the exact zero sum of two numbers of opposite signs.
    fn exact_zero_sign(rm: RoundingMode) -> Sign {
        if rm == RoundingMode::Down {
            Sign::Neg
        } else {
            Sign::Pos
        }
    }

    /// Multiplies `self` by `d2` and returns the result rounded to precision `p`.
    pub fn mul(&self, d2: &Self, p: usize, rm: RoundingMode) -> Result<(Self, Ternary), Error> {
        let s = self.s.mul(d2.s);

        if self.is_zero() || d2.is_zero() {
            return Ok((Self::new2(p, s)?, Ternary::Exact));
        }

        let mut buf = Mantissa::mul_words(self.m.digits(), d2.m.digits())?;

        Self::round_words(&mut buf, false, s, self.e + d2.e, p, rm)
    }

    /// Returns the exact product of `self` and `d2`.
    pub fn mul_full(&self, d2: &Self) -> Result<Self, Error> {
        let p = self.precision() + d2.precision();
        let (ret, t) = self.mul(d2, p, RoundingMode::ToZero)?;
        debug_assert!(t.is_exact());
        Ok(ret)
    }

    /// Divides `self` by a non-zero `d2` and returns the result rounded to precision `p`.
    pub fn div(&self, d2: &Self, p: usize, rm: RoundingMode) -> Result<(Self, Ternary), Error> {
        debug_assert!(!d2.is_zero());

        let s = self.s.mul(d2.s);

        if self.is_zero() {
            return Ok((Self::new2(p, s)?, Ternary::Exact));
        }

        let la = self.m.len();
        let lb = d2.m.len();

        // at least p + 2 quotient bits plus a word for the sticky rounding
        let qw = (p + 2 + WORD_BIT_SIZE - 1) / WORD_BIT_SIZE + 1;
        let n = (qw + lb).max(la);

        let mut u = WordBuf::new(n)?;
        u[n - la..].copy_from_slice(self.m.digits());

        let (mut q, rem_nz) = Mantissa::div_words(&u, d2.m.digits())?;

        Self::round_words(
            &mut q,
            rem_nz,
            s,
            self.e - d2.e + WORD_BIT_SIZE as Exponent,
            p,
            rm,
        )
    }

    /// Returns `1/self` rounded to precision `p`. `self` must not be zero.
    pub fn reciprocal(&self, p: usize, rm: RoundingMode) -> Result<(Self, Ternary), Error> {
        ONE.div(self, p, rm)
    }

    /// Compares absolute values of `self` and `d2`.
    pub fn abs_cmp(&self, d2: &Self) -> Ordering {
        match (self.is_zero(), d2.is_zero()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => match self.e.cmp(&d2.e) {
                Ordering::Equal => self.m.abs_cmp(&d2.m),
                o => o,
            },
        }
    }

    /// Compares `self` and `d2`. Zeroes of different signs are equal.
    pub fn cmp(&self, d2: &Self) -> Ordering {
        match (self.is_zero(), d2.is_zero()) {
            (true, true) => Ordering::Equal,
            (true, false) => {
                if d2.s.is_positive() {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
            (false, true) => {
                if self.s.is_positive() {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }
            (false, false) => {
                if self.s != d2.s {
                    if self.s.is_positive() {
                        Ordering::Greater
                    } else {
                        Ordering::Less
                    }
                } else if self.s.is_positive() {
                    self.abs_cmp(d2)
                } else {
                    d2.abs_cmp(self)
                }
            }
        }
    }

    /// Rounds `self` to an integer value with the rounding mode `rm`.
    pub fn round_to_int(&self, rm: RoundingMode) -> Result<Self, Error> {
        if self.is_zero() || self.e >= self.precision() as Exponent {
            return self.clone();
        }

        if self.e <= 0 {
            // 0 < |self| < 1
            let one = match rm {
                RoundingMode::ToEven => self.e == 0 && !self.m.is_power_of_two(),
                RoundingMode::ToZero => false,
                RoundingMode::FromZero => true,
                RoundingMode::Up => self.s.is_positive(),
                RoundingMode::Down => self.s.is_negative(),
            };

            return if one {
                Ok(Self::from_i64(self.s.to_int() as i64, 1, RoundingMode::ToZero)?.0)
            } else {
                Self::new2(1, self.s)
            };
        }

        Ok(self.round(self.e as usize, rm)?.0)
    }

    /// Returns the remainder of division of an integer-valued `self` by 4, in the range 0 to 3.
    pub fn int_mod4(&self) -> u8 {
        if self.is_zero() || self.e <= 0 {
            return 0;
        }

        let e = self.e as usize;
        let b0 = self.m.bit(e - 1) as u8;
        let b1 = if e >= 2 { self.m.bit(e - 2) as u8 } else { 0 };
        let r = 2 * b1 + b0;

        if self.s.is_negative() {
            (4 - r) % 4
        } else {
            r
        }
    }

    /// Converts an integer-valued `self` to `i64`. Returns None if the value does not fit.
    pub fn to_i64(&self) -> Option<i64> {
        if self.is_zero() {
            return Some(0);
        }

        if self.e > WORD_BIT_SIZE as Exponent - 1 {
            return if self.e == WORD_BIT_SIZE as Exponent
                && self.s.is_negative()
                && self.m.is_power_of_two()
            {
                Some(i64::MIN)
            } else {
                None
            };
        }

        let top = self.m.digits()[self.m.len() - 1];
        let mag = (top >> (WORD_BIT_SIZE - self.e as usize)) as i64;

        Some(if self.s.is_negative() { -mag } else { mag })
    }

    /// Returns true if `self` is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.m.is_zero()
    }

    /// Returns true if the absolute value of `self` is a power of two.
    pub fn is_power_of_two(&self) -> bool {
        !self.is_zero() && self.m.is_power_of_two()
    }

    #[inline]
    pub fn exponent(&self) -> Exponent {
        self.e
    }

    #[inline]
    pub fn set_exponent(&mut self, e: Exponent) {
        self.e = e;
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.s
    }

    #[inline]
    pub fn set_sign(&mut self, s: Sign) {
        self.s = s;
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.s.is_positive()
    }

    #[cfg(test)]
    pub fn is_negative(&self) -> bool {
        self.s.is_negative()
    }

    /// Returns the precision of the number in bits.
    #[inline]
    pub fn precision(&self) -> usize {
        self.m.precision()
    }

    #[inline]
    pub fn mantissa(&self) -> &Mantissa {
        &self.m
    }

    /// Returns the copy of the number with the opposite sign.
    pub fn neg(&self) -> Result<Self, Error> {
        let mut ret = self.clone()?;
        ret.s = ret.s.invert();
        Ok(ret)
    }

    /// Returns the copy of the number with the positive sign.
    pub fn abs(&self) -> Result<Self, Error> {
        let mut ret = self.clone()?;
        ret.s = Sign::Pos;
        Ok(ret)
    }

    pub fn clone(&self) -> Result<Self, Error> {
        Ok(BigFloatNumber {
            e: self.e,
            s: self.s,
            m: self.m.clone()?,
        })
    }
}
