//! Mantissa of a number.

use crate::common::buf::WordBuf;
use crate::common::util::bit_at;
use crate::common::util::bits_uniform;
use crate::common::util::low_bits_nonzero;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::Ternary;
use crate::defs::Word;
use crate::defs::WORD_BIT_SIZE;
use crate::defs::WORD_MAX;
use crate::defs::WORD_SIGNIFICANT_BIT;
use core::cmp::Ordering;

/// Mantissa representation.
///
/// Words are stored least significant first. A non-zero mantissa is normalized:
/// the most significant bit of the last word is set and the bits below precision `p` are zero.
#[derive(Debug, Hash)]
pub struct Mantissa {
    m: WordBuf,
    p: usize,
}

impl Mantissa {
    /// New zero mantissa with precision `p`.
    pub fn new(p: usize) -> Result<Self, Error> {
        let m = WordBuf::for_bits(p)?;
        Ok(Mantissa { m, p })
    }

    #[cfg(test)]
    pub fn ones(p: usize) -> Result<Self, Error> {
        let mut ret = Self::new(p)?;
        ret.set_ones();
        Ok(ret)
    }

    #[cfg(test)]
    pub fn min(p: usize) -> Result<Self, Error> {
        let mut ret = Self::new(p)?;
        ret.set_min();
        Ok(ret)
    }

    /// Sets all bits of the mantissa.
    pub fn set_ones(&mut self) {
        self.m.fill(WORD_MAX);
        self.mask_low_bits();
    }

    /// Sets the mantissa to `0.1`.
    pub fn set_min(&mut self) {
        self.m.fill(0);
        let l = self.m.len();
        self.m[l - 1] = WORD_SIGNIFICANT_BIT;
    }

    /// Constructs a mantissa from words. The words must form a normalized
    /// mantissa of precision `p` or be all zeroes.
    pub fn from_words(p: usize, words: &[Word]) -> Result<Self, Error> {
        if p == 0 || words.len() != (p + WORD_BIT_SIZE - 1) / WORD_BIT_SIZE {
            return Err(Error::InvalidArgument);
        }

        let ret = Mantissa {
            m: WordBuf::from_slice(words)?,
            p,
        };

        let zero = ret.is_zero();
        let normalized = words[words.len() - 1] & WORD_SIGNIFICANT_BIT != 0;
        let tail = ret.m.len() * WORD_BIT_SIZE - p;
        if !(zero || normalized) || low_bits_nonzero(words, tail) {
            return Err(Error::InvalidArgument);
        }

        Ok(ret)
    }

    fn mask_low_bits(&mut self) {
        let tail = self.m.len() * WORD_BIT_SIZE - self.p;
        if tail > 0 {
            self.m[0] &= WORD_MAX << tail;
        }
    }

    /// Rounds the value represented by `buf` followed by the sticky bit to precision `p`.
    ///
    /// The most significant bit of the last word of `buf` must be set.
    /// If `sticky` is true, the bits beyond `buf` are not all zeroes, and `buf` must
    /// hold more than `p` bits.
    /// Returns the rounded mantissa, true if rounding carried into a new most significant bit
    /// (the mantissa then becomes `0.1` and the exponent must be incremented),
    /// and the ternary value for a number with the sign `s`.
    pub fn round_from(
        buf: &[Word],
        sticky: bool,
        p: usize,
        s: Sign,
        rm: RoundingMode,
    ) -> Result<(Self, bool, Ternary), Error> {
        debug_assert!(p > 0);
        debug_assert!(buf[buf.len() - 1] & WORD_SIGNIFICANT_BIT != 0);

        let total = buf.len() * WORD_BIT_SIZE;

        debug_assert!(!sticky || p < total);

        let mut ret = Self::new(p)?;
        for (d, v) in ret.m.iter_mut().rev().zip(buf.iter().rev()) {
            *d = *v;
        }
        ret.mask_low_bits();

        let (rbit, rest) = if p >= total {
            (false, sticky)
        } else {
            (
                bit_at(buf, p),
                sticky || low_bits_nonzero(buf, total - p - 1),
            )
        };

        let inexact = rbit || rest;

        let away = match rm {
            RoundingMode::ToEven => rbit && (rest || bit_at(buf, p - 1)),
            RoundingMode::ToZero => false,
            RoundingMode::FromZero => inexact,
            RoundingMode::Up => inexact && s.is_positive(),
            RoundingMode::Down => inexact && s.is_negative(),
        };

        let mut carry = false;
        if away {
            let tail = ret.m.len() * WORD_BIT_SIZE - p;
            let mut c: Word = 1 << tail;
            for d in ret.m.iter_mut() {
                let (v, o) = d.overflowing_add(c);
                *d = v;
                c = o as Word;
                if c == 0 {
                    break;
                }
            }

            if c != 0 {
                let l = ret.m.len();
                ret.m[l - 1] = WORD_SIGNIFICANT_BIT;
                carry = true;
            }
        }

        let t = if inexact {
            Ternary::from_magnitude(s, away)
        } else {
            Ternary::Exact
        };

        Ok((ret, carry, t))
    }

    /// Returns true if the mantissa is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.m.iter().all(|v| *v == 0)
    }

    /// Sets the mantissa to zero.
    pub fn set_zero(&mut self) {
        self.m.fill(0);
    }

    /// Returns true if only the most significant bit is set.
    pub fn is_power_of_two(&self) -> bool {
        let l = self.m.len();
        self.m[l - 1] == WORD_SIGNIFICANT_BIT && self.m[..l - 1].iter().all(|v| *v == 0)
    }

    /// Compares the mantissas as fractions: the words are aligned at the most significant end.
    pub fn abs_cmp(&self, m2: &Self) -> Ordering {
        let l1 = self.m.len();
        let l2 = m2.m.len();
        for i in 0..l1.max(l2) {
            let a = if i < l1 { self.m[l1 - 1 - i] } else { 0 };
            let b = if i < l2 { m2.m[l2 - 1 - i] } else { 0 };
            match a.cmp(&b) {
                Ordering::Equal => {}
                o => return o,
            }
        }
        Ordering::Equal
    }

    /// Returns the bit at position `pos` counting from the most significant bit.
    #[inline]
    pub fn bit(&self, pos: usize) -> bool {
        bit_at(&self.m, pos)
    }

    /// Returns true if all bits at positions `start` to `end` (exclusive) are equal.
    #[inline]
    pub fn bits_uniform(&self, start: usize, end: usize) -> bool {
        bits_uniform(&self.m, start, end)
    }

    /// Returns the precision in bits.
    #[inline]
    pub fn precision(&self) -> usize {
        self.p
    }

    /// Returns the number of words.
    #[inline]
    pub fn len(&self) -> usize {
        self.m.len()
    }

    /// Returns the words of the mantissa, least significant first.
    #[inline]
    pub fn digits(&self) -> &[Word] {
        &self.m
    }

    pub fn clone(&self) -> Result<Self, Error> {
        Ok(Mantissa {
            m: self.m.clone()?,
            p: self.p,
        })
    }

    /// Returns a normalized mantissa with random bits.
    #[cfg(feature = "random")]
    pub fn random_normal(p: usize) -> Result<Self, Error> {
        let mut ret = Self::new(p)?;
        for v in ret.m.iter_mut() {
            *v = rand::random::<Word>();
        }
        let l = ret.m.len();
        ret.m[l - 1] |= WORD_SIGNIFICANT_BIT;
        ret.mask_low_bits();
        Ok(ret)
    }
}
