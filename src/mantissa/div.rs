//! Division.

use crate::common::buf::WordBuf;
use crate::common::util::add_carry;
use crate::common::util::sub_borrow;
use crate::defs::DoubleWord;
use crate::defs::Error;
use crate::defs::Word;
use crate::defs::WORD_BASE;
use crate::defs::WORD_BIT_SIZE;
use crate::defs::WORD_SIGNIFICANT_BIT;
use crate::mantissa::Mantissa;

impl Mantissa {
    /// Divides `u` by `v`.
    /// The last word of `v` must have the most significant bit set, and `u` must be at least as long as `v`.
    /// Returns the quotient of `u.len() - v.len() + 1` words, and true if the remainder is not zero.
    pub fn div_words(u: &[Word], v: &[Word]) -> Result<(WordBuf, bool), Error> {
        debug_assert!(!v.is_empty() && u.len() >= v.len());
        debug_assert!(v[v.len() - 1] & WORD_SIGNIFICANT_BIT != 0);

        if v.len() == 1 {
            Self::div_by_word(u, v[0])
        } else {
            Self::div_basic(u, v)
        }
    }

    fn div_by_word(u: &[Word], d: Word) -> Result<(WordBuf, bool), Error> {
        let d = d as DoubleWord;
        let mut q = WordBuf::new(u.len())?;
        let mut r: DoubleWord = 0;

        for (qj, uj) in q.iter_mut().rev().zip(u.iter().rev()) {
            let n = (r << WORD_BIT_SIZE) | *uj as DoubleWord;
            *qj = (n / d) as Word;
            r = n % d;
        }

        Ok((q, r != 0))
    }

    // Knuth's algorithm D, the divisor is already normalized.
    fn div_basic(u: &[Word], v: &[Word]) -> Result<(WordBuf, bool), Error> {
        let n = v.len();
        let m = u.len() - n;

        let mut un = WordBuf::new(u.len() + 1)?;
        un[..u.len()].copy_from_slice(u);

        let mut q = WordBuf::new(m + 1)?;

        let v1 = v[n - 1] as DoubleWord;
        let v2 = v[n - 2] as DoubleWord;

        for j in (0..=m).rev() {
            let num = ((un[j + n] as DoubleWord) << WORD_BIT_SIZE) | un[j + n - 1] as DoubleWord;
            let mut qh = num / v1;
            let mut rh = num % v1;

            while qh >= WORD_BASE
                || qh * v2 > ((rh << WORD_BIT_SIZE) | un[j + n - 2] as DoubleWord)
            {
                qh -= 1;
                rh += v1;
                if rh >= WORD_BASE {
                    break;
                }
            }

            // un[j..j+n+1] -= qh * v
            let mut k: Word = 0;
            let mut b: Word = 0;
            for (vi, ui) in v.iter().zip(un[j..j + n].iter_mut()) {
                let prod = qh * *vi as DoubleWord + k as DoubleWord;
                k = (prod >> WORD_BIT_SIZE) as Word;
                b = sub_borrow(*ui, prod as Word, b, ui);
            }

            let top = &mut un[j + n];
            if sub_borrow(*top, k, b, top) != 0 {
                // qh was one too large, add v back
                qh -= 1;
                let mut c: Word = 0;
                for (vi, ui) in v.iter().zip(un[j..j + n].iter_mut()) {
                    c = add_carry(*ui, *vi, c, ui);
                }
                un[j + n] = un[j + n].wrapping_add(c);
            }

            q[j] = qh as Word;
        }

        let rem_nz = un[..n].iter().any(|v| *v != 0);

        Ok((q, rem_nz))
    }
}
