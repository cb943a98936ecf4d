//! Multiplication.

use crate::common::buf::WordBuf;
use crate::defs::DoubleWord;
use crate::defs::Error;
use crate::defs::Word;
use crate::defs::WORD_BIT_SIZE;
use crate::mantissa::Mantissa;

impl Mantissa {
    fn mul_basic(m1: &[Word], m2: &[Word], m3: &mut [Word]) {
        m3.fill(0);

        for (i, d1mi) in m1.iter().enumerate() {
            let d1mi = *d1mi as DoubleWord;
            if d1mi == 0 {
                continue;
            }

            let mut k = 0;
            for (m2j, m3ij) in m2.iter().zip(m3[i..].iter_mut()) {
                let m = d1mi * (*m2j as DoubleWord) + *m3ij as DoubleWord + k;
                *m3ij = m as Word;
                k = m >> WORD_BIT_SIZE;
            }

            m3[i + m2.len()] += k as Word;
        }
    }

    /// Exact product of `m1` and `m2` in `m1.len() + m2.len()` words.
    pub fn mul_words(m1: &[Word], m2: &[Word]) -> Result<WordBuf, Error> {
        let mut m3 = WordBuf::new(m1.len() + m2.len())?;
        Self::mul_basic(m1, m2, &mut m3);
        Ok(m3)
    }
}
