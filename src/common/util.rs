//! Auxiliary functions.

use crate::defs::{Word, WORD_BIT_SIZE, WORD_MAX, WORD_SIGNIFICANT_BIT};

/// Integer logarithm base 2 of a number rounded upwards.
pub fn log2_ceil(mut n: usize) -> usize {
    let mut ret = 0;
    let mut sticky = 0;
    while n > 1 {
        if n & 1 != 0 {
            sticky = 1;
        }
        ret += 1;
        n >>= 1;
    }
    ret + sticky
}

/// Square root integer approximation.
pub fn sqrt_int(a: usize) -> usize {
    let mut x = a;
    for _ in 0..64 {
        if x == 0 {
            break;
        }
        let y = (a / x + x) >> 1;
        if y >= x {
            break;
        }
        x = y;
    }
    x
}

/// Computes `a + b + c`, stores the low word in `r`, returns the carry.
#[inline(always)]
pub fn add_carry(a: Word, b: Word, c: Word, r: &mut Word) -> Word {
    let (s1, c1) = a.overflowing_add(b);
    let (s2, c2) = s1.overflowing_add(c);
    *r = s2;
    (c1 | c2) as Word
}

/// Computes `a - b - c`, stores the low word in `r`, returns the borrow.
#[inline(always)]
pub fn sub_borrow(a: Word, b: Word, c: Word, r: &mut Word) -> Word {
    let (s1, c1) = a.overflowing_sub(b);
    let (s2, c2) = s1.overflowing_sub(c);
    *r = s2;
    (c1 | c2) as Word
}

// Shift m left by n bits.
pub fn shift_slice_left(m: &mut [Word], n: usize) {
    let idx = n / WORD_BIT_SIZE;
    let shift = n % WORD_BIT_SIZE;
    let l = m.len();
    if idx >= l {
        m.fill(0);
    } else if shift > 0 {
        for i in (idx + 1..l).rev() {
            m[i] = (m[i - idx] << shift) | (m[i - idx - 1] >> (WORD_BIT_SIZE - shift));
        }
        m[idx] = m[0] << shift;
        m[..idx].fill(0);
    } else if idx > 0 {
        m.copy_within(0..l - idx, idx);
        m[..idx].fill(0);
    }
}

// Shift m right by n bits.
pub fn shift_slice_right(m: &mut [Word], n: usize) {
    let idx = n / WORD_BIT_SIZE;
    let shift = n % WORD_BIT_SIZE;
    let l = m.len();
    if idx >= l {
        m.fill(0);
    } else if shift > 0 {
        for i in 0..l - idx - 1 {
            m[i] = (m[i + idx] >> shift) | (m[i + idx + 1] << (WORD_BIT_SIZE - shift));
        }
        m[l - idx - 1] = m[l - 1] >> shift;
        m[l - idx..].fill(0);
    } else if idx > 0 {
        m.copy_within(idx.., 0);
        m[l - idx..].fill(0);
    }
}

/// Returns true if any of the `n` least significant bits of `m` is set.
pub fn low_bits_nonzero(m: &[Word], n: usize) -> bool {
    let idx = n / WORD_BIT_SIZE;
    let shift = n % WORD_BIT_SIZE;
    if idx >= m.len() {
        return m.iter().any(|v| *v != 0);
    }
    if m[..idx].iter().any(|v| *v != 0) {
        return true;
    }
    shift > 0 && m[idx] << (WORD_BIT_SIZE - shift) != 0
}

/// Number of leading zero bits in `m`, the most significant word is the last one.
pub fn count_leading_zeroes(m: &[Word]) -> usize {
    let mut ret = 0;
    for v in m.iter().rev() {
        if *v == 0 {
            ret += WORD_BIT_SIZE;
        } else {
            ret += v.leading_zeros() as usize;
            break;
        }
    }
    ret
}

/// Returns the bit at position `pos` counting from the most significant bit of `m`.
/// Positions outside of `m` read as zero.
pub fn bit_at(m: &[Word], pos: usize) -> bool {
    let l = m.len();
    let idx = pos / WORD_BIT_SIZE;
    if idx >= l {
        false
    } else {
        m[l - 1 - idx] & (WORD_SIGNIFICANT_BIT >> (pos % WORD_BIT_SIZE)) != 0
    }
}

/// Returns true if all bits at positions from `start` to `end` (exclusive),
/// counting from the most significant bit of `m`, are equal.
/// Positions outside of `m` read as zero.
pub fn bits_uniform(m: &[Word], start: usize, end: usize) -> bool {
    if start >= end {
        return true;
    }

    let l = m.len();
    let total = l * WORD_BIT_SIZE;
    let target = if bit_at(m, start) { WORD_MAX } else { 0 };

    if end > total && target != 0 {
        // bits beyond the end of m are zeroes
        return false;
    }

    let end = end.min(total);
    let mut i = start;
    while i < end {
        let off = i % WORD_BIT_SIZE;
        let n = (WORD_BIT_SIZE - off).min(end - i);
        let mut mask = WORD_MAX >> off;
        if off + n < WORD_BIT_SIZE {
            mask &= !(WORD_MAX >> (off + n));
        }
        if m[l - 1 - i / WORD_BIT_SIZE] & mask != target & mask {
            return false;
        }
        i += n;
    }

    true
}
