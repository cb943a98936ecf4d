//! Buffer for holding mantissa words.

use crate::defs::Error;
use crate::defs::Word;
use crate::defs::WORD_BIT_SIZE;
use core::ops::Deref;
use core::ops::DerefMut;
use core::ops::Index;
use core::ops::IndexMut;
use core::slice::SliceIndex;

/// Buffer for holding mantissa words.
/// Memory is reserved with `try_reserve_exact`, so allocation failure is reported as an error.
#[derive(Debug, Hash)]
pub struct WordBuf {
    inner: Vec<Word>,
}

impl WordBuf {
    /// New buffer of `sz` words filled with zeroes.
    #[inline]
    pub fn new(sz: usize) -> Result<Self, Error> {
        let mut inner = Vec::new();
        inner.try_reserve_exact(sz)?;
        inner.resize(sz, 0);
        Ok(WordBuf { inner })
    }

    /// New buffer sized to hold `p` bits.
    #[inline]
    pub fn for_bits(p: usize) -> Result<Self, Error> {
        Self::new((p + WORD_BIT_SIZE - 1) / WORD_BIT_SIZE)
    }

    /// New buffer holding a copy of `words`.
    pub fn from_slice(words: &[Word]) -> Result<Self, Error> {
        let mut inner = Vec::new();
        inner.try_reserve_exact(words.len())?;
        inner.extend_from_slice(words);
        Ok(WordBuf { inner })
    }

    /// Clones the buffer.
    pub fn clone(&self) -> Result<Self, Error> {
        Self::from_slice(&self.inner)
    }

    #[inline]
    pub fn fill(&mut self, d: Word) {
        self.inner.fill(d);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<I: SliceIndex<[Word]>> IndexMut<I> for WordBuf {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        self.inner.index_mut(index)
    }
}

impl<I: SliceIndex<[Word]>> Index<I> for WordBuf {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        self.inner.index(index)
    }
}

impl Deref for WordBuf {
    type Target = [Word];

    #[inline]
    fn deref(&self) -> &[Word] {
        self.inner.deref()
    }
}

impl DerefMut for WordBuf {
    #[inline]
    fn deref_mut(&mut self) -> &mut [Word] {
        self.inner.deref_mut()
    }
}
