//! Context holds the exponent range, the exception flags, and the constants cache of a sequence of computations.

use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::EXPONENT_MAX;
use crate::defs::EXPONENT_MIN;
use crate::ops::consts::Consts;
use bitflags::bitflags;

bitflags! {
    /// Sticky exception flags.
    ///
    /// A flag is raised by an operation and stays raised until cleared with `Context::clear_flags`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Flags: u32 {
        /// The result is a non-zero number smaller in magnitude than the smallest number of the exponent range.
        const UNDERFLOW = 1;

        /// The result is larger in magnitude than the largest number of the exponent range.
        const OVERFLOW = 2;

        /// The result is NaN: invalid operation or NaN argument.
        const NAN = 4;

        /// The result is not exact.
        const INEXACT = 8;

        /// Conversion to an integer type failed.
        const ERANGE = 16;

        /// The exact result is an infinity for finite arguments.
        const DIVBY0 = 32;
    }
}

/// Statistics of Ziv loops completed in a context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZivStats {
    /// Number of completed loops.
    pub loops: u64,

    /// Total number of retries with increased precision.
    pub retries: u64,

    /// Maximum number of retries of a single loop.
    pub max_retries: usize,
}

/// Context of computations.
///
/// Each sequence of computations owns its context: the exponent range and the flags are not shared
/// between contexts, so contexts can be used from different threads independently.
///
/// ## Examples
///
/// ```
/// use astro_ziv::{BigFloat, Context, Flags, RoundingMode};
///
/// let mut ctx = Context::new();
/// ctx.set_emax(10).unwrap();
///
/// // 2^11 overflows the exponent range
/// let x = BigFloat::from_i64(2048, 53).unwrap();
/// let (y, _) = x.round(53, RoundingMode::ToEven, &mut ctx).unwrap();
///
/// assert!(y.is_inf());
/// assert!(ctx.flags().contains(Flags::OVERFLOW));
/// ```
#[derive(Debug)]
pub struct Context {
    emin: Exponent,
    emax: Exponent,
    flags: Flags,
    cc: Consts,
    stats: ZivStats,
}

impl Context {
    /// Creates a new context with the widest exponent range and cleared flags.
    pub fn new() -> Self {
        Context {
            emin: EXPONENT_MIN,
            emax: EXPONENT_MAX,
            flags: Flags::empty(),
            cc: Consts::new(),
            stats: ZivStats::default(),
        }
    }

    /// Returns the minimum exponent.
    pub fn emin(&self) -> Exponent {
        self.emin
    }

    /// Returns the maximum exponent.
    pub fn emax(&self) -> Exponent {
        self.emax
    }

    /// Sets the minimum exponent.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `emin` is outside of the widest exponent range or larger than the maximum exponent.
    pub fn set_emin(&mut self, emin: Exponent) -> Result<(), Error> {
        if !(EXPONENT_MIN..=self.emax).contains(&emin) {
            return Err(Error::InvalidArgument);
        }
        self.emin = emin;
        Ok(())
    }

    /// Sets the maximum exponent.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `emax` is outside of the widest exponent range or smaller than the minimum exponent.
    pub fn set_emax(&mut self, emax: Exponent) -> Result<(), Error> {
        if !(self.emin..=EXPONENT_MAX).contains(&emax) {
            return Err(Error::InvalidArgument);
        }
        self.emax = emax;
        Ok(())
    }

    // Range is set without validation by the exponent guard.
    pub(crate) fn set_range(&mut self, emin: Exponent, emax: Exponent) {
        self.emin = emin;
        self.emax = emax;
    }

    /// Returns the raised flags.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Clears all flags.
    pub fn clear_flags(&mut self) {
        self.flags = Flags::empty();
    }

    /// Raises flags `f`.
    pub fn raise_flags(&mut self, f: Flags) {
        self.flags |= f;
    }

    pub(crate) fn set_flags(&mut self, f: Flags) {
        self.flags = f;
    }

    /// Returns statistics of Ziv loops completed in the context.
    pub fn ziv_stats(&self) -> ZivStats {
        self.stats
    }

    /// Resets statistics of Ziv loops.
    pub fn reset_ziv_stats(&mut self) {
        self.stats = ZivStats::default();
    }

    pub(crate) fn record_ziv(&mut self, retries: usize) {
        self.stats.loops += 1;
        self.stats.retries += retries as u64;
        self.stats.max_retries = self.stats.max_retries.max(retries);
    }

    /// Returns a mutable reference to the constants cache.
    pub(crate) fn consts(&mut self) -> &mut Consts {
        &mut self.cc
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
