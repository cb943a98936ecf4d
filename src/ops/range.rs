//! Exponent range guard and the final range check of results.

use crate::ctx::Context;
use crate::ctx::Flags;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::Ternary;
use crate::defs::EXPONENT_MAX;
use crate::defs::EXPONENT_MIN;
use crate::ext::BigFloat;
use core::ops::Deref;
use core::ops::DerefMut;
use tracing::debug;

/// Scope guard of a computation.
///
/// On creation it saves the exponent range and the flags of the context,
/// widens the range to the maximum, and clears the flags.
/// The saved state is restored when the guard is finished or dropped,
/// only the flags marked with `keep_flags` survive the restoration.
/// Guards nest: an inner guard saves and restores the state set by the outer one.
pub(crate) struct ExponentGuard<'a> {
    ctx: &'a mut Context,
    emin: Exponent,
    emax: Exponent,
    flags: Flags,
    kept: Flags,
    restored: bool,
}

impl<'a> ExponentGuard<'a> {
    pub fn new(ctx: &'a mut Context) -> Self {
        let emin = ctx.emin();
        let emax = ctx.emax();
        let flags = ctx.flags();

        ctx.set_range(EXPONENT_MIN, EXPONENT_MAX);
        ctx.clear_flags();

        ExponentGuard {
            ctx,
            emin,
            emax,
            flags,
            kept: Flags::empty(),
            restored: false,
        }
    }

    /// Marks flags `f` to be kept after restoration.
    pub fn keep_flags(&mut self, f: Flags) {
        self.kept |= f;
    }

    /// Raises flags `f` and keeps them after restoration.
    pub fn raise(&mut self, f: Flags) {
        self.ctx.raise_flags(f);
        self.keep_flags(f);
    }

    fn restore(&mut self) {
        if !self.restored {
            let kept = self.ctx.flags() & self.kept;
            self.ctx.set_range(self.emin, self.emax);
            self.ctx.set_flags(self.flags | kept);
            self.restored = true;
        }
    }

    /// Restores the saved state and checks the result `dst` having the ternary value `t` against the restored exponent range.
    pub fn finish(mut self, dst: &mut BigFloat, t: Ternary, rm: RoundingMode) -> Ternary {
        self.restore();
        check_range(dst, t, rm, self.ctx)
    }

    /// Restores the saved state and sets `dst` to the overflow value.
    pub fn overflow(mut self, dst: &mut BigFloat, rm: RoundingMode, s: Sign) -> Ternary {
        self.restore();
        overflow(dst, rm, s, self.ctx)
    }

    /// Restores the saved state and sets `dst` to the underflow value.
    pub fn underflow(mut self, dst: &mut BigFloat, rm: RoundingMode, s: Sign) -> Ternary {
        self.restore();
        underflow(dst, rm, s, self.ctx)
    }
}

impl Drop for ExponentGuard<'_> {
    fn drop(&mut self) {
        self.restore();
    }
}

impl Deref for ExponentGuard<'_> {
    type Target = Context;

    fn deref(&self) -> &Context {
        self.ctx
    }
}

impl DerefMut for ExponentGuard<'_> {
    fn deref_mut(&mut self) -> &mut Context {
        self.ctx
    }
}

/// Checks the exponent of `dst` against the exponent range of the context.
/// `t` is the ternary value of `dst`. Returns the ternary value of the checked result.
pub(crate) fn check_range(
    dst: &mut BigFloat,
    t: Ternary,
    rm: RoundingMode,
    ctx: &mut Context,
) -> Ternary {
    let regular = dst
        .regular()
        .map(|n| (n.exponent(), n.sign(), n.is_power_of_two()));

    if let Some((e, s, pow2)) = regular {
        if e > ctx.emax() {
            return overflow(dst, rm, s, ctx);
        }

        if e < ctx.emin() {
            // the midpoint of zero and the smallest positive number rounds to zero
            let to_zero = rm == RoundingMode::ToEven
                && (e + 1 < ctx.emin()
                    || (pow2
                        && if s.is_negative() {
                            t != Ternary::RoundedUp
                        } else {
                            t != Ternary::RoundedDown
                        }));

            let rm = if to_zero { RoundingMode::ToZero } else { rm };

            return underflow(dst, rm, s, ctx);
        }
    }

    if !t.is_exact() {
        ctx.raise_flags(Flags::INEXACT);
    }

    t
}

/// Sets `dst` to the value of an overflowed result with the sign `s`:
/// the largest finite number if the rounding is toward zero, and infinity otherwise.
pub(crate) fn overflow(dst: &mut BigFloat, rm: RoundingMode, s: Sign, ctx: &mut Context) -> Ternary {
    ctx.raise_flags(Flags::OVERFLOW | Flags::INEXACT);

    let like_zero = rm.is_like_to_zero(s);

    if like_zero {
        dst.set_max_value(s, ctx.emax());
    } else {
        dst.set_inf(s);
    }

    debug!(emax = ctx.emax(), ?rm, ?s, "overflow");

    Ternary::from_magnitude(s, !like_zero)
}

/// Sets `dst` to the value of an underflowed result with the sign `s`:
/// zero if the rounding is toward zero, and the smallest positive number otherwise.
pub(crate) fn underflow(dst: &mut BigFloat, rm: RoundingMode, s: Sign, ctx: &mut Context) -> Ternary {
    ctx.raise_flags(Flags::UNDERFLOW | Flags::INEXACT);

    let like_zero = rm.is_like_to_zero(s);

    if like_zero {
        dst.set_zero(s);
    } else {
        dst.set_min_positive(s, ctx.emin());
    }

    debug!(emin = ctx.emin(), ?rm, ?s, "underflow");

    Ternary::from_magnitude(s, !like_zero)
}
