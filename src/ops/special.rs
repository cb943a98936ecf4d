//! Results of functions for NaN, infinite, and zero arguments.

use crate::ctx::Flags;
use crate::defs::Error;
use crate::defs::Sign;
use crate::defs::Ternary;
use crate::ext::BigFloat;
use crate::ext::Kind;
use crate::ops::range::ExponentGuard;

/// Defined result of a function for a non-regular argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Special {
    /// NaN, raises the NaN flag.
    Nan,

    /// Infinity as a limit.
    Inf(Sign),

    /// Infinity at a pole, raises the division by zero flag.
    Pole(Sign),

    Zero(Sign),

    /// Small integer, exact at any precision.
    Int(i64),
}

/// Special value table of a function.
pub(crate) trait SpecialValues {
    fn on_nan() -> Special {
        Special::Nan
    }

    fn on_inf(s: Sign) -> Special;

    fn on_zero(s: Sign) -> Special;
}

/// Sets `dst` to the result of the function `F` if `x` is not a regular number.
/// Returns None for a regular `x`.
pub(crate) fn dispatch<F: SpecialValues>(
    dst: &mut BigFloat,
    x: &BigFloat,
    guard: &mut ExponentGuard,
) -> Result<Option<Ternary>, Error> {
    let special = match x.kind() {
        Kind::Regular => return Ok(None),
        Kind::NaN => F::on_nan(),
        Kind::Inf => F::on_inf(x.sign()),
        Kind::Zero => F::on_zero(x.sign()),
    };

    match special {
        Special::Nan => {
            dst.set_nan();
            guard.raise(Flags::NAN);
        }
        Special::Inf(s) => dst.set_inf(s),
        Special::Pole(s) => {
            dst.set_inf(s);
            guard.raise(Flags::DIVBY0);
        }
        Special::Zero(s) => dst.set_zero(s),
        Special::Int(i) => {
            let t = dst.set_int(i)?;
            debug_assert!(t.is_exact());
        }
    }

    Ok(Some(Ternary::Exact))
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::ctx::Context;

    struct Odd;

    impl SpecialValues for Odd {
        fn on_inf(s: Sign) -> Special {
            Special::Int(s.to_int() as i64)
        }

        fn on_zero(s: Sign) -> Special {
            Special::Pole(s)
        }
    }

    #[test]
    fn test_dispatch() {
        let mut ctx = Context::new();
        let mut dst = BigFloat::new(10).unwrap();

        {
            let mut guard = ExponentGuard::new(&mut ctx);

            let x = BigFloat::from_i64(3, 10).unwrap();
            assert_eq!(dispatch::<Odd>(&mut dst, &x, &mut guard).unwrap(), None);

            let x = BigFloat::inf(10, Sign::Neg).unwrap();
            let t = dispatch::<Odd>(&mut dst, &x, &mut guard).unwrap();
            assert_eq!(t, Some(Ternary::Exact));
            assert_eq!(dst, BigFloat::from_i64(-1, 1).unwrap());
            assert_eq!(dst.precision(), 10);

            let x = BigFloat::new(10).unwrap().neg().unwrap();
            dispatch::<Odd>(&mut dst, &x, &mut guard).unwrap();
            assert!(dst.is_inf() && dst.sign() == Sign::Neg);
        }

        assert_eq!(ctx.flags(), Flags::DIVBY0);

        {
            let mut guard = ExponentGuard::new(&mut ctx);
            let x = BigFloat::nan(10).unwrap();
            dispatch::<Odd>(&mut dst, &x, &mut guard).unwrap();
            assert!(dst.is_nan());
        }

        assert_eq!(ctx.flags(), Flags::DIVBY0 | Flags::NAN);
    }
}
