//! Components used in integration tests.

#![allow(dead_code)]

use astro_ziv::{BigFloat, Context, Error, Exponent, RoundingMode, Ternary};
use rand::random;

/// Convenience form of a function: argument, precision, rounding mode, context.
pub type Fun =
    fn(&BigFloat, usize, RoundingMode, &mut Context) -> Result<(BigFloat, Ternary), Error>;

/// Convenience form of a constant: precision, rounding mode, context.
pub type Const = fn(usize, RoundingMode, &mut Context) -> Result<(BigFloat, Ternary), Error>;

pub const CONSTANTS: [(&str, Const); 2] = [("pi", BigFloat::pi), ("ln2", BigFloat::ln2)];

pub const FUNCTIONS: [(&str, Fun); 13] = [
    ("exp", BigFloat::exp),
    ("sinh", BigFloat::sinh),
    ("cosh", BigFloat::cosh),
    ("tanh", BigFloat::tanh),
    ("coth", BigFloat::coth),
    ("csch", BigFloat::csch),
    ("sech", BigFloat::sech),
    ("sin", BigFloat::sin),
    ("cos", BigFloat::cos),
    ("tan", BigFloat::tan),
    ("cot", BigFloat::cot),
    ("csc", BigFloat::csc),
    ("sec", BigFloat::sec),
];

/// Functions `f(-x) = -f(x)`.
pub const ODD: [(&str, Fun); 8] = [
    ("sinh", BigFloat::sinh),
    ("tanh", BigFloat::tanh),
    ("coth", BigFloat::coth),
    ("csch", BigFloat::csch),
    ("sin", BigFloat::sin),
    ("tan", BigFloat::tan),
    ("cot", BigFloat::cot),
    ("csc", BigFloat::csc),
];

/// Functions `f(-x) = f(x)`.
pub const EVEN: [(&str, Fun); 4] = [
    ("cosh", BigFloat::cosh),
    ("sech", BigFloat::sech),
    ("cos", BigFloat::cos),
    ("sec", BigFloat::sec),
];

/// Pairs of functions `f(x) = 1/g(x)`.
pub const INVERSE: [(&str, Fun, Fun); 6] = [
    ("coth", BigFloat::coth, BigFloat::tanh),
    ("csch", BigFloat::csch, BigFloat::sinh),
    ("sech", BigFloat::sech, BigFloat::cosh),
    ("cot", BigFloat::cot, BigFloat::tan),
    ("csc", BigFloat::csc, BigFloat::sin),
    ("sec", BigFloat::sec, BigFloat::cos),
];

pub const ROUNDING_MODES: [RoundingMode; 5] = [
    RoundingMode::ToEven,
    RoundingMode::ToZero,
    RoundingMode::FromZero,
    RoundingMode::Up,
    RoundingMode::Down,
];

pub fn random_rm() -> RoundingMode {
    ROUNDING_MODES[random::<usize>() % ROUNDING_MODES.len()]
}

/// Random precision in the range from `p_min` to `p_max`.
pub fn random_prec(p_min: usize, p_max: usize) -> usize {
    random::<usize>() % (p_max - p_min + 1) + p_min
}

/// Random regular number with a random precision up to 200 bits.
pub fn random_arg(emin: Exponent, emax: Exponent) -> BigFloat {
    BigFloat::random_normal(random_prec(1, 200), emin, emax).unwrap()
}

/// Rounds the result `r` of a function computed with precision `p + 64` toward zero having the ternary value `t`
/// to precision `p` with the rounding mode `rm`.
/// Returns None if the rounding can not be decided from `r`.
pub fn oracle_round(
    r: &BigFloat,
    t: Ternary,
    p: usize,
    rm: RoundingMode,
    ctx: &mut Context,
) -> Option<(BigFloat, Ternary)> {
    if !t.is_exact() {
        // r is a number of precision p or a midpoint
        let (_, t1) = r.round(p, RoundingMode::ToZero, ctx).unwrap();
        if t1.is_exact() {
            return None;
        }

        if rm == RoundingMode::ToEven {
            let (_, t2) = r.round(p + 1, RoundingMode::ToZero, ctx).unwrap();
            if t2.is_exact() {
                return None;
            }
        }
    }

    Some(r.round(p, rm, ctx).unwrap())
}

/// Checks `d` and `expected` are the same numbers with the same precision.
pub fn assert_same(d: &BigFloat, expected: &BigFloat, info: &str) {
    assert_eq!(d.kind(), expected.kind(), "{}", info);
    assert_eq!(d.sign(), expected.sign(), "{}", info);
    assert_eq!(d.as_raw_parts(), expected.as_raw_parts(), "{}", info);
}
