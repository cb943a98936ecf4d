//! Correctly rounded functions.

pub(crate) mod consts;
mod cos;
mod cosh;
mod cot;
mod coth;
mod csc;
mod csch;
mod exp;
mod inverse;
pub(crate) mod range;
mod round;
mod sec;
mod sech;
mod sin;
mod sinh;
mod special;
mod tan;
mod tanh;
mod trig;
pub(crate) mod ziv;

#[cfg(test)]
pub(crate) mod test_util {

    use crate::defs::Exponent;
    use crate::defs::Sign;
    use crate::defs::Word;
    use crate::ext::BigFloat;

    /// Checks the mantissa, the exponent, and the sign of `d`.
    pub fn assert_parts(d: &BigFloat, m: &[Word], e: Exponent, s: Sign) {
        let (dm, _, ds, de) = d.as_raw_parts().unwrap();
        assert_eq!(dm, m);
        assert_eq!(de, e);
        assert_eq!(ds, s);
    }

    /// Returns `0.5 * 2^e` with the sign `s`.
    pub fn frac(s: Sign, e: Exponent) -> BigFloat {
        BigFloat::from_raw_parts(&[1 << 63], 64, s, e).unwrap()
    }

    /// Returns `10^22`.
    pub fn ten_pow_22() -> BigFloat {
        BigFloat::from_raw_parts(&[0x878678326eac9000], 64, Sign::Pos, 74).unwrap()
    }
}
