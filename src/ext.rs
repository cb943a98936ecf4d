//! BigFloat including finite numbers, `NaN`, and `Inf`.

use crate::ctx::Context;
use crate::ctx::Flags;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::Ternary;
use crate::defs::Word;
use crate::defs::EXPONENT_MAX;
use crate::defs::EXPONENT_MIN;
use crate::num::BigFloatNumber;
use crate::ops::range::ExponentGuard;
use core::cmp::Ordering;

/// Kind of a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Not a number.
    NaN,

    /// Positive or negative infinity.
    Inf,

    /// Positive or negative zero.
    Zero,

    /// Finite non-zero number.
    Regular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Flavor {
    Value,
    NaN,
    Inf,
}

/// Number representation.
///
/// A number has a fixed precision in bits, set at creation. The sign is defined for every kind of number,
/// including zeroes and infinities.
///
/// Operations write the result correctly rounded to the precision of the destination
/// and return the ternary value: the direction of rounding relative to the exact result.
#[derive(Debug)]
pub struct BigFloat {
    flavor: Flavor,
    num: BigFloatNumber,
}

impl BigFloat {
    /// Returns a new BigFloat with the value of positive zero and precision `p`.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory for mantissa.
    ///  - InvalidArgument: the precision is zero.
    pub fn new(p: usize) -> Result<Self, Error> {
        Ok(BigFloat {
            flavor: Flavor::Value,
            num: BigFloatNumber::new(p)?,
        })
    }

    /// Returns NaN with precision `p`.
    pub fn nan(p: usize) -> Result<Self, Error> {
        let mut ret = Self::new(p)?;
        ret.set_nan();
        Ok(ret)
    }

    /// Returns infinity with the sign `s` and precision `p`.
    pub fn inf(p: usize, s: Sign) -> Result<Self, Error> {
        let mut ret = Self::new(p)?;
        ret.set_inf(s);
        Ok(ret)
    }

    /// Returns the integer `i` rounded to nearest with precision `p`.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory for mantissa.
    ///  - InvalidArgument: the precision is zero.
    pub fn from_i64(i: i64, p: usize) -> Result<Self, Error> {
        let (num, _) = BigFloatNumber::from_i64(i, p, RoundingMode::ToEven)?;
        Ok(BigFloat {
            flavor: Flavor::Value,
            num,
        })
    }

    /// Constructs a number with precision `p` from the mantissa words `m` stored least significant first,
    /// the sign `s`, and the exponent `e`. The value is `0.m * 2^e`.
    /// The mantissa must be normalized with zero bits beyond `p`, or all zeroes for zero.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero, the number of words does not match the precision,
    ///    the mantissa is not normalized, or the exponent is out of the widest exponent range.
    ///  - MemoryAllocation: failed to allocate memory for mantissa.
    pub fn from_raw_parts(m: &[Word], p: usize, s: Sign, e: Exponent) -> Result<Self, Error> {
        if !(EXPONENT_MIN..=EXPONENT_MAX).contains(&e) {
            return Err(Error::InvalidArgument);
        }

        Ok(BigFloat {
            flavor: Flavor::Value,
            num: BigFloatNumber::from_raw_parts(m, p, s, e)?,
        })
    }

    /// Decomposes a finite number into the mantissa words, the precision, the sign, and the exponent.
    /// Returns None for NaN and infinity.
    pub fn as_raw_parts(&self) -> Option<(&[Word], usize, Sign, Exponent)> {
        match self.flavor {
            Flavor::Value => Some((
                self.num.mantissa().digits(),
                self.num.precision(),
                self.num.sign(),
                self.num.exponent(),
            )),
            _ => None,
        }
    }

    /// Returns a random normalized number with precision `p` and an exponent in the range from `exp_from` to `exp_to`.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory for mantissa.
    ///  - InvalidArgument: the precision is zero, or the exponent range is empty or out of the widest exponent range.
    #[cfg(feature = "random")]
    pub fn random_normal(p: usize, exp_from: Exponent, exp_to: Exponent) -> Result<Self, Error> {
        if exp_from < EXPONENT_MIN || exp_to > EXPONENT_MAX {
            return Err(Error::InvalidArgument);
        }

        Ok(BigFloat {
            flavor: Flavor::Value,
            num: BigFloatNumber::random_normal(p, exp_from, exp_to)?,
        })
    }

    /// Returns the kind of the number.
    pub fn kind(&self) -> Kind {
        match self.flavor {
            Flavor::NaN => Kind::NaN,
            Flavor::Inf => Kind::Inf,
            Flavor::Value => {
                if self.num.is_zero() {
                    Kind::Zero
                } else {
                    Kind::Regular
                }
            }
        }
    }

    /// Returns true if `self` is NaN.
    pub fn is_nan(&self) -> bool {
        self.flavor == Flavor::NaN
    }

    /// Returns true if `self` is infinite.
    pub fn is_inf(&self) -> bool {
        self.flavor == Flavor::Inf
    }

    /// Returns true if `self` is positive or negative zero.
    pub fn is_zero(&self) -> bool {
        self.kind() == Kind::Zero
    }

    /// Returns true if `self` is a finite non-zero number.
    pub fn is_regular(&self) -> bool {
        self.kind() == Kind::Regular
    }

    /// Returns the sign of the number.
    pub fn sign(&self) -> Sign {
        self.num.sign()
    }

    /// Returns the exponent of a regular number.
    pub fn exponent(&self) -> Option<Exponent> {
        self.regular().map(|n| n.exponent())
    }

    /// Returns the precision in bits.
    pub fn precision(&self) -> usize {
        self.num.precision()
    }

    /// Returns the copy of `self` with the opposite sign.
    pub fn neg(&self) -> Result<Self, Error> {
        Ok(BigFloat {
            flavor: self.flavor,
            num: self.num.neg()?,
        })
    }

    /// Returns the copy of `self`.
    pub fn clone(&self) -> Result<Self, Error> {
        Ok(BigFloat {
            flavor: self.flavor,
            num: self.num.clone()?,
        })
    }

    /// Converts `self` to an integer rounded with the rounding mode `rm`.
    /// Returns None and raises the `ERANGE` flag if `self` is NaN, infinite, or out of the range of `i64`.
    /// The `INEXACT` flag is raised if the conversion is not exact.
    pub fn to_i64(&self, rm: RoundingMode, ctx: &mut Context) -> Result<Option<i64>, Error> {
        if let Some(n) = self.regular() {
            let r = n.round_to_int(rm)?;

            if let Some(i) = r.to_i64() {
                if r.cmp(n) != Ordering::Equal {
                    ctx.raise_flags(Flags::INEXACT);
                }
                return Ok(Some(i));
            }
        } else if self.is_zero() {
            return Ok(Some(0));
        }

        ctx.raise_flags(Flags::ERANGE);

        Ok(None)
    }

    /// Sets `self` to `x` rounded to the precision of `self` with the rounding mode `rm`.
    pub fn round_from(
        &mut self,
        x: &BigFloat,
        rm: RoundingMode,
        ctx: &mut Context,
    ) -> Result<Ternary, Error> {
        let mut guard = ExponentGuard::new(ctx);

        let t = match x.kind() {
            Kind::NaN => {
                self.set_nan();
                guard.raise(Flags::NAN);
                Ternary::Exact
            }
            Kind::Inf => {
                self.set_inf(x.sign());
                Ternary::Exact
            }
            Kind::Zero => {
                self.set_zero(x.sign());
                Ternary::Exact
            }
            Kind::Regular => self.set_rounded(&x.num, rm)?,
        };

        Ok(guard.finish(self, t, rm))
    }

    /// Sets `self` to `a + b`.
    pub fn set_add(
        &mut self,
        a: &BigFloat,
        b: &BigFloat,
        rm: RoundingMode,
        ctx: &mut Context,
    ) -> Result<Ternary, Error> {
        self.set_add_sub(a, b, rm, ctx, false)
    }

    /// Sets `self` to `a - b`.
    pub fn set_sub(
        &mut self,
        a: &BigFloat,
        b: &BigFloat,
        rm: RoundingMode,
        ctx: &mut Context,
    ) -> Result<Ternary, Error> {
        self.set_add_sub(a, b, rm, ctx, true)
    }

    fn set_add_sub(
        &mut self,
        a: &BigFloat,
        b: &BigFloat,
        rm: RoundingMode,
        ctx: &mut Context,
        subtract: bool,
    ) -> Result<Ternary, Error> {
        let mut guard = ExponentGuard::new(ctx);

        let sb = if subtract { b.sign().invert() } else { b.sign() };

        let t = match (a.kind(), b.kind()) {
            (Kind::NaN, _) | (_, Kind::NaN) => {
                self.set_nan();
                guard.raise(Flags::NAN);
                Ternary::Exact
            }
            (Kind::Inf, Kind::Inf) => {
                if a.sign() == sb {
                    self.set_inf(sb);
                } else {
                    self.set_nan();
                    guard.raise(Flags::NAN);
                }
                Ternary::Exact
            }
            (Kind::Inf, _) => {
                self.set_inf(a.sign());
                Ternary::Exact
            }
            (_, Kind::Inf) => {
                self.set_inf(sb);
                Ternary::Exact
            }
            _ => {
                let p = self.precision();
                let (n, t) = if subtract {
                    a.num.sub(&b.num, p, rm)?
                } else {
                    a.num.add(&b.num, p, rm)?
                };
                self.set_number(n);
                t
            }
        };

        Ok(guard.finish(self, t, rm))
    }

    /// Sets `self` to `a * b`.
    pub fn set_mul(
        &mut self,
        a: &BigFloat,
        b: &BigFloat,
        rm: RoundingMode,
        ctx: &mut Context,
    ) -> Result<Ternary, Error> {
        let mut guard = ExponentGuard::new(ctx);

        let s = a.sign().mul(b.sign());

        let t = match (a.kind(), b.kind()) {
            (Kind::NaN, _)
            | (_, Kind::NaN)
            | (Kind::Inf, Kind::Zero)
            | (Kind::Zero, Kind::Inf) => {
                self.set_nan();
                guard.raise(Flags::NAN);
                Ternary::Exact
            }
            (Kind::Inf, _) | (_, Kind::Inf) => {
                self.set_inf(s);
                Ternary::Exact
            }
            _ => {
                let (n, t) = a.num.mul(&b.num, self.precision(), rm)?;
                self.set_number(n);
                t
            }
        };

        Ok(guard.finish(self, t, rm))
    }

    /// Sets `self` to `a / b`.
    pub fn set_div(
        &mut self,
        a: &BigFloat,
        b: &BigFloat,
        rm: RoundingMode,
        ctx: &mut Context,
    ) -> Result<Ternary, Error> {
        let mut guard = ExponentGuard::new(ctx);

        let s = a.sign().mul(b.sign());

        let t = match (a.kind(), b.kind()) {
            (Kind::NaN, _)
            | (_, Kind::NaN)
            | (Kind::Inf, Kind::Inf)
            | (Kind::Zero, Kind::Zero) => {
                self.set_nan();
                guard.raise(Flags::NAN);
                Ternary::Exact
            }
            (Kind::Inf, _) => {
                self.set_inf(s);
                Ternary::Exact
            }
            (_, Kind::Inf) => {
                self.set_zero(s);
                Ternary::Exact
            }
            (_, Kind::Zero) => {
                self.set_inf(s);
                guard.raise(Flags::DIVBY0);
                Ternary::Exact
            }
            _ => {
                let (n, t) = a.num.div(&b.num, self.precision(), rm)?;
                self.set_number(n);
                t
            }
        };

        Ok(guard.finish(self, t, rm))
    }

    /// Sets `self` to `1 / x`.
    pub fn set_reciprocal(
        &mut self,
        x: &BigFloat,
        rm: RoundingMode,
        ctx: &mut Context,
    ) -> Result<Ternary, Error> {
        let mut guard = ExponentGuard::new(ctx);

        let t = match x.kind() {
            Kind::NaN => {
                self.set_nan();
                guard.raise(Flags::NAN);
                Ternary::Exact
            }
            Kind::Inf => {
                self.set_zero(x.sign());
                Ternary::Exact
            }
            Kind::Zero => {
                self.set_inf(x.sign());
                guard.raise(Flags::DIVBY0);
                Ternary::Exact
            }
            Kind::Regular => {
                let (n, t) = x.num.reciprocal(self.precision(), rm)?;
                self.set_number(n);
                t
            }
        };

        Ok(guard.finish(self, t, rm))
    }

    pub(crate) fn number(&self) -> &BigFloatNumber {
        &self.num
    }

    pub(crate) fn regular(&self) -> Option<&BigFloatNumber> {
        if self.kind() == Kind::Regular {
            Some(&self.num)
        } else {
            None
        }
    }

    pub(crate) fn set_nan(&mut self) {
        self.flavor = Flavor::NaN;
        self.num.set_zero(Sign::Pos);
    }

    pub(crate) fn set_inf(&mut self, s: Sign) {
        self.flavor = Flavor::Inf;
        self.num.set_zero(s);
    }

    pub(crate) fn set_zero(&mut self, s: Sign) {
        self.flavor = Flavor::Value;
        self.num.set_zero(s);
    }

    pub(crate) fn set_max_value(&mut self, s: Sign, e: Exponent) {
        self.flavor = Flavor::Value;
        self.num.set_max_value(s, e);
    }

    pub(crate) fn set_min_positive(&mut self, s: Sign, e: Exponent) {
        self.flavor = Flavor::Value;
        self.num.set_min_positive(s, e);
    }

    /// Sets `self` to the integer `i` rounded to nearest.
    pub(crate) fn set_int(&mut self, i: i64) -> Result<Ternary, Error> {
        let (n, t) = BigFloatNumber::from_i64(i, self.precision(), RoundingMode::ToEven)?;
        self.set_number(n);
        Ok(t)
    }

    /// Sets `self` to `n` which has the precision of `self`.
    pub(crate) fn set_number(&mut self, n: BigFloatNumber) {
        debug_assert_eq!(n.precision(), self.precision());
        self.flavor = Flavor::Value;
        self.num = n;
    }

    /// Sets `self` to `c + d * dir` rounded to the precision of `self`, where `d` is an unknown positive value
    /// below the bound of `BigFloatNumber::add_correction`.
    pub(crate) fn set_correction(
        &mut self,
        c: &BigFloatNumber,
        dir: Sign,
        rm: RoundingMode,
    ) -> Result<Ternary, Error> {
        let (n, t) = c.add_correction(dir, self.precision(), rm)?;
        self.set_number(n);
        Ok(t)
    }

    /// Sets `self` to `n` rounded to the precision of `self`.
    pub(crate) fn set_rounded(
        &mut self,
        n: &BigFloatNumber,
        rm: RoundingMode,
    ) -> Result<Ternary, Error> {
        let (n, t) = n.round(self.precision(), rm)?;
        self.flavor = Flavor::Value;
        self.num = n;
        Ok(t)
    }

    #[cfg(test)]
    pub(crate) fn set_exponent(&mut self, e: Exponent) {
        self.num.set_exponent(e);
    }
}

macro_rules! gen_wrapper_arg_rm_ctx {
    // function of one argument from its destination form
    ($comment:literal, $fname:ident, $set_fname:ident) => {
        #[doc=$comment]
        pub fn $fname(
            &self,
            p: usize,
            rm: RoundingMode,
            ctx: &mut Context,
        ) -> Result<(Self, Ternary), Error> {
            let mut ret = BigFloat::new(p)?;
            let t = ret.$set_fname(self, rm, ctx)?;
            Ok((ret, t))
        }
    };
}

macro_rules! gen_wrapper_arg2_rm_ctx {
    // function of two arguments from its destination form
    ($comment:literal, $fname:ident, $set_fname:ident) => {
        #[doc=$comment]
        pub fn $fname(
            &self,
            d2: &Self,
            p: usize,
            rm: RoundingMode,
            ctx: &mut Context,
        ) -> Result<(Self, Ternary), Error> {
            let mut ret = BigFloat::new(p)?;
            let t = ret.$set_fname(self, d2, rm, ctx)?;
            Ok((ret, t))
        }
    };
}

macro_rules! gen_const_rm_ctx {
    // constant from its destination form
    ($comment:literal, $fname:ident, $set_fname:ident) => {
        #[doc=$comment]
        pub fn $fname(p: usize, rm: RoundingMode, ctx: &mut Context) -> Result<(Self, Ternary), Error> {
            let mut ret = BigFloat::new(p)?;
            let t = ret.$set_fname(rm, ctx)?;
            Ok((ret, t))
        }
    };
}

impl BigFloat {
    gen_wrapper_arg_rm_ctx!("Returns `self` rounded to precision `p`.", round, round_from);
    gen_wrapper_arg_rm_ctx!("Returns the reciprocal of `self` with precision `p`.", reciprocal, set_reciprocal);

    gen_wrapper_arg2_rm_ctx!("Returns the sum of `self` and `d2` with precision `p`.", add, set_add);
    gen_wrapper_arg2_rm_ctx!("Returns the difference of `self` and `d2` with precision `p`.", sub, set_sub);
    gen_wrapper_arg2_rm_ctx!("Returns the product of `self` and `d2` with precision `p`.", mul, set_mul);
    gen_wrapper_arg2_rm_ctx!("Returns the quotient of `self` and `d2` with precision `p`.", div, set_div);

    gen_wrapper_arg_rm_ctx!("Returns `e` to the power of `self` with precision `p`.", exp, set_exp);

    gen_wrapper_arg_rm_ctx!("Returns the hyperbolic sine of `self` with precision `p`.", sinh, set_sinh);
    gen_wrapper_arg_rm_ctx!("Returns the hyperbolic cosine of `self` with precision `p`.", cosh, set_cosh);
    gen_wrapper_arg_rm_ctx!("Returns the hyperbolic tangent of `self` with precision `p`.", tanh, set_tanh);
    gen_wrapper_arg_rm_ctx!("Returns the hyperbolic cotangent of `self` with precision `p`.", coth, set_coth);
    gen_wrapper_arg_rm_ctx!("Returns the hyperbolic cosecant of `self` with precision `p`.", csch, set_csch);
    gen_wrapper_arg_rm_ctx!("Returns the hyperbolic secant of `self` with precision `p`.", sech, set_sech);

    gen_wrapper_arg_rm_ctx!("Returns the sine of `self` with precision `p`. The function takes an angle in radians as an argument.", sin, set_sin);
    gen_wrapper_arg_rm_ctx!("Returns the cosine of `self` with precision `p`. The function takes an angle in radians as an argument.", cos, set_cos);
    gen_wrapper_arg_rm_ctx!("Returns the tangent of `self` with precision `p`. The function takes an angle in radians as an argument.", tan, set_tan);
    gen_wrapper_arg_rm_ctx!("Returns the cotangent of `self` with precision `p`. The function takes an angle in radians as an argument.", cot, set_cot);
    gen_wrapper_arg_rm_ctx!("Returns the cosecant of `self` with precision `p`. The function takes an angle in radians as an argument.", csc, set_csc);
    gen_wrapper_arg_rm_ctx!("Returns the secant of `self` with precision `p`. The function takes an angle in radians as an argument.", sec, set_sec);

    gen_const_rm_ctx!("Returns π with precision `p`.", pi, set_pi);
    gen_const_rm_ctx!("Returns the natural logarithm of 2 with precision `p`.", ln2, set_ln2);
}

impl PartialEq for BigFloat {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for BigFloat {
    /// Compares numbers. NaN is not comparable, zeroes of different signs are equal.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let sign_order = |s: Sign| {
            if s.is_positive() {
                Ordering::Greater
            } else {
                Ordering::Less
            }
        };

        match (self.flavor, other.flavor) {
            (Flavor::NaN, _) | (_, Flavor::NaN) => None,
            (Flavor::Inf, Flavor::Inf) => {
                if self.sign() == other.sign() {
                    Some(Ordering::Equal)
                } else {
                    Some(sign_order(self.sign()))
                }
            }
            (Flavor::Inf, _) => Some(sign_order(self.sign())),
            (_, Flavor::Inf) => Some(sign_order(other.sign()).reverse()),
            (Flavor::Value, Flavor::Value) => Some(self.num.cmp(&other.num)),
        }
    }
}
