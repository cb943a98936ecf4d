//! Symmetries of functions and consistency of the functions computed through reciprocals.

mod common;

use astro_ziv::{BigFloat, Context, Exponent, RoundingMode};
use common::{assert_same, random_arg, random_prec, EVEN, INVERSE, ODD, ROUNDING_MODES};

#[test]
fn odd_functions() {
    let mut ctx = Context::new();

    for (name, f) in ODD {
        for _ in 0..30 {
            let p = random_prec(1, 200);
            let x = random_arg(-100, 10);
            let nx = x.neg().unwrap();

            for rm in ROUNDING_MODES {
                let (d1, t1) = f(&x, p, rm, &mut ctx).unwrap();
                let (d2, t2) = f(&nx, p, rm.invert(), &mut ctx).unwrap();

                let info = format!("{}({:?}) p={} {:?}", name, x, p, rm);
                assert_same(&d1, &d2.neg().unwrap(), &info);
                assert_eq!(t1, t2.invert(), "{}", info);
            }
        }

        // signed zero
        let z = BigFloat::new(10).unwrap().neg().unwrap();
        let (d, _) = f(&z, 10, RoundingMode::ToEven, &mut ctx).unwrap();
        assert_eq!(d.sign(), astro_ziv::Sign::Neg, "{}", name);
    }
}

#[test]
fn even_functions() {
    let mut ctx = Context::new();

    for (name, f) in EVEN {
        for _ in 0..30 {
            let p = random_prec(1, 200);
            let x = random_arg(-100, 10);
            let nx = x.neg().unwrap();

            for rm in ROUNDING_MODES {
                let (d1, t1) = f(&x, p, rm, &mut ctx).unwrap();
                let (d2, t2) = f(&nx, p, rm, &mut ctx).unwrap();

                let info = format!("{}({:?}) p={} {:?}", name, x, p, rm);
                assert_same(&d1, &d2, &info);
                assert_eq!(t1, t2, "{}", info);
            }
        }
    }
}

#[test]
fn inverse_consistency() {
    let mut ctx = Context::new();
    let rm = RoundingMode::ToEven;
    let one = BigFloat::from_i64(1, 1).unwrap();

    for (name, f, g) in INVERSE {
        for _ in 0..30 {
            let p = random_prec(2, 1000);
            let x = random_arg(-20, 5);

            let (fx, _) = f(&x, p, rm, &mut ctx).unwrap();
            let (gx, _) = g(&x, p, rm, &mut ctx).unwrap();

            // each factor is within half an ulp, so |f*g - 1| < 2^(2-p)
            let (fg, _) = fx.mul(&gx, p + 1, rm, &mut ctx).unwrap();
            let (d, _) = fg.sub(&one, p + 1, rm, &mut ctx).unwrap();

            let info = format!("{}({:?}) p={}", name, x, p);
            assert!(d.is_zero() || d.exponent().unwrap() <= 2 - p as Exponent, "{}", info);
        }
    }
}
