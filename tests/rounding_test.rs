//! Results are compared with the same functions computed with a higher precision and rounded again.

mod common;

use astro_ziv::{BigFloat, Context, RoundingMode};
use common::{assert_same, oracle_round, random_arg, random_prec, random_rm, CONSTANTS, FUNCTIONS};
use rand::random;

fn compare(name: &str, f: common::Fun, x: &BigFloat, p: usize, rm: RoundingMode, ctx: &mut Context) {
    let (r, t) = f(x, p + 64, RoundingMode::ToZero, ctx).unwrap();

    if let Some((expected, te)) = oracle_round(&r, t, p, rm, ctx) {
        let (d, td) = f(x, p, rm, ctx).unwrap();
        let info = format!("{}({:?}) p={} {:?}", name, x, p, rm);
        assert_same(&d, &expected, &info);
        assert_eq!(td, te, "{}", info);
    }
}

#[test]
fn correct_rounding() {
    let run_cnt = 40;
    let mut ctx = Context::new();

    for (name, f) in FUNCTIONS {
        for _ in 0..run_cnt {
            let p = random_prec(2, 200);
            let rm = random_rm();

            // moderate arguments
            let x = random_arg(-10, 8);
            compare(name, f, &x, p, rm, &mut ctx);

            // arguments around the thresholds of the shortcuts
            let e = -(random::<i64>().rem_euclid(2 * p as i64 + 100));
            let x = random_arg(e, e);
            compare(name, f, &x, p, rm, &mut ctx);
        }
    }
}

#[test]
fn correct_rounding_large() {
    let run_cnt = 10;
    let mut ctx = Context::new();

    for (name, f) in FUNCTIONS {
        for _ in 0..run_cnt {
            let p = random_prec(2, 200);
            let x = random_arg(8, 40);
            compare(name, f, &x, p, random_rm(), &mut ctx);
        }
    }
}

#[test]
fn exact_results() {
    let mut ctx = Context::new();

    // values at non-zero rational points are irrational
    for (name, f) in FUNCTIONS {
        let x = random_arg(-5, 5);
        let (_, t) = f(&x, 100, RoundingMode::ToEven, &mut ctx).unwrap();
        assert!(!t.is_exact(), "{}", name);
    }
}

#[test]
fn constants() {
    let mut ctx = Context::new();

    for _ in 0..20 {
        let p = random_prec(1, 2000);
        let rm = random_rm();

        for (name, f) in CONSTANTS {
            let (r, t) = f(p + 64, RoundingMode::ToZero, &mut ctx).unwrap();

            if let Some((expected, te)) = oracle_round(&r, t, p, rm, &mut ctx) {
                let (d, td) = f(p, rm, &mut ctx).unwrap();
                let info = format!("{} p={} {:?}", name, p, rm);
                assert_same(&d, &expected, &info);
                assert_eq!(td, te, "{}", info);
            }
        }
    }
}
