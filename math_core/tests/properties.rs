//! Algebraic properties of the engine, checked over generated inputs.

use proptest::prelude::*;

use math_core::calculators::decimal::decimal_to_fraction;
use math_core::calculators::fraction::Fraction;
use math_core::calculators::remainder;
use math_core::primitives::{gcd, lcm};

proptest! {
    #[test]
    fn simplify_is_idempotent(
        n in -10_000i64..10_000,
        d in (-10_000i64..10_000).prop_filter("non-zero denominator", |d| *d != 0),
    ) {
        let f = Fraction { numerator: n, denominator: d };
        let once = f.simplify();
        prop_assert_eq!(once.simplify(), once);
        prop_assert!(once.denominator > 0);
        prop_assert_eq!(gcd(once.numerator, once.denominator), 1);
    }

    #[test]
    fn mixed_form_round_trips(
        n in -10_000i64..10_000,
        d in (1i64..1000).prop_filter("non-zero", |d| *d != 0),
    ) {
        let f = Fraction { numerator: n, denominator: d };
        prop_assert_eq!(f.to_mixed().to_improper(), f.simplify());
    }

    #[test]
    fn gcd_lcm_identity(
        a in (-10_000i64..10_000).prop_filter("non-zero", |a| *a != 0),
        b in (-10_000i64..10_000).prop_filter("non-zero", |b| *b != 0),
    ) {
        prop_assert_eq!(gcd(a, b) * lcm(a, b), (a * b).abs());
    }

    #[test]
    fn continued_fraction_recovers_small_rationals(
        p in -1000i64..1000,
        q in 1i64..1000,
    ) {
        let x = p as f64 / q as f64;
        let recovered = decimal_to_fraction(x).unwrap();
        prop_assert_eq!(recovered, Fraction { numerator: p, denominator: q }.simplify());
    }

    #[test]
    fn modulo_is_non_negative_and_bounded(
        a in -1_000_000i64..1_000_000,
        n in (-1000i64..1000).prop_filter("non-zero divisor", |n| *n != 0),
    ) {
        let r = remainder::compute(a, n).unwrap();
        prop_assert!(r.modulo >= 0);
        prop_assert!(r.modulo < n.abs());
    }

    #[test]
    fn division_identity_holds_exactly(
        a in -1_000_000i64..1_000_000,
        n in (-1000i64..1000).prop_filter("non-zero divisor", |n| *n != 0),
    ) {
        let r = remainder::compute(a, n).unwrap();
        prop_assert_eq!(r.quotient * n + r.remainder, a);
    }
}
