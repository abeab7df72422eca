//! Property-based tests for fraction arithmetic and ordering.

#[cfg(test)]
mod tests {
    use num_integer::Integer as _;
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Fraction, FractionError};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn fraction() -> impl Strategy<Value = Fraction> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Fraction::new(n, d).unwrap())
    }

    fn non_zero_fraction() -> impl Strategy<Value = Fraction> {
        (non_zero_int(), non_zero_int()).prop_map(|(n, d)| Fraction::new(n, d).unwrap())
    }

    proptest! {
        // Canonical form

        #[test]
        fn construction_is_reduced(n in any::<i64>(), d in any::<i64>().prop_filter("non-zero", |d| *d != 0)) {
            match Fraction::new(n, d) {
                Ok(f) => {
                    prop_assert!(f.denominator() > 0);
                    prop_assert_eq!(
                        i128::from(f.numerator()).gcd(&i128::from(f.denominator())),
                        1
                    );
                }
                // Only a reduced part of 2^63 can fail to fit.
                Err(err) => {
                    prop_assert_eq!(err, FractionError::Overflow);
                    prop_assert!(d == i64::MIN || (n == i64::MIN && d < 0));
                }
            }
        }

        #[test]
        fn reduction_is_fixed_point(n in small_int(), d in non_zero_int()) {
            let f = Fraction::new(n, d).unwrap();
            let again = Fraction::new(f.numerator(), f.denominator()).unwrap();
            prop_assert_eq!(f.into_parts(), again.into_parts());
        }

        #[test]
        fn sign_is_normalized(n in small_int(), d in non_zero_int()) {
            let f = Fraction::new(n, d).unwrap();
            prop_assert!(f.denominator() > 0);
            prop_assert_eq!(f.numerator().signum(), n.signum() * d.signum());
        }

        #[test]
        fn equality_is_cross_multiplication(
            a in small_int(),
            b in non_zero_int(),
            c in small_int(),
            d in non_zero_int()
        ) {
            let lhs = Fraction::new(a, b).unwrap();
            let rhs = Fraction::new(c, d).unwrap();
            prop_assert_eq!(lhs == rhs, a * d == c * b);
        }

        #[test]
        fn display_parses_back(f in fraction()) {
            let parsed: Fraction = f.to_string().parse().unwrap();
            prop_assert_eq!(parsed.into_parts(), f.into_parts());
        }

        // Field laws

        #[test]
        fn add_commutative(a in fraction(), b in fraction()) {
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn add_associative(a in fraction(), b in fraction(), c in fraction()) {
            prop_assert_eq!((a + b) + c, a + (b + c));
        }

        #[test]
        fn mul_commutative(a in fraction(), b in fraction()) {
            prop_assert_eq!(a * b, b * a);
        }

        #[test]
        fn distributive(a in fraction(), b in fraction(), c in fraction()) {
            prop_assert_eq!(a * (b + c), a * b + a * c);
        }

        #[test]
        fn identities(f in fraction(), k in non_zero_int()) {
            prop_assert_eq!(f + Fraction::zero(), f);
            prop_assert_eq!(f * Fraction::one(), f);
            prop_assert_eq!((f - f).to_string(), "0");
            prop_assert_eq!((f * Fraction::new(0, k).unwrap()).to_string(), "0");
            prop_assert_eq!(f + 0_i64, f);
        }

        #[test]
        fn sub_is_add_neg(a in fraction(), b in fraction()) {
            prop_assert_eq!(a - b, a + (-b));
        }

        #[test]
        fn div_inverts_mul(a in fraction(), b in non_zero_fraction()) {
            prop_assert_eq!((a * b) / b, a);
        }

        #[test]
        fn div_by_zero_fails(a in fraction(), k in non_zero_int()) {
            let zero = Fraction::new(0, k).unwrap();
            prop_assert_eq!(a.checked_div(&zero), Err(FractionError::DivisionByZero));
        }

        #[test]
        fn power_laws(n in non_zero_int(), d in non_zero_int()) {
            let f = Fraction::new(n, d).unwrap();
            prop_assert_eq!(f.pow(0), Fraction::ONE);
            prop_assert_eq!(f.pow(-1), Fraction::new(d, n).unwrap());
            prop_assert_eq!(f.pow(2), f * f);
            prop_assert_eq!(f.pow(-2) * f.pow(2), Fraction::ONE);
        }

        // Ordering laws

        #[test]
        fn order_matches_cross_multiplication(
            a in small_int(),
            b in non_zero_int(),
            c in small_int(),
            d in non_zero_int()
        ) {
            let lhs = Fraction::new(a, b).unwrap();
            let rhs = Fraction::new(c, d).unwrap();
            // Compare a/b and c/d with positive denominators.
            let expected = (a * d * b.signum() * d.signum()) < (c * b * b.signum() * d.signum());
            prop_assert_eq!(lhs < rhs, expected);
        }

        #[test]
        fn order_is_reflexive(a in fraction()) {
            prop_assert!(a <= a);
            prop_assert!(a >= a);
            prop_assert!(!(a < a));
            prop_assert!(!(a > a));
        }

        #[test]
        fn order_is_antisymmetric(a in fraction(), b in fraction()) {
            if a <= b && b <= a {
                prop_assert_eq!(a, b);
            }
        }

        #[test]
        fn order_is_transitive(a in fraction(), b in fraction(), c in fraction()) {
            if a <= b && b <= c {
                prop_assert!(a <= c);
            }
            if a < b && b < c {
                prop_assert!(a < c);
            }
            if a >= b && b >= c {
                prop_assert!(a >= c);
            }
        }

        #[test]
        fn order_derivations_agree(a in fraction(), b in fraction()) {
            prop_assert_eq!(a <= b, a < b || a == b);
            prop_assert_eq!(a > b, !(a <= b));
            prop_assert_eq!(a >= b, !(a < b));
            prop_assert_eq!(a >= b, a == b || a > b);
            prop_assert_eq!(a < b, a.cmp(&b).is_lt());
        }

        #[test]
        fn order_agrees_with_float(a in fraction(), b in fraction()) {
            if a < b {
                prop_assert!(a.to_f64() <= b.to_f64());
            }
        }

        // Classification

        #[test]
        fn adjacency_is_symmetric(a in fraction(), b in fraction()) {
            prop_assert_eq!(a.is_adjacent_to(&b).unwrap(), b.is_adjacent_to(&a).unwrap());
        }

        #[test]
        fn integers_are_integers(n in small_int()) {
            let f = Fraction::from_integer(n);
            prop_assert!(f.is_integer());
            prop_assert_eq!(f.to_mixed_string(), n.to_string());
        }

        #[test]
        fn proper_means_magnitude_below_one(f in fraction()) {
            prop_assert_eq!(f.is_proper(), f.abs() < Fraction::ONE);
        }
    }
}
