//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Polynomial, Term};

    // Strategy for generating small integer-valued coefficients
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-20i32..20i32).prop_map(f64::from)
    }

    // Strategy for generating terms of degree 0-5
    fn small_term() -> impl Strategy<Value = Term> {
        (small_coeff(), 0i32..=5).prop_map(|(c, d)| Term::new(c, d))
    }

    // Strategy for generating polynomials through addition, so terms are merged
    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(small_term(), 0..=6)
            .prop_map(|terms: Vec<Term>| terms.into_iter().sum::<Polynomial>())
    }

    // Strategy for generating dyadic evaluation points, exact in binary
    fn sample_point() -> impl Strategy<Value = f64> {
        (-8i32..=8).prop_map(|n| f64::from(n) / 4.0)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
    }

    fn has_unique_degrees(p: &Polynomial) -> bool {
        let mut degrees = p.degrees();
        degrees.sort_unstable();
        degrees.windows(2).all(|w| w[0] != w[1])
    }

    proptest! {
        // Term properties

        #[test]
        fn term_add_same_degree(a in small_coeff(), b in small_coeff(), d in 0i32..10) {
            let sum = Term::new(a, d) + Term::new(b, d);
            let merged = sum.as_term().copied();
            prop_assert_eq!(merged, Some(Term::new(a + b, d)));
        }

        #[test]
        fn term_mul_adds_degrees(a in small_term(), b in small_term()) {
            let product = a * b;
            prop_assert_eq!(product.degree(), a.degree() + b.degree());
            prop_assert_eq!(product.coefficient(), a.coefficient() * b.coefficient());
        }

        // Normalization

        #[test]
        fn add_leaves_one_term_per_degree(
            raw in proptest::collection::vec(small_term(), 0..=8),
            q in small_poly()
        ) {
            let p = Polynomial::from_terms(raw);
            prop_assert!(has_unique_degrees(&(p.clone() + q.clone())));
            prop_assert!(has_unique_degrees(&(q + p)));
        }

        #[test]
        fn mul_leaves_one_term_per_degree(p in small_poly(), q in small_poly()) {
            prop_assert!(has_unique_degrees(&(&p * &q)));
        }

        #[test]
        fn purge_removes_zeros_and_keeps_value(p in small_poly(), x in sample_point()) {
            let purged = p.purge();
            prop_assert!(purged.coefficients().iter().all(|&c| c != 0.0));
            prop_assert!(close(purged.evaluate(x), p.evaluate(x)));
        }

        // Evaluation is a ring homomorphism

        #[test]
        fn eval_add(p in small_poly(), q in small_poly(), x in sample_point()) {
            prop_assert!(close((&p + &q).evaluate(x), p.evaluate(x) + q.evaluate(x)));
        }

        #[test]
        fn eval_sub(p in small_poly(), q in small_poly(), x in sample_point()) {
            prop_assert!(close((&p - &q).evaluate(x), p.evaluate(x) - q.evaluate(x)));
        }

        #[test]
        fn eval_mul(p in small_poly(), q in small_poly(), x in sample_point()) {
            prop_assert!(close((&p * &q).evaluate(x), p.evaluate(x) * q.evaluate(x)));
        }

        #[test]
        fn add_commutative(p in small_poly(), q in small_poly()) {
            prop_assert_eq!(&p + &q, &q + &p);
        }

        // Derivative

        #[test]
        fn derivative_lowers_degree(p in small_poly()) {
            let p = p.purge();
            let d = p.derivative();
            if let (Ok(pd), Ok(dd)) = (p.degree(), d.degree()) {
                prop_assert_eq!(dd, pd - 1);
            }
        }

        #[test]
        fn derivative_of_sum(p in small_poly(), q in small_poly(), x in sample_point()) {
            let lhs = (&p + &q).derivative().evaluate(x);
            let rhs = p.derivative().evaluate(x) + q.derivative().evaluate(x);
            prop_assert!(close(lhs, rhs));
        }

        // Textual format

        #[test]
        fn display_parse_round_trip(p in small_poly(), x in sample_point()) {
            prop_assume!(!p.is_empty());
            let parsed: Polynomial = p.to_string().parse().unwrap();
            prop_assert!(close(parsed.evaluate(x), p.evaluate(x)));
        }
    }
}
