//! Property-based tests for root finding.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use polyroot_poly::{Polynomial, Term};

    use crate::{calc_roots, DurandKerner, Root};

    // Strategy for generating distinct integer roots
    fn distinct_roots() -> impl Strategy<Value = Vec<i64>> {
        proptest::collection::btree_set(-6i64..=6, 1..=4)
            .prop_map(|set| set.into_iter().collect())
    }

    // Builds prod (x - r) through polynomial multiplication
    #[allow(clippy::cast_precision_loss)]
    fn from_roots(roots: &[i64]) -> Polynomial {
        roots
            .iter()
            .fold(Polynomial::from(1.0), |acc, &r| {
                let factor = Polynomial::from_terms(vec![Term::new(1.0, 1), Term::numerical(-(r as f64))]);
                &acc * &factor
            })
            .purge()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn recovers_distinct_integer_roots(roots in distinct_roots()) {
            let poly = from_roots(&roots);
            let found = calc_roots(&poly).unwrap();

            let mut expected: Vec<Root> = roots.iter().copied().map(Root::Integer).collect();
            expected.sort_by(|a, b| b.total_cmp(a));
            prop_assert_eq!(found, expected);
        }

        #[test]
        fn root_count_matches_degree(roots in distinct_roots(), scale in 1i32..5) {
            let poly = from_roots(&roots) * f64::from(scale);
            let raw = DurandKerner::new().approximate_raw(&poly).unwrap();
            prop_assert_eq!(raw.len(), roots.len());
        }

        #[test]
        fn roots_are_sorted_descending(roots in distinct_roots()) {
            let found = calc_roots(&from_roots(&roots)).unwrap();
            prop_assert!(found.windows(2).all(|w| w[0].total_cmp(&w[1]).is_ge()));
        }
    }
}
