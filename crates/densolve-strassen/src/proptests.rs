//! Property-based tests for Strassen multiplication.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{multiply_with, StrassenConfig};
    use densolve_core::Matrix;

    fn matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
        proptest::collection::vec(-20i32..20, rows * cols).prop_map(move |data| {
            Matrix::from_vec(rows, cols, data.into_iter().map(f64::from).collect())
                .expect("length matches shape")
        })
    }

    // A compatible pair `m x k` and `k x n`.
    fn operands() -> impl Strategy<Value = (Matrix, Matrix)> {
        (1usize..12, 1usize..12, 1usize..12)
            .prop_flat_map(|(m, k, n)| (matrix(m, k), matrix(k, n)))
    }

    proptest! {
        #[test]
        fn matches_naive_product((a, b) in operands(), base_case in 1usize..3) {
            let config = StrassenConfig { base_case, max_parallel_depth: 2 };
            let expected = a.mm(&b).unwrap();
            for parallel in [false, true] {
                let c = multiply_with(&a, &b, parallel, &config).unwrap();
                prop_assert_eq!(c.shape(), expected.shape());
                prop_assert!(c.approx_eq(&expected, 1e-9));
            }
        }

        #[test]
        fn distributes_over_addition(
            (a, b) in operands(),
            factor in 0i32..5,
        ) {
            let config = StrassenConfig { base_case: 1, max_parallel_depth: 1 };
            let c = b.scale(f64::from(factor));
            let lhs = multiply_with(&a, &(&b + &c), true, &config).unwrap();
            let rhs = &multiply_with(&a, &b, true, &config).unwrap()
                + &multiply_with(&a, &c, true, &config).unwrap();
            prop_assert!(lhs.approx_eq(&rhs, 1e-8));
        }
    }
}
