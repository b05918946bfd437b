//! Property-based tests for the matrix primitive.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Matrix, Norm};

    // Strategy for small integer-valued matrices of a given shape
    fn matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
        proptest::collection::vec(-50i32..50, rows * cols).prop_map(move |data| {
            Matrix::from_vec(rows, cols, data.into_iter().map(f64::from).collect())
                .expect("length matches shape")
        })
    }

    fn shaped() -> impl Strategy<Value = Matrix> {
        (1usize..6, 1usize..6).prop_flat_map(|(r, c)| matrix(r, c))
    }

    proptest! {
        #[test]
        fn transpose_is_involution(a in shaped()) {
            prop_assert_eq!(a.transpose().transpose(), a);
        }

        #[test]
        fn identity_is_neutral(a in shaped()) {
            let left = Matrix::identity(a.rows()).mm(&a).unwrap();
            let right = a.mm(&Matrix::identity(a.cols())).unwrap();
            prop_assert_eq!(&left, &a);
            prop_assert_eq!(&right, &a);
        }

        #[test]
        fn product_transpose_reverses(
            (a, b) in (1usize..5, 1usize..5, 1usize..5)
                .prop_flat_map(|(n, k, m)| (matrix(n, k), matrix(k, m)))
        ) {
            let lhs = a.mm(&b).unwrap().transpose();
            let rhs = b.transpose().mm(&a.transpose()).unwrap();
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn add_then_sub_restores(
            (a, b) in (1usize..5, 1usize..5).prop_flat_map(|(r, c)| (matrix(r, c), matrix(r, c)))
        ) {
            let back = &(&a + &b) - &b;
            prop_assert!(back.approx_eq(&a, 1e-12));
        }

        #[test]
        fn swapping_rows_keeps_norms(a in shaped(), i in 0usize..6, j in 0usize..6) {
            let (i, j) = (i % a.rows(), j % a.rows());
            let s = a.swapped_rows(i, j).unwrap();
            prop_assert_eq!(s.norm(Norm::Infinity), a.norm(Norm::Infinity));
            prop_assert_eq!(s.swapped_rows(i, j).unwrap(), a);
        }
    }
}
