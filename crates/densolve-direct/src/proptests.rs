//! Property-based tests for the direct solvers.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        cofactor_determinant, cofactor_inverse, factorize_cholesky, factorize_lu, inverse, solve,
        solve_pivoted, LuFactors,
    };
    use densolve_core::{vector, Matrix};

    // Strictly dominant matrices with a positive diagonal
    fn dominant(n: usize) -> impl Strategy<Value = Matrix> {
        proptest::collection::vec(-10i32..10, n * n).prop_map(move |data| {
            let mut a = Matrix::from_vec(n, n, data.into_iter().map(f64::from).collect())
                .expect("length matches shape");
            for i in 0..n {
                let off: f64 = (0..n).filter(|&j| j != i).map(|j| a[(i, j)].abs()).sum();
                a[(i, i)] = off + 1.0;
            }
            a
        })
    }

    fn symmetric_dominant(n: usize) -> impl Strategy<Value = Matrix> {
        dominant(n).prop_map(|a| {
            let mut s = a.clone();
            for i in 0..a.rows() {
                for j in 0..i {
                    s[(j, i)] = a[(i, j)];
                }
            }
            for i in 0..s.rows() {
                let off: f64 = (0..s.cols()).filter(|&j| j != i).map(|j| s[(i, j)].abs()).sum();
                s[(i, i)] = off + 1.0;
            }
            s
        })
    }

    // Arbitrary square matrices, singular ones included
    fn general(n: usize) -> impl Strategy<Value = Matrix> {
        proptest::collection::vec(-10i32..10, n * n).prop_map(move |data| {
            Matrix::from_vec(n, n, data.into_iter().map(f64::from).collect())
                .expect("length matches shape")
        })
    }

    // Element growth of the factorization relative to `A`, at least 1
    fn growth(a: &Matrix, lu: &LuFactors) -> f64 {
        (lu.l.max_abs() * lu.u.max_abs() / a.max_abs().max(1.0)).max(1.0)
    }

    // Product of the row norms, which bounds |det(A)|
    fn hadamard_bound(a: &Matrix) -> f64 {
        (0..a.rows())
            .map(|i| a.row(i).iter().map(|v| v * v).sum::<f64>().sqrt())
            .product()
    }

    fn system() -> impl Strategy<Value = (Matrix, Vec<f64>)> {
        (1usize..8).prop_flat_map(|n| {
            (
                dominant(n),
                proptest::collection::vec(-100i32..100, n)
                    .prop_map(|v| v.into_iter().map(f64::from).collect()),
            )
        })
    }

    proptest! {
        #[test]
        fn solve_reconstructs_rhs((a, f) in system()) {
            let x = solve(&a, &f).unwrap();
            let check = a.mv(&x).unwrap();
            prop_assert!(vector::approx_eq(&check, &f, 1e-6));
        }

        #[test]
        fn kernels_agree((a, f) in system()) {
            let fast = solve(&a, &f).unwrap();
            let pivoted = solve_pivoted(&a, &f).unwrap();
            prop_assert!(vector::approx_eq(&fast, &pivoted, 1e-6));
        }

        #[test]
        fn lu_reconstructs(a in (1usize..8).prop_flat_map(dominant)) {
            let lu = factorize_lu(&a).unwrap();
            prop_assert!(lu.reconstruct().approx_eq(&a, 1e-9));
        }

        #[test]
        fn lu_determinant_matches_cofactor(a in (1usize..=6).prop_flat_map(dominant)) {
            let lu_det = factorize_lu(&a).unwrap().determinant();
            let det = cofactor_determinant(&a).unwrap();
            prop_assert!((lu_det - det).abs() <= 1e-6 * det.abs().max(1.0));
        }

        #[test]
        fn lu_reconstructs_general(a in (1usize..8).prop_flat_map(general)) {
            let lu = factorize_lu(&a);
            prop_assume!(lu.is_ok());
            let lu = lu.unwrap();
            #[allow(clippy::cast_precision_loss)]
            let tol = 1e-12 * a.rows() as f64 * growth(&a, &lu) * a.max_abs().max(1.0);
            prop_assert!(lu.reconstruct().approx_eq(&a, tol));
        }

        #[test]
        fn lu_determinant_matches_cofactor_general(a in (1usize..=6).prop_flat_map(general)) {
            let lu = factorize_lu(&a);
            prop_assume!(lu.is_ok());
            let lu = lu.unwrap();
            let det = cofactor_determinant(&a).unwrap();
            #[allow(clippy::cast_precision_loss)]
            let tol = 1e-8 * a.rows() as f64 * growth(&a, &lu) * hadamard_bound(&a) + 1e-9;
            prop_assert!((lu.determinant() - det).abs() <= tol);
        }

        #[test]
        fn lu_inverse_matches_cofactor_general(a in (1usize..=6).prop_flat_map(general)) {
            let (lu, inv, reference) = (factorize_lu(&a), inverse(&a), cofactor_inverse(&a));
            prop_assume!(lu.is_ok() && inv.is_ok() && reference.is_ok());
            let (lu, inv, reference) = (lu.unwrap(), inv.unwrap(), reference.unwrap());

            #[allow(clippy::cast_precision_loss)]
            let n = a.rows() as f64;
            let residual = 1e-6 * n * n * growth(&a, &lu) * a.max_abs() * reference.max_abs();
            prop_assert!((&a * &inv).approx_eq(&Matrix::identity(a.rows()), residual.max(1e-9)));
            let forward = residual * n * reference.max_abs();
            prop_assert!(inv.approx_eq(&reference, forward.max(1e-9)));
        }

        #[test]
        fn cholesky_reconstructs(a in (1usize..8).prop_flat_map(symmetric_dominant)) {
            let l = factorize_cholesky(&a).unwrap();
            prop_assert!((&l * &l.transpose()).approx_eq(&a, 1e-9));
        }
    }
}
