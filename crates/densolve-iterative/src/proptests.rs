//! Property-based tests for the iterative solvers.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{IterativeConfig, IterativeSolver, Method};
    use densolve_core::{vector, Matrix};

    // Diagonal at twice the off-diagonal row sum plus one
    fn system() -> impl Strategy<Value = (Matrix, Vec<f64>)> {
        (1usize..8).prop_flat_map(|n| {
            (
                proptest::collection::vec(-10i32..10, n * n),
                proptest::collection::vec(-100i32..100, n),
            )
                .prop_map(move |(data, f)| {
                    let mut a = Matrix::from_vec(n, n, data.into_iter().map(f64::from).collect())
                        .expect("length matches shape");
                    for i in 0..n {
                        let off: f64 = (0..n).filter(|&j| j != i).map(|j| a[(i, j)].abs()).sum();
                        a[(i, i)] = 2.0 * off + 1.0;
                    }
                    (a, f.into_iter().map(f64::from).collect())
                })
        })
    }

    fn config() -> IterativeConfig {
        IterativeConfig {
            tolerance: 1e-10,
            max_iterations: Some(10_000),
            ..IterativeConfig::default()
        }
    }

    proptest! {
        #[test]
        fn jacobi_reconstructs_rhs((a, f) in system()) {
            let c = IterativeSolver::new(Method::Jacobi, config()).solve(&a, &f).unwrap();
            let check = a.mv(&c.solution).unwrap();
            prop_assert!(vector::approx_eq(&check, &f, 1e-6));
        }

        #[test]
        fn richardson_reconstructs_rhs((a, f) in system()) {
            let c = IterativeSolver::new(Method::Richardson, config()).solve(&a, &f).unwrap();
            let check = a.mv(&c.solution).unwrap();
            prop_assert!(vector::approx_eq(&check, &f, 1e-6));
        }

        #[test]
        fn methods_agree((a, f) in system()) {
            let j = IterativeSolver::new(Method::Jacobi, config()).solve(&a, &f).unwrap();
            let s = IterativeSolver::new(Method::GaussSeidel, config()).solve(&a, &f).unwrap();
            prop_assert!(vector::approx_eq(&j.solution, &s.solution, 1e-6));
        }
    }
}
