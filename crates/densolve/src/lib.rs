//! # densolve
//!
//! Dense linear systems, factorizations and fast multiplication over `f64`.
//!
//! ## Features
//!
//! - **Gaussian elimination**: no-pivot kernel for diagonally dominant
//!   systems, full pivoting with a tracked permutation otherwise
//! - **Factorizations**: LU (Doolittle) and Cholesky
//! - **Inverse and determinant**: LU-based, plus cofactor expansion with a
//!   parallel adjugate
//! - **Iterative solvers**: Jacobi, Gauss-Seidel and Richardson fixed-point
//! - **Strassen multiplication**: sequential or on the rayon pool
//!
//! ## Quick Start
//!
//! ```rust
//! use densolve::prelude::*;
//!
//! let a = Matrix::from_rows(vec![
//!     vec![4.0, 1.0],
//!     vec![2.0, 5.0],
//! ])?;
//! let x = solve(&a, &[6.0, 12.0])?;
//! assert!((x[0] - 1.0).abs() < EPSILON && (x[1] - 2.0).abs() < EPSILON);
//!
//! let inv = inverse(&a)?;
//! let id = multiply(&a, &inv, true)?;
//! assert!(id.approx_eq(&Matrix::identity(2), 1e-12));
//! # Ok::<(), LinalgError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use densolve_core as core;
pub use densolve_direct as direct;
pub use densolve_iterative as iterative;
pub use densolve_strassen as strassen;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use densolve_core::{vector, LinalgError, Matrix, Norm, Result, EPSILON};
    pub use densolve_direct::{
        adjugate, cholesky_solve, cofactor_determinant, cofactor_inverse, condition_number,
        determinant, factorize_cholesky, factorize_lu, inverse, lu_solve, solve,
        solve_no_pivot, solve_pivoted, LuFactors, Permutation,
    };
    pub use densolve_iterative::{
        fixed_point_solve, jacobi_solve, seidel_solve, Convergence, IterativeConfig,
        IterativeSolver, Method,
    };
    pub use densolve_strassen::{multiply, multiply_with, StrassenConfig};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_prelude_round_trip() {
        let a = Matrix::from_rows(vec![
            vec![10.0, 2.0, 1.0],
            vec![1.0, 8.0, 2.0],
            vec![2.0, 1.0, 9.0],
        ])
        .unwrap();
        let f = [13.0, 11.0, 12.0];

        let direct = solve(&a, &f).unwrap();
        let iterative = seidel_solve(&a, &f).unwrap();
        let lu = factorize_lu(&a).unwrap().solve(&f).unwrap();
        for i in 0..3 {
            assert_abs_diff_eq!(direct[i], 1.0, epsilon = 1e-9);
            assert_abs_diff_eq!(lu[i], 1.0, epsilon = 1e-9);
            assert_abs_diff_eq!(iterative[i], 1.0, epsilon = 1e-5);
        }

        let product = multiply(&a, &inverse(&a).unwrap(), false).unwrap();
        assert!(product.approx_eq(&Matrix::identity(3), 1e-12));
        assert_abs_diff_eq!(
            determinant(&a).unwrap(),
            cofactor_determinant(&a).unwrap(),
            epsilon = 1e-9
        );
    }
}
