//! Cholesky factorization `A = L L^T`.
//!
//! The accepted inputs are square, row-wise diagonally dominant matrices.
//! Dominance stands in for positive definiteness: a symmetric dominant
//! matrix with a positive diagonal is positive definite, but some positive
//! definite matrices are not dominant and are rejected here.

use densolve_core::{LinalgError, Matrix, Result};

/// Computes the lower-triangular `L` with `L L^T = A`.
///
/// Only the lower triangle of `A` is read.
///
/// # Errors
///
/// - [`LinalgError::EmptyInput`] or [`LinalgError::NotSquare`] for bad shapes
/// - [`LinalgError::NotDiagonallyDominant`] if `A` is not dominant
/// - [`LinalgError::SingularMatrix`] if a diagonal radicand is not positive
pub fn factorize_cholesky(a: &Matrix) -> Result<Matrix> {
    if a.is_empty() {
        return Err(LinalgError::EmptyInput);
    }
    if !a.is_square() {
        return Err(LinalgError::NotSquare {
            rows: a.rows(),
            cols: a.cols(),
        });
    }
    if !a.is_diagonally_dominant() {
        return Err(LinalgError::NotDiagonallyDominant);
    }

    let n = a.rows();
    let mut l = Matrix::zeros(n, n);

    for i in 0..n {
        let s: f64 = (0..i).map(|k| l[(i, k)] * l[(i, k)]).sum();
        let radicand = a[(i, i)] - s;
        if radicand <= 0.0 || radicand.is_nan() {
            log::debug!("factorize_cholesky: radicand {radicand} at row {i}");
            return Err(LinalgError::SingularMatrix);
        }
        let lii = radicand.sqrt();
        l[(i, i)] = lii;

        for j in i + 1..n {
            let s: f64 = (0..i).map(|k| l[(i, k)] * l[(j, k)]).sum();
            l[(j, i)] = (a[(j, i)] - s) / lii;
        }
    }

    Ok(l)
}

/// Solves `L L^T x = f` given the Cholesky factor `L`.
///
/// # Errors
///
/// - [`LinalgError::EmptyInput`] or [`LinalgError::NotSquare`] for bad shapes
/// - [`LinalgError::DimensionMismatch`] if `len(f) != rows(L)`
/// - [`LinalgError::SingularMatrix`] if `L` has a zero on its diagonal
pub fn cholesky_solve(l: &Matrix, f: &[f64]) -> Result<Vec<f64>> {
    if l.is_empty() {
        return Err(LinalgError::EmptyInput);
    }
    if !l.is_square() {
        return Err(LinalgError::NotSquare {
            rows: l.rows(),
            cols: l.cols(),
        });
    }
    let n = l.rows();
    if f.len() != n {
        return Err(LinalgError::DimensionMismatch {
            expected: n,
            found: f.len(),
        });
    }
    if l.diagonal().iter().any(|&d| d == 0.0) {
        return Err(LinalgError::SingularMatrix);
    }

    // L y = f
    let mut y = vec![0.0; n];
    for i in 0..n {
        let s: f64 = (0..i).map(|k| l[(i, k)] * y[k]).sum();
        y[i] = (f[i] - s) / l[(i, i)];
    }

    // L^T x = y
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let s: f64 = (i + 1..n).map(|k| l[(k, i)] * x[k]).sum();
        x[i] = (y[i] - s) / l[(i, i)];
    }
    Ok(x)
}
