//! Determinant and inverse by cofactor expansion.
//!
//! Exponential in the dimension; kept as an independent reference for the
//! LU-based routines on small matrices. The adjugate computes its cells on
//! the rayon pool, each task owning its sign and minor.

use rayon::prelude::*;

use densolve_core::{LinalgError, Matrix, Result};

fn check_square(a: &Matrix) -> Result<()> {
    if a.is_empty() {
        return Err(LinalgError::EmptyInput);
    }
    if !a.is_square() {
        return Err(LinalgError::NotSquare {
            rows: a.rows(),
            cols: a.cols(),
        });
    }
    Ok(())
}

/// Copy of `a` without row `row` and column `col`.
fn minor(a: &Matrix, row: usize, col: usize) -> Matrix {
    let n = a.rows();
    let mut res = Matrix::zeros(n - 1, n - 1);
    for (k, i) in (0..n).filter(|&i| i != row).enumerate() {
        for (l, j) in (0..n).filter(|&j| j != col).enumerate() {
            res[(k, l)] = a[(i, j)];
        }
    }
    res
}

fn sign(i: usize, j: usize) -> f64 {
    if (i + j) % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

/// Expansion along the first column. `a` is square and non-empty.
fn det_rec(a: &Matrix) -> f64 {
    match a.rows() {
        1 => a[(0, 0)],
        2 => a[(0, 0)] * a[(1, 1)] - a[(0, 1)] * a[(1, 0)],
        n => (0..n)
            .filter(|&i| a[(i, 0)] != 0.0)
            .map(|i| sign(i, 0) * a[(i, 0)] * det_rec(&minor(a, i, 0)))
            .sum(),
    }
}

/// Determinant by recursive cofactor expansion.
///
/// # Errors
///
/// Returns [`LinalgError::EmptyInput`] or [`LinalgError::NotSquare`] for bad
/// shapes.
pub fn cofactor_determinant(a: &Matrix) -> Result<f64> {
    check_square(a)?;
    Ok(det_rec(a))
}

/// Adjugate (transposed cofactor matrix), one rayon task per cell.
///
/// # Errors
///
/// Returns [`LinalgError::EmptyInput`] or [`LinalgError::NotSquare`] for bad
/// shapes.
pub fn adjugate(a: &Matrix) -> Result<Matrix> {
    check_square(a)?;
    let n = a.rows();
    if n == 1 {
        return Ok(Matrix::identity(1));
    }

    // Cell (j, i) of the adjugate is the signed cofactor of (i, j).
    let data: Vec<f64> = (0..n * n)
        .into_par_iter()
        .map(|idx| {
            let (j, i) = (idx / n, idx % n);
            sign(i, j) * det_rec(&minor(a, i, j))
        })
        .collect();

    Matrix::from_vec(n, n, data)
}

/// Inverse as `adj(A) / det(A)`.
///
/// # Errors
///
/// - [`LinalgError::EmptyInput`] or [`LinalgError::NotSquare`] for bad shapes
/// - [`LinalgError::SingularMatrix`] if the determinant is zero
pub fn cofactor_inverse(a: &Matrix) -> Result<Matrix> {
    let det = cofactor_determinant(a)?;
    if det == 0.0 {
        return Err(LinalgError::SingularMatrix);
    }
    Ok(adjugate(a)?.scale(1.0 / det))
}
