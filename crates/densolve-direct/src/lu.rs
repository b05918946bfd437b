//! LU factorization without pivoting (Doolittle).
//!
//! Decomposes a square matrix `A` into `A = LU` where:
//! - `L` is lower triangular with unit diagonal
//! - `U` is upper triangular
//!
//! No rows are exchanged, so a matrix whose leading principal minor vanishes
//! is rejected with [`LinalgError::SingularMatrix`] even when `A` itself is
//! invertible. [`crate::solve`] or [`crate::cofactor_determinant`] cover
//! those inputs.

use densolve_core::{LinalgError, Matrix, Norm, Result, EPSILON};

/// The two factors of `A = LU`.
#[derive(Clone, Debug, PartialEq)]
pub struct LuFactors {
    /// Unit lower-triangular factor.
    pub l: Matrix,
    /// Upper-triangular factor.
    pub u: Matrix,
}

impl LuFactors {
    /// Product of the diagonal of `U`.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.u.diagonal().iter().product()
    }

    /// Solves `A x = f` with the stored factors.
    ///
    /// # Errors
    ///
    /// See [`lu_solve`].
    pub fn solve(&self, f: &[f64]) -> Result<Vec<f64>> {
        lu_solve(&self.l, &self.u, f)
    }

    /// Recombines the factors into `L * U`.
    #[must_use]
    pub fn reconstruct(&self) -> Matrix {
        &self.l * &self.u
    }
}

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

/// Factorizes `A = LU` column by column.
///
/// For column `j`, rows `i <= j` fill `U[i][j] = A[i][j] - sum_{k<i} L[i][k] U[k][j]`
/// and rows `i > j` fill `L[i][j] = (A[i][j] - sum_{k<j} L[i][k] U[k][j]) / U[j][j]`.
///
/// # Errors
///
/// - [`LinalgError::EmptyInput`] or [`LinalgError::NotSquare`] for bad shapes
/// - [`LinalgError::SingularMatrix`] if a pivot `U[j][j]` that divides a
///   later column is exactly zero, or if any pivot is not finite
pub fn factorize_lu(a: &Matrix) -> Result<LuFactors> {
    check_square(a)?;
    let n = a.rows();
    let mut l = Matrix::identity(n);
    let mut u = Matrix::zeros(n, n);

    for j in 0..n {
        for i in 0..=j {
            let s: f64 = (0..i).map(|k| l[(i, k)] * u[(k, j)]).sum();
            u[(i, j)] = a[(i, j)] - s;
        }

        // The last pivot is never a divisor, so a zero there is a valid
        // factorization of a singular matrix.
        let pivot = u[(j, j)];
        if !pivot.is_finite() || (pivot == 0.0 && j + 1 < n) {
            log::debug!("factorize_lu: unusable pivot {pivot} in column {j}");
            return Err(LinalgError::SingularMatrix);
        }

        for i in j + 1..n {
            let s: f64 = (0..j).map(|k| l[(i, k)] * u[(k, j)]).sum();
            l[(i, j)] = (a[(i, j)] - s) / pivot;
        }
    }

    Ok(LuFactors { l, u })
}

/// Determinant of `A` from its LU factors.
///
/// # Errors
///
/// Same as [`factorize_lu`].
pub fn determinant(a: &Matrix) -> Result<f64> {
    Ok(factorize_lu(a)?.determinant())
}

/// Inverse of `A` from its LU factors.
///
/// The entries of `X = A^-1` follow from `U X = L^-1` and `X L = U^-1`,
/// filled from the bottom-right corner outward:
/// - `x_ij = (delta_ij - sum_{k>i} u_ik x_kj) / u_ii` for `i <= j`
/// - `x_ij = -sum_{k>j} x_ik l_kj` for `i > j`
///
/// # Errors
///
/// - [`LinalgError::EmptyInput`] or [`LinalgError::NotSquare`] for bad shapes
/// - [`LinalgError::SingularMatrix`] if the determinant is NaN or
///   `|det| <= EPSILON`
pub fn inverse(a: &Matrix) -> Result<Matrix> {
    let LuFactors { l, u } = factorize_lu(a)?;
    let det: f64 = u.diagonal().iter().product();
    if det.is_nan() || det.abs() <= EPSILON {
        log::debug!("inverse: determinant {det} treated as singular");
        return Err(LinalgError::SingularMatrix);
    }

    let n = a.rows();
    let mut x = Matrix::zeros(n, n);
    for p in (0..n).rev() {
        // Diagonal entry, then column p upward, then row p leftward.
        let s: f64 = (p + 1..n).map(|k| u[(p, k)] * x[(k, p)]).sum();
        x[(p, p)] = (1.0 - s) / u[(p, p)];

        for i in (0..p).rev() {
            let s: f64 = (i + 1..n).map(|k| u[(i, k)] * x[(k, p)]).sum();
            x[(i, p)] = -s / u[(i, i)];
        }

        for j in (0..p).rev() {
            let s: f64 = (j + 1..n).map(|k| x[(p, k)] * l[(k, j)]).sum();
            x[(p, j)] = -s;
        }
    }

    Ok(x)
}

/// Solves `L U x = f` by forward then back substitution.
///
/// # Errors
///
/// - [`LinalgError::EmptyInput`] or [`LinalgError::NotSquare`] for bad shapes
/// - [`LinalgError::DimensionMismatch`] if the factors or `f` disagree in size
/// - [`LinalgError::SingularMatrix`] if `U` has a zero on its diagonal
pub fn lu_solve(l: &Matrix, u: &Matrix, f: &[f64]) -> Result<Vec<f64>> {
    check_square(l)?;
    check_square(u)?;
    let n = l.rows();
    if u.rows() != n {
        return Err(LinalgError::DimensionMismatch {
            expected: n,
            found: u.rows(),
        });
    }
    if f.len() != n {
        return Err(LinalgError::DimensionMismatch {
            expected: n,
            found: f.len(),
        });
    }
    if u.diagonal().iter().any(|&d| d == 0.0) {
        return Err(LinalgError::SingularMatrix);
    }

    let mut y = vec![0.0; n];
    for i in 0..n {
        let s: f64 = (0..i).map(|j| l[(i, j)] * y[j]).sum();
        y[i] = f[i] - s;
    }

    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let s: f64 = (i + 1..n).map(|j| u[(i, j)] * x[j]).sum();
        x[i] = (y[i] - s) / u[(i, i)];
    }
    Ok(x)
}

/// Condition number `||A|| * ||A^-1||` in the given norm.
///
/// # Errors
///
/// Same as [`inverse`].
pub fn condition_number(a: &Matrix, norm: Norm) -> Result<f64> {
    let inv = inverse(a)?;
    Ok(a.norm(norm) * inv.norm(norm))
}
