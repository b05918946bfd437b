//! Gaussian elimination for square systems `A x = f`.
//!
//! Two kernels are available:
//! - a no-pivot kernel that normalizes each pivot row to 1 and eliminates
//!   below it, used for diagonally dominant systems
//! - a full-pivoting kernel that, at every step, picks the largest entry of
//!   the remaining column (row swap) and then of the remaining row (column
//!   swap), recording column swaps in a [`Permutation`]
//!
//! Each kernel pairs with its own back-substitution. The pivoted pair
//! exchanges a [`PivotedReduction`], so a permutation can never be handed to
//! the wrong back-substitution.

use densolve_core::{LinalgError, Matrix, Result};

/// Mapping from solved-in-order position to original unknown index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Permutation(Vec<usize>);

impl Permutation {
    /// The identity permutation of length `n`.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// Exchanges positions `i` and `j`.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }

    /// Number of positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks if the permutation has no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Original unknown index solved at position `i`.
    #[must_use]
    pub fn get(&self, i: usize) -> usize {
        self.0[i]
    }

    /// The raw index sequence.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

/// Upper-triangular system produced by the no-pivot kernel, with unit
/// diagonal.
#[derive(Clone, Debug)]
pub struct Reduction {
    /// Reduced matrix.
    pub matrix: Matrix,
    /// Right-hand side after the same row operations.
    pub rhs: Vec<f64>,
}

/// Upper-triangular system produced by the full-pivoting kernel.
#[derive(Clone, Debug)]
pub struct PivotedReduction {
    /// Reduced matrix with permuted columns.
    pub matrix: Matrix,
    /// Right-hand side after the same row operations.
    pub rhs: Vec<f64>,
    /// Column order of `matrix` relative to the original unknowns.
    pub permutation: Permutation,
}

/// Solves `A x = f`, choosing the kernel by diagonal dominance.
///
/// Dominant matrices go through the no-pivot kernel; everything else goes
/// through full pivoting.
///
/// # Errors
///
/// - [`LinalgError::DimensionMismatch`] if `rows(A) != len(f)`
/// - [`LinalgError::EmptyInput`] if `A` or `f` is empty
/// - [`LinalgError::NotSquare`] if `A` is not square
/// - [`LinalgError::SingularSystem`] if a zero pivot is met
pub fn solve(a: &Matrix, f: &[f64]) -> Result<Vec<f64>> {
    check_system(a, f)?;
    if a.is_diagonally_dominant() {
        log::debug!("solve: {}x{} diagonally dominant, no pivoting", a.rows(), a.cols());
        let reduction = forward_eliminate(a, f)?;
        Ok(back_substitute(&reduction))
    } else {
        check_square(a)?;
        log::debug!("solve: {}x{} not dominant, full pivoting", a.rows(), a.cols());
        let reduction = forward_eliminate_pivoted(a, f)?;
        Ok(back_substitute_pivoted(&reduction))
    }
}

/// Solves `A x = f` with the no-pivot kernel regardless of dominance.
///
/// # Errors
///
/// Same as [`solve`]; a zero pivot yields [`LinalgError::SingularSystem`].
pub fn solve_no_pivot(a: &Matrix, f: &[f64]) -> Result<Vec<f64>> {
    check_system(a, f)?;
    check_square(a)?;
    let reduction = forward_eliminate(a, f)?;
    Ok(back_substitute(&reduction))
}

/// Solves `A x = f` with full pivoting regardless of dominance.
///
/// # Errors
///
/// Same as [`solve`].
pub fn solve_pivoted(a: &Matrix, f: &[f64]) -> Result<Vec<f64>> {
    check_system(a, f)?;
    check_square(a)?;
    let reduction = forward_eliminate_pivoted(a, f)?;
    Ok(back_substitute_pivoted(&reduction))
}

fn check_system(a: &Matrix, f: &[f64]) -> Result<()> {
    if a.rows() != f.len() {
        return Err(LinalgError::DimensionMismatch {
            expected: a.rows(),
            found: f.len(),
        });
    }
    if a.is_empty() || f.is_empty() {
        return Err(LinalgError::EmptyInput);
    }
    Ok(())
}

fn check_square(a: &Matrix) -> Result<()> {
    if a.is_square() {
        Ok(())
    } else {
        Err(LinalgError::NotSquare {
            rows: a.rows(),
            cols: a.cols(),
        })
    }
}

/// Magnitude at or below which a pivot counts as zero.
#[allow(clippy::cast_precision_loss)]
fn pivot_tolerance(a: &Matrix) -> f64 {
    f64::EPSILON * a.rows() as f64 * a.max_abs()
}

/// Forward elimination without pivoting on a copy of `a`.
///
/// Each pivot row is scaled so the pivot becomes 1, then its column is
/// cleared in all rows below.
///
/// # Errors
///
/// Returns [`LinalgError::SingularSystem`] on a zero pivot.
pub fn forward_eliminate(a: &Matrix, f: &[f64]) -> Result<Reduction> {
    let n = a.rows();
    let tol = pivot_tolerance(a);
    let mut m = a.clone();
    let mut rhs = f.to_vec();

    for i in 0..n {
        let lead = m[(i, i)];
        if lead.abs() <= tol {
            log::debug!("forward_eliminate: zero pivot at row {i}");
            return Err(LinalgError::SingularSystem);
        }

        m[(i, i)] = 1.0;
        for j in i + 1..n {
            m[(i, j)] /= lead;
        }
        rhs[i] /= lead;

        for j in i + 1..n {
            let el = m[(j, i)];
            if el == 0.0 {
                continue;
            }
            m[(j, i)] = 0.0;
            for k in i + 1..n {
                let v = m[(i, k)] * el;
                m[(j, k)] -= v;
            }
            rhs[j] -= rhs[i] * el;
        }
    }

    Ok(Reduction { matrix: m, rhs })
}

/// Back-substitution for a unit-diagonal upper-triangular [`Reduction`].
#[must_use]
pub fn back_substitute(reduction: &Reduction) -> Vec<f64> {
    let Reduction { matrix: u, rhs } = reduction;
    let n = rhs.len();
    let mut x = vec![0.0; n];

    for i in (0..n).rev() {
        let tail: f64 = (i + 1..n).map(|j| u[(i, j)] * x[j]).sum();
        x[i] = rhs[i] - tail;
    }
    x
}

/// Forward elimination with full pivoting on a copy of `a`.
///
/// # Errors
///
/// Returns [`LinalgError::SingularSystem`] if the remaining column or row is
/// entirely zero at some step.
pub fn forward_eliminate_pivoted(a: &Matrix, f: &[f64]) -> Result<PivotedReduction> {
    let n = a.rows();
    let tol = pivot_tolerance(a);
    let mut m = a.clone();
    let mut rhs = f.to_vec();
    let mut permutation = Permutation::identity(n);

    for i in 0..n {
        // Row pivot: largest entry in column i at or below the diagonal.
        let (k, lead) = (i..n)
            .map(|r| (r, m[(r, i)].abs()))
            .fold((i, -1.0), |best, cur| if cur.1 > best.1 { cur } else { best });
        if lead <= tol {
            log::debug!("forward_eliminate_pivoted: zero column at step {i}");
            return Err(LinalgError::SingularSystem);
        }
        if k != i {
            log::trace!("row swap {i} <-> {k}");
            m.swap_rows(i, k);
            rhs.swap(i, k);
        }
        eliminate_below(&mut m, &mut rhs, i);

        // Column pivot: largest entry in row i at or right of the diagonal.
        let (k, lead) = (i..n)
            .map(|c| (c, m[(i, c)].abs()))
            .fold((i, -1.0), |best, cur| if cur.1 > best.1 { cur } else { best });
        if lead <= tol {
            log::debug!("forward_eliminate_pivoted: zero row at step {i}");
            return Err(LinalgError::SingularSystem);
        }
        if k != i {
            log::trace!("column swap {i} <-> {k}");
            m.swap_cols(i, k);
            permutation.swap(i, k);
        }
        eliminate_below(&mut m, &mut rhs, i);
    }

    Ok(PivotedReduction {
        matrix: m,
        rhs,
        permutation,
    })
}

/// Clears column `i` below the diagonal using row `i`.
fn eliminate_below(m: &mut Matrix, rhs: &mut [f64], i: usize) {
    let n = m.rows();
    let lead = m[(i, i)];
    for j in i + 1..n {
        let c = -m[(j, i)] / lead;
        if c == 0.0 {
            continue;
        }
        for l in i..n {
            let v = m[(i, l)] * c;
            m[(j, l)] += v;
        }
        rhs[j] += rhs[i] * c;
    }
}

/// Back-substitution for a [`PivotedReduction`], undoing its column
/// permutation.
#[must_use]
pub fn back_substitute_pivoted(reduction: &PivotedReduction) -> Vec<f64> {
    let PivotedReduction {
        matrix: u,
        rhs,
        permutation: p,
    } = reduction;
    let n = rhs.len();
    let mut x = vec![0.0; n];

    for i in (0..n).rev() {
        let tail: f64 = (i + 1..n).map(|j| u[(i, j)] * x[p.get(j)]).sum();
        x[p.get(i)] = (rhs[i] - tail) / u[(i, i)];
    }
    x
}
