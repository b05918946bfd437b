//! Strassen's divide-and-conquer matrix multiplication.
//!
//! Operands that are not square with a power-of-two dimension are
//! zero-padded to the smallest power of two covering every dimension, and
//! the product is cropped back to `rows(A) x cols(B)`. Recursion splits each
//! operand into quadrants and combines seven sub-products:
//!
//! ```text
//! P1 = (A11 + A22)(B11 + B22)    C11 = P1 + P4 - P5 + P7
//! P2 = (A21 + A22) B11           C12 = P3 + P5
//! P3 = A11 (B12 - B22)           C21 = P2 + P4
//! P4 = A22 (B21 - B11)           C22 = P1 - P2 + P3 + P6
//! P5 = (A11 + A12) B22
//! P6 = (A21 - A11)(B11 + B12)
//! P7 = (A12 - A22)(B21 + B22)
//! ```
//!
//! Below the base case the naive product takes over.

use rayon::prelude::*;

use densolve_core::{LinalgError, Matrix, Result};

/// Configuration for Strassen multiplication.
#[derive(Clone, Debug)]
pub struct StrassenConfig {
    /// Dimension at or below which the naive product is used.
    pub base_case: usize,
    /// Recursion levels that run their seven products on the rayon pool
    /// when parallel mode is requested. Deeper levels recurse sequentially.
    pub max_parallel_depth: usize,
}

impl Default for StrassenConfig {
    fn default() -> Self {
        Self {
            base_case: 64,
            max_parallel_depth: 3,
        }
    }
}

/// Multiplies `A * B` with the default configuration.
///
/// # Errors
///
/// Returns [`LinalgError::DimensionMismatch`] if `cols(A) != rows(B)`.
pub fn multiply(a: &Matrix, b: &Matrix, parallel: bool) -> Result<Matrix> {
    multiply_with(a, b, parallel, &StrassenConfig::default())
}

/// Multiplies `A * B` with an explicit configuration.
///
/// # Errors
///
/// Returns [`LinalgError::DimensionMismatch`] if `cols(A) != rows(B)`.
pub fn multiply_with(
    a: &Matrix,
    b: &Matrix,
    parallel: bool,
    config: &StrassenConfig,
) -> Result<Matrix> {
    if a.cols() != b.rows() {
        return Err(LinalgError::DimensionMismatch {
            expected: a.cols(),
            found: b.rows(),
        });
    }
    let (rows, cols) = (a.rows(), b.cols());
    if rows == 0 || cols == 0 || a.cols() == 0 {
        return Ok(Matrix::zeros(rows, cols));
    }

    let recursion = Recursion {
        base_case: config.base_case.max(1),
        parallel_depth: if parallel { config.max_parallel_depth } else { 0 },
    };

    let needs_padding = !a.is_square() || !b.is_square() || !a.rows().is_power_of_two();
    if !needs_padding {
        return Ok(recursion.multiply(a, b, 0));
    }

    let n = rows.max(a.cols()).max(b.rows()).max(cols).next_power_of_two();
    log::debug!("strassen: padding {rows}x{} * {}x{cols} to {n}x{n}", a.cols(), b.rows());
    let product = recursion.multiply(&pad(a, n), &pad(b, n), 0);
    product.submatrix(0, rows, 0, cols)
}

/// Copies `a` into the top-left corner of an `n x n` zero matrix.
fn pad(a: &Matrix, n: usize) -> Matrix {
    let mut res = Matrix::zeros(n, n);
    for i in 0..a.rows() {
        res.row_mut(i)[..a.cols()].copy_from_slice(a.row(i));
    }
    res
}

/// Copies the four `m x m` quadrants of a `2m x 2m` matrix.
fn quadrants(a: &Matrix) -> [Matrix; 4] {
    let m = a.rows() / 2;
    let mut q11 = Matrix::zeros(m, m);
    let mut q12 = Matrix::zeros(m, m);
    let mut q21 = Matrix::zeros(m, m);
    let mut q22 = Matrix::zeros(m, m);
    for i in 0..m {
        let (top, bottom) = (a.row(i), a.row(m + i));
        q11.row_mut(i).copy_from_slice(&top[..m]);
        q12.row_mut(i).copy_from_slice(&top[m..]);
        q21.row_mut(i).copy_from_slice(&bottom[..m]);
        q22.row_mut(i).copy_from_slice(&bottom[m..]);
    }
    [q11, q12, q21, q22]
}

/// Places four `m x m` blocks into a new `2m x 2m` matrix.
fn assemble(c11: &Matrix, c12: &Matrix, c21: &Matrix, c22: &Matrix) -> Matrix {
    let m = c11.rows();
    let mut c = Matrix::zeros(2 * m, 2 * m);
    for i in 0..m {
        let top = c.row_mut(i);
        top[..m].copy_from_slice(c11.row(i));
        top[m..].copy_from_slice(c12.row(i));
        let bottom = c.row_mut(m + i);
        bottom[..m].copy_from_slice(c21.row(i));
        bottom[m..].copy_from_slice(c22.row(i));
    }
    c
}

struct Recursion {
    base_case: usize,
    parallel_depth: usize,
}

impl Recursion {
    /// `a` and `b` are square with the same power-of-two dimension.
    fn multiply(&self, a: &Matrix, b: &Matrix, depth: usize) -> Matrix {
        let n = a.rows();
        if n <= self.base_case {
            return a * b;
        }

        let [a11, a12, a21, a22] = quadrants(a);
        let [b11, b12, b21, b22] = quadrants(b);

        let operands = vec![
            (&a11 + &a22, &b11 + &b22),
            (&a21 + &a22, b11.clone()),
            (a11.clone(), &b12 - &b22),
            (a22.clone(), &b21 - &b11),
            (&a11 + &a12, b22.clone()),
            (&a21 - &a11, &b11 + &b12),
            (&a12 - &a22, &b21 + &b22),
        ];

        let p: Vec<Matrix> = if depth < self.parallel_depth {
            log::trace!("strassen: forking seven products at depth {depth}, n = {n}");
            operands
                .into_par_iter()
                .map(|(x, y)| self.multiply(&x, &y, depth + 1))
                .collect()
        } else {
            operands
                .into_iter()
                .map(|(x, y)| self.multiply(&x, &y, depth + 1))
                .collect()
        };

        let c11 = &(&(&p[0] + &p[3]) - &p[4]) + &p[6];
        let c12 = &p[2] + &p[4];
        let c21 = &p[1] + &p[3];
        let c22 = &(&(&p[0] - &p[1]) + &p[2]) + &p[5];
        assemble(&c11, &c12, &c21, &c22)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    fn small_config() -> StrassenConfig {
        StrassenConfig {
            base_case: 1,
            max_parallel_depth: 2,
        }
    }

    #[test]
    fn test_2x2_single_level() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = m(vec![vec![5.0, 6.0], vec![7.0, 8.0]]);
        let expected = m(vec![vec![19.0, 22.0], vec![43.0, 50.0]]);
        for parallel in [false, true] {
            let c = multiply_with(&a, &b, parallel, &small_config()).unwrap();
            assert_eq!(c, expected);
        }
    }

    #[test]
    fn test_rectangular_is_cropped() {
        let a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let b = m(vec![vec![7.0], vec![8.0], vec![9.0]]);
        for parallel in [false, true] {
            let c = multiply_with(&a, &b, parallel, &small_config()).unwrap();
            assert_eq!(c.shape(), (2, 1));
            assert_eq!(c, m(vec![vec![50.0], vec![122.0]]));
        }
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = Matrix::zeros(2, 3);
        assert_eq!(
            multiply(&a, &a, false),
            Err(LinalgError::DimensionMismatch {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_empty() {
        let e = Matrix::empty();
        assert_eq!(multiply(&e, &e, true).unwrap(), Matrix::empty());
    }

    #[test]
    fn test_pad_and_quadrants() {
        let a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let p = pad(&a, 4);
        assert_eq!(p.shape(), (4, 4));
        assert_eq!(p.row(0), &[1.0, 2.0, 3.0, 0.0]);
        assert_eq!(p.row(3), &[0.0; 4]);

        let [q11, q12, q21, q22] = quadrants(&p);
        assert_eq!(q11, m(vec![vec![1.0, 2.0], vec![4.0, 5.0]]));
        assert_eq!(q12, m(vec![vec![3.0, 0.0], vec![6.0, 0.0]]));
        assert_eq!(q21, Matrix::zeros(2, 2));
        assert_eq!(assemble(&q11, &q12, &q21, &q22), p);
    }

    #[test]
    fn test_inputs_untouched() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);
        let b = m(vec![vec![1.0, 0.0, 2.0], vec![0.0, 1.0, 3.0]]);
        let (a0, b0) = (a.clone(), b.clone());
        let c = multiply_with(&a, &b, true, &small_config()).unwrap();
        assert_eq!(c, a.mm(&b).unwrap());
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }
}
