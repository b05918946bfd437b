//! Dense row-major matrix of `f64`.
//!
//! Every constructor copies or takes ownership of its input, so no two
//! matrices ever share a backing store. Operations that rearrange a matrix
//! are offered both as in-place methods (for owned working copies) and as
//! `swapped_*` methods that leave the receiver untouched.

use std::ops::{Add, Index, IndexMut, Mul, Sub};

use crate::error::{LinalgError, Result};
use crate::norm::Norm;
use crate::vector;

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Matrix {
    /// Matrix entries in row-major order.
    data: Vec<f64>,
    /// Number of rows.
    rows: usize,
    /// Number of columns.
    cols: usize,
}

impl Matrix {
    /// Creates the distinguished `0x0` matrix.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }

    /// Creates a matrix from a list of rows.
    ///
    /// An empty list yields the `0x0` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::RaggedRows`] if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Ok(Self::empty());
        };
        let num_cols = first.len();
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != num_cols) {
            return Err(LinalgError::RaggedRows {
                row,
                expected: num_cols,
                found: r.len(),
            });
        }
        let num_rows = rows.len();
        let data: Vec<f64> = rows.into_iter().flatten().collect();
        Ok(Self {
            data,
            rows: num_rows,
            cols: num_cols,
        })
    }

    /// Creates a matrix from row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(LinalgError::DimensionMismatch {
                expected: rows * cols,
                found: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Checks if the matrix holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the row-major entries.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns the entry at (row, col), if in range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Returns a mutable slice of the specified row.
    pub fn row_mut(&mut self, row: usize) -> &mut [f64] {
        let start = row * self.cols;
        &mut self.data[start..start + self.cols]
    }

    /// Returns a column as a vector.
    #[must_use]
    pub fn col(&self, col: usize) -> Vec<f64> {
        (0..self.rows).map(|row| self[(row, col)]).collect()
    }

    /// Returns the diagonal entries.
    #[must_use]
    pub fn diagonal(&self) -> Vec<f64> {
        (0..self.rows.min(self.cols)).map(|i| self[(i, i)]).collect()
    }

    /// Largest absolute value among the entries (0 for an empty matrix).
    #[must_use]
    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0, |acc, v| acc.max(v.abs()))
    }

    /// Checks row-wise diagonal dominance: `|a_ii| >= sum_{j != i} |a_ij|`.
    ///
    /// Non-square matrices are never dominant.
    #[must_use]
    pub fn is_diagonally_dominant(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        (0..self.rows).all(|i| {
            let row = self.row(i);
            let off: f64 = row
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, v)| v.abs())
                .sum();
            row[i].abs() >= off
        })
    }

    /// Matrix-vector multiply: y = A * x.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::EmptyInput`] for an empty matrix and
    /// [`LinalgError::DimensionMismatch`] if `x.len() != cols`.
    pub fn mv(&self, x: &[f64]) -> Result<Vec<f64>> {
        if self.is_empty() {
            return Err(LinalgError::EmptyInput);
        }
        if x.len() != self.cols {
            return Err(LinalgError::DimensionMismatch {
                expected: self.cols,
                found: x.len(),
            });
        }
        Ok((0..self.rows)
            .map(|row| self.row(row).iter().zip(x).map(|(a, b)| a * b).sum())
            .collect())
    }

    /// Naive triple-loop matrix product: C = A * B.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if `self.cols != other.rows`.
    pub fn mm(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(LinalgError::DimensionMismatch {
                expected: self.cols,
                found: other.rows,
            });
        }
        Ok(self.mm_unchecked(other))
    }

    fn mm_unchecked(&self, other: &Self) -> Self {
        let mut result = Self::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let aik = self[(i, k)];
                if aik == 0.0 {
                    continue;
                }
                let out = &mut result.data[i * other.cols..(i + 1) * other.cols];
                for (c, b) in out.iter_mut().zip(other.row(k)) {
                    *c += aik * b;
                }
            }
        }
        result
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut result = Self::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                result[(j, i)] = self[(i, j)];
            }
        }
        result
    }

    /// Scales all entries by a scalar.
    #[must_use]
    pub fn scale(&self, scalar: f64) -> Self {
        Self {
            data: self.data.iter().map(|v| v * scalar).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Elementwise sum.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if the shapes differ.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Elementwise difference.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if the shapes differ.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Elementwise (Hadamard) product.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if the shapes differ.
    pub fn hadamard(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a * b)
    }

    fn zip_with(&self, other: &Self, op: impl Fn(f64, f64) -> f64) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(shape_mismatch(self, other));
        }
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| op(a, b))
                .collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Matrix norm: Frobenius for [`Norm::Euclidean`], maximum absolute row
    /// sum for [`Norm::Infinity`].
    #[must_use]
    pub fn norm(&self, norm: Norm) -> f64 {
        match norm {
            Norm::Euclidean => vector::norm(&self.data, Norm::Euclidean),
            Norm::Infinity => (0..self.rows)
                .map(|i| self.row(i).iter().map(|v| v.abs()).sum::<f64>())
                .fold(0.0, f64::max),
        }
    }

    /// Compares two matrices entrywise with absolute tolerance `eps`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        self.shape() == other.shape() && vector::approx_eq(&self.data, &other.data, eps)
    }

    /// Swaps two rows in-place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.cols;
        let j_start = j * self.cols;
        for k in 0..self.cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }

    /// Swaps two columns in-place.
    pub fn swap_cols(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        for row in 0..self.rows {
            self.data.swap(row * self.cols + i, row * self.cols + j);
        }
    }

    /// Returns a copy with rows `i` and `j` exchanged.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfBounds`] if either index is invalid.
    pub fn swapped_rows(&self, i: usize, j: usize) -> Result<Self> {
        check_index(i.max(j), self.rows)?;
        let mut copy = self.clone();
        copy.swap_rows(i, j);
        Ok(copy)
    }

    /// Returns a copy with columns `i` and `j` exchanged.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfBounds`] if either index is invalid.
    pub fn swapped_cols(&self, i: usize, j: usize) -> Result<Self> {
        check_index(i.max(j), self.cols)?;
        let mut copy = self.clone();
        copy.swap_cols(i, j);
        Ok(copy)
    }

    /// Copies the block of rows `row_start..row_end` and columns
    /// `col_start..col_end` into a new matrix.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfBounds`] if a range end exceeds the
    /// matrix, or a start exceeds its end.
    pub fn submatrix(
        &self,
        row_start: usize,
        row_end: usize,
        col_start: usize,
        col_end: usize,
    ) -> Result<Self> {
        if row_end > self.rows {
            return Err(LinalgError::IndexOutOfBounds {
                index: row_end,
                bound: self.rows + 1,
            });
        }
        if col_end > self.cols {
            return Err(LinalgError::IndexOutOfBounds {
                index: col_end,
                bound: self.cols + 1,
            });
        }
        check_index(row_start, row_end + 1)?;
        check_index(col_start, col_end + 1)?;

        let cols = col_end - col_start;
        let mut data = Vec::with_capacity((row_end - row_start) * cols);
        for row in row_start..row_end {
            data.extend_from_slice(&self.row(row)[col_start..col_end]);
        }
        Ok(Self {
            data,
            rows: row_end - row_start,
            cols,
        })
    }
}

fn check_index(index: usize, bound: usize) -> Result<()> {
    if index < bound {
        Ok(())
    } else {
        Err(LinalgError::IndexOutOfBounds { index, bound })
    }
}

fn shape_mismatch(a: &Matrix, b: &Matrix) -> LinalgError {
    if a.rows == b.rows {
        LinalgError::DimensionMismatch {
            expected: a.cols,
            found: b.cols,
        }
    } else {
        LinalgError::DimensionMismatch {
            expected: a.rows,
            found: b.rows,
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.cols + col]
    }
}

impl Add for &Matrix {
    type Output = Matrix;

    fn add(self, other: Self) -> Matrix {
        assert_eq!(self.shape(), other.shape());
        Matrix {
            data: self.data.iter().zip(&other.data).map(|(a, b)| a + b).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl Sub for &Matrix {
    type Output = Matrix;

    fn sub(self, other: Self) -> Matrix {
        assert_eq!(self.shape(), other.shape());
        Matrix {
            data: self.data.iter().zip(&other.data).map(|(a, b)| a - b).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, other: Self) -> Matrix {
        assert_eq!(self.cols, other.rows);
        self.mm_unchecked(other)
    }
}
