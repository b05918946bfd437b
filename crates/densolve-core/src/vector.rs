//! Vector helpers over plain `f64` slices.

use crate::error::{LinalgError, Result};
use crate::norm::Norm;

fn check_lengths(a: &[f64], b: &[f64]) -> Result<()> {
    if a.len() == b.len() {
        Ok(())
    } else {
        Err(LinalgError::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        })
    }
}

fn zip_with(a: &[f64], b: &[f64], op: impl Fn(f64, f64) -> f64) -> Result<Vec<f64>> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b).map(|(&x, &y)| op(x, y)).collect())
}

/// Scalar product of two vectors.
///
/// # Errors
///
/// Returns [`LinalgError::DimensionMismatch`] for unequal lengths and
/// [`LinalgError::EmptyInput`] for empty vectors.
pub fn dot(a: &[f64], b: &[f64]) -> Result<f64> {
    check_lengths(a, b)?;
    if a.is_empty() {
        return Err(LinalgError::EmptyInput);
    }
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

/// Elementwise sum.
///
/// # Errors
///
/// Returns [`LinalgError::DimensionMismatch`] for unequal lengths.
pub fn add(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    zip_with(a, b, |x, y| x + y)
}

/// Elementwise difference.
///
/// # Errors
///
/// Returns [`LinalgError::DimensionMismatch`] for unequal lengths.
pub fn sub(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    zip_with(a, b, |x, y| x - y)
}

/// Elementwise product.
///
/// # Errors
///
/// Returns [`LinalgError::DimensionMismatch`] for unequal lengths.
pub fn mul(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    zip_with(a, b, |x, y| x * y)
}

/// Elementwise quotient. Division by zero follows IEEE-754.
///
/// # Errors
///
/// Returns [`LinalgError::DimensionMismatch`] for unequal lengths.
pub fn div(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    zip_with(a, b, |x, y| x / y)
}

/// Multiplies every component by `c`.
#[must_use]
pub fn scale(a: &[f64], c: f64) -> Vec<f64> {
    a.iter().map(|x| x * c).collect()
}

/// Vector norm.
#[must_use]
pub fn norm(v: &[f64], norm: Norm) -> f64 {
    match norm {
        Norm::Euclidean => v.iter().map(|x| x * x).sum::<f64>().sqrt(),
        Norm::Infinity => v.iter().map(|x| x.abs()).fold(0.0, nan_max),
    }
}

/// Infinity norm of `a - b` without allocating.
///
/// Callers guarantee equal lengths. A NaN component makes the result NaN.
#[must_use]
pub fn max_abs_diff(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, nan_max)
}

// `f64::max` discards NaN operands; this keeps them.
fn nan_max(acc: f64, v: f64) -> f64 {
    if acc.is_nan() || v.is_nan() {
        f64::NAN
    } else {
        acc.max(v)
    }
}

/// Compares two vectors componentwise with absolute tolerance `eps`.
#[must_use]
pub fn approx_eq(a: &[f64], b: &[f64], eps: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < eps)
}

/// Returns a copy with components `i` and `j` exchanged.
///
/// # Errors
///
/// Returns [`LinalgError::IndexOutOfBounds`] if either index is invalid.
pub fn swapped(a: &[f64], i: usize, j: usize) -> Result<Vec<f64>> {
    let index = i.max(j);
    if index >= a.len() {
        return Err(LinalgError::IndexOutOfBounds {
            index,
            bound: a.len(),
        });
    }
    let mut res = a.to_vec();
    res.swap(i, j);
    Ok(res)
}
