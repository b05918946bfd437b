//! # densolve-direct
//!
//! Direct solvers and factorizations for dense `f64` systems.
//!
//! This crate provides:
//! - Gaussian elimination with a no-pivot kernel for diagonally dominant
//!   systems and a full-pivoting kernel for everything else
//! - LU factorization (Doolittle) with LU-based determinant, inverse,
//!   solve and condition number
//! - Cholesky factorization for diagonally dominant matrices
//! - Cofactor-expansion determinant, adjugate and inverse for small
//!   reference computations
//!
//! ## Algorithm Selection
//!
//! [`solve`] checks diagonal dominance first:
//! - Dominant: no pivoting, pivots are normalized to 1
//! - Otherwise: row and column pivoting with a tracked [`Permutation`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::many_single_char_names)]

pub mod cholesky;
pub mod cofactor;
pub mod elimination;
pub mod lu;

pub use cholesky::{cholesky_solve, factorize_cholesky};
pub use cofactor::{adjugate, cofactor_determinant, cofactor_inverse};
pub use elimination::{solve, solve_no_pivot, solve_pivoted, Permutation};
pub use lu::{condition_number, determinant, factorize_lu, inverse, lu_solve, LuFactors};

#[cfg(test)]
mod proptests;
