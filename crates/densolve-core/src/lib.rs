//! # densolve-core
//!
//! Dense matrix and vector primitives for densolve.
//!
//! This crate provides:
//! - [`Matrix`], a row-major `f64` matrix that owns its storage
//! - Slice-based vector helpers in [`vector`]
//! - The shared [`LinalgError`] taxonomy and [`Result`] alias
//!
//! Solvers and factorizations live in the sibling crates and only use the
//! operations exposed here.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod matrix;
pub mod norm;
pub mod vector;

pub use error::{LinalgError, Result};
pub use matrix::Matrix;
pub use norm::Norm;

/// Default tolerance for iterative convergence and singularity checks.
pub const EPSILON: f64 = 1e-6;

#[cfg(test)]
mod proptests;
