//! # densolve-strassen
//!
//! Strassen matrix multiplication for dense `f64` matrices of any shape.
//!
//! [`multiply`] runs sequentially or on the rayon pool. In parallel mode the
//! seven sub-products of the top [`StrassenConfig::max_parallel_depth`]
//! recursion levels are computed concurrently; every task reads only its own
//! operand pair, so the result does not depend on scheduling.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod strassen;

pub use strassen::{multiply, multiply_with, StrassenConfig};

#[cfg(test)]
mod proptests;
