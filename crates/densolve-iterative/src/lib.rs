//! # densolve-iterative
//!
//! Jacobi, Gauss-Seidel and Richardson solvers for diagonally dominant dense
//! systems.
//!
//! Dominance guarantees convergence of both methods; it is checked before
//! the first sweep.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod solver;

pub use solver::{
    fixed_point_solve, jacobi_solve, seidel_solve, Convergence, IterativeConfig, IterativeSolver,
    Method,
};

#[cfg(test)]
mod proptests;
