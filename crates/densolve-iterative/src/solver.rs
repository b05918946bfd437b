//! Stationary fixed-point iteration for diagonally dominant systems.
//!
//! Jacobi and Gauss-Seidel apply `x_i = (f_i - sum_{j != i} a_ij x_j) / a_ii`:
//! - Jacobi reads every `x_j` from the previous iterate
//! - Gauss-Seidel reads already-updated components of the current iterate
//!   for `j < i`
//!
//! Richardson iteration is the plain fixed-point scheme
//! `x <- x + tau (f - A x)`, with `tau = 1 / ||A||_inf` unless configured.
//! It converges for dominant matrices with a positive diagonal.
//!
//! Iteration stops once `||x_{k+1} - x_k||_inf <= tolerance`. Diagonal
//! dominance and a non-zero diagonal are required up front; there is no
//! iteration cap unless one is configured. A non-finite iterate is reported
//! as [`LinalgError::Diverged`].

use densolve_core::{vector, LinalgError, Matrix, Norm, Result, EPSILON};

/// Which update rule to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// All updates from the previous full iterate.
    Jacobi,
    /// Updates reuse components already computed in the current sweep.
    GaussSeidel,
    /// `x <- x + tau (f - A x)` with a scalar relaxation `tau`.
    Richardson,
}

/// Configuration for the iterative solvers.
#[derive(Clone, Debug)]
pub struct IterativeConfig {
    /// Stop once the infinity norm of the step is at most this value.
    pub tolerance: f64,
    /// Give up after this many sweeps. `None` iterates until convergence.
    pub max_iterations: Option<usize>,
    /// Relaxation `tau` for [`Method::Richardson`]. `None` uses
    /// `1 / ||A||_inf`.
    pub relaxation: Option<f64>,
}

impl Default for IterativeConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON,
            max_iterations: None,
            relaxation: None,
        }
    }
}

/// Result of a converged run.
#[derive(Clone, Debug, PartialEq)]
pub struct Convergence {
    /// The final iterate.
    pub solution: Vec<f64>,
    /// Number of sweeps performed.
    pub iterations: usize,
    /// Infinity norm of the last step.
    pub step: f64,
}

/// Iterative solver for `A x = f`.
#[derive(Clone, Debug)]
pub struct IterativeSolver {
    method: Method,
    config: IterativeConfig,
}

impl IterativeSolver {
    /// Creates a solver with the given method and configuration.
    #[must_use]
    pub fn new(method: Method, config: IterativeConfig) -> Self {
        Self { method, config }
    }

    /// The update rule in use.
    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &IterativeConfig {
        &self.config
    }

    /// Iterates from the zero vector until convergence.
    ///
    /// # Errors
    ///
    /// - [`LinalgError::DimensionMismatch`] if `rows(A) != len(f)`
    /// - [`LinalgError::EmptyInput`] if `A` or `f` is empty
    /// - [`LinalgError::NotDiagonallyDominant`] if `A` is not square and
    ///   dominant
    /// - [`LinalgError::SingularMatrix`] if a diagonal entry is zero or not
    ///   finite
    /// - [`LinalgError::Diverged`] if an iterate stops being finite
    /// - [`LinalgError::NotConverged`] if a configured cap is reached
    pub fn solve(&self, a: &Matrix, f: &[f64]) -> Result<Convergence> {
        let n = f.len();
        if a.rows() != n {
            return Err(LinalgError::DimensionMismatch {
                expected: a.rows(),
                found: n,
            });
        }
        if a.is_empty() || n == 0 {
            return Err(LinalgError::EmptyInput);
        }
        if !a.is_diagonally_dominant() {
            return Err(LinalgError::NotDiagonallyDominant);
        }
        // Dominance admits all-zero rows.
        if a.diagonal().iter().any(|&d| d == 0.0 || !d.is_finite()) {
            return Err(LinalgError::SingularMatrix);
        }

        let tau = self
            .config
            .relaxation
            .unwrap_or_else(|| 1.0 / a.norm(Norm::Infinity));
        let mut x = vec![0.0; n];
        let mut prev = vec![0.0; n];
        let mut iterations = 0;

        loop {
            iterations += 1;
            match self.method {
                Method::Jacobi => jacobi_sweep(a, f, &prev, &mut x),
                Method::GaussSeidel => seidel_sweep(a, f, &mut x),
                Method::Richardson => richardson_sweep(a, f, tau, &prev, &mut x),
            }

            let step = vector::max_abs_diff(&x, &prev);
            log::trace!("{:?} sweep {iterations}: step {step:e}", self.method);
            if !step.is_finite() {
                log::debug!("{:?} diverged after {iterations} sweeps", self.method);
                return Err(LinalgError::Diverged { iterations });
            }
            if step <= self.config.tolerance {
                log::debug!("{:?} converged after {iterations} sweeps", self.method);
                return Ok(Convergence {
                    solution: x,
                    iterations,
                    step,
                });
            }
            if self.config.max_iterations.is_some_and(|cap| iterations >= cap) {
                return Err(LinalgError::NotConverged { iterations });
            }
            prev.copy_from_slice(&x);
        }
    }
}

fn jacobi_sweep(a: &Matrix, f: &[f64], prev: &[f64], x: &mut [f64]) {
    for (i, xi) in x.iter_mut().enumerate() {
        let row = a.row(i);
        let sum: f64 = row
            .iter()
            .zip(prev)
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, (aij, xj))| aij * xj)
            .sum();
        *xi = (f[i] - sum) / row[i];
    }
}

fn seidel_sweep(a: &Matrix, f: &[f64], x: &mut [f64]) {
    for i in 0..x.len() {
        let row = a.row(i);
        let sum: f64 = (0..x.len())
            .filter(|&j| j != i)
            .map(|j| row[j] * x[j])
            .sum();
        x[i] = (f[i] - sum) / row[i];
    }
}

fn richardson_sweep(a: &Matrix, f: &[f64], tau: f64, prev: &[f64], x: &mut [f64]) {
    for (i, xi) in x.iter_mut().enumerate() {
        let ax: f64 = a.row(i).iter().zip(prev).map(|(aij, xj)| aij * xj).sum();
        let residual = f[i] - ax;
        *xi = prev[i] + tau * residual;
    }
}

/// Solves `A x = f` by Jacobi iteration with the default configuration.
///
/// # Errors
///
/// See [`IterativeSolver::solve`].
pub fn jacobi_solve(a: &Matrix, f: &[f64]) -> Result<Vec<f64>> {
    IterativeSolver::new(Method::Jacobi, IterativeConfig::default())
        .solve(a, f)
        .map(|c| c.solution)
}

/// Solves `A x = f` by Gauss-Seidel iteration with the default configuration.
///
/// # Errors
///
/// See [`IterativeSolver::solve`].
pub fn seidel_solve(a: &Matrix, f: &[f64]) -> Result<Vec<f64>> {
    IterativeSolver::new(Method::GaussSeidel, IterativeConfig::default())
        .solve(a, f)
        .map(|c| c.solution)
}

/// Solves `A x = f` by Richardson iteration with `tau = 1 / ||A||_inf`.
///
/// # Errors
///
/// See [`IterativeSolver::solve`].
pub fn fixed_point_solve(a: &Matrix, f: &[f64]) -> Result<Vec<f64>> {
    IterativeSolver::new(Method::Richardson, IterativeConfig::default())
        .solve(a, f)
        .map(|c| c.solution)
}
