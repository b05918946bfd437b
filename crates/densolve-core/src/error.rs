//! Error types shared by every densolve crate.

use thiserror::Error;

/// Errors returned by matrix construction, solvers and factorizations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// Operand shapes are incompatible for the requested operation.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// The length the operation required.
        expected: usize,
        /// The length that was supplied.
        found: usize,
    },

    /// A matrix or vector was empty where a value is required.
    #[error("matrix or vector is empty")]
    EmptyInput,

    /// The operation requires a square matrix.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// The operation requires a row-wise diagonally dominant matrix.
    #[error("matrix is not diagonally dominant")]
    NotDiagonallyDominant,

    /// Elimination met a zero pivot: the system has no unique solution.
    #[error("system is singular")]
    SingularSystem,

    /// A factorization, determinant or inverse met a zero pivot.
    #[error("matrix is singular")]
    SingularMatrix,

    /// Rows passed to a constructor have different lengths.
    #[error("row {row} has length {found}, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// A row, column or element index is outside the valid range.
    #[error("index {index} out of bounds for length {bound}")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The exclusive upper bound.
        bound: usize,
    },

    /// An iterative method hit its configured iteration cap.
    #[error("no convergence after {iterations} iterations")]
    NotConverged {
        /// Iterations performed before giving up.
        iterations: usize,
    },

    /// An iterative method produced a non-finite iterate.
    #[error("iteration diverged after {iterations} iterations")]
    Diverged {
        /// Iterations performed before the iterate stopped being finite.
        iterations: usize,
    },
}

/// Convenience alias used throughout densolve.
pub type Result<T> = std::result::Result<T, LinalgError>;
