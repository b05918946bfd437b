//! Norm selection for vectors and matrices.

/// Which norm to compute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Norm {
    /// Square root of the sum of squares (Frobenius for matrices).
    Euclidean,
    /// Maximum absolute entry for vectors, maximum absolute row sum for
    /// matrices.
    #[default]
    Infinity,
}
