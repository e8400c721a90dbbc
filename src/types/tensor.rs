//! Fixed-capacity vectors, tensors and Jacobian blocks.

use super::dim::{Dim, MAX_DIM, MAX_VAR};

/// Spatial vector (only the first `d` components are meaningful).
pub type Vector = [f64; MAX_DIM];

/// Rank-2 spatial tensor, row-major.
pub type Tensor = [[f64; MAX_DIM]; MAX_DIM];

/// Projected flux, one entry per flow variable.
pub type FluxVector = [f64; MAX_VAR];

/// Dense Jacobian block `∂F/∂U`, row = flux component, column = variable.
pub type JacobianBlock = [[f64; MAX_VAR]; MAX_VAR];

/// Kronecker delta.
pub const DELTA: Tensor = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// All-zero tensor.
pub const ZERO_TENSOR: Tensor = [[0.0; MAX_DIM]; MAX_DIM];

/// All-zero Jacobian block.
pub const ZERO_BLOCK: JacobianBlock = [[0.0; MAX_VAR]; MAX_VAR];

/// Dot product over the active dimensions.
#[inline(always)]
pub fn dot(dim: Dim, a: &Vector, b: &Vector) -> f64 {
    (0..dim.get()).map(|k| a[k] * b[k]).sum()
}

/// Squared Euclidean norm over the active dimensions.
#[inline(always)]
pub fn norm_squared(dim: Dim, a: &Vector) -> f64 {
    dot(dim, a, a)
}

/// Euclidean norm over the active dimensions.
#[inline(always)]
pub fn norm(dim: Dim, a: &Vector) -> f64 {
    norm_squared(dim, a).sqrt()
}

/// Trace over the active dimensions.
#[inline(always)]
pub fn trace(dim: Dim, t: &Tensor) -> f64 {
    (0..dim.get()).map(|k| t[k][k]).sum()
}
