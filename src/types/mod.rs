//! Strongly-typed building blocks shared by every kernel stage.
//!
//! All per-edge scratch data lives in fixed-capacity stack arrays sized for
//! three spatial dimensions. Two-dimensional problems simply leave the third
//! row/column untouched (and zero).
//!
//! # Example
//!
//! ```
//! use visflux::types::{Dim, MAX_VAR, dot};
//!
//! let dim = Dim::Two;
//! assert_eq!(dim.get(), 2);
//! assert_eq!(dim.n_var(), 4);
//! assert!(dim.n_var() <= MAX_VAR);
//!
//! let a = [1.0, 2.0, 5.0];
//! let b = [3.0, 4.0, 7.0];
//! // Only the first two components take part in a 2D dot product.
//! assert_eq!(dot(dim, &a, &b), 11.0);
//! ```

mod dim;
mod indices;
mod tensor;

pub use dim::{Dim, MAX_DIM, MAX_VAR};
pub use indices::{EdgeIndex, PointIndex};
pub use tensor::{
    DELTA, FluxVector, JacobianBlock, Tensor, Vector, ZERO_BLOCK, ZERO_TENSOR, dot, norm,
    norm_squared, trace,
};
