//! Edge-direction gradient correction.
//!
//! The averaged gradient `(∇φ_i + ∇φ_j)/2` decouples odd and even points on
//! stretched or skewed meshes. The correction keeps its tangential part and
//! replaces the component along the edge vector `e` with the secant slope:
//!
//! ∇φ ← ∇φ - (∇φ · e - (φ_j - φ_i)) e / |e|²
//!
//! so that afterwards `∇φ · e = φ_j - φ_i` exactly.

mod correction;

pub use correction::{correct_gradient, correct_mean_gradients};
