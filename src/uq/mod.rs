//! Eigenspace perturbation of the Reynolds-stress anisotropy.
//!
//! Used to estimate the structural uncertainty of eddy-viscosity closures.
//! The Boussinesq Reynolds stress is split into its anisotropy tensor
//!
//! a_ij = R_ij / (2k) - δ_ij / 3,
//!
//! whose eigenvalues are mapped onto the barycentric (Lumley) triangle with
//! corners
//!
//! | Corner | Coordinates | Eigenvalues of `a` |
//! |---|---|---|
//! | one-component | (1, 0) | (-1/3, -1/3, 2/3) |
//! | two-component | (0, 0) | (-1/3, 1/6, 1/6) |
//! | three-component | (1/2, √3/2) | (0, 0, 0) |
//!
//! The barycentric point is moved towards the selected corner by `delta_b`,
//! mapped back to eigenvalues, recombined with the (optionally permuted)
//! eigenvectors, and finally blended with the unperturbed stress by `urlx`.

mod config;
mod perturbation;
mod reynolds_stress;

pub use config::{LimitingState, UqConfig};
pub use perturbation::{
    ReynoldsStressState, barycentric_coordinates, eigenvalues_from_barycentric,
};
pub use reynolds_stress::{mean_strain_rate, reynolds_stress};

/// Height of the barycentric triangle (`√3/2` rounded as in the literature).
pub const TRIANGLE_HEIGHT: f64 = 0.866025;
