//! Diffusive fluxes of temperature and turbulence kinetic energy.

use crate::physics::SstConstants;
use crate::state::NodeState;
use crate::types::{Dim, MAX_DIM, Vector};

/// Fourier-type diffusive flux `κ ∇φ`.
#[inline]
pub fn diffusive_flux(dim: Dim, diffusivity: f64, gradient: &Vector) -> Vector {
    let mut q = [0.0; MAX_DIM];
    for d in 0..dim.get() {
        q[d] = diffusivity * gradient[d];
    }
    q
}

/// Effective TKE diffusivity `μ + ½(σ_k,i μ_t,i + σ_k,j μ_t,j)`.
///
/// σ_k is blended with each endpoint's own F1.
pub fn tke_diffusivity(
    constants: &SstConstants,
    mean_laminar_viscosity: f64,
    node_i: &NodeState,
    node_j: &NodeState,
) -> f64 {
    let sigma_i = constants.sigma_k(node_i.turbulence.f1);
    let sigma_j = constants.sigma_k(node_j.turbulence.f1);
    mean_laminar_viscosity
        + 0.5
            * (sigma_i * node_i.primitive.eddy_viscosity
                + sigma_j * node_j.primitive.eddy_viscosity)
}
