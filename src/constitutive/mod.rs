//! Constitutive relations: viscous stress and diffusive heat flux.
//!
//! All functions operate on the edge-mean state after gradient correction.
//! Velocity gradients follow the convention `grad[i][j] = ∂u_i/∂x_j`.

mod heat_flux;
mod stress;

pub use heat_flux::{diffusive_flux, tke_diffusivity};
pub use stress::{
    QCR_C1, apply_qcr, perturbed_stress_tensor, rescale_to_wall_shear, strain_stress,
    stress_tensor, wall_shear_representation,
};
