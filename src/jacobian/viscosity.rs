//! Jacobians of the temperature-dependent laminar viscosity and of the SST
//! eddy viscosity.

use crate::constitutive::strain_stress;
use crate::types::{Dim, FluxVector, JacobianBlock, MAX_DIM, MAX_VAR, Tensor, Vector};

/// Projected strain `f (∇u + ∇uᵀ - 2/3 (∇·u) δ)·n`, the sensitivity of `τ·n`
/// to the viscosity, scaled by the wall-function factor `f`.
pub fn projected_strain(dim: Dim, grad: &Tensor, normal: &Vector, wall_factor: f64) -> Vector {
    let d = dim.get();
    let s = strain_stress(dim, grad, wall_factor);
    let mut out = [0.0; MAX_DIM];
    for a in 0..d {
        out[a] = (0..d).map(|b| s[a][b] * normal[b]).sum();
    }
    out
}

/// Sensitivity `∂F/∂μ` of every projected flux row.
///
/// `diffusive` is the sensitivity of the energy-row diffusion terms
/// (heat flux and TKE diffusion) to the same viscosity.
pub fn viscosity_flux_sensitivity(
    dim: Dim,
    proj_strain: &Vector,
    mean_velocity: &Vector,
    diffusive: f64,
) -> FluxVector {
    let d = dim.get();
    let mut s = [0.0; MAX_VAR];
    let mut work = 0.0;
    for a in 0..d {
        s[a + 1] = proj_strain[a];
        work += proj_strain[a] * mean_velocity[a];
    }
    s[d + 1] = work + diffusive;
    s
}

/// Add `scale · (∂F/∂μ) ⊗ (∂T/∂U)` to a Jacobian block.
///
/// For the mean viscosity `μ̄ = (μ_i + μ_j)/2`, `scale = ½ dμ/dT` evaluated at
/// the endpoint the block belongs to.
pub fn add_laminar_viscosity_jacobian(
    dim: Dim,
    jac: &mut JacobianBlock,
    sensitivity: &FluxVector,
    scale: f64,
    dt_du: &FluxVector,
) {
    let n_var = dim.n_var();
    for row in 0..n_var {
        for col in 0..n_var {
            jac[row][col] += scale * sensitivity[row] * dt_du[col];
        }
    }
}

/// Add the density derivative of `μ_t = ρk/ω` to a Jacobian block.
///
/// `scale` is `½ k/ω` of the endpoint the block belongs to.
pub fn add_eddy_viscosity_jacobian(
    dim: Dim,
    jac: &mut JacobianBlock,
    sensitivity: &FluxVector,
    scale: f64,
) {
    for row in 0..dim.n_var() {
        jac[row][0] += scale * sensitivity[row];
    }
}
