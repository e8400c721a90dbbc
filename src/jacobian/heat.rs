//! Heat-flux Jacobians.

use crate::types::{FluxVector, MAX_VAR};

/// Derivative of the projected heat flux `κ ∇T·n` at both endpoints.
///
/// The corrected temperature gradient gives `∂(∇T·n)/∂T_i = -e·n/|e|²` and
/// the opposite sign at j; `dt_du_i`, `dt_du_j` carry the chain rule to the
/// flow variables.
///
/// # Arguments
/// * `n_var` - Number of flow variables
/// * `conductivity` - Effective conductivity κ
/// * `proj_over_dist` - `e·n / |e|²`
/// * `dt_du_i`, `dt_du_j` - `∂T/∂U` at the endpoints
pub fn heat_flux_jacobians(
    n_var: usize,
    conductivity: f64,
    proj_over_dist: f64,
    dt_du_i: &FluxVector,
    dt_du_j: &FluxVector,
) -> (FluxVector, FluxVector) {
    let factor = conductivity * proj_over_dist;
    let mut jac_i = [0.0; MAX_VAR];
    let mut jac_j = [0.0; MAX_VAR];
    for var in 0..n_var {
        jac_i[var] = -factor * dt_du_i[var];
        jac_j[var] = factor * dt_du_j[var];
    }
    (jac_i, jac_j)
}

/// Density terms of the TKE diffusion flux `μ_k ∇k·n`.
///
/// With transported `ρk`, `∂k/∂ρ = -k/ρ` at each endpoint.
pub fn add_tke_density_terms(
    jac_i: &mut FluxVector,
    jac_j: &mut FluxVector,
    tke_diffusivity: f64,
    proj_over_dist: f64,
    (tke_i, rho_i): (f64, f64),
    (tke_j, rho_j): (f64, f64),
) {
    jac_i[0] += tke_diffusivity * tke_i / rho_i * proj_over_dist;
    jac_j[0] -= tke_diffusivity * tke_j / rho_j * proj_over_dist;
}
