//! Derivative of the projected stress `τ·n` with respect to the conservative
//! variables.

use crate::geometry::EdgeGeometry;
use crate::state::PrimitiveState;
use crate::types::{DELTA, MAX_DIM, MAX_VAR};

/// `∂(τ·n)_a/∂U`, one row per momentum component.
pub type StressJacobian = [[f64; MAX_VAR]; MAX_DIM];

/// Stress Jacobians at both endpoints.
///
/// With the corrected velocity gradient the projected stress is linear in the
/// endpoint velocities:
///
/// ∂(τ·n)_a/∂u_c|_i = -μ/|e|² (e_a n_c - 2/3 e_c n_a + δ_ac e·n)
///
/// and the j-side derivative has the opposite sign. The chain rule through
/// `u = (ρu)/ρ` gives the momentum columns (divided by ρ) and the density
/// column `-Σ_c J_ac u_c`. The energy column is zero.
///
/// # Arguments
/// * `geometry` - Edge geometry
/// * `dist_squared` - Squared distance used for the linearisation
/// * `coefficient` - Wall-function factor times total viscosity
/// * `prim_i`, `prim_j` - Endpoint primitive states
pub fn stress_jacobians(
    geometry: &EdgeGeometry,
    dist_squared: f64,
    coefficient: f64,
    prim_i: &PrimitiveState,
    prim_j: &PrimitiveState,
) -> (StressJacobian, StressJacobian) {
    let d = geometry.dim.get();
    let e = &geometry.edge_vector;
    let n = &geometry.normal;
    let proj = geometry.proj_vector_on_normal;

    let xi_i = coefficient / (prim_i.density * dist_squared);
    let xi_j = coefficient / (prim_j.density * dist_squared);

    let mut jac_i = [[0.0; MAX_VAR]; MAX_DIM];
    let mut jac_j = [[0.0; MAX_VAR]; MAX_DIM];

    for a in 0..d {
        for c in 0..d {
            let g = e[a] * n[c] - 2.0 / 3.0 * e[c] * n[a] + DELTA[a][c] * proj;
            jac_i[a][c + 1] = -xi_i * g;
            jac_j[a][c + 1] = xi_j * g;
        }
        for c in 0..d {
            jac_i[a][0] -= jac_i[a][c + 1] * prim_i.velocity[c];
            jac_j[a][0] -= jac_j[a][c + 1] * prim_j.velocity[c];
        }
    }
    (jac_i, jac_j)
}
