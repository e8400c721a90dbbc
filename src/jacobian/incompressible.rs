//! Jacobians of the incompressible projected flux with respect to
//! `[p, u_1..u_d, T]`.

use crate::geometry::EdgeGeometry;
use crate::types::{DELTA, JacobianBlock, ZERO_BLOCK};

/// Jacobian blocks of the incompressible flux.
///
/// The momentum rows depend on the endpoint velocities through the corrected
/// velocity gradient, the energy row on the endpoint temperatures through the
/// corrected temperature gradient; the continuity row is empty. Since only
/// differences of endpoint values enter, `J_j = -J_i`. A zero
/// `dist_squared` yields zero blocks.
pub fn incompressible_jacobians(
    geometry: &EdgeGeometry,
    dist_squared: f64,
    total_viscosity: f64,
    conductivity: f64,
) -> (JacobianBlock, JacobianBlock) {
    let mut jac_i = ZERO_BLOCK;
    if dist_squared == 0.0 {
        return (jac_i, ZERO_BLOCK);
    }

    let dim = geometry.dim;
    let d = dim.get();
    let e = &geometry.edge_vector;
    let n = &geometry.normal;
    let proj = geometry.proj_vector_on_normal;
    let xi = total_viscosity / dist_squared;

    for a in 0..d {
        for c in 0..d {
            jac_i[a + 1][c + 1] =
                -xi * (e[a] * n[c] - 2.0 / 3.0 * e[c] * n[a] + DELTA[a][c] * proj);
        }
    }
    let energy = dim.energy_index();
    jac_i[energy][energy] = -conductivity * proj / dist_squared;

    let mut jac_j = ZERO_BLOCK;
    for (row_j, row_i) in jac_j.iter_mut().zip(jac_i.iter()) {
        for (vj, vi) in row_j.iter_mut().zip(row_i.iter()) {
            *vj = -vi;
        }
    }
    (jac_i, jac_j)
}
