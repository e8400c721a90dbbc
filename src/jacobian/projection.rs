//! Assembly of the stress and heat-flux Jacobians into full blocks.

use crate::state::PrimitiveState;
use crate::types::{Dim, FluxVector, JacobianBlock, Vector, ZERO_BLOCK};

use super::stress::StressJacobian;

/// Full Jacobian blocks of the compressible projected flux.
///
/// Momentum rows copy the stress Jacobian. The energy row linearises
/// `(τ·n)·ū + q·n`: the stress part is contracted with the mean velocity
/// `ū`, and `∂ū/∂U` contributes `½/ρ (τ·n)` to the momentum columns and
/// `-½/ρ (τ·n)·u` to the density column.
///
/// # Arguments
/// * `dim` - Spatial dimension
/// * `stress` - Stress Jacobians at i and j
/// * `heat` - Heat-flux Jacobians at i and j
/// * `proj_flux` - Projected flux of this edge
/// * `mean_velocity` - Edge-mean velocity
/// * `prim_i`, `prim_j` - Endpoint primitive states
pub fn project_jacobians(
    dim: Dim,
    stress: (&StressJacobian, &StressJacobian),
    heat: (&FluxVector, &FluxVector),
    proj_flux: &FluxVector,
    mean_velocity: &Vector,
    prim_i: &PrimitiveState,
    prim_j: &PrimitiveState,
) -> (JacobianBlock, JacobianBlock) {
    (
        project_side(dim, stress.0, heat.0, proj_flux, mean_velocity, prim_i),
        project_side(dim, stress.1, heat.1, proj_flux, mean_velocity, prim_j),
    )
}

fn project_side(
    dim: Dim,
    stress: &StressJacobian,
    heat: &FluxVector,
    proj_flux: &FluxVector,
    mean_velocity: &Vector,
    prim: &PrimitiveState,
) -> JacobianBlock {
    let d = dim.get();
    let energy = dim.energy_index();
    let half_inv_rho = 0.5 / prim.density;
    let mut jac = ZERO_BLOCK;

    for a in 0..d {
        jac[a + 1][..=d].copy_from_slice(&stress[a][..=d]);
    }

    let mut contraction = 0.0;
    let mut proj_flux_vel = 0.0;
    for c in 0..d {
        proj_flux_vel += proj_flux[c + 1] * prim.velocity[c];
        for a in 0..d {
            jac[energy][c + 1] += stress[a][c + 1] * mean_velocity[a];
        }
        contraction -= prim.velocity[c] * jac[energy][c + 1];
    }
    jac[energy][0] = contraction - half_inv_rho * proj_flux_vel;

    for c in 0..d {
        jac[energy][c + 1] += half_inv_rho * proj_flux[c + 1];
    }
    for var in 0..=energy {
        jac[energy][var] += heat[var];
    }
    jac
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_row_of_pure_heat_flux() {
        let stress = [[0.0; 5]; 3];
        let heat_i = [1.0, 2.0, 3.0, 4.0, 0.0];
        let heat_j = [-1.0, -2.0, -3.0, -4.0, 0.0];
        let prim = PrimitiveState {
            density: 1.0,
            ..Default::default()
        };
        let (ji, jj) = project_jacobians(
            Dim::Two,
            (&stress, &stress),
            (&heat_i, &heat_j),
            &[0.0; 5],
            &[0.0; 3],
            &prim,
            &prim,
        );
        assert_eq!(ji[3][..4], heat_i[..4]);
        assert_eq!(jj[3][..4], heat_j[..4]);
        assert_eq!(ji[0], [0.0; 5]);
        assert_eq!(ji[1], [0.0; 5]);
    }

    #[test]
    fn test_work_term_momentum_columns() {
        // Zero stress Jacobian: only ∂ū/∂U contributes to the energy row
        let stress = [[0.0; 5]; 3];
        let heat = [0.0; 5];
        let prim = PrimitiveState {
            density: 2.0,
            velocity: [3.0, -1.0, 0.0],
            ..Default::default()
        };
        let flux = [0.0, 4.0, 8.0, 0.0, 0.0];
        let (ji, _) = project_jacobians(
            Dim::Two,
            (&stress, &stress),
            (&heat, &heat),
            &flux,
            &[0.0; 3],
            &prim,
            &prim,
        );
        assert!((ji[3][1] - 1.0).abs() < 1e-15);
        assert!((ji[3][2] - 2.0).abs() < 1e-15);
        // -½/ρ (τ·n)·u = -0.25 (12 - 8)
        assert!((ji[3][0] + 1.0).abs() < 1e-15);
    }
}
