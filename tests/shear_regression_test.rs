//! Regression test for uniform shear flow `u = (y, 0)` on a single 2D edge.
//!
//! With μ = 1, ρ = 1 and uniform temperature the stress tensor is
//! `[[0, 1], [1, 0]]` and the Jacobian blocks follow in closed form.

use approx::assert_relative_eq;
use visflux::state::{PrimitiveGradient, PrimitiveState, ideal_gas_conservative};
use visflux::types::Dim;
use visflux::{
    CompressibleFlux, EdgeContext, EdgeGeometry, GasProperties, NodeState, ViscousConfig,
    ViscousFlux,
};

const TOL: f64 = 1e-12;

fn shear_node(y: f64) -> NodeState {
    let mut gradient = PrimitiveGradient::zero();
    gradient.velocity[0][1] = 1.0;
    NodeState::new(
        PrimitiveState {
            temperature: 1.0,
            velocity: [y, 0.0, 0.0],
            density: 1.0,
            laminar_viscosity: 1.0,
            ..Default::default()
        },
        gradient,
    )
}

fn shear_edge() -> EdgeGeometry {
    EdgeGeometry::new(
        Dim::Two,
        [0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
        1.0,
    )
}

#[test]
fn test_shear_flux() {
    let (i, j) = (shear_node(0.0), shear_node(1.0));
    let flux = CompressibleFlux::new(ViscousConfig::compressible(Dim::Two)).unwrap();
    let result = flux.compute_residual(&EdgeContext::new(shear_edge(), &i, &j));

    let f = result.projected_flux();
    assert_eq!(f.len(), 4);
    assert!(f[0].abs() < TOL, "continuity flux must vanish");
    // τ·n = (τ_xy, τ_yy) = (1, 0)
    assert!((f[1] - 1.0).abs() < TOL, "τ_xy = {}", f[1]);
    assert!(f[2].abs() < TOL, "τ_yy = {}", f[2]);
    // (τ·n)·ū with ū = (1/2, 0); no heat flux at uniform temperature
    assert!((f[3] - 0.5).abs() < TOL, "energy flux = {}", f[3]);
}

#[test]
fn test_shear_jacobian_i() {
    let gas = GasProperties::air();
    let (i, j) = (shear_node(0.0), shear_node(1.0));
    let flux = CompressibleFlux::new(ViscousConfig::compressible(Dim::Two).with_gas(gas)).unwrap();
    let result = flux.compute_residual(&EdgeContext::new(shear_edge(), &i, &j));
    let jac = result.jacobian_i.unwrap();

    // Momentum block: -μ/(ρ d²) (e_a n_c - 2/3 e_c n_a + δ_ac e·n)
    assert!((jac[1][1] + 1.0).abs() < TOL);
    assert!(jac[1][2].abs() < TOL);
    assert!(jac[2][1].abs() < TOL);
    assert!((jac[2][2] + 4.0 / 3.0).abs() < TOL);
    // u_i = 0: no density column in the momentum rows
    assert!(jac[1][0].abs() < TOL);
    assert!(jac[2][0].abs() < TOL);
    // Stress work and ∂ū/∂U cancel in the energy row
    assert!(jac[3][1].abs() < TOL);
    assert!(jac[3][2].abs() < TOL);
    // Heat flux: -κ e·n/d² ∂T/∂U with ∂T/∂ρ = -T and ∂T/∂(ρE) = 1/Cv at rest
    let kappa = gas.conductivity(1.0, 0.0);
    assert_relative_eq!(jac[3][0], kappa, max_relative = 1e-12);
    assert_relative_eq!(jac[3][3], -kappa / gas.cv(), max_relative = 1e-12);
    assert_relative_eq!(jac[3][3], -gas.gamma / gas.prandtl_laminar, max_relative = 1e-12);
    // Continuity row is empty
    assert_eq!(jac[0][..4], [0.0; 4]);
}

#[test]
fn test_shear_jacobian_j() {
    let (i, j) = (shear_node(0.0), shear_node(1.0));
    let flux = CompressibleFlux::new(ViscousConfig::compressible(Dim::Two)).unwrap();
    let result = flux.compute_residual(&EdgeContext::new(shear_edge(), &i, &j));
    let jac = result.jacobian_j.unwrap();

    assert!((jac[1][1] - 1.0).abs() < TOL);
    assert!((jac[2][2] - 4.0 / 3.0).abs() < TOL);
    // -Σ_c J_ac u_c with u_j = (1, 0)
    assert!((jac[1][0] + 1.0).abs() < TOL);
    assert!(jac[2][0].abs() < TOL);
    // Stress work ½ plus ½/ρ τ_xy
    assert!((jac[3][1] - 1.0).abs() < TOL);
    assert!(jac[3][2].abs() < TOL);
}

#[test]
fn test_shear_state_round_trip() {
    // The conservative state of a shear node is what the Jacobians act on
    let gas = GasProperties::air();
    let node = shear_node(1.0);
    let u = ideal_gas_conservative(Dim::Two, &node.primitive, &gas);
    assert_eq!(u[0], 1.0);
    assert_eq!(u[1], 1.0);
    assert_relative_eq!(u[3], gas.cv() + 0.5, max_relative = 1e-15);
}

#[test]
fn test_stress_symmetry_on_rotated_edge() {
    // Same shear seen through an oblique face: τ·n = (n_y, n_x)
    let (i, j) = (shear_node(0.0), shear_node(1.0));
    let geometry = EdgeGeometry::new(
        Dim::Two,
        [0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.6, 0.8, 0.0],
        1.0,
    );
    let flux = CompressibleFlux::new(ViscousConfig::compressible(Dim::Two)).unwrap();
    let f = flux.compute_residual(&EdgeContext::new(geometry, &i, &j)).flux;
    assert!((f[1] - 0.8).abs() < TOL);
    assert!((f[2] - 0.6).abs() < TOL);
}
