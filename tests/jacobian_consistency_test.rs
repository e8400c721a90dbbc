//! Finite-difference checks of the analytic Jacobians.
//!
//! Node gradients are frozen inputs, so the only dependence of the flux on the
//! endpoint variables is through the edge differences of the gradient
//! correction, the edge means and the transport properties. Central
//! differences of the full kernel must reproduce every Jacobian column.
//!
//! For SST the turbulence solver's conserved `ρk` and `ρω` are held fixed, so
//! a density perturbation changes k, ω and μ_t the way the Jacobian assumes.

use visflux::state::{
    PrimitiveGradient, PrimitiveState, general_eos_primitive, ideal_gas_conservative,
    ideal_gas_primitive, incompressible_primitive, incompressible_variables,
};
use visflux::types::{FluxVector, JacobianBlock};
use visflux::physics::SstConstants;
use visflux::{
    CompressibleFlux, Dim, EdgeContext, EdgeGeometry, EosSecondary, GasProperties,
    GeneralEosFlux, IncompressibleFlux, NodeState, SutherlandLaw, TurbulenceModel,
    TurbulenceScalars, ViscosityModel, ViscousConfig, ViscousFlux,
};

const REL_STEP: f64 = 1e-6;
const TOL: f64 = 1e-6;

#[derive(Clone, Copy)]
enum Side {
    I,
    J,
}

fn gas() -> GasProperties {
    GasProperties::new(1.4, 1.0, 0.72, 0.9)
}

fn sutherland() -> ViscosityModel {
    ViscosityModel::Sutherland(SutherlandLaw::new(0.8, 1.0, 0.6))
}

fn geometry(dim: Dim) -> EdgeGeometry {
    EdgeGeometry::new(
        dim,
        [0.1, 0.2, -0.1],
        [0.9, 0.5, 0.3],
        [0.7, 0.3, 0.2],
        0.4,
    )
}

fn gradient(seed: f64) -> PrimitiveGradient {
    let mut g = PrimitiveGradient::zero();
    for a in 0..3 {
        g.temperature[a] = (seed + 0.3 * a as f64).sin();
        g.pressure[a] = 0.5 * (seed - a as f64).cos();
        for b in 0..3 {
            g.velocity[a][b] = (seed * (1.0 + a as f64) + 0.7 * b as f64).cos();
        }
    }
    g
}

fn primitive(temperature: f64, velocity: [f64; 3], density: f64) -> PrimitiveState {
    PrimitiveState {
        temperature,
        velocity,
        density,
        ..Default::default()
    }
}

/// Central-difference check of both blocks.
///
/// `evaluate(side, u)` rebuilds the node on `side` from the variables `u` and
/// returns the projected flux.
fn check_blocks<E>(
    n_var: usize,
    u_i: FluxVector,
    u_j: FluxVector,
    analytic: (JacobianBlock, JacobianBlock),
    evaluate: E,
) where
    E: Fn(Side, &FluxVector) -> FluxVector,
{
    for (side, u, jac) in [(Side::I, u_i, analytic.0), (Side::J, u_j, analytic.1)] {
        for col in 0..n_var {
            let h = REL_STEP * u[col].abs().max(1.0);
            let mut plus = u;
            let mut minus = u;
            plus[col] += h;
            minus[col] -= h;
            let f_plus = evaluate(side, &plus);
            let f_minus = evaluate(side, &minus);

            for row in 0..n_var {
                let fd = (f_plus[row] - f_minus[row]) / (2.0 * h);
                let exact = jac[row][col];
                assert!(
                    (fd - exact).abs() <= TOL * (1.0 + exact.abs()),
                    "{} block ({row}, {col}): finite difference {fd}, analytic {exact}",
                    match side {
                        Side::I => "i",
                        Side::J => "j",
                    }
                );
            }
        }
    }
}

fn compressible_case(dim: Dim) {
    let gas = gas();
    let viscosity = sutherland();
    let config = ViscousConfig::compressible(dim)
        .with_gas(gas)
        .with_viscosity(viscosity);
    let flux = CompressibleFlux::new(config).unwrap();
    let geometry = geometry(dim);
    let (grad_i, grad_j) = (gradient(0.3), gradient(1.1));

    let node = |u: &FluxVector, grad: PrimitiveGradient| {
        let mut prim = ideal_gas_primitive(dim, u, &gas);
        prim.laminar_viscosity = viscosity.viscosity(prim.temperature).unwrap_or_default();
        NodeState::new(prim, grad)
    };

    let u_i = ideal_gas_conservative(dim, &primitive(1.1, [0.3, -0.2, 0.15], 1.2), &gas);
    let u_j = ideal_gas_conservative(dim, &primitive(1.4, [0.5, 0.1, -0.25], 0.9), &gas);
    let (node_i, node_j) = (node(&u_i, grad_i), node(&u_j, grad_j));

    let result = flux.compute_residual(&EdgeContext::new(geometry, &node_i, &node_j));
    let analytic = (result.jacobian_i.unwrap(), result.jacobian_j.unwrap());

    check_blocks(dim.n_var(), u_i, u_j, analytic, |side, u| {
        let (a, b) = match side {
            Side::I => (node(u, grad_i), node_j),
            Side::J => (node_i, node(u, grad_j)),
        };
        flux.compute_residual(&EdgeContext::new(geometry, &a, &b)).flux
    });
}

/// Conserved turbulence variables of one node.
#[derive(Clone, Copy)]
struct Turbulence {
    rho_k: f64,
    rho_omega: f64,
    f1: f64,
    vorticity: f64,
}

const SST_F2: f64 = 0.3;

/// Compressible SST edge with equal density and k at both ends, so the
/// isotropic `⅔ ρ̄ k̄` term is stationary in the endpoint density.
fn sst_case(dim: Dim, turb_i: Turbulence, turb_j: Turbulence) {
    let gas = gas();
    let viscosity = sutherland();
    let constants = SstConstants::default();
    let config = ViscousConfig::compressible(dim)
        .with_gas(gas)
        .with_viscosity(viscosity)
        .with_turbulence(TurbulenceModel::Sst(constants));
    let flux = CompressibleFlux::new(config).unwrap();
    let geometry = geometry(dim);
    let (grad_i, grad_j) = (gradient(0.6), gradient(-0.2));

    let node = |u: &FluxVector, grad: PrimitiveGradient, turb: Turbulence, seed: f64| {
        let mut prim = ideal_gas_primitive(dim, u, &gas);
        prim.laminar_viscosity = viscosity.viscosity(prim.temperature).unwrap_or_default();
        let tke = turb.rho_k / prim.density;
        let omega = turb.rho_omega / prim.density;
        prim.eddy_viscosity = if constants.limiter_inactive(omega, turb.vorticity, SST_F2) {
            prim.density * tke / omega
        } else {
            constants.a1 * turb.rho_k / (turb.vorticity * SST_F2)
        };
        NodeState::new(prim, grad).with_turbulence(TurbulenceScalars {
            tke,
            omega,
            f1: turb.f1,
            f2: SST_F2,
            vorticity_magnitude: turb.vorticity,
            tke_gradient: [0.2 * seed, -0.1, 0.15 * seed],
        })
    };

    let u_i = ideal_gas_conservative(dim, &primitive(1.1, [0.3, -0.2, 0.15], 1.1), &gas);
    let u_j = ideal_gas_conservative(dim, &primitive(1.4, [0.5, 0.1, -0.25], 1.1), &gas);
    let node_i = node(&u_i, grad_i, turb_i, 1.0);
    let node_j = node(&u_j, grad_j, turb_j, -0.5);

    let result = flux.compute_residual(&EdgeContext::new(geometry, &node_i, &node_j));
    let analytic = (result.jacobian_i.unwrap(), result.jacobian_j.unwrap());

    check_blocks(dim.n_var(), u_i, u_j, analytic, |side, u| {
        let (a, b) = match side {
            Side::I => (node(u, grad_i, turb_i, 1.0), node_j),
            Side::J => (node_i, node(u, grad_j, turb_j, -0.5)),
        };
        flux.compute_residual(&EdgeContext::new(geometry, &a, &b)).flux
    });
}

fn general_eos_case(dim: Dim) {
    let gas = gas();
    let cv = gas.cv();
    let viscosity = sutherland();
    let config = ViscousConfig::general_eos(dim).with_viscosity(viscosity);
    let flux = GeneralEosFlux::new(config).unwrap();
    let geometry = geometry(dim);
    let (grad_i, grad_j) = (gradient(-0.4), gradient(0.8));

    // Ideal-gas closure expressed through (ρ, e)
    let node = |u: &FluxVector, grad: PrimitiveGradient, conductivity: f64| {
        let mut prim = general_eos_primitive(dim, u, |rho, e| {
            let t = e / cv;
            (t, rho * gas.gas_constant * t)
        });
        prim.laminar_viscosity = viscosity.viscosity(prim.temperature).unwrap_or_default();
        prim.thermal_conductivity = conductivity;
        prim.cp = gas.cp();
        NodeState::new(prim, grad).with_secondary(EosSecondary::new(0.0, 1.0 / cv))
    };

    let u_i = ideal_gas_conservative(dim, &primitive(0.9, [-0.1, 0.4, 0.2], 1.05), &gas);
    let u_j = ideal_gas_conservative(dim, &primitive(1.3, [0.2, 0.3, -0.1], 1.25), &gas);
    let (node_i, node_j) = (node(&u_i, grad_i, 0.04), node(&u_j, grad_j, 0.06));

    let result = flux.compute_residual(&EdgeContext::new(geometry, &node_i, &node_j));
    let analytic = (result.jacobian_i.unwrap(), result.jacobian_j.unwrap());

    check_blocks(dim.n_var(), u_i, u_j, analytic, |side, u| {
        let (a, b) = match side {
            Side::I => (node(u, grad_i, 0.04), node_j),
            Side::J => (node_i, node(u, grad_j, 0.06)),
        };
        flux.compute_residual(&EdgeContext::new(geometry, &a, &b)).flux
    });
}

fn incompressible_case(dim: Dim) {
    let flux = IncompressibleFlux::new(ViscousConfig::incompressible(dim)).unwrap();
    let geometry = geometry(dim);
    let (grad_i, grad_j) = (gradient(0.2), gradient(-0.9));

    let node = |v: &FluxVector, grad: PrimitiveGradient| {
        let mut prim = incompressible_primitive(dim, v, 1.0);
        prim.laminar_viscosity = 0.7;
        prim.thermal_conductivity = 0.05;
        NodeState::new(prim, grad)
    };

    let mut prim_i = primitive(1.2, [0.4, -0.3, 0.1], 1.0);
    prim_i.pressure = 0.3;
    let mut prim_j = primitive(0.8, [0.1, 0.2, 0.5], 1.0);
    prim_j.pressure = -0.1;
    let v_i = incompressible_variables(dim, &prim_i);
    let v_j = incompressible_variables(dim, &prim_j);
    let (node_i, node_j) = (node(&v_i, grad_i), node(&v_j, grad_j));

    let result = flux.compute_residual(&EdgeContext::new(geometry, &node_i, &node_j));
    let analytic = (result.jacobian_i.unwrap(), result.jacobian_j.unwrap());

    check_blocks(dim.n_var(), v_i, v_j, analytic, |side, v| {
        let (a, b) = match side {
            Side::I => (node(v, grad_i), node_j),
            Side::J => (node_i, node(v, grad_j)),
        };
        flux.compute_residual(&EdgeContext::new(geometry, &a, &b)).flux
    });
}

#[test]
fn test_compressible_jacobian_2d() {
    compressible_case(Dim::Two);
}

#[test]
fn test_compressible_jacobian_3d() {
    compressible_case(Dim::Three);
}

#[test]
fn test_general_eos_jacobian_2d() {
    general_eos_case(Dim::Two);
}

#[test]
fn test_general_eos_jacobian_3d() {
    general_eos_case(Dim::Three);
}

#[test]
fn test_incompressible_jacobian_2d() {
    incompressible_case(Dim::Two);
}

#[test]
fn test_incompressible_jacobian_3d() {
    incompressible_case(Dim::Three);
}

// k = 0.4 at both ends with ρ = 1.1
const TURB_I: Turbulence = Turbulence {
    rho_k: 0.44,
    rho_omega: 5.5,
    f1: 0.7,
    vorticity: 0.5,
};
const TURB_J: Turbulence = Turbulence {
    rho_k: 0.44,
    rho_omega: 3.3,
    f1: 0.2,
    vorticity: 0.8,
};

#[test]
fn test_sst_jacobian_2d() {
    sst_case(Dim::Two, TURB_I, TURB_J);
}

#[test]
fn test_sst_jacobian_3d() {
    sst_case(Dim::Three, TURB_I, TURB_J);
}

#[test]
fn test_sst_limiter_active_drops_eddy_term() {
    // |Ω| F2 / a1 far above ω: μ_t = a1 ρk / (|Ω| F2) does not depend on ρ
    let limited = |t: Turbulence| Turbulence {
        vorticity: 1e3,
        ..t
    };
    sst_case(Dim::Two, limited(TURB_I), limited(TURB_J));

    // Same μ_t at both ends; only the limiter test differs between the runs
    let dim = Dim::Two;
    let config = ViscousConfig::compressible(dim).with_turbulence(TurbulenceModel::sst());
    let flux = CompressibleFlux::new(config).unwrap();
    let node = |vorticity: f64, seed: f64| {
        let mut prim = primitive(1.0 + 0.2 * seed, [0.3, -0.2 * seed, 0.0], 1.1);
        prim.laminar_viscosity = 0.5;
        prim.eddy_viscosity = 0.2;
        NodeState::new(prim, gradient(seed)).with_turbulence(TurbulenceScalars {
            tke: 0.4,
            omega: 2.0,
            f1: 0.5,
            f2: SST_F2,
            vorticity_magnitude: vorticity,
            tke_gradient: [0.1, 0.2 * seed, 0.0],
        })
    };
    let evaluate = |vorticity: f64| {
        let (i, j) = (node(vorticity, 0.4), node(vorticity, 1.3));
        flux.compute_residual(&EdgeContext::new(geometry(dim), &i, &j))
    };
    let free = evaluate(0.5);
    let capped = evaluate(1e3);
    assert_eq!(free.flux, capped.flux);

    let n_var = dim.n_var();
    for (a, b) in [
        (free.jacobian_i.unwrap(), capped.jacobian_i.unwrap()),
        (free.jacobian_j.unwrap(), capped.jacobian_j.unwrap()),
    ] {
        for row in 0..n_var {
            for col in 1..n_var {
                assert_eq!(a[row][col], b[row][col], "entry ({row}, {col}) depends on the limiter");
            }
        }
        // ∂μ_t/∂ρ = k/ω enters the density column only while the limiter is off
        assert_eq!(a[0][0], b[0][0]);
        assert!(
            (1..n_var).any(|row| (a[row][0] - b[row][0]).abs() > 1e-6),
            "eddy-viscosity density term missing"
        );
    }
}
