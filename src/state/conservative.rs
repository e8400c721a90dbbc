//! Conversions between primitive states and the solver's flow variables.
//!
//! The compressible and general equation-of-state kernels are linearised with
//! respect to `U = [ρ, ρu_1..ρu_d, ρE]`; the incompressible kernel with
//! respect to `V = [p, u_1..u_d, T]`.

use crate::physics::GasProperties;
use crate::types::{Dim, FluxVector, MAX_DIM, MAX_VAR, Vector};

use super::primitive::PrimitiveState;

/// Density, velocity and specific internal energy from conservative variables.
fn split_conservative(dim: Dim, u: &FluxVector) -> (f64, Vector, f64) {
    let d = dim.get();
    let density = u[0];
    let mut velocity = [0.0; MAX_DIM];
    for k in 0..d {
        velocity[k] = u[k + 1] / density;
    }
    let total_energy = u[d + 1] / density;
    let kinetic: f64 = (0..d).map(|k| velocity[k] * velocity[k]).sum::<f64>() * 0.5;
    (density, velocity, total_energy - kinetic)
}

/// Primitive state of a calorically perfect gas.
///
/// Transport properties are left at zero; the caller fills in the laminar
/// viscosity from its own viscosity model.
///
/// # Arguments
/// * `dim` - Spatial dimension
/// * `u` - Conservative variables `[ρ, ρu, ρE]`
/// * `gas` - Gas constants
pub fn ideal_gas_primitive(dim: Dim, u: &FluxVector, gas: &GasProperties) -> PrimitiveState {
    let (density, velocity, internal_energy) = split_conservative(dim, u);
    let temperature = internal_energy / gas.cv();
    let pressure = density * gas.gas_constant * temperature;
    let total_energy = u[dim.get() + 1] / density;

    PrimitiveState {
        temperature,
        velocity,
        pressure,
        density,
        enthalpy: total_energy + pressure / density,
        cp: gas.cp(),
        ..Default::default()
    }
}

/// Conservative variables `[ρ, ρu, ρE]` of a calorically perfect gas.
pub fn ideal_gas_conservative(dim: Dim, prim: &PrimitiveState, gas: &GasProperties) -> FluxVector {
    let d = dim.get();
    let mut u = [0.0; MAX_VAR];
    u[0] = prim.density;
    for k in 0..d {
        u[k + 1] = prim.density * prim.velocity[k];
    }
    let total_energy = gas.cv() * prim.temperature + 0.5 * prim.velocity_squared(d);
    u[d + 1] = prim.density * total_energy;
    u
}

/// Primitive state for an arbitrary equation of state.
///
/// `eos` maps `(ρ, e)` to `(T, p)`. Transport properties and `Cp` are left at
/// zero for the caller to fill in.
pub fn general_eos_primitive<F>(dim: Dim, u: &FluxVector, eos: F) -> PrimitiveState
where
    F: FnOnce(f64, f64) -> (f64, f64),
{
    let (density, velocity, internal_energy) = split_conservative(dim, u);
    let (temperature, pressure) = eos(density, internal_energy);
    let total_energy = u[dim.get() + 1] / density;

    PrimitiveState {
        temperature,
        velocity,
        pressure,
        density,
        enthalpy: total_energy + pressure / density,
        ..Default::default()
    }
}

/// Primitive state from incompressible variables `[p, u, T]`.
pub fn incompressible_primitive(dim: Dim, v: &FluxVector, density: f64) -> PrimitiveState {
    let d = dim.get();
    let mut velocity = [0.0; MAX_DIM];
    velocity[..d].copy_from_slice(&v[1..=d]);

    PrimitiveState {
        temperature: v[d + 1],
        velocity,
        pressure: v[0],
        density,
        ..Default::default()
    }
}

/// Incompressible variables `[p, u, T]` of a primitive state.
pub fn incompressible_variables(dim: Dim, prim: &PrimitiveState) -> FluxVector {
    let d = dim.get();
    let mut v = [0.0; MAX_VAR];
    v[0] = prim.pressure;
    v[1..=d].copy_from_slice(&prim.velocity[..d]);
    v[d + 1] = prim.temperature;
    v
}
