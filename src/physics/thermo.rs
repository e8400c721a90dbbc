//! Temperature sensitivities `∂T/∂U` with respect to `U = [ρ, ρu, ρE]`.
//!
//! Both functions return a vector over the `d + 2` flow variables, the layout
//! of one Jacobian row.

use crate::state::{EosSecondary, PrimitiveState};
use crate::types::{Dim, FluxVector, MAX_VAR};

/// `∂T/∂U` of a calorically perfect gas, `T = e / Cv`.
///
/// ∂T/∂ρ = (|u|²/2 - Cv T)/(ρ Cv), ∂T/∂(ρu_k) = -u_k/(ρ Cv), ∂T/∂(ρE) = 1/(ρ Cv)
pub fn ideal_gas_temperature_gradient(dim: Dim, prim: &PrimitiveState, cv: f64) -> FluxVector {
    let d = dim.get();
    let rho_cv = prim.density * cv;
    let mut dt = [0.0; MAX_VAR];
    dt[0] = (0.5 * prim.velocity_squared(d) - cv * prim.temperature) / rho_cv;
    for k in 0..d {
        dt[k + 1] = -prim.velocity[k] / rho_cv;
    }
    dt[d + 1] = 1.0 / rho_cv;
    dt
}

/// `∂T/∂U` for an arbitrary equation of state `T(ρ, e)`.
///
/// Uses the supplied partials `∂T/∂ρ|_e`, `∂T/∂e|_ρ` together with the chain
/// rule through `e = E - |u|²/2`, where the total energy is recovered as
/// `E = h - p/ρ`.
pub fn general_eos_temperature_gradient(
    dim: Dim,
    prim: &PrimitiveState,
    secondary: &EosSecondary,
) -> FluxVector {
    let d = dim.get();
    let rho = prim.density;
    let total_energy = prim.enthalpy - prim.pressure / rho;
    let dt_de = secondary.dt_de_rho;

    let mut dt = [0.0; MAX_VAR];
    dt[0] = secondary.dt_drho_e + dt_de * (prim.velocity_squared(d) - total_energy) / rho;
    for k in 0..d {
        dt[k + 1] = -dt_de * prim.velocity[k] / rho;
    }
    dt[d + 1] = dt_de / rho;
    dt
}
