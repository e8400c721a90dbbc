//! Fluid and turbulence-closure properties consumed by the flux kernel.
//!
//! - [`GasProperties`]: ratio of specific heats, gas constant, Prandtl numbers
//! - [`ViscosityModel`]: constant or Sutherland laminar viscosity with `dμ/dT`
//! - [`TurbulenceModel`]: which closure produced the eddy viscosity
//! - temperature sensitivities `∂T/∂U` for the ideal-gas and general
//!   equation-of-state variable sets

mod gas;
mod thermo;
mod turbulence;
mod viscosity;

pub use gas::GasProperties;
pub use thermo::{general_eos_temperature_gradient, ideal_gas_temperature_gradient};
pub use turbulence::{SstConstants, TurbulenceModel};
pub use viscosity::{SutherlandLaw, ViscosityModel};
