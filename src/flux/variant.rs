//! Fluid-model variants of the averaged-gradient kernel.
//!
//! Each variant is a zero-sized tag type; [`AvgGradFlux`](super::AvgGradFlux)
//! is generic over it, so the choice is made once at construction.

use crate::config::{FluidModel, ViscousConfig};
use crate::physics::{general_eos_temperature_gradient, ideal_gas_temperature_gradient};
use crate::state::{MeanState, NodeState};
use crate::types::{FluxVector, MAX_VAR};

/// Transport properties and temperature sensitivities of one fluid model.
pub trait FluidVariant: Copy + Default + Send + Sync + 'static {
    /// Model this variant implements.
    const MODEL: FluidModel;

    /// Whether the variables are `[ρ, ρu, ρE]` and the energy row carries
    /// the viscous work `(τ·n)·u`.
    const CONSERVATIVE: bool;

    /// Effective conductivity κ multiplying the mean temperature gradient.
    fn conductivity(config: &ViscousConfig, mean: &MeanState) -> f64;

    /// `(∂κ/∂μ, ∂κ/∂μ_t)`.
    fn conductivity_sensitivity(config: &ViscousConfig, mean: &MeanState) -> (f64, f64);

    /// `∂T/∂U` at one endpoint.
    fn temperature_sensitivity(config: &ViscousConfig, node: &NodeState) -> FluxVector;
}

/// Calorically perfect gas: `κ = Cp (μ/Pr + μ_t/Pr_t)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Compressible;

impl FluidVariant for Compressible {
    const MODEL: FluidModel = FluidModel::Compressible;
    const CONSERVATIVE: bool = true;

    #[inline]
    fn conductivity(config: &ViscousConfig, mean: &MeanState) -> f64 {
        config.gas.conductivity(
            mean.primitive.laminar_viscosity,
            mean.primitive.eddy_viscosity,
        )
    }

    #[inline]
    fn conductivity_sensitivity(config: &ViscousConfig, _mean: &MeanState) -> (f64, f64) {
        let cp = config.gas.cp();
        (
            cp / config.gas.prandtl_laminar,
            cp / config.gas.prandtl_turbulent,
        )
    }

    #[inline]
    fn temperature_sensitivity(config: &ViscousConfig, node: &NodeState) -> FluxVector {
        ideal_gas_temperature_gradient(config.dim, &node.primitive, config.gas.cv())
    }
}

/// Incompressible flow: conductivity is a nodal property.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Incompressible;

impl FluidVariant for Incompressible {
    const MODEL: FluidModel = FluidModel::Incompressible;
    const CONSERVATIVE: bool = false;

    #[inline]
    fn conductivity(_config: &ViscousConfig, mean: &MeanState) -> f64 {
        mean.primitive.thermal_conductivity
    }

    #[inline]
    fn conductivity_sensitivity(_config: &ViscousConfig, _mean: &MeanState) -> (f64, f64) {
        (0.0, 0.0)
    }

    /// Temperature is itself a variable.
    #[inline]
    fn temperature_sensitivity(config: &ViscousConfig, _node: &NodeState) -> FluxVector {
        let mut dt = [0.0; MAX_VAR];
        dt[config.dim.energy_index()] = 1.0;
        dt
    }
}

/// Arbitrary equation of state: `κ = k + Cp μ_t/Pr_t` with nodal `k`, `Cp`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GeneralEos;

impl FluidVariant for GeneralEos {
    const MODEL: FluidModel = FluidModel::GeneralEos;
    const CONSERVATIVE: bool = true;

    #[inline]
    fn conductivity(config: &ViscousConfig, mean: &MeanState) -> f64 {
        mean.primitive.thermal_conductivity
            + mean.primitive.cp * mean.primitive.eddy_viscosity / config.gas.prandtl_turbulent
    }

    #[inline]
    fn conductivity_sensitivity(config: &ViscousConfig, mean: &MeanState) -> (f64, f64) {
        (0.0, mean.primitive.cp / config.gas.prandtl_turbulent)
    }

    #[inline]
    fn temperature_sensitivity(config: &ViscousConfig, node: &NodeState) -> FluxVector {
        general_eos_temperature_gradient(config.dim, &node.primitive, &node.secondary)
    }
}
