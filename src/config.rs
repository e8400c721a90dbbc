//! Kernel configuration.
//!
//! A [`ViscousConfig`] is built once, validated, and then owned by the flux
//! kernel for its whole lifetime.
//!
//! # Example
//!
//! ```
//! use visflux::config::ViscousConfig;
//! use visflux::physics::TurbulenceModel;
//! use visflux::types::Dim;
//!
//! let config = ViscousConfig::compressible(Dim::Three)
//!     .with_turbulence(TurbulenceModel::sst())
//!     .with_qcr(true);
//! assert!(config.validate().is_ok());
//!
//! let bad = ViscousConfig::incompressible(Dim::Two).with_qcr(true);
//! assert!(bad.validate().is_err());
//! ```

use std::fmt;

use crate::error::FluxError;
use crate::physics::{GasProperties, TurbulenceModel, ViscosityModel};
use crate::types::Dim;
use crate::uq::UqConfig;

/// Fluid model, selecting the variable set and the flux rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FluidModel {
    /// Calorically perfect gas, variables `[ρ, ρu, ρE]`.
    #[default]
    Compressible,
    /// Incompressible flow, variables `[p, u, T]`.
    Incompressible,
    /// Arbitrary equation of state, variables `[ρ, ρu, ρE]`.
    GeneralEos,
}

impl FluidModel {
    /// Short lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            FluidModel::Compressible => "compressible",
            FluidModel::Incompressible => "incompressible",
            FluidModel::GeneralEos => "general-eos",
        }
    }
}

impl fmt::Display for FluidModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration of an averaged-gradient viscous flux kernel.
#[derive(Clone, Debug, PartialEq)]
pub struct ViscousConfig {
    /// Spatial dimension
    pub dim: Dim,
    /// Fluid model
    pub model: FluidModel,
    /// Compute Jacobians for implicit time integration
    pub implicit: bool,
    /// Correct mean gradients along the edge (otherwise face-normal mode)
    pub gradient_correction: bool,
    /// Turbulence closure supplying μ_t, k and the SST blending data
    pub turbulence: TurbulenceModel,
    /// Quadratic constitutive relation
    pub qcr: bool,
    /// Reynolds-stress eigenspace perturbation
    pub uq: Option<UqConfig>,
    /// Rescale the stress with wall-function shear stresses
    pub wall_functions: bool,
    /// Solve the energy equation (incompressible only)
    pub energy_equation: bool,
    /// Gas constants
    pub gas: GasProperties,
    /// Laminar viscosity law
    pub viscosity: ViscosityModel,
}

impl ViscousConfig {
    fn new(dim: Dim, model: FluidModel) -> Self {
        Self {
            dim,
            model,
            implicit: true,
            gradient_correction: true,
            turbulence: TurbulenceModel::Laminar,
            qcr: false,
            uq: None,
            wall_functions: false,
            energy_equation: true,
            gas: GasProperties::air(),
            viscosity: ViscosityModel::Constant,
        }
    }

    /// Compressible ideal-gas configuration with default settings.
    pub fn compressible(dim: Dim) -> Self {
        Self::new(dim, FluidModel::Compressible)
    }

    /// Incompressible configuration with default settings.
    pub fn incompressible(dim: Dim) -> Self {
        Self::new(dim, FluidModel::Incompressible)
    }

    /// General equation-of-state configuration with default settings.
    pub fn general_eos(dim: Dim) -> Self {
        Self::new(dim, FluidModel::GeneralEos)
    }

    /// Enable or disable the Jacobians.
    pub fn with_implicit(mut self, implicit: bool) -> Self {
        self.implicit = implicit;
        self
    }

    /// Enable or disable the edge-based gradient correction.
    pub fn with_gradient_correction(mut self, enabled: bool) -> Self {
        self.gradient_correction = enabled;
        self
    }

    /// Set the turbulence closure.
    pub fn with_turbulence(mut self, turbulence: TurbulenceModel) -> Self {
        self.turbulence = turbulence;
        self
    }

    /// Enable or disable the quadratic constitutive relation.
    pub fn with_qcr(mut self, enabled: bool) -> Self {
        self.qcr = enabled;
        self
    }

    /// Enable the Reynolds-stress perturbation.
    pub fn with_uq(mut self, uq: UqConfig) -> Self {
        self.uq = Some(uq);
        self
    }

    /// Enable or disable wall-function stress rescaling.
    pub fn with_wall_functions(mut self, enabled: bool) -> Self {
        self.wall_functions = enabled;
        self
    }

    /// Enable or disable the energy equation.
    pub fn with_energy_equation(mut self, enabled: bool) -> Self {
        self.energy_equation = enabled;
        self
    }

    /// Set the gas constants.
    pub fn with_gas(mut self, gas: GasProperties) -> Self {
        self.gas = gas;
        self
    }

    /// Set the laminar viscosity law.
    pub fn with_viscosity(mut self, viscosity: ViscosityModel) -> Self {
        self.viscosity = viscosity;
        self
    }

    /// Whether the TKE gradient and diffusion flux take part.
    pub fn transports_tke(&self) -> bool {
        self.turbulence.sst_constants().is_some()
    }

    /// Check parameter ranges and feature availability.
    pub fn validate(&self) -> Result<(), FluxError> {
        self.gas.validate()?;
        self.viscosity.validate()?;

        let model = self.model.name();
        let unsupported = |feature| FluxError::UnsupportedFeature { feature, model };

        if let Some(uq) = &self.uq {
            uq.validate()?;
            if !self.transports_tke() {
                return Err(FluxError::UnsupportedFeature {
                    feature: "Reynolds-stress perturbation",
                    model: self.turbulence.name(),
                });
            }
        }

        match self.model {
            FluidModel::Incompressible => {
                if self.uq.is_some() {
                    return Err(unsupported("Reynolds-stress perturbation"));
                }
                if self.qcr {
                    return Err(unsupported("QCR"));
                }
                if self.wall_functions {
                    return Err(unsupported("wall functions"));
                }
            }
            FluidModel::Compressible | FluidModel::GeneralEos => {
                if !self.energy_equation {
                    return Err(unsupported("disabling the energy equation"));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uq::LimitingState;

    #[test]
    fn test_defaults() {
        let config = ViscousConfig::compressible(Dim::Two);
        assert!(config.implicit);
        assert!(config.gradient_correction);
        assert!(config.energy_equation);
        assert!(!config.transports_tke());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_uq_requires_tke() {
        let config = ViscousConfig::compressible(Dim::Three).with_uq(UqConfig::default());
        assert!(config.validate().is_err());

        let config = config.with_turbulence(TurbulenceModel::SpalartAllmaras);
        assert!(config.validate().is_err());

        let config = config.with_turbulence(TurbulenceModel::sst());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_uq_range_checked() {
        let config = ViscousConfig::general_eos(Dim::Three)
            .with_turbulence(TurbulenceModel::sst())
            .with_uq(UqConfig::new(LimitingState::OneComponent).with_delta_b(-0.5));
        assert!(matches!(
            config.validate(),
            Err(FluxError::InvalidParameter {
                name: "uq_delta_b",
                ..
            })
        ));
    }

    #[test]
    fn test_incompressible_restrictions() {
        let base = ViscousConfig::incompressible(Dim::Two);
        assert!(base.clone().with_energy_equation(false).validate().is_ok());
        assert!(base.clone().with_wall_functions(true).validate().is_err());
        assert!(
            base.with_turbulence(TurbulenceModel::sst())
                .with_uq(UqConfig::default())
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_energy_switch_only_for_incompressible() {
        let config = ViscousConfig::compressible(Dim::Two).with_energy_equation(false);
        assert!(matches!(
            config.validate(),
            Err(FluxError::UnsupportedFeature { .. })
        ));
    }

    #[test]
    fn test_invalid_gas_rejected() {
        let config = ViscousConfig::compressible(Dim::Two)
            .with_gas(GasProperties::new(1.4, 287.0, 0.0, 0.9));
        assert!(config.validate().is_err());
    }
}
