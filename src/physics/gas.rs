//! Calorically perfect gas properties.

use crate::error::FluxError;

/// Thermodynamic and transport constants of the working fluid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GasProperties {
    /// Ratio of specific heats γ
    pub gamma: f64,
    /// Specific gas constant R
    pub gas_constant: f64,
    /// Laminar Prandtl number
    pub prandtl_laminar: f64,
    /// Turbulent Prandtl number
    pub prandtl_turbulent: f64,
}

impl Default for GasProperties {
    fn default() -> Self {
        Self::air()
    }
}

impl GasProperties {
    /// Create gas properties.
    pub fn new(gamma: f64, gas_constant: f64, prandtl_laminar: f64, prandtl_turbulent: f64) -> Self {
        Self {
            gamma,
            gas_constant,
            prandtl_laminar,
            prandtl_turbulent,
        }
    }

    /// Standard air (γ = 1.4, R = 287.058 J/(kg·K), Pr = 0.72, Pr_t = 0.9).
    pub fn air() -> Self {
        Self::new(1.4, 287.058, 0.72, 0.9)
    }

    /// Specific heat at constant pressure Cp = γR/(γ-1).
    #[inline]
    pub fn cp(&self) -> f64 {
        self.gamma / (self.gamma - 1.0) * self.gas_constant
    }

    /// Specific heat at constant volume Cv = R/(γ-1).
    #[inline]
    pub fn cv(&self) -> f64 {
        self.gas_constant / (self.gamma - 1.0)
    }

    /// Effective conductivity Cp (μ/Pr + μ_t/Pr_t).
    #[inline]
    pub fn conductivity(&self, laminar_viscosity: f64, eddy_viscosity: f64) -> f64 {
        self.cp()
            * (laminar_viscosity / self.prandtl_laminar + eddy_viscosity / self.prandtl_turbulent)
    }

    /// Check that all constants are physically admissible.
    pub fn validate(&self) -> Result<(), FluxError> {
        if !(self.gamma > 1.0) {
            return Err(FluxError::invalid("gamma", self.gamma, "must be greater than 1"));
        }
        if !(self.gas_constant > 0.0) {
            return Err(FluxError::invalid(
                "gas_constant",
                self.gas_constant,
                "must be positive",
            ));
        }
        if !(self.prandtl_laminar > 0.0) {
            return Err(FluxError::invalid(
                "prandtl_laminar",
                self.prandtl_laminar,
                "must be positive",
            ));
        }
        if !(self.prandtl_turbulent > 0.0) {
            return Err(FluxError::invalid(
                "prandtl_turbulent",
                self.prandtl_turbulent,
                "must be positive",
            ));
        }
        Ok(())
    }
}
