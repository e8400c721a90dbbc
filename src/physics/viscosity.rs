//! Laminar viscosity models.
//!
//! Sutherland's law:
//!
//! μ(T) = μ_ref (T/T_ref)^{3/2} (T_ref + S) / (T + S)
//!
//! dμ/dT = μ_ref (T_ref + S) / T_ref^{3/2} · (3 S √T + T^{3/2}) / (2 (T + S)²)

use crate::error::FluxError;

/// Sutherland's law constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SutherlandLaw {
    /// Reference viscosity μ_ref
    pub mu_ref: f64,
    /// Reference temperature T_ref
    pub t_ref: f64,
    /// Sutherland constant S
    pub s: f64,
}

impl SutherlandLaw {
    /// Create a Sutherland law.
    pub fn new(mu_ref: f64, t_ref: f64, s: f64) -> Self {
        Self { mu_ref, t_ref, s }
    }

    /// Standard air constants (μ_ref = 1.716e-5 Pa·s, T_ref = 273.15 K, S = 110.4 K).
    pub fn air() -> Self {
        Self::new(1.716e-5, 273.15, 110.4)
    }

    /// Laminar viscosity at temperature `t`.
    #[inline]
    pub fn viscosity(&self, t: f64) -> f64 {
        self.mu_ref * (t / self.t_ref).powf(1.5) * (self.t_ref + self.s) / (t + self.s)
    }

    /// Derivative dμ/dT at temperature `t`.
    #[inline]
    pub fn derivative(&self, t: f64) -> f64 {
        self.mu_ref * (self.t_ref + self.s) / self.t_ref.powf(1.5)
            * (3.0 * self.s * t.sqrt() + t.powf(1.5))
            / (2.0 * (t + self.s).powi(2))
    }
}

/// How the laminar viscosity depends on the state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ViscosityModel {
    /// Viscosity independent of temperature.
    #[default]
    Constant,
    /// Temperature-dependent viscosity following Sutherland's law.
    Sutherland(SutherlandLaw),
}

impl ViscosityModel {
    /// Whether μ varies with temperature (adds the viscosity Jacobian).
    pub fn is_temperature_dependent(&self) -> bool {
        matches!(self, ViscosityModel::Sutherland(_))
    }

    /// dμ/dT at temperature `t` (zero for constant viscosity).
    #[inline]
    pub fn derivative(&self, t: f64) -> f64 {
        match self {
            ViscosityModel::Constant => 0.0,
            ViscosityModel::Sutherland(law) => law.derivative(t),
        }
    }

    /// Viscosity at temperature `t`, or `None` when μ is a free input.
    pub fn viscosity(&self, t: f64) -> Option<f64> {
        match self {
            ViscosityModel::Constant => None,
            ViscosityModel::Sutherland(law) => Some(law.viscosity(t)),
        }
    }

    /// Check that the constants are physically admissible.
    pub fn validate(&self) -> Result<(), FluxError> {
        if let ViscosityModel::Sutherland(law) = self {
            if !(law.mu_ref > 0.0) {
                return Err(FluxError::invalid("mu_ref", law.mu_ref, "must be positive"));
            }
            if !(law.t_ref > 0.0) {
                return Err(FluxError::invalid("t_ref", law.t_ref, "must be positive"));
            }
            if !(law.s >= 0.0) {
                return Err(FluxError::invalid("sutherland_s", law.s, "must be non-negative"));
            }
        }
        Ok(())
    }
}
