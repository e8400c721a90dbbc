//! State of one edge endpoint as supplied by the external solver.

use crate::types::Vector;

use super::primitive::{PrimitiveGradient, PrimitiveState};

/// Scalars produced by the turbulence solver at one point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TurbulenceScalars {
    /// Turbulence kinetic energy k
    pub tke: f64,
    /// Specific dissipation rate ω
    pub omega: f64,
    /// SST blending function F1
    pub f1: f64,
    /// SST blending function F2
    pub f2: f64,
    /// Vorticity magnitude |Ω|
    pub vorticity_magnitude: f64,
    /// ∇k
    pub tke_gradient: Vector,
}

impl TurbulenceScalars {
    /// Scalars with only the turbulence kinetic energy set.
    pub fn with_tke(tke: f64) -> Self {
        Self {
            tke,
            ..Default::default()
        }
    }
}

/// Temperature sensitivities supplied by a general equation of state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EosSecondary {
    /// ∂T/∂ρ at constant internal energy
    pub dt_drho_e: f64,
    /// ∂T/∂e at constant density
    pub dt_de_rho: f64,
}

impl EosSecondary {
    /// Create a new pair of temperature sensitivities.
    pub fn new(dt_drho_e: f64, dt_de_rho: f64) -> Self {
        Self {
            dt_drho_e,
            dt_de_rho,
        }
    }
}

/// Everything the kernel reads about one edge endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NodeState {
    /// Primitive variables
    pub primitive: PrimitiveState,
    /// Primitive gradients
    pub gradient: PrimitiveGradient,
    /// Turbulence scalars
    pub turbulence: TurbulenceScalars,
    /// Wall-function shear stress; set through
    /// [`with_wall_shear_stress`](NodeState::with_wall_shear_stress)
    pub(crate) wall_shear_stress: Option<f64>,
    /// Equation-of-state temperature sensitivities (general EOS only)
    pub secondary: EosSecondary,
}

impl NodeState {
    /// Node state from primitives and gradients, with no turbulence data.
    pub fn new(primitive: PrimitiveState, gradient: PrimitiveGradient) -> Self {
        Self {
            primitive,
            gradient,
            ..Default::default()
        }
    }

    /// Attach turbulence scalars.
    pub fn with_turbulence(mut self, turbulence: TurbulenceScalars) -> Self {
        self.turbulence = turbulence;
        self
    }

    /// Attach a wall-function shear stress.
    ///
    /// Non-positive values mean "not available", matching the sentinel used by
    /// wall-function implementations.
    pub fn with_wall_shear_stress(mut self, tau_wall: f64) -> Self {
        self.wall_shear_stress = (tau_wall > 0.0).then_some(tau_wall);
        self
    }

    /// Wall-function shear stress, when a wall model provides one.
    #[inline]
    pub fn wall_shear_stress(&self) -> Option<f64> {
        self.wall_shear_stress
    }

    /// Attach equation-of-state temperature sensitivities.
    pub fn with_secondary(mut self, secondary: EosSecondary) -> Self {
        self.secondary = secondary;
        self
    }
}
