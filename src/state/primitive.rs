//! Primitive variables and their gradients.

use std::ops::{Add, Mul};

use crate::types::{MAX_DIM, Tensor, Vector, ZERO_TENSOR};

/// Primitive state at one point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PrimitiveState {
    /// Static temperature T
    pub temperature: f64,
    /// Velocity components (u_1, u_2, u_3)
    pub velocity: Vector,
    /// Static pressure p
    pub pressure: f64,
    /// Density ρ
    pub density: f64,
    /// Total enthalpy h = e + p/ρ + |u|²/2 (general equation of state)
    pub enthalpy: f64,
    /// Laminar (molecular) viscosity μ
    pub laminar_viscosity: f64,
    /// Eddy viscosity μ_t
    pub eddy_viscosity: f64,
    /// Thermal conductivity k (incompressible and general equation of state)
    pub thermal_conductivity: f64,
    /// Specific heat at constant pressure Cp (general equation of state)
    pub cp: f64,
}

impl PrimitiveState {
    /// Squared velocity magnitude over `dim` components.
    #[inline]
    pub fn velocity_squared(&self, dim: usize) -> f64 {
        (0..dim).map(|k| self.velocity[k] * self.velocity[k]).sum()
    }

    /// Arithmetic mean of two states.
    #[inline]
    pub fn mean(a: &Self, b: &Self) -> Self {
        0.5 * (*a + *b)
    }
}

impl Add for PrimitiveState {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let mut velocity = [0.0; MAX_DIM];
        for (k, v) in velocity.iter_mut().enumerate() {
            *v = self.velocity[k] + other.velocity[k];
        }
        Self {
            temperature: self.temperature + other.temperature,
            velocity,
            pressure: self.pressure + other.pressure,
            density: self.density + other.density,
            enthalpy: self.enthalpy + other.enthalpy,
            laminar_viscosity: self.laminar_viscosity + other.laminar_viscosity,
            eddy_viscosity: self.eddy_viscosity + other.eddy_viscosity,
            thermal_conductivity: self.thermal_conductivity + other.thermal_conductivity,
            cp: self.cp + other.cp,
        }
    }
}

impl Mul<PrimitiveState> for f64 {
    type Output = PrimitiveState;

    fn mul(self, state: PrimitiveState) -> PrimitiveState {
        PrimitiveState {
            temperature: self * state.temperature,
            velocity: state.velocity.map(|v| self * v),
            pressure: self * state.pressure,
            density: self * state.density,
            enthalpy: self * state.enthalpy,
            laminar_viscosity: self * state.laminar_viscosity,
            eddy_viscosity: self * state.eddy_viscosity,
            thermal_conductivity: self * state.thermal_conductivity,
            cp: self * state.cp,
        }
    }
}

/// Gradients of the primitive variables that enter the viscous flux.
///
/// `velocity[i][j] = ∂u_i/∂x_j`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PrimitiveGradient {
    /// ∇T
    pub temperature: Vector,
    /// Velocity-gradient tensor
    pub velocity: Tensor,
    /// ∇p (only corrected, never used by the flux itself)
    pub pressure: Vector,
}

impl PrimitiveGradient {
    /// Zero gradient.
    pub const fn zero() -> Self {
        Self {
            temperature: [0.0; MAX_DIM],
            velocity: ZERO_TENSOR,
            pressure: [0.0; MAX_DIM],
        }
    }

    /// Arithmetic mean of two gradients.
    pub fn mean(a: &Self, b: &Self) -> Self {
        let mut out = Self::zero();
        for k in 0..MAX_DIM {
            out.temperature[k] = 0.5 * (a.temperature[k] + b.temperature[k]);
            out.pressure[k] = 0.5 * (a.pressure[k] + b.pressure[k]);
            for m in 0..MAX_DIM {
                out.velocity[k][m] = 0.5 * (a.velocity[k][m] + b.velocity[k][m]);
            }
        }
        out
    }
}
