//! Edge-mean state.

use crate::types::{MAX_DIM, Vector};

use super::node::NodeState;
use super::primitive::{PrimitiveGradient, PrimitiveState};

/// Arithmetic mean of the two endpoint states of an edge.
///
/// The gradients are corrected in place by
/// [`correct_mean_gradients`](crate::gradient::correct_mean_gradients) before
/// the constitutive relations are evaluated.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeanState {
    /// Mean primitive variables
    pub primitive: PrimitiveState,
    /// Mean primitive gradients
    pub gradient: PrimitiveGradient,
    /// Mean turbulence kinetic energy
    pub tke: f64,
    /// Mean ∇k
    pub tke_gradient: Vector,
    /// Mean wall-function shear stress
    pub wall_shear_stress: Option<f64>,
}

impl MeanState {
    /// Average two endpoint states.
    ///
    /// The wall shear stress is averaged when both endpoints provide one;
    /// otherwise the available value (if any) is used as is.
    pub fn from_nodes(node_i: &NodeState, node_j: &NodeState) -> Self {
        let mut tke_gradient = [0.0; MAX_DIM];
        for (k, g) in tke_gradient.iter_mut().enumerate() {
            *g = 0.5 * (node_i.turbulence.tke_gradient[k] + node_j.turbulence.tke_gradient[k]);
        }

        let wall_shear_stress = match (node_i.wall_shear_stress, node_j.wall_shear_stress) {
            (Some(a), Some(b)) => Some(0.5 * (a + b)),
            (Some(a), None) | (None, Some(a)) => Some(a),
            (None, None) => None,
        };

        Self {
            primitive: PrimitiveState::mean(&node_i.primitive, &node_j.primitive),
            gradient: PrimitiveGradient::mean(&node_i.gradient, &node_j.gradient),
            tke: 0.5 * (node_i.turbulence.tke + node_j.turbulence.tke),
            tke_gradient,
            wall_shear_stress,
        }
    }

    /// μ + μ_t
    #[inline]
    pub fn total_viscosity(&self) -> f64 {
        self.primitive.laminar_viscosity + self.primitive.eddy_viscosity
    }
}
