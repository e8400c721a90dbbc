//! Per-edge input and output of a viscous flux evaluation.

use crate::geometry::EdgeGeometry;
use crate::state::NodeState;
use crate::types::{FluxVector, JacobianBlock};

/// Everything a kernel reads for one edge.
#[derive(Clone, Copy, Debug)]
pub struct EdgeContext<'a> {
    /// Edge geometry
    pub geometry: EdgeGeometry,
    /// State at endpoint i
    pub node_i: &'a NodeState,
    /// State at endpoint j
    pub node_j: &'a NodeState,
}

impl<'a> EdgeContext<'a> {
    /// Create a new edge context.
    #[inline]
    pub fn new(geometry: EdgeGeometry, node_i: &'a NodeState, node_j: &'a NodeState) -> Self {
        Self {
            geometry,
            node_i,
            node_j,
        }
    }
}

/// Projected viscous flux of one edge and, for implicit runs, its Jacobians.
///
/// Only the first `n_var` entries of `flux` and the leading `n_var × n_var`
/// part of each block are meaningful. The flux leaves endpoint i and enters
/// endpoint j.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FluxResult {
    /// Number of flow variables
    pub n_var: usize,
    /// Projected flux `F·n`
    pub flux: FluxVector,
    /// `∂(F·n)/∂U_i`
    pub jacobian_i: Option<JacobianBlock>,
    /// `∂(F·n)/∂U_j`
    pub jacobian_j: Option<JacobianBlock>,
}

impl FluxResult {
    /// Result without Jacobians.
    pub fn explicit(n_var: usize, flux: FluxVector) -> Self {
        Self {
            n_var,
            flux,
            jacobian_i: None,
            jacobian_j: None,
        }
    }

    /// Result with both Jacobian blocks.
    pub fn implicit(
        n_var: usize,
        flux: FluxVector,
        jacobian_i: JacobianBlock,
        jacobian_j: JacobianBlock,
    ) -> Self {
        Self {
            n_var,
            flux,
            jacobian_i: Some(jacobian_i),
            jacobian_j: Some(jacobian_j),
        }
    }

    /// The meaningful flux entries.
    #[inline]
    pub fn projected_flux(&self) -> &[f64] {
        &self.flux[..self.n_var]
    }

    /// True if any flux entry is NaN.
    #[inline]
    pub fn has_nan(&self) -> bool {
        self.projected_flux().iter().any(|v| v.is_nan())
    }
}
