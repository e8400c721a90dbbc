//! Serial and parallel edge loops.

use std::collections::BTreeMap;

use crate::error::FluxError;
use crate::flux::{EdgeContext, FluxResult, ViscousFlux};
use crate::geometry::EdgeGeometry;
use crate::state::NodeState;
use crate::types::{EdgeIndex, FluxVector, JacobianBlock, MAX_VAR, PointIndex, ZERO_BLOCK};

/// One edge of the dual mesh.
#[derive(Clone, Copy, Debug)]
pub struct MeshEdge {
    /// First endpoint; the flux leaves this point
    pub i: PointIndex,
    /// Second endpoint; the flux enters this point
    pub j: PointIndex,
    /// Edge geometry
    pub geometry: EdgeGeometry,
}

impl MeshEdge {
    /// Create an edge between two points.
    pub fn new(i: PointIndex, j: PointIndex, geometry: EdgeGeometry) -> Self {
        Self { i, j, geometry }
    }
}

/// Accumulated viscous residual and Jacobian.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViscousResidual {
    /// Number of flow variables
    pub n_var: usize,
    /// Residual per point (first `n_var` entries meaningful)
    pub residual: Vec<FluxVector>,
    /// Non-zero Jacobian blocks keyed by (row point, column point)
    pub jacobian: BTreeMap<(PointIndex, PointIndex), JacobianBlock>,
    /// Edges whose contribution was dropped because the flux contained NaN
    pub dropped_edges: Vec<EdgeIndex>,
}

impl ViscousResidual {
    fn new(n_points: usize, n_var: usize) -> Self {
        Self {
            n_var,
            residual: vec![[0.0; MAX_VAR]; n_points],
            jacobian: BTreeMap::new(),
            dropped_edges: Vec::new(),
        }
    }

    /// Residual of one point.
    pub fn point_residual(&self, point: PointIndex) -> &[f64] {
        &self.residual[point.get()][..self.n_var]
    }

    /// Jacobian block of `(row, col)`, if any edge touched it.
    pub fn block(&self, row: PointIndex, col: PointIndex) -> Option<&JacobianBlock> {
        self.jacobian.get(&(row, col))
    }

    fn add_block(&mut self, row: PointIndex, col: PointIndex, sign: f64, jac: &JacobianBlock) {
        let n_var = self.n_var;
        let block = self.jacobian.entry((row, col)).or_insert(ZERO_BLOCK);
        for r in 0..n_var {
            for c in 0..n_var {
                block[r][c] += sign * jac[r][c];
            }
        }
    }

    fn scatter(&mut self, index: EdgeIndex, edge: &MeshEdge, result: &FluxResult) {
        if result.has_nan() {
            self.dropped_edges.push(index);
            return;
        }

        let (i, j) = (edge.i, edge.j);
        for var in 0..self.n_var {
            self.residual[i.get()][var] -= result.flux[var];
            self.residual[j.get()][var] += result.flux[var];
        }

        if let (Some(jac_i), Some(jac_j)) = (&result.jacobian_i, &result.jacobian_j) {
            self.add_block(i, i, -1.0, jac_i);
            self.add_block(i, j, -1.0, jac_j);
            self.add_block(j, i, 1.0, jac_i);
            self.add_block(j, j, 1.0, jac_j);
        }
    }

    fn report(&self, n_edges: usize) {
        if !self.dropped_edges.is_empty() {
            log::warn!(
                "viscous residual: dropped {} of {} edge contributions with NaN flux (first: {})",
                self.dropped_edges.len(),
                n_edges,
                self.dropped_edges[0],
            );
        }
    }
}

fn check_points(edges: &[MeshEdge], n_points: usize) -> Result<(), FluxError> {
    for (index, edge) in EdgeIndex::iter(edges.len()).zip(edges) {
        for point in [edge.i, edge.j] {
            if point.get() >= n_points {
                return Err(FluxError::PointOutOfRange {
                    edge: index,
                    point,
                    n_points,
                });
            }
        }
    }
    Ok(())
}

#[inline]
fn evaluate<F: ViscousFlux + ?Sized>(flux: &F, edge: &MeshEdge, nodes: &[NodeState]) -> FluxResult {
    let ctx = EdgeContext::new(edge.geometry, &nodes[edge.i.get()], &nodes[edge.j.get()]);
    flux.compute_residual(&ctx)
}

/// Evaluate every edge and accumulate residual and Jacobian.
///
/// # Arguments
/// * `flux` - Viscous flux kernel
/// * `edges` - Edge list
/// * `nodes` - One node state per point
///
/// # Errors
/// Returns an error if an edge references a point without a node state.
pub fn assemble_viscous_residual<F: ViscousFlux + ?Sized>(
    flux: &F,
    edges: &[MeshEdge],
    nodes: &[NodeState],
) -> Result<ViscousResidual, FluxError> {
    check_points(edges, nodes.len())?;

    let mut out = ViscousResidual::new(nodes.len(), flux.n_var());
    for (index, edge) in EdgeIndex::iter(edges.len()).zip(edges) {
        let result = evaluate(flux, edge, nodes);
        out.scatter(index, edge, &result);
    }
    out.report(edges.len());
    Ok(out)
}

/// Parallel version of [`assemble_viscous_residual`] using Rayon.
///
/// Edges are evaluated concurrently; the scatter-add runs serially in edge
/// order, so the result is identical to the serial loop.
///
/// # Errors
/// Returns an error if an edge references a point without a node state.
#[cfg(feature = "parallel")]
pub fn assemble_viscous_residual_parallel<F: ViscousFlux + ?Sized>(
    flux: &F,
    edges: &[MeshEdge],
    nodes: &[NodeState],
) -> Result<ViscousResidual, FluxError> {
    use rayon::prelude::*;

    check_points(edges, nodes.len())?;

    let results: Vec<FluxResult> = edges
        .par_iter()
        .map(|edge| evaluate(flux, edge, nodes))
        .collect();

    let mut out = ViscousResidual::new(nodes.len(), flux.n_var());
    for ((index, edge), result) in EdgeIndex::iter(edges.len()).zip(edges).zip(&results) {
        out.scatter(index, edge, result);
    }
    out.report(edges.len());
    Ok(out)
}
