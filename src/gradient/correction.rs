//! Secant gradient correction along an edge.

use crate::geometry::EdgeGeometry;
use crate::state::{MeanState, NodeState};
use crate::types::{Dim, Vector, dot};

/// Correct one gradient vector along `edge_vector`.
///
/// # Arguments
/// * `dim` - Spatial dimension
/// * `gradient` - Gradient to correct in place
/// * `delta` - Difference `φ_j - φ_i` of the endpoint values
/// * `edge_vector` - Vector from endpoint i to endpoint j
/// * `dist_squared` - `|edge_vector|²`, must be non-zero
#[inline]
pub fn correct_gradient(
    dim: Dim,
    gradient: &mut Vector,
    delta: f64,
    edge_vector: &Vector,
    dist_squared: f64,
) {
    let edge_projection = dot(dim, gradient, edge_vector);
    let factor = (edge_projection - delta) / dist_squared;
    for d in 0..dim.get() {
        gradient[d] -= factor * edge_vector[d];
    }
}

/// Correct every mean gradient of an edge.
///
/// Temperature, velocity and pressure gradients are always corrected; the
/// turbulence kinetic energy gradient only when `include_tke` is set. Nothing
/// happens in face-normal mode or on a zero-length edge, and the return value
/// tells whether the correction was applied.
pub fn correct_mean_gradients(
    mean: &mut MeanState,
    node_i: &NodeState,
    node_j: &NodeState,
    geometry: &EdgeGeometry,
    include_tke: bool,
) -> bool {
    if !geometry.edge_based || geometry.is_degenerate() {
        return false;
    }

    let dim = geometry.dim;
    let e = &geometry.edge_vector;
    let dist2 = geometry.dist_squared;
    let (pi, pj) = (&node_i.primitive, &node_j.primitive);

    correct_gradient(
        dim,
        &mut mean.gradient.temperature,
        pj.temperature - pi.temperature,
        e,
        dist2,
    );
    for k in 0..dim.get() {
        correct_gradient(
            dim,
            &mut mean.gradient.velocity[k],
            pj.velocity[k] - pi.velocity[k],
            e,
            dist2,
        );
    }
    correct_gradient(
        dim,
        &mut mean.gradient.pressure,
        pj.pressure - pi.pressure,
        e,
        dist2,
    );

    if include_tke {
        correct_gradient(
            dim,
            &mut mean.tke_gradient,
            node_j.turbulence.tke - node_i.turbulence.tke,
            e,
            dist2,
        );
    }
    true
}
