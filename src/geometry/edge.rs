//! Edge geometry: endpoint coordinates, area-weighted normal and derived
//! projections.

use crate::types::{Dim, MAX_DIM, Vector, dot, norm};

/// Geometry of one edge `i → j`, recomputed on every edge visit.
///
/// `normal` is the area-weighted dual-face normal (not unit length). When the
/// kernel runs without gradient correction the edge vector is replaced by the
/// face normal, so projections fall back to face-normal quantities.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeGeometry {
    /// Spatial dimension.
    pub dim: Dim,
    /// Coordinates of endpoint i.
    pub coord_i: Vector,
    /// Coordinates of endpoint j.
    pub coord_j: Vector,
    /// Area-weighted normal of the dual face.
    pub normal: Vector,
    /// Face area `|normal|`.
    pub area: f64,
    /// `normal / area`.
    pub unit_normal: Vector,
    /// `coord_j - coord_i`, or `normal` in face-normal mode.
    pub edge_vector: Vector,
    /// `|edge_vector|²`.
    pub dist_squared: f64,
    /// `edge_vector · normal`.
    pub proj_vector_on_normal: f64,
    /// Control volume of endpoint i (for the degenerate-edge pseudo-distance).
    pub volume_i: f64,
    /// Whether `edge_vector` is the coordinate difference.
    pub edge_based: bool,
}

impl EdgeGeometry {
    /// Build edge geometry using the coordinate difference as edge vector.
    ///
    /// # Arguments
    /// * `dim` - Spatial dimension
    /// * `coord_i`, `coord_j` - Endpoint coordinates
    /// * `normal` - Area-weighted dual-face normal, oriented from i to j
    /// * `volume_i` - Control volume of endpoint i
    pub fn new(dim: Dim, coord_i: Vector, coord_j: Vector, normal: Vector, volume_i: f64) -> Self {
        Self::build(dim, coord_i, coord_j, normal, volume_i, true)
    }

    /// Build edge geometry in face-normal mode (no edge-based gradients).
    pub fn face_normal(
        dim: Dim,
        coord_i: Vector,
        coord_j: Vector,
        normal: Vector,
        volume_i: f64,
    ) -> Self {
        Self::build(dim, coord_i, coord_j, normal, volume_i, false)
    }

    pub(crate) fn build(
        dim: Dim,
        coord_i: Vector,
        coord_j: Vector,
        normal: Vector,
        volume_i: f64,
        edge_based: bool,
    ) -> Self {
        let area = norm(dim, &normal);
        let mut unit_normal = [0.0; MAX_DIM];
        let mut edge_vector = [0.0; MAX_DIM];
        for d in 0..dim.get() {
            unit_normal[d] = normal[d] / area;
            edge_vector[d] = if edge_based {
                coord_j[d] - coord_i[d]
            } else {
                normal[d]
            };
        }
        let dist_squared = dot(dim, &edge_vector, &edge_vector);
        let proj_vector_on_normal = dot(dim, &edge_vector, &normal);

        Self {
            dim,
            coord_i,
            coord_j,
            normal,
            area,
            unit_normal,
            edge_vector,
            dist_squared,
            proj_vector_on_normal,
            volume_i,
            edge_based,
        }
    }

    /// Same edge, with the edge-vector mode switched.
    pub fn with_edge_based(self, edge_based: bool) -> Self {
        if edge_based == self.edge_based {
            return self;
        }
        Self::build(
            self.dim,
            self.coord_i,
            self.coord_j,
            self.normal,
            self.volume_i,
            edge_based,
        )
    }

    /// True if the edge has zero length.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.dist_squared == 0.0
    }

    /// Squared distance used by the Jacobian kernels.
    ///
    /// Edge-based geometry with a non-zero length uses `dist_squared`. In
    /// face-normal mode, or for a zero-length edge, the volume-derived
    /// pseudo-distance `-4 V_i` is substituted. A zero return value means the
    /// geometric Jacobian terms must be skipped.
    pub fn jacobian_dist_squared(&self) -> f64 {
        if self.edge_based && !self.is_degenerate() {
            self.dist_squared
        } else {
            log::trace!(
                "edge uses volume pseudo-distance (edge_based = {}, volume_i = {})",
                self.edge_based,
                self.volume_i
            );
            -4.0 * self.volume_i
        }
    }
}
