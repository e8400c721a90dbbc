//! Error types for flux kernel construction.
//!
//! Per-edge evaluation never fails: numerical faults surface as NaN/Inf in the
//! returned flux. Only configuration problems are reported as errors.

use thiserror::Error;

use crate::types::{EdgeIndex, PointIndex};

/// Errors that can occur while configuring a viscous flux kernel.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluxError {
    /// Spatial dimension other than 2 or 3.
    #[error("Unsupported spatial dimension: {0} (expected 2 or 3)")]
    InvalidDimension(usize),

    /// A numeric parameter is outside its admissible range.
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A feature was requested for a fluid model that does not provide it.
    #[error("{feature} is not available for the {model} model")]
    UnsupportedFeature {
        feature: &'static str,
        model: &'static str,
    },

    /// A kernel was constructed from a configuration for another fluid model.
    #[error("Configuration is for the {found} fluid model, kernel expects {expected}")]
    ModelMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// An edge references a point without a node state.
    #[error("Edge {edge} references {point}, but only {n_points} node states were given")]
    PointOutOfRange {
        edge: EdgeIndex,
        point: PointIndex,
        n_points: usize,
    },
}

impl FluxError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        FluxError::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}
