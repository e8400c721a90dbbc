//! Trait-based viscous flux abstraction.
//!
//! The residual driver only needs [`ViscousFlux`]. Concrete kernels are the
//! generic [`AvgGradFlux`] instantiations; [`StandardViscousFlux`] dispatches
//! between them by enum matching and [`BoxedViscousFlux`] by virtual call.
//!
//! # Example
//! ```
//! use visflux::config::ViscousConfig;
//! use visflux::flux::{EdgeContext, ViscousFlux, create_viscous_flux};
//! use visflux::geometry::EdgeGeometry;
//! use visflux::state::{NodeState, PrimitiveGradient, PrimitiveState};
//! use visflux::types::Dim;
//!
//! let flux = create_viscous_flux(ViscousConfig::compressible(Dim::Two)).unwrap();
//!
//! let node = NodeState::new(
//!     PrimitiveState {
//!         temperature: 300.0,
//!         density: 1.2,
//!         laminar_viscosity: 1.8e-5,
//!         ..Default::default()
//!     },
//!     PrimitiveGradient::zero(),
//! );
//! let geometry = EdgeGeometry::new(
//!     Dim::Two,
//!     [0.0, 0.0, 0.0],
//!     [1.0, 0.0, 0.0],
//!     [0.5, 0.0, 0.0],
//!     1.0,
//! );
//! let result = flux.compute_residual(&EdgeContext::new(geometry, &node, &node));
//! assert_eq!(result.projected_flux(), &[0.0; 4]);
//! assert!(result.jacobian_i.is_some());
//! ```

use std::sync::Arc;

use crate::config::{FluidModel, ViscousConfig};
use crate::error::FluxError;
use crate::recording::Recording;
use crate::types::Dim;

use super::context::{EdgeContext, FluxResult};
use super::kernel::{AvgGradFlux, CompressibleFlux, GeneralEosFlux, IncompressibleFlux};

// =============================================================================
// Viscous Flux Trait
// =============================================================================

/// Per-edge viscous flux evaluation.
///
/// # Implementation Notes
///
/// - `compute_residual` must not allocate and must not mutate shared state
/// - The flux is oriented from endpoint i to endpoint j
/// - Implicit kernels return both Jacobian blocks, explicit ones neither
pub trait ViscousFlux: Send + Sync {
    /// Projected flux of one edge and, for implicit kernels, its Jacobians.
    fn compute_residual(&self, ctx: &EdgeContext<'_>) -> FluxResult;

    /// Human-readable name for debugging and logging.
    fn name(&self) -> &'static str;

    /// Spatial dimension.
    fn dim(&self) -> Dim;

    /// Number of flow variables.
    fn n_var(&self) -> usize {
        self.dim().n_var()
    }

    /// Whether Jacobians are computed.
    fn is_implicit(&self) -> bool;
}

// =============================================================================
// Standard Flux Enum (Zero-Cost Dispatch)
// =============================================================================

/// Enum wrapper for the built-in kernels.
#[derive(Clone, Debug)]
pub enum StandardViscousFlux {
    /// Calorically perfect gas
    Compressible(CompressibleFlux),
    /// Incompressible flow
    Incompressible(IncompressibleFlux),
    /// Arbitrary equation of state
    GeneralEos(GeneralEosFlux),
}

impl StandardViscousFlux {
    /// Build the kernel matching `config.model`.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: ViscousConfig) -> Result<Self, FluxError> {
        Ok(match config.model {
            FluidModel::Compressible => Self::Compressible(AvgGradFlux::new(config)?),
            FluidModel::Incompressible => Self::Incompressible(AvgGradFlux::new(config)?),
            FluidModel::GeneralEos => Self::GeneralEos(AvgGradFlux::new(config)?),
        })
    }

    /// Attach the differentiation tape the Jacobians must stay off.
    pub fn with_recording(self, recording: Arc<dyn Recording>) -> Self {
        match self {
            Self::Compressible(f) => Self::Compressible(f.with_recording(recording)),
            Self::Incompressible(f) => Self::Incompressible(f.with_recording(recording)),
            Self::GeneralEos(f) => Self::GeneralEos(f.with_recording(recording)),
        }
    }

    /// Kernel configuration.
    pub fn config(&self) -> &ViscousConfig {
        match self {
            Self::Compressible(f) => f.config(),
            Self::Incompressible(f) => f.config(),
            Self::GeneralEos(f) => f.config(),
        }
    }
}

impl ViscousFlux for StandardViscousFlux {
    #[inline]
    fn compute_residual(&self, ctx: &EdgeContext<'_>) -> FluxResult {
        match self {
            Self::Compressible(f) => f.compute_residual(ctx),
            Self::Incompressible(f) => f.compute_residual(ctx),
            Self::GeneralEos(f) => f.compute_residual(ctx),
        }
    }

    fn name(&self) -> &'static str {
        self.config().model.name()
    }

    fn dim(&self) -> Dim {
        self.config().dim
    }

    fn is_implicit(&self) -> bool {
        self.config().implicit
    }
}

// =============================================================================
// Boxed Flux (Runtime Polymorphism)
// =============================================================================

/// Type alias for a boxed kernel.
pub type BoxedViscousFlux = Box<dyn ViscousFlux>;

/// Create a boxed kernel from a configuration.
///
/// # Errors
/// Returns an error if the configuration is invalid.
pub fn create_viscous_flux(config: ViscousConfig) -> Result<BoxedViscousFlux, FluxError> {
    Ok(match config.model {
        FluidModel::Compressible => Box::new(CompressibleFlux::new(config)?),
        FluidModel::Incompressible => Box::new(IncompressibleFlux::new(config)?),
        FluidModel::GeneralEos => Box::new(GeneralEosFlux::new(config)?),
    })
}
