//! # visflux
//!
//! Edge-based viscous fluxes and their exact Jacobians for finite-volume
//! Navier-Stokes and RANS solvers.
//!
//! This crate provides the per-edge building blocks of a vertex-centred
//! viscous discretisation:
//! - Edge-averaged gradients with secant correction along the edge
//! - Stress tensor with TKE, QCR and wall-function rescaling
//! - Eigenspace perturbation of the Reynolds-stress anisotropy (UQ)
//! - Heat and TKE diffusion fluxes
//! - Exact Jacobians w.r.t. the endpoint variables, kept off any
//!   differentiation tape
//! - Compressible, incompressible and general equation-of-state kernels
//! - An edge-loop helper that scatter-adds residual and block Jacobians
//!
//! # Example
//!
//! ```
//! use visflux::{CompressibleFlux, EdgeContext, EdgeGeometry, NodeState, ViscousConfig, ViscousFlux};
//! use visflux::state::{PrimitiveGradient, PrimitiveState};
//! use visflux::types::Dim;
//!
//! let flux = CompressibleFlux::new(ViscousConfig::compressible(Dim::Two)).unwrap();
//!
//! let node = |u: f64| {
//!     NodeState::new(
//!         PrimitiveState {
//!             temperature: 300.0,
//!             velocity: [u, 0.0, 0.0],
//!             density: 1.2,
//!             laminar_viscosity: 1.0,
//!             ..Default::default()
//!         },
//!         PrimitiveGradient::zero(),
//!     )
//! };
//! let (i, j) = (node(0.0), node(1.0));
//! let geometry = EdgeGeometry::new(
//!     Dim::Two,
//!     [0.0, 0.0, 0.0],
//!     [0.0, 1.0, 0.0],
//!     [0.0, 1.0, 0.0],
//!     1.0,
//! );
//!
//! let result = flux.compute_residual(&EdgeContext::new(geometry, &i, &j));
//! // Shear stress τ_xy = μ Δu / Δy
//! assert!((result.flux[1] - 1.0).abs() < 1e-12);
//! ```

pub mod assembly;
pub mod config;
pub mod constitutive;
pub mod error;
pub mod flux;
pub mod geometry;
pub mod gradient;
pub mod jacobian;
pub mod physics;
pub mod recording;
pub mod state;
pub mod types;
pub mod uq;

// Re-export main types for convenience
pub use assembly::{MeshEdge, ViscousResidual, assemble_viscous_residual};
#[cfg(feature = "parallel")]
pub use assembly::assemble_viscous_residual_parallel;
pub use config::{FluidModel, ViscousConfig};
pub use error::FluxError;
pub use flux::{
    AvgGradFlux, BoxedViscousFlux, CompressibleFlux, EdgeContext, FluxResult, GeneralEosFlux,
    IncompressibleFlux, StandardViscousFlux, ViscousFlux, create_viscous_flux,
};
pub use geometry::EdgeGeometry;
pub use physics::{GasProperties, SutherlandLaw, TurbulenceModel, ViscosityModel};
pub use recording::{NoRecording, PassiveScope, Recording, RecordingFlag};
pub use state::{EosSecondary, MeanState, NodeState, TurbulenceScalars};
pub use types::{Dim, EdgeIndex, PointIndex};
pub use uq::{LimitingState, UqConfig};
