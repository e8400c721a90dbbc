//! Averaged-gradient viscous fluxes.
//!
//! One kernel per fluid model, all sharing the same edge pipeline:
//! average the endpoint states, correct the mean gradients along the edge,
//! evaluate the stress tensor and heat flux, project onto the dual-face
//! normal, and optionally linearise.
//!
//! # Flux Trait
//!
//! The [`ViscousFlux`] trait is what a residual driver calls per edge.
//!
//! ## Built-in Kernels
//! - [`CompressibleFlux`]: calorically perfect gas, `[ρ, ρu, ρE]`
//! - [`IncompressibleFlux`]: `[p, u, T]`, optional energy equation
//! - [`GeneralEosFlux`]: arbitrary equation of state, `[ρ, ρu, ρE]`
//! - [`StandardViscousFlux`]: enum for zero-cost dispatch chosen at runtime

mod context;
mod kernel;
pub mod traits;
pub mod variant;

pub use context::{EdgeContext, FluxResult};
pub use kernel::{AvgGradFlux, CompressibleFlux, GeneralEosFlux, IncompressibleFlux};
pub use traits::{BoxedViscousFlux, StandardViscousFlux, ViscousFlux, create_viscous_flux};
pub use variant::{Compressible, FluidVariant, GeneralEos, Incompressible};
