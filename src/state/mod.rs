//! Endpoint and edge-mean flow states.
//!
//! The external solver owns one [`NodeState`] per mesh point; the kernel
//! reads the two endpoint states of an edge and builds a [`MeanState`] from
//! them.
//!
//! Primitive quantities are stored in named fields rather than in a
//! model-specific index layout. Each fluid model reads the fields it needs:
//!
//! | Model | Primitive fields used | Flow variables |
//! |---|---|---|
//! | Compressible | T, u, p, ρ, μ, μ_t | `[ρ, ρu, ρE]` |
//! | Incompressible | p, u, T, ρ, μ, μ_t, k | `[p, u, T]` |
//! | General EOS | T, u, p, ρ, h, μ, μ_t, k, Cp + `∂T/∂ρ`, `∂T/∂e` | `[ρ, ρu, ρE]` |

mod conservative;
mod mean;
mod node;
mod primitive;

pub use conservative::{
    general_eos_primitive, ideal_gas_conservative, ideal_gas_primitive,
    incompressible_primitive, incompressible_variables,
};
pub use mean::MeanState;
pub use node::{EosSecondary, NodeState, TurbulenceScalars};
pub use primitive::{PrimitiveGradient, PrimitiveState};
