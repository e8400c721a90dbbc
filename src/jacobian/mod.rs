//! Exact linearisation of the projected viscous flux.
//!
//! All derivatives hold the nodal gradients, the frozen wall-function factor
//! and (unless a viscosity Jacobian is added explicitly) the transport
//! properties fixed. The dependence on the endpoint states enters through the
//! edge-corrected gradients, whose component along the edge is the secant
//! slope `(φ_j - φ_i)/|e|`, through the mean velocity in the work term and
//! through the endpoint temperatures of temperature-dependent properties.
//!
//! Row layout of every block: `[continuity, momentum_1..d, energy]`.
//! Columns are `[ρ, ρu_1..ρu_d, ρE]` for the compressible kernels and
//! `[p, u_1..u_d, T]` for the incompressible kernel.

mod heat;
mod incompressible;
mod projection;
mod stress;
mod viscosity;

pub use heat::{add_tke_density_terms, heat_flux_jacobians};
pub use incompressible::incompressible_jacobians;
pub use projection::project_jacobians;
pub use stress::{StressJacobian, stress_jacobians};
pub use viscosity::{
    add_eddy_viscosity_jacobian, add_laminar_viscosity_jacobian, projected_strain,
    viscosity_flux_sensitivity,
};
