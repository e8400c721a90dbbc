//! Edge-loop helper.
//!
//! Evaluates a viscous flux kernel over a list of edges and scatter-adds the
//! result into a point-wise residual and a block-sparse Jacobian. Edges whose
//! projected flux contains NaN are dropped and reported.
//!
//! | Block | Contribution |
//! |---|---|
//! | residual `i` | `-F` |
//! | residual `j` | `+F` |
//! | `(i, i)` | `-J_i` |
//! | `(i, j)` | `-J_j` |
//! | `(j, i)` | `+J_i` |
//! | `(j, j)` | `+J_j` |

mod residual;

#[cfg(feature = "parallel")]
pub use residual::assemble_viscous_residual_parallel;
pub use residual::{MeshEdge, ViscousResidual, assemble_viscous_residual};
