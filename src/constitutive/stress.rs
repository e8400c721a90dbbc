//! Viscous stress tensor, quadratic constitutive relation and wall-function
//! rescaling.

use crate::types::{DELTA, Dim, MAX_DIM, Tensor, Vector, ZERO_TENSOR};

/// Empirical constant of the quadratic constitutive relation.
pub const QCR_C1: f64 = 0.3;

/// Floor of the squared velocity-gradient norm in the QCR rotation tensor.
const QCR_NORM_FLOOR: f64 = 1e-10;

/// Newtonian strain part `μ (∇u + ∇uᵀ - 2/3 (∇·u) δ)`.
///
/// With `viscosity = 1` this is the sensitivity of the stress to the
/// viscosity, which the Jacobian kernels reuse.
pub fn strain_stress(dim: Dim, grad: &Tensor, viscosity: f64) -> Tensor {
    let d = dim.get();
    let div: f64 = (0..d).map(|k| grad[k][k]).sum();
    let mut tau = ZERO_TENSOR;
    for i in 0..d {
        for j in 0..d {
            tau[i][j] =
                viscosity * (grad[j][i] + grad[i][j] - 2.0 / 3.0 * div * DELTA[i][j]);
        }
    }
    tau
}

/// Eddy-viscosity stress tensor.
///
/// τ_ij = μ_tot (∂u_j/∂x_i + ∂u_i/∂x_j) - 2/3 μ_tot (∇·u) δ_ij - 2/3 ρ k δ_ij
///
/// # Arguments
/// * `dim` - Spatial dimension
/// * `grad` - Velocity-gradient tensor
/// * `total_viscosity` - μ + μ_t
/// * `density` - ρ
/// * `tke` - Turbulence kinetic energy k (zero without a two-equation model)
pub fn stress_tensor(
    dim: Dim,
    grad: &Tensor,
    total_viscosity: f64,
    density: f64,
    tke: f64,
) -> Tensor {
    let mut tau = strain_stress(dim, grad, total_viscosity);
    let isotropic = 2.0 / 3.0 * density * tke;
    for k in 0..dim.get() {
        tau[k][k] -= isotropic;
    }
    tau
}

/// Stress tensor with an explicit Reynolds stress.
///
/// Only the laminar viscosity enters the strain term; the turbulent
/// contribution is `-ρ R_ij`.
pub fn perturbed_stress_tensor(
    dim: Dim,
    grad: &Tensor,
    laminar_viscosity: f64,
    density: f64,
    reynolds_stress: &Tensor,
) -> Tensor {
    let d = dim.get();
    let mut tau = strain_stress(dim, grad, laminar_viscosity);
    for i in 0..d {
        for j in 0..d {
            tau[i][j] -= density * reynolds_stress[i][j];
        }
    }
    tau
}

/// Quadratic constitutive relation (QCR2000).
///
/// τ_ij ← τ_ij - c1 Σ_k (O_ik τ_jk + O_jk τ_ik), with the normalised rotation
/// tensor `O_ik = (∂u_i/∂x_k - ∂u_k/∂x_i) / ‖∇u‖`.
///
/// Every product reads the linear stress `tau`, so the corrected tensor stays
/// symmetric.
pub fn apply_qcr(dim: Dim, tau: &Tensor, grad: &Tensor) -> Tensor {
    let d = dim.get();

    let mut norm2 = 0.0;
    for row in grad.iter().take(d) {
        for g in row.iter().take(d) {
            norm2 += g * g;
        }
    }
    let den = f64::max(norm2, QCR_NORM_FLOOR).sqrt();

    let mut rotation = ZERO_TENSOR;
    for i in 0..d {
        for k in 0..d {
            rotation[i][k] = (grad[i][k] - grad[k][i]) / den;
        }
    }

    let mut out = *tau;
    for i in 0..d {
        for j in 0..d {
            let mut correction = 0.0;
            for k in 0..d {
                correction += rotation[i][k] * tau[j][k] + rotation[j][k] * tau[i][k];
            }
            out[i][j] -= QCR_C1 * correction;
        }
    }
    out
}

/// Magnitude of the wall-tangential traction `|τ·n̂ - (n̂·τ·n̂) n̂|`.
pub fn wall_shear_representation(dim: Dim, tau: &Tensor, unit_normal: &Vector) -> f64 {
    let d = dim.get();
    let mut traction = [0.0; MAX_DIM];
    for i in 0..d {
        for j in 0..d {
            traction[i] += tau[i][j] * unit_normal[j];
        }
    }
    let normal_part: f64 = (0..d).map(|i| traction[i] * unit_normal[i]).sum();

    (0..d)
        .map(|i| {
            let t = traction[i] - normal_part * unit_normal[i];
            t * t
        })
        .sum::<f64>()
        .sqrt()
}

/// Rescale the stress tensor so its tangential traction equals `tau_wall`.
///
/// Returns the representation magnitude computed before rescaling. The ratio
/// is not guarded: a vanishing tangential traction yields non-finite stresses.
pub fn rescale_to_wall_shear(
    dim: Dim,
    tau: &mut Tensor,
    unit_normal: &Vector,
    tau_wall: f64,
) -> f64 {
    let representation = wall_shear_representation(dim, tau, unit_normal);
    let scale = tau_wall / representation;
    for row in tau.iter_mut().take(dim.get()) {
        for t in row.iter_mut().take(dim.get()) {
            *t *= scale;
        }
    }
    representation
}
