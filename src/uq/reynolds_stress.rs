//! Boussinesq Reynolds stress from the mean strain rate.

use crate::types::{DELTA, Dim, Tensor, ZERO_TENSOR};

/// Mean rate-of-strain tensor `S = (∇u + ∇uᵀ)/2`.
///
/// Always 3×3; in two dimensions the out-of-plane row and column are zero.
pub fn mean_strain_rate(dim: Dim, grad: &Tensor) -> Tensor {
    let d = dim.get();
    let mut s = ZERO_TENSOR;
    for i in 0..d {
        for j in 0..d {
            s[i][j] = 0.5 * (grad[i][j] + grad[j][i]);
        }
    }
    s
}

/// Reynolds stress `R = 2/3 k δ - μ_t/ρ (2S - 2/3 (∇·u) δ)` over all three
/// directions.
pub fn reynolds_stress(
    dim: Dim,
    grad: &Tensor,
    eddy_viscosity: f64,
    density: f64,
    tke: f64,
) -> Tensor {
    let s = mean_strain_rate(dim, grad);
    let div = s[0][0] + s[1][1] + s[2][2];
    let nu_t = eddy_viscosity / density;

    let mut r = ZERO_TENSOR;
    for i in 0..3 {
        for j in 0..3 {
            r[i][j] = 2.0 / 3.0 * tke * DELTA[i][j]
                - nu_t * (2.0 * s[i][j] - 2.0 / 3.0 * div * DELTA[i][j]);
        }
    }
    r
}
