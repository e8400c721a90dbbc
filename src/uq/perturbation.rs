//! Barycentric perturbation of the anisotropy eigenvalues.

use faer::{Mat, Side};

use crate::types::{DELTA, Dim, Tensor, ZERO_TENSOR};

use super::TRIANGLE_HEIGHT;
use super::config::{LimitingState, UqConfig};
use super::reynolds_stress::reynolds_stress;

/// Intermediate and final quantities of one perturbation.
///
/// `eigenvectors[k]` is the unit eigenvector paired with `eigenvalues[k]`;
/// eigenvalues are sorted ascending.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReynoldsStressState {
    /// Unperturbed Reynolds stress
    pub mean_reynolds_stress: Tensor,
    /// Anisotropy tensor `R/(2k) - δ/3`
    pub anisotropy: Tensor,
    /// Ascending anisotropy eigenvalues
    pub eigenvalues: [f64; 3],
    /// Eigenvectors, one per row
    pub eigenvectors: Tensor,
    /// Perturbed barycentric coordinates
    pub barycentric: [f64; 2],
    /// Eigenvalues recovered from the perturbed barycentric point
    pub perturbed_eigenvalues: [f64; 3],
    /// Anisotropy rebuilt from the perturbed eigenvalues
    pub perturbed_anisotropy: Tensor,
    /// Under-relaxed perturbed Reynolds stress
    pub perturbed_reynolds_stress: Tensor,
}

impl ReynoldsStressState {
    /// Build the Boussinesq Reynolds stress from mean flow data and perturb it.
    ///
    /// # Arguments
    /// * `dim` - Spatial dimension
    /// * `grad` - Mean velocity-gradient tensor
    /// * `eddy_viscosity` - Mean μ_t
    /// * `density` - Mean ρ
    /// * `tke` - Mean turbulence kinetic energy
    /// * `config` - Perturbation settings
    pub fn new(
        dim: Dim,
        grad: &Tensor,
        eddy_viscosity: f64,
        density: f64,
        tke: f64,
        config: &UqConfig,
    ) -> Self {
        let r = reynolds_stress(dim, grad, eddy_viscosity, density, tke);
        Self::perturb(r, tke, config)
    }

    /// Perturb a given Reynolds stress.
    ///
    /// A failed eigendecomposition yields a NaN-filled perturbed stress.
    pub fn perturb(mean_reynolds_stress: Tensor, tke: f64, config: &UqConfig) -> Self {
        let mut anisotropy = ZERO_TENSOR;
        for i in 0..3 {
            for j in 0..3 {
                anisotropy[i][j] = 0.5 * mean_reynolds_stress[i][j] / tke - DELTA[i][j] / 3.0;
            }
        }

        if anisotropy.iter().flatten().any(|v| !v.is_finite()) {
            log::trace!("non-finite anisotropy tensor (k = {})", tke);
            return Self::failed(mean_reynolds_stress, anisotropy);
        }
        let Some((eigenvalues, eigenvectors)) = symmetric_eigen(&anisotropy) else {
            return Self::failed(mean_reynolds_stress, anisotropy);
        };

        let current = barycentric_coordinates(&eigenvalues);
        let target = config.target.corner();
        let barycentric = [
            current[0] + config.delta_b * (target[0] - current[0]),
            current[1] + config.delta_b * (target[1] - current[1]),
        ];
        let perturbed_eigenvalues = eigenvalues_from_barycentric(&barycentric);

        let mut paired = eigenvectors;
        if config.permute {
            paired.reverse();
        }
        let perturbed_anisotropy = recompose(&perturbed_eigenvalues, &paired);

        let mut perturbed_reynolds_stress = ZERO_TENSOR;
        for i in 0..3 {
            for j in 0..3 {
                let full = 2.0 * tke * (perturbed_anisotropy[i][j] + DELTA[i][j] / 3.0);
                let base = mean_reynolds_stress[i][j];
                perturbed_reynolds_stress[i][j] = base + config.urlx * (full - base);
            }
        }

        Self {
            mean_reynolds_stress,
            anisotropy,
            eigenvalues,
            eigenvectors,
            barycentric,
            perturbed_eigenvalues,
            perturbed_anisotropy,
            perturbed_reynolds_stress,
        }
    }

    fn failed(mean_reynolds_stress: Tensor, anisotropy: Tensor) -> Self {
        let nan_tensor = [[f64::NAN; 3]; 3];
        Self {
            mean_reynolds_stress,
            anisotropy,
            eigenvalues: [f64::NAN; 3],
            eigenvectors: nan_tensor,
            barycentric: [f64::NAN; 2],
            perturbed_eigenvalues: [f64::NAN; 3],
            perturbed_anisotropy: nan_tensor,
            perturbed_reynolds_stress: nan_tensor,
        }
    }
}

/// Barycentric coordinates of ascending anisotropy eigenvalues.
///
/// Weights `c1 = λ2 - λ1`, `c2 = 2(λ1 - λ0)`, `c3 = 3λ0 + 1` of the
/// one-, two- and three-component corners.
pub fn barycentric_coordinates(eigenvalues: &[f64; 3]) -> [f64; 2] {
    let [l0, l1, l2] = *eigenvalues;
    let c1 = l2 - l1;
    let c2 = 2.0 * (l1 - l0);
    let c3 = 3.0 * l0 + 1.0;

    let corners = [
        LimitingState::OneComponent.corner(),
        LimitingState::TwoComponent.corner(),
        LimitingState::ThreeComponent.corner(),
    ];
    [
        corners[0][0] * c1 + corners[1][0] * c2 + corners[2][0] * c3,
        corners[0][1] * c1 + corners[1][1] * c2 + corners[2][1] * c3,
    ]
}

/// Inverse of [`barycentric_coordinates`] for a traceless tensor.
pub fn eigenvalues_from_barycentric(coord: &[f64; 2]) -> [f64; 3] {
    let c3 = coord[1] / TRIANGLE_HEIGHT;
    let c1 = coord[0] - 0.5 * c3;
    let c2 = 1.0 - c1 - c3;

    let l0 = (c3 - 1.0) / 3.0;
    let l1 = 0.5 * c2 + l0;
    let l2 = c1 + l1;
    [l0, l1, l2]
}

/// `Σ_k λ_k v_k v_kᵀ`
fn recompose(eigenvalues: &[f64; 3], eigenvectors: &Tensor) -> Tensor {
    let mut a = ZERO_TENSOR;
    for i in 0..3 {
        for j in 0..3 {
            a[i][j] = (0..3)
                .map(|k| eigenvectors[k][i] * eigenvalues[k] * eigenvectors[k][j])
                .sum();
        }
    }
    a
}

/// Ascending eigenpairs of a symmetric 3×3 tensor.
fn symmetric_eigen(a: &Tensor) -> Option<([f64; 3], Tensor)> {
    let m = Mat::<f64>::from_fn(3, 3, |i, j| a[i][j]);
    let evd = match m.as_ref().self_adjoint_eigen(Side::Lower) {
        Ok(evd) => evd,
        Err(err) => {
            log::trace!("anisotropy eigendecomposition failed: {:?}", err);
            return None;
        }
    };

    let values = evd.S().column_vector();
    let vectors = evd.U();

    let mut order = [0usize, 1, 2];
    order.sort_by(|&p, &q| values[p].total_cmp(&values[q]));

    let mut eigenvalues = [0.0; 3];
    let mut eigenvectors = ZERO_TENSOR;
    for (slot, &k) in order.iter().enumerate() {
        eigenvalues[slot] = values[k];
        for i in 0..3 {
            eigenvectors[slot][i] = vectors[(i, k)];
        }
    }
    Some((eigenvalues, eigenvectors))
}
