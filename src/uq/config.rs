//! Perturbation settings.

use crate::error::FluxError;

use super::TRIANGLE_HEIGHT;

/// Limiting state of turbulence the anisotropy is pushed towards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LimitingState {
    /// One-component turbulence.
    OneComponent,
    /// Two-component (axisymmetric) turbulence.
    #[default]
    TwoComponent,
    /// Three-component (isotropic) turbulence.
    ThreeComponent,
}

impl LimitingState {
    /// Select a corner by its component count; anything other than 1, 2 or 3
    /// falls back to two-component turbulence.
    pub fn from_components(components: u8) -> Self {
        match components {
            1 => LimitingState::OneComponent,
            3 => LimitingState::ThreeComponent,
            _ => LimitingState::TwoComponent,
        }
    }

    /// Barycentric coordinates of the corner.
    pub fn corner(&self) -> [f64; 2] {
        match self {
            LimitingState::OneComponent => [1.0, 0.0],
            LimitingState::TwoComponent => [0.0, 0.0],
            LimitingState::ThreeComponent => [0.5, TRIANGLE_HEIGHT],
        }
    }

    /// Ascending anisotropy eigenvalues of the corner.
    pub fn eigenvalues(&self) -> [f64; 3] {
        match self {
            LimitingState::OneComponent => [-1.0 / 3.0, -1.0 / 3.0, 2.0 / 3.0],
            LimitingState::TwoComponent => [-1.0 / 3.0, 1.0 / 6.0, 1.0 / 6.0],
            LimitingState::ThreeComponent => [0.0, 0.0, 0.0],
        }
    }
}

/// Eigenspace perturbation parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UqConfig {
    /// Fraction of the distance to the target corner, in `[0, 1]`
    pub delta_b: f64,
    /// Under-relaxation towards the perturbed stress, in `[0, 1]`
    pub urlx: f64,
    /// Pair eigenvalues with the eigenvectors in reversed order
    pub permute: bool,
    /// Target corner of the barycentric triangle
    pub target: LimitingState,
}

impl Default for UqConfig {
    fn default() -> Self {
        Self {
            delta_b: 1.0,
            urlx: 0.1,
            permute: false,
            target: LimitingState::default(),
        }
    }
}

impl UqConfig {
    /// Perturbation towards `target` with full displacement and no relaxation.
    pub fn new(target: LimitingState) -> Self {
        Self {
            delta_b: 1.0,
            urlx: 1.0,
            permute: false,
            target,
        }
    }

    /// Set the barycentric displacement fraction.
    pub fn with_delta_b(mut self, delta_b: f64) -> Self {
        self.delta_b = delta_b;
        self
    }

    /// Set the under-relaxation factor.
    pub fn with_urlx(mut self, urlx: f64) -> Self {
        self.urlx = urlx;
        self
    }

    /// Enable or disable eigenvector permutation.
    pub fn with_permute(mut self, permute: bool) -> Self {
        self.permute = permute;
        self
    }

    /// Check that both fractions lie in `[0, 1]`.
    pub fn validate(&self) -> Result<(), FluxError> {
        if !(0.0..=1.0).contains(&self.delta_b) {
            return Err(FluxError::invalid("uq_delta_b", self.delta_b, "must lie in [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.urlx) {
            return Err(FluxError::invalid("uq_urlx", self.urlx, "must lie in [0, 1]"));
        }
        Ok(())
    }
}
