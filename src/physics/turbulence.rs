//! Turbulence closures whose outputs feed the viscous flux.

/// Constants of the k-ω SST closure used by the flux and its Jacobian.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SstConstants {
    /// σ_k in the inner (k-ω) layer
    pub sigma_k1: f64,
    /// σ_k in the outer (k-ε) layer
    pub sigma_k2: f64,
    /// Bradshaw constant a1
    pub a1: f64,
}

impl Default for SstConstants {
    fn default() -> Self {
        Self {
            sigma_k1: 0.85,
            sigma_k2: 1.0,
            a1: 0.31,
        }
    }
}

impl SstConstants {
    /// Blended diffusion coefficient σ_k = F1 σ_k1 + (1 - F1) σ_k2.
    #[inline]
    pub fn sigma_k(&self, f1: f64) -> f64 {
        f1 * self.sigma_k1 + (1.0 - f1) * self.sigma_k2
    }

    /// True where the eddy viscosity is `ρk/ω`, i.e. the Bradshaw limiter
    /// `ω > |Ω| F2 / a1` is inactive.
    #[inline]
    pub fn limiter_inactive(&self, omega: f64, vorticity_magnitude: f64, f2: f64) -> bool {
        omega > vorticity_magnitude * f2 / self.a1
    }
}

/// Turbulence closure that produced the eddy viscosity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TurbulenceModel {
    /// No turbulence model; μ_t is expected to be zero.
    #[default]
    Laminar,
    /// One-equation Spalart-Allmaras closure.
    SpalartAllmaras,
    /// Two-equation k-ω SST closure.
    Sst(SstConstants),
}

impl TurbulenceModel {
    /// SST with standard constants.
    pub fn sst() -> Self {
        TurbulenceModel::Sst(SstConstants::default())
    }

    /// SST constants, if this is a two-equation closure with transported k.
    pub fn sst_constants(&self) -> Option<&SstConstants> {
        match self {
            TurbulenceModel::Sst(c) => Some(c),
            _ => None,
        }
    }

    /// Short lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            TurbulenceModel::Laminar => "laminar",
            TurbulenceModel::SpalartAllmaras => "sa",
            TurbulenceModel::Sst(_) => "sst",
        }
    }
}
