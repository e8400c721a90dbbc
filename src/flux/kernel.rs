//! Averaged-gradient viscous flux kernel.

use std::fmt;
use std::sync::Arc;

use crate::config::ViscousConfig;
use crate::constitutive::{
    apply_qcr, diffusive_flux, perturbed_stress_tensor, rescale_to_wall_shear, stress_tensor,
    tke_diffusivity,
};
use crate::error::FluxError;
use crate::geometry::EdgeGeometry;
use crate::gradient::correct_mean_gradients;
use crate::jacobian::{
    StressJacobian, add_eddy_viscosity_jacobian, add_laminar_viscosity_jacobian,
    add_tke_density_terms, heat_flux_jacobians, incompressible_jacobians, project_jacobians,
    projected_strain, stress_jacobians, viscosity_flux_sensitivity,
};
use crate::physics::SstConstants;
use crate::recording::{NoRecording, PassiveScope, Recording};
use crate::state::{MeanState, NodeState};
use crate::types::{Dim, FluxVector, JacobianBlock, MAX_DIM, MAX_VAR, Tensor, dot};
use crate::uq::ReynoldsStressState;

use super::context::{EdgeContext, FluxResult};
use super::traits::ViscousFlux;
use super::variant::{Compressible, FluidVariant, GeneralEos, Incompressible};

/// Averaged-gradient kernel for the calorically perfect gas.
pub type CompressibleFlux = AvgGradFlux<Compressible>;

/// Averaged-gradient kernel for incompressible flow.
pub type IncompressibleFlux = AvgGradFlux<Incompressible>;

/// Averaged-gradient kernel for an arbitrary equation of state.
pub type GeneralEosFlux = AvgGradFlux<GeneralEos>;

/// Viscous flux from edge-averaged, edge-corrected gradients.
///
/// Per edge: average the endpoint states, correct the mean gradients along
/// the edge, build the stress tensor (optionally with a perturbed Reynolds
/// stress, QCR and wall-function rescaling) and the heat flux, project them
/// onto the dual-face normal and, for implicit runs, linearise the result
/// with respect to both endpoint states.
///
/// The kernel keeps no per-edge state and may be shared between threads.
#[derive(Clone)]
pub struct AvgGradFlux<V: FluidVariant> {
    config: ViscousConfig,
    recording: Arc<dyn Recording>,
    variant: V,
}

/// Quantities of the residual reused by the Jacobians.
struct Constitutive {
    wall_factor: f64,
    conductivity: f64,
    tke_diffusivity: Option<f64>,
}

impl<V: FluidVariant> AvgGradFlux<V> {
    /// Create a kernel from a validated configuration.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid or was built for a
    /// different fluid model.
    pub fn new(config: ViscousConfig) -> Result<Self, FluxError> {
        if config.model != V::MODEL {
            return Err(FluxError::ModelMismatch {
                expected: V::MODEL.name(),
                found: config.model.name(),
            });
        }
        config.validate()?;

        log::debug!(
            "viscous flux: {} {} (implicit = {}, gradient correction = {}, turbulence = {}, \
             qcr = {}, uq = {}, wall functions = {})",
            V::MODEL,
            config.dim,
            config.implicit,
            config.gradient_correction,
            config.turbulence.name(),
            config.qcr,
            config.uq.is_some(),
            config.wall_functions,
        );

        Ok(Self {
            config,
            recording: Arc::new(NoRecording),
            variant: V::default(),
        })
    }

    /// Attach the differentiation tape the Jacobians must stay off.
    pub fn with_recording(mut self, recording: Arc<dyn Recording>) -> Self {
        self.recording = recording;
        self
    }

    /// Kernel configuration.
    pub fn config(&self) -> &ViscousConfig {
        &self.config
    }

    /// Fluid-model tag.
    pub fn variant(&self) -> V {
        self.variant
    }

    /// SST constants when the TKE diffusion flux takes part.
    fn sst(&self) -> Option<&SstConstants> {
        if V::CONSERVATIVE {
            self.config.turbulence.sst_constants()
        } else {
            None
        }
    }

    /// Stress tensor of the mean state and the wall-function factor.
    fn stress(&self, geometry: &EdgeGeometry, mean: &MeanState) -> (Tensor, f64) {
        let cfg = &self.config;
        let dim = cfg.dim;
        let prim = &mean.primitive;
        let grad = &mean.gradient.velocity;

        let mut tau = match &cfg.uq {
            Some(uq) => {
                let rs = ReynoldsStressState::new(
                    dim,
                    grad,
                    prim.eddy_viscosity,
                    prim.density,
                    mean.tke,
                    uq,
                );
                perturbed_stress_tensor(
                    dim,
                    grad,
                    prim.laminar_viscosity,
                    prim.density,
                    &rs.perturbed_reynolds_stress,
                )
            }
            None => stress_tensor(dim, grad, mean.total_viscosity(), prim.density, mean.tke),
        };

        if cfg.qcr {
            tau = apply_qcr(dim, &tau, grad);
        }

        let mut wall_factor = 1.0;
        if cfg.wall_functions {
            if let Some(tau_wall) = mean.wall_shear_stress {
                let representation =
                    rescale_to_wall_shear(dim, &mut tau, &geometry.unit_normal, tau_wall);
                wall_factor = tau_wall / representation;
            }
        }
        (tau, wall_factor)
    }

    fn conservative_residual(
        &self,
        geometry: &EdgeGeometry,
        node_i: &NodeState,
        node_j: &NodeState,
        mean: &MeanState,
    ) -> FluxResult {
        let dim = self.config.dim;
        let d = dim.get();
        let n_var = dim.n_var();
        let normal = &geometry.normal;

        let (tau, wall_factor) = self.stress(geometry, mean);
        let conductivity = V::conductivity(&self.config, mean);
        let heat = diffusive_flux(dim, conductivity, &mean.gradient.temperature);
        let tke_diffusivity = self
            .sst()
            .map(|c| tke_diffusivity(c, mean.primitive.laminar_viscosity, node_i, node_j));
        let tke_flux = match tke_diffusivity {
            Some(mu_k) => diffusive_flux(dim, mu_k, &mean.tke_gradient),
            None => [0.0; MAX_DIM],
        };

        let mut flux = [0.0; MAX_VAR];
        for a in 0..d {
            let traction: f64 = (0..d).map(|b| tau[a][b] * normal[b]).sum();
            flux[a + 1] = traction;
            flux[d + 1] += traction * mean.primitive.velocity[a];
        }
        flux[d + 1] += dot(dim, &heat, normal) + dot(dim, &tke_flux, normal);

        if !self.config.implicit {
            return FluxResult::explicit(n_var, flux);
        }

        let _passive = PassiveScope::enter(self.recording.as_ref());
        let constitutive = Constitutive {
            wall_factor,
            conductivity,
            tke_diffusivity,
        };
        let (jac_i, jac_j) =
            self.conservative_jacobians(geometry, node_i, node_j, mean, &flux, &constitutive);
        FluxResult::implicit(n_var, flux, jac_i, jac_j)
    }

    fn conservative_jacobians(
        &self,
        geometry: &EdgeGeometry,
        node_i: &NodeState,
        node_j: &NodeState,
        mean: &MeanState,
        flux: &FluxVector,
        constitutive: &Constitutive,
    ) -> (JacobianBlock, JacobianBlock) {
        let cfg = &self.config;
        let dim = cfg.dim;
        let n_var = dim.n_var();
        let (prim_i, prim_j) = (&node_i.primitive, &node_j.primitive);

        let dt_du_i = V::temperature_sensitivity(cfg, node_i);
        let dt_du_j = V::temperature_sensitivity(cfg, node_j);

        let mut stress: (StressJacobian, StressJacobian) =
            ([[0.0; MAX_VAR]; MAX_DIM], [[0.0; MAX_VAR]; MAX_DIM]);
        let mut heat: (FluxVector, FluxVector) = ([0.0; MAX_VAR], [0.0; MAX_VAR]);

        let dist_squared = geometry.jacobian_dist_squared();
        if dist_squared != 0.0 {
            stress = stress_jacobians(
                geometry,
                dist_squared,
                constitutive.wall_factor * mean.total_viscosity(),
                prim_i,
                prim_j,
            );
            let proj_over_dist = geometry.proj_vector_on_normal / dist_squared;
            heat = heat_flux_jacobians(
                n_var,
                constitutive.conductivity,
                proj_over_dist,
                &dt_du_i,
                &dt_du_j,
            );
            if let Some(mu_k) = constitutive.tke_diffusivity {
                add_tke_density_terms(
                    &mut heat.0,
                    &mut heat.1,
                    mu_k,
                    proj_over_dist,
                    (node_i.turbulence.tke, prim_i.density),
                    (node_j.turbulence.tke, prim_j.density),
                );
            }
        }

        let mean_velocity = &mean.primitive.velocity;
        let (mut jac_i, mut jac_j) = project_jacobians(
            dim,
            (&stress.0, &stress.1),
            (&heat.0, &heat.1),
            flux,
            mean_velocity,
            prim_i,
            prim_j,
        );

        let sst = self.sst();
        let normal = &geometry.normal;
        let proj_strain = projected_strain(
            dim,
            &mean.gradient.velocity,
            normal,
            constitutive.wall_factor,
        );
        let proj_temperature = dot(dim, &mean.gradient.temperature, normal);
        let proj_tke: f64 = if sst.is_some() {
            dot(dim, &mean.tke_gradient, normal)
        } else {
            0.0
        };
        let (dk_dmu, dk_dmu_t) = V::conductivity_sensitivity(cfg, mean);

        if cfg.viscosity.is_temperature_dependent() {
            let sensitivity = viscosity_flux_sensitivity(
                dim,
                &proj_strain,
                mean_velocity,
                dk_dmu * proj_temperature + proj_tke,
            );
            let scale_i = 0.5 * cfg.viscosity.derivative(prim_i.temperature);
            let scale_j = 0.5 * cfg.viscosity.derivative(prim_j.temperature);
            add_laminar_viscosity_jacobian(dim, &mut jac_i, &sensitivity, scale_i, &dt_du_i);
            add_laminar_viscosity_jacobian(dim, &mut jac_j, &sensitivity, scale_j, &dt_du_j);
        }

        if let Some(constants) = sst {
            for (jac, node) in [(&mut jac_i, node_i), (&mut jac_j, node_j)] {
                let turb = &node.turbulence;
                if !constants.limiter_inactive(turb.omega, turb.vorticity_magnitude, turb.f2) {
                    continue;
                }
                let sensitivity = viscosity_flux_sensitivity(
                    dim,
                    &proj_strain,
                    mean_velocity,
                    dk_dmu_t * proj_temperature + constants.sigma_k(turb.f1) * proj_tke,
                );
                add_eddy_viscosity_jacobian(dim, jac, &sensitivity, 0.5 * turb.tke / turb.omega);
            }
        }

        (jac_i, jac_j)
    }

    fn incompressible_residual(&self, geometry: &EdgeGeometry, mean: &MeanState) -> FluxResult {
        let cfg = &self.config;
        let dim = cfg.dim;
        let d = dim.get();
        let n_var = dim.n_var();
        let energy = dim.energy_index();
        let normal = &geometry.normal;
        let prim = &mean.primitive;

        let tau = stress_tensor(
            dim,
            &mean.gradient.velocity,
            mean.total_viscosity(),
            prim.density,
            mean.tke,
        );
        let conductivity = V::conductivity(cfg, mean);

        let mut flux = [0.0; MAX_VAR];
        for a in 0..d {
            flux[a + 1] = (0..d).map(|b| tau[a][b] * normal[b]).sum();
        }
        flux[energy] = conductivity * dot(dim, &mean.gradient.temperature, normal);
        if !cfg.energy_equation {
            flux[energy] = 0.0;
        }

        if !cfg.implicit {
            return FluxResult::explicit(n_var, flux);
        }

        let _passive = PassiveScope::enter(self.recording.as_ref());
        let (mut jac_i, mut jac_j) = incompressible_jacobians(
            geometry,
            geometry.jacobian_dist_squared(),
            mean.total_viscosity(),
            conductivity,
        );
        if !cfg.energy_equation {
            for jac in [&mut jac_i, &mut jac_j] {
                for var in 0..n_var {
                    jac[var][energy] = 0.0;
                    jac[energy][var] = 0.0;
                }
            }
        }
        FluxResult::implicit(n_var, flux, jac_i, jac_j)
    }
}

impl<V: FluidVariant> ViscousFlux for AvgGradFlux<V> {
    fn compute_residual(&self, ctx: &EdgeContext<'_>) -> FluxResult {
        let geometry = ctx
            .geometry
            .with_edge_based(self.config.gradient_correction);
        let mut mean = MeanState::from_nodes(ctx.node_i, ctx.node_j);
        if !self.config.transports_tke() {
            mean.tke = 0.0;
        }
        correct_mean_gradients(
            &mut mean,
            ctx.node_i,
            ctx.node_j,
            &geometry,
            self.sst().is_some(),
        );

        if V::CONSERVATIVE {
            self.conservative_residual(&geometry, ctx.node_i, ctx.node_j, &mean)
        } else {
            self.incompressible_residual(&geometry, &mean)
        }
    }

    fn name(&self) -> &'static str {
        V::MODEL.name()
    }

    fn dim(&self) -> Dim {
        self.config.dim
    }

    fn is_implicit(&self) -> bool {
        self.config.implicit
    }
}

impl<V: FluidVariant> fmt::Debug for AvgGradFlux<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvgGradFlux")
            .field("model", &V::MODEL)
            .field("config", &self.config)
            .field("recording", &self.recording.is_recording())
            .finish()
    }
}
