//! Integration tests for the edge-loop helper on a small structured grid.

use visflux::state::{PrimitiveGradient, PrimitiveState};
use visflux::{
    Dim, EdgeGeometry, EdgeIndex, MeshEdge, NodeState, PointIndex, TurbulenceModel,
    TurbulenceScalars, ViscousConfig, assemble_viscous_residual, create_viscous_flux,
};

const NX: usize = 5;
const NY: usize = 4;
const TOL: f64 = 1e-10;

fn point(ix: usize, iy: usize) -> PointIndex {
    PointIndex::new(iy * NX + ix)
}

/// Dual-mesh edges of a unit-spaced Cartesian grid.
fn grid_edges() -> Vec<MeshEdge> {
    let mut edges = Vec::new();
    for iy in 0..NY {
        for ix in 0..NX {
            let here = [ix as f64, iy as f64, 0.0];
            if ix + 1 < NX {
                let there = [ix as f64 + 1.0, iy as f64, 0.0];
                edges.push(MeshEdge::new(
                    point(ix, iy),
                    point(ix + 1, iy),
                    EdgeGeometry::new(Dim::Two, here, there, [1.0, 0.0, 0.0], 1.0),
                ));
            }
            if iy + 1 < NY {
                let there = [ix as f64, iy as f64 + 1.0, 0.0];
                edges.push(MeshEdge::new(
                    point(ix, iy),
                    point(ix, iy + 1),
                    EdgeGeometry::new(Dim::Two, here, there, [0.0, 1.0, 0.0], 1.0),
                ));
            }
        }
    }
    edges
}

fn grid_nodes() -> Vec<NodeState> {
    let mut nodes = Vec::with_capacity(NX * NY);
    for iy in 0..NY {
        for ix in 0..NX {
            let (x, y) = (ix as f64, iy as f64);
            let mut gradient = PrimitiveGradient::zero();
            gradient.velocity[0][1] = 0.2;
            gradient.velocity[1][0] = -0.1 * (0.3 * x).cos();
            gradient.temperature = [0.01, 0.02, 0.0];
            nodes.push(
                NodeState::new(
                    PrimitiveState {
                        temperature: 1.0 + 0.01 * x + 0.02 * y,
                        velocity: [0.2 * y, -0.1 * (0.3 * x).sin(), 0.0],
                        density: 1.0 + 0.05 * x,
                        laminar_viscosity: 0.01,
                        eddy_viscosity: 0.02,
                        ..Default::default()
                    },
                    gradient,
                )
                .with_turbulence(TurbulenceScalars {
                    tke: 0.1 + 0.01 * y,
                    omega: 5.0,
                    f1: 0.5,
                    f2: 0.2,
                    vorticity_magnitude: 0.3,
                    tke_gradient: [0.0, 0.01, 0.0],
                }),
            );
        }
    }
    nodes
}

#[test]
fn test_grid_residual_and_jacobian_are_conservative() {
    let flux = create_viscous_flux(
        ViscousConfig::compressible(Dim::Two).with_turbulence(TurbulenceModel::sst()),
    )
    .unwrap();
    let out = assemble_viscous_residual(&*flux, &grid_edges(), &grid_nodes()).unwrap();

    assert!(out.dropped_edges.is_empty());
    for var in 0..out.n_var {
        let total: f64 = out.residual.iter().map(|r| r[var]).sum();
        assert!(total.abs() < TOL, "residual of variable {var} sums to {total}");
    }

    // Every edge adds -J and +J to the same column point
    for col in 0..NX * NY {
        let col = PointIndex::new(col);
        let mut sum = [[0.0; 5]; 5];
        for ((_, c), block) in &out.jacobian {
            if *c == col {
                for r in 0..out.n_var {
                    for k in 0..out.n_var {
                        sum[r][k] += block[r][k];
                    }
                }
            }
        }
        assert!(sum.iter().flatten().all(|v| v.abs() < TOL), "column {col}");
    }
}

#[test]
fn test_block_pattern_matches_grid_stencil() {
    let flux = create_viscous_flux(ViscousConfig::incompressible(Dim::Two)).unwrap();
    let edges = grid_edges();
    let out = assemble_viscous_residual(&*flux, &edges, &grid_nodes()).unwrap();

    // One diagonal block per point plus two off-diagonal blocks per edge
    assert_eq!(out.jacobian.len(), NX * NY + 2 * edges.len());
    assert!(out.block(point(1, 1), point(2, 1)).is_some());
    assert!(out.block(point(1, 1), point(2, 2)).is_none());
}

#[test]
fn test_nan_edges_are_dropped_and_reported() {
    let flux = create_viscous_flux(ViscousConfig::compressible(Dim::Two)).unwrap();
    let edges = grid_edges();
    let mut nodes = grid_nodes();
    // Corner point (NX-1, NY-1) touches exactly two edges
    nodes[point(NX - 1, NY - 1).get()].primitive.laminar_viscosity = f64::NAN;

    let out = assemble_viscous_residual(&*flux, &edges, &nodes).unwrap();
    assert_eq!(out.dropped_edges.len(), 2);
    for index in &out.dropped_edges {
        let edge = &edges[index.get()];
        assert!(edge.i == point(NX - 1, NY - 1) || edge.j == point(NX - 1, NY - 1));
    }
    assert!(out.dropped_edges.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(out.point_residual(point(NX - 1, NY - 1)), &[0.0; 4]);
    assert!(out.residual.iter().flatten().all(|v| v.is_finite()));
    assert!(!out.dropped_edges.contains(&EdgeIndex::new(0)));
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_assembly_matches_serial() {
    use visflux::assemble_viscous_residual_parallel;

    for config in [
        ViscousConfig::compressible(Dim::Two).with_turbulence(TurbulenceModel::sst()),
        ViscousConfig::general_eos(Dim::Two),
        ViscousConfig::incompressible(Dim::Two).with_implicit(false),
    ] {
        let flux = create_viscous_flux(config).unwrap();
        let (edges, nodes) = (grid_edges(), grid_nodes());
        let serial = assemble_viscous_residual(&*flux, &edges, &nodes).unwrap();
        let parallel = assemble_viscous_residual_parallel(&*flux, &edges, &nodes).unwrap();
        assert_eq!(serial, parallel, "{}", flux.name());
    }
}
