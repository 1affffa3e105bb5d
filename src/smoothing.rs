// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Laplacian mesh smoothing under several weight schemes, scalar diffusion
//! from pinned seed vertices, and Morse critical-point classification.

use std::collections::HashSet;

use glam::DVec3;
use log::{debug, warn};

use crate::{
    analysis,
    error::{MeshError, Result},
    mesh::{Polyhedron, ScalarField},
};

/// Neighbor weighting scheme for one smoothing step.
///
/// Dynamic variants read positions updated earlier in the same sweep;
/// static variants weight and average against a snapshot taken before the
/// sweep, so the result is order-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Uniform,
    CordDynamic,
    CordStatic,
    MeanCurvatureDynamic,
    MeanCurvatureStatic,
    MeanValueDynamic,
    MeanValueStatic,
}

impl Weight {
    pub fn is_static(self) -> bool {
        matches!(
            self,
            Weight::CordStatic | Weight::MeanCurvatureStatic | Weight::MeanValueStatic
        )
    }

    fn uses_angles(self) -> bool {
        matches!(
            self,
            Weight::MeanCurvatureDynamic
                | Weight::MeanCurvatureStatic
                | Weight::MeanValueDynamic
                | Weight::MeanValueStatic
        )
    }
}

/// Inverse-distance weight. Coincident vertices contribute nothing.
fn cord_weight(distance: f64) -> f64 {
    if distance > 0.0 {
        1.0 / distance
    } else {
        0.0
    }
}

/// Cotangent weight from the two angles opposite the spoke edge.
fn mean_curvature_weight(theta: f64, phi: f64) -> f64 {
    0.5 * (1.0 / theta.tan() + 1.0 / phi.tan())
}

/// Mean-value weight from the two angles at the center vertex flanking the
/// spoke edge.
fn mean_value_weight(theta: f64, phi: f64) -> f64 {
    0.5 * ((theta * 0.5).tan() + (phi * 0.5).tan())
}

/// One smoothing sweep: every vertex moves `dt` of the way toward its
/// weighted neighborhood average.
///
/// Vertices are visited through the corner list, first touch wins, so each
/// moves exactly once. The curvature-based schemes need a closed ring of
/// corner angles and leave boundary vertices pinned.
pub fn smooth_mesh(mesh: &mut Polyhedron, dt: f64, weight: Weight) -> Result<()> {
    if !mesh.is_initialized() {
        return Err(MeshError::Uninitialized);
    }
    if weight.uses_angles() {
        analysis::compute_angles(mesh);
    }

    let snapshot: Vec<DVec3> = if weight.is_static() {
        mesh.vertices.iter().map(|v| v.position).collect()
    } else {
        Vec::new()
    };
    let read = |mesh: &Polyhedron, v: usize| -> DVec3 {
        if weight.is_static() {
            snapshot[v]
        } else {
            mesh.position(v)
        }
    };

    let mut seen: HashSet<usize> = HashSet::with_capacity(mesh.vertices.len());
    for start in 0..mesh.corners.len() {
        let vi = mesh.corners[start].v;
        if !seen.insert(vi) {
            continue;
        }
        let at = read(mesh, vi);

        let mut total = 0.0;
        let mut pull = DVec3::ZERO;

        match weight {
            Weight::Uniform | Weight::CordDynamic | Weight::CordStatic => {
                for w in mesh.adjacent_vertices(start)? {
                    let target = read(mesh, w);
                    let factor = match weight {
                        Weight::Uniform => 1.0,
                        _ => cord_weight(at.distance(target)),
                    };
                    total += factor;
                    pull += factor * (target - at);
                }
            }
            _ => {
                // Closed ring required; boundary vertices stay put.
                let Some(ring) = mesh.closed_ring(start)? else {
                    continue;
                };
                let mut previous = start;
                for adjacent in ring.corners {
                    let next = mesh.corners[adjacent].n;
                    let w = mesh.corners[mesh.corners[adjacent].p].v;

                    let (theta, phi) = match weight {
                        Weight::MeanValueDynamic | Weight::MeanValueStatic => (
                            mesh.corners[previous].angle,
                            mesh.corners[adjacent].angle,
                        ),
                        _ => {
                            let Some(far) = mesh.corners[next].o else {
                                continue;
                            };
                            (mesh.corners[next].angle, mesh.corners[far].angle)
                        }
                    };

                    let factor = match weight {
                        Weight::MeanValueDynamic | Weight::MeanValueStatic => {
                            mean_value_weight(theta, phi)
                        }
                        _ => mean_curvature_weight(theta, phi),
                    };
                    total += factor;
                    pull += factor * (read(mesh, w) - at);
                    previous = adjacent;
                }
            }
        }

        if total == 0.0 {
            warn!("vertex {vi} has zero total weight; skipping");
            continue;
        }
        mesh.vertices[vi].position += dt * (pull / total);
    }

    Ok(())
}

/// Diffuses a scalar field across the mesh from pinned seed vertices.
///
/// Maxima are held at 1, minima at 0, and every other vertex starts at
/// `default_value` and relaxes toward its cord-weighted neighborhood average
/// for `iterations` sweeps. The result approximates a harmonic function
/// interpolating the seeds.
pub fn evaluate_morse(
    mesh: &mut Polyhedron,
    field: ScalarField,
    maxima: &[usize],
    minima: &[usize],
    default_value: f64,
    dt: f64,
    iterations: usize,
) -> Result<()> {
    if !mesh.is_initialized() {
        return Err(MeshError::Uninitialized);
    }
    for &v in maxima.iter().chain(minima) {
        if v >= mesh.vertices.len() {
            return Err(MeshError::VertexOutOfRange { vertex: v });
        }
    }

    for v in &mut mesh.vertices {
        *v.scalar_mut(field) = default_value;
    }
    let mut fixed: HashSet<usize> = HashSet::new();
    for &v in maxima {
        *mesh.vertices[v].scalar_mut(field) = 1.0;
        fixed.insert(v);
    }
    for &v in minima {
        *mesh.vertices[v].scalar_mut(field) = 0.0;
        fixed.insert(v);
    }

    debug!(
        "diffusing field over {} vertices for {} iterations ({} fixed)",
        mesh.vertices.len(),
        iterations,
        fixed.len()
    );

    for _ in 0..iterations {
        let mut seen: HashSet<usize> = HashSet::with_capacity(mesh.vertices.len());
        for start in 0..mesh.corners.len() {
            let vi = mesh.corners[start].v;
            if !seen.insert(vi) || fixed.contains(&vi) {
                continue;
            }
            let at = mesh.position(vi);
            let value = mesh.vertices[vi].scalar(field);

            let mut total = 0.0;
            let mut pull = 0.0;
            for w in mesh.adjacent_vertices(start)? {
                let factor = cord_weight(at.distance(mesh.position(w)));
                total += factor;
                pull += factor * (mesh.vertices[w].scalar(field) - value);
            }
            if total == 0.0 {
                continue;
            }
            *mesh.vertices[vi].scalar_mut(field) += dt * (pull / total);
        }
    }

    Ok(())
}

pub fn evaluate_morse0(
    mesh: &mut Polyhedron,
    maxima: &[usize],
    minima: &[usize],
    default_value: f64,
    dt: f64,
    iterations: usize,
) -> Result<()> {
    evaluate_morse(
        mesh,
        ScalarField::Value0,
        maxima,
        minima,
        default_value,
        dt,
        iterations,
    )
}

pub fn evaluate_morse1(
    mesh: &mut Polyhedron,
    maxima: &[usize],
    minima: &[usize],
    default_value: f64,
    dt: f64,
    iterations: usize,
) -> Result<()> {
    evaluate_morse(
        mesh,
        ScalarField::Value1,
        maxima,
        minima,
        default_value,
        dt,
        iterations,
    )
}

/// Classifies every vertex of a scalar field as a maximum, minimum, saddle,
/// or regular point from its ordered neighbor ring.
///
/// A vertex is a strict maximum (`min_max = 1`) or minimum (`min_max = 0`)
/// only if every neighbor compares strictly; a tie disqualifies both and
/// contributes no sign to the ring. The saddle index counts rising
/// transitions around the cyclic sign sequence, minus the one a regular
/// vertex always has.
pub fn set_critical_points(mesh: &mut Polyhedron, field: ScalarField) -> Result<()> {
    if !mesh.is_initialized() {
        return Err(MeshError::Uninitialized);
    }

    let mut seen: HashSet<usize> = HashSet::with_capacity(mesh.vertices.len());
    for start in 0..mesh.corners.len() {
        let vi = mesh.corners[start].v;
        if !seen.insert(vi) {
            continue;
        }
        let value = mesh.vertices[vi].scalar(field);

        let mut is_max = true;
        let mut is_min = true;
        let mut signs: Vec<bool> = Vec::new();
        for w in mesh.adjacent_vertices(start)? {
            let other = mesh.vertices[w].scalar(field);
            if other >= value {
                is_max = false;
            }
            if other <= value {
                is_min = false;
            }
            if other > value {
                signs.push(true);
            } else if other < value {
                signs.push(false);
            }
        }

        let mut rises: i32 = 0;
        for i in 0..signs.len() {
            if !signs[i] && signs[(i + 1) % signs.len()] {
                rises += 1;
            }
        }

        let v = &mut mesh.vertices[vi];
        v.min_max = if is_max {
            1
        } else if is_min {
            0
        } else {
            -1
        };
        v.saddle = if rises >= 2 { rises - 1 } else { 0 };
    }

    Ok(())
}

pub fn set_critical_points0(mesh: &mut Polyhedron) -> Result<()> {
    set_critical_points(mesh, ScalarField::Value0)
}

pub fn set_critical_points1(mesh: &mut Polyhedron) -> Result<()> {
    set_critical_points(mesh, ScalarField::Value1)
}
