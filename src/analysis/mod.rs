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

//! Mesh measurements: valence and angle deficits, corner angles, per-triangle
//! horizon measures, and a discrete Gaussian curvature estimate.

use std::f64::consts::PI;

use log::warn;

use crate::{
    error::Result,
    geometry::util::{area_from_positions, clamp_unit, spherical_area},
    mesh::{Polyhedron, ScalarField},
};

/// Sums `6 - valence` over every vertex and stores ring sizes.
///
/// On a closed triangulation of the sphere the total is 12, an Euler
/// characteristic identity the topology tests lean on.
pub fn compute_valence_deficit(mesh: &mut Polyhedron) -> Result<()> {
    if mesh.corners.is_empty() && !mesh.triangles.is_empty() {
        mesh.build_corner_table()?;
    }

    mesh.valence_deficit = 0;
    for vi in 0..mesh.vertices.len() {
        let Some(&ti) = mesh.vertices[vi].triangles.first() else {
            warn!("vertex {vi} has no incident triangles; skipping valence");
            continue;
        };
        let slot = mesh.triangles[ti]
            .contains(vi)
            .ok_or(crate::MeshError::Triangulation { triangle: ti })?;
        let ring = mesh.adjacent_vertices(3 * ti + slot)?;

        mesh.vertices[vi].valence = ring.len();
        mesh.valence_deficit += 6 - ring.len() as i64;
    }
    Ok(())
}

/// Interior angle at one corner, from the two in-triangle edge vectors.
/// Degenerate (zero-length) spokes yield a zero angle.
pub fn compute_angle(mesh: &Polyhedron, corner: usize) -> f64 {
    let c = &mesh.corners[corner];
    let at = mesh.position(c.v);
    let cn = mesh.position(mesh.corners[c.n].v) - at;
    let cp = mesh.position(mesh.corners[c.p].v) - at;

    let lengths = cn.length() * cp.length();
    if lengths == 0.0 {
        warn!("corner {corner} has a zero-length spoke; angle set to 0");
        return 0.0;
    }
    clamp_unit(cn.dot(cp) / lengths).acos()
}

/// Fills every corner angle still at its zero sentinel and accumulates the
/// per-vertex angle totals.
pub fn compute_angles(mesh: &mut Polyhedron) {
    for v in &mut mesh.vertices {
        v.total_angle = 0.0;
    }
    for i in 0..mesh.corners.len() {
        if mesh.corners[i].angle == 0.0 {
            mesh.corners[i].angle = compute_angle(mesh, i);
        }
        let v = mesh.corners[i].v;
        let angle = mesh.corners[i].angle;
        mesh.vertices[v].total_angle += angle;
    }
}

/// Sums `2*pi - total_angle` over every vertex. Equals `4*pi` on a closed
/// surface of genus zero by Gauss-Bonnet.
pub fn compute_angle_deficit(mesh: &mut Polyhedron) -> Result<()> {
    if mesh.corners.is_empty() && !mesh.triangles.is_empty() {
        mesh.build_corner_table()?;
    }
    compute_angles(mesh);

    mesh.angle_deficit = 0.0;
    for v in &mesh.vertices {
        if v.triangles.is_empty() {
            continue;
        }
        mesh.angle_deficit += 2.0 * PI - v.total_angle;
    }
    Ok(())
}

/// Twice the sum of the pairwise angles between a triangle's three vertex
/// normals. Large values flag regions where the shading normals spread
/// quickly, an indicator of visual silhouettes.
pub fn horizon_area(mesh: &Polyhedron, triangle: usize) -> f64 {
    let [v0, v1, v2] = mesh.triangles[triangle].vertices;
    let n0 = mesh.vertices[v0].normal;
    let n1 = mesh.vertices[v1].normal;
    let n2 = mesh.vertices[v2].normal;

    2.0 * (clamp_unit(n0.dot(n1)).acos()
        + clamp_unit(n1.dot(n2)).acos()
        + clamp_unit(n2.dot(n0)).acos())
}

/// Sum of the triangle's three edge lengths.
pub fn perimeter(mesh: &Polyhedron, triangle: usize) -> f64 {
    mesh.triangles[triangle]
        .edges
        .iter()
        .map(|&e| mesh.edges[e].length)
        .sum()
}

/// Horizon area scaled by the triangle's perimeter.
pub fn horizon_measure(mesh: &Polyhedron, triangle: usize) -> f64 {
    let p = perimeter(mesh, triangle);
    if p == 0.0 {
        warn!("triangle {triangle} has zero perimeter; horizon measure set to 0");
        return 0.0;
    }
    horizon_area(mesh, triangle) / p
}

/// Horizon area scaled by the triangle's surface area, the scale-variant
/// form kept for comparison against the perimeter-scaled measure.
pub fn original_horizon_measure(mesh: &Polyhedron, triangle: usize) -> f64 {
    let area = mesh.triangles[triangle].area;
    if area == 0.0 {
        warn!("triangle {triangle} has zero area; horizon measure set to 0");
        return 0.0;
    }
    horizon_area(mesh, triangle) / area
}

pub fn horizon_measure_f32(mesh: &Polyhedron, triangle: usize) -> f32 {
    horizon_measure(mesh, triangle) as f32
}

pub fn original_horizon_measure_f32(mesh: &Polyhedron, triangle: usize) -> f32 {
    original_horizon_measure(mesh, triangle) as f32
}

/// Discrete Gaussian curvature over one triangle: spherical excess of its
/// vertex normals on the direction sphere, divided by the flat area.
pub fn approximate_gaussian_curvature(mesh: &Polyhedron, triangle: usize) -> f64 {
    let [v0, v1, v2] = mesh.triangles[triangle].vertices;
    let flat = area_from_positions(
        mesh.position(v0),
        mesh.position(v1),
        mesh.position(v2),
    );
    if flat == 0.0 {
        warn!("triangle {triangle} has zero area; curvature set to 0");
        return 0.0;
    }
    spherical_area(
        mesh.vertices[v0].normal,
        mesh.vertices[v1].normal,
        mesh.vertices[v2].normal,
    ) / flat
}

pub fn horizon_measures(mesh: &Polyhedron) -> Vec<f64> {
    (0..mesh.triangles.len())
        .map(|t| horizon_measure(mesh, t))
        .collect()
}

pub fn horizon_measures_f32(mesh: &Polyhedron) -> Vec<f32> {
    (0..mesh.triangles.len())
        .map(|t| horizon_measure_f32(mesh, t))
        .collect()
}

pub fn original_horizon_measures(mesh: &Polyhedron) -> Vec<f64> {
    (0..mesh.triangles.len())
        .map(|t| original_horizon_measure(mesh, t))
        .collect()
}

pub fn approximate_gaussian_curvatures(mesh: &Polyhedron) -> Vec<f64> {
    (0..mesh.triangles.len())
        .map(|t| approximate_gaussian_curvature(mesh, t))
        .collect()
}

/// Summary statistics over one of the per-vertex scalar fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
}

pub fn scalar_stats(mesh: &Polyhedron, field: ScalarField) -> ScalarStats {
    let n = mesh.vertices.len();
    if n == 0 {
        return ScalarStats::default();
    }

    let mut stats = ScalarStats {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
        mean: 0.0,
        std_dev: 0.0,
    };
    for v in &mesh.vertices {
        let x = v.scalar(field);
        stats.min = stats.min.min(x);
        stats.max = stats.max.max(x);
        stats.mean += x;
    }
    stats.mean /= n as f64;

    let mut variance = 0.0;
    for v in &mesh.vertices {
        let d = v.scalar(field) - stats.mean;
        variance += d * d;
    }
    stats.std_dev = (variance / n as f64).sqrt();

    stats
}
