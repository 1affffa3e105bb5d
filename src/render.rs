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

//! GPU-ready vertex and index buffers. The vertex layout is `repr(C)` and
//! `Pod` so a buffer uploads with a single `bytemuck` cast.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use log::warn;

use crate::{
    analysis::{self, ScalarStats},
    error::{MeshError, Result},
    mesh::{Polyhedron, ScalarField},
};

/// Interleaved vertex attributes, 19 floats per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct RenderVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
    pub normal: [f32; 3],
    pub tex: [f32; 2],
    pub barycentric: [f32; 3],
    pub highlight: [f32; 4],
}

const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const NO_HIGHLIGHT: [f32; 4] = [0.0; 4];

/// A drawable mesh: vertices, triangle indices, and a model transform.
#[derive(Debug, Clone)]
pub struct MeshBuffers {
    pub vertices: Vec<RenderVertex>,
    pub indices: Vec<u32>,
    pub model: Mat4,
}

/// Blue-green-red ramp over a scalar's observed range.
///
/// Below the mean the color fades blue to green linearly; above it, green to
/// red with a cube-root easing that spreads resolution near the mean. The
/// mean itself is pure green. Values outside `[min, max]` fall back to white.
pub fn interpolate_color(value: f64, stats: &ScalarStats) -> [f32; 4] {
    if value == stats.mean {
        return [0.0, 1.0, 0.0, 1.0];
    }
    if value >= stats.min && value < stats.mean {
        let t = ((value - stats.min) / (stats.mean - stats.min)) as f32;
        return [0.0, t, 1.0 - t, 1.0];
    }
    if value > stats.mean && value <= stats.max {
        let t = ((value - stats.mean) / (stats.max - stats.mean)).cbrt() as f32;
        return [t, 1.0 - t, 0.0, 1.0];
    }
    warn!(
        "scalar {value} outside [{}, {}]; coloring white",
        stats.min, stats.max
    );
    WHITE
}

/// Indexed buffers sharing one vertex per mesh vertex, colored white and
/// shaded with the interpolated vertex normals.
pub fn shared_vertex_buffers(mesh: &Polyhedron) -> MeshBuffers {
    let vertices = mesh
        .vertices
        .iter()
        .map(|v| RenderVertex {
            position: v.position.as_vec3().to_array(),
            color: WHITE,
            normal: v.normal.as_vec3().to_array(),
            tex: [0.0; 2],
            barycentric: [0.0; 3],
            highlight: NO_HIGHLIGHT,
        })
        .collect();

    let indices = mesh
        .triangles
        .iter()
        .flat_map(|t| t.vertices.map(|v| v as u32))
        .collect();

    MeshBuffers {
        vertices,
        indices,
        model: Mat4::IDENTITY,
    }
}

/// Barycentric rows assigned to a triangle's three corners, used by
/// wireframe shaders to find the nearest edge.
const BARYCENTRIC: [[f32; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// Flat-shaded buffers with one scalar per triangle driving the color ramp.
///
/// Vertices are unshared (three per triangle) so each face keeps its own
/// normal and color.
pub fn per_triangle_scalar_buffers(mesh: &Polyhedron, scalars: &[f64]) -> Result<MeshBuffers> {
    if scalars.len() != mesh.triangles.len() {
        return Err(MeshError::ScalarLengthMismatch {
            expected: mesh.triangles.len(),
            got: scalars.len(),
        });
    }

    let stats = slice_stats(scalars);
    let mut vertices = Vec::with_capacity(3 * mesh.triangles.len());
    let mut indices = Vec::with_capacity(3 * mesh.triangles.len());

    for (t, &scalar) in mesh.triangles.iter().zip(scalars) {
        let color = interpolate_color(scalar, &stats);
        let normal = t.normal.as_vec3().to_array();
        for (j, &v) in t.vertices.iter().enumerate() {
            indices.push(vertices.len() as u32);
            vertices.push(RenderVertex {
                position: mesh.position(v).as_vec3().to_array(),
                color,
                normal,
                tex: [0.0; 2],
                barycentric: BARYCENTRIC[j],
                highlight: NO_HIGHLIGHT,
            });
        }
    }

    Ok(MeshBuffers {
        vertices,
        indices,
        model: Mat4::IDENTITY,
    })
}

/// Smooth-shaded buffers colored by one of the per-vertex scalar fields.
/// Vertices stay unshared so the barycentric wireframe attribute survives.
pub fn per_vertex_scalar_buffers(mesh: &Polyhedron, field: ScalarField) -> MeshBuffers {
    let stats = analysis::scalar_stats(mesh, field);
    let mut vertices = Vec::with_capacity(3 * mesh.triangles.len());
    let mut indices = Vec::with_capacity(3 * mesh.triangles.len());

    for t in &mesh.triangles {
        for (j, &v) in t.vertices.iter().enumerate() {
            let vert = &mesh.vertices[v];
            indices.push(vertices.len() as u32);
            vertices.push(RenderVertex {
                position: vert.position.as_vec3().to_array(),
                color: interpolate_color(vert.scalar(field), &stats),
                normal: vert.normal.as_vec3().to_array(),
                tex: [0.0; 2],
                barycentric: BARYCENTRIC[j],
                highlight: NO_HIGHLIGHT,
            });
        }
    }

    MeshBuffers {
        vertices,
        indices,
        model: Mat4::IDENTITY,
    }
}

fn slice_stats(scalars: &[f64]) -> ScalarStats {
    let n = scalars.len();
    if n == 0 {
        return ScalarStats::default();
    }

    let mut stats = ScalarStats {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
        mean: 0.0,
        std_dev: 0.0,
    };
    for &x in scalars {
        stats.min = stats.min.min(x);
        stats.max = stats.max.max(x);
        stats.mean += x;
    }
    stats.mean /= n as f64;

    let mut variance = 0.0;
    for &x in scalars {
        let d = x - stats.mean;
        variance += d * d;
    }
    stats.std_dev = (variance / n as f64).sqrt();

    stats
}
