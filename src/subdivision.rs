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

//! Loop subdivision. One pass replaces every triangle with four, moving the
//! surviving vertices (even) and inserting one vertex per edge (odd).

use glam::DVec3;
use log::info;

use crate::{
    error::{MeshError, Result},
    mesh::Polyhedron,
};

/// One round of Loop subdivision over an initialized mesh.
///
/// The refined mesh has `V + E` vertices and `4F` triangles; vertex `V + e`
/// is the odd vertex inserted on edge `e`. The result is rebuilt from
/// scratch, so all adjacency and derived quantities are fresh.
pub fn loop_subdivide(mesh: &Polyhedron) -> Result<Polyhedron> {
    if !mesh.is_initialized() {
        return Err(MeshError::Uninitialized);
    }

    let nv = mesh.vertices.len();
    let mut positions = Vec::with_capacity(nv + mesh.edges.len());

    for vi in 0..nv {
        positions.push(even_position(mesh, vi));
    }
    for e in 0..mesh.edges.len() {
        positions.push(odd_position(mesh, e)?);
    }

    // Each triangle splits into three corner children plus a central one,
    // all in the parent's winding. Edge j is opposite vertex j, so the
    // midpoint between vertices j and j+1 lives on edge j+2.
    let mut faces = Vec::with_capacity(4 * mesh.triangles.len());
    for t in &mesh.triangles {
        let [v0, v1, v2] = t.vertices;
        let m01 = nv + t.edges[2];
        let m12 = nv + t.edges[0];
        let m20 = nv + t.edges[1];

        faces.push([v0, m01, m20]);
        faces.push([m01, v1, m12]);
        faces.push([m12, v2, m20]);
        faces.push([m01, m12, m20]);
    }

    info!(
        "subdividing {} vertices / {} triangles into {} / {}",
        nv,
        mesh.triangles.len(),
        positions.len(),
        faces.len()
    );
    Polyhedron::build(&positions, &faces)
}

/// Loop vertex weight for an interior vertex of valence `n`.
fn beta(n: usize) -> f64 {
    debug_assert!(n >= 3);
    if n == 3 {
        3.0 / 16.0
    } else {
        3.0 / (8.0 * n as f64)
    }
}

/// Repositioned original vertex: `(1 - n*beta)` of itself plus `beta` of
/// each connected vertex. Vertices with fewer than three neighbors sit on a
/// sharp boundary and use the crease rule `3/4` self, `1/8` each neighbor.
fn even_position(mesh: &Polyhedron, vi: usize) -> DVec3 {
    let connected = connected_vertices(mesh, vi);
    let n = connected.len();

    let mut sum = DVec3::ZERO;
    for &w in &connected {
        sum += mesh.position(w);
    }

    if n < 3 {
        return 0.75 * mesh.position(vi) + 0.125 * sum;
    }
    let b = beta(n);
    (1.0 - n as f64 * b) * mesh.position(vi) + b * sum
}

/// New vertex on edge `e`: the midpoint for a boundary edge, or `3/8` of
/// each endpoint plus `1/8` of each far vertex for an interior one.
fn odd_position(mesh: &Polyhedron, e: usize) -> Result<DVec3> {
    let edge = &mesh.edges[e];
    let [a, b] = edge.vertices;
    let endpoints = mesh.position(a) + mesh.position(b);

    if edge.is_boundary() {
        return Ok(0.5 * endpoints);
    }

    let mut far = DVec3::ZERO;
    for &ti in &edge.triangles {
        let t = &mesh.triangles[ti];
        let apex = t
            .vertices
            .iter()
            .copied()
            .find(|&v| edge.contains(v).is_none())
            .ok_or(MeshError::Triangulation { triangle: ti })?;
        far += mesh.position(apex);
    }

    Ok(0.375 * endpoints + 0.125 * far)
}

/// All vertices sharing a triangle with `vi`, deduplicated, excluding `vi`.
fn connected_vertices(mesh: &Polyhedron, vi: usize) -> Vec<usize> {
    let mut connected = Vec::new();
    for &ti in &mesh.vertices[vi].triangles {
        for &w in &mesh.triangles[ti].vertices {
            if w != vi && !connected.contains(&w) {
                connected.push(w);
            }
        }
    }
    connected
}
