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

//! Mesh arena and topology builder: reconstructs full Vertex/Edge/Triangle
//! adjacency plus a corner table from raw positions and index triples.

use glam::DVec3;
use log::{debug, info, warn};
use smallvec::SmallVec;

use crate::{
    analysis,
    error::{MeshError, Result},
    geometry::BoundingSphere,
    mesh::{
        corner::Corner,
        elements::{Edge, Triangle, Vert, INVALID},
    },
};

/// Mesh with adjacency information through vertices, edges, and triangles.
///
/// Owns all records in four growable, index-stable arenas. Entities refer to
/// each other by index only and never outlive the mesh.
#[derive(Debug, Clone, Default)]
pub struct Polyhedron {
    pub vertices: Vec<Vert>,
    pub edges: Vec<Edge>,
    pub triangles: Vec<Triangle>,
    pub corners: Vec<Corner>,

    pub surface_area: f64,
    pub bounds: BoundingSphere,

    pub valence_deficit: i64,
    pub angle_deficit: f64,
}

impl Polyhedron {
    /// Allocates vertices and triangles from raw data without deriving any
    /// adjacency. Faces with out-of-range or repeated indices are fatal.
    pub fn from_raw(positions: &[DVec3], faces: &[[usize; 3]]) -> Result<Self> {
        let mut mesh = Polyhedron {
            vertices: Vec::with_capacity(positions.len()),
            edges: Vec::new(),
            triangles: Vec::with_capacity(faces.len()),
            corners: Vec::new(),
            ..Default::default()
        };

        for (i, &p) in positions.iter().enumerate() {
            mesh.vertices.push(Vert::new(i, p));
        }

        for (i, face) in faces.iter().enumerate() {
            for &v in face {
                if v >= positions.len() {
                    return Err(MeshError::VertexIndexOutOfRange {
                        face: i,
                        vertex: v,
                        len: positions.len(),
                    });
                }
            }
            if face[0] == face[1] || face[1] == face[2] || face[2] == face[0] {
                return Err(MeshError::DegenerateFace { face: i });
            }
            mesh.triangles.push(Triangle::new(i, *face));
        }

        Ok(mesh)
    }

    /// `from_raw` followed by `initialize`.
    pub fn build(positions: &[DVec3], faces: &[[usize; 3]]) -> Result<Self> {
        let mut mesh = Self::from_raw(positions, faces)?;
        mesh.initialize()?;
        Ok(mesh)
    }

    /// Runs every derivation pass over the raw vertex/triangle lists:
    /// vertex-to-triangle links, edges, ordered fans, cached lengths, the
    /// bounding sphere, oriented normals and areas, vertex normals, the
    /// corner table, and the valence/angle deficits.
    pub fn initialize(&mut self) -> Result<()> {
        debug!("connecting vertices to triangles");
        self.connect_vertices_to_triangles();

        debug!("creating edges");
        self.create_edges()?;
        info!(
            "polyhedron has {} vertices, {} edges, and {} triangles",
            self.vertices.len(),
            self.edges.len(),
            self.triangles.len()
        );

        debug!("ordering vertex triangle fans");
        for v in 0..self.vertices.len() {
            self.order_vertex_triangles(v)?;
        }

        debug!("computing edge lengths");
        self.compute_edge_lengths();

        debug!("computing bounding sphere");
        self.compute_bounding_sphere();

        debug!("computing normals and areas");
        self.compute_normals_and_areas();

        debug!("interpolating normals");
        self.interpolate_normals();

        debug!("constructing corner table");
        self.build_corner_table()?;

        analysis::compute_valence_deficit(self)?;
        debug!("valence deficit is {}", self.valence_deficit);

        analysis::compute_angle_deficit(self)?;
        debug!("angle deficit is {}", self.angle_deficit);

        Ok(())
    }

    /// True once the corner table exists (the mesh went through
    /// [`initialize`](Self::initialize)).
    pub fn is_initialized(&self) -> bool {
        !self.corners.is_empty() || self.triangles.is_empty()
    }

    #[inline]
    pub fn position(&self, v: usize) -> DVec3 {
        self.vertices[v].position
    }

    /// Raw index triples, one per triangle.
    pub fn face_indices(&self) -> Vec<[usize; 3]> {
        self.triangles.iter().map(|t| t.vertices).collect()
    }

    fn connect_vertices_to_triangles(&mut self) {
        for i in 0..self.triangles.len() {
            for j in 0..3 {
                let v = self.triangles[i].vertices[j];
                self.vertices[v].triangles.push(i);
            }
        }
    }

    fn create_edges(&mut self) -> Result<()> {
        // Walk the triangles pair by pair; an edge discovered through an
        // earlier triangle already sits in its slot and is skipped.
        for i in 0..self.triangles.len() {
            for j in 0..3 {
                if self.triangles[i].edges[(j + 2) % 3] == INVALID {
                    let v0 = self.triangles[i].vertices[j];
                    let v1 = self.triangles[i].vertices[(j + 1) % 3];
                    self.create_edge(v0, v1)?;
                }
            }
        }
        Ok(())
    }

    /// Creates the edge (v0, v1) and installs it into every triangle that
    /// contains both endpoints, at the slot opposite the excluded vertex.
    ///
    /// A triangle is discovered purely by scanning v0's registered triangle
    /// list for one that also contains v1, so a pair shared by two triangles
    /// yields a single edge. A third incident triangle is a non-manifold
    /// condition and is rejected.
    fn create_edge(&mut self, v0: usize, v1: usize) -> Result<()> {
        let index = self.edges.len();
        let mut edge = Edge::new(index, v0, v1);
        let mut installs: SmallVec<[(usize, usize); 2]> = SmallVec::new();

        let incident = self.vertices[v0].triangles.clone();
        for &ti in &incident {
            let t = &self.triangles[ti];
            let Some(k) = t.contains(v1) else {
                continue;
            };
            let Some(k0) = t.contains(v0) else {
                return Err(MeshError::Triangulation { triangle: ti });
            };

            if edge.triangles.len() == 2 {
                return Err(MeshError::NonManifoldEdge { v0, v1 });
            }
            edge.triangles.push(ti);

            // Slot of the vertex not in the pair, so that edge j stays
            // opposite vertex j.
            let slot = if (k + 1) % 3 == k0 {
                (k + 2) % 3
            } else if (k + 2) % 3 == k0 {
                (k + 1) % 3
            } else {
                return Err(MeshError::Triangulation { triangle: ti });
            };
            installs.push((ti, slot));
        }

        for (ti, slot) in installs {
            self.triangles[ti].edges[slot] = index;
        }
        self.edges.push(edge);
        Ok(())
    }

    /// Reorders the triangle fan of `vi` so consecutive entries share an
    /// edge, with a boundary-adjacent triangle rotated into slot 0.
    ///
    /// First walks one way around the vertex to detect a boundary (or a full
    /// cycle), then walks the other way placing triangles into increasing
    /// slots until the fan closes or the far boundary is reached.
    fn order_vertex_triangles(&mut self, vi: usize) -> Result<()> {
        let mut fan: Vec<usize> = self.vertices[vi].triangles.to_vec();
        let n = fan.len();
        if n <= 1 {
            return Ok(());
        }

        let mut t = fan[0];
        for _ in 0..n {
            let k = self.triangles[t]
                .contains(vi)
                .ok_or(MeshError::Triangulation { triangle: t })?;
            let gate = self.triangles[t].edges[(k + 2) % 3];
            match self.edges[gate].other_triangle(t) {
                None => {
                    let j = fan
                        .iter()
                        .position(|&x| x == t)
                        .ok_or(MeshError::Triangulation { triangle: t })?;
                    fan.swap(0, j);
                    break;
                }
                Some(next) => t = next,
            }
        }

        let mut t = fan[0];
        for i in 0..n - 1 {
            let k = self.triangles[t]
                .contains(vi)
                .ok_or(MeshError::Triangulation { triangle: t })?;
            let gate = self.triangles[t].edges[(k + 1) % 3];
            let Some(next) = self.edges[gate].other_triangle(t) else {
                break;
            };
            match fan[i + 1..].iter().position(|&x| x == next) {
                Some(j) => fan.swap(i + 1, i + 1 + j),
                // Fan closed early or `next` was already placed; a second
                // umbrella at this vertex stays unordered at the tail.
                None => break,
            }
            t = next;
        }

        self.vertices[vi].triangles = SmallVec::from_vec(fan);
        Ok(())
    }

    fn compute_edge_lengths(&mut self) {
        for i in 0..self.edges.len() {
            let [a, b] = self.edges[i].vertices;
            let length = self.position(a).distance(self.position(b));
            if length == 0.0 {
                warn!("edge {i} has zero length");
            }
            self.edges[i].length = length;
        }
    }

    fn compute_bounding_sphere(&mut self) {
        self.bounds = BoundingSphere::from_points(self.vertices.iter().map(|v| &v.position));
    }

    /// Per-triangle Heron areas and unit normals, then a global orientation
    /// pass: if the signed-volume proxy against the bounding-sphere center
    /// comes out positive, every normal is flipped.
    fn compute_normals_and_areas(&mut self) {
        self.surface_area = 0.0;
        let mut signed_volume = 0.0;

        for i in 0..self.triangles.len() {
            let t = &self.triangles[i];
            let [e0, e1, e2] = t.edges;
            let area = crate::geometry::util::heron_area(
                self.edges[e0].length,
                self.edges[e1].length,
                self.edges[e2].length,
            );

            let p0 = self.position(t.vertices[0]);
            let p1 = self.position(t.vertices[1]);
            let p2 = self.position(t.vertices[2]);
            let normal = (p2 - p0).cross(p1 - p0).normalize_or_zero();
            if normal == DVec3::ZERO {
                warn!("triangle {i} is degenerate; leaving a zero normal");
            }

            self.surface_area += area;
            signed_volume += (self.bounds.center - p0).dot(normal) * area;

            let t = &mut self.triangles[i];
            t.area = area;
            t.normal = normal;
        }

        if signed_volume > 0.0 {
            for t in &mut self.triangles {
                t.normal = -t.normal;
            }
        }
    }

    /// Vertex normals as the normalized, unweighted sum of adjacent triangle
    /// normals.
    fn interpolate_normals(&mut self) {
        for vi in 0..self.vertices.len() {
            let mut sum = DVec3::ZERO;
            for &ti in &self.vertices[vi].triangles {
                sum += self.triangles[ti].normal;
            }
            self.vertices[vi].normal = sum.normalize_or_zero();
        }
    }
}
