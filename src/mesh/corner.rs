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

//! Corner table: a denser adjacency structure over the triangle list that
//! makes vertex-ring traversal O(1) per step.
//!
//! Corner `3*t + j` is the incidence of triangle `t`'s vertex `j`. That
//! indexing is fixed at build time and lets the opposite link of a corner be
//! computed analytically before the far triangle's corners exist.

use crate::{
    error::{MeshError, Result},
    mesh::{elements::INVALID, polyhedron::Polyhedron},
};

/// A (vertex, triangle) incidence.
#[derive(Debug, Clone)]
pub struct Corner {
    pub index: usize,

    /// Vertex attached to this corner.
    pub v: usize,
    /// Edge opposite the corner.
    pub e: usize,
    /// Triangle containing this corner.
    pub t: usize,

    /// Next corner within the same triangle, following orientation.
    pub n: usize,
    /// Previous corner within the same triangle.
    pub p: usize,
    /// Corner in the adjacent triangle sharing edge `e`; `None` at a
    /// boundary edge.
    pub o: Option<usize>,

    /// Interior angle at the corner's vertex. Zero means not yet computed.
    pub angle: f64,
}

/// Corners at a ring's center vertex, in walk order.
#[derive(Debug, Clone)]
pub struct RingWalk {
    pub corners: Vec<usize>,
    /// False when the walk terminated at a boundary edge.
    pub closed: bool,
}

impl Polyhedron {
    /// Builds 3·|triangles| corners. Requires edges to be wired.
    pub fn build_corner_table(&mut self) -> Result<()> {
        self.corners = Vec::with_capacity(3 * self.triangles.len());

        for (i, t) in self.triangles.iter().enumerate() {
            let base = 3 * i;
            for j in 0..3 {
                let v = t.vertices[j];

                // The corner's edge is the triangle edge that excludes its
                // vertex.
                let mut e = INVALID;
                for &cand in &t.edges {
                    if cand == INVALID {
                        return Err(MeshError::Triangulation { triangle: i });
                    }
                    if self.edges[cand].contains(v).is_none() {
                        e = cand;
                        break;
                    }
                }
                if e == INVALID {
                    return Err(MeshError::MissingOppositeEdge {
                        triangle: i,
                        vertex: v,
                    });
                }
                debug_assert_eq!(e, t.edges[j]);

                // Opposite corner: the far triangle's corners are laid out at
                // 3·s + slot whether or not they exist yet.
                let o = match self.edges[e].other_triangle(i) {
                    Some(s) => {
                        let far = &self.triangles[s];
                        let slot = (0..3)
                            .find(|&k| self.edges[e].contains(far.vertices[k]).is_none())
                            .ok_or(MeshError::Triangulation { triangle: s })?;
                        Some(3 * s + slot)
                    }
                    None => None,
                };

                self.corners.push(Corner {
                    index: base + j,
                    v,
                    e,
                    t: i,
                    n: base + (j + 1) % 3,
                    p: base + (j + 2) % 3,
                    o,
                    angle: 0.0,
                });
            }
        }

        Ok(())
    }

    /// Ring of vertices adjacent to the corner's vertex, in cyclic order.
    ///
    /// Walks `previous -> opposite -> previous` until the start corner
    /// recurs. At a boundary the walk stops at the null opposite, resumes
    /// from the start in the reverse direction (`next -> opposite -> next`),
    /// and stitches the two in-triangle neighbors in between so the ring
    /// stays complete and ordered. The walk is bounded by the fan size; a
    /// table that never returns is a fatal inconsistency.
    pub fn adjacent_vertices(&self, start: usize) -> Result<Vec<usize>> {
        let v = self.corners[start].v;
        let bound = self.vertices[v].triangles.len() + 1;
        let mut steps = 0usize;

        let mut ring = Vec::new();
        let mut previous = start;
        let closed = loop {
            let gate = self.corners[previous].p;
            let Some(o) = self.corners[gate].o else {
                break false;
            };
            let adjacent = self.corners[o].p;
            ring.push(self.corners[self.corners[adjacent].n].v);

            steps += 1;
            if adjacent == start {
                break true;
            }
            if steps > bound {
                return Err(MeshError::RingWalkDiverged { corner: start });
            }
            previous = adjacent;
        };

        if closed {
            return Ok(ring);
        }

        // Boundary vertex: the forward walk covered one side of the fan.
        let mut ordered: Vec<usize> = ring.into_iter().rev().collect();
        ordered.push(self.corners[self.corners[start].n].v);
        ordered.push(self.corners[self.corners[start].p].v);

        let mut previous = start;
        loop {
            let gate = self.corners[previous].n;
            let Some(o) = self.corners[gate].o else {
                break;
            };
            let adjacent = self.corners[o].n;
            ordered.push(self.corners[self.corners[adjacent].p].v);

            steps += 1;
            if steps > 2 * bound {
                return Err(MeshError::RingWalkDiverged { corner: start });
            }
            previous = adjacent;
        }

        Ok(ordered)
    }

    /// Corner sequence of a full `p -> o -> p` cycle around the corner's
    /// vertex, ending at `start`. Returns `None` if the vertex sits on a
    /// boundary (the cycle cannot close there).
    pub fn closed_ring(&self, start: usize) -> Result<Option<RingWalk>> {
        let v = self.corners[start].v;
        let bound = self.vertices[v].triangles.len() + 1;

        let mut corners = Vec::new();
        let mut previous = start;
        let mut steps = 0usize;
        loop {
            let gate = self.corners[previous].p;
            let Some(o) = self.corners[gate].o else {
                return Ok(None);
            };
            let adjacent = self.corners[o].p;
            corners.push(adjacent);

            steps += 1;
            if adjacent == start {
                return Ok(Some(RingWalk {
                    corners,
                    closed: true,
                }));
            }
            if steps > bound {
                return Err(MeshError::RingWalkDiverged { corner: start });
            }
            previous = adjacent;
        }
    }
}
