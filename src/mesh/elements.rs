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

//! Primitive mesh records. All cross-references are indices into the owning
//! [`Polyhedron`](super::Polyhedron) arenas; records never own each other.

use glam::DVec3;
use smallvec::SmallVec;

/// Sentinel for a not-yet-wired index slot.
pub const INVALID: usize = usize::MAX;

/// Selects one of the two independent scalar fields carried per vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarField {
    Value0,
    Value1,
}

#[derive(Debug, Clone)]
pub struct Vert {
    pub index: usize,
    pub position: DVec3,

    /// Accumulated then normalized average of adjacent triangle normals.
    pub normal: DVec3,

    /// Incident triangles; cyclically ordered after fan ordering, with a
    /// boundary-adjacent triangle rotated into slot 0 for boundary vertices.
    pub triangles: SmallVec<[usize; 8]>,

    /// Ring size. Zero means not yet computed.
    pub valence: usize,

    /// Sum of the interior corner angles meeting at this vertex.
    pub total_angle: f64,

    // Scalar fields driven by diffusion.
    pub value0: f64,
    pub value1: f64,

    // Critical-point classification: 1 = maximum, 0 = minimum, -1 = neither.
    pub min_max: i8,
    /// Saddle index; -1 = unclassified.
    pub saddle: i32,
}

impl Vert {
    pub fn new(index: usize, position: DVec3) -> Self {
        Self {
            index,
            position,
            normal: DVec3::ZERO,
            triangles: SmallVec::new(),
            valence: 0,
            total_angle: 0.0,
            value0: 0.0,
            value1: 0.0,
            min_max: -1,
            saddle: -1,
        }
    }

    pub fn scalar(&self, field: ScalarField) -> f64 {
        match field {
            ScalarField::Value0 => self.value0,
            ScalarField::Value1 => self.value1,
        }
    }

    pub fn scalar_mut(&mut self, field: ScalarField) -> &mut f64 {
        match field {
            ScalarField::Value0 => &mut self.value0,
            ScalarField::Value1 => &mut self.value1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Edge {
    pub index: usize,

    /// Endpoint vertices, in creation order.
    pub vertices: [usize; 2],

    /// Euclidean distance between the endpoints, cached by the builder.
    pub length: f64,

    /// Incident triangles: one for a boundary edge, two for an interior one.
    /// A third incident triangle is rejected during construction.
    pub triangles: SmallVec<[usize; 2]>,
}

impl Edge {
    pub fn new(index: usize, v0: usize, v1: usize) -> Self {
        Self {
            index,
            vertices: [v0, v1],
            length: 0.0,
            triangles: SmallVec::new(),
        }
    }

    pub fn is_boundary(&self) -> bool {
        self.triangles.len() == 1
    }

    /// The incident triangle other than `t`. Defined only for interior edges.
    pub fn other_triangle(&self, t: usize) -> Option<usize> {
        if self.triangles.len() < 2 {
            return None;
        }
        if self.triangles[0] == t {
            Some(self.triangles[1])
        } else {
            Some(self.triangles[0])
        }
    }

    pub fn other_vertex(&self, v: usize) -> Option<usize> {
        if self.vertices[0] == v {
            Some(self.vertices[1])
        } else if self.vertices[1] == v {
            Some(self.vertices[0])
        } else {
            None
        }
    }

    /// Local slot of `v` within this edge, if present.
    pub fn contains(&self, v: usize) -> Option<usize> {
        self.vertices.iter().position(|&w| w == v)
    }
}

#[derive(Debug, Clone)]
pub struct Triangle {
    pub index: usize,

    /// Ordered vertices; the order defines the winding.
    pub vertices: [usize; 3],

    /// Edge j is opposite vertex j: it joins vertices (j+1)%3 and (j+2)%3.
    pub edges: [usize; 3],

    /// Outward unit normal, oriented globally by the builder.
    pub normal: DVec3,

    /// Area from Heron's formula on the cached edge lengths.
    pub area: f64,
}

impl Triangle {
    pub fn new(index: usize, vertices: [usize; 3]) -> Self {
        Self {
            index,
            vertices,
            edges: [INVALID; 3],
            normal: DVec3::ZERO,
            area: 0.0,
        }
    }

    /// Local slot of `v` within this triangle, if present.
    pub fn contains(&self, v: usize) -> Option<usize> {
        self.vertices.iter().position(|&w| w == v)
    }
}
