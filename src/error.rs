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

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MeshError>;

/// Failures raised while parsing, building, or traversing a mesh.
///
/// Format errors abort construction with no partial mesh; topology errors
/// signal a structural defect in the input or a prior pass. Neither is
/// recoverable inline.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("input is not a ply file")]
    NotPly,

    #[error("malformed ply header: {0}")]
    BadHeader(String),

    #[error("face {face} declares {count} vertices, expected 3")]
    NonTriangularFace { face: usize, count: usize },

    #[error("face {face} references vertex {vertex} but the mesh has {len} vertices")]
    VertexIndexOutOfRange {
        face: usize,
        vertex: usize,
        len: usize,
    },

    #[error("face {face} repeats a vertex index")]
    DegenerateFace { face: usize },

    #[error("line {line}: expected a number")]
    BadNumber { line: usize },

    #[error("unexpected end of file")]
    Truncated,

    #[error("edge ({v0}, {v1}) is shared by more than two triangles")]
    NonManifoldEdge { v0: usize, v1: usize },

    #[error("triangulation error at triangle {triangle}")]
    Triangulation { triangle: usize },

    #[error("triangle {triangle} has no edge opposite vertex {vertex}")]
    MissingOppositeEdge { triangle: usize, vertex: usize },

    #[error("ring walk from corner {corner} failed to terminate")]
    RingWalkDiverged { corner: usize },

    #[error("vertex {vertex} is out of range for this mesh")]
    VertexOutOfRange { vertex: usize },

    #[error("operation requires an initialized mesh (call Polyhedron::initialize first)")]
    Uninitialized,

    #[error("expected {expected} scalar values, got {got}")]
    ScalarLengthMismatch { expected: usize, got: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
