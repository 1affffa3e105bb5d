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

mod common;

use polymesh::MeshError;

#[test]
fn corner_table_indexing() {
    let mesh = common::tetrahedron();
    for (i, c) in mesh.corners.iter().enumerate() {
        let t = i / 3;
        let j = i % 3;
        assert_eq!(c.index, i);
        assert_eq!(c.t, t);
        assert_eq!(c.v, mesh.triangles[t].vertices[j]);
        assert_eq!(c.e, mesh.triangles[t].edges[j]);
        assert_eq!(c.n, 3 * t + (j + 1) % 3);
        assert_eq!(c.p, 3 * t + (j + 2) % 3);
    }
}

#[test]
fn opposite_links_are_symmetric() {
    let mesh = common::tetrahedron();
    for (i, c) in mesh.corners.iter().enumerate() {
        let o = c.o.expect("closed mesh has no boundary corners");
        assert_eq!(mesh.corners[o].o, Some(i));
        assert_eq!(mesh.corners[o].e, c.e, "opposite corners share an edge");
        assert_ne!(mesh.corners[o].t, c.t);
    }
}

#[test]
fn boundary_corners_have_no_opposite() {
    let mesh = common::hexagon_fan();
    for c in &mesh.corners {
        let boundary = mesh.edges[c.e].is_boundary();
        assert_eq!(c.o.is_none(), boundary, "corner {}", c.index);
    }
}

#[test]
fn tetrahedron_rings() {
    let mesh = common::tetrahedron();
    for start in 0..mesh.corners.len() {
        let v = mesh.corners[start].v;
        let mut ring = mesh.adjacent_vertices(start).unwrap();
        assert_eq!(ring.len(), 3);
        assert!(!ring.contains(&v));
        ring.sort_unstable();
        ring.dedup();
        assert_eq!(ring.len(), 3, "ring of vertex {v} repeats a neighbor");
    }
}

#[test]
fn interior_ring_is_cyclically_ordered() {
    let mesh = common::hexagon_fan();
    let start = mesh
        .corners
        .iter()
        .position(|c| c.v == 0)
        .expect("center has corners");
    let ring = mesh.adjacent_vertices(start).unwrap();
    assert_eq!(ring.len(), 6);
    for i in 0..6 {
        let a = ring[i];
        let b = ring[(i + 1) % 6];
        let adjacent = mesh
            .edges
            .iter()
            .any(|e| e.contains(a).is_some() && e.contains(b).is_some());
        assert!(adjacent, "{a} and {b} are consecutive but not adjacent");
    }
}

#[test]
fn boundary_ring_is_complete_and_ordered() {
    let mesh = common::hexagon_fan();
    for vi in 1..=6 {
        let start = mesh
            .corners
            .iter()
            .position(|c| c.v == vi)
            .expect("ring vertex has corners");
        let ring = mesh.adjacent_vertices(start).unwrap();

        let before = if vi == 1 { 6 } else { vi - 1 };
        let after = if vi == 6 { 1 } else { vi + 1 };
        assert_eq!(ring.len(), 3, "vertex {vi}");
        assert_eq!(ring[1], 0, "center must sit between the boundary ends");
        assert!(ring.contains(&before));
        assert!(ring.contains(&after));
    }
}

#[test]
fn single_triangle_rings() {
    let mesh = common::single_triangle();
    for start in 0..3 {
        let v = mesh.corners[start].v;
        let ring = mesh.adjacent_vertices(start).unwrap();
        assert_eq!(ring.len(), 2);
        assert!(!ring.contains(&v));
    }
}

#[test]
fn closed_ring_none_at_boundary() {
    let mesh = common::hexagon_fan();
    let center = mesh.corners.iter().position(|c| c.v == 0).unwrap();
    let walk = mesh.closed_ring(center).unwrap().expect("center is interior");
    assert_eq!(walk.corners.len(), 6);
    assert_eq!(*walk.corners.last().unwrap(), center);
    assert!(walk.closed);
    for &c in &walk.corners {
        assert_eq!(mesh.corners[c].v, 0);
    }

    let boundary = mesh.corners.iter().position(|c| c.v == 1).unwrap();
    assert!(mesh.closed_ring(boundary).unwrap().is_none());
}

#[test]
fn corrupted_table_diverges_instead_of_hanging() {
    let mut mesh = common::tetrahedron();
    // Point every opposite link into one foreign triangle so a walk starting
    // at corner 0 orbits there forever.
    for c in &mut mesh.corners {
        c.o = Some(3);
    }
    let err = mesh.adjacent_vertices(0).unwrap_err();
    assert!(matches!(err, MeshError::RingWalkDiverged { corner: 0 }));
}
