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

use glam::DVec3;
use polymesh::{mesh::Polyhedron, MeshError};

#[test]
fn tetrahedron_counts() {
    let mesh = common::tetrahedron();
    assert_eq!(mesh.vertices.len(), 4);
    assert_eq!(mesh.edges.len(), 6);
    assert_eq!(mesh.triangles.len(), 4);
    assert_eq!(mesh.corners.len(), 12);
}

#[test]
fn tetrahedron_edges_are_interior() {
    let mesh = common::tetrahedron();
    for edge in &mesh.edges {
        assert_eq!(edge.triangles.len(), 2, "edge {:?}", edge.vertices);
        assert!(!edge.is_boundary());
    }
}

#[test]
fn edge_slots_oppose_their_vertex() {
    for mesh in [common::tetrahedron(), common::hexagon_fan()] {
        for t in &mesh.triangles {
            for j in 0..3 {
                let edge = &mesh.edges[t.edges[j]];
                assert!(edge.contains(t.vertices[j]).is_none());
                assert!(edge.contains(t.vertices[(j + 1) % 3]).is_some());
                assert!(edge.contains(t.vertices[(j + 2) % 3]).is_some());
            }
        }
    }
}

#[test]
fn edge_lengths_cached() {
    let mesh = common::tetrahedron();
    let expected = 2.0 * 2.0f64.sqrt();
    for edge in &mesh.edges {
        common::assert_close(edge.length, expected, 1e-12);
    }
}

#[test]
fn tetrahedron_surface_area() {
    let mesh = common::tetrahedron();
    // Four equilateral triangles of side 2*sqrt(2).
    let expected = 4.0 * (3.0f64.sqrt() / 4.0) * 8.0;
    common::assert_close(mesh.surface_area, expected, 1e-9);
}

#[test]
fn normals_point_outward() {
    let mesh = common::tetrahedron();
    for t in &mesh.triangles {
        let centroid = (mesh.position(t.vertices[0])
            + mesh.position(t.vertices[1])
            + mesh.position(t.vertices[2]))
            / 3.0;
        assert!(
            t.normal.dot(centroid - mesh.bounds.center) > 0.0,
            "triangle {} normal points inward",
            t.index
        );
        common::assert_close(t.normal.length(), 1.0, 1e-12);
    }
}

#[test]
fn vertex_normals_follow_faces() {
    let mesh = common::tetrahedron();
    // Each vertex normal averages three outward face normals and must point
    // away from the centroid along the vertex direction.
    for v in &mesh.vertices {
        assert!(v.normal.dot(v.position) > 0.0, "vertex {}", v.index);
        common::assert_close(v.normal.length(), 1.0, 1e-12);
    }
}

#[test]
fn bounding_sphere_contains_all_vertices() {
    let mesh = common::tetrahedron();
    assert_eq!(mesh.bounds.center, DVec3::ZERO);
    common::assert_close(mesh.bounds.radius, 3.0f64.sqrt(), 1e-12);
    for v in &mesh.vertices {
        // Corner vertices sit exactly on the sphere; allow rounding slack.
        let distance = mesh.bounds.center.distance(v.position);
        assert!(distance <= mesh.bounds.radius + 1e-9);
    }
    assert!(mesh.bounds.contains(DVec3::ZERO));
    assert!(!mesh.bounds.contains(DVec3::new(2.0, 2.0, 2.0)));
}

#[test]
fn fan_ordering_consecutive_triangles_share_an_edge() {
    let mesh = common::tetrahedron();
    for v in &mesh.vertices {
        let fan = &v.triangles;
        assert_eq!(fan.len(), 3);
        for i in 0..fan.len() {
            let a = &mesh.triangles[fan[i]];
            let b = &mesh.triangles[fan[(i + 1) % fan.len()]];
            let shared = a.edges.iter().filter(|e| b.edges.contains(e)).count();
            assert_eq!(shared, 1, "fan of vertex {} breaks at {}", v.index, i);
        }
    }
}

#[test]
fn interior_fan_is_cyclically_ordered() {
    let mesh = common::hexagon_fan();
    let fan = &mesh.vertices[0].triangles;
    assert_eq!(fan.len(), 6);
    for i in 0..6 {
        let a = &mesh.triangles[fan[i]];
        let b = &mesh.triangles[fan[(i + 1) % 6]];
        let shared = a.edges.iter().filter(|e| b.edges.contains(e)).count();
        assert_eq!(shared, 1, "center fan breaks between slots {i} and next");
    }
}

#[test]
fn boundary_fan_starts_at_a_boundary_triangle() {
    let mesh = common::hexagon_fan();
    for vi in 1..=6 {
        let fan = &mesh.vertices[vi].triangles;
        assert_eq!(fan.len(), 2);
        let first = &mesh.triangles[fan[0]];
        let boundary = first
            .edges
            .iter()
            .any(|&e| mesh.edges[e].is_boundary() && mesh.edges[e].contains(vi).is_some());
        assert!(boundary, "fan of vertex {vi} starts interior");
    }
}

#[test]
fn out_of_range_face_index_is_rejected() {
    let positions = vec![DVec3::ZERO, DVec3::X, DVec3::Y];
    let err = Polyhedron::build(&positions, &[[0, 1, 5]]).unwrap_err();
    assert!(matches!(
        err,
        MeshError::VertexIndexOutOfRange { face: 0, vertex: 5, len: 3 }
    ));
}

#[test]
fn repeated_face_index_is_rejected() {
    let positions = vec![DVec3::ZERO, DVec3::X, DVec3::Y];
    let err = Polyhedron::build(&positions, &[[0, 1, 1]]).unwrap_err();
    assert!(matches!(err, MeshError::DegenerateFace { face: 0 }));
}

#[test]
fn three_triangles_on_one_edge_are_rejected() {
    let positions = vec![
        DVec3::ZERO,
        DVec3::X,
        DVec3::Y,
        DVec3::Z,
        DVec3::new(0.0, -1.0, 0.0),
    ];
    let faces = [[0, 1, 2], [0, 1, 3], [1, 0, 4]];
    let err = Polyhedron::build(&positions, &faces).unwrap_err();
    assert!(matches!(err, MeshError::NonManifoldEdge { .. }));
}

#[test]
fn empty_mesh_builds() {
    let mesh = Polyhedron::build(&[], &[]).unwrap();
    assert!(mesh.is_initialized());
    assert_eq!(mesh.vertices.len(), 0);
    assert_eq!(mesh.face_indices().len(), 0);
}
