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

use std::io::Cursor;

use glam::DVec3;
use polymesh::{
    io::{read_ply, read_ply_from, write_ply, write_ply_to},
    MeshError,
};

const TETRAHEDRON_PLY: &str = "\
ply
format ascii 1.0
comment regular tetrahedron
element vertex 4
property double x
property double y
property double z
element face 4
property list uchar uint vertex_indices
end_header
1 1 1
1 -1 -1
-1 1 -1
-1 -1 1
3 0 1 2
3 0 3 1
3 0 2 3
3 1 3 2
";

#[test]
fn reads_a_tetrahedron() {
    let mesh = read_ply_from(Cursor::new(TETRAHEDRON_PLY)).unwrap();
    assert_eq!(mesh.vertices.len(), 4);
    assert_eq!(mesh.triangles.len(), 4);
    assert_eq!(mesh.edges.len(), 6);
    assert!(mesh.is_initialized());
    assert_eq!(mesh.position(3), DVec3::new(-1.0, -1.0, 1.0));
}

#[test]
fn extra_vertex_properties_are_ignored() {
    let data = "\
ply
format ascii 1.0
element vertex 3
property float x
property float y
property float z
property float nx
property float ny
property float nz
element face 1
property list uchar uint vertex_indices
end_header
0 0 0 0 0 1
1 0 0 0 0 1
0 1 0 0 0 1
3 0 1 2
";
    let mesh = read_ply_from(Cursor::new(data)).unwrap();
    assert_eq!(mesh.vertices.len(), 3);
    assert_eq!(mesh.position(1), DVec3::X);
}

#[test]
fn rejects_non_ply_input() {
    let err = read_ply_from(Cursor::new("obj\nv 0 0 0\n")).unwrap_err();
    assert!(matches!(err, MeshError::NotPly));
}

#[test]
fn rejects_unknown_elements() {
    let data = "ply\nformat ascii 1.0\nelement tetra 1\nend_header\n";
    let err = read_ply_from(Cursor::new(data)).unwrap_err();
    assert!(matches!(err, MeshError::BadHeader(_)));
}

#[test]
fn rejects_quad_faces() {
    let data = "\
ply
element vertex 4
element face 1
end_header
0 0 0
1 0 0
1 1 0
0 1 0
4 0 1 2 3
";
    let err = read_ply_from(Cursor::new(data)).unwrap_err();
    assert!(matches!(
        err,
        MeshError::NonTriangularFace { face: 0, count: 4 }
    ));
}

#[test]
fn rejects_malformed_numbers() {
    let data = "\
ply
element vertex 1
element face 0
end_header
0 zero 0
";
    let err = read_ply_from(Cursor::new(data)).unwrap_err();
    assert!(matches!(err, MeshError::BadNumber { line: 5 }));
}

#[test]
fn rejects_truncated_files() {
    let data = "\
ply
element vertex 4
element face 4
end_header
1 1 1
1 -1 -1
";
    let err = read_ply_from(Cursor::new(data)).unwrap_err();
    assert!(matches!(err, MeshError::Truncated));
}

#[test]
fn writes_a_readable_header() {
    let mesh = common::tetrahedron();
    let mut out = Vec::new();
    write_ply_to(&mesh, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("ply\nformat ascii 1.0\n"));
    assert!(text.contains("element vertex 4\n"));
    assert!(text.contains("element face 4\n"));
}

#[test]
fn roundtrip_through_a_file() {
    let mesh = common::tetrahedron();
    let path = std::env::temp_dir().join("polymesh_roundtrip_test.ply");
    write_ply(&mesh, &path).unwrap();
    let reread = read_ply(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(reread.vertices.len(), mesh.vertices.len());
    assert_eq!(reread.face_indices(), mesh.face_indices());
    for (a, b) in reread.vertices.iter().zip(&mesh.vertices) {
        assert_eq!(a.position, b.position);
    }
}
