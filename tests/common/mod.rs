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

#![allow(dead_code)]

use std::f64::consts::PI;

use glam::DVec3;
use polymesh::mesh::Polyhedron;

/// Regular tetrahedron centered at the origin, all edges of length 2*sqrt(2).
pub fn tetrahedron_data() -> (Vec<DVec3>, Vec<[usize; 3]>) {
    let positions = vec![
        DVec3::new(1.0, 1.0, 1.0),
        DVec3::new(1.0, -1.0, -1.0),
        DVec3::new(-1.0, 1.0, -1.0),
        DVec3::new(-1.0, -1.0, 1.0),
    ];
    let faces = vec![[0, 1, 2], [0, 3, 1], [0, 2, 3], [1, 3, 2]];
    (positions, faces)
}

pub fn tetrahedron() -> Polyhedron {
    let (positions, faces) = tetrahedron_data();
    Polyhedron::build(&positions, &faces).expect("tetrahedron builds")
}

/// Flat hexagonal fan: vertex 0 at the origin, vertices 1..=6 on the unit
/// circle. Vertex 0 is interior with valence 6, the ring is boundary.
pub fn hexagon_fan_data() -> (Vec<DVec3>, Vec<[usize; 3]>) {
    let mut positions = vec![DVec3::ZERO];
    for i in 0..6 {
        let angle = i as f64 * PI / 3.0;
        positions.push(DVec3::new(angle.cos(), angle.sin(), 0.0));
    }
    let faces = (1..=6).map(|i| [0, i, i % 6 + 1]).collect();
    (positions, faces)
}

pub fn hexagon_fan() -> Polyhedron {
    let (positions, faces) = hexagon_fan_data();
    Polyhedron::build(&positions, &faces).expect("hexagon fan builds")
}

/// A lone triangle; every vertex and edge is boundary.
pub fn single_triangle() -> Polyhedron {
    let positions = vec![
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
    ];
    Polyhedron::build(&positions, &[[0, 1, 2]]).expect("single triangle builds")
}

pub fn assert_close(a: f64, b: f64, tolerance: f64) {
    assert!(
        (a - b).abs() <= tolerance,
        "expected {a} to be within {tolerance} of {b}"
    );
}
