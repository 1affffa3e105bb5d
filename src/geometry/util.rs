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

use std::f64::consts::PI;

use glam::DVec3;

/// Clamps a cosine to [-1, 1] before it reaches `acos`. Precision drift in
/// the dot products must not surface as a domain error.
#[inline]
pub fn clamp_unit(x: f64) -> f64 {
    x.clamp(-1.0, 1.0)
}

/// Triangle area from its three edge lengths via Heron's formula.
/// A negative radicand from a degenerate (collinear) triangle clamps to zero.
pub fn heron_area(l0: f64, l1: f64, l2: f64) -> f64 {
    let s = 0.5 * (l0 + l1 + l2);
    let radicand = s * (s - l0) * (s - l1) * (s - l2);
    radicand.max(0.0).sqrt()
}

/// Triangle area from vertex positions (half cross-product magnitude).
pub fn area_from_positions(p0: DVec3, p1: DVec3, p2: DVec3) -> f64 {
    0.5 * (p1 - p0).cross(p2 - p0).length()
}

/// Spherical excess of the triangle spanned by three unit vectors on the
/// sphere of directions: the sum of its interior angles minus pi.
///
/// Parallel inputs collapse the spherical triangle; its area is zero and
/// must not leak a NaN through the downstream dot/acos chain.
pub fn spherical_area(n0: DVec3, n1: DVec3, n2: DVec3) -> f64 {
    let cross01 = n0.cross(n1).normalize_or_zero();
    let cross12 = n1.cross(n2).normalize_or_zero();
    let cross20 = n2.cross(n0).normalize_or_zero();
    if cross01 == DVec3::ZERO || cross12 == DVec3::ZERO || cross20 == DVec3::ZERO {
        return 0.0;
    }

    let angle201 = clamp_unit(cross20.dot(-cross01)).acos();
    let angle012 = clamp_unit(cross01.dot(-cross12)).acos();
    let angle120 = clamp_unit(cross12.dot(-cross20)).acos();

    angle201 + angle012 + angle120 - PI
}
