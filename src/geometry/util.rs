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

use crate::geometry::Point2;

pub const EPS: f64 = 1e-10;

/// Barycentric weights `(u, v, w)` of `p` with respect to `a`, `b`, `c`,
/// so that `p = u*a + v*b + w*c` and `u + v + w = 1`.
///
/// Returns `None` for a degenerate triangle.
pub fn barycentric_coords(p: &Point2, a: &Point2, b: &Point2, c: &Point2) -> Option<(f64, f64, f64)> {
    let v0 = b - a;
    let v1 = c - a;
    let v2 = p - a;

    let d00 = v0.dot(&v0);
    let d01 = v0.dot(&v1);
    let d11 = v1.dot(&v1);
    let d20 = v2.dot(&v0);
    let d21 = v2.dot(&v1);

    let denom = d00 * d11 - d01 * d01;
    // relative test: denom = |v0|^2 |v1|^2 sin^2(angle)
    if denom <= EPS * d00 * d11 {
        return None; // degenerate triangle
    }

    let v = (d11 * d20 - d01 * d21) / denom; // coeff of B
    let w = (d00 * d21 - d01 * d20) / denom; // coeff of C
    let u = 1.0 - v - w; // coeff of A

    Some((u, v, w))
}

/// Inverse of [`barycentric_coords`].
pub fn from_barycentric(u: f64, v: f64, w: f64, a: &Point2, b: &Point2, c: &Point2) -> Point2 {
    Point2 {
        x: u * a.x + v * b.x + w * c.x,
        y: u * a.y + v * b.y + w * c.y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_inside_triangle() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(4.0, 0.0);
        let c = Point2::new(0.0, 2.0);
        let p = Point2::new(1.0, 0.5);

        let (u, v, w) = barycentric_coords(&p, &a, &b, &c).unwrap();
        assert!((u + v + w - 1.0).abs() < 1e-12);
        assert!((v - 0.25).abs() < 1e-12);
        assert!((w - 0.25).abs() < 1e-12);

        let q = from_barycentric(u, v, w, &a, &b, &c);
        assert!((q.x - p.x).abs() < 1e-12 && (q.y - p.y).abs() < 1e-12);
    }

    #[test]
    fn degenerate_triangle_has_no_coords() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 1.0);
        let c = Point2::new(2.0, 2.0);
        assert!(barycentric_coords(&Point2::new(0.5, 0.5), &a, &b, &c).is_none());
    }
}
