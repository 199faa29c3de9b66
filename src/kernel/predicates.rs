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

use std::cmp::Ordering;

use crate::geometry::{Point2, Segment2};
use crate::kernel::orientation::orient2d_sign;

pub fn are_equal(p1: &Point2, p2: &Point2, eps: f64) -> bool {
    (p1.x - p2.x).abs() < eps && (p1.y - p2.y).abs() < eps
}

pub fn are_collinear(a: &Point2, b: &Point2, c: &Point2) -> bool {
    orient2d_sign(a, b, c) == Ordering::Equal
}

/// `p` lies on the closed segment. Endpoints count.
pub fn is_point_on_segment(p: &Point2, seg: &Segment2) -> bool {
    if !are_collinear(&seg.a, &seg.b, p) {
        return false;
    }
    within_bounds(p, &seg.a, &seg.b)
}

// p inside the box spanned by a and b (used once collinearity is known)
fn within_bounds(p: &Point2, a: &Point2, b: &Point2) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Closed segments `p1p2` and `p3p4` share at least one point.
///
/// Touching at an endpoint and collinear overlap both count as an
/// intersection.
pub fn segments_intersect(p1: &Point2, p2: &Point2, p3: &Point2, p4: &Point2) -> bool {
    let o1 = orient2d_sign(p1, p2, p3);
    let o2 = orient2d_sign(p1, p2, p4);
    let o3 = orient2d_sign(p3, p4, p1);
    let o4 = orient2d_sign(p3, p4, p2);

    if straddles(o1, o2) && straddles(o3, o4) {
        return true;
    }

    if o1 == Ordering::Equal && within_bounds(p3, p1, p2) {
        return true;
    }
    if o2 == Ordering::Equal && within_bounds(p4, p1, p2) {
        return true;
    }
    if o3 == Ordering::Equal && within_bounds(p1, p3, p4) {
        return true;
    }
    if o4 == Ordering::Equal && within_bounds(p2, p3, p4) {
        return true;
    }
    false
}

fn straddles(o1: Ordering, o2: Ordering) -> bool {
    matches!(
        (o1, o2),
        (Ordering::Less, Ordering::Greater) | (Ordering::Greater, Ordering::Less)
    )
}

/// `p` is inside the triangle or on its border, for either winding.
///
/// A degenerate (collinear) triangle contains only the points of its sides.
pub fn point_in_triangle(p: &Point2, a: &Point2, b: &Point2, c: &Point2) -> bool {
    if are_collinear(a, b, c) {
        return is_point_on_segment(p, &Segment2::new(a, b))
            || is_point_on_segment(p, &Segment2::new(b, c))
            || is_point_on_segment(p, &Segment2::new(c, a));
    }

    let d1 = orient2d_sign(a, b, p);
    let d2 = orient2d_sign(b, c, p);
    let d3 = orient2d_sign(c, a, p);

    let has_neg = d1 == Ordering::Less || d2 == Ordering::Less || d3 == Ordering::Less;
    let has_pos = d1 == Ordering::Greater || d2 == Ordering::Greater || d3 == Ordering::Greater;

    !(has_neg && has_pos)
}

/// `p` is strictly inside the triangle, not on any side.
pub fn point_strictly_in_triangle(p: &Point2, a: &Point2, b: &Point2, c: &Point2) -> bool {
    let d1 = orient2d_sign(a, b, p);
    let d2 = orient2d_sign(b, c, p);
    let d3 = orient2d_sign(c, a, p);

    d1 != Ordering::Equal && d1 == d2 && d2 == d3
}
