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

use crate::geometry::{Point2, aabb::Aabb2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2 {
    pub a: Point2,
    pub b: Point2,
}

impl Segment2 {
    pub fn new(a: &Point2, b: &Point2) -> Self {
        Self { a: *a, b: *b }
    }

    pub fn length(&self) -> f64 {
        self.a.distance_to(&self.b)
    }

    pub fn midpoint(&self) -> Point2 {
        self.a.midpoint(&self.b)
    }

    /// Point at proportion `t` along the segment, `a` at 0 and `b` at 1.
    pub fn proportional_position(&self, t: f64) -> Point2 {
        self.a.lerp(&self.b, t)
    }

    /// Parameter of the projection of `p` onto the supporting line.
    pub fn parameter_t(&self, p: &Point2) -> f64 {
        let edge_vec = &self.b - &self.a;
        let point_vec = p - &self.a;

        let edge_len2 = edge_vec.dot(&edge_vec);
        if edge_len2 == 0.0 {
            return 0.0;
        }
        point_vec.dot(&edge_vec) / edge_len2
    }

    /// Distance from `p` to the closest point of the closed segment.
    pub fn distance_to_point(&self, p: &Point2) -> f64 {
        let t = self.parameter_t(p).clamp(0.0, 1.0);
        self.a.lerp(&self.b, t).distance_to(p)
    }

    /// Intersection of the two supporting lines, `None` when parallel.
    pub fn line_intersection(&self, other: &Segment2) -> Option<Point2> {
        let r = &self.b - &self.a;
        let s = &other.b - &other.a;
        let denom = r.cross(&s);
        if denom == 0.0 {
            return None;
        }
        let t = (&other.a - &self.a).cross(&s) / denom;
        Some(self.a.lerp(&self.b, t))
    }

    pub fn is_degenerate(&self) -> bool {
        self.a.overlaps(&self.b)
    }

    pub fn bounds(&self) -> Aabb2 {
        Aabb2::from_points(&self.a, &self.b)
    }

    pub fn inverse(&self) -> Self {
        Self::new(&self.b, &self.a)
    }
}
