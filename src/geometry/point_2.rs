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

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::geometry::vector_2::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new<X, Y>(x: X, y: Y) -> Self
    where
        X: Into<f64>,
        Y: Into<f64>,
    {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    pub fn from_vals(vals: [f64; 2]) -> Self {
        Self {
            x: vals[0],
            y: vals[1],
        }
    }

    pub fn distance_to(&self, other: &Point2) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn midpoint(&self, other: &Point2) -> Point2 {
        Point2 {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Point at parameter `t` on the line from `self` (t = 0) to `other` (t = 1).
    pub fn lerp(&self, other: &Point2, t: f64) -> Point2 {
        Point2 {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    pub fn as_vector(&self) -> Vector2 {
        Vector2 {
            x: self.x,
            y: self.y,
        }
    }

    pub fn add_vector(&self, v: &Vector2) -> Point2 {
        Point2 {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }

    /// Exact coordinate equality, the notion of "same position" used when
    /// seeding candidate edges.
    pub fn overlaps(&self, other: &Point2) -> bool {
        self.x == other.x && self.y == other.y
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<'a, 'b> Sub<&'b Point2> for &'a Point2 {
    type Output = Vector2;
    fn sub(self, rhs: &'b Point2) -> Vector2 {
        Vector2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Sub for Point2 {
    type Output = Vector2;
    fn sub(self, rhs: Point2) -> Vector2 {
        &self - &rhs
    }
}

impl<'a, 'b> Add<&'b Vector2> for &'a Point2 {
    type Output = Point2;
    fn add(self, rhs: &'b Vector2) -> Point2 {
        self.add_vector(rhs)
    }
}

impl Add<Vector2> for Point2 {
    type Output = Point2;
    fn add(self, rhs: Vector2) -> Point2 {
        self.add_vector(&rhs)
    }
}

impl From<(f64, f64)> for Point2 {
    fn from(coords: (f64, f64)) -> Self {
        Point2 {
            x: coords.0,
            y: coords.1,
        }
    }
}
