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

use std::f64::consts::TAU;

use crate::error::{MeshError, MeshResult};
use crate::geometry::{Aabb2, Point2, Segment2, Vector2};
use crate::kernel::is_point_on_segment;

/// A closed specimen outline, as delivered by the segmentation layer.
///
/// Border index 0 is the reference point. Segments are contiguous runs of
/// border points, ordered from the reference point, and let vertex placement
/// stay comparable across outlines with different point counts.
pub trait Shape: Sync {
    fn border_points(&self) -> &[Point2];

    fn contains_point(&self, p: &Point2) -> bool;

    fn segment_count(&self) -> usize;

    /// Number of border points covered by `segment`.
    fn segment_length(&self, segment: usize) -> MeshResult<usize>;

    /// Border index found at `proportion` (0..=1) of the way through `segment`.
    fn proportional_index(&self, segment: usize, proportion: f64) -> MeshResult<usize>;

    /// Border point at `index`, wrapping around the outline. An empty
    /// border yields the origin.
    fn border_point(&self, index: usize) -> Point2 {
        let points = self.border_points();
        index
            .checked_rem(points.len())
            .map(|i| points[i])
            .unwrap_or_default()
    }

    fn bounds(&self) -> Aabb2 {
        Aabb2::from_slice(self.border_points())
            .unwrap_or_else(|| Aabb2::new(Point2::default(), Point2::default()))
    }
}

/// Polygonal outline split into segments at the given start indices.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    points: Vec<Point2>,
    segment_starts: Vec<usize>,
}

impl Outline {
    pub const MIN_POINTS: usize = 3;

    /// Outline with a single segment starting at the reference point.
    pub fn new(points: Vec<Point2>) -> MeshResult<Self> {
        Self::with_segments(points, vec![0])
    }

    pub fn with_segments(points: Vec<Point2>, mut segment_starts: Vec<usize>) -> MeshResult<Self> {
        if points.len() < Self::MIN_POINTS {
            return Err(MeshError::TooFewBorderPoints {
                min: Self::MIN_POINTS,
                found: points.len(),
            });
        }
        segment_starts.sort_unstable();
        segment_starts.dedup();
        if let Some(&bad) = segment_starts.iter().find(|&&s| s >= points.len()) {
            return Err(MeshError::UndefinedSegment(bad));
        }
        if segment_starts.is_empty() {
            segment_starts.push(0);
        }
        Ok(Self {
            points,
            segment_starts,
        })
    }

    /// `n` points on a circle, the reference point at angle zero.
    pub fn regular_polygon(n: usize, radius: f64, centre: Point2) -> MeshResult<Self> {
        Self::ellipse(n, radius, radius, centre)
    }

    pub fn ellipse(n: usize, semi_x: f64, semi_y: f64, centre: Point2) -> MeshResult<Self> {
        let points = (0..n)
            .map(|i| {
                let angle = TAU * i as f64 / n as f64;
                Point2::new(
                    centre.x + semi_x * angle.cos(),
                    centre.y + semi_y * angle.sin(),
                )
            })
            .collect();
        Self::new(points)
    }

    /// Copy split into `count` segments of (nearly) equal length.
    pub fn split_evenly(&self, count: usize) -> MeshResult<Self> {
        let n = self.points.len();
        let count = count.clamp(1, n);
        let starts = (0..count).map(|i| i * n / count).collect();
        Self::with_segments(self.points.clone(), starts)
    }

    /// Similarity transform about the origin: scale, rotate, then translate.
    pub fn transformed(&self, scale: f64, angle: f64, offset: Vector2) -> Self {
        let points = self
            .points
            .iter()
            .map(|p| Point2::default() + p.as_vector().scale(scale).rotate(angle) + offset)
            .collect();
        Self {
            points,
            segment_starts: self.segment_starts.clone(),
        }
    }

    pub fn segment_starts(&self) -> &[usize] {
        &self.segment_starts
    }

    fn segment_bounds(&self, segment: usize) -> MeshResult<(usize, usize)> {
        let n = self.points.len();
        let start = *self
            .segment_starts
            .get(segment)
            .ok_or(MeshError::UndefinedSegment(segment))?;
        let end = match self.segment_starts.get(segment + 1) {
            Some(&next) => next,
            None => self.segment_starts[0] + n,
        };
        Ok((start, end - start))
    }
}

impl Shape for Outline {
    fn border_points(&self) -> &[Point2] {
        &self.points
    }

    /// Even-odd rule; points on the border count as inside.
    fn contains_point(&self, p: &Point2) -> bool {
        let n = self.points.len();
        let mut inside = false;
        for i in 0..n {
            let a = &self.points[i];
            let b = &self.points[(i + 1) % n];
            if is_point_on_segment(p, &Segment2::new(a, b)) {
                return true;
            }
            if (a.y > p.y) != (b.y > p.y) {
                let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if p.x < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }

    fn segment_count(&self) -> usize {
        self.segment_starts.len()
    }

    fn segment_length(&self, segment: usize) -> MeshResult<usize> {
        self.segment_bounds(segment).map(|(_, len)| len)
    }

    fn proportional_index(&self, segment: usize, proportion: f64) -> MeshResult<usize> {
        if !(0.0..=1.0).contains(&proportion) {
            return Err(MeshError::InvalidProportion(proportion));
        }
        let (start, len) = self.segment_bounds(segment)?;
        let offset = (proportion * len as f64).round() as usize;
        Ok((start + offset) % self.points.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Outline {
        Outline::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ])
        .unwrap()
    }

    #[test]
    fn containment_even_odd() {
        let s = square();
        assert!(s.contains_point(&Point2::new(5.0, 5.0)));
        assert!(s.contains_point(&Point2::new(0.0, 5.0)));
        assert!(!s.contains_point(&Point2::new(11.0, 5.0)));
        assert!(!s.contains_point(&Point2::new(-0.1, -0.1)));
    }

    #[test]
    fn segments_cover_the_outline() {
        let o = Outline::regular_polygon(40, 20.0, Point2::default())
            .unwrap()
            .split_evenly(3)
            .unwrap();
        assert_eq!(o.segment_count(), 3);
        let total: usize = (0..3).map(|s| o.segment_length(s).unwrap()).sum();
        assert_eq!(total, 40);
        assert_eq!(o.proportional_index(0, 0.0).unwrap(), 0);
        assert_eq!(o.proportional_index(2, 1.0).unwrap(), 0);
    }

    #[test]
    fn undefined_segment_is_an_error() {
        let s = square();
        assert_eq!(s.segment_length(1), Err(MeshError::UndefinedSegment(1)));
        assert_eq!(
            s.proportional_index(0, 1.5),
            Err(MeshError::InvalidProportion(1.5))
        );
    }

    struct Empty;

    impl Shape for Empty {
        fn border_points(&self) -> &[Point2] {
            &[]
        }

        fn contains_point(&self, _p: &Point2) -> bool {
            false
        }

        fn segment_count(&self) -> usize {
            0
        }

        fn segment_length(&self, segment: usize) -> MeshResult<usize> {
            Err(MeshError::UndefinedSegment(segment))
        }

        fn proportional_index(&self, segment: usize, _proportion: f64) -> MeshResult<usize> {
            Err(MeshError::UndefinedSegment(segment))
        }
    }

    #[test]
    fn border_point_wraps_and_tolerates_empty_borders() {
        let s = square();
        assert_eq!(s.border_point(5), Point2::new(10.0, 0.0));
        assert_eq!(Empty.border_point(3), Point2::default());
    }

    #[test]
    fn too_few_points() {
        let err = Outline::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]).unwrap_err();
        assert_eq!(err, MeshError::TooFewBorderPoints { min: 3, found: 2 });
    }
}
