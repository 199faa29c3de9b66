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

use crate::geometry::Point2;
use crate::numeric::rational::ExactRational;

// Shewchuk's static error bound for the 2-D orientation determinant.
const CCW_ERR_BOUND: f64 = 3.330_669_073_875_471_6e-16;

/// Returns:
/// - >0 if counter-clockwise
/// - <0 if clockwise
/// - =0 if collinear
///
/// Plain floating-point evaluation; use [`orient2d_sign`] when only the sign
/// matters.
pub fn orient2d(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Sign of the orientation determinant, exact for all finite input.
///
/// The floating value is trusted when it clears the error bound; otherwise
/// the determinant is re-evaluated over rationals.
pub fn orient2d_sign(a: &Point2, b: &Point2, c: &Point2) -> Ordering {
    let detleft = (b.x - a.x) * (c.y - a.y);
    let detright = (b.y - a.y) * (c.x - a.x);
    let det = detleft - detright;

    let errbound = CCW_ERR_BOUND * (detleft.abs() + detright.abs());
    if det > errbound {
        return Ordering::Greater;
    }
    if -det > errbound {
        return Ordering::Less;
    }
    orient2d_exact(a, b, c)
}

pub fn orient2d_exact(a: &Point2, b: &Point2, c: &Point2) -> Ordering {
    let ax = ExactRational::from_f64(a.x);
    let ay = ExactRational::from_f64(a.y);
    let bx = ExactRational::from_f64(b.x);
    let by = ExactRational::from_f64(b.y);
    let cx = ExactRational::from_f64(c.x);
    let cy = ExactRational::from_f64(c.y);

    let left = &(&bx - &ax) * &(&cy - &ay);
    let right = &(&by - &ay) * &(&cx - &ax);
    (&left - &right).cmp_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ccw_test() {
        let a = Point2 { x: 0.0, y: 0.0 };
        let b = Point2 { x: 1.0, y: 0.0 };
        let c = Point2 { x: 0.0, y: 1.0 };

        assert!(orient2d(&a, &b, &c) > 0.0); // Counter-clockwise
        assert_eq!(orient2d_sign(&a, &b, &c), Ordering::Greater);
        assert_eq!(orient2d_sign(&a, &c, &b), Ordering::Less);
    }

    #[test]
    fn nearly_collinear_resolved_exactly() {
        // c sits one ulp off the line through a and b; the float determinant
        // is lost to rounding.
        let a = Point2::new(0.5, 0.5);
        let b = Point2::new(12.0, 12.0);
        let c = Point2::new(24.0, f64::from_bits(24.0_f64.to_bits() + 1));

        assert_eq!(orient2d_sign(&a, &b, &c), orient2d_exact(&a, &b, &c));
        assert_eq!(orient2d_exact(&a, &b, &c), Ordering::Greater);
        assert_eq!(
            orient2d_sign(&a, &b, &Point2::new(24.0, 24.0)),
            Ordering::Equal
        );
    }
}
