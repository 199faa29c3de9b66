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
use std::ops::{Add, Mul, Sub};

use num_traits::ToPrimitive;
use rug::Rational;

/// Arbitrary-precision rational backed by GMP, used only on the slow path of
/// the geometric predicates.
#[derive(Clone, Debug)]
pub struct ExactRational(pub Rational);

impl ExactRational {
    /// Every finite f64 is a dyadic rational, so the conversion is exact.
    /// Non-finite input maps to zero.
    pub fn from_f64(v: f64) -> Self {
        ExactRational(Rational::from_f64(v).unwrap_or_default())
    }

    pub fn zero() -> Self {
        ExactRational(Rational::new())
    }

    /// Sign as an `Ordering` against zero.
    pub fn cmp_zero(&self) -> Ordering {
        self.0.cmp0()
    }

    pub fn is_zero(&self) -> bool {
        self.cmp_zero() == Ordering::Equal
    }
}

impl<'a, 'b> Add<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    fn add(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result += &rhs.0;
        ExactRational(result)
    }
}

impl<'a, 'b> Sub<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    fn sub(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result -= &rhs.0;
        ExactRational(result)
    }
}

impl<'a, 'b> Mul<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    fn mul(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result *= &rhs.0;
        ExactRational(result)
    }
}

impl PartialEq for ExactRational {
    fn eq(&self, other: &ExactRational) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for ExactRational {
    fn partial_cmp(&self, other: &ExactRational) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl From<f64> for ExactRational {
    fn from(value: f64) -> Self {
        ExactRational::from_f64(value)
    }
}

impl ToPrimitive for ExactRational {
    fn to_i64(&self) -> Option<i64> {
        let t = self.0.to_f64().trunc();
        if t.is_finite() && t >= i64::MIN as f64 && t <= i64::MAX as f64 {
            Some(t as i64)
        } else {
            None
        }
    }

    fn to_u64(&self) -> Option<u64> {
        let t = self.0.to_f64().trunc();
        if t.is_finite() && t >= 0.0 && t <= u64::MAX as f64 {
            Some(t as u64)
        } else {
            None
        }
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.0.to_f64())
    }
}
