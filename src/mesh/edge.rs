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

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Unordered vertex pair, stored low index first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeKey(usize, usize);

impl EdgeKey {
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b { EdgeKey(a, b) } else { EdgeKey(b, a) }
    }

    pub fn lo(&self) -> usize {
        self.0
    }

    pub fn hi(&self) -> usize {
        self.1
    }

    pub fn contains(&self, v: usize) -> bool {
        self.0 == v || self.1 == v
    }

    /// The endpoint that is not `v`, if `v` is an endpoint.
    pub fn other(&self, v: usize) -> Option<usize> {
        if self.0 == v {
            Some(self.1)
        } else if self.1 == v {
            Some(self.0)
        } else {
            None
        }
    }

    pub fn shares_endpoint(&self, other: &EdgeKey) -> bool {
        self.contains(other.0) || self.contains(other.1)
    }

    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }
}

/// Link between two mesh vertices carrying one scalar payload.
///
/// Equality and hashing ignore direction and payload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Edge {
    pub v1: usize,
    pub v2: usize,
    pub value: f64,
}

impl Edge {
    pub fn new(v1: usize, v2: usize) -> Self {
        Self::with_value(v1, v2, 1.0)
    }

    pub fn with_value(v1: usize, v2: usize, value: f64) -> Self {
        Self { v1, v2, value }
    }

    #[inline]
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.v1, self.v2)
    }

    pub fn contains(&self, v: usize) -> bool {
        self.v1 == v || self.v2 == v
    }

    pub fn shares_endpoint(&self, other: &Edge) -> bool {
        self.key().shares_endpoint(&other.key())
    }

    pub fn log2_ratio(&self) -> f64 {
        self.value.log2()
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl From<EdgeKey> for Edge {
    fn from(key: EdgeKey) -> Self {
        Edge::new(key.0, key.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(e: &Edge) -> u64 {
        let mut h = DefaultHasher::new();
        e.hash(&mut h);
        h.finish()
    }

    #[test]
    fn reversed_edges_are_equal() {
        let a = Edge::new(3, 7);
        let b = Edge::with_value(7, 3, 2.5);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(a.key(), EdgeKey::new(7, 3));
    }

    #[test]
    fn key_endpoints() {
        let k = EdgeKey::new(9, 2);
        assert_eq!((k.lo(), k.hi()), (2, 9));
        assert_eq!(k.other(9), Some(2));
        assert_eq!(k.other(4), None);
        assert!(k.shares_endpoint(&EdgeKey::new(2, 5)));
        assert!(!k.shares_endpoint(&EdgeKey::new(3, 5)));
    }

    #[test]
    fn log2_of_payload() {
        assert_eq!(Edge::with_value(0, 1, 4.0).log2_ratio(), 2.0);
        assert_eq!(Edge::new(0, 1).log2_ratio(), 0.0);
    }
}
