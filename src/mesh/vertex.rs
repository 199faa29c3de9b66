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

use std::collections::BTreeSet;

use crate::geometry::Point2;
use crate::mesh::edge::EdgeKey;

#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub index: usize,
    pub position: Point2,
    pub peripheral: bool,
    pub(crate) edges: BTreeSet<EdgeKey>, // incident edges, back references only
}

impl Vertex {
    pub fn new(index: usize, position: Point2, peripheral: bool) -> Self {
        Self {
            index,
            position,
            peripheral,
            edges: BTreeSet::new(),
        }
    }

    pub fn is_peripheral(&self) -> bool {
        self.peripheral
    }

    pub fn edges(&self) -> impl Iterator<Item = &EdgeKey> + '_ {
        self.edges.iter()
    }

    /// Indices of the vertices this one is linked to, ascending.
    pub fn neighbours(&self) -> impl Iterator<Item = usize> + '_ {
        self.edges.iter().filter_map(move |k| k.other(self.index))
    }

    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    pub fn is_linked_to(&self, other: usize) -> bool {
        self.edges.contains(&EdgeKey::new(self.index, other))
    }

    pub fn overlaps(&self, other: &Vertex) -> bool {
        self.position.overlaps(&other.position)
    }

    pub fn distance_to(&self, other: &Vertex) -> f64 {
        self.position.distance_to(&other.position)
    }
}
