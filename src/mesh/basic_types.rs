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

use std::collections::BTreeMap;

use serde::Serialize;

use crate::mesh::{edge::Edge, vertex::Vertex};

/// Counts from one run of overlap pruning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PruneReport {
    /// Internal edges whose midpoint fell outside the shape.
    pub external: usize,
    /// Zero-length edges.
    pub degenerate: usize,
    /// Edges dropped because another edge already joined the same pair.
    pub duplicates: usize,
    pub too_long: usize,
    pub crosses_periphery: usize,
    pub peripheral_chords: usize,
    pub non_adjacent_spine: usize,
    /// Edges lying over a vertex that is not one of their endpoints.
    pub through_vertex: usize,
    pub crossings_resolved: usize,
    pub passes: usize,
    /// Crossing resolution stopped at the pass limit with removals pending.
    pub cap_reached: bool,
}

impl PruneReport {
    pub fn total_removed(&self) -> usize {
        self.external
            + self.degenerate
            + self.duplicates
            + self.too_long
            + self.crosses_periphery
            + self.peripheral_chords
            + self.non_adjacent_spine
            + self.through_vertex
            + self.crossings_resolved
    }
}

/// First rule that marked an edge during batch removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RemovalRule {
    TooLong,
    CrossesPeriphery,
    PeripheralChord,
    NonAdjacentSpine,
}

/// Triangulated mesh over a specimen outline.
///
/// Vertex 0 is the reference point. Peripheral vertices come first, in
/// boundary order; internal vertices follow in creation order.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) internal_edges: Vec<Edge>,
    pub(crate) peripheral_edges: Vec<Edge>,

    pub(crate) divisions: BTreeMap<usize, usize>, // segment -> peripheral vertex count
    pub(crate) spine: Vec<usize>,                 // reference point, then skeleton vertices
    pub(crate) prune_report: Option<PruneReport>,
}
