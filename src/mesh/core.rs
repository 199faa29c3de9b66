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

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    error::{MeshError, MeshResult},
    geometry::{Aabb2, Point2, Segment2},
    mesh::{
        basic_types::{Mesh, PruneReport},
        edge::{Edge, EdgeKey},
        vertex::Vertex,
    },
};

impl Mesh {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            internal_edges: Vec::new(),
            peripheral_edges: Vec::new(),
            divisions: BTreeMap::new(),
            spine: Vec::new(),
            prune_report: None,
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex(&self, index: usize) -> MeshResult<&Vertex> {
        self.vertices
            .get(index)
            .ok_or(MeshError::UnknownVertex(index))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn peripheral_vertex_count(&self) -> usize {
        self.vertices.iter().filter(|v| v.peripheral).count()
    }

    pub fn internal_vertex_count(&self) -> usize {
        self.vertices.len() - self.peripheral_vertex_count()
    }

    pub fn internal_edges(&self) -> &[Edge] {
        &self.internal_edges
    }

    pub fn peripheral_edges(&self) -> &[Edge] {
        &self.peripheral_edges
    }

    pub fn edge_count(&self) -> usize {
        self.internal_edges.len() + self.peripheral_edges.len()
    }

    /// Peripheral edges first, then internal edges.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.peripheral_edges.iter().chain(self.internal_edges.iter())
    }

    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.vertices
            .get(a)
            .is_some_and(|v| v.is_linked_to(b))
    }

    pub fn edge(&self, a: usize, b: usize) -> MeshResult<&Edge> {
        let key = EdgeKey::new(a, b);
        self.edges()
            .find(|e| e.key() == key)
            .ok_or(MeshError::UnlinkedVertices(a, b))
    }

    pub fn position(&self, index: usize) -> MeshResult<Point2> {
        self.vertex(index).map(|v| v.position)
    }

    #[inline]
    pub fn edge_segment(&self, e: &Edge) -> Segment2 {
        Segment2::new(&self.vertices[e.v1].position, &self.vertices[e.v2].position)
    }

    #[inline]
    pub fn edge_length(&self, e: &Edge) -> f64 {
        self.vertices[e.v1]
            .position
            .distance_to(&self.vertices[e.v2].position)
    }

    pub fn edge_midpoint(&self, e: &Edge) -> Point2 {
        self.vertices[e.v1]
            .position
            .midpoint(&self.vertices[e.v2].position)
    }

    /// Internal and peripheral edge counts both agree.
    pub fn is_comparable_to(&self, other: &Mesh) -> bool {
        self.internal_edges.len() == other.internal_edges.len()
            && self.peripheral_edges.len() == other.peripheral_edges.len()
    }

    pub fn set_division(&mut self, segment: usize, count: usize) {
        self.divisions.insert(segment, count);
    }

    pub fn division(&self, segment: usize) -> MeshResult<usize> {
        self.divisions
            .get(&segment)
            .copied()
            .ok_or(MeshError::UndefinedSegment(segment))
    }

    pub fn divisions(&self) -> &BTreeMap<usize, usize> {
        &self.divisions
    }

    pub fn segment_count(&self) -> usize {
        self.divisions.len()
    }

    /// Reference point followed by the skeleton vertices, in order.
    pub fn spine(&self) -> &[usize] {
        &self.spine
    }

    pub fn prune_report(&self) -> Option<&PruneReport> {
        self.prune_report.as_ref()
    }

    /// Positions of the peripheral vertices in boundary order.
    pub fn outline(&self) -> Vec<Point2> {
        self.vertices
            .iter()
            .filter(|v| v.peripheral)
            .map(|v| v.position)
            .collect()
    }

    /// Bounds of the peripheral vertices, or of all vertices when there
    /// is no periphery.
    pub fn bounds(&self) -> Option<Aabb2> {
        let outline = self.outline();
        if outline.is_empty() {
            let all: Vec<Point2> = self.vertices.iter().map(|v| v.position).collect();
            return Aabb2::from_slice(&all);
        }
        Aabb2::from_slice(&outline)
    }

    /// Same topology, vertex `i` moved to `positions[i]`.
    pub fn reposition(&self, positions: &[Point2]) -> MeshResult<Mesh> {
        if positions.len() != self.vertices.len() {
            return Err(MeshError::VertexCountMismatch {
                expected: self.vertices.len(),
                found: positions.len(),
            });
        }
        let mut result = self.clone();
        for (v, p) in result.vertices.iter_mut().zip(positions) {
            v.position = *p;
        }
        Ok(result)
    }

    pub fn map_positions<F>(&self, f: F) -> Mesh
    where
        F: Fn(&Point2) -> Point2,
    {
        let mut result = self.clone();
        for v in result.vertices.iter_mut() {
            v.position = f(&v.position);
        }
        result
    }

    /// Mean shape of comparable meshes: topology of the first mesh, each
    /// vertex at the average of its positions across all inputs.
    pub fn consensus(meshes: &[Mesh]) -> MeshResult<Mesh> {
        let (first, rest) = meshes
            .split_first()
            .ok_or(MeshError::EmptyInput("consensus"))?;

        let mut sums: Vec<(f64, f64)> = first
            .vertices
            .iter()
            .map(|v| (v.position.x, v.position.y))
            .collect();

        for m in rest {
            if !first.is_comparable_to(m) {
                return Err(MeshError::IncomparableMeshes {
                    ours: first.edge_count(),
                    theirs: m.edge_count(),
                });
            }
            if m.vertices.len() != first.vertices.len() {
                return Err(MeshError::VertexCountMismatch {
                    expected: first.vertices.len(),
                    found: m.vertices.len(),
                });
            }
            for (sum, v) in sums.iter_mut().zip(&m.vertices) {
                sum.0 += v.position.x;
                sum.1 += v.position.y;
            }
        }

        let n = meshes.len() as f64;
        let positions: Vec<Point2> = sums
            .into_iter()
            .map(|(x, y)| Point2::new(x / n, y / n))
            .collect();
        log::debug!(
            "consensus of {} meshes over {} vertices",
            meshes.len(),
            positions.len()
        );
        first.reposition(&positions)
    }

    pub(crate) fn link(&mut self, key: EdgeKey) {
        self.vertices[key.lo()].edges.insert(key);
        self.vertices[key.hi()].edges.insert(key);
    }

    pub(crate) fn unlink(&mut self, key: EdgeKey) {
        self.vertices[key.lo()].edges.remove(&key);
        self.vertices[key.hi()].edges.remove(&key);
    }

    /// Drop incidence entries that no longer correspond to a live edge.
    pub(crate) fn sync_incidence(&mut self) -> usize {
        let live: BTreeSet<EdgeKey> = self.edges().map(Edge::key).collect();
        let mut dropped = 0;
        for v in self.vertices.iter_mut() {
            let before = v.edges.len();
            v.edges.retain(|k| live.contains(k));
            dropped += before - v.edges.len();
        }
        dropped
    }
}
