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

use crate::{
    error::{MeshError, MeshResult},
    geometry::Point2,
    mesh::{
        basic_types::Mesh,
        edge::{Edge, EdgeKey},
        vertex::Vertex,
    },
};

impl Mesh {
    /// Append a vertex and return its index. Indices never change.
    pub fn add_vertex(&mut self, position: Point2, peripheral: bool) -> usize {
        let index = self.vertices.len();
        self.vertices.push(Vertex::new(index, position, peripheral));
        index
    }

    pub fn add_peripheral_edge(&mut self, a: usize, b: usize) -> MeshResult<()> {
        let edge = self.checked_edge(a, b)?;
        self.peripheral_edges.push(edge);
        self.link(edge.key());
        Ok(())
    }

    pub fn add_internal_edge(&mut self, a: usize, b: usize) -> MeshResult<()> {
        let edge = self.checked_edge(a, b)?;
        self.internal_edges.push(edge);
        self.link(edge.key());
        Ok(())
    }

    fn checked_edge(&self, a: usize, b: usize) -> MeshResult<Edge> {
        for v in [a, b] {
            if v >= self.vertices.len() {
                return Err(MeshError::UnknownVertex(v));
            }
        }
        Ok(Edge::new(a, b))
    }

    fn peripheral_indices(&self) -> Vec<usize> {
        self.vertices
            .iter()
            .filter(|v| v.peripheral)
            .map(|v| v.index)
            .collect()
    }

    /// Chain consecutive peripheral vertices and close the loop back to
    /// the reference point.
    pub fn link_periphery(&mut self) {
        let ring = self.peripheral_indices();
        for pair in ring.windows(2) {
            let edge = Edge::new(pair[0], pair[1]);
            self.peripheral_edges.push(edge);
            self.link(edge.key());
        }
        if ring.len() > 2 {
            let edge = Edge::new(ring[ring.len() - 1], ring[0]);
            self.peripheral_edges.push(edge);
            self.link(edge.key());
        }
    }

    /// Skeleton vertices at the midpoints of the pairs (1, N-1), (2, N-2), ...
    /// of the peripheral ring, linked into a chain from the reference point.
    pub fn make_centre_vertices(&mut self) {
        let ring = self.peripheral_indices();
        let Some(&reference) = ring.first() else {
            return;
        };
        let n = ring.len();

        self.spine.clear();
        self.spine.push(reference);
        for i in 1..n / 2 {
            let a = self.vertices[ring[i]].position;
            let b = self.vertices[ring[n - i]].position;
            let index = self.add_vertex(a.midpoint(&b), false);
            self.spine.push(index);
        }

        for k in 1..self.spine.len() {
            let edge = Edge::new(self.spine[k - 1], self.spine[k]);
            self.internal_edges.push(edge);
            self.link(edge.key());
        }
        log::trace!("skeleton has {} vertices", self.spine.len() - 1);
    }

    /// Split every internal edge with at most one peripheral endpoint at
    /// its midpoint.
    pub fn subdivide(&mut self) {
        let old = std::mem::take(&mut self.internal_edges);
        let mut kept = Vec::with_capacity(old.len() * 2);
        let mut splits: BTreeMap<EdgeKey, usize> = BTreeMap::new();

        for e in old {
            let both_peripheral = self.vertices[e.v1].peripheral && self.vertices[e.v2].peripheral;
            if both_peripheral || e.key().is_loop() {
                kept.push(e);
                continue;
            }
            let mid = self.edge_midpoint(&e);
            let m = self.add_vertex(mid, false);
            let e1 = Edge::new(e.v1, m);
            let e2 = Edge::new(e.v2, m);

            self.unlink(e.key());
            self.link(e1.key());
            self.link(e2.key());
            kept.push(e1);
            kept.push(e2);
            splits.insert(e.key(), m);
        }
        self.internal_edges = kept;

        if self.spine.len() > 1 {
            let mut spine = Vec::with_capacity(self.spine.len() * 2);
            for pair in self.spine.windows(2) {
                spine.push(pair[0]);
                if let Some(&m) = splits.get(&EdgeKey::new(pair[0], pair[1])) {
                    spine.push(m);
                }
            }
            spine.extend(self.spine.last().copied());
            self.spine = spine;
        }
        log::trace!("subdivision split {} edges", splits.len());
    }

    /// Dense candidate set: one internal edge per pair of vertices at
    /// distinct positions. Returns the number of candidates added.
    pub fn make_pairwise_edges(&mut self) -> usize {
        let n = self.vertices.len();
        let mut added = 0;
        for i in 0..n {
            for j in (i + 1)..n {
                if self.vertices[i].overlaps(&self.vertices[j]) {
                    continue;
                }
                let edge = Edge::new(i, j);
                self.internal_edges.push(edge);
                self.link(edge.key());
                added += 1;
            }
        }
        log::trace!("pairwise seed added {} candidate edges", added);
        added
    }

    /// Replace every edge with the template's, in the template's order,
    /// and rebuild incidence. Payloads reset to 1.
    pub(crate) fn copy_edges_from(&mut self, template: &Mesh) -> MeshResult<()> {
        if self.vertices.len() != template.vertices.len() {
            return Err(MeshError::VertexCountMismatch {
                expected: template.vertices.len(),
                found: self.vertices.len(),
            });
        }
        let copy = |edges: &[Edge]| -> Vec<Edge> { edges.iter().map(|e| Edge::new(e.v1, e.v2)).collect() };
        self.peripheral_edges = copy(&template.peripheral_edges);
        self.internal_edges = copy(&template.internal_edges);

        for v in self.vertices.iter_mut() {
            v.edges.clear();
        }
        let keys: Vec<EdgeKey> = self.edges().map(Edge::key).collect();
        for key in keys {
            self.link(key);
        }
        log::trace!("copied {} edges from template", self.edge_count());
        Ok(())
    }
}
