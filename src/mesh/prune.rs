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
    kernel::{is_point_on_segment, segments_intersect},
    mesh::{
        basic_types::{Mesh, PruneReport, RemovalRule},
        edge::{Edge, EdgeKey},
    },
    options::MeshOptions,
    parallel::{max_by_key, positions, scan},
    shape::Shape,
};

/// Relative distance, as a fraction of edge length, below which a vertex
/// counts as lying on an edge.
pub const THROUGH_VERTEX_TOLERANCE: f64 = 1e-9;

impl Mesh {
    /// Carve the candidate edge set down to a non-crossing triangulation.
    ///
    /// Never fails; the returned report is also kept on the mesh.
    pub fn prune_overlaps<S: Shape + ?Sized>(
        &mut self,
        shape: &S,
        options: &MeshOptions,
    ) -> PruneReport {
        let mut report = PruneReport::default();
        let start = self.internal_edges.len();

        report.external = self.remove_external_edges(shape);
        self.merge_duplicate_edges(&mut report);
        self.remove_marked_edges(options.effective_long_edge_factor(), &mut report);
        report.through_vertex = self.remove_edges_through_vertices();
        self.resolve_crossings(options.max_prune_passes, &mut report);

        log::debug!(
            "pruned {} of {} internal edges over {} passes ({} remain{})",
            report.total_removed(),
            start,
            report.passes,
            self.internal_edges.len(),
            if report.cap_reached { ", pass limit reached" } else { "" }
        );
        if report.cap_reached {
            log::warn!(
                "crossing resolution stopped after {} passes with crossings left",
                report.passes
            );
        }
        self.prune_report = Some(report.clone());
        report
    }

    /// Two edges cross when their segments meet and they share no endpoint.
    pub fn edges_cross(&self, e1: &Edge, e2: &Edge) -> bool {
        if e1.shares_endpoint(e2) {
            return false;
        }
        let a = self.edge_segment(e1);
        let b = self.edge_segment(e2);
        segments_intersect(&a.a, &a.b, &b.a, &b.b)
    }

    /// `true` if any internal edge crosses another edge of the mesh.
    pub fn has_crossing_edges(&self) -> bool {
        let internal = &self.internal_edges;
        scan(internal, |e1| {
            self.peripheral_edges.iter().any(|p| self.edges_cross(e1, p))
                || internal.iter().any(|e2| self.edges_cross(e1, e2))
        })
        .into_iter()
        .any(|hit| hit)
    }

    /// `true` if a vertex other than the endpoints lies on `e`, or within
    /// [`THROUGH_VERTEX_TOLERANCE`] of its length from it.
    pub fn edge_passes_through_vertex(&self, e: &Edge) -> bool {
        let seg = self.edge_segment(e);
        let tolerance = THROUGH_VERTEX_TOLERANCE * seg.length();
        self.vertices.iter().any(|v| {
            !e.contains(v.index)
                && !v.position.overlaps(&seg.a)
                && !v.position.overlaps(&seg.b)
                && (is_point_on_segment(&v.position, &seg)
                    || seg.distance_to_point(&v.position) <= tolerance)
        })
    }

    fn remove_external_edges<S: Shape + ?Sized>(&mut self, shape: &S) -> usize {
        let doomed = positions(&self.internal_edges, |e| {
            !shape.contains_point(&self.edge_midpoint(e))
        });
        self.remove_internal_at(&doomed);
        log::trace!("removed {} external edges", doomed.len());
        doomed.len()
    }

    fn merge_duplicate_edges(&mut self, report: &mut PruneReport) {
        let mut seen: BTreeSet<EdgeKey> = self.peripheral_edges.iter().map(Edge::key).collect();
        let mut doomed = Vec::new();

        for (i, e) in self.internal_edges.iter().enumerate() {
            if e.key().is_loop() || self.edge_length(e) == 0.0 {
                report.degenerate += 1;
                doomed.push(i);
            } else if !seen.insert(e.key()) {
                report.duplicates += 1;
                doomed.push(i);
            }
        }
        self.remove_internal_at(&doomed);
        log::trace!(
            "merged {} duplicate and {} zero-length edges",
            report.duplicates,
            report.degenerate
        );
    }

    fn remove_marked_edges(&mut self, long_edge_factor: f64, report: &mut PruneReport) {
        let Some(longest) = max_by_key(&self.internal_edges, |e| self.edge_length(e)) else {
            return;
        };
        let threshold = longest / long_edge_factor;

        let peripheral: BTreeSet<EdgeKey> = self.peripheral_edges.iter().map(Edge::key).collect();
        let spine_pos: BTreeMap<usize, usize> =
            self.spine.iter().enumerate().map(|(i, &v)| (v, i)).collect();
        let spine_adjacent = |a: usize, b: usize| match (spine_pos.get(&a), spine_pos.get(&b)) {
            (Some(&pa), Some(&pb)) => pa.abs_diff(pb) == 1,
            _ => false,
        };

        let marks = scan(&self.internal_edges, |e| {
            let p1 = self.vertices[e.v1].peripheral;
            let p2 = self.vertices[e.v2].peripheral;
            if self.edge_length(e) > threshold {
                Some(RemovalRule::TooLong)
            } else if self.peripheral_edges.iter().any(|p| self.edges_cross(e, p)) {
                Some(RemovalRule::CrossesPeriphery)
            } else if p1 && p2 && !peripheral.contains(&e.key()) {
                Some(RemovalRule::PeripheralChord)
            } else if !p1 && !p2 && !spine_adjacent(e.v1, e.v2) {
                Some(RemovalRule::NonAdjacentSpine)
            } else {
                None
            }
        });

        let mut doomed = Vec::new();
        for (i, mark) in marks.into_iter().enumerate() {
            let Some(rule) = mark else { continue };
            match rule {
                RemovalRule::TooLong => report.too_long += 1,
                RemovalRule::CrossesPeriphery => report.crosses_periphery += 1,
                RemovalRule::PeripheralChord => report.peripheral_chords += 1,
                RemovalRule::NonAdjacentSpine => report.non_adjacent_spine += 1,
            }
            doomed.push(i);
        }
        self.remove_internal_at(&doomed);
        log::trace!(
            "batch removal: {} long (> {:.3}), {} crossing periphery, {} chords, {} off-spine",
            report.too_long,
            threshold,
            report.crosses_periphery,
            report.peripheral_chords,
            report.non_adjacent_spine
        );
    }

    // Sharing an endpoint is never a crossing, so an edge lying over a
    // chain of shorter edges survives crossing resolution.
    fn remove_edges_through_vertices(&mut self) -> usize {
        let doomed = positions(&self.internal_edges, |e| self.edge_passes_through_vertex(e));
        self.remove_internal_at(&doomed);
        log::trace!("removed {} edges running through a vertex", doomed.len());
        doomed.len()
    }

    fn resolve_crossings(&mut self, max_passes: usize, report: &mut PruneReport) {
        let peripheral: BTreeSet<EdgeKey> = self.peripheral_edges.iter().map(Edge::key).collect();

        let mut settled = false;
        while report.passes < max_passes {
            let removed = self.crossing_pass(&peripheral);
            report.passes += 1;
            report.crossings_resolved += removed;
            if removed == 0 {
                settled = true;
                break;
            }
        }
        report.cap_reached = !settled && self.has_crossing_edges();
    }

    /// One sweep over the vertices in index order, removing at most one
    /// edge per vertex.
    fn crossing_pass(&mut self, peripheral: &BTreeSet<EdgeKey>) -> usize {
        let mut removed = 0;
        for v in 0..self.vertices.len() {
            let incident: Vec<EdgeKey> = self.vertices[v].edges.iter().copied().collect();
            for key in incident {
                if let Some(victim) = self.longest_in_crossing(key, peripheral) {
                    self.remove_internal_key(victim);
                    removed += 1;
                    break;
                }
            }
        }
        removed
    }

    /// Longest internal edge among `key` and everything crossing it, or
    /// `None` when nothing crosses. Ties go to the earliest crosser.
    fn longest_in_crossing(&self, key: EdgeKey, peripheral: &BTreeSet<EdgeKey>) -> Option<EdgeKey> {
        let e1 = Edge::from(key);
        let crossers = positions(&self.internal_edges, |e| self.edges_cross(&e1, e));
        if crossers.is_empty() {
            return None;
        }

        let mut longest: Option<(EdgeKey, f64)> = None;
        let mut consider = |k: EdgeKey, len: f64| {
            if longest.is_none_or(|(_, best)| len > best) {
                longest = Some((k, len));
            }
        };
        for i in crossers {
            let e = &self.internal_edges[i];
            consider(e.key(), self.edge_length(e));
        }
        if !peripheral.contains(&key) {
            consider(key, self.edge_length(&e1));
        }
        longest.map(|(k, _)| k)
    }

    fn remove_internal_key(&mut self, key: EdgeKey) {
        if let Some(pos) = self.internal_edges.iter().position(|e| e.key() == key) {
            self.internal_edges.remove(pos);
            self.unlink(key);
        }
    }

    /// Remove internal edges at the given ascending indices.
    fn remove_internal_at(&mut self, doomed: &[usize]) {
        if doomed.is_empty() {
            return;
        }
        let doomed: BTreeSet<usize> = doomed.iter().copied().collect();
        let mut i = 0;
        self.internal_edges.retain(|_| {
            let keep = !doomed.contains(&i);
            i += 1;
            keep
        });
        self.sync_incidence();
    }
}
