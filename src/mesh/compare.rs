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

use crate::{
    error::{MeshError, MeshResult},
    mesh::{basic_types::Mesh, edge::Edge, face::Face},
};

impl Mesh {
    /// Ratio mesh: this mesh's vertices, with edge `i` of each list
    /// carrying `len(self[i]) / len(other[i])`.
    pub fn compare(&self, other: &Mesh) -> MeshResult<Mesh> {
        if self.edge_count() != other.edge_count()
            || self.internal_edges.len() != other.internal_edges.len()
        {
            return Err(MeshError::IncomparableMeshes {
                ours: self.edge_count(),
                theirs: other.edge_count(),
            });
        }

        let ratios = |ours: &[Edge], theirs: &[Edge]| -> Vec<Edge> {
            ours.iter()
                .zip(theirs)
                .map(|(a, b)| {
                    let value = self.edge_length(a) / other.edge_length(b);
                    Edge::with_value(a.v1, a.v2, value)
                })
                .collect()
        };

        let result = Mesh {
            vertices: self.vertices.clone(),
            internal_edges: ratios(&self.internal_edges, &other.internal_edges),
            peripheral_edges: ratios(&self.peripheral_edges, &other.peripheral_edges),
            divisions: self.divisions.clone(),
            spine: self.spine.clone(),
            prune_report: None,
        };
        log::debug!("compared meshes over {} edges", result.edge_count());
        Ok(result)
    }

    /// Faces of this mesh valued by their area ratio against the face with
    /// the same vertex key in `other`. Faces without a counterpart are
    /// skipped.
    pub fn compare_faces(&self, other: &Mesh) -> MeshResult<Vec<Face>> {
        if !self.is_comparable_to(other) {
            return Err(MeshError::IncomparableMeshes {
                ours: self.edge_count(),
                theirs: other.edge_count(),
            });
        }
        let mut skipped = 0;
        let mut result = Vec::new();
        for mut face in self.faces() {
            match other.matching_face(&face) {
                Some(theirs) if theirs.area() > 0.0 => {
                    face.value = face.area() / theirs.area();
                    result.push(face);
                }
                _ => skipped += 1,
            }
        }
        if skipped > 0 {
            log::debug!("{} faces had no counterpart", skipped);
        }
        Ok(result)
    }

    /// Largest edge payload, `None` for an edgeless mesh.
    pub fn max_edge_ratio(&self) -> Option<f64> {
        self.edges().map(|e| e.value).reduce(f64::max)
    }
}
