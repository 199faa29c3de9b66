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
    mesh::basic_types::Mesh,
    options::MeshOptions,
    shape::Shape,
};

/// Runs the construction pipeline over a [`Shape`].
#[derive(Debug, Clone, Default)]
pub struct MeshBuilder {
    options: MeshOptions,
}

impl MeshBuilder {
    pub fn new(options: MeshOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &MeshOptions {
        &self.options
    }

    /// Mesh with roughly one peripheral vertex every `vertex_spacing`
    /// border points, at least one per segment.
    pub fn build<S: Shape + ?Sized>(&self, shape: &S) -> MeshResult<Mesh> {
        let spacing = self.options.vertex_spacing.max(1);
        let mut mesh = Mesh::new();
        for segment in 0..shape.segment_count() {
            let divisions = (shape.segment_length(segment)? / spacing).max(1);
            mesh.set_division(segment, divisions);
        }
        self.place_vertices(&mut mesh, shape)?;

        mesh.make_pairwise_edges();
        mesh.prune_overlaps(shape, &self.options);
        log_built(&mesh);
        Ok(mesh)
    }

    /// Mesh comparable with `template`: vertices are placed on `shape`
    /// following the template's division map, and the template's edges are
    /// copied in order, so edge `i` joins the same vertex pair in both.
    ///
    /// Nothing is pruned against the new geometry. The subdivision rounds
    /// must match the template's, otherwise the vertex counts disagree.
    pub fn build_from_template<S: Shape + ?Sized>(&self, shape: &S, template: &Mesh) -> MeshResult<Mesh> {
        if template.segment_count() != shape.segment_count() {
            return Err(MeshError::SegmentCountMismatch {
                expected: template.segment_count(),
                found: shape.segment_count(),
            });
        }
        let mut mesh = Mesh::new();
        for segment in 0..shape.segment_count() {
            mesh.set_division(segment, template.division(segment)?);
        }
        self.place_vertices(&mut mesh, shape)?;

        mesh.copy_edges_from(template)?;
        log_built(&mesh);
        Ok(mesh)
    }

    // Peripheral vertices, periphery, skeleton and subdivisions.
    fn place_vertices<S: Shape + ?Sized>(&self, mesh: &mut Mesh, shape: &S) -> MeshResult<()> {
        for segment in 0..shape.segment_count() {
            let divisions = mesh.division(segment)?;
            for i in 0..divisions {
                let proportion = i as f64 / divisions as f64;
                let index = shape.proportional_index(segment, proportion)?;
                mesh.add_vertex(shape.border_point(index), true);
            }
        }
        log::debug!(
            "placing {} peripheral vertices over {} segments",
            mesh.vertex_count(),
            shape.segment_count()
        );

        mesh.link_periphery();
        mesh.make_centre_vertices();
        for _ in 0..self.options.subdivisions {
            mesh.subdivide();
        }
        Ok(())
    }
}

fn log_built(mesh: &Mesh) {
    log::debug!(
        "built mesh: {} vertices, {} internal and {} peripheral edges",
        mesh.vertex_count(),
        mesh.internal_edges().len(),
        mesh.peripheral_edges().len()
    );
}
