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

#![allow(dead_code)]

use std::collections::BTreeSet;

use nucmesh::{EdgeKey, Mesh, MeshBuilder, MeshOptions, Outline, Point2, Shape};

pub fn ellipse(points: usize, semi_x: f64, semi_y: f64, centre: Point2) -> Outline {
    Outline::ellipse(points, semi_x, semi_y, centre).unwrap()
}

pub fn build(shape: &Outline, spacing: usize) -> Mesh {
    MeshBuilder::new(MeshOptions::default().with_vertex_spacing(spacing))
        .build(shape)
        .unwrap()
}

pub fn assert_no_duplicate_edges(mesh: &Mesh) {
    let mut seen = BTreeSet::new();
    for e in mesh.edges() {
        assert!(seen.insert(e.key()), "edge {:?} appears twice", e.key());
    }
}

pub fn assert_incidence_matches_edges(mesh: &Mesh) {
    let live: BTreeSet<EdgeKey> = mesh.edges().map(|e| e.key()).collect();
    let linked: BTreeSet<EdgeKey> = mesh
        .vertices()
        .iter()
        .flat_map(|v| v.edges().copied())
        .collect();
    assert_eq!(live, linked);
}

pub fn assert_internal_midpoints_inside(mesh: &Mesh, shape: &dyn Shape) {
    for e in mesh.internal_edges() {
        let mid = mesh.edge_midpoint(e);
        assert!(shape.contains_point(&mid), "midpoint {:?} of {:?} is outside", mid, e.key());
    }
}
