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

use serde::{Deserialize, Serialize};

use crate::{
    error::{MeshError, MeshResult},
    geometry::{
        Point2,
        util::{barycentric_coords, from_barycentric},
    },
    kernel::{are_collinear, point_in_triangle},
    mesh::{
        basic_types::Mesh,
        edge::{Edge, EdgeKey},
    },
};

/// Area over squared perimeter at or below which a face is a sliver.
pub const SLIVER_TOLERANCE: f64 = 1e-12;

/// Triangle of three mutually linked mesh vertices.
///
/// Vertices are held in ascending index order, so the same face in two
/// comparable meshes has the same key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Face {
    vertices: [usize; 3],
    positions: [Point2; 3],
    pub value: f64,
}

impl Face {
    pub fn from_vertices(mesh: &Mesh, a: usize, b: usize, c: usize) -> MeshResult<Face> {
        let distinct: BTreeSet<usize> = [a, b, c].into_iter().collect();
        if distinct.len() != 3 {
            return Err(MeshError::InvalidFace {
                distinct: distinct.len(),
            });
        }
        let mut vertices = [a, b, c];
        vertices.sort_unstable();

        let mut positions = [Point2::default(); 3];
        for (slot, &v) in positions.iter_mut().zip(&vertices) {
            *slot = mesh.position(v)?;
        }
        for (i, j) in [(0, 1), (1, 2), (0, 2)] {
            if !mesh.has_edge(vertices[i], vertices[j]) {
                return Err(MeshError::UnlinkedVertices(vertices[i], vertices[j]));
            }
        }

        Ok(Face {
            vertices,
            positions,
            value: 1.0,
        })
    }

    /// Face bounded by three distinct edges spanning three vertices.
    pub fn from_edges(mesh: &Mesh, edges: &[Edge]) -> MeshResult<Face> {
        let keys: BTreeSet<EdgeKey> = edges.iter().map(Edge::key).collect();
        let distinct: BTreeSet<usize> = edges.iter().flat_map(|e| [e.v1, e.v2]).collect();
        if edges.len() != 3 || keys.len() != 3 || keys.iter().any(EdgeKey::is_loop) {
            return Err(MeshError::InvalidFace {
                distinct: distinct.len(),
            });
        }
        let ids: Vec<usize> = distinct.into_iter().collect();
        if ids.len() != 3 {
            return Err(MeshError::InvalidFace {
                distinct: ids.len(),
            });
        }
        Face::from_vertices(mesh, ids[0], ids[1], ids[2])
    }

    /// Vertex indices, ascending.
    pub fn key(&self) -> [usize; 3] {
        self.vertices
    }

    pub fn positions(&self) -> &[Point2; 3] {
        &self.positions
    }

    pub fn contains_vertex(&self, v: usize) -> bool {
        self.vertices.contains(&v)
    }

    pub fn edge_keys(&self) -> [EdgeKey; 3] {
        let [a, b, c] = self.vertices;
        [EdgeKey::new(a, b), EdgeKey::new(b, c), EdgeKey::new(a, c)]
    }

    pub fn side_lengths(&self) -> [f64; 3] {
        let [p0, p1, p2] = &self.positions;
        [p0.distance_to(p1), p1.distance_to(p2), p2.distance_to(p0)]
    }

    pub fn perimeter(&self) -> f64 {
        self.side_lengths().iter().sum()
    }

    /// Heron's formula over the three side lengths.
    pub fn area(&self) -> f64 {
        let [a, b, c] = self.side_lengths();
        let s = (a + b + c) / 2.0;
        (s * (s - a) * (s - b) * (s - c)).max(0.0).sqrt()
    }

    /// Positive when the canonical vertex order winds counter-clockwise.
    pub fn signed_area(&self) -> f64 {
        let [p0, p1, p2] = &self.positions;
        (p1 - p0).cross(&(p2 - p0)) / 2.0
    }

    pub fn centroid(&self) -> Point2 {
        let [p0, p1, p2] = &self.positions;
        Point2::new((p0.x + p1.x + p2.x) / 3.0, (p0.y + p1.y + p2.y) / 3.0)
    }

    pub fn is_degenerate(&self) -> bool {
        let [p0, p1, p2] = &self.positions;
        are_collinear(p0, p1, p2)
    }

    /// Exactly collinear, or so thin that its area vanishes against the
    /// square of its perimeter.
    pub fn is_sliver(&self) -> bool {
        let p = self.perimeter();
        self.is_degenerate() || self.area() <= SLIVER_TOLERANCE * p * p
    }

    /// Inside or on the border.
    pub fn contains(&self, p: &Point2) -> bool {
        let [p0, p1, p2] = &self.positions;
        point_in_triangle(p, p0, p1, p2)
    }

    pub fn coordinate_of(&self, p: &Point2) -> MeshResult<FaceCoordinate> {
        if self.is_degenerate() {
            return Err(MeshError::DegenerateFace);
        }
        if !self.contains(p) {
            return Err(MeshError::PointOutsideFace { x: p.x, y: p.y });
        }
        let [p0, p1, p2] = &self.positions;
        let (_, v, w) = barycentric_coords(p, p0, p1, p2).ok_or(MeshError::DegenerateFace)?;
        Ok(FaceCoordinate { v, w })
    }
}

/// Position inside a face as barycentric weights of its second and third
/// vertices; the first vertex takes the remainder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceCoordinate {
    pub v: f64,
    pub w: f64,
}

impl FaceCoordinate {
    pub fn u(&self) -> f64 {
        1.0 - self.v - self.w
    }

    pub fn to_cartesian(&self, face: &Face) -> Point2 {
        let [p0, p1, p2] = &face.positions;
        from_barycentric(self.u(), self.v, self.w, p0, p1, p2)
    }
}

impl Mesh {
    /// Every triangle of mutually linked vertices with no other vertex
    /// inside or on it, ordered by key. Slivers are skipped.
    pub fn faces(&self) -> Vec<Face> {
        let mut faces = Vec::new();
        for a in 0..self.vertices.len() {
            let upper: Vec<usize> = self.vertices[a].neighbours().filter(|&b| b > a).collect();
            for (i, &b) in upper.iter().enumerate() {
                for &c in &upper[i + 1..] {
                    if !self.has_edge(b, c) {
                        continue;
                    }
                    let Ok(face) = Face::from_vertices(self, a, b, c) else {
                        continue;
                    };
                    if face.is_sliver() || self.covers_other_vertex(&face) {
                        continue;
                    }
                    faces.push(face);
                }
            }
        }
        faces
    }

    fn covers_other_vertex(&self, face: &Face) -> bool {
        self.vertices.iter().any(|v| {
            !face.contains_vertex(v.index)
                && !face.positions.iter().any(|p| p.overlaps(&v.position))
                && face.contains(&v.position)
        })
    }

    pub fn face_containing(&self, p: &Point2) -> Option<Face> {
        self.faces().into_iter().find(|f| f.contains(p))
    }

    /// Face with the same vertex key in this mesh.
    pub fn matching_face(&self, face: &Face) -> Option<Face> {
        let [a, b, c] = face.key();
        Face::from_vertices(self, a, b, c).ok()
    }
}
