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

use nucmesh::{Edge, Face, Mesh, MeshError, Point2};
use rand::Rng;

fn triangle(a: Point2, b: Point2, c: Point2) -> Mesh {
    let mut mesh = Mesh::new();
    let v0 = mesh.add_vertex(a, true);
    let v1 = mesh.add_vertex(b, true);
    let v2 = mesh.add_vertex(c, true);
    mesh.add_peripheral_edge(v0, v1).unwrap();
    mesh.add_peripheral_edge(v1, v2).unwrap();
    mesh.add_peripheral_edge(v2, v0).unwrap();
    mesh
}

fn random_point(rng: &mut impl Rng) -> Point2 {
    Point2::new(rng.random_range(-100.0..100.0), rng.random_range(-100.0..100.0))
}

#[test]
fn test_heron_matches_cross_product() {
    let mut rng = rand::rng();
    for _ in 0..200 {
        let (a, b, c) = (random_point(&mut rng), random_point(&mut rng), random_point(&mut rng));
        let mesh = triangle(a, b, c);
        let face = Face::from_vertices(&mesh, 0, 1, 2).unwrap();

        let cross = ((&b - &a).cross(&(&c - &a)) / 2.0).abs();
        let p = face.perimeter();
        assert!(
            (face.area() - cross).abs() <= 1e-9 * p * p,
            "heron {} vs cross {}",
            face.area(),
            cross
        );
        assert!((face.signed_area().abs() - cross).abs() <= 1e-9 * p * p);
    }
}

#[test]
fn test_face_coordinates_survive_similarity() {
    let mut rng = rand::rng();
    let a = Point2::new(10.0, 10.0);
    let b = Point2::new(30.0, 12.0);
    let c = Point2::new(18.0, 40.0);
    let source = triangle(a, b, c);
    let face = Face::from_vertices(&source, 0, 1, 2).unwrap();

    let scale = 3.5;
    let angle: f64 = 0.7;
    let moved = source.map_positions(|p| {
        let x = p.x * scale;
        let y = p.y * scale;
        Point2::new(x * angle.cos() - y * angle.sin() + 4.0, x * angle.sin() + y * angle.cos() - 9.0)
    });
    let target = moved.matching_face(&face).unwrap();

    for _ in 0..100 {
        let (u, v) = (rng.random_range(0.0..1.0), rng.random_range(0.0..1.0));
        let (u, v) = if u + v > 1.0 { (1.0 - u, 1.0 - v) } else { (u, v) };
        let p = Point2::new(
            a.x + u * (b.x - a.x) + v * (c.x - a.x),
            a.y + u * (b.y - a.y) + v * (c.y - a.y),
        );
        if !face.contains(&p) {
            continue;
        }
        let coord = face.coordinate_of(&p).unwrap();
        let q = coord.to_cartesian(&target);

        let expected_x = p.x * scale;
        let expected_y = p.y * scale;
        let ex = expected_x * angle.cos() - expected_y * angle.sin() + 4.0;
        let ey = expected_x * angle.sin() + expected_y * angle.cos() - 9.0;
        assert!((q.x - ex).abs() < 1e-9 && (q.y - ey).abs() < 1e-9);
        assert!(target.contains(&q) || target.positions().iter().any(|v| v.distance_to(&q) < 1e-9));
    }
}

#[test]
fn test_invalid_faces_are_rejected() {
    let mesh = triangle(
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(0.0, 1.0),
    );
    assert_eq!(
        Face::from_vertices(&mesh, 0, 0, 0),
        Err(MeshError::InvalidFace { distinct: 1 })
    );
    assert_eq!(
        Face::from_vertices(&mesh, 0, 1, 5),
        Err(MeshError::UnknownVertex(5))
    );

    let too_many = [Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 0), Edge::new(0, 2)];
    assert!(matches!(
        Face::from_edges(&mesh, &too_many),
        Err(MeshError::InvalidFace { .. })
    ));

    let mut open = Mesh::new();
    open.add_vertex(Point2::new(0.0, 0.0), true);
    open.add_vertex(Point2::new(1.0, 0.0), true);
    open.add_vertex(Point2::new(0.0, 1.0), true);
    open.add_peripheral_edge(0, 1).unwrap();
    open.add_peripheral_edge(1, 2).unwrap();
    assert_eq!(
        Face::from_vertices(&open, 2, 1, 0),
        Err(MeshError::UnlinkedVertices(0, 2))
    );
}

#[test]
fn test_degenerate_face_has_no_coordinates() {
    let mesh = triangle(
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 1.0),
        Point2::new(2.0, 2.0),
    );
    let face = Face::from_vertices(&mesh, 0, 1, 2).unwrap();
    assert!(face.is_degenerate());
    assert!(face.area() < 1e-12);
    assert_eq!(face.coordinate_of(&Point2::new(1.0, 1.0)), Err(MeshError::DegenerateFace));
    assert!(mesh.faces().is_empty());
}
