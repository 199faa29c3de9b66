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

mod common;

use common::*;
use nucmesh::{
    EdgeKey, Mesh, MeshBuilder, MeshError, MeshOptions, Outline, Point2, Shape, Vector2,
};

fn edge_keys(mesh: &Mesh) -> Vec<EdgeKey> {
    mesh.edges().map(|e| e.key()).collect()
}

#[test]
fn test_regular_40gon_round_trip() {
    let shape = Outline::regular_polygon(40, 20.0, Point2::new(50.0, 50.0)).unwrap();
    for spacing in [10, 4, 2] {
        let mesh = build(&shape, spacing);

        assert!(mesh.internal_edges().len() > 0, "spacing {}", spacing);
        assert_eq!(mesh.peripheral_edges().len(), 40 / spacing);
        assert_no_duplicate_edges(&mesh);
        assert_internal_midpoints_inside(&mesh, &shape);
        assert_incidence_matches_edges(&mesh);
    }
}

#[test]
fn test_reference_point_is_vertex_zero() {
    let shape = ellipse(60, 30.0, 10.0, Point2::new(40.0, 20.0));
    let mesh = build(&shape, 5);
    assert_eq!(mesh.position(0).unwrap(), shape.border_point(0));
    assert!(mesh.vertex(0).unwrap().is_peripheral());
    assert_eq!(mesh.spine()[0], 0);
    assert_eq!(mesh.peripheral_vertex_count(), 12);
}

#[test]
fn test_subdivide_never_links_two_peripheral_vertices() {
    let shape = ellipse(48, 25.0, 9.0, Point2::new(0.0, 0.0));
    let mut mesh = Mesh::new();
    for i in (0..48).step_by(4) {
        mesh.add_vertex(shape.border_point(i), true);
    }
    mesh.link_periphery();
    mesh.make_centre_vertices();
    for _ in 0..3 {
        mesh.subdivide();
        for e in mesh.internal_edges() {
            let both = mesh.vertex(e.v1).unwrap().is_peripheral()
                && mesh.vertex(e.v2).unwrap().is_peripheral();
            assert!(!both, "edge {:?} joins two peripheral vertices", e.key());
        }
    }
    // 5 skeleton vertices, then one midpoint per skeleton edge each round
    assert_eq!(mesh.internal_vertex_count(), 5 + 5 + 10 + 20);
    assert_eq!(mesh.spine().len(), 1 + 40);
}

#[test]
fn test_prune_leaves_no_crossings() {
    let shape = ellipse(80, 30.0, 10.0, Point2::new(40.0, 20.0));
    let mesh = build(&shape, 4);
    let report = mesh.prune_report().unwrap();
    assert!(report.cap_reached || !mesh.has_crossing_edges());

    let options = MeshOptions::default()
        .with_vertex_spacing(4)
        .with_max_prune_passes(10_000);
    let mesh = MeshBuilder::new(options).build(&shape).unwrap();
    assert!(!mesh.prune_report().unwrap().cap_reached);
    assert!(!mesh.has_crossing_edges());
    for (i, e1) in mesh.internal_edges().iter().enumerate() {
        for e2 in &mesh.internal_edges()[i + 1..] {
            assert!(!mesh.edges_cross(e1, e2), "{:?} crosses {:?}", e1.key(), e2.key());
        }
    }
}

#[test]
fn test_prune_report_counts_rules() {
    let shape = ellipse(80, 30.0, 10.0, Point2::new(40.0, 20.0));
    let mesh = build(&shape, 4);
    let report = mesh.prune_report().unwrap();

    // every peripheral edge and skeleton edge was seeded a second time
    assert!(report.duplicates >= mesh.peripheral_edges().len());
    assert!(report.peripheral_chords > 0);
    assert!(report.non_adjacent_spine > 0);
    assert!(report.passes >= 1);
}

#[test]
fn test_pass_cap_is_reported() {
    let shape = ellipse(80, 30.0, 10.0, Point2::new(40.0, 20.0));
    let options = MeshOptions::default()
        .with_vertex_spacing(4)
        .with_max_prune_passes(0);
    let mesh = MeshBuilder::new(options).build(&shape).unwrap();
    let report = mesh.prune_report().unwrap();

    assert_eq!(report.passes, 0);
    assert_eq!(report.crossings_resolved, 0);
    assert_eq!(report.cap_reached, mesh.has_crossing_edges());
}

#[test]
fn test_build_is_deterministic() {
    let shape = ellipse(80, 30.0, 10.0, Point2::new(40.0, 20.0)).split_evenly(3).unwrap();
    let a = build(&shape, 4);
    let b = build(&shape, 4);
    assert_eq!(edge_keys(&a), edge_keys(&b));
    assert_eq!(a.divisions(), b.divisions());
}

#[test]
fn test_template_build_copies_divisions() {
    let shape = ellipse(80, 30.0, 10.0, Point2::new(40.0, 20.0)).split_evenly(2).unwrap();
    let template = build(&shape, 4);

    let other = ellipse(120, 33.0, 9.0, Point2::new(40.0, 20.0)).split_evenly(2).unwrap();
    let mesh = MeshBuilder::default().build_from_template(&other, &template).unwrap();

    assert_eq!(mesh.divisions(), template.divisions());
    assert_eq!(mesh.peripheral_vertex_count(), template.peripheral_vertex_count());
    assert_eq!(mesh.internal_vertex_count(), template.internal_vertex_count());
}

#[test]
fn test_template_build_copies_edge_keys() {
    let shape = ellipse(80, 30.0, 10.0, Point2::new(40.0, 20.0)).split_evenly(2).unwrap();
    let template = build(&shape, 4);

    let stretched = ellipse(120, 36.0, 8.0, Point2::new(40.0, 20.0)).split_evenly(2).unwrap();
    let rotated = shape.transformed(1.3, 0.4, Vector2::new(-10.0, 5.0));
    for other in [stretched, rotated] {
        let mesh = MeshBuilder::default().build_from_template(&other, &template).unwrap();

        assert_eq!(edge_keys(&mesh), edge_keys(&template));
        assert_eq!(mesh.peripheral_edges().len(), template.peripheral_edges().len());
        assert!(mesh.is_comparable_to(&template));
        assert!(mesh.compare(&template).is_ok());
        assert!(mesh.prune_report().is_none());
        assert!(mesh.edges().all(|e| e.value == 1.0));
        assert_incidence_matches_edges(&mesh);
    }
}

#[test]
fn test_template_with_other_subdivisions_is_rejected() {
    let shape = ellipse(80, 30.0, 10.0, Point2::new(40.0, 20.0));
    let options = MeshOptions::default().with_vertex_spacing(4).with_subdivisions(2);
    let template = MeshBuilder::new(options).build(&shape).unwrap();

    let err = MeshBuilder::default().build_from_template(&shape, &template).unwrap_err();
    assert!(matches!(
        err,
        MeshError::VertexCountMismatch { expected, found }
            if expected == template.vertex_count() && found < expected
    ));
}

#[test]
fn test_no_edge_runs_through_a_vertex() {
    // centred on the origin the skeleton lies along y = 0, where an edge
    // from the reference point can lie over a skeleton vertex
    let centred = ellipse(80, 30.0, 10.0, Point2::new(0.0, 0.0));
    for shape in [centred.clone(), centred.split_evenly(2).unwrap()] {
        for spacing in [4, 5] {
            let mesh = build(&shape, spacing);
            for e in mesh.internal_edges() {
                assert!(
                    !mesh.edge_passes_through_vertex(e),
                    "edge {:?} lies over a vertex",
                    e.key()
                );
            }
            for f in mesh.faces() {
                assert!(!f.is_sliver(), "face {:?} is a sliver", f.key());
                assert!(f.area() > 0.0);
            }
        }
    }
}

#[test]
fn test_template_segment_mismatch() {
    let shape = ellipse(80, 30.0, 10.0, Point2::new(40.0, 20.0));
    let template = build(&shape, 4);
    let split = shape.split_evenly(2).unwrap();

    let err = MeshBuilder::default().build_from_template(&split, &template).unwrap_err();
    assert_eq!(err, MeshError::SegmentCountMismatch { expected: 1, found: 2 });
}

#[test]
fn test_template_undefined_segment() {
    let shape = ellipse(80, 30.0, 10.0, Point2::new(40.0, 20.0)).split_evenly(2).unwrap();
    let mut template = Mesh::new();
    template.set_division(0, 5);
    template.set_division(2, 5);

    let err = MeshBuilder::default().build_from_template(&shape, &template).unwrap_err();
    assert_eq!(err, MeshError::UndefinedSegment(1));
    assert_eq!(template.division(1), Err(MeshError::UndefinedSegment(1)));
}

#[test]
fn test_faces_are_mutually_linked() {
    let shape = ellipse(80, 30.0, 10.0, Point2::new(40.0, 20.0));
    let mesh = build(&shape, 4);
    let faces = mesh.faces();

    assert!(!faces.is_empty());
    assert!(faces.windows(2).all(|w| w[0].key() < w[1].key()));
    for f in &faces {
        for k in f.edge_keys() {
            assert!(mesh.has_edge(k.lo(), k.hi()));
        }
        assert!(f.area() > 0.0);
        assert!(shape.contains_point(&f.centroid()));
    }
}

#[test]
fn test_reposition_keeps_topology() {
    let shape = ellipse(60, 30.0, 10.0, Point2::new(0.0, 0.0));
    let mesh = build(&shape, 5);
    let moved = mesh.map_positions(|p| Point2::new(p.x + 100.0, p.y - 7.0));

    assert!(mesh.is_comparable_to(&moved));
    assert!(mesh.edges().zip(moved.edges()).all(|(a, b)| a.key() == b.key()));
    assert_eq!(moved.position(3).unwrap().x, mesh.position(3).unwrap().x + 100.0);

    let positions: Vec<Point2> = vec![Point2::default(); mesh.vertex_count() - 1];
    assert_eq!(
        mesh.reposition(&positions).unwrap_err(),
        MeshError::VertexCountMismatch {
            expected: mesh.vertex_count(),
            found: mesh.vertex_count() - 1
        }
    );
}

#[test]
fn test_consensus_averages_positions() {
    let shape = ellipse(60, 30.0, 10.0, Point2::new(0.0, 0.0));
    let a = build(&shape, 5);
    let b = a.map_positions(|p| Point2::new(p.x * 2.0, p.y * 2.0));

    let mean = Mesh::consensus(&[a.clone(), b]).unwrap();
    for (v, orig) in mean.vertices().iter().zip(a.vertices()) {
        assert!((v.position.x - 1.5 * orig.position.x).abs() < 1e-9);
        assert!((v.position.y - 1.5 * orig.position.y).abs() < 1e-9);
    }
    assert!(mean.is_comparable_to(&a));

    assert_eq!(Mesh::consensus(&[]).unwrap_err(), MeshError::EmptyInput("consensus"));
    assert!(matches!(
        Mesh::consensus(&[a, Mesh::new()]),
        Err(MeshError::IncomparableMeshes { .. })
    ));
}
