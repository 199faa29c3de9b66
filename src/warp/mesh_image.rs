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

use serde::Serialize;

use crate::{
    error::{MeshError, MeshResult},
    geometry::Point2,
    mesh::{Face, FaceCoordinate, Mesh},
    parallel::scan,
    shape::Shape,
    warp::image::{IntensityImage, PixelSource},
};

/// A source pixel recorded by its position within a template face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeshPixel {
    pub coordinate: FaceCoordinate,
    pub intensity: u16,
}

/// Counts from drawing a [`MeshImage`] onto a target mesh.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WarpReport {
    pub pixels_drawn: usize,
    /// Template faces with no counterpart in the target mesh.
    pub missing_faces: usize,
    /// Pixels dropped with their missing faces.
    pub lost_pixels: usize,
    pub out_of_bounds: usize,
    pub interpolated: usize,
}

/// Warped pixels in the target frame. Pixel `(x, y)` of `image` sits at
/// `origin + (x, y)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WarpedImage {
    pub image: IntensityImage,
    pub origin: Point2,
    pub report: WarpReport,
}

impl WarpedImage {
    pub fn to_target(&self, x: usize, y: usize) -> Point2 {
        Point2::new(self.origin.x + x as f64, self.origin.y + y as f64)
    }
}

/// Pixel intensities of one specimen expressed in face coordinates of its
/// mesh, ready to be drawn onto any comparable mesh.
#[derive(Debug, Clone)]
pub struct MeshImage {
    template: Mesh,
    faces: Vec<Face>,
    pixels: Vec<Vec<MeshPixel>>, // parallel to `faces`
    missed_pixels: usize,
}

impl MeshImage {
    pub fn new<S, P>(template: &Mesh, shape: &S, source: &P) -> Self
    where
        S: Shape + ?Sized,
        P: PixelSource + ?Sized,
    {
        let faces = template.faces();
        let bounds = shape.bounds();

        let span = pixel_span(bounds.min.x, bounds.max.x, source.width())
            .zip(pixel_span(bounds.min.y, bounds.max.y, source.height()));
        let rows: Vec<usize> = span
            .map(|(_, (y0, y1))| (y0..=y1).collect())
            .unwrap_or_default();
        let (x0, x1) = span.map(|(xs, _)| xs).unwrap_or((0, 0));

        let per_row = scan(&rows, |&y| {
            let mut hits = Vec::new();
            let mut missed = 0;
            for x in x0..=x1 {
                let p = Point2::new(x as f64, y as f64);
                if !shape.contains_point(&p) {
                    continue;
                }
                let found = faces
                    .iter()
                    .enumerate()
                    .find(|(_, f)| f.contains(&p))
                    .and_then(|(i, f)| f.coordinate_of(&p).ok().map(|c| (i, c)));
                match found {
                    Some((i, coordinate)) => hits.push((
                        i,
                        MeshPixel {
                            coordinate,
                            intensity: source.intensity(x, y),
                        },
                    )),
                    None => missed += 1,
                }
            }
            (hits, missed)
        });

        let mut pixels = vec![Vec::new(); faces.len()];
        let mut missed_pixels = 0;
        for (hits, missed) in per_row {
            missed_pixels += missed;
            for (i, px) in hits {
                pixels[i].push(px);
            }
        }

        let mapped: usize = pixels.iter().map(Vec::len).sum();
        log::debug!("mapped {} pixels onto {} faces", mapped, faces.len());
        if missed_pixels > 0 {
            log::debug!("{} pixels inside the outline fell in no face", missed_pixels);
        }

        Self {
            template: template.clone(),
            faces,
            pixels,
            missed_pixels,
        }
    }

    pub fn template(&self) -> &Mesh {
        &self.template
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn missed_pixels(&self) -> usize {
        self.missed_pixels
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.iter().map(Vec::len).sum()
    }

    fn face_index(&self, face: &Face) -> MeshResult<usize> {
        self.faces
            .iter()
            .position(|f| f.key() == face.key())
            .ok_or(MeshError::UnknownFace(face.key()))
    }

    pub fn pixels(&self, face: &Face) -> MeshResult<&[MeshPixel]> {
        self.face_index(face).map(|i| self.pixels[i].as_slice())
    }

    pub fn total_intensity(&self) -> u64 {
        self.pixels
            .iter()
            .flatten()
            .map(|px| px.intensity as u64)
            .sum()
    }

    /// Fraction of the mapped intensity lying in `face`; zero for an empty
    /// image.
    pub fn signal_proportion(&self, face: &Face) -> MeshResult<f64> {
        let in_face: u64 = self
            .pixels(face)?
            .iter()
            .map(|px| px.intensity as u64)
            .sum();
        let total = self.total_intensity();
        if total == 0 {
            return Ok(0.0);
        }
        Ok(in_face as f64 / total as f64)
    }

    /// Redraw the mapped pixels into the frame of a comparable mesh.
    pub fn draw(&self, target: &Mesh) -> MeshResult<WarpedImage> {
        if !self.template.is_comparable_to(target) {
            return Err(MeshError::IncomparableMeshes {
                ours: self.template.edge_count(),
                theirs: target.edge_count(),
            });
        }
        let bounds = target.bounds().ok_or(MeshError::EmptyInput("draw"))?;
        let origin = Point2::new(bounds.min.x.floor(), bounds.min.y.floor());
        let width = (bounds.max.x.ceil() - origin.x) as usize + 1;
        let height = (bounds.max.y.ceil() - origin.y) as usize + 1;

        let mut image = IntensityImage::new(width, height);
        let mut report = WarpReport::default();

        for (face, pixels) in self.faces.iter().zip(&self.pixels) {
            let Some(target_face) = target.matching_face(face) else {
                report.missing_faces += 1;
                report.lost_pixels += pixels.len();
                continue;
            };
            for px in pixels {
                let p = px.coordinate.to_cartesian(&target_face);
                let x = (p.x - origin.x).round();
                let y = (p.y - origin.y).round();
                if x < 0.0 || y < 0.0 || !image.set(x as usize, y as usize, px.intensity) {
                    report.out_of_bounds += 1;
                } else {
                    report.pixels_drawn += 1;
                }
            }
        }
        report.interpolated = image.fill_isolated_holes();

        log::debug!(
            "drew {} pixels, {} faces missing, {} out of bounds, {} interpolated",
            report.pixels_drawn,
            report.missing_faces,
            report.out_of_bounds,
            report.interpolated
        );
        Ok(WarpedImage {
            image,
            origin,
            report,
        })
    }
}

/// Inclusive pixel range covering `[lo, hi]`, clipped to `0..len`.
fn pixel_span(lo: f64, hi: f64, len: usize) -> Option<(usize, usize)> {
    if len == 0 || !lo.is_finite() || !hi.is_finite() || hi < 0.0 || lo > (len - 1) as f64 {
        return None;
    }
    let first = lo.max(0.0).floor() as usize;
    let last = hi.ceil().min((len - 1) as f64) as usize;
    Some((first, last))
}
