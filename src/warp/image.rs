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

use crate::error::{MeshError, MeshResult};

/// Read access to a single-channel image, origin at the top-left pixel.
pub trait PixelSource: Sync {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn intensity(&self, x: usize, y: usize) -> u16;
}

/// Row-major single-channel image. Zero is background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntensityImage {
    width: usize,
    height: usize,
    data: Vec<u16>,
}

impl IntensityImage {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    pub fn from_fn<F>(width: usize, height: usize, f: F) -> Self
    where
        F: Fn(usize, usize) -> u16,
    {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn data(&self) -> &[u16] {
        &self.data
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u16> {
        if x < self.width && y < self.height {
            Some(self.data[y * self.width + x])
        } else {
            None
        }
    }

    /// Returns `false` if the pixel is outside the image.
    pub fn set(&mut self, x: usize, y: usize, value: u16) -> bool {
        if x < self.width && y < self.height {
            self.data[y * self.width + x] = value;
            true
        } else {
            false
        }
    }

    pub fn total_intensity(&self) -> u64 {
        self.data.iter().map(|&v| v as u64).sum()
    }

    pub fn foreground_count(&self) -> usize {
        self.data.iter().filter(|&&v| v > 0).count()
    }

    /// Pixel-wise saturating sum of equally sized images.
    pub fn accumulate(images: &[IntensityImage]) -> MeshResult<IntensityImage> {
        let (first, rest) = images
            .split_first()
            .ok_or(MeshError::EmptyInput("accumulate"))?;
        let mut sum = first.clone();
        for image in rest {
            if image.size() != sum.size() {
                return Err(MeshError::ImageSizeMismatch {
                    expected: sum.size(),
                    found: image.size(),
                });
            }
            for (acc, &v) in sum.data.iter_mut().zip(&image.data) {
                *acc = acc.saturating_add(v);
            }
        }
        Ok(sum)
    }

    /// Fill background pixels with at most three background 8-neighbours
    /// with the mean of their foreground neighbours. Neighbours are read
    /// from the unfilled image. Returns the number of pixels filled.
    pub fn fill_isolated_holes(&mut self) -> usize {
        let before = self.clone();
        let mut filled = 0;
        for y in 0..self.height {
            for x in 0..self.width {
                if before.data[y * self.width + x] > 0 {
                    continue;
                }
                let mut black = 0;
                let mut sum = 0u32;
                let mut used = 0u32;
                for (nx, ny) in neighbours(x, y) {
                    match before.get(nx, ny) {
                        Some(0) => black += 1,
                        Some(v) => {
                            sum += v as u32;
                            used += 1;
                        }
                        None => {}
                    }
                }
                if black <= 3 && used > 0 {
                    self.data[y * self.width + x] = (sum / used) as u16;
                    filled += 1;
                }
            }
        }
        filled
    }
}

// 8-connected neighbours; wrapping_sub pushes x = 0 or y = 0 out of range
fn neighbours(x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..3).flat_map(move |dy| {
        (0..3).filter_map(move |dx| {
            if dx == 1 && dy == 1 {
                None
            } else {
                Some(((x + dx).wrapping_sub(1), (y + dy).wrapping_sub(1)))
            }
        })
    })
}

impl PixelSource for IntensityImage {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn intensity(&self, x: usize, y: usize) -> u16 {
        self.get(x, y).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_hole_is_interpolated() {
        let mut img = IntensityImage::from_fn(3, 3, |x, y| if (x, y) == (1, 1) { 0 } else { 10 + x as u16 });
        assert_eq!(img.fill_isolated_holes(), 1);
        assert_eq!(img.get(1, 1), Some(11));
    }

    #[test]
    fn lone_pixel_is_not_spread() {
        let mut img = IntensityImage::new(5, 5);
        img.set(2, 2, 100);
        assert_eq!(img.fill_isolated_holes(), 0);
        assert_eq!(img.foreground_count(), 1);
    }

    #[test]
    fn accumulate_saturates() {
        let a = IntensityImage::from_fn(2, 1, |_, _| u16::MAX - 1);
        let b = IntensityImage::from_fn(2, 1, |_, _| 5);
        let sum = IntensityImage::accumulate(&[a, b]).unwrap();
        assert_eq!(sum.data(), &[u16::MAX, u16::MAX]);
        assert_eq!(
            IntensityImage::accumulate(&[IntensityImage::new(2, 2), IntensityImage::new(3, 2)]),
            Err(MeshError::ImageSizeMismatch {
                expected: (2, 2),
                found: (3, 2)
            })
        );
        assert_eq!(IntensityImage::accumulate(&[]), Err(MeshError::EmptyInput("accumulate")));
    }
}
