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

use thiserror::Error;

pub type MeshResult<T> = Result<T, MeshError>;

/// Precondition violations. Each aborts only the call that raised it;
/// coverage gaps and degenerate geometry are reported, not raised.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    #[error("meshes are not comparable: {ours} edges versus {theirs}")]
    IncomparableMeshes { ours: usize, theirs: usize },

    #[error("vertex counts differ: expected {expected}, found {found}")]
    VertexCountMismatch { expected: usize, found: usize },

    #[error("edges must enclose a triangle: resolved to {distinct} distinct vertices")]
    InvalidFace { distinct: usize },

    #[error("vertices {0} and {1} are not linked by an edge")]
    UnlinkedVertices(usize, usize),

    #[error("vertex {0} is not part of the mesh")]
    UnknownVertex(usize),

    #[error("face {0:?} is not part of the mesh")]
    UnknownFace([usize; 3]),

    #[error("face is degenerate (zero area)")]
    DegenerateFace,

    #[error("point ({x}, {y}) is not within the face")]
    PointOutsideFace { x: f64, y: f64 },

    #[error("no division count defined for segment {0}")]
    UndefinedSegment(usize),

    #[error("segment counts are not equal: template has {expected}, shape has {found}")]
    SegmentCountMismatch { expected: usize, found: usize },

    #[error("outline needs at least {min} border points, found {found}")]
    TooFewBorderPoints { min: usize, found: usize },

    #[error("proportion {0} is outside [0, 1]")]
    InvalidProportion(f64),

    #[error("image sizes differ: {expected:?} versus {found:?}")]
    ImageSizeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("{0} requires at least one input")]
    EmptyInput(&'static str),
}
