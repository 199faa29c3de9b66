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

use serde::{Deserialize, Serialize};

pub const DEFAULT_VERTEX_SPACING: usize = 10;
pub const DEFAULT_LONG_EDGE_FACTOR: f64 = 3.0;
pub const DEFAULT_MAX_PRUNE_PASSES: usize = 50;

/// Tuning for mesh construction and pruning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshOptions {
    /// Average number of border points between two peripheral vertices.
    pub vertex_spacing: usize,
    /// Internal edges longer than `max internal length / long_edge_factor`
    /// are dropped before crossing resolution. Read through
    /// [`MeshOptions::effective_long_edge_factor`].
    pub long_edge_factor: f64,
    /// Upper bound on crossing-resolution passes.
    pub max_prune_passes: usize,
    /// Rounds of skeleton subdivision before the pairwise seed.
    pub subdivisions: usize,
}

impl Default for MeshOptions {
    fn default() -> Self {
        Self {
            vertex_spacing: DEFAULT_VERTEX_SPACING,
            long_edge_factor: DEFAULT_LONG_EDGE_FACTOR,
            max_prune_passes: DEFAULT_MAX_PRUNE_PASSES,
            subdivisions: 1,
        }
    }
}

impl MeshOptions {
    pub fn with_vertex_spacing(mut self, spacing: usize) -> Self {
        self.vertex_spacing = spacing.max(1);
        self
    }

    /// Values below 1 keep every edge under this rule and are raised to 1;
    /// a non-finite factor falls back to the default.
    pub fn with_long_edge_factor(mut self, factor: f64) -> Self {
        self.long_edge_factor = sanitize_long_edge_factor(factor);
        self
    }

    /// The factor pruning uses. Deserialized options may carry any value,
    /// so it is clamped here as well.
    pub fn effective_long_edge_factor(&self) -> f64 {
        sanitize_long_edge_factor(self.long_edge_factor)
    }

    pub fn with_subdivisions(mut self, rounds: usize) -> Self {
        self.subdivisions = rounds;
        self
    }

    pub fn with_max_prune_passes(mut self, passes: usize) -> Self {
        self.max_prune_passes = passes;
        self
    }
}

fn sanitize_long_edge_factor(factor: f64) -> f64 {
    if factor.is_finite() {
        factor.max(1.0)
    } else {
        DEFAULT_LONG_EDGE_FACTOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_edge_factor_is_clamped() {
        assert_eq!(MeshOptions::default().with_long_edge_factor(4.5).long_edge_factor, 4.5);
        assert_eq!(MeshOptions::default().with_long_edge_factor(0.0).long_edge_factor, 1.0);
        assert_eq!(MeshOptions::default().with_long_edge_factor(-2.0).long_edge_factor, 1.0);
        assert_eq!(
            MeshOptions::default().with_long_edge_factor(f64::NAN).long_edge_factor,
            DEFAULT_LONG_EDGE_FACTOR
        );

        let raw = MeshOptions {
            long_edge_factor: -3.0,
            ..MeshOptions::default()
        };
        assert_eq!(raw.effective_long_edge_factor(), 1.0);
        let raw = MeshOptions {
            long_edge_factor: f64::INFINITY,
            ..MeshOptions::default()
        };
        assert_eq!(raw.effective_long_edge_factor(), DEFAULT_LONG_EDGE_FACTOR);
    }
}
