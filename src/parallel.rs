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

//! Order-preserving scans that fan out over rayon when the `parallel`
//! feature is on.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "parallel")]
pub(crate) fn scan<T, R, F>(items: &[T], f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    items.par_iter().map(f).collect()
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn scan<T, R, F>(items: &[T], f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    items.iter().map(f).collect()
}

/// Indices of the items matching `pred`, ascending.
pub(crate) fn positions<T, F>(items: &[T], pred: F) -> Vec<usize>
where
    T: Sync,
    F: Fn(&T) -> bool + Sync + Send,
{
    scan(items, pred)
        .into_iter()
        .enumerate()
        .filter_map(|(i, hit)| hit.then_some(i))
        .collect()
}

#[cfg(feature = "parallel")]
pub(crate) fn max_by_key<T, F>(items: &[T], key: F) -> Option<f64>
where
    T: Sync,
    F: Fn(&T) -> f64 + Sync + Send,
{
    items.par_iter().map(key).reduce_with(f64::max)
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn max_by_key<T, F>(items: &[T], key: F) -> Option<f64>
where
    T: Sync,
    F: Fn(&T) -> f64 + Sync + Send,
{
    items.iter().map(key).reduce(f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_keep_input_order() {
        let items: Vec<u32> = (0..1000).collect();
        let hits = positions(&items, |v| v % 7 == 0);
        assert_eq!(hits.len(), 143);
        assert!(hits.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(max_by_key(&items, |v| *v as f64), Some(999.0));
        assert_eq!(max_by_key::<u32, _>(&[], |v| *v as f64), None);
    }
}
