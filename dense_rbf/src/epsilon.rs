/////////////////////////////////////////////////////////////////////////////////////////////
//
// Estimates a default kernel shape parameter from the node geometry.
//
// Created on: 18 Oct 2026     Author: dense_rbf contributors
//
// Copyright (c) 2026, the dense_rbf contributors. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use dense_rbf_utils::{DEGENERATE_EPSILON, get_pointarray_extents};
use faer::Mat;

/// Estimates epsilon as the average spacing of the nodes.
///
/// Each axis contributes its range `max - min`. Axes whose range is below
/// `degenerate_tolerance * max(1, |min|, |max|)` are treated as constant and
/// skipped, so that points lying in a lower dimensional subspace still get a
/// positive value. With `k` remaining axes the estimate is
///
/// ```text
/// epsilon = (prod(ranges) / N)^(1 / k)
/// ```
///
/// If every axis is constant (a single node, or repeated copies of one node)
/// [`DEGENERATE_EPSILON`] is returned.
pub fn estimate_epsilon(nodes: &Mat<f64>, degenerate_tolerance: f64) -> f64 {
    let (num_nodes, dimensions) = nodes.shape();
    let extents = get_pointarray_extents(nodes);

    if extents.is_empty() {
        return DEGENERATE_EPSILON;
    }

    let ranges: Vec<f64> = (0..dimensions)
        .filter_map(|d| {
            let (min, max) = (extents[d], extents[d + dimensions]);
            let range = max - min;
            let scale = 1f64.max(min.abs()).max(max.abs());

            (range > degenerate_tolerance * scale).then_some(range)
        })
        .collect();

    if ranges.is_empty() {
        return DEGENERATE_EPSILON;
    }

    // Work in log space so large node counts in high dimension do not overflow.
    let k = ranges.len() as f64;
    let log_volume: f64 = ranges.iter().map(|r| r.ln()).sum();
    let epsilon = ((log_volume - (num_nodes as f64).ln()) / k).exp();

    match epsilon.is_finite() && epsilon > 0.0 {
        true => epsilon,
        false => DEGENERATE_EPSILON,
    }
}
