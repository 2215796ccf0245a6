/////////////////////////////////////////////////////////////////////////////////////////////
//
// Defines shared helpers for random point generation, evaluation grids, and scaling utilities.
//
// Created on: 18 Oct 2026     Author: dense_rbf contributors
//
// Copyright (c) 2026, the dense_rbf contributors. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use dense_rbf_utils::get_pointarray_extents;
use faer::Mat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate a matrix of random points in the unit hypercube.
///
/// # Parameters
/// - `n`: Number of points to generate (rows in the output matrix).
/// - `d`: Number of spatial dimensions per point (columns in the output matrix).
/// - `seed`: Optional random seed.
///   - If `Some(seed)` is provided, the same sequence of points will be generated
///     deterministically across runs and platforms (useful for reproducible tests).
///   - If `None`, the generator is seeded from the operating system's randomness source.
///
/// # Returns
/// A `Mat<f64>` of shape `(n, d)` where each element lies in `[0.0, 1.0)`.
///
/// # Example
/// ```
/// use dense_rbf::generate_random_points;
///
/// // Generate 100 reproducible 3D points
/// let pts = generate_random_points(100, 3, Some(42));
/// assert_eq!(pts.ncols(), 3);
/// ```
pub fn generate_random_points(n: usize, d: usize, seed: Option<u64>) -> Mat<f64> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    Mat::from_fn(n, d, |_, _| rng.random_range(0.0..1.0))
}

/// `num` evenly spaced samples over the closed interval `[start, end]`.
///
/// A single sample is `start`; zero samples is an empty vector.
pub fn linspace(start: f64, end: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (num - 1) as f64;
            (0..num)
                .map(|i| match i == num - 1 {
                    true => end,
                    false => start + step * i as f64,
                })
                .collect()
        }
    }
}

/// Create a regular evaluation grid from per-dimension ranges and sample counts.
///
/// The first dimension varies fastest.
///
/// # Arguments
/// * `ranges` - Inclusive `(min, max)` range for each dimension.
/// * `counts` - Number of grid samples per range; must match `ranges.len()`.
///
/// # Returns
/// A `Mat<f64>` with one row per grid point and one column per dimension.
pub fn create_evaluation_grid(ranges: &[(f64, f64)], counts: &[usize]) -> Mat<f64> {
    assert_eq!(ranges.len(), counts.len());

    let axes: Vec<Vec<f64>> = ranges
        .iter()
        .zip(counts)
        .map(|(&(start, end), &num)| linspace(start, end, num))
        .collect();

    let total_points: usize = counts.iter().product();

    Mat::from_fn(total_points, ranges.len(), |row_idx, col_idx| {
        let stride: usize = counts[..col_idx].iter().product();
        let index_in_dim = (row_idx / stride) % counts[col_idx];
        axes[col_idx][index_in_dim]
    })
}

/// Compute translation and scale factors to map points into a Chebyshev cube.
///
/// The translation is the midpoint of each coordinate range and the scale
/// is half the range, with zeros replaced by `1.0` to avoid division by zero.
///
/// # Arguments
/// * `point_locations` - Matrix of point coordinates (rows are points).
///
/// # Returns
/// A tuple `(translation, scale)` where each is a per-dimension factor.
pub fn get_cheb_cube_scaling_factors(point_locations: &Mat<f64>) -> (Vec<f64>, Vec<f64>) {
    let dimensions = point_locations.ncols();
    let extents = get_pointarray_extents(point_locations);

    if extents.is_empty() {
        return (vec![0.0; dimensions], vec![1.0; dimensions]);
    }

    (0..dimensions)
        .map(|d| {
            let (min_coord, max_coord) = (extents[d], extents[d + dimensions]);
            let half_range = (max_coord - min_coord) / 2.0;
            let scale = match half_range == 0.0 {
                true => 1.0,
                false => half_range,
            };
            ((max_coord + min_coord) / 2.0, scale)
        })
        .unzip()
}

/// Apply translation and scaling to map points into a normalized cube.
///
/// For each coordinate `x`, applies `(x - translation_factor[d]) / scale_factor[d]`.
///
/// # Arguments
/// * `points` - Matrix of point coordinates to be transformed in-place.
/// * `translation_factor` - Per-dimension translation factors.
/// * `scale_factor` - Per-dimension scale factors.
pub fn scale_points(points: &mut Mat<f64>, translation_factor: &[f64], scale_factor: &[f64]) {
    points.row_iter_mut().for_each(|row| {
        row.iter_mut()
            .enumerate()
            .for_each(|(col_idx, element)| {
                *element = (*element - translation_factor[col_idx]) / scale_factor[col_idx];
            });
    });
}
