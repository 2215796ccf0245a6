/////////////////////////////////////////////////////////////////////////////////////////////
//
// Re-exports kernel utilities, constants, and distance helpers used across the dense_rbf crates.
//
// Created on: 18 Oct 2026     Author: dense_rbf contributors
//
// Copyright (c) 2026, the dense_rbf contributors. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! # Utilities for the `dense_rbf` crate
//!
//! Holds the named radial kernels, the distance matrix builders and the small
//! matrix helpers that the interpolator is assembled from.
mod constants;
mod rbf_kernels;
mod traits;
mod utils;
mod kernel_helpers;

/// Implemented kernels for use in the `dense_rbf` crate.
pub mod kernels {
    pub use super::rbf_kernels::*;
}

pub use {
    constants::{DEGENERATE_AXIS_FACTOR, DEGENERATE_EPSILON, ZERO_DISTANCE},
    kernel_helpers::{KernelParams, KernelParamsBuilder},
    traits::{KernelFromParams, RadialKernel},
    utils::{
        DistanceMetric, KernelType, NormFn, ParseKernelTypeError, apply_kernel, apply_phi,
        distance_matrix, get_chebyshev_distance, get_distance, get_manhattan_distance,
        get_pointarray_extents, symmetric_distance_matrix,
    },
};
