/////////////////////////////////////////////////////////////////////////////////////////////
//
// Declares traits shared by all radial kernels.
//
// Created on: 18 Oct 2026     Author: dense_rbf contributors
//
// Copyright (c) 2026, the dense_rbf contributors. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::kernel_helpers::KernelParams;

/// Converts a shared [`KernelParams`] configuration into a concrete kernel type.
pub trait KernelFromParams: Sized {
    /// Constructs `Self` from a set of uniform kernel parameters.
    fn from_params(p: &KernelParams) -> Self;
}

/// A radial function `phi(r)` of a non-negative distance.
pub trait RadialKernel {
    fn phi(&self, r: f64) -> f64;
}
