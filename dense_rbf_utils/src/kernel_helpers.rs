/////////////////////////////////////////////////////////////////////////////////////////////
//
// Provides parameter and builder types for configuring named RBF kernels.
//
// Created on: 18 Oct 2026     Author: dense_rbf contributors
//
// Copyright (c) 2026, the dense_rbf contributors. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use serde::{Deserialize, Serialize};
use crate::utils::KernelType;

/// Defines the [`KernelType`] to use, along with the shape parameter it is
/// evaluated with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KernelParams {
    /// KernelType enum variant to use.
    pub kernel_type: KernelType,

    /// Shape parameter. Distances are divided by `epsilon` before being passed to
    /// the multiquadric, inverse multiquadric and gaussian kernels, so larger
    /// values give flatter, broader basis functions.
    ///
    /// The polyharmonic kernels (linear, cubic, quintic, thin plate) ignore it.
    pub epsilon: f64,
}

impl KernelParams {
    /// Begins building a [`KernelParams`] instance for the given kernel type.
    pub fn builder(kernel_type: KernelType) -> KernelParamsBuilder {
        KernelParamsBuilder {
            kernel_type,
            epsilon: 1.0,
        }
    }
}

/// Builder for [`KernelParams`] that provides sensible defaults.
#[derive(Debug, Clone, Copy)]
pub struct KernelParamsBuilder {
    kernel_type: KernelType,
    epsilon: f64,
}

impl KernelParamsBuilder {
    /// Sets the `epsilon` parameter on the builder.
    pub fn epsilon(mut self, v: f64) -> Self {
        self.epsilon = v;
        self
    }

    /// Finalises the builder into a [`KernelParams`] value.
    ///
    /// # Panics
    /// If `epsilon` is not a positive, finite number. Callers taking epsilon
    /// from user input validate it before reaching this point.
    pub fn build(self) -> KernelParams {
        assert!(self.epsilon > 0.0 && self.epsilon.is_finite());
        KernelParams {
            kernel_type: self.kernel_type,
            epsilon: self.epsilon,
        }
    }
}
