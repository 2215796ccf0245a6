/////////////////////////////////////////////////////////////////////////////////////////////
//
// Specifies kernel, shape parameter, smoothing, norm and polynomial degree options for
// configuring RBF interpolants.
//
// Created on: 18 Oct 2026     Author: dense_rbf contributors
//
// Copyright (c) 2026, the dense_rbf contributors. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! Specifies kernel, shape parameter, smoothing, norm and polynomial degree options
//! for configuring RBF interpolants.
use crate::errors::{RbfError, Result};
use dense_rbf_utils::{DistanceMetric, KernelParams, apply_kernel, apply_phi};

pub use dense_rbf_utils::KernelType;
use faer::{Mat, MatRef};
use std::{
    fmt::{self, Debug},
    sync::Arc,
};

/// Signature of a one argument custom kernel, `phi(r)`.
pub type UnaryKernelFn = dyn Fn(f64) -> f64 + Send + Sync;

/// Signature of a custom kernel that also reads the fitted interpolant state.
pub type ContextKernelFn = dyn Fn(&KernelContext<'_>, f64) -> f64 + Send + Sync;

/// Fitted state visible to a [`Kernel::Context`] kernel.
///
/// The context is fixed before the linear system is assembled, so it is the same
/// for every call made while building and while evaluating the interpolant.
#[derive(Debug, Clone, Copy)]
pub struct KernelContext<'a> {
    /// Resolved shape parameter (user supplied or estimated).
    pub epsilon: f64,

    /// Smoothing added to the kernel matrix diagonal.
    pub smooth: f64,

    /// Polynomial degree, if a polynomial term is fitted.
    pub degree: Option<usize>,

    /// Node coordinates, one node per row.
    pub nodes: MatRef<'a, f64>,
}

impl KernelContext<'_> {
    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.nrows()
    }

    /// Number of spatial dimensions.
    pub fn dimensions(&self) -> usize {
        self.nodes.ncols()
    }
}

/// Selects the radial function of an interpolant.
///
/// Named kernels come from the kernel registry; custom kernels are plain
/// closures. The two custom forms are separate variants so the calling
/// convention is fixed when the kernel is chosen.
///
/// # Examples
///
/// ```
/// use dense_rbf::interpolant_config::{Kernel, KernelType};
///
/// let named = Kernel::Named(KernelType::Gaussian);
/// let unary = Kernel::unary(|r| r);
/// let context = Kernel::context(|ctx, r| ctx.epsilon + r);
/// # let _ = (named, unary, context);
/// ```
#[derive(Clone)]
pub enum Kernel {
    /// One of the registered kernels.
    Named(KernelType),

    /// A custom kernel of the distance only.
    Unary(Arc<UnaryKernelFn>),

    /// A custom kernel of the fitted state and the distance.
    Context(Arc<ContextKernelFn>),
}

impl Kernel {
    /// Wraps a closure as a [`Kernel::Unary`].
    pub fn unary<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Kernel::Unary(Arc::new(f))
    }

    /// Wraps a closure as a [`Kernel::Context`].
    pub fn context<F>(f: F) -> Self
    where
        F: Fn(&KernelContext<'_>, f64) -> f64 + Send + Sync + 'static,
    {
        Kernel::Context(Arc::new(f))
    }

    /// Short human readable name, used in log and error messages.
    pub fn label(&self) -> String {
        match self {
            Kernel::Named(k) => k.name().to_string(),
            Kernel::Unary(_) => "custom unary".to_string(),
            Kernel::Context(_) => "custom context".to_string(),
        }
    }

    /// Evaluates the kernel over a whole distance matrix in place.
    ///
    /// The variant is matched once per call. Custom kernels are checked for
    /// non-finite output, which is reported as [`RbfError::KernelEvaluation`].
    pub fn apply(&self, distances: &mut Mat<f64>, context: &KernelContext<'_>) -> Result<()> {
        match self {
            Kernel::Named(kernel_type) => {
                let params = KernelParams::builder(*kernel_type)
                    .epsilon(context.epsilon)
                    .build();
                apply_kernel(distances, &params);
                Ok(())
            }
            Kernel::Unary(f) => {
                apply_phi(distances, |r| f(r));
                self.check_finite(distances)
            }
            Kernel::Context(f) => {
                apply_phi(distances, |r| f(context, r));
                self.check_finite(distances)
            }
        }
    }

    fn check_finite(&self, values: &Mat<f64>) -> Result<()> {
        let finite = (0..values.ncols())
            .all(|j| values.col(j).iter().all(|v| v.is_finite()));

        match finite {
            true => Ok(()),
            false => Err(RbfError::KernelEvaluation {
                kernel: self.label(),
            }),
        }
    }
}

impl Default for Kernel {
    fn default() -> Self {
        Kernel::Named(KernelType::Multiquadric)
    }
}

impl From<KernelType> for Kernel {
    fn from(kernel_type: KernelType) -> Self {
        Kernel::Named(kernel_type)
    }
}

impl Debug for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kernel::Named(k) => write!(f, "Named({:?})", k),
            Kernel::Unary(_) => write!(f, "Unary(..)"),
            Kernel::Context(_) => write!(f, "Context(..)"),
        }
    }
}

/// A convenience builder for constructing an [`InterpolantSettings`] instance.
///
/// The builder should be called via the [`InterpolantSettings::builder`] method.
///
/// See [`InterpolantSettings`] for details on each field.
#[derive(Debug, Clone, Default)]
pub struct InterpolantSettingsBuilder {
    kernel: Kernel,
    epsilon: Option<f64>,
    smooth: f64,
    norm: DistanceMetric,
    degree: Option<usize>,
}

impl InterpolantSettingsBuilder {
    /// Sets the kernel.
    pub fn kernel(mut self, kernel: impl Into<Kernel>) -> Self {
        self.kernel = kernel.into();
        self
    }

    /// Sets a fixed shape parameter. When unset it is estimated from the nodes.
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = Some(epsilon);
        self
    }

    /// Sets the smoothing value added to the kernel matrix diagonal.
    pub fn smooth(mut self, smooth: f64) -> Self {
        self.smooth = smooth;
        self
    }

    /// Sets the distance function.
    pub fn norm(mut self, norm: DistanceMetric) -> Self {
        self.norm = norm;
        self
    }

    /// Sets the total degree of the polynomial fitted alongside the RBF term.
    /// `None` disables the polynomial term.
    pub fn degree(mut self, degree: Option<usize>) -> Self {
        self.degree = degree;
        self
    }

    /// Builds and returns an instance of [`InterpolantSettings`] from the values
    /// defined in the builder.
    pub fn build(self) -> InterpolantSettings {
        InterpolantSettings {
            kernel: self.kernel,
            epsilon: self.epsilon,
            smooth: self.smooth,
            norm: self.norm,
            degree: self.degree,
        }
    }
}

/// Configuration of an RBF interpolant.
///
/// | field     | default        |
/// |-----------|----------------|
/// | `kernel`  | multiquadric   |
/// | `epsilon` | estimated      |
/// | `smooth`  | `0.0`          |
/// | `norm`    | Euclidean      |
/// | `degree`  | `None`         |
#[derive(Debug, Clone, Default)]
pub struct InterpolantSettings {
    /// The radial function.
    pub kernel: Kernel,

    /// Shape parameter. `None` estimates it from the node geometry.
    pub epsilon: Option<f64>,

    /// Optional smoothing parameter. A value of `0.0` (default) enforces an exact
    /// fit to all input data. Larger values soften the fit, which can reduce
    /// sensitivity to noisy data.
    pub smooth: f64,

    /// Distance between points.
    pub norm: DistanceMetric,

    /// Total degree of the polynomial trend fitted jointly with the RBF term.
    pub degree: Option<usize>,
}

impl InterpolantSettings {
    /// Returns a new [`InterpolantSettingsBuilder`] populated with the defaults.
    pub fn builder() -> InterpolantSettingsBuilder {
        InterpolantSettingsBuilder::default()
    }

    /// Checks the user supplied values.
    pub(crate) fn validate(&self) -> Result<()> {
        if let Some(eps) = self.epsilon {
            if !(eps > 0.0 && eps.is_finite()) {
                return Err(RbfError::InvalidEpsilon(eps));
            }
        }

        if !(self.smooth >= 0.0 && self.smooth.is_finite()) {
            return Err(RbfError::InvalidSmoothing(self.smooth));
        }

        Ok(())
    }
}
