/////////////////////////////////////////////////////////////////////////////////////////////
//
// Exposes the public API and high-level documentation for dense RBF interpolation.
//
// Created on: 18 Oct 2026     Author: dense_rbf contributors
//
// Copyright (c) 2026, the dense_rbf contributors. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! # Dense Radial Basis Function (RBF) interpolation of scattered data.
//!
//! Given `N` nodes in `D` dimensions and a value at each node, an
//! [`RbfInterpolant`] builds the function
//!
//! ```text
//! s(x) = sum_i w_i phi(||x - x_i||) + sum_k c_k p_k(x)
//! ```
//!
//! that passes through every node (unless smoothing is requested) and varies
//! smoothly in between. The weights come from a single dense solve, so memory
//! grows as **O(N²)** and construction time as **O(N³)**; the crate targets data
//! sets of up to a few thousand nodes, in any number of dimensions.
//!
//! # Features
//! - Seven named kernels (multiquadric, inverse multiquadric, gaussian, linear,
//!   cubic, quintic, thin plate) and custom kernels given as closures
//! - Automatic shape parameter (epsilon) from the node spacing
//! - Optional polynomial term of any total degree solved jointly with the weights
//! - Euclidean, Manhattan, Chebyshev or custom distance functions
//! - Real or complex node values
//! - Shape preserving evaluation of `ndarray` query arrays
//! - Least squares fallback for singular systems such as duplicated nodes
//! - Built on [`faer`](https://docs.rs/faer/latest/faer/) for linear algebra
//!
//! # Examples
//!
//! ```
//! use dense_rbf::{
//!     RbfInterpolant,
//!     RbfTestFunctions,
//!     generate_random_points,
//!     interpolant_config::KernelType,
//! };
//!
//! // Generate some random data in the unit square
//! let source_points = generate_random_points(100, 2, Some(42));
//! let x: Vec<f64> = source_points.col(0).iter().copied().collect();
//! let y: Vec<f64> = source_points.col(1).iter().copied().collect();
//!
//! // Assign some values to the source points using Franke's function
//! let values = RbfTestFunctions::franke_2d(&source_points);
//!
//! // Setup and solve the RBF
//! let rbf = RbfInterpolant::builder(&[&x, &y], &values)
//!     .kernel(KernelType::ThinPlate)
//!     .degree(Some(1))
//!     .build()
//!     .unwrap();
//!
//! // The interpolant reproduces the input values at the nodes
//! let max_diff = rbf
//!     .evaluate_at_nodes()
//!     .iter()
//!     .zip(&values)
//!     .fold(0.0f64, |acc, (a, b)| acc.max((a - b).abs()));
//!
//! assert!(max_diff < 1e-8);
//! ```
//!
//! # References
//! 1.  Fasshauer, G., 2007. Meshfree Approximation Methods with Matlab. World Scientific Publishing Co.
//! 2.  Hardy, R. L., 1971. Multiquadric equations of topography and other irregular surfaces.
//!     Journal of Geophysical Research, 76(8), 1905-1915.
pub mod interpolant_config;

mod common;

mod rbf;

mod epsilon;

mod polynomials;

mod linalg;

mod values;

pub mod errors;

pub mod progress;

pub mod config;

mod rbf_test_functions;

pub use {
    common::{create_evaluation_grid, generate_random_points, linspace},
    config::{SolveMethod, SolverParams, SolverParamsBuilder},
    dense_rbf_utils::DistanceMetric,
    epsilon::estimate_epsilon,
    errors::{RbfError, Result},
    linalg::{SolvedSystem, solve_rbf_system},
    polynomials::{basis_size, evaluate_monomials, monomial_exponents},
    rbf::{RbfInterpolant, RbfInterpolantBuilder},
    rbf_test_functions::RbfTestFunctions,
    values::NodeValue,
};
