/////////////////////////////////////////////////////////////////////////////////////////////
//
// Defines the error type reported by interpolant construction and evaluation.
//
// Created on: 18 Oct 2026     Author: dense_rbf contributors
//
// Copyright (c) 2026, the dense_rbf contributors. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! Errors raised while building or evaluating an [`RbfInterpolant`](crate::RbfInterpolant).

use dense_rbf_utils::ParseKernelTypeError;
use std::{error::Error, fmt};

/// Convenience alias used by all fallible operations in this crate.
pub type Result<T> = std::result::Result<T, RbfError>;

/// Errors that can occur when building or evaluating an
/// [`RbfInterpolant`](crate::RbfInterpolant).
///
/// Input and configuration problems are reported as soon as they are detected.
/// Singular systems are not errors: they are absorbed by the least squares
/// fallback of the solver, and only a non-finite result from that fallback is
/// surfaced as [`RbfError::NonFiniteSolution`].
#[derive(Debug, Clone, PartialEq)]
pub enum RbfError {
    /// No coordinate sequences were supplied to the builder.
    NoCoordinates,

    /// The coordinate and value sequences are empty.
    Empty,

    /// A sequence or array does not have the length / shape of the first one.
    ShapeMismatch {
        /// Name of the offending argument, e.g. `"values"` or `"coordinate 2"`.
        argument: String,
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    /// The number of evaluation coordinates does not match the number of
    /// dimensions the interpolant was built with.
    DimensionMismatch { expected: usize, found: usize },

    /// A coordinate or value is NaN or infinite.
    NonFiniteInput { argument: String },

    /// A user supplied epsilon was not a positive, finite number.
    InvalidEpsilon(f64),

    /// A user supplied smoothing value was negative or not finite.
    InvalidSmoothing(f64),

    /// A kernel tag did not name any known kernel.
    UnknownKernel(String),

    /// A custom kernel returned NaN or infinity.
    KernelEvaluation { kernel: String },

    /// A matrix decomposition did not converge.
    Decomposition(String),

    /// The solve, including its least squares fallback, produced non-finite
    /// weights.
    NonFiniteSolution,
}

impl fmt::Display for RbfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RbfError::NoCoordinates => {
                write!(f, "at least one coordinate sequence is required")
            }
            RbfError::Empty => write!(f, "at least one node is required"),
            RbfError::ShapeMismatch {
                argument,
                expected,
                found,
            } => write!(
                f,
                "{} has shape {:?}, expected {:?}",
                argument, found, expected
            ),
            RbfError::DimensionMismatch { expected, found } => write!(
                f,
                "expected {} coordinate arrays, got {}",
                expected, found
            ),
            RbfError::NonFiniteInput { argument } => {
                write!(f, "{} contains NaN or infinite entries", argument)
            }
            RbfError::InvalidEpsilon(eps) => {
                write!(f, "epsilon must be positive and finite, got {}", eps)
            }
            RbfError::InvalidSmoothing(smooth) => {
                write!(f, "smooth must be non-negative and finite, got {}", smooth)
            }
            RbfError::UnknownKernel(tag) => write!(f, "unknown kernel {:?}", tag),
            RbfError::KernelEvaluation { kernel } => {
                write!(f, "{} kernel returned a non-finite value", kernel)
            }
            RbfError::Decomposition(msg) => write!(f, "matrix decomposition failed: {}", msg),
            RbfError::NonFiniteSolution => {
                write!(f, "solving the RBF system produced non-finite weights")
            }
        }
    }
}

impl Error for RbfError {}

impl From<ParseKernelTypeError> for RbfError {
    fn from(err: ParseKernelTypeError) -> Self {
        RbfError::UnknownKernel(err.0)
    }
}
