/////////////////////////////////////////////////////////////////////////////////////////////
//
// Declares the numerical parameters of the dense RBF solve.
//
// Created on: 18 Oct 2026     Author: dense_rbf contributors
//
// Copyright (c) 2026, the dense_rbf contributors. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! Declares the numerical parameters of the dense RBF solve.
use dense_rbf_utils::DEGENERATE_AXIS_FACTOR;
use serde::{Deserialize, Serialize};

/// Parameters controlling the **direct solve** of the RBF system and the
/// shape parameter estimate.
///
/// The system is factorised with a partially pivoted LU decomposition. If that
/// solve produces non-finite weights, or a relative residual above
/// `residual_tolerance`, it is replaced by a minimum norm least squares solve
/// through a singular value decomposition. This absorbs duplicate nodes and
/// other rank deficiencies.
///
/// ### Intended Usage
/// The defaults suit almost every data set. They are exposed for users who
/// want strict failure on singular systems (`least_squares_fallback = false`)
/// or who need to tune the rank cutoff of the fallback.
///
/// ### Default Values
/// - `residual_tolerance`: `1e-8`
/// - `singular_value_cutoff`: `None`, resolved to `f64::EPSILON * (N + m)`
/// - `least_squares_fallback`: `true`
/// - `degenerate_axis_tolerance`: `8 * f64::EPSILON`
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct SolverParams {
    /// Largest accepted relative residual `||Ax - b|| / (||A|| ||x|| + ||b||)`
    /// of the LU solve.
    pub residual_tolerance: f64,

    /// Singular values below `cutoff * sigma_max` are discarded by the least
    /// squares fallback. `None` uses `f64::EPSILON` times the system size.
    pub singular_value_cutoff: Option<f64>,

    /// Whether a failed LU solve falls back to least squares.
    pub least_squares_fallback: bool,

    /// Relative width below which a coordinate axis is treated as constant when
    /// estimating epsilon.
    pub degenerate_axis_tolerance: f64,
}

impl Default for SolverParams {
    fn default() -> Self {
        SolverParams {
            residual_tolerance: 1e-8,
            singular_value_cutoff: None,
            least_squares_fallback: true,
            degenerate_axis_tolerance: DEGENERATE_AXIS_FACTOR * f64::EPSILON,
        }
    }
}

impl SolverParams {
    /// Returns a new [`SolverParamsBuilder`] populated with the defaults.
    pub fn builder() -> SolverParamsBuilder {
        SolverParamsBuilder::new()
    }

    /// Singular value cutoff for a system of `size` unknowns.
    pub(crate) fn resolved_cutoff(&self, size: usize) -> f64 {
        self.singular_value_cutoff
            .unwrap_or(f64::EPSILON * size.max(1) as f64)
    }
}

/// A convenience builder for constructing a [`SolverParams`] instance.
///
/// The builder should be called via the [`SolverParams::builder`] method.
///
/// See [`SolverParams`] for details on each field.
#[derive(Debug, Clone)]
pub struct SolverParamsBuilder {
    pub residual_tolerance: f64,
    pub singular_value_cutoff: Option<f64>,
    pub least_squares_fallback: bool,
    pub degenerate_axis_tolerance: f64,
}

impl SolverParamsBuilder {
    fn new() -> Self {
        let defaults = SolverParams::default();
        Self {
            residual_tolerance: defaults.residual_tolerance,
            singular_value_cutoff: defaults.singular_value_cutoff,
            least_squares_fallback: defaults.least_squares_fallback,
            degenerate_axis_tolerance: defaults.degenerate_axis_tolerance,
        }
    }

    /// Sets the residual tolerance of the LU solve.
    pub fn residual_tolerance(mut self, residual_tolerance: f64) -> Self {
        self.residual_tolerance = residual_tolerance;
        self
    }

    /// Sets a fixed relative singular value cutoff for the fallback.
    pub fn singular_value_cutoff(mut self, singular_value_cutoff: f64) -> Self {
        self.singular_value_cutoff = Some(singular_value_cutoff);
        self
    }

    /// Enables or disables the least squares fallback.
    pub fn least_squares_fallback(mut self, least_squares_fallback: bool) -> Self {
        self.least_squares_fallback = least_squares_fallback;
        self
    }

    /// Sets the relative tolerance for constant axes.
    pub fn degenerate_axis_tolerance(mut self, degenerate_axis_tolerance: f64) -> Self {
        self.degenerate_axis_tolerance = degenerate_axis_tolerance;
        self
    }

    /// Builds and returns a [`SolverParams`] instance.
    pub fn build(self) -> SolverParams {
        SolverParams {
            residual_tolerance: self.residual_tolerance,
            singular_value_cutoff: self.singular_value_cutoff,
            least_squares_fallback: self.least_squares_fallback,
            degenerate_axis_tolerance: self.degenerate_axis_tolerance,
        }
    }
}

/// Decomposition that produced the fitted weights.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SolveMethod {
    /// Partially pivoted LU factorisation.
    Lu,

    /// Minimum norm least squares through a truncated SVD.
    LeastSquares,
}

#[cfg(test)]
mod tests {
    use super::*;
    use equator::assert;

    #[test]
    fn builder_matches_defaults() {
        assert!(SolverParams::builder().build() == SolverParams::default());
    }

    #[test]
    fn cutoff_scales_with_system_size() {
        let params = SolverParams::default();
        assert!(params.resolved_cutoff(10) == 10.0 * f64::EPSILON);

        let fixed = SolverParams::builder().singular_value_cutoff(1e-6).build();
        assert!(fixed.resolved_cutoff(10) == 1e-6);
    }

    #[test]
    fn builder_overrides() {
        let params = SolverParams::builder()
            .residual_tolerance(1e-4)
            .least_squares_fallback(false)
            .degenerate_axis_tolerance(1e-3)
            .build();

        assert!(params.residual_tolerance == 1e-4);
        assert!(!params.least_squares_fallback);
        assert!(params.degenerate_axis_tolerance == 1e-3);
        assert!(params.singular_value_cutoff.is_none());
    }
}
