/////////////////////////////////////////////////////////////////////////////////////////////
//
// Defines numeric constants shared by the kernel library and the dense_rbf crate.
//
// Created on: 18 Oct 2026     Author: dense_rbf contributors
//
// Copyright (c) 2026, the dense_rbf contributors. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

/// Shape parameter used when every axis of the node set has zero extent,
/// i.e. all nodes coincide and no geometric length scale exists.
pub const DEGENERATE_EPSILON: f64 = 1.0;

/// Distances below this value are treated as an exact zero by kernels that are
/// only defined in the limit at the origin (thin plate spline).
pub const ZERO_DISTANCE: f64 = f64::EPSILON;

/// Multiplier on machine epsilon used to decide whether an axis range is
/// numerically zero.
pub const DEGENERATE_AXIS_FACTOR: f64 = 8.0;
