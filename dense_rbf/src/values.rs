/////////////////////////////////////////////////////////////////////////////////////////////
//
// Maps real and complex node values onto the real value channels of the RBF system.
//
// Created on: 18 Oct 2026     Author: dense_rbf contributors
//
// Copyright (c) 2026, the dense_rbf contributors. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use faer::{Mat, MatRef};
use num_complex::Complex64;

/// A value that can be attached to an interpolation node.
///
/// The kernel matrix is always real, so a value type is split into a fixed
/// number of real channels which are solved as separate right hand side
/// columns of the same system and recombined on evaluation.
pub trait NodeValue: Copy + Send + Sync + 'static {
    /// Number of real channels per value.
    const CHANNELS: usize;

    /// Writes the channels of `self` into `out` (length [`Self::CHANNELS`]).
    fn write_channels(&self, out: &mut [f64]);

    /// Rebuilds a value from its channels.
    fn from_channels(channels: &[f64]) -> Self;

    /// Whether every channel is finite.
    fn is_finite(&self) -> bool;
}

impl NodeValue for f64 {
    const CHANNELS: usize = 1;

    #[inline]
    fn write_channels(&self, out: &mut [f64]) {
        out[0] = *self;
    }

    #[inline]
    fn from_channels(channels: &[f64]) -> Self {
        channels[0]
    }

    #[inline]
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

impl NodeValue for Complex64 {
    const CHANNELS: usize = 2;

    #[inline]
    fn write_channels(&self, out: &mut [f64]) {
        out[0] = self.re;
        out[1] = self.im;
    }

    #[inline]
    fn from_channels(channels: &[f64]) -> Self {
        Complex64::new(channels[0], channels[1])
    }

    #[inline]
    fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

/// Packs values into an `n × CHANNELS` matrix.
pub(crate) fn values_to_mat<V: NodeValue>(values: &[V]) -> Mat<f64> {
    let mut buf = vec![0.0; V::CHANNELS];
    let mut out = Mat::<f64>::zeros(values.len(), V::CHANNELS);

    for (i, v) in values.iter().enumerate() {
        v.write_channels(&mut buf);
        for (c, x) in buf.iter().enumerate() {
            out[(i, c)] = *x;
        }
    }

    out
}

/// Unpacks the rows of an `n × CHANNELS` matrix into values.
pub(crate) fn mat_to_values<V: NodeValue>(channels: MatRef<'_, f64>) -> Vec<V> {
    debug_assert_eq!(channels.ncols(), V::CHANNELS);
    let mut buf = vec![0.0; V::CHANNELS];

    (0..channels.nrows())
        .map(|i| {
            for (c, x) in buf.iter_mut().enumerate() {
                *x = channels[(i, c)];
            }
            V::from_channels(&buf)
        })
        .collect()
}
