/////////////////////////////////////////////////////////////////////////////////////////////
//
// Supplies distance matrices, point extents, and the named kernel registry.
//
// Created on: 18 Oct 2026     Author: dense_rbf contributors
//
// Copyright (c) 2026, the dense_rbf contributors. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::{KernelFromParams, RadialKernel};
use faer::{Mat, RowRef, unzip, zip};
use serde::{Deserialize, Serialize};
use std::{
    error::Error,
    fmt::{self, Debug},
    str::FromStr,
    sync::Arc,
};

/// Signature of a user supplied distance function between two points.
pub type NormFn = dyn Fn(RowRef<'_, f64>, RowRef<'_, f64>) -> f64 + Send + Sync;

/// Computes the axis aligned bounding box (AABB) extents of a matrix of points.
///
/// Returns a flat vector containing the minimum and maximum values along each column (dimension)
/// of the input matrix. The result is arranged as:
///
/// `[min_0, min_1, ..., min_n, max_0, max_1, ..., max_n]`
///
/// where `n` is the number of columns in the matrix. An empty matrix yields an
/// empty vector.
///
/// # Examples
///
/// ```
/// use faer::mat;
/// use dense_rbf_utils::get_pointarray_extents;
///
/// let points = mat![
///     [1.0, 2.0],
///     [3.0, -1.0],
///     [0.5, 4.0f64]
/// ];
/// let extents = get_pointarray_extents(&points);
/// assert_eq!(extents, vec![0.5, -1.0, 3.0, 4.0]);
/// ```
#[inline(always)]
pub fn get_pointarray_extents<T>(points: &Mat<T>) -> Vec<T>
where
    T: PartialOrd + Clone,
{
    let (nrows, ncols) = points.shape();

    if nrows == 0 {
        return Vec::new();
    }

    // The first half of the vector stores mins, the second half stores maxs.
    let mut extents: Vec<T> = Vec::with_capacity(2 * ncols);
    extents.extend((0..ncols).map(|col| points.get(0, col).clone()));
    extents.extend((0..ncols).map(|col| points.get(0, col).clone()));

    for row in points.row_iter() {
        for (col, item) in row.iter().enumerate() {
            if item < &extents[col] {
                extents[col] = item.clone();
            }
            if item > &extents[col + ncols] {
                extents[col + ncols] = item.clone();
            }
        }
    }

    extents
}

/// Calculates the euclidean distance between two points.
///
/// # Examples
///
/// ```
/// use faer::mat;
/// use dense_rbf_utils::get_distance;
///
/// let points = mat![
///     [1.0, 2.0],
///     [4.0, 6.0],
/// ];
///
/// let dist = get_distance(points.row(0), points.row(1));
///
/// assert_eq!(dist, 5.0);
/// ```
#[inline(always)]
pub fn get_distance(target: RowRef<f64>, source: RowRef<f64>) -> f64 {
    let mut dist = 0.0;
    for (t, s) in target.iter().zip(source.iter()) {
        let diff = t - s;
        dist += diff * diff;
    }
    dist.sqrt()
}

/// Calculates the Manhattan (L1) distance between two points.
#[inline(always)]
pub fn get_manhattan_distance(target: RowRef<f64>, source: RowRef<f64>) -> f64 {
    target
        .iter()
        .zip(source.iter())
        .fold(0.0, |acc, (t, s)| acc + (t - s).abs())
}

/// Calculates the Chebyshev (infinity norm) distance between two points.
#[inline(always)]
pub fn get_chebyshev_distance(target: RowRef<f64>, source: RowRef<f64>) -> f64 {
    target
        .iter()
        .zip(source.iter())
        .fold(0.0, |acc: f64, (t, s)| acc.max((t - s).abs()))
}

/// Distance function used to build distance matrices.
#[derive(Clone, Default)]
pub enum DistanceMetric {
    /// L2 norm of the coordinate difference.
    #[default]
    Euclidean,

    /// L1 norm of the coordinate difference.
    Manhattan,

    /// Infinity norm of the coordinate difference.
    Chebyshev,

    /// User supplied distance between two points. Should be non-negative and
    /// zero for identical points.
    Custom(Arc<NormFn>),
}

impl DistanceMetric {
    /// Wraps a closure as a [`DistanceMetric::Custom`].
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(RowRef<'_, f64>, RowRef<'_, f64>) -> f64 + Send + Sync + 'static,
    {
        DistanceMetric::Custom(Arc::new(f))
    }

    /// Distance between two points under this metric.
    #[inline]
    pub fn distance(&self, target: RowRef<f64>, source: RowRef<f64>) -> f64 {
        match self {
            DistanceMetric::Euclidean => get_distance(target, source),
            DistanceMetric::Manhattan => get_manhattan_distance(target, source),
            DistanceMetric::Chebyshev => get_chebyshev_distance(target, source),
            DistanceMetric::Custom(f) => f(target, source),
        }
    }
}

impl Debug for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceMetric::Euclidean => write!(f, "Euclidean"),
            DistanceMetric::Manhattan => write!(f, "Manhattan"),
            DistanceMetric::Chebyshev => write!(f, "Chebyshev"),
            DistanceMetric::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// Builds a dense distance matrix using a typed distance function.
#[inline(always)]
pub fn get_distance_matrix_typed<F>(
    target_points: &Mat<f64>,
    source_points: &Mat<f64>,
    norm: F,
) -> Mat<f64>
where
    F: Fn(RowRef<f64>, RowRef<f64>) -> f64,
{
    let m = target_points.nrows();
    let n = source_points.nrows();

    let mut d_matrix = Mat::<f64>::zeros(m, n);

    for j in 0..n {
        let source = source_points.row(j);

        for i in 0..m {
            let target = target_points.row(i);

            d_matrix[(i, j)] = norm(target, source);
        }
    }

    d_matrix
}

/// Builds a symmetric distance matrix of a point set with itself. Only the lower
/// triangle is computed and mirrored; the diagonal is exactly zero.
#[inline(always)]
pub fn get_symmetric_distance_matrix_typed<F>(points: &Mat<f64>, norm: F) -> Mat<f64>
where
    F: Fn(RowRef<f64>, RowRef<f64>) -> f64,
{
    let n = points.nrows();

    let mut d_matrix = Mat::<f64>::zeros(n, n);

    for j in 0..n {
        let source_row = points.row(j);

        for i in (j + 1)..n {
            let dist = norm(points.row(i), source_row);

            // Write both symmetric entries
            d_matrix[(i, j)] = dist;
            d_matrix[(j, i)] = dist;
        }
    }

    d_matrix
}

/// Computes the `n_target × n_source` matrix of distances between two point sets
/// (one point per row, equal column counts).
///
/// # Examples
///
/// ```
/// use faer::mat;
/// use dense_rbf_utils::{distance_matrix, DistanceMetric};
///
/// let targets = mat![[0.0, 0.0], [3.0, 4.0f64]];
/// let sources = mat![[0.0, 0.0], [0.0, 4.0], [3.0, 0.0f64]];
///
/// let d = distance_matrix(&targets, &sources, &DistanceMetric::Euclidean);
///
/// assert_eq!(d.shape(), (2, 3));
/// assert_eq!(d[(1, 0)], 5.0);
/// assert_eq!(d[(1, 1)], 3.0);
/// ```
pub fn distance_matrix(
    target_points: &Mat<f64>,
    source_points: &Mat<f64>,
    metric: &DistanceMetric,
) -> Mat<f64> {
    debug_assert_eq!(target_points.ncols(), source_points.ncols());

    match metric {
        DistanceMetric::Euclidean => {
            get_distance_matrix_typed(target_points, source_points, get_distance)
        }
        DistanceMetric::Manhattan => {
            get_distance_matrix_typed(target_points, source_points, get_manhattan_distance)
        }
        DistanceMetric::Chebyshev => {
            get_distance_matrix_typed(target_points, source_points, get_chebyshev_distance)
        }
        DistanceMetric::Custom(f) => {
            get_distance_matrix_typed(target_points, source_points, |t, s| f(t, s))
        }
    }
}

/// Computes the symmetric `n × n` distance matrix of a point set with itself.
pub fn symmetric_distance_matrix(points: &Mat<f64>, metric: &DistanceMetric) -> Mat<f64> {
    match metric {
        DistanceMetric::Euclidean => get_symmetric_distance_matrix_typed(points, get_distance),
        DistanceMetric::Manhattan => {
            get_symmetric_distance_matrix_typed(points, get_manhattan_distance)
        }
        DistanceMetric::Chebyshev => {
            get_symmetric_distance_matrix_typed(points, get_chebyshev_distance)
        }
        // A custom norm is not assumed to vanish on the diagonal or be symmetric.
        DistanceMetric::Custom(f) => get_distance_matrix_typed(points, points, |t, s| f(t, s)),
    }
}

/// Maps `phi` over every entry of `values` in place.
#[inline(always)]
pub fn apply_phi<F>(values: &mut Mat<f64>, phi: F)
where
    F: Fn(f64) -> f64,
{
    let mut dst = values.as_mut();
    zip!(&mut dst).for_each(|unzip!(r)| {
        *r = phi(*r);
    });
}

/// Error returned when a kernel tag does not name a known [`KernelType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKernelTypeError(pub String);

impl fmt::Display for ParseKernelTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown kernel {:?}, expected one of: ", self.0)?;
        let names: Vec<&str> = KernelType::ALL.iter().map(|k| k.name()).collect();
        write!(f, "{}", names.join(", "))
    }
}

impl Error for ParseKernelTypeError {}

// K-free dispatcher generated from the kernel registry below.
// Assumes each kernel type implements `KernelFromParams` and `RadialKernel`.
macro_rules! for_each_kernel {
    ( registry = [ $( ($V:ident, $name:literal, $Kty:path) ),* $(,)? ] ) => {

        /// Runtime selector for the named kernels in the registry.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum KernelType {
            $( $V, )*
        }

        impl KernelType {
            /// Every registered kernel, in registry order.
            pub const ALL: &'static [KernelType] = &[ $( KernelType::$V, )* ];

            /// Canonical tag of the kernel, e.g. `"thin_plate"`.
            pub fn name(&self) -> &'static str {
                match self {
                    $( KernelType::$V => $name, )*
                }
            }
        }

        /// Evaluates the selected kernel over a whole distance matrix in place.
        ///
        /// The kernel type is resolved once; the concrete `phi` is then mapped over
        /// every entry.
        #[inline(always)]
        pub fn apply_kernel(distances: &mut Mat<f64>, params: &crate::KernelParams) {
            match params.kernel_type {
                $(
                    KernelType::$V => {
                        // Convert uniform params -> concrete kernel type
                        let k = <$Kty as KernelFromParams>::from_params(params);
                        apply_phi(distances, |r| k.phi(r));
                    }
                ),*
            }
        }
    };
}

for_each_kernel! {
    registry = [
        (Multiquadric,        "multiquadric",         crate::kernels::MultiquadricRbfKernel),
        (InverseMultiquadric, "inverse_multiquadric", crate::kernels::InverseMultiquadricRbfKernel),
        (Gaussian,            "gaussian",             crate::kernels::GaussianRbfKernel),
        (Linear,              "linear",               crate::kernels::LinearRbfKernel),
        (Cubic,               "cubic",                crate::kernels::CubicRbfKernel),
        (Quintic,             "quintic",              crate::kernels::QuinticRbfKernel),
        (ThinPlate,           "thin_plate",           crate::kernels::ThinPlateSplineRbfKernel),
    ]
}

impl Default for KernelType {
    fn default() -> Self {
        KernelType::Multiquadric
    }
}

impl fmt::Display for KernelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KernelType {
    type Err = ParseKernelTypeError;

    /// Parses a kernel tag. Matching ignores case and treats spaces, dashes and
    /// underscores alike, so `"thin-plate"` and `"Inverse Multiquadric"` are
    /// accepted. `"inverse"` is shorthand for the inverse multiquadric.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");

        let tag = match tag.as_str() {
            "inverse" => "inverse_multiquadric",
            other => other,
        };

        KernelType::ALL
            .iter()
            .copied()
            .find(|k| k.name() == tag)
            .ok_or_else(|| ParseKernelTypeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KernelParams;
    use equator::assert;
    use faer::mat;

    #[test]
    fn distance_matrix_rectangular() {
        let targets = mat![[0.0], [1.0], [5.0f64]];
        let sources = mat![[1.0], [3.0f64]];

        let d = distance_matrix(&targets, &sources, &DistanceMetric::Euclidean);

        assert!(d.shape() == (3, 2));
        assert!(d == mat![[1.0, 3.0], [0.0, 2.0], [4.0, 2.0f64]]);
    }

    #[test]
    fn distance_metrics_3d() {
        let a = mat![[0.0, 0.0, 0.0f64]];
        let b = mat![[1.0, -2.0, 2.0f64]];

        let l2 = distance_matrix(&a, &b, &DistanceMetric::Euclidean);
        let l1 = distance_matrix(&a, &b, &DistanceMetric::Manhattan);
        let linf = distance_matrix(&a, &b, &DistanceMetric::Chebyshev);

        assert!(l2[(0, 0)] == 3.0);
        assert!(l1[(0, 0)] == 5.0);
        assert!(linf[(0, 0)] == 2.0);
    }

    #[test]
    fn custom_metric_is_used() {
        let a = mat![[0.0, 0.0], [1.0, 1.0f64]];
        let metric = DistanceMetric::custom(|t, s| 10.0 * get_distance(t, s));

        let d = distance_matrix(&a, &a, &metric);

        assert!((d[(0, 1)] - 10.0 * 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn symmetric_matches_general() {
        let points = mat![[0.0, 1.0], [2.0, -1.0], [0.5, 0.5], [3.0, 3.0f64]];

        for metric in [
            DistanceMetric::Euclidean,
            DistanceMetric::Manhattan,
            DistanceMetric::Chebyshev,
        ] {
            let full = distance_matrix(&points, &points, &metric);
            let sym = symmetric_distance_matrix(&points, &metric);
            assert!(full == sym);
        }
    }

    #[test]
    fn extents_of_empty_matrix() {
        let empty = Mat::<f64>::zeros(0, 2);
        assert!(get_pointarray_extents(&empty).is_empty());
    }

    #[test]
    fn apply_kernel_over_matrix() {
        let mut d = mat![[0.0, 1.0], [2.0, 3.0f64]];
        let params = KernelParams::builder(KernelType::Cubic).build();

        apply_kernel(&mut d, &params);

        assert!(d == mat![[0.0, 1.0], [8.0, 27.0f64]]);
    }

    #[test]
    fn parse_kernel_tags() {
        assert!("multiquadric".parse::<KernelType>() == Ok(KernelType::Multiquadric));
        assert!("inverse multiquadric".parse::<KernelType>() == Ok(KernelType::InverseMultiquadric));
        assert!("inverse".parse::<KernelType>() == Ok(KernelType::InverseMultiquadric));
        assert!("Thin-Plate".parse::<KernelType>() == Ok(KernelType::ThinPlate));
        assert!("thin_plate".parse::<KernelType>() == Ok(KernelType::ThinPlate));
        assert!("GAUSSIAN".parse::<KernelType>() == Ok(KernelType::Gaussian));
        assert!("bogus".parse::<KernelType>().is_err());
    }

    #[test]
    fn every_name_round_trips() {
        for kernel in KernelType::ALL {
            assert!(kernel.name().parse::<KernelType>() == Ok(*kernel));
        }
    }
}
