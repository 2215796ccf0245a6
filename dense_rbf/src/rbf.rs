/////////////////////////////////////////////////////////////////////////////////////////////
//
// Implements the dense RBF interpolant, its builder, and evaluation at arbitrary points.
//
// Created on: 18 Oct 2026     Author: dense_rbf contributors
//
// Copyright (c) 2026, the dense_rbf contributors. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::{
    config::{SolveMethod, SolverParams},
    epsilon::estimate_epsilon,
    errors::{RbfError, Result},
    interpolant_config::{InterpolantSettings, Kernel, KernelContext, KernelType},
    linalg::solve_rbf_system,
    polynomials::PolynomialBasis,
    progress::{ProgressMsg, ProgressSink},
    values::{NodeValue, mat_to_values, values_to_mat},
};

use dense_rbf_utils::{DistanceMetric, distance_matrix, symmetric_distance_matrix};
use faer::Mat;
use ndarray::{Array, ArrayView, Dimension};
use std::{marker::PhantomData, sync::Arc, time::Instant};

/// Number of evaluation points whose kernel matrix is formed at once.
const EVAL_CHUNK_SIZE: usize = 1024;

/// A convenience builder for constructing an [`RbfInterpolant`].
///
/// The builder owns copies of the node coordinates and values; nothing is
/// validated until [`RbfInterpolantBuilder::build`] is called.
///
/// The builder should be called via the [`RbfInterpolant::builder`] method.
pub struct RbfInterpolantBuilder<V: NodeValue = f64> {
    coordinates: Vec<Vec<f64>>,
    values: Vec<V>,
    settings: InterpolantSettings,
    kernel_name: Option<String>,
    params: SolverParams,
    progress_callback: Option<Arc<dyn ProgressSink>>,
}

impl<V: NodeValue> RbfInterpolantBuilder<V> {
    fn new<C: AsRef<[f64]>>(coordinates: &[C], values: &[V]) -> Self {
        Self {
            coordinates: coordinates.iter().map(|c| c.as_ref().to_vec()).collect(),
            values: values.to_vec(),
            settings: InterpolantSettings::default(),
            kernel_name: None,
            params: SolverParams::default(),
            progress_callback: None,
        }
    }

    /// Replaces all interpolant settings at once.
    pub fn settings(mut self, settings: InterpolantSettings) -> Self {
        self.settings = settings;
        self.kernel_name = None;
        self
    }

    /// Sets the kernel.
    pub fn kernel(mut self, kernel: impl Into<Kernel>) -> Self {
        self.settings.kernel = kernel.into();
        self.kernel_name = None;
        self
    }

    /// Selects a named kernel by its tag, e.g. `"thin-plate"` or `"gaussian"`.
    ///
    /// Unknown tags are reported by [`RbfInterpolantBuilder::build`] as
    /// [`RbfError::UnknownKernel`].
    pub fn kernel_name(mut self, name: &str) -> Self {
        self.kernel_name = Some(name.to_string());
        self
    }

    /// Sets a fixed shape parameter instead of estimating it from the nodes.
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.settings.epsilon = Some(epsilon);
        self
    }

    /// Sets the smoothing value added to the kernel matrix diagonal.
    pub fn smooth(mut self, smooth: f64) -> Self {
        self.settings.smooth = smooth;
        self
    }

    /// Sets the distance function.
    pub fn norm(mut self, norm: DistanceMetric) -> Self {
        self.settings.norm = norm;
        self
    }

    /// Sets the degree of the polynomial term, `None` for a pure RBF.
    pub fn degree(mut self, degree: Option<usize>) -> Self {
        self.settings.degree = degree;
        self
    }

    /// Sets custom solver parameters.
    pub fn params(mut self, params: SolverParams) -> Self {
        self.params = params;
        self
    }

    /// Optional callback for reporting construction progress.
    pub fn progress_callback(mut self, progress_callback: Arc<dyn ProgressSink>) -> Self {
        self.progress_callback = Some(progress_callback);
        self
    }

    /// Validates the inputs, solves the RBF system and returns the fitted
    /// [`RbfInterpolant`].
    pub fn build(mut self) -> Result<RbfInterpolant<V>> {
        if let Some(name) = self.kernel_name.take() {
            self.settings.kernel = Kernel::Named(name.parse::<KernelType>()?);
        }
        self.settings.validate()?;

        let nodes = self.validated_nodes()?;

        RbfInterpolant::fit(
            nodes,
            &self.values,
            self.settings,
            &self.params,
            self.progress_callback,
        )
    }

    /// Checks the coordinate and value sequences and packs the coordinates
    /// into an `N × D` matrix.
    fn validated_nodes(&self) -> Result<Mat<f64>> {
        let first = self.coordinates.first().ok_or(RbfError::NoCoordinates)?;
        let num_nodes = first.len();

        for (i, coordinate) in self.coordinates.iter().enumerate() {
            if coordinate.len() != num_nodes {
                return Err(RbfError::ShapeMismatch {
                    argument: format!("coordinate {}", i),
                    expected: vec![num_nodes],
                    found: vec![coordinate.len()],
                });
            }
        }

        if self.values.len() != num_nodes {
            return Err(RbfError::ShapeMismatch {
                argument: "values".to_string(),
                expected: vec![num_nodes],
                found: vec![self.values.len()],
            });
        }

        if num_nodes == 0 {
            return Err(RbfError::Empty);
        }

        for (i, coordinate) in self.coordinates.iter().enumerate() {
            if !coordinate.iter().all(|x| x.is_finite()) {
                return Err(RbfError::NonFiniteInput {
                    argument: format!("coordinate {}", i),
                });
            }
        }

        if !self.values.iter().all(|v| v.is_finite()) {
            return Err(RbfError::NonFiniteInput {
                argument: "values".to_string(),
            });
        }

        Ok(Mat::from_fn(num_nodes, self.coordinates.len(), |i, j| {
            self.coordinates[j][i]
        }))
    }
}

/// A fitted radial basis function interpolant.
///
/// Given `N` nodes in `D` dimensions and a value at each node, the interpolant is
///
/// ```text
/// s(x) = sum_i w_i phi(||x - x_i||) + sum_k c_k p_k(x)
/// ```
///
/// where `phi` is the kernel and `p_k` are the monomials of total degree up to
/// `degree` (absent when `degree` is `None`). With `smooth = 0` the interpolant
/// reproduces the node values exactly.
///
/// All state is computed by [`RbfInterpolantBuilder::build`] and is read only
/// afterwards, so a fitted interpolant can be shared between threads and
/// evaluated concurrently.
///
/// `V` is the value type, `f64` or [`num_complex::Complex64`].
///
/// # Examples
///
/// ```
/// use dense_rbf::{RbfInterpolant, interpolant_config::KernelType};
///
/// let x = [0.0, 1.0, 2.0, 3.0];
/// let y = [0.0, 1.0, 0.0, 1.0];
/// let values = [1.0, 2.0, 3.0, 4.0];
///
/// let rbf = RbfInterpolant::builder(&[&x, &y], &values)
///     .kernel(KernelType::ThinPlate)
///     .degree(Some(1))
///     .build()
///     .unwrap();
///
/// let v = rbf.evaluate_scalar(&[2.0, 0.0]).unwrap();
/// assert!((v - 3.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct RbfInterpolant<V: NodeValue = f64> {
    /// Node coordinates, one node per row.
    nodes: Mat<f64>,

    kernel: Kernel,

    /// Resolved shape parameter.
    epsilon: f64,

    smooth: f64,

    norm: DistanceMetric,

    degree: Option<usize>,

    /// Monomial basis and node scaling, present when `degree` is set.
    basis: Option<PolynomialBasis>,

    /// RBF weights, `N × CHANNELS`.
    weights: Mat<f64>,

    /// Polynomial coefficients, `m × CHANNELS`.
    poly_coefficients: Option<Mat<f64>>,

    /// Interpolant evaluated at the nodes, computed while fitting.
    fitted_values: Vec<V>,

    solve_method: SolveMethod,

    _values: PhantomData<V>,
}

impl<V: NodeValue> RbfInterpolant<V> {
    /// Creates a new [`RbfInterpolantBuilder`] from one coordinate sequence per
    /// dimension and one value per node.
    ///
    /// This is the way to construct an interpolant.
    pub fn builder<C: AsRef<[f64]>>(coordinates: &[C], values: &[V]) -> RbfInterpolantBuilder<V> {
        RbfInterpolantBuilder::new(coordinates, values)
    }

    fn fit(
        nodes: Mat<f64>,
        values: &[V],
        settings: InterpolantSettings,
        params: &SolverParams,
        progress_callback: Option<Arc<dyn ProgressSink>>,
    ) -> Result<Self> {
        let solver_start = Instant::now();
        let (num_nodes, dimensions) = nodes.shape();

        let InterpolantSettings {
            kernel,
            epsilon,
            smooth,
            norm,
            degree,
        } = settings;

        let mut kernel_matrix = symmetric_distance_matrix(&nodes, &norm);

        let epsilon = match epsilon {
            Some(eps) => eps,
            None => {
                let eps = estimate_epsilon(&nodes, params.degenerate_axis_tolerance);
                log::debug!("Estimated epsilon {:.6e} from {} nodes", eps, num_nodes);

                if let Some(sink) = &progress_callback {
                    sink.emit(ProgressMsg::EpsilonEstimated { epsilon: eps });
                }
                eps
            }
        };

        let context = KernelContext {
            epsilon,
            smooth,
            degree,
            nodes: nodes.as_ref(),
        };
        kernel.apply(&mut kernel_matrix, &context)?;

        let basis = degree.map(|d| PolynomialBasis::new(&nodes, d));
        let poly_matrix = basis.as_ref().map(|b| b.evaluate(&nodes));

        log::debug!(
            "Solving {} kernel system: {} nodes, {} dimensions, {} monomials",
            kernel.label(),
            num_nodes,
            dimensions,
            basis.as_ref().map_or(0, |b| b.size())
        );

        let value_channels = values_to_mat(values);

        let solved = solve_rbf_system(
            &kernel_matrix,
            &value_channels,
            smooth,
            poly_matrix.as_ref(),
            params,
            progress_callback.as_ref(),
        )?;

        let mut fitted = &kernel_matrix * &solved.weights;
        if let (Some(p), Some(c)) = (&poly_matrix, &solved.poly_coefficients) {
            fitted += p * c;
        }

        let solver_duration = solver_start.elapsed();

        if let Some(sink) = &progress_callback {
            sink.emit(ProgressMsg::Solved {
                method: solved.method,
                num_nodes,
            });

            let msg = format!(
                "Took {:?} to solve RBF for {} points using the following settings:\n\
                Kernel: {}, Polynomial degree: {:?}\n\
                Epsilon: {}, Smoothing: {}",
                solver_duration,
                num_nodes,
                kernel.label(),
                degree,
                epsilon,
                smooth,
            );

            sink.emit(ProgressMsg::Message { message: msg });
        }

        Ok(Self {
            nodes,
            kernel,
            epsilon,
            smooth,
            norm,
            degree,
            basis,
            weights: solved.weights,
            poly_coefficients: solved.poly_coefficients,
            fitted_values: mat_to_values(fitted.as_ref()),
            solve_method: solved.method,
            _values: PhantomData,
        })
    }

    /// Shape parameter used by the kernel, supplied or estimated.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Smoothing added to the kernel matrix diagonal.
    pub fn smooth(&self) -> f64 {
        self.smooth
    }

    /// Polynomial degree, `None` for a pure RBF.
    pub fn degree(&self) -> Option<usize> {
        self.degree
    }

    /// Number of spatial dimensions.
    pub fn dimensions(&self) -> usize {
        self.nodes.ncols()
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.nrows()
    }

    /// Node coordinates, one node per row.
    pub fn nodes(&self) -> &Mat<f64> {
        &self.nodes
    }

    /// RBF weights, one row per node and one column per value channel.
    pub fn weights(&self) -> &Mat<f64> {
        &self.weights
    }

    /// Polynomial coefficients in graded monomial order, if a polynomial term
    /// was fitted.
    pub fn poly_coefficients(&self) -> Option<&Mat<f64>> {
        self.poly_coefficients.as_ref()
    }

    /// The kernel.
    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    /// The distance function.
    pub fn norm(&self) -> &DistanceMetric {
        &self.norm
    }

    /// Decomposition that produced the weights.
    pub fn solve_method(&self) -> SolveMethod {
        self.solve_method
    }

    fn context(&self) -> KernelContext<'_> {
        KernelContext {
            epsilon: self.epsilon,
            smooth: self.smooth,
            degree: self.degree,
            nodes: self.nodes.as_ref(),
        }
    }

    /// Evaluates the interpolant at `M` points given as an `M × D` matrix.
    ///
    /// Returns one value per row of `points`.
    pub fn evaluate_points(&self, points: &Mat<f64>) -> Result<Vec<V>> {
        if points.ncols() != self.dimensions() {
            return Err(RbfError::DimensionMismatch {
                expected: self.dimensions(),
                found: points.ncols(),
            });
        }

        let num_points = points.nrows();
        let mut out = Vec::with_capacity(num_points);
        let mut start = 0;

        while start < num_points {
            let len = EVAL_CHUNK_SIZE.min(num_points - start);
            let chunk = points.as_ref().subrows(start, len).to_owned();
            out.extend(self.evaluate_chunk(&chunk)?);
            start += len;
        }

        Ok(out)
    }

    fn evaluate_chunk(&self, points: &Mat<f64>) -> Result<Vec<V>> {
        let mut kernel_matrix = distance_matrix(points, &self.nodes, &self.norm);
        self.kernel.apply(&mut kernel_matrix, &self.context())?;

        let mut interpolated_values = kernel_matrix * &self.weights;

        if let (Some(basis), Some(coeffs)) = (&self.basis, &self.poly_coefficients) {
            interpolated_values += basis.evaluate(points) * coeffs;
        }

        Ok(mat_to_values(interpolated_values.as_ref()))
    }

    /// Evaluates the interpolant at a single point with one coordinate per
    /// dimension.
    pub fn evaluate_scalar(&self, point: &[f64]) -> Result<V> {
        if point.len() != self.dimensions() {
            return Err(RbfError::DimensionMismatch {
                expected: self.dimensions(),
                found: point.len(),
            });
        }

        let points = Mat::from_fn(1, point.len(), |_, j| point[j]);
        let values = self.evaluate_chunk(&points)?;

        Ok(values[0])
    }

    /// Evaluates the interpolant on arrays of query coordinates.
    ///
    /// `coordinates` holds one array per dimension, all of the same shape. The
    /// result has that shape too, so scalars (0-d arrays), vectors and grids
    /// are all evaluated in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_rbf::RbfInterpolant;
    /// use ndarray::{Array2, array};
    ///
    /// let x = [0.0, 1.0, 0.0, 1.0];
    /// let y = [0.0, 0.0, 1.0, 1.0];
    /// let rbf = RbfInterpolant::builder(&[&x, &y], &[0.0, 1.0, 1.0, 2.0])
    ///     .build()
    ///     .unwrap();
    ///
    /// let xi: Array2<f64> = array![[0.0, 1.0], [0.0, 1.0]];
    /// let yi: Array2<f64> = array![[0.0, 0.0], [1.0, 1.0]];
    /// let zi = rbf.evaluate(&[xi.view(), yi.view()]).unwrap();
    ///
    /// assert_eq!(zi.shape(), &[2, 2]);
    /// assert!((zi[[1, 1]] - 2.0).abs() < 1e-10);
    /// ```
    pub fn evaluate<D: Dimension>(&self, coordinates: &[ArrayView<'_, f64, D>]) -> Result<Array<V, D>> {
        if coordinates.len() != self.dimensions() {
            return Err(RbfError::DimensionMismatch {
                expected: self.dimensions(),
                found: coordinates.len(),
            });
        }

        let shape = coordinates[0].raw_dim();

        for (i, c) in coordinates.iter().enumerate() {
            if c.shape() != shape.slice() {
                return Err(RbfError::ShapeMismatch {
                    argument: format!("coordinate {}", i),
                    expected: shape.slice().to_vec(),
                    found: c.shape().to_vec(),
                });
            }
        }

        let mut points = Mat::<f64>::zeros(shape.size(), coordinates.len());
        for (j, c) in coordinates.iter().enumerate() {
            c.iter().enumerate().for_each(|(i, x)| points[(i, j)] = *x);
        }

        let values = self.evaluate_points(&points)?;

        Array::from_shape_vec(shape.clone(), values).map_err(|_| RbfError::ShapeMismatch {
            argument: "evaluation result".to_string(),
            expected: shape.slice().to_vec(),
            found: vec![points.nrows()],
        })
    }

    /// The interpolant evaluated at its own nodes.
    ///
    /// Without smoothing these equal the node values up to the accuracy of the
    /// solve, so the difference is a direct residual check.
    pub fn evaluate_at_nodes(&self) -> Vec<V> {
        self.fitted_values.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{common::linspace, rbf_test_functions::RbfTestFunctions};
    use equator::assert;
    use ndarray::{Array1, arr0};
    use num_complex::Complex64;

    /// Nine samples of `sin(x)` over `[0, 10]`.
    fn sine_samples() -> (Vec<f64>, Vec<f64>) {
        let x = linspace(0.0, 10.0, 9);
        let y = RbfTestFunctions::sine_1d(&Mat::from_fn(x.len(), 1, |i, _| x[i]));
        (x, y)
    }

    fn sine_interpolant(kernel: KernelType) -> RbfInterpolant {
        let (x, y) = sine_samples();

        RbfInterpolant::builder(&[&x], &y)
            .kernel(kernel)
            .build()
            .unwrap()
    }

    #[test]
    fn default_construction() {
        let rbf: RbfInterpolant = RbfInterpolant::builder(&[[1.0, 2.0, 3.0]], &[1.0, 2.0, 3.0])
            .build()
            .unwrap();

        assert!(matches!(rbf.kernel(), Kernel::Named(KernelType::Multiquadric)));
        assert!(rbf.smooth() == 0.0);
        assert!(rbf.degree().is_none());
        assert!(rbf.poly_coefficients().is_none());
        assert!(rbf.dimensions() == 1);
        assert!(rbf.num_nodes() == 3);
        assert!((rbf.epsilon() - 2.0 / 3.0).abs() < 1e-14);
        assert!(rbf.solve_method() == SolveMethod::Lu);
    }

    #[test]
    fn scalar_and_array_evaluation_agree() {
        let rbf = sine_interpolant(KernelType::Multiquadric);

        let xi = Array1::from(linspace(0.0, 10.0, 17));
        let array_values = rbf.evaluate(&[xi.view()]).unwrap();

        for (i, x) in xi.iter().enumerate() {
            let scalar = rbf.evaluate_scalar(&[*x]).unwrap();
            assert!((scalar - array_values[i]).abs() < 1e-12);
        }

        let zero_d = arr0(xi[3]);
        let value = rbf.evaluate(&[zero_d.view()]).unwrap();
        assert!(value.ndim() == 0);
        assert!((value[()] - array_values[3]).abs() < 1e-12);
    }

    #[test]
    fn evaluation_is_chunk_independent() {
        let rbf = sine_interpolant(KernelType::Cubic);

        let xi = linspace(-1.0, 11.0, EVAL_CHUNK_SIZE + 37);
        let points = Mat::from_fn(xi.len(), 1, |i, _| xi[i]);
        let values = rbf.evaluate_points(&points).unwrap();

        assert!(values.len() == xi.len());
        for i in [0, EVAL_CHUNK_SIZE - 1, EVAL_CHUNK_SIZE, xi.len() - 1] {
            let scalar = rbf.evaluate_scalar(&[xi[i]]).unwrap();
            assert!((values[i] - scalar).abs() < 1e-10);
        }
    }

    #[test]
    fn evaluate_at_nodes_reproduces_values() {
        let rbf = sine_interpolant(KernelType::Gaussian);
        let (_, y) = sine_samples();

        let fitted = rbf.evaluate_at_nodes();
        for (f, y) in fitted.iter().zip(&y) {
            assert!((f - y).abs() < 1e-8);
        }
    }

    #[test]
    fn kernel_name_is_parsed_at_build() {
        let rbf = RbfInterpolant::builder(&[[0.0, 1.0, 2.0]], &[1.0, 0.0, 1.0])
            .kernel_name("Thin-Plate")
            .build()
            .unwrap();
        assert!(matches!(rbf.kernel(), Kernel::Named(KernelType::ThinPlate)));

        let err = RbfInterpolant::builder(&[[0.0, 1.0]], &[1.0, 0.0])
            .kernel_name("bogus")
            .build()
            .unwrap_err();
        assert!(err == RbfError::UnknownKernel("bogus".to_string()));
    }

    #[test]
    fn input_validation() {
        let no_coords: [[f64; 0]; 0] = [];
        let err = RbfInterpolant::builder(&no_coords, &[1.0]).build().unwrap_err();
        assert!(err == RbfError::NoCoordinates);

        let empty: [f64; 0] = [];
        let err = RbfInterpolant::<f64>::builder(&[empty], &[]).build().unwrap_err();
        assert!(err == RbfError::Empty);

        let err = RbfInterpolant::builder(&[vec![0.0, 1.0], vec![0.0]], &[1.0, 2.0])
            .build()
            .unwrap_err();
        assert!(
            err == RbfError::ShapeMismatch {
                argument: "coordinate 1".to_string(),
                expected: vec![2],
                found: vec![1],
            }
        );

        let err = RbfInterpolant::builder(&[[0.0, 1.0]], &[1.0])
            .build()
            .unwrap_err();
        assert!(matches!(err, RbfError::ShapeMismatch { .. }));

        let err = RbfInterpolant::builder(&[[0.0, f64::NAN]], &[1.0, 2.0])
            .build()
            .unwrap_err();
        assert!(
            err == RbfError::NonFiniteInput {
                argument: "coordinate 0".to_string()
            }
        );

        let err = RbfInterpolant::builder(&[[0.0, 1.0]], &[1.0, f64::INFINITY])
            .build()
            .unwrap_err();
        assert!(
            err == RbfError::NonFiniteInput {
                argument: "values".to_string()
            }
        );

        let err = RbfInterpolant::builder(&[[0.0, 1.0]], &[1.0, 2.0])
            .epsilon(-1.0)
            .build()
            .unwrap_err();
        assert!(err == RbfError::InvalidEpsilon(-1.0));

        let err = RbfInterpolant::builder(&[[0.0, 1.0]], &[1.0, 2.0])
            .smooth(f64::NAN)
            .build()
            .unwrap_err();
        assert!(matches!(err, RbfError::InvalidSmoothing(_)));
    }

    #[test]
    fn evaluation_argument_checks() {
        let rbf = RbfInterpolant::builder(&[[0.0, 1.0, 2.0], [0.0, 1.0, 0.0]], &[1.0, 2.0, 3.0])
            .build()
            .unwrap();

        let a = Array1::from(vec![0.0, 1.0]);
        let b = Array1::from(vec![0.0, 1.0, 2.0]);

        let err = rbf.evaluate(&[a.view()]).unwrap_err();
        assert!(err == RbfError::DimensionMismatch { expected: 2, found: 1 });

        let err = rbf.evaluate(&[a.view(), b.view()]).unwrap_err();
        assert!(
            err == RbfError::ShapeMismatch {
                argument: "coordinate 1".to_string(),
                expected: vec![2],
                found: vec![3],
            }
        );

        let err = rbf.evaluate_scalar(&[1.0]).unwrap_err();
        assert!(err == RbfError::DimensionMismatch { expected: 2, found: 1 });

        let empty = Array1::<f64>::zeros(0);
        let out = rbf.evaluate(&[empty.view(), empty.view()]).unwrap();
        assert!(out.len() == 0);
    }

    #[test]
    fn duplicate_nodes_use_least_squares() {
        let x = [0.0, 1.0, 1.0, 2.0];
        let values = [0.0, 1.0, 1.0, 4.0];

        let rbf = RbfInterpolant::builder(&[&x], &values)
            .kernel(KernelType::Linear)
            .build()
            .unwrap();

        assert!(rbf.solve_method() == SolveMethod::LeastSquares);
        for (x, v) in x.iter().zip(&values) {
            assert!((rbf.evaluate_scalar(&[*x]).unwrap() - v).abs() < 1e-10);
        }
    }

    #[test]
    fn smoothing_relaxes_the_fit() {
        let (x, y) = sine_samples();

        let rbf = RbfInterpolant::builder(&[&x], &y)
            .kernel(KernelType::ThinPlate)
            .degree(Some(1))
            .smooth(10.0)
            .build()
            .unwrap();

        let max_diff = rbf
            .evaluate_at_nodes()
            .iter()
            .zip(&y)
            .fold(0.0f64, |acc, (a, b)| acc.max((a - b).abs()));

        assert!(rbf.smooth() == 10.0);
        assert!(max_diff > 1e-3);
    }

    #[test]
    fn custom_kernels() {
        let (x, y) = sine_samples();

        let unary = RbfInterpolant::builder(&[&x], &y)
            .kernel(Kernel::unary(|r| r.powi(3)))
            .build()
            .unwrap();
        let named = sine_interpolant(KernelType::Cubic);

        let context = RbfInterpolant::builder(&[&x], &y)
            .kernel(Kernel::context(|ctx, r| ((r / ctx.epsilon).powi(2) + 1.0).sqrt()))
            .build()
            .unwrap();
        let multiquadric = sine_interpolant(KernelType::Multiquadric);

        for xi in linspace(0.0, 10.0, 23) {
            let a = unary.evaluate_scalar(&[xi]).unwrap();
            let b = named.evaluate_scalar(&[xi]).unwrap();
            assert!((a - b).abs() < 1e-7);

            let c = context.evaluate_scalar(&[xi]).unwrap();
            let d = multiquadric.evaluate_scalar(&[xi]).unwrap();
            assert!((c - d).abs() < 1e-7);
        }
    }

    #[test]
    fn non_finite_custom_kernel() {
        let err = RbfInterpolant::builder(&[[0.0, 1.0]], &[1.0, 2.0])
            .kernel(Kernel::unary(|r| r.ln()))
            .build()
            .unwrap_err();

        assert!(matches!(err, RbfError::KernelEvaluation { .. }));
    }

    #[test]
    fn complex_values() {
        let x = linspace(0.0, 3.0, 7);
        let values: Vec<Complex64> = x.iter().map(|v| Complex64::new(v.cos(), v.sin())).collect();

        let rbf = RbfInterpolant::builder(&[&x], &values)
            .kernel(KernelType::Cubic)
            .degree(Some(1))
            .build()
            .unwrap();

        assert!(rbf.weights().ncols() == 2);
        for (xi, v) in x.iter().zip(&values) {
            let z = rbf.evaluate_scalar(&[*xi]).unwrap();
            assert!((z - v).norm() < 1e-10);
        }
    }

    #[test]
    fn progress_messages() {
        let received = Arc::new(std::sync::Mutex::new(Vec::new()));
        let store = received.clone();
        let (sink, handle) =
            crate::progress::closure_sink(8, move |msg| store.lock().unwrap().push(msg));

        let rbf = RbfInterpolant::builder(&[[0.0, 1.0, 3.0]], &[1.0, 2.0, 0.0])
            .progress_callback(sink)
            .build()
            .unwrap();
        drop(rbf);
        handle.join().unwrap();

        let received = received.lock().unwrap();
        assert!(matches!(received[0], ProgressMsg::EpsilonEstimated { .. }));
        assert!(matches!(
            received[1],
            ProgressMsg::Solved {
                method: SolveMethod::Lu,
                num_nodes: 3
            }
        ));
        assert!(matches!(received[2], ProgressMsg::Message { .. }));
    }
}
