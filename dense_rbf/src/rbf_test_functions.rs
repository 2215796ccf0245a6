/////////////////////////////////////////////////////////////////////////////////////////////
//
// Provides test functions for validating and demonstrating RBF interpolation quality.
//
// Created on: 18 Oct 2026     Author: dense_rbf contributors
//
// Copyright (c) 2026, the dense_rbf contributors. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use faer::Mat;

/// Struct that implements 1D, 2D and N-dimensional functions to generate values for
/// testing RBF interpolation.
///
/// Every function takes one point per row and returns one value per point.
pub struct RbfTestFunctions;

impl RbfTestFunctions {
    /// `sin(x)` of the first coordinate.
    pub fn sine_1d(points: &Mat<f64>) -> Vec<f64> {
        assert_eq!(points.ncols(), 1);
        points.col(0).iter().map(|x| x.sin()).collect()
    }

    /// Franke's two-dimensional test function:
    /// <div>
    /// $$
    /// \begin{aligned}
    /// F(x,y) &=
    /// \tfrac{3}{4}\exp\!\left[
    ///     -\frac{(9x-2)^2 + (9y-2)^2}{4}
    /// \right] \\[6pt]
    /// &\quad+ \tfrac{3}{4}\exp\!\left[
    ///     -\frac{(9x+1)^2}{49}
    ///     -\frac{(9y+1)^2}{10}
    /// \right] \\[6pt]
    /// &\quad+ \tfrac{1}{2}\exp\!\left[
    ///     -\frac{(9x-7)^2 + (9y-3)^2}{4}
    /// \right] \\[6pt]
    /// &\quad- \tfrac{1}{5}\exp\!\left[
    ///     -(9x-4)^2 - (9y-7)^2
    /// \right]
    /// \end{aligned}
    /// $$
    /// </div>
    pub fn franke_2d(points: &Mat<f64>) -> Vec<f64> {
        assert_eq!(points.ncols(), 2);

        (0..points.nrows())
            .map(|i| {
                let nx = 9.0 * points[(i, 0)];
                let ny = 9.0 * points[(i, 1)];

                let term1 = 0.75 * (-((nx - 2.0).powi(2) + (ny - 2.0).powi(2)) / 4.0).exp();
                let term2 = 0.75 * (-(nx + 1.0).powi(2) / 49.0 - (ny + 1.0).powi(2) / 10.0).exp();
                let term3 = 0.5 * (-((nx - 7.0).powi(2) + (ny - 3.0).powi(2)) / 4.0).exp();
                let term4 = -0.2 * (-((nx - 4.0).powi(2) + (ny - 7.0).powi(2))).exp();

                term1 + term2 + term3 + term4
            })
            .collect()
    }

    /// `x_0 * exp(-|x|^2)` in any number of dimensions.
    ///
    /// In two dimensions this is the `x * exp(-x^2 - y^2)` surface commonly used
    /// to check exact interpolation.
    pub fn gaussian_bump(points: &Mat<f64>) -> Vec<f64> {
        (0..points.nrows())
            .map(|i| {
                let r2: f64 = points.row(i).iter().map(|x| x * x).sum();
                points[(i, 0)] * (-r2).exp()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use equator::assert;
    use faer::mat;

    #[test]
    fn franke_reference_values() {
        let values = RbfTestFunctions::franke_2d(&mat![[0.0, 0.0], [0.5, 0.5f64]]);

        assert!((values[0] - 0.7664205913).abs() < 1e-9);
        assert!((values[1] - 0.1120115992).abs() < 1e-9);
    }

    #[test]
    fn bump_and_sine() {
        let bump = RbfTestFunctions::gaussian_bump(&mat![[1.0, 0.0], [0.0, 2.0f64]]);
        assert!((bump[0] - (-1f64).exp()).abs() < 1e-15);
        assert!(bump[1] == 0.0);

        let sine = RbfTestFunctions::sine_1d(&mat![[0.0], [std::f64::consts::FRAC_PI_2]]);
        assert!(sine == vec![0.0, 1.0]);
    }
}
