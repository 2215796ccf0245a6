/////////////////////////////////////////////////////////////////////////////////////////////
//
// Assembles and solves the dense RBF system, with a least squares fallback for singular systems.
//
// Created on: 18 Oct 2026     Author: dense_rbf contributors
//
// Copyright (c) 2026, the dense_rbf contributors. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::{
    config::{SolveMethod, SolverParams},
    errors::{RbfError, Result},
    progress::{ProgressMsg, ProgressSink},
};
use faer::{Mat, MatRef, prelude::Solve};
use std::sync::Arc;

/// Weights and polynomial coefficients of a solved RBF system.
#[derive(Debug, Clone)]
pub struct SolvedSystem {
    /// RBF weights, `N × C`.
    pub weights: Mat<f64>,

    /// Polynomial coefficients, `m × C`, when a basis was supplied.
    pub poly_coefficients: Option<Mat<f64>>,

    /// Decomposition that produced the solution.
    pub method: SolveMethod,
}

/// Solves the (optionally augmented) RBF system
///
/// ```text
/// | K + sI   P | | w |   | y |
/// | P^T      0 | | c | = | 0 |
/// ```
///
/// for every column of `values`. Without a polynomial basis `m = 0` and the
/// system collapses to `(K + sI) w = y`.
///
/// The system is first solved with a partially pivoted LU factorisation. The
/// result is accepted if it is finite and its relative residual is within
/// `params.residual_tolerance`. Otherwise, unless disabled, the minimum norm
/// least squares solution is computed from an SVD with singular values below
/// `cutoff * sigma_max` discarded.
pub fn solve_rbf_system(
    kernel_matrix: &Mat<f64>,
    values: &Mat<f64>,
    smooth: f64,
    poly_matrix: Option<&Mat<f64>>,
    params: &SolverParams,
    progress: Option<&Arc<dyn ProgressSink>>,
) -> Result<SolvedSystem> {
    let n = kernel_matrix.nrows();
    let m = poly_matrix.map_or(0, |p| p.ncols());
    let num_cols = values.ncols();

    debug_assert_eq!(kernel_matrix.ncols(), n);
    debug_assert_eq!(values.nrows(), n);

    let mut lhs = Mat::<f64>::zeros(n + m, n + m);
    lhs.submatrix_mut(0, 0, n, n).copy_from(kernel_matrix.as_ref());
    (0..n).for_each(|i| lhs[(i, i)] += smooth);

    if let Some(p) = poly_matrix {
        lhs.submatrix_mut(0, n, n, m).copy_from(p.as_ref());
        lhs.submatrix_mut(n, 0, m, n).copy_from(p.transpose());
    }

    let mut rhs = Mat::<f64>::zeros(n + m, num_cols);
    rhs.submatrix_mut(0, 0, n, num_cols).copy_from(values.as_ref());

    let lu = lhs.partial_piv_lu();
    let lu_solution = lu.solve(&rhs);

    let relative_residual = match all_finite(lu_solution.as_ref()) {
        true => residual_norm(lhs.as_ref(), lu_solution.as_ref(), rhs.as_ref()),
        false => f64::INFINITY,
    };

    let (all_coefficients, method) = if relative_residual <= params.residual_tolerance {
        log::debug!(
            "LU solve accepted, relative residual {:.3e}",
            relative_residual
        );
        (lu_solution, SolveMethod::Lu)
    } else {
        if !params.least_squares_fallback {
            return Err(RbfError::NonFiniteSolution);
        }

        let cutoff = params.resolved_cutoff(n + m);
        let (solution, rank) = least_squares_solve(&lhs, &rhs, cutoff)?;

        log::warn!(
            "LU solve rejected (relative residual {:.3e}); solved by least squares with rank {} of {}",
            relative_residual,
            rank,
            n + m
        );

        if let Some(sink) = progress {
            sink.emit(ProgressMsg::LeastSquaresFallback {
                relative_residual,
                rank,
            });
        }

        (solution, SolveMethod::LeastSquares)
    };

    if !all_finite(all_coefficients.as_ref()) {
        return Err(RbfError::NonFiniteSolution);
    }

    let (weights, poly_coefficients) = match m {
        0 => (all_coefficients, None),
        _ => {
            let (rbf_part, poly_part) = all_coefficients.split_at_row(n);
            (rbf_part.to_owned(), Some(poly_part.to_owned()))
        }
    };

    Ok(SolvedSystem {
        weights,
        poly_coefficients,
        method,
    })
}

/// Minimum norm least squares solution of `lhs x = rhs`.
///
/// Returns the solution and the numerical rank used.
fn least_squares_solve(lhs: &Mat<f64>, rhs: &Mat<f64>, cutoff: f64) -> Result<(Mat<f64>, usize)> {
    let svd = lhs
        .svd()
        .map_err(|err| RbfError::Decomposition(format!("{:?}", err)))?;

    let u = svd.U();
    let v = svd.V();
    let s: Vec<f64> = svd.S().column_vector().iter().cloned().collect();

    let sigma_max = s.iter().fold(0.0f64, |acc, x| acc.max(*x));
    let threshold = cutoff * sigma_max;

    let rank = s.iter().filter(|x| **x > threshold).count();

    // x = V_r diag(1 / s_r) U_r^T b
    let mut projected = u.subcols(0, rank).transpose() * rhs.as_ref();
    for i in 0..rank {
        let inv = 1.0 / s[i];
        projected.row_mut(i).iter_mut().for_each(|x| *x *= inv);
    }

    let solution = v.subcols(0, rank) * projected.as_ref();

    Ok((solution, rank))
}

/// `||Ax - b|| / (||A|| ||x|| + ||b||)` in the Frobenius norm.
fn residual_norm(a: MatRef<'_, f64>, x: MatRef<'_, f64>, b: MatRef<'_, f64>) -> f64 {
    let residual = a * x - b;
    let denominator = a.norm_l2() * x.norm_l2() + b.norm_l2();

    match denominator > 0.0 {
        true => residual.norm_l2() / denominator,
        false => 0.0,
    }
}

fn all_finite(m: MatRef<'_, f64>) -> bool {
    (0..m.ncols()).all(|j| m.col(j).iter().all(|v| v.is_finite()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use equator::assert;
    use faer::{mat, utils::approx::*};

    #[test]
    fn pure_system() {
        let k = mat![[2.0, 1.0], [1.0, 3.0f64]];
        let y = mat![[3.0], [4.0f64]];

        let solved = solve_rbf_system(&k, &y, 0.0, None, &SolverParams::default(), None).unwrap();

        assert!(solved.method == SolveMethod::Lu);
        assert!(solved.poly_coefficients.is_none());
        let expected = mat![[1.0], [1.0f64]];
        let approx_eq = CwiseMat(ApproxEq::eps() * 1e3);
        assert!(&solved.weights ~ &expected);
    }

    #[test]
    fn smoothing_is_added_to_the_diagonal() {
        let k = Mat::<f64>::identity(3, 3);
        let y = mat![[2.0], [4.0], [6.0f64]];

        let solved = solve_rbf_system(&k, &y, 1.0, None, &SolverParams::default(), None).unwrap();

        let expected = mat![[1.0], [2.0], [3.0f64]];
        let approx_eq = CwiseMat(ApproxEq::eps() * 1e3);
        assert!(&solved.weights ~ &expected);
    }

    #[test]
    fn augmented_system_reproduces_linear_data() {
        // Linear kernel on three nodes with a degree one basis.
        let x = [0.0f64, 1.0, 3.0];
        let k = Mat::from_fn(3, 3, |i, j| (x[i] - x[j]).abs());
        let p = Mat::from_fn(3, 2, |i, j| match j {
            0 => 1.0,
            _ => x[i],
        });
        let y = Mat::from_fn(3, 1, |i, _| 2.0 + 0.5 * x[i]);

        let solved =
            solve_rbf_system(&k, &y, 0.0, Some(&p), &SolverParams::default(), None).unwrap();

        let coeffs = solved.poly_coefficients.unwrap();
        assert!(coeffs.shape() == (2, 1));
        assert!((coeffs[(0, 0)] - 2.0).abs() < 1e-12);
        assert!((coeffs[(1, 0)] - 0.5).abs() < 1e-12);
        assert!(solved.weights.col(0).iter().all(|w| w.abs() < 1e-12));
    }

    #[test]
    fn weights_are_orthogonal_to_the_basis() {
        let x = [0.0f64, 0.5, 1.5, 2.0, 4.0];
        let k = Mat::from_fn(5, 5, |i, j| (x[i] - x[j]).abs().powi(3));
        let p = Mat::from_fn(5, 2, |i, j| match j {
            0 => 1.0,
            _ => x[i],
        });
        let y = Mat::from_fn(5, 2, |i, j| (x[i] + j as f64).sin());

        let solved =
            solve_rbf_system(&k, &y, 0.0, Some(&p), &SolverParams::default(), None).unwrap();

        let pt_w = p.transpose() * &solved.weights;
        assert!((0..2).all(|j| pt_w.col(j).iter().all(|v| v.abs() < 1e-10)));
    }

    #[test]
    fn singular_system_falls_back_to_least_squares() {
        let k = mat![[1.0, 1.0, 0.5], [1.0, 1.0, 0.5], [0.5, 0.5, 2.0f64]];
        let y = mat![[2.0], [2.0], [1.0f64]];

        let solved = solve_rbf_system(&k, &y, 0.0, None, &SolverParams::default(), None).unwrap();

        assert!(solved.method == SolveMethod::LeastSquares);

        let fitted = &k * &solved.weights;
        assert!((0..3).all(|i| (fitted[(i, 0)] - y[(i, 0)]).abs() < 1e-12));
    }

    #[test]
    fn least_squares_is_minimum_norm() {
        let k = mat![[1.0, 1.0], [1.0, 1.0f64]];
        let y = mat![[2.0], [2.0f64]];
        let params = SolverParams::builder().singular_value_cutoff(1e-10).build();

        let solved = solve_rbf_system(&k, &y, 0.0, None, &params, None).unwrap();

        assert!(solved.method == SolveMethod::LeastSquares);
        assert!((solved.weights[(0, 0)] - 1.0).abs() < 1e-12);
        assert!((solved.weights[(1, 0)] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn fallback_reports_progress() {
        let received = Arc::new(std::sync::Mutex::new(Vec::new()));
        let store = received.clone();
        let (sink, handle) =
            crate::progress::closure_sink(8, move |msg| store.lock().unwrap().push(msg));

        let k = mat![[1.0, 1.0], [1.0, 1.0f64]];
        let y = mat![[2.0], [2.0f64]];
        solve_rbf_system(&k, &y, 0.0, None, &SolverParams::default(), Some(&sink)).unwrap();

        drop(sink);
        handle.join().unwrap();

        let received = received.lock().unwrap();
        assert!(received.len() == 1);
        assert!(matches!(received[0], ProgressMsg::LeastSquaresFallback { .. }));
    }

    #[test]
    fn disabled_fallback_is_an_error() {
        let k = mat![[1.0, 1.0], [1.0, 1.0f64]];
        let y = mat![[2.0], [2.0f64]];
        let params = SolverParams::builder().least_squares_fallback(false).build();

        let err = solve_rbf_system(&k, &y, 0.0, None, &params, None).unwrap_err();
        assert!(err == RbfError::NonFiniteSolution);
    }
}
