/////////////////////////////////////////////////////////////////////////////////////////////
//
// Evaluates the monomial basis of the polynomial term fitted alongside the RBF.
//
// Created on: 18 Oct 2026     Author: dense_rbf contributors
//
// Copyright (c) 2026, the dense_rbf contributors. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::common;
use faer::{Mat, unzip, zip};

/// Number of monomials of total degree `<= degree` in `dimensions` variables,
/// `C(dimensions + degree, degree)`.
pub fn basis_size(dimensions: usize, degree: usize) -> usize {
    // Multiplicative form of the binomial; every partial product is itself a
    // binomial coefficient so the division is exact.
    (1..=degree).fold(1usize, |acc, k| acc * (dimensions + k) / k)
}

/// Enumerates the monomials of total degree `<= degree` as exponent vectors.
///
/// Monomials are graded by total degree. Within one degree they follow the
/// non-decreasing variable index tuples, so in two dimensions with degree 2
/// the order is `1, x, y, x^2, x*y, y^2`.
pub fn monomial_exponents(dimensions: usize, degree: usize) -> Vec<Vec<u32>> {
    let mut exponents = Vec::with_capacity(basis_size(dimensions, degree));
    let mut tuple: Vec<usize> = Vec::with_capacity(degree);

    for total in 0..=degree {
        push_index_tuples(dimensions, total, 0, &mut tuple, &mut exponents);
    }

    exponents
}

fn push_index_tuples(
    dimensions: usize,
    remaining: usize,
    first_index: usize,
    tuple: &mut Vec<usize>,
    out: &mut Vec<Vec<u32>>,
) {
    if remaining == 0 {
        let mut exps = vec![0u32; dimensions];
        tuple.iter().for_each(|&i| exps[i] += 1);
        out.push(exps);
        return;
    }

    for i in first_index..dimensions {
        tuple.push(i);
        push_index_tuples(dimensions, remaining - 1, i, tuple, out);
        tuple.pop();
    }
}

/// Evaluates every monomial in `exponents` at every row of `points`.
///
/// The points are first mapped by `(x - translation_factor) / scale_factor`,
/// which for the node Chebyshev cube factors puts the nodes in `[-1, 1]^d`.
/// Returns an `n × exponents.len()` matrix.
pub fn evaluate_monomials(
    points: &Mat<f64>,
    exponents: &[Vec<u32>],
    translation_factor: &[f64],
    scale_factor: &[f64],
) -> Mat<f64> {
    let mut scaled_points = points.clone();
    common::scale_points(&mut scaled_points, translation_factor, scale_factor);

    let (n, d) = scaled_points.shape();
    let mut monomials = Mat::<f64>::zeros(n, exponents.len());

    for (k, exps) in exponents.iter().enumerate() {
        let mut dst = monomials.col_mut(k);
        dst.fill(1.0);

        for (axis, &e) in exps.iter().enumerate().take(d) {
            if e == 0 {
                continue;
            }
            let x = scaled_points.col(axis);
            zip!(&mut dst, &x).for_each(|unzip!(dst, x)| {
                *dst *= x.powi(e as i32);
            });
        }
    }

    monomials
}

/// Polynomial basis of a fitted interpolant.
///
/// Holds the monomial exponents and the node scaling, both fixed at
/// construction and reused for every evaluation.
#[derive(Debug, Clone)]
pub(crate) struct PolynomialBasis {
    exponents: Vec<Vec<u32>>,
    translation_factor: Vec<f64>,
    scale_factor: Vec<f64>,
}

impl PolynomialBasis {
    pub(crate) fn new(nodes: &Mat<f64>, degree: usize) -> Self {
        let (translation_factor, scale_factor) = common::get_cheb_cube_scaling_factors(nodes);

        Self {
            exponents: monomial_exponents(nodes.ncols(), degree),
            translation_factor,
            scale_factor,
        }
    }

    pub(crate) fn size(&self) -> usize {
        self.exponents.len()
    }

    pub(crate) fn evaluate(&self, points: &Mat<f64>) -> Mat<f64> {
        evaluate_monomials(
            points,
            &self.exponents,
            &self.translation_factor,
            &self.scale_factor,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use equator::assert;
    use faer::{mat, utils::approx::*, Mat};

    fn run_case(points: Mat<f64>, degree: usize, expected: Mat<f64>) {
        let (n, d) = points.shape();
        assert_eq!(n, expected.nrows(), "row mismatch in test setup");

        let exponents = monomial_exponents(d, degree);
        assert!(exponents.len() == expected.ncols());

        let translation_factor = vec![0.0; d];
        let scale_factor = vec![1.0; d];

        let monomials =
            evaluate_monomials(&points, &exponents, &translation_factor, &scale_factor);

        let approx_eq = CwiseMat(ApproxEq::eps() * 128.0 * (2 as f64));
        assert!(&monomials ~ &expected);
    }

    #[test]
    fn basis_sizes() {
        assert!(basis_size(1, 0) == 1);
        assert!(basis_size(1, 3) == 4);
        assert!(basis_size(2, 1) == 3);
        assert!(basis_size(2, 2) == 6);
        assert!(basis_size(3, 2) == 10);
        assert!(basis_size(3, 3) == 20);
        assert!(basis_size(5, 4) == 126);
    }

    #[test]
    fn exponent_order_is_graded() {
        let exps = monomial_exponents(2, 2);
        let expected: Vec<Vec<u32>> =
            vec![vec![0, 0], vec![1, 0], vec![0, 1], vec![2, 0], vec![1, 1], vec![0, 2]];
        assert!(exps == expected);
    }

    #[test]
    fn exponent_counts_match_basis_size() {
        for d in 1..=4 {
            for deg in 0..=4 {
                let exps = monomial_exponents(d, deg);
                assert!(exps.len() == basis_size(d, deg));
                assert!(exps.iter().all(|e| e.iter().sum::<u32>() as usize <= deg));
            }
        }
    }

    #[test]
    fn monomials_constant_1d() {
        let points = mat![[1.0], [2.0]];
        // Basis: [1]
        let expected = mat![[1.0], [1.0]];
        run_case(points, 0, expected);
    }

    #[test]
    fn monomials_linear_1d() {
        let points = mat![[1.0], [2.0]];
        // Basis: [1, x]
        let expected = mat![[1.0, 1.0], [1.0, 2.0]];
        run_case(points, 1, expected);
    }

    #[test]
    fn monomials_cubic_1d() {
        let points = mat![[1.0], [2.0]];
        // Basis: [1, x, x^2, x^3]
        let expected = mat![[1.0, 1.0, 1.0, 1.0], [1.0, 2.0, 4.0, 8.0]];
        run_case(points, 3, expected);
    }

    #[test]
    fn monomials_quadratic_2d() {
        let points = mat![[1.0, 2.0], [3.0, 4.0]];
        // Basis: [1, x, y, x^2, x*y, y^2]
        let expected = mat![
            [1.0, 1.0, 2.0,  1.0,  2.0,  4.0],
            [1.0, 3.0, 4.0,  9.0, 12.0, 16.0],
        ];
        run_case(points, 2, expected);
    }

    #[test]
    fn monomials_cubic_2d() {
        let points = mat![[2.0, 3.0]];
        // Basis: [1, x, y, x^2, xy, y^2, x^3, x^2y, xy^2, y^3]
        let expected = mat![[1.0, 2.0, 3.0, 4.0, 6.0, 9.0, 8.0, 12.0, 18.0, 27.0]];
        run_case(points, 3, expected);
    }

    #[test]
    fn monomials_quadratic_3d() {
        let points = mat![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        // Basis: [1, x, y, z, x^2, x*y, x*z, y^2, y*z, z^2]
        let expected = mat![
            [1.0, 1.0, 2.0, 3.0,  1.0,  2.0,  3.0,  4.0,  6.0,  9.0],
            [1.0, 4.0, 5.0, 6.0, 16.0, 20.0, 24.0, 25.0, 30.0, 36.0],
        ];
        run_case(points, 2, expected);
    }

    #[test]
    fn basis_scales_nodes_into_unit_cube() {
        let nodes = mat![[10.0, 5.0], [20.0, 5.0], [15.0, 5.0f64]];
        let basis = PolynomialBasis::new(&nodes, 1);
        let p = basis.evaluate(&nodes);

        assert!(basis.size() == 3);
        assert!(p.col(1).iter().copied().collect::<Vec<_>>() == vec![-1.0, 1.0, 0.0]);
        // Constant axis is translated but not scaled.
        assert!(p.col(2).iter().all(|v| *v == 0.0));
    }
}
