use dense_rbf::{RbfInterpolant, generate_random_points, interpolant_config::KernelType};
use ndarray::Array2;
use num_complex::Complex64;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 50 random nodes in [-2, 2]^2
    let points = generate_random_points(50, 2, Some(7));
    let x: Vec<f64> = points.col(0).iter().map(|v| 4.0 * v - 2.0).collect();
    let y: Vec<f64> = points.col(1).iter().map(|v| 4.0 * v - 2.0).collect();

    // Complex values z = x exp(-x^2 - i y^2)
    let values: Vec<Complex64> = x
        .iter()
        .zip(&y)
        .map(|(&x, &y)| x * Complex64::new(-x * x, -y * y).exp())
        .collect();

    let rbf = RbfInterpolant::builder(&[&x, &y], &values)
        .kernel(KernelType::Gaussian)
        .epsilon(2.0)
        .build()?;

    // Evaluate on a 21 x 21 grid, keeping the grid shape
    let gx = Array2::from_shape_fn((21, 21), |(_, j)| -2.0 + 0.2 * j as f64);
    let gy = Array2::from_shape_fn((21, 21), |(i, _)| -2.0 + 0.2 * i as f64);
    let zi = rbf.evaluate(&[gx.view(), gy.view()])?;

    println!("grid shape {:?}, value at origin {}", zi.shape(), zi[[10, 10]]);

    Ok(())
}
