use dense_rbf::{
    RbfInterpolant, RbfTestFunctions, create_evaluation_grid, generate_random_points,
    interpolant_config::KernelType,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Define input source points within [0, 1]^2
    let dim = 2usize;
    let num_points = 100usize;
    let points = generate_random_points(num_points, dim, Some(42));
    let x: Vec<f64> = points.col(0).iter().copied().collect();
    let y: Vec<f64> = points.col(1).iter().copied().collect();

    // Define some values at the source points using Franke's function
    let point_values = RbfTestFunctions::franke_2d(&points);

    // Setup and solve a thin plate spline with a linear trend
    let rbf = RbfInterpolant::builder(&[&x, &y], &point_values)
        .kernel(KernelType::ThinPlate)
        .degree(Some(1))
        .build()?;

    // Build a 2D grid of target points in [0, 1]^2 to evaluate the RBF at
    let n = 50;
    let target_points = create_evaluation_grid(&[(0.0, 1.0), (0.0, 1.0)], &[n, n]);

    // Evaluate the RBF at the target points and compare with the true surface
    let interpolated_values = rbf.evaluate_points(&target_points)?;
    let true_values = RbfTestFunctions::franke_2d(&target_points);

    let max_error = interpolated_values
        .iter()
        .zip(&true_values)
        .fold(0.0f64, |acc, (a, b)| acc.max((a - b).abs()));

    println!(
        "{} nodes, solved by {:?}, max grid error {:.4e}",
        rbf.num_nodes(),
        rbf.solve_method(),
        max_error
    );

    Ok(())
}
