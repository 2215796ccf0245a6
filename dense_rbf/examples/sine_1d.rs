use dense_rbf::{
    RbfInterpolant, RbfTestFunctions, linspace,
    interpolant_config::KernelType,
    progress::{ProgressMsg, closure_sink},
};
use faer::Mat;
use ndarray::Array1;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Nine samples of sin(x) over [0, 10]
    let x = linspace(0.0, 10.0, 9);
    let y = RbfTestFunctions::sine_1d(&Mat::from_fn(x.len(), 1, |i, _| x[i]));

    // Print construction progress from a listener thread
    let (sink, handle) = closure_sink(16, |msg| match msg {
        ProgressMsg::Message { message } => println!("{}", message),
        other => println!("{:?}", other),
    });

    let xi = Array1::from(linspace(0.0, 10.0, 100));
    let yi_true = RbfTestFunctions::sine_1d(&Mat::from_fn(xi.len(), 1, |i, _| xi[i]));

    for kernel in KernelType::ALL {
        let rbf = RbfInterpolant::builder(&[&x], &y)
            .kernel(*kernel)
            .progress_callback(sink.clone())
            .build()?;

        let yi = rbf.evaluate(&[xi.view()])?;
        let max_error = yi
            .iter()
            .zip(&yi_true)
            .fold(0.0f64, |acc, (v, t)| acc.max((v - t).abs()));

        println!("{:>22}: epsilon {:.4}, max error {:.4e}", kernel.name(), rbf.epsilon(), max_error);
    }

    drop(sink);
    let _ = handle.join();

    Ok(())
}
