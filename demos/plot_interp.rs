// Interpolation comparison: exp(-x²) - 0.5 with 7 evenly spaced nodes on [-2, 2].
// Prints JSON with node points and 200 evaluation points:
//   {"kx":[...], "ky":[...], "x":[...], "y_true":[...],
//    "y_lagrange":[...], "y_newton":[...]}

use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use numlab::catalog::Function;
use numlab::interp::{EvenlySpaced, LagrangePolynomial, NewtonInterp};

fn fmt_arr(v: &[f64]) -> String {
    let inner: Vec<String> = v.iter().map(|x| format!("{x:.6}")).collect();
    format!("[{}]", inner.join(","))
}

fn main() {
    TermLogger::init(LevelFilter::Info, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)
        .expect("logger already set");

    let f = Function::Gaussian;
    let (low, high) = (-2.0, 2.0);
    let samples = EvenlySpaced::sample(|x| f.eval(x), low, high, 7);
    let (kx, ky): (Vec<f64>, Vec<f64>) = samples.nodes().map(|p| (p.x, p.y)).unzip();

    let lagrange = LagrangePolynomial::from_xy(&kx, &ky).expect("distinct nodes");
    let newton = NewtonInterp::new(&samples).expect("at least two nodes");
    log::info!("{} nodes, step {}", kx.len(), newton.step());

    const N: usize = 200;
    let x_vals: Vec<f64> = (0..N).map(|i| low + (high - low) * i as f64 / (N - 1) as f64).collect();
    let y_true: Vec<f64> = x_vals.iter().map(|&x| f.eval(x)).collect();
    let y_lagrange: Vec<f64> = x_vals.iter().map(|&x| lagrange.eval(x)).collect();
    let y_newton: Vec<f64> = x_vals.iter().map(|&x| newton.eval(x)).collect();

    println!(
        "{{\"kx\":{},\"ky\":{},\"x\":{},\"y_true\":{},\"y_lagrange\":{},\"y_newton\":{}}}",
        fmt_arr(&kx),
        fmt_arr(&ky),
        fmt_arr(&x_vals),
        fmt_arr(&y_true),
        fmt_arr(&y_lagrange),
        fmt_arr(&y_newton)
    );
}
