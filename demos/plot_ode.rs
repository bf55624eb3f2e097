// Riccati equation y' = y + (1 + x) y², y(0) = 0.3 on [0, 1].
// Prints JSON with the trajectory of each method at precision 1e-3 and the
// closed-form solution on the finest grid:
//   {"x_exact":[...], "y_exact":[...],
//    "euler":{"x":[...],"y":[...]}, "rk4":{...}, "milne":{...}}
// Solver progress goes to stderr.

use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use numlab::catalog::Equation;
use numlab::ode::{solve_adaptive, AdaptiveSettings, Method, OdeSolution};

fn fmt_arr(v: impl Iterator<Item = f64>) -> String {
    let inner: Vec<String> = v.map(|x| format!("{x:.6}")).collect();
    format!("[{}]", inner.join(","))
}

fn fmt_solution(sol: &OdeSolution<f64>) -> String {
    format!(
        "{{\"x\":{},\"y\":{},\"reached\":{}}}",
        fmt_arr(sol.points.iter().map(|p| p.x)),
        fmt_arr(sol.points.iter().map(|p| p.y)),
        sol.reached_precision
    )
}

fn main() {
    TermLogger::init(LevelFilter::Debug, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)
        .expect("logger already set");

    let eq = Equation::Riccati;
    let (low, high, y0) = (0.0, 1.0, 0.3);
    let settings = AdaptiveSettings {
        precision: 1e-3,
        ..AdaptiveSettings::default()
    };

    let [euler, rk4, milne] = [Method::EulerModified, Method::RungeKutta4, Method::Milne]
        .map(|m| solve_adaptive(|x, y| eq.slope(x, y), low, high, y0, m, &settings));

    const N: usize = 200;
    let xs: Vec<f64> = (0..N).map(|i| low + (high - low) * i as f64 / (N - 1) as f64).collect();

    println!(
        "{{\"x_exact\":{},\"y_exact\":{},\"euler\":{},\"rk4\":{},\"milne\":{}}}",
        fmt_arr(xs.iter().copied()),
        fmt_arr(xs.iter().map(|&x| eq.exact(low, y0, x))),
        fmt_solution(&euler),
        fmt_solution(&rk4),
        fmt_solution(&milne)
    );
}
