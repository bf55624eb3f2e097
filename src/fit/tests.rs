use super::*;
use crate::point::Point;

fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{}: {} vs {} (diff {})",
        msg,
        a,
        b,
        (a - b).abs()
    );
}

fn sample(xs: impl IntoIterator<Item = f64>, f: impl Fn(f64) -> f64) -> Vec<Point<f64>> {
    xs.into_iter().map(|x| Point::new(x, f(x))).collect()
}

#[test]
fn linear_exact() {
    let pts = sample((0..5).map(f64::from), |x| 2.0 * x + 1.0);
    let fit = fit_model(&pts, Model::Linear).unwrap();
    assert_near(fit.coefficients[0], 2.0, 1e-12, "slope");
    assert_near(fit.coefficients[1], 1.0, 1e-12, "intercept");
    assert_near(fit.deviation, 0.0, 1e-12, "deviation");
    assert_near(fit.correlation.unwrap(), 1.0, 1e-12, "correlation");
    assert_eq!(fit.terms().len(), 2);
}

#[test]
fn linear_noisy_deviation() {
    // residuals are ±0.5 around y = x
    let pts = vec![
        Point::new(0.0, 0.5),
        Point::new(1.0, 0.5),
        Point::new(2.0, 2.5),
        Point::new(3.0, 2.5),
    ];
    let fit = fit_model(&pts, Model::Linear).unwrap();
    let r = fit.correlation.unwrap();
    assert!(r > 0.8 && r < 1.0);
    let manual = deviation(&pts, |x| fit.eval(x));
    assert_eq!(fit.deviation, manual);
    assert!(fit.deviation > 0.0);
}

#[test]
fn quadratic_and_cubic_exact() {
    let quad = sample((-3..=3).map(f64::from), |x| 1.0 - x + 0.5 * x * x);
    let q = fit_model(&quad, Model::Quadratic).unwrap();
    for (c, e) in q.terms().iter().zip([1.0, -1.0, 0.5]) {
        assert_near(*c, e, 1e-10, "quadratic coefficient");
    }
    assert!(q.correlation.is_none());

    let cubic = sample((0..6).map(f64::from), |x| 1.0 + 2.0 * x - x * x + 0.5 * x * x * x);
    let c = fit_model(&cubic, Model::Cubic).unwrap();
    for (c, e) in c.terms().iter().zip([1.0, 2.0, -1.0, 0.5]) {
        assert_near(*c, e, 1e-8, "cubic coefficient");
    }
    assert_near(c.eval(2.5), 1.0 + 5.0 - 6.25 + 0.5 * 15.625, 1e-8, "cubic eval");
}

#[test]
fn transformed_models_exact() {
    let xs = || (1..=6).map(f64::from);

    let log = fit_model(&sample(xs(), |x| 3.0 * x.ln() - 1.0), Model::Logarithmic).unwrap();
    assert_near(log.coefficients[0], 3.0, 1e-10, "log a");
    assert_near(log.coefficients[1], -1.0, 1e-10, "log b");

    let pow = fit_model(&sample(xs(), |x| 0.5 * x.powf(1.5)), Model::Power).unwrap();
    assert_near(pow.coefficients[0], 0.5, 1e-10, "power a");
    assert_near(pow.coefficients[1], 1.5, 1e-10, "power b");
    assert_near(pow.eval(4.0), 4.0, 1e-9, "power eval");

    let exp = fit_model(&sample(xs(), |x| 3.0 * (-0.2 * x).exp()), Model::Exponential).unwrap();
    assert_near(exp.coefficients[0], 3.0, 1e-10, "exp a");
    assert_near(exp.coefficients[1], -0.2, 1e-10, "exp b");
}

#[test]
fn domain_errors() {
    let pts = sample((-2..=2).map(f64::from), |x| x);
    assert_eq!(
        fit_model(&pts, Model::Exponential).unwrap_err(),
        FitError::Domain(Model::Exponential)
    );
    assert_eq!(
        fit_model(&pts, Model::Logarithmic).unwrap_err(),
        FitError::Domain(Model::Logarithmic)
    );
    assert_eq!(
        fit_model(&pts, Model::Power).unwrap_err(),
        FitError::Domain(Model::Power)
    );
}

#[test]
fn coincident_x_is_degenerate() {
    let pts = vec![Point::new(1.0, 2.0), Point::new(1.0, 3.0)];
    assert_eq!(fit_model(&pts, Model::Linear).unwrap_err(), FitError::Degenerate);
    assert_eq!(
        fit(&pts, ModelSelector::BestFit).unwrap_err(),
        FitError::Degenerate
    );
}

#[test]
fn too_few_points_for_cubic() {
    let pts = sample([-1.0, 0.0, 1.0], |x| x * x);
    assert_eq!(fit_model(&pts, Model::Cubic).unwrap_err(), FitError::Degenerate);
}

#[test]
fn best_fit_has_lowest_deviation() {
    let pts = vec![
        Point::new(0.5, 1.1),
        Point::new(1.0, 1.9),
        Point::new(1.5, 2.4),
        Point::new(2.0, 3.2),
        Point::new(3.0, 3.9),
        Point::new(4.0, 4.1),
    ];
    let best = fit(&pts, ModelSelector::BestFit).unwrap();
    let lowest = Model::ALL
        .iter()
        .filter_map(|&m| fit_model(&pts, m).ok())
        .map(|f| f.deviation)
        .fold(f64::INFINITY, f64::min);
    assert_eq!(best.deviation, lowest);
}

#[test]
fn best_fit_skips_out_of_domain_models() {
    let pts = sample((-3..=3).map(f64::from), |x| x * x - 2.0);
    let best = fit(&pts, ModelSelector::BestFit).unwrap();
    assert!(matches!(best.model, Model::Quadratic | Model::Cubic));
    assert!(best.deviation < 1e-9);
}

#[test]
fn fixed_selector() {
    let pts = sample((1..=4).map(f64::from), |x| x);
    let f = fit(&pts, ModelSelector::Fixed(Model::Power)).unwrap();
    assert_eq!(f.model, Model::Power);
}

#[test]
fn correlation_constant_y_is_none() {
    let pts = sample((0..3).map(f64::from), |_| 4.0);
    assert!(correlation(&pts).is_none());
    let lin = fit_model(&pts, Model::Linear).unwrap();
    assert!(lin.correlation.is_none());
    assert_near(lin.coefficients[1], 4.0, 1e-12, "constant intercept");
}

#[test]
fn domain_min_per_model() {
    assert_eq!(Model::Power.domain_min::<f64>(), 0.0);
    assert_eq!(Model::Linear.domain_min::<f64>(), f64::NEG_INFINITY);
}

#[test]
#[should_panic(expected = "empty")]
fn empty_points_panic() {
    let pts: Vec<Point<f64>> = Vec::new();
    let _ = fit_model(&pts, Model::Linear);
}
