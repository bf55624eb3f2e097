use approx::{assert_abs_diff_eq, assert_relative_eq};
use std::io::Write;

use numlab::catalog::{Equation, Function};
use numlab::fit::{fit, Model, ModelSelector};
use numlab::interp::{EvenlySpaced, LagrangePolynomial, NewtonInterp};
use numlab::io::load_points;
use numlab::ode::{self, runge_kutta4, solve_adaptive};
use numlab::point::normalize_points;
use numlab::quad::{self, integrate};
use numlab::roots::{chords, newton, RootSettings};

// ── Quadrature against antiderivatives ───────────────────────────────

#[test]
fn every_rule_converges_on_catalog() {
    let settings = quad::AdaptiveSettings {
        precision: 3e-4,
        ..quad::AdaptiveSettings::default()
    };
    for f in Function::INTEGRANDS {
        let exact = f.exact_integral(-0.5, 1.3).unwrap();
        for method in quad::Method::ALL {
            let r = integrate(|x| f.eval(x), -0.5, 1.3, method, &settings);
            assert!(r.converged, "{} / {:?}", f, method);
            assert_abs_diff_eq!(r.value, exact, epsilon = 1e-3);
        }
    }
}

#[test]
fn simpson_needs_fewer_subdivisions() {
    let settings = quad::AdaptiveSettings {
        precision: 1e-8,
        ..quad::AdaptiveSettings::default()
    };
    let f = Function::SinExp;
    let trap = integrate(|x| f.eval(x), 0.0, 1.0, quad::Method::Trapezoid, &settings);
    let simp = integrate(|x| f.eval(x), 0.0, 1.0, quad::Method::Simpson, &settings);
    assert!(simp.subdivisions < trap.subdivisions);
}

// ── Roots ────────────────────────────────────────────────────────────

#[test]
fn chords_and_newton_agree_on_sin_log() {
    let f = Function::SinLog;
    let settings = RootSettings {
        precision: 1e-10,
        max_iter: 100,
    };
    let a = chords(|x| f.eval(x), 0.1, 1.0, &settings).root.unwrap();
    let b = newton(|x| f.eval(x), |x| f.derivative(x), 0.5, &settings).root.unwrap();
    assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-8);
}

// ── Fitting from a point file ────────────────────────────────────────

#[test]
fn fit_loaded_points() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for i in 1..=8 {
        let x = i as f64 * 0.5;
        writeln!(file, "{} {}", x, 1.5 * x.powf(1.7)).unwrap();
    }
    // duplicate line, dropped by normalization
    writeln!(file, "0.5 {}", 1.5 * 0.5_f64.powf(1.7)).unwrap();

    let mut pts = load_points(file.path()).unwrap();
    assert_eq!(pts.len(), 9);
    normalize_points(&mut pts);
    assert_eq!(pts.len(), 8);

    let best = fit(&pts, ModelSelector::BestFit).unwrap();
    assert_eq!(best.model, Model::Power);
    assert_relative_eq!(best.terms()[0], 1.5, max_relative = 1e-9);
    assert_relative_eq!(best.terms()[1], 1.7, max_relative = 1e-9);
    assert!(best.deviation < 1e-9);
}

// ── Interpolation ────────────────────────────────────────────────────

#[test]
fn newton_and_lagrange_agree_at_the_ends() {
    let f = Function::Gaussian;
    let samples = EvenlySpaced::sample(|x| f.eval(x), -1.0, 1.0, 7);
    let newton = NewtonInterp::new(&samples).unwrap();
    let lagrange = LagrangePolynomial::new(samples.nodes().collect()).unwrap();
    // the full table is only used from the first and last node
    for k in 0..=16 {
        let x = -1.0 + 0.02 * k as f64;
        assert_abs_diff_eq!(newton.eval(x), lagrange.eval(x), epsilon = 1e-10);
        assert_abs_diff_eq!(newton.eval(-x), lagrange.eval(-x), epsilon = 1e-10);
    }
}

#[test]
fn reciprocal_interpolation_error_shrinks() {
    let f = Function::Reciprocal;
    let error = |n: usize| {
        let samples = EvenlySpaced::sample(|x| f.eval(x), 1.0, 2.0, n);
        let p = NewtonInterp::new(&samples).unwrap();
        (p.eval(1.37) - f.eval(1.37)).abs()
    };
    assert!(error(6) < error(3));
    assert!(error(6) < 1e-3);
}

// ── ODEs ─────────────────────────────────────────────────────────────

#[test]
fn rk4_error_ratio_near_sixteen() {
    let err = |n: usize| {
        let pts = runge_kutta4(|_x, y: f64| y, 0.0, 1.0, 1.0 / n as f64, n + 1);
        (pts[n].y - 1.0_f64.exp()).abs()
    };
    let ratio = err(10) / err(20);
    assert_relative_eq!(ratio, 16.0, max_relative = 0.1);
}

#[test]
fn catalog_equations_settle_for_every_method() {
    let settings = ode::AdaptiveSettings {
        precision: 1e-4,
        ..ode::AdaptiveSettings::default()
    };
    for eq in Equation::ALL {
        let exact = eq.exact(0.0, 0.3, 1.0);
        for method in ode::Method::ALL {
            let sol = solve_adaptive(|x, y| eq.slope(x, y), 0.0, 1.0, 0.3, method, &settings);
            assert!(sol.reached_precision, "{} / {:?}", eq, method);
            assert!(sol.corrector_iterations <= ode::MILNE_MAX_CORRECTIONS);
            assert_relative_eq!(sol.end_value(), exact, max_relative = 1e-3);
        }
    }
}
