use super::*;

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

fn growth(_x: f64, y: f64) -> f64 {
    y
}

// y' = x + y, y(0) = 0.3
fn linear(x: f64, y: f64) -> f64 {
    x + y
}

fn linear_exact(x: f64) -> f64 {
    1.3 * x.exp() - x - 1.0
}

// y' = y + (1 + x) y², y(0) = 0.3
fn riccati(x: f64, y: f64) -> f64 {
    y + (1.0 + x) * y * y
}

fn riccati_exact(x: f64) -> f64 {
    let c = -1.0 / 0.3;
    -x.exp() / (c + x * x.exp())
}

fn end_error(points: &[crate::point::Point<f64>], exact: f64) -> f64 {
    (points.last().unwrap().y - exact).abs()
}

// ── Fixed-step integrators ──────────────────────────────────────────

#[test]
fn samples_on_uniform_grid() {
    let pts = runge_kutta4(growth, 0.5, 1.0, 0.25, 5);
    assert_eq!(pts.len(), 5);
    assert_eq!(pts[0].x, 0.5);
    assert_eq!(pts[0].y, 1.0);
    for (i, p) in pts.iter().enumerate() {
        assert_near(p.x, 0.5 + 0.25 * i as f64, 1e-15, "grid");
    }
}

#[test]
fn single_sample_is_initial_value() {
    let pts = euler_modified(growth, 0.0, 2.0, 0.1, 1);
    assert_eq!(pts, vec![crate::point::Point::new(0.0, 2.0)]);
}

#[test]
fn euler_step_is_heun() {
    // y' = y, h = 0.1: 1 + h + h²/2
    let y = euler_modified_step(0.0, 1.0, 0.1, growth);
    assert_near(y, 1.105, 1e-15, "heun step");
}

#[test]
fn euler_second_order() {
    let e = 1.0_f64.exp();
    let coarse = end_error(&euler_modified(growth, 0.0, 1.0, 1.0 / 16.0, 17), e);
    let fine = end_error(&euler_modified(growth, 0.0, 1.0, 1.0 / 32.0, 33), e);
    let ratio = coarse / fine;
    assert!(ratio > 3.5 && ratio < 4.5, "ratio {}", ratio);
}

#[test]
fn rk4_fourth_order() {
    let e = 1.0_f64.exp();
    let coarse = end_error(&runge_kutta4(growth, 0.0, 1.0, 1.0 / 8.0, 9), e);
    let fine = end_error(&runge_kutta4(growth, 0.0, 1.0, 1.0 / 16.0, 17), e);
    let ratio = coarse / fine;
    assert!(ratio > 14.0 && ratio < 18.0, "ratio {}", ratio);
}

#[test]
fn rk4_tracks_closed_form() {
    let pts = runge_kutta4(linear, 0.0, 0.3, 0.01, 101);
    for p in &pts {
        assert_near(p.y, linear_exact(p.x), 1e-9, "y' = x + y");
    }
}

#[test]
fn rk4_step_exact_for_cubic_rhs() {
    // y' = 4x³, exact over one step for Simpson-weighted stages
    let y = rk4_step(0.0, 0.0, 1.0, |x: f64, _y| 4.0 * x * x * x);
    assert_near(y, 1.0, 1e-14, "quartic");
}

// ── Milne ───────────────────────────────────────────────────────────

#[test]
fn milne_short_run_is_rk4() {
    let (m, stats) = milne(linear, 0.0, 0.3, 0.1, 5, 1e-6);
    let r = runge_kutta4(linear, 0.0, 0.3, 0.1, 5);
    assert_eq!(m, r);
    assert_eq!(stats, CorrectorStats::default());
}

#[test]
fn milne_bootstrap_matches_rk4() {
    let (m, _) = milne(linear, 0.0, 0.3, 0.1, 11, 1e-9);
    let r = runge_kutta4(linear, 0.0, 0.3, 0.1, 4);
    assert_eq!(&m[..4], &r[..]);
    assert_eq!(m.len(), 11);
}

#[test]
fn milne_accuracy() {
    let (pts, stats) = milne(linear, 0.0, 0.3, 0.01, 101, 1e-12);
    for p in &pts {
        assert_near(p.y, linear_exact(p.x), 1e-7, "milne y' = x + y");
    }
    assert!(stats.max_iterations <= MILNE_MAX_CORRECTIONS);
    assert_eq!(stats.unsettled_steps, 0);
}

#[test]
fn milne_corrector_cap() {
    // eps = 0 can never settle
    let (pts, stats) = milne(growth, 0.0, 1.0, 0.1, 8, 0.0);
    assert_eq!(pts.len(), 8);
    assert_eq!(stats.max_iterations, MILNE_MAX_CORRECTIONS);
    assert_eq!(stats.unsettled_steps, 4);
    assert_near(pts[7].y, 0.7_f64.exp(), 1e-4, "still accurate");
}

// ── Adaptive driver ─────────────────────────────────────────────────

#[test]
fn runge_factors() {
    assert_eq!(Method::EulerModified.runge_factor::<f64>(), 3.0);
    assert_eq!(Method::RungeKutta4.runge_factor::<f64>(), 15.0);
    assert_eq!(Method::Milne.runge_factor::<f64>(), 1.0);
}

#[test]
fn adaptive_defaults() {
    let s = AdaptiveSettings::<f64>::default();
    assert_eq!(s.precision, 0.1);
    assert_eq!(s.initial_intervals, 2);
    assert_eq!(s.max_doublings, 14);
}

#[test]
fn adaptive_all_methods_settle() {
    let settings = AdaptiveSettings::<f64>::default();
    for method in Method::ALL {
        let sol = solve_adaptive(riccati, 0.0, 1.0, 0.3, method, &settings);
        assert!(sol.reached_precision, "{:?}", method);
        assert!(sol.doublings >= 1);
        assert!(sol.corrector_iterations <= MILNE_MAX_CORRECTIONS);
        assert_near(sol.end_value(), riccati_exact(1.0), 0.35, "riccati endpoint");
    }
}

#[test]
fn adaptive_returns_finer_run() {
    let settings = AdaptiveSettings { precision: 1e-6, ..AdaptiveSettings::default() };
    let sol = solve_adaptive(linear, 0.0, 1.0, 0.3, Method::RungeKutta4, &settings);
    assert!(sol.reached_precision);
    let intervals = sol.points.len() - 1;
    assert_eq!(intervals, 2 << sol.doublings);
    assert_near(sol.step, 1.0 / intervals as f64, 1e-15, "step");
    assert!(sol.endpoint_change < 1.5e-5);
    assert_near(sol.end_value(), linear_exact(1.0), 1e-6, "endpoint");
}

#[test]
fn milne_starts_at_eight_intervals() {
    let settings = AdaptiveSettings { precision: 1.0, ..AdaptiveSettings::default() };
    let sol = solve_adaptive(linear, 0.0, 1.0, 0.3, Method::Milne, &settings);
    assert!(sol.reached_precision);
    assert_eq!(sol.doublings, 1);
    assert_eq!(sol.points.len(), 17);
    assert!(sol.corrector_iterations >= 1);
}

#[test]
fn adaptive_doubling_cap() {
    let settings = AdaptiveSettings {
        precision: 1e-14,
        initial_intervals: 2,
        max_doublings: 2,
    };
    let sol = solve_adaptive(growth, 0.0, 1.0, 1.0, Method::EulerModified, &settings);
    assert!(!sol.reached_precision);
    assert_eq!(sol.doublings, 2);
    assert_eq!(sol.points.len(), 9);
    assert!(sol.endpoint_change > 0.0);
}

#[test]
#[should_panic(expected = "empty interval")]
fn adaptive_rejects_reversed_interval() {
    solve_adaptive(growth, 1.0, 0.0, 1.0, Method::RungeKutta4, &AdaptiveSettings::<f64>::default());
}

#[test]
fn works_in_f32() {
    let sol = solve_adaptive(
        |x: f32, y: f32| x * y,
        0.0,
        1.0,
        1.0,
        Method::RungeKutta4,
        &AdaptiveSettings::<f32>::default(),
    );
    assert!(sol.reached_precision);
    assert!((sol.end_value() - 0.5_f32.exp()).abs() < 1e-2);
}
