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

fn quadratic(x: f64) -> f64 {
    x * x - 0.9
}

fn trig_log(x: f64) -> f64 {
    x.sin() * (2.0 * x + 2.0).ln() - 0.5
}

// ═══════════════════════════════════════════════════════════════════
// All scalar methods
// ═══════════════════════════════════════════════════════════════════

#[test]
fn square_roots_on_wide_bracket() {
    // x² - c on [0, c + 1]; fixed point starts at the top with
    // λ = -1 / 2(c + 1), so -1 < λ f'(√c) < 0
    let settings = RootSettings {
        precision: 1e-6,
        max_iter: 200,
    };
    for c in [0.25, 2.0, 9.0, 50.0] {
        let f = |x: f64| x * x - c;
        let high = c + 1.0;
        let expected = c.sqrt();

        let s = chords(f, 0.0, high, &settings);
        assert!(s.is_converged(), "chords c = {}", c);
        assert_near(s.root.unwrap().x, expected, 1e-5, "chords");

        let s = newton(f, |x| 2.0 * x, high, &settings);
        assert!(s.is_converged(), "newton c = {}", c);
        assert_near(s.root.unwrap().x, expected, 1e-5, "newton");

        let lambda = Relaxation::new(-0.5 / high);
        let s = fixed_point(f, high, lambda, &settings);
        assert!(s.is_converged(), "fixed point c = {}", c);
        assert_near(s.root.unwrap().x, expected, 1e-5, "fixed point");
    }
}

// ═══════════════════════════════════════════════════════════════════
// Chords
// ═══════════════════════════════════════════════════════════════════

#[test]
fn chords_quadratic() {
    let s = chords(quadratic, 0.1, 1.0, &RootSettings::default());
    assert_eq!(s.status, RootStatus::Converged);
    let r = s.root.unwrap();
    assert!(r.fx.abs() < 1e-3);
    assert_eq!(r.iterations, s.trace.len());
}

#[test]
fn chords_trace_keeps_sign_change() {
    let s = chords(trig_log, 0.1, 1.0, &RootSettings { precision: 1e-10, max_iter: 100 });
    assert!(s.is_converged());
    for seg in &s.trace {
        assert!(seg.a.x < seg.b.x);
        assert!((seg.a.y >= 0.0) != (seg.b.y >= 0.0));
    }
}

#[test]
fn chords_not_bracketed() {
    let s = chords(|x: f64| x * x + 1.0, -1.0, 1.0, &RootSettings::default());
    assert_eq!(s.status, RootStatus::NotBracketed);
    assert!(s.root.is_none());
    assert!(s.trace.is_empty());
}

#[test]
fn chords_iteration_limit() {
    let s = chords(quadratic, 0.1, 1.0, &RootSettings { precision: 1e-3, max_iter: 1 });
    assert_eq!(s.status, RootStatus::IterationLimit);
    assert_eq!(s.trace.len(), 1);
}

#[test]
#[should_panic(expected = "low < high")]
fn chords_inverted_interval() {
    chords(quadratic, 1.0, 0.1, &RootSettings::default());
}

// ═══════════════════════════════════════════════════════════════════
// Newton
// ═══════════════════════════════════════════════════════════════════

#[test]
fn newton_trig_log() {
    let df = |x: f64| x.sin() / (x + 1.0) + (2.0 * x + 2.0).ln() * x.cos();
    let s = newton(trig_log, df, 0.5, &RootSettings { precision: 1e-12, max_iter: 100 });
    let r = s.root.unwrap();
    assert!(r.fx.abs() < 1e-12);
    for seg in &s.trace {
        assert_eq!(seg.b.y, 0.0);
    }
}

#[test]
fn newton_flat_tangent() {
    let s = newton(|x: f64| x * x + 1.0, |x| 2.0 * x, 0.0, &RootSettings::default());
    assert_eq!(s.status, RootStatus::ZeroDerivative);
    assert!(s.trace.is_empty());
}

#[test]
fn newton_already_at_root() {
    let s = newton(quadratic, |x| 2.0 * x, 0.9_f64.sqrt(), &RootSettings::default());
    let r = s.root.unwrap();
    assert_eq!(r.iterations, 0);
    assert!(s.trace.is_empty());
}

#[test]
fn newton_cycles_hit_limit() {
    // x³ - 2x + 2 cycles between 0 and 1 from x0 = 0
    let s = newton(
        |x: f64| x * x * x - 2.0 * x + 2.0,
        |x| 3.0 * x * x - 2.0,
        0.0,
        &RootSettings::default(),
    );
    assert_eq!(s.status, RootStatus::IterationLimit);
    assert_eq!(s.trace.len(), 100);
}

// ═══════════════════════════════════════════════════════════════════
// Fixed point
// ═══════════════════════════════════════════════════════════════════

#[test]
fn fixed_point_contracts() {
    let settings = RootSettings { precision: 1e-8, max_iter: 200 };
    let s = fixed_point(quadratic, 0.5, Relaxation::new(-0.5), &settings);
    let r = s.root.unwrap();
    assert_near(r.x, 0.9_f64.sqrt(), 1e-6, "fixed point root");
    assert_eq!(s.trace[0], 0.5);
    assert_eq!(*s.trace.last().unwrap(), r.x);
}

#[test]
fn fixed_point_diverges_with_wrong_sign() {
    let settings = RootSettings::default().with_max_iter(200);
    let s = fixed_point(quadratic, 1.0, Relaxation::new(1.0), &settings);
    assert!(!s.is_converged());
    assert!(matches!(
        s.status,
        RootStatus::Diverged | RootStatus::IterationLimit
    ));
}

#[test]
fn relaxation_default_is_one() {
    let r: Relaxation<f64> = Relaxation::default();
    assert_eq!(r.lambda(), 1.0);
    assert_eq!(r.inverse(), 1.0);
}

#[test]
#[should_panic(expected = "nonzero")]
fn relaxation_zero_panics() {
    Relaxation::new(0.0_f64);
}

// ═══════════════════════════════════════════════════════════════════
// Systems
// ═══════════════════════════════════════════════════════════════════

#[test]
fn intersect_parabola_with_exp() {
    // y = x² - 0.9 and y = exp(-x²) - 0.5
    let settings = RootSettings { precision: 1e-10, max_iter: 200 };
    let s = intersect_curves(
        quadratic,
        |x| 2.0 * x,
        |x: f64| (-x * x).exp() - 0.5,
        |x: f64| -2.0 * x * (-x * x).exp(),
        Point::new(1.0, 0.0),
        &settings,
    );
    let r = s.root.unwrap();
    assert_near(r.y, quadratic(r.x), 1e-9, "on first curve");
    assert_near(r.y, (-r.x * r.x).exp() - 0.5, 1e-9, "on second curve");
    assert_eq!(s.trace[0], Point::new(1.0, 0.0));
    assert_eq!(*s.trace.last().unwrap(), r);
    assert_eq!(s.trace.len(), s.iterations + 1);
}

#[test]
fn parallel_lines_are_singular() {
    let s = intersect_curves(
        |x: f64| x,
        |_| 1.0,
        |x: f64| x + 1.0,
        |_| 1.0,
        Point::new(0.0, 0.0),
        &RootSettings::default(),
    );
    assert_eq!(s.status, RootStatus::ZeroDerivative);
    assert_eq!(s.trace.len(), 1);
}
