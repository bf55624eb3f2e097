use criterion::{criterion_group, criterion_main, Criterion};

use numlab::gauss::{determinant, solve_system};
use numlab::ode::{self, solve_adaptive};
use numlab::quad::{self, integrate};
use numlab::Matrix;

// ---------------------------------------------------------------------------
// Helpers: diagonally dominant systems so every method succeeds
// ---------------------------------------------------------------------------

fn entry(i: usize, j: usize, n: usize) -> f64 {
    ((i + 1) * 10 + j + 1) as f64 + if i == j { 10.0 * n as f64 } else { 0.0 }
}

fn numlab_augmented(n: usize) -> Matrix<f64> {
    Matrix::from_fn(n, n + 1, |i, j| if j == n { (i + 1) as f64 } else { entry(i, j, n) })
}

fn nalgebra_system(n: usize) -> (nalgebra::DMatrix<f64>, nalgebra::DVector<f64>) {
    (
        nalgebra::DMatrix::from_fn(n, n, |i, j| entry(i, j, n)),
        nalgebra::DVector::from_fn(n, |i, _| (i + 1) as f64),
    )
}

// ---------------------------------------------------------------------------
// Linear systems
// ---------------------------------------------------------------------------

fn solve_4x4(c: &mut Criterion) {
    let mut g = c.benchmark_group("solve_4x4");

    g.bench_function("numlab", |b| {
        let a = numlab_augmented(4);
        b.iter(|| solve_system(&std::hint::black_box(&a).view()))
    });

    g.bench_function("nalgebra", |b| {
        let (a, rhs) = nalgebra_system(4);
        b.iter(|| std::hint::black_box(&a).clone().lu().solve(std::hint::black_box(&rhs)))
    });

    g.finish();
}

fn solve_20x20(c: &mut Criterion) {
    let mut g = c.benchmark_group("solve_20x20");

    g.bench_function("numlab", |b| {
        let a = numlab_augmented(20);
        b.iter(|| solve_system(&std::hint::black_box(&a).view()))
    });

    g.bench_function("nalgebra", |b| {
        let (a, rhs) = nalgebra_system(20);
        b.iter(|| std::hint::black_box(&a).clone().lu().solve(std::hint::black_box(&rhs)))
    });

    g.finish();
}

fn det_6x6(c: &mut Criterion) {
    let mut g = c.benchmark_group("det_6x6");

    g.bench_function("numlab", |b| {
        let a = Matrix::from_fn(6, 6, |i, j| entry(i, j, 6));
        b.iter(|| determinant(&std::hint::black_box(&a).view()))
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra::DMatrix::from_fn(6, 6, |i, j| entry(i, j, 6));
        b.iter(|| std::hint::black_box(&a).clone().determinant())
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Adaptive drivers
// ---------------------------------------------------------------------------

fn quad_adaptive(c: &mut Criterion) {
    let mut g = c.benchmark_group("quad_adaptive");
    let settings = quad::AdaptiveSettings {
        precision: 1e-8,
        ..quad::AdaptiveSettings::default()
    };

    for method in [quad::Method::Trapezoid, quad::Method::Simpson] {
        g.bench_function(format!("{:?}", method), |b| {
            b.iter(|| {
                integrate(
                    |x: f64| x.sin() * x.exp(),
                    std::hint::black_box(-0.5),
                    1.3,
                    method,
                    &settings,
                )
            })
        });
    }

    g.finish();
}

fn ode_adaptive(c: &mut Criterion) {
    let mut g = c.benchmark_group("ode_adaptive");
    let settings = ode::AdaptiveSettings {
        precision: 1e-6,
        ..ode::AdaptiveSettings::default()
    };

    for method in ode::Method::ALL {
        g.bench_function(format!("{:?}", method), |b| {
            b.iter(|| {
                solve_adaptive(
                    |x: f64, y: f64| y + (1.0 + x) * y * y,
                    0.0,
                    1.0,
                    std::hint::black_box(0.3),
                    method,
                    &settings,
                )
            })
        });
    }

    g.finish();
}

criterion_group!(benches, solve_4x4, solve_20x20, det_6x6, quad_adaptive, ode_adaptive);
criterion_main!(benches);
