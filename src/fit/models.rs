use log::debug;

use crate::point::Point;
use crate::traits::FloatScalar;

use super::poly::polynomial_fit;
use super::{Fit, FitError, Model, ModelSelector};

/// Pearson correlation coefficient of the points.
///
/// `None` when either coordinate has zero variance.
pub fn correlation<T: FloatScalar>(points: &[Point<T>]) -> Option<T> {
    assert!(!points.is_empty(), "correlation of an empty point set");
    let n = T::from(points.len()).unwrap();
    let mean = points
        .iter()
        .fold(Point::new(T::zero(), T::zero()), |acc, &p| acc + p);
    let mean = Point::new(mean.x / n, mean.y / n);

    let (mut sxx, mut syy, mut sxy) = (T::zero(), T::zero(), T::zero());
    for &p in points {
        let d = p - mean;
        sxx = sxx + d.x * d.x;
        syy = syy + d.y * d.y;
        sxy = sxy + d.x * d.y;
    }

    let bottom = (sxx * syy).sqrt();
    (bottom != T::zero()).then(|| sxy / bottom)
}

/// Root mean square of `f(x_i) - y_i`.
pub fn deviation<T: FloatScalar>(points: &[Point<T>], mut f: impl FnMut(T) -> T) -> T {
    assert!(!points.is_empty(), "deviation of an empty point set");
    let sum = points.iter().fold(T::zero(), |acc, p| {
        let diff = f(p.x) - p.y;
        acc + diff * diff
    });
    (sum / T::from(points.len()).unwrap()).sqrt()
}

fn transformed_linear<T: FloatScalar>(
    points: &[Point<T>],
    model: Model,
    transform: impl Fn(Point<T>) -> Point<T>,
) -> Result<[T; 2], FitError> {
    let needs_x = matches!(model, Model::Logarithmic | Model::Power);
    let needs_y = matches!(model, Model::Exponential | Model::Power);
    if points
        .iter()
        .any(|p| (needs_x && p.x <= T::zero()) || (needs_y && p.y <= T::zero()))
    {
        return Err(FitError::Domain(model));
    }
    let c = polynomial_fit(points.iter().map(|&p| transform(p)), 1)?;
    Ok([c[0], c[1]])
}

/// Fit one model.
///
/// Panics if `points` is empty.
pub fn fit_model<T: FloatScalar>(points: &[Point<T>], model: Model) -> Result<Fit<T>, FitError> {
    assert!(!points.is_empty(), "cannot fit an empty point set");

    let zero = T::zero();
    let coefficients = match model {
        Model::Linear => {
            let [b, a] = transformed_linear(points, model, |p| p)?;
            [a, b, zero, zero]
        }
        Model::Quadratic => {
            let c = polynomial_fit(points.iter().copied(), 2)?;
            [c[0], c[1], c[2], zero]
        }
        Model::Cubic => {
            let c = polynomial_fit(points.iter().copied(), 3)?;
            [c[0], c[1], c[2], c[3]]
        }
        Model::Exponential => {
            let [ln_a, b] = transformed_linear(points, model, |p| Point::new(p.x, p.y.ln()))?;
            [ln_a.exp(), b, zero, zero]
        }
        Model::Logarithmic => {
            let [b, a] = transformed_linear(points, model, |p| Point::new(p.x.ln(), p.y))?;
            [a, b, zero, zero]
        }
        Model::Power => {
            let [ln_a, b] = transformed_linear(points, model, |p| Point::new(p.x.ln(), p.y.ln()))?;
            [ln_a.exp(), b, zero, zero]
        }
    };

    let mut fit = Fit {
        model,
        coefficients,
        deviation: zero,
        correlation: None,
    };
    let rms = deviation(points, |x| fit.eval(x));
    fit.deviation = rms;
    if model == Model::Linear {
        fit.correlation = correlation(points);
    }
    Ok(fit)
}

/// Fit the selected model, or every model keeping the lowest deviation.
///
/// In best-fit mode models that fail are skipped, and a later model must be
/// strictly better to replace an earlier one. When every model fails, the
/// linear model's error is returned.
pub fn fit<T: FloatScalar>(points: &[Point<T>], selector: ModelSelector) -> Result<Fit<T>, FitError> {
    if let ModelSelector::Fixed(model) = selector {
        return fit_model(points, model);
    }

    let mut best = fit_model(points, Model::ALL[0]);
    for &model in &Model::ALL[1..] {
        let Ok(candidate) = fit_model(points, model) else {
            debug!("best fit: {} model skipped", model);
            continue;
        };
        debug!("best fit: {} deviation {:?}", model, candidate.deviation);
        match &best {
            Ok(incumbent) if candidate.deviation >= incumbent.deviation => {}
            _ if candidate.deviation.is_nan() => {}
            _ => best = Ok(candidate),
        }
    }
    best
}
