use crate::point::Point;
use crate::traits::FloatScalar;

use super::InterpError;

/// Values sampled at evenly spaced nodes from `low` to `high` inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct EvenlySpaced<T> {
    pub low: T,
    pub high: T,
    pub values: Vec<T>,
}

impl<T: FloatScalar> EvenlySpaced<T> {
    /// Sample `f` at `n` evenly spaced nodes.
    ///
    /// Panics if `n < 2`.
    pub fn sample(mut f: impl FnMut(T) -> T, low: T, high: T, n: usize) -> Self {
        assert!(n >= 2, "need at least two sample nodes");
        let step = (high - low) / T::from(n - 1).unwrap();
        let values = (0..n).map(|i| f(low + T::from(i).unwrap() * step)).collect();
        Self { low, high, values }
    }

    /// Distance between neighbouring nodes.
    ///
    /// Panics with fewer than two values.
    pub fn step(&self) -> T {
        assert!(self.values.len() >= 2, "need at least two sample nodes");
        (self.high - self.low) / T::from(self.values.len() - 1).unwrap()
    }

    /// The samples as `(x, y)` points.
    pub fn nodes(&self) -> impl Iterator<Item = Point<T>> + '_ {
        let step = self.step();
        self.values
            .iter()
            .enumerate()
            .map(move |(i, &y)| Point::new(self.low + T::from(i).unwrap() * step, y))
    }
}

impl Default for EvenlySpaced<f64> {
    fn default() -> Self {
        Self {
            low: 0.0,
            high: 4.0,
            values: vec![1.0, 1.67, 0.99, 0.0, 0.0],
        }
    }
}

/// Triangular table of forward differences.
///
/// Order `k` holds `Δᵏyᵢ = Δᵏ⁻¹yᵢ₊₁ - Δᵏ⁻¹yᵢ`, with `n - k` entries; order 0
/// is the raw values.
#[derive(Debug, Clone, PartialEq)]
pub struct FiniteDifferences<T> {
    table: Vec<Vec<T>>,
}

impl<T: FloatScalar> FiniteDifferences<T> {
    /// Panics if `values` is empty.
    pub fn new(values: &[T]) -> Self {
        assert!(!values.is_empty(), "finite differences of no values");
        let mut table = Vec::with_capacity(values.len());
        table.push(values.to_vec());
        while let Some(prev) = table.last().filter(|row| row.len() > 1) {
            let next = prev.windows(2).map(|w| w[1] - w[0]).collect();
            table.push(next);
        }
        Self { table }
    }

    /// Number of difference orders, equal to the number of samples.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Differences of order `k`.
    pub fn order(&self, k: usize) -> &[T] {
        &self.table[k]
    }

    pub fn iter(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.table.iter().map(Vec::as_slice)
    }
}

/// Newton interpolation over evenly spaced samples.
///
/// Queries in the lower half of `[low, high]` use the forward formula from
/// the node at or below `x`; the upper half uses the backward formula from
/// the node at or above `x`. Queries outside `[low, high]` return zero.
#[derive(Debug, Clone, PartialEq)]
pub struct NewtonInterp<T> {
    low: T,
    high: T,
    step: T,
    diffs: FiniteDifferences<T>,
}

impl<T: FloatScalar> NewtonInterp<T> {
    /// Requires at least two samples.
    pub fn new(samples: &EvenlySpaced<T>) -> Result<Self, InterpError> {
        Self::from_values(samples.low, samples.high, &samples.values)
    }

    pub fn from_values(low: T, high: T, values: &[T]) -> Result<Self, InterpError> {
        if values.len() < 2 {
            return Err(InterpError::TooFewPoints);
        }
        if high == low {
            return Err(InterpError::DuplicateNodes);
        }
        Ok(Self {
            low,
            high,
            step: (high - low) / T::from(values.len() - 1).unwrap(),
            diffs: FiniteDifferences::new(values),
        })
    }

    pub fn differences(&self) -> &FiniteDifferences<T> {
        &self.diffs
    }

    #[inline]
    pub fn step(&self) -> T {
        self.step
    }

    fn contains(&self, x: T) -> bool {
        x >= self.low && x <= self.high
    }

    /// Evaluate, choosing the formula by which half of the range `x` is in.
    pub fn eval(&self, x: T) -> T {
        let half = (self.high - self.low) * T::from(0.5).unwrap();
        if x - self.low <= half {
            self.eval_forward(x)
        } else {
            self.eval_backward(x)
        }
    }

    /// Newton's forward formula from the node at or below `x`.
    pub fn eval_forward(&self, x: T) -> T {
        if !self.contains(x) {
            return T::zero();
        }
        let n = self.diffs.len();
        let i = ((x - self.low) / self.step).floor().to_usize().unwrap_or(0).min(n - 1);
        let x0 = self.low + T::from(i).unwrap() * self.step;
        let t = (x - x0) / self.step;

        let mut result = T::zero();
        let mut t_acc = T::one();
        let mut factorial = T::one();
        for (j, diff) in self.diffs.iter().enumerate() {
            let Some(&d) = diff.get(i) else { break };
            result = result + d * t_acc / factorial;
            t_acc = t_acc * (t - T::from(j).unwrap());
            factorial = factorial * T::from(j + 1).unwrap();
        }
        result
    }

    /// Newton's backward formula from the node at or above `x`.
    pub fn eval_backward(&self, x: T) -> T {
        if !self.contains(x) {
            return T::zero();
        }
        let n = self.diffs.len();
        let i = ((x - self.low) / self.step).ceil().to_usize().unwrap_or(0).min(n - 1);
        let xn = self.low + T::from(i).unwrap() * self.step;
        let t = (x - xn) / self.step;

        let mut result = T::zero();
        let mut t_acc = T::one();
        let mut factorial = T::one();
        for (j, diff) in self.diffs.iter().enumerate().take(i + 1) {
            result = result + diff[i - j] * t_acc / factorial;
            t_acc = t_acc * (t + T::from(j).unwrap());
            factorial = factorial * T::from(j + 1).unwrap();
        }
        result
    }
}
