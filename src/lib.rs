//! # numlab
//!
//! Classical numerical methods, written to be read: pivoted Gaussian
//! elimination over strided matrix views, root finding, adaptive quadrature,
//! least squares, polynomial interpolation and ODE integration. Every
//! iterative method reports how it ended as data, alongside its trace.
//!
//! ## Quick start
//!
//! ```
//! use numlab::gauss::solve_system;
//! use numlab::Matrix;
//!
//! // 2x + y - z = 8, -3x - y + 2z = -11, -2x + y + 2z = -3
//! let a = Matrix::from_rows(3, 4, &[
//!     2.0_f64, 1.0, -1.0, 8.0,
//!     -3.0, -1.0, 2.0, -11.0,
//!     -2.0, 1.0, 2.0, -3.0,
//! ]);
//! let out = solve_system(&a.view());
//! let x = out.solution.unwrap(); // x = [2, 3, -1]
//! assert!((x[0] - 2.0).abs() < 1e-12);
//! assert!((out.determinant.unwrap() + 1.0).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`]: Row-major [`MatrixView`] / [`MatrixViewMut`] with an explicit
//!   stride, so a view can cover a sub-rectangle of a larger buffer. Owning
//!   [`Matrix`] (heap), [`StaticMatrix`] (const-generic) and [`BoundedMatrix`]
//!   (fixed backing store with resizable active extents).
//!
//! - [`gauss`]: Triangulation with column permutation tracking,
//!   back-substitution with solvability classification, determinant with
//!   swap-parity sign, and the bounded [`gauss::LinearSystem`] input.
//!
//! - [`roots`]: Chords, Newton and relaxed fixed-point iteration for
//!   `f(x) = 0`; Newton for 2x2 systems and curve intersection.
//!
//! - [`quad`]: Rectangle, trapezoid and Simpson rules with a step-doubling
//!   driver using the Runge error estimate.
//!
//! - [`fit`]: Polynomial least squares via the normal equations, plus
//!   exponential, logarithmic and power models by log transform.
//!
//! - [`interp`]: Lagrange form and Newton forward/backward differences.
//!
//! - [`ode`]: Modified Euler, classic RK4 and Milne predictor-corrector with a
//!   step-doubling driver.
//!
//! - [`catalog`], [`io`], [`task`]: built-in functions, file formats and
//!   per-family sessions for an interactive front end.
//!
//! - [`traits`]: Element trait hierarchy:
//!   - [`Scalar`]: all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`]: real floats (`Scalar + Float`), used by every iterative method
//!   - [`MatrixRef`] / [`MatrixMut`]: generic read/write access for algorithms
//!
//! ## Logging
//!
//! Solvers log progress through the [`log`](https://docs.rs/log) facade at
//! `trace`/`debug`, and `warn` when an adaptive driver gives up. No logger is
//! installed by the library.

pub mod catalog;
pub mod fit;
pub mod gauss;
pub mod interp;
pub mod io;
pub mod matrix;
pub mod ode;
pub mod point;
pub mod quad;
pub mod roots;
pub mod special;
pub mod task;
pub mod traits;

pub use matrix::{BoundedMatrix, Matrix, MatrixError, MatrixView, MatrixViewMut, StaticMatrix};
pub use point::Point;
pub use traits::{FloatScalar, MatrixMut, MatrixRef, Scalar};
