//! # gauss-jordan-rust
//!
//! Pure Rust port of a C++ Gauss-Jordan linear equation solver
//! (`gauss_jordan.hpp` by Thomas Klietsch) for square and overdetermined
//! dense systems.
//!
//! Given a matrix and a right-hand-side vector representing
//! `matrix · x = equal`, the solver produces `x` by Gauss-Jordan
//! elimination. When the natural leading diagonal contains an effective
//! zero, a deterministic pivot search reassigns rows to columns until the
//! diagonal is usable. For overdetermined systems (more equations than
//! unknowns) a residual metric reports how well the solution fits the
//! equations that did not take part in the reduction.
//!
//! Failures keep the original sentinel contract: an empty solution vector
//! from [`solve`], a NaN from [`error_estimate`], and silent no-ops from
//! malformed matrix mutations. The `try_` variants expose the reason as a
//! [`SolveError`] instead.
//!
//! ```rust
//! use gauss_jordan_rust::{error_estimate, solve, Matrix};
//!
//! // y = 7, x = 2 — zero on the natural diagonal forces a pivot search
//! let mut m = Matrix::new(2, 2);
//! m.set_row(0, &[0.0, 1.0]);
//! m.set_row(1, &[1.0, 0.0]);
//!
//! let x = solve(&m, &[7.0, 2.0]);
//! assert_eq!(x, vec![2.0, 7.0]);
//! assert_eq!(error_estimate(&m, &[7.0, 2.0], &x), 0.0);
//! ```

pub mod basics;
pub mod error_estimate;
pub mod matrix;
pub mod pivot;
pub mod solve;

pub use basics::{format_real, Real, MAGNITUDE_ZERO, NUMERIC_EPSILON};
pub use error_estimate::{error_estimate, try_error_estimate};
pub use matrix::Matrix;
pub use solve::{solve, solve_with_epsilon, try_solve, SolveError};
