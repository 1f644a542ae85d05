//! Gauss-Jordan elimination over a matrix / right-hand-side pair.
//!
//! Port of `GaussJordan::Solve` from `gauss_jordan.hpp`. The public entry
//! points keep the C++ sentinel contract — an empty solution vector signals
//! any failure — while [`try_solve`] exposes the concrete reason through
//! [`SolveError`] for callers that want diagnostics.

use crate::basics::{Real, MAGNITUDE_ZERO};
use crate::matrix::Matrix;
use crate::pivot::{candidate_rows, reduce_to_square, select_pivot_rows};
use std::error::Error;
use std::fmt;

// ============================================================================
// Failure reasons
// ============================================================================

/// Why a solve or error-estimate call produced no result.
///
/// The C++ original collapses all of these into an empty vector or a NaN;
/// the reasons exist so new code can tell a shape problem from a numerical
/// one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// Matrix is degenerate: zero-dimension or underdetermined.
    InvalidMatrix,
    /// Right-hand-side length differs from the matrix row count.
    RhsLengthMismatch { expected: usize, actual: usize },
    /// Every entry of the column is below the magnitude threshold; no pivot
    /// can ever be drawn from it.
    ZeroColumn { column: usize },
    /// No distinct row-per-column assignment yields a nonzero diagonal.
    NoPivotCombination,
    /// The pivot search exceeded its attempt budget
    /// ([`MAX_PIVOT_ATTEMPTS`](crate::pivot::MAX_PIVOT_ATTEMPTS)).
    SearchBudgetExceeded,
    /// Division by the pivot of `column` produced a non-finite scalar during
    /// elimination.
    UnstablePivot { column: usize },
    /// Normalizing `row` against its diagonal produced a non-finite value.
    UnstableDiagonal { row: usize },
    /// Candidate solution length differs from the matrix column count
    /// (error estimation only).
    SolutionLengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SolveError::InvalidMatrix => write!(f, "matrix is zero-sized or underdetermined"),
            SolveError::RhsLengthMismatch { expected, actual } => {
                write!(f, "right-hand side has {} entries, expected {}", actual, expected)
            }
            SolveError::ZeroColumn { column } => {
                write!(f, "column {} is entirely below the zero threshold", column)
            }
            SolveError::NoPivotCombination => {
                write!(f, "no row combination gives a nonzero diagonal")
            }
            SolveError::SearchBudgetExceeded => {
                write!(f, "pivot search exceeded its attempt budget")
            }
            SolveError::UnstablePivot { column } => {
                write!(f, "non-finite elimination scalar at column {}", column)
            }
            SolveError::UnstableDiagonal { row } => {
                write!(f, "non-finite normalization at row {}", row)
            }
            SolveError::SolutionLengthMismatch { expected, actual } => {
                write!(f, "solution has {} entries, expected {}", actual, expected)
            }
        }
    }
}

impl Error for SolveError {}

// ============================================================================
// Elimination
// ============================================================================

/// Zero the off-diagonal entries of a square system in place.
///
/// For each column, every other row has `scalar × pivot_row` subtracted,
/// where `scalar = m(row, col) / m(col, col)`. A non-finite scalar aborts —
/// typically a diagonal entry that passed the epsilon test but is still
/// numerically hopeless.
fn eliminate(matrix: &mut Matrix, equal: &mut [Real]) -> Result<(), SolveError> {
    let n = matrix.cols();

    for col in 0..n {
        for row in 0..n {
            if row == col {
                continue;
            }

            let scalar = matrix.get(row, col) / matrix.get(col, col);
            if !scalar.is_finite() {
                return Err(SolveError::UnstablePivot { column: col });
            }

            for k in 0..n {
                let delta = matrix.get(col, k) * scalar;
                *matrix.at_mut(row, k) -= delta;
            }
            equal[row] -= equal[col] * scalar;
        }
    }

    Ok(())
}

/// Rescale the diagonal to 1, producing the solution vector.
fn normalize(matrix: &Matrix, equal: &[Real]) -> Result<Vec<Real>, SolveError> {
    let n = matrix.cols();

    let mut result = Vec::with_capacity(n);
    for row in 0..n {
        let value = equal[row] / matrix.get(row, row);
        if !value.is_finite() {
            return Err(SolveError::UnstableDiagonal { row });
        }
        result.push(value);
    }

    Ok(result)
}

// ============================================================================
// Public solver
// ============================================================================

/// Solve `matrix · x = equal`, reporting the failure reason on error.
///
/// The matrix must be square or overdetermined and `equal` must have one
/// entry per row. When the leading diagonal already clears `epsilon` the
/// system is solved from its first `cols` rows, exactly as the C++ code
/// does; otherwise a pivot assignment is searched for (see
/// [`crate::pivot`]) and the selected rows form the square system.
pub fn try_solve(matrix: &Matrix, equal: &[Real], epsilon: Real) -> Result<Vec<Real>, SolveError> {
    if !matrix.is_valid() {
        return Err(SolveError::InvalidMatrix);
    }

    let (rows, cols) = matrix.size();
    if equal.len() != rows {
        return Err(SolveError::RhsLengthMismatch {
            expected: rows,
            actual: equal.len(),
        });
    }

    let assignment = if matrix.is_diagonal_nonzero(epsilon) {
        (0..cols).collect()
    } else {
        let candidates = candidate_rows(matrix, epsilon)?;
        select_pivot_rows(&candidates, rows)?
    };

    let (mut square, mut reduced_equal) = reduce_to_square(matrix, equal, &assignment);

    eliminate(&mut square, &mut reduced_equal)?;
    normalize(&square, &reduced_equal)
}

/// Solve `matrix · x = equal` with an explicit zero threshold.
///
/// Sentinel variant of [`try_solve`]: any failure yields an empty vector.
pub fn solve_with_epsilon(matrix: &Matrix, equal: &[Real], epsilon: Real) -> Vec<Real> {
    try_solve(matrix, equal, epsilon).unwrap_or_default()
}

/// Solve `matrix · x = equal` at the default
/// [`MAGNITUDE_ZERO`](crate::basics::MAGNITUDE_ZERO) threshold.
///
/// Port of C++ `GaussJordan::Solve` with its default epsilon argument; an
/// empty vector signals any failure.
pub fn solve(matrix: &Matrix, equal: &[Real]) -> Vec<Real> {
    solve_with_epsilon(matrix, equal, MAGNITUDE_ZERO)
}

// ============================================================================
// Tests
// ============================================================================
