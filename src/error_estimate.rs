//! Residual-based fit quality for a candidate solution.
//!
//! Port of `GaussJordan::ErrorEstimate`. For a square consistent system the
//! result is zero (up to rounding). An overdetermined system has more
//! equations than unknowns, so the solution generally cannot satisfy all of
//! them; the total absolute residual measures how far off it is — over ALL
//! original rows, including those the pivot reduction discarded.

use crate::basics::Real;
use crate::matrix::Matrix;
use crate::solve::SolveError;

/// Total absolute residual `Σ |matrix · result − equal|`, with reasons.
///
/// Fails when the matrix is invalid, the right-hand side does not have one
/// entry per row, or the candidate solution does not have one entry per
/// column.
pub fn try_error_estimate(
    matrix: &Matrix,
    equal: &[Real],
    result: &[Real],
) -> Result<Real, SolveError> {
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
    if result.len() != cols {
        return Err(SolveError::SolutionLengthMismatch {
            expected: cols,
            actual: result.len(),
        });
    }

    let mut error = 0.0;
    for row in 0..rows {
        let predicted: Real = matrix
            .row(row)
            .unwrap_or(&[])
            .iter()
            .zip(result)
            .map(|(cell, x)| cell * x)
            .sum();

        error += (predicted - equal[row]).abs();
    }

    Ok(error)
}

/// Total absolute residual, NaN on any failure.
///
/// Sentinel variant of [`try_error_estimate`], matching the C++ contract.
pub fn error_estimate(matrix: &Matrix, equal: &[Real], result: &[Real]) -> Real {
    try_error_estimate(matrix, equal, result).unwrap_or(Real::NAN)
}

// ============================================================================
// Tests
// ============================================================================
