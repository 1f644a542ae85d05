//! Pivot row selection for matrices with an unusable leading diagonal.
//!
//! Port of the row-sorting search inside the C++ `Solve` — when the natural
//! diagonal contains an effective zero, pick one row per column (all rows
//! pairwise distinct) such that each chosen row has a usable entry in its
//! column. Reordering the chosen rows then yields a square system whose
//! diagonal is nonzero by construction.
//!
//! The C++ original drives this with an unbounded mixed-radix odometer over
//! the per-column candidate lists; here it is a bounded depth-first
//! backtracking search over the same lists. Candidates are visited in
//! ascending row order per column, so the result is deterministic. Worst
//! case the search probes on the order of the product of the per-column
//! candidate counts, capped by [`MAX_PIVOT_ATTEMPTS`].

use crate::basics::Real;
use crate::matrix::Matrix;
use crate::solve::SolveError;

// ============================================================================
// Candidate enumeration
// ============================================================================

/// Upper bound on candidate probes during the assignment search.
///
/// A highly degenerate matrix can make the candidate product explode; the
/// search gives up with [`SolveError::SearchBudgetExceeded`] instead of
/// running for hours.
pub const MAX_PIVOT_ATTEMPTS: usize = 1 << 20;

/// For each column, the rows whose entry in that column clears `epsilon`.
///
/// A column with no candidate at all can never supply a pivot; that fails
/// immediately with the offending column index.
pub fn candidate_rows(matrix: &Matrix, epsilon: Real) -> Result<Vec<Vec<usize>>, SolveError> {
    let (rows, cols) = matrix.size();

    let mut candidates = Vec::with_capacity(cols);
    for col in 0..cols {
        let list: Vec<usize> = (0..rows)
            .filter(|&row| matrix.get(row, col).abs() >= epsilon)
            .collect();

        if list.is_empty() {
            return Err(SolveError::ZeroColumn { column: col });
        }
        candidates.push(list);
    }

    Ok(candidates)
}

// ============================================================================
// Assignment search
// ============================================================================

/// Pick one distinct row per column from the candidate lists.
///
/// Returns the chosen row indices ordered by column: entry `c` is the
/// original row that becomes row `c` of the reduced square system. Columns
/// are filled in increasing order and candidates tried in ascending row
/// order, so the same input always yields the same assignment.
pub fn select_pivot_rows(
    candidates: &[Vec<usize>],
    n_rows: usize,
) -> Result<Vec<usize>, SolveError> {
    let mut used = vec![false; n_rows];
    let mut chosen = Vec::with_capacity(candidates.len());
    let mut attempts = 0usize;

    if assign(candidates, &mut used, &mut chosen, &mut attempts)? {
        Ok(chosen)
    } else {
        Err(SolveError::NoPivotCombination)
    }
}

/// Depth-first extension of a partial assignment, one column per level.
fn assign(
    candidates: &[Vec<usize>],
    used: &mut [bool],
    chosen: &mut Vec<usize>,
    attempts: &mut usize,
) -> Result<bool, SolveError> {
    let column = chosen.len();
    if column == candidates.len() {
        return Ok(true);
    }

    for &row in &candidates[column] {
        *attempts += 1;
        if *attempts > MAX_PIVOT_ATTEMPTS {
            return Err(SolveError::SearchBudgetExceeded);
        }

        if used[row] {
            continue;
        }

        used[row] = true;
        chosen.push(row);
        if assign(candidates, used, chosen, attempts)? {
            return Ok(true);
        }
        chosen.pop();
        used[row] = false;
    }

    Ok(false)
}

// ============================================================================
// Reduction to a square system
// ============================================================================

/// Build the square system selected by `assignment`.
///
/// Row `c` of the result is row `assignment[c]` of `matrix`, and likewise
/// for the right-hand side. When the assignment came out of
/// [`select_pivot_rows`], cell `(c, c)` is nonzero by construction because
/// the source row was drawn from column `c`'s candidate list.
pub fn reduce_to_square(
    matrix: &Matrix,
    equal: &[Real],
    assignment: &[usize],
) -> (Matrix, Vec<Real>) {
    let cols = matrix.cols();

    let mut square = Matrix::new(cols, cols);
    let mut reduced_equal = Vec::with_capacity(cols);
    for (target, &source) in assignment.iter().enumerate() {
        for col in 0..cols {
            *square.at_mut(target, col) = matrix.get(source, col);
        }
        reduced_equal.push(equal[source]);
    }

    (square, reduced_equal)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: Real = 1e-9;

    fn from_rows(rows: &[&[Real]]) -> Matrix {
        let mut m = Matrix::new(rows.len(), rows[0].len());
        for (i, row) in rows.iter().enumerate() {
            assert!(m.set_row(i, row));
        }
        m
    }

    #[test]
    fn test_candidates_per_column() {
        let m = from_rows(&[&[0.0, 1.0], &[1.0, 0.0], &[1.0, 1.0]]);
        let c = candidate_rows(&m, EPS).unwrap();
        assert_eq!(c, vec![vec![1, 2], vec![0, 2]]);
    }

    #[test]
    fn test_zero_column_fails() {
        let m = from_rows(&[&[1.0, 0.0], &[2.0, 0.0]]);
        match candidate_rows(&m, EPS) {
            Err(SolveError::ZeroColumn { column }) => assert_eq!(column, 1),
            other => panic!("expected ZeroColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_anti_diagonal_assignment() {
        // [[0,1],[1,0]]: column 0 only usable in row 1, column 1 in row 0
        let m = from_rows(&[&[0.0, 1.0], &[1.0, 0.0]]);
        let c = candidate_rows(&m, EPS).unwrap();
        let rows = select_pivot_rows(&c, 2).unwrap();
        assert_eq!(rows, vec![1, 0]);
    }

    #[test]
    fn test_backtracking_forced() {
        // Column 1 can only use row 0, so column 0 must back off its
        // preferred candidate and take row 1.
        let m = from_rows(&[&[1.0, 1.0], &[1.0, 0.0]]);
        let c = candidate_rows(&m, EPS).unwrap();
        let rows = select_pivot_rows(&c, 2).unwrap();
        assert_eq!(rows, vec![1, 0]);
    }

    #[test]
    fn test_no_distinct_combination() {
        // Both columns are only usable in row 0; no distinct pair exists.
        let m = from_rows(&[&[1.0, 1.0], &[0.0, 0.0]]);
        // Column 1 of row 1 is zero, column 0 of row 1 is zero
        let c = candidate_rows(&m, EPS).unwrap();
        assert!(matches!(
            select_pivot_rows(&c, 2),
            Err(SolveError::NoPivotCombination)
        ));
    }

    #[test]
    fn test_search_budget_exceeded() {
        // Twelve columns all drawing from the same eleven rows: no distinct
        // assignment exists, and proving that exhaustively would take about
        // e * 11! probes, far past the budget. The search must give up with
        // the budget reason instead of grinding through the whole tree.
        let candidates: Vec<Vec<usize>> = (0..12).map(|_| (0..11).collect()).collect();
        assert!(matches!(
            select_pivot_rows(&candidates, 11),
            Err(SolveError::SearchBudgetExceeded)
        ));
    }

    #[test]
    fn test_determinism() {
        let m = from_rows(&[
            &[1.0, 1.0, 0.0],
            &[1.0, 0.0, 1.0],
            &[0.0, 1.0, 1.0],
            &[1.0, 1.0, 1.0],
        ]);
        let c = candidate_rows(&m, EPS).unwrap();
        let first = select_pivot_rows(&c, 4).unwrap();
        for _ in 0..10 {
            assert_eq!(select_pivot_rows(&c, 4).unwrap(), first);
        }
    }

    #[test]
    fn test_reduce_yields_nonzero_diagonal() {
        let m = from_rows(&[&[0.0, 2.0], &[3.0, 0.0], &[1.0, 1.0]]);
        let equal = [7.0, 5.0, 9.0];
        let c = candidate_rows(&m, EPS).unwrap();
        let rows = select_pivot_rows(&c, 3).unwrap();

        let (square, reduced) = reduce_to_square(&m, &equal, &rows);
        assert_eq!(square.size(), (2, 2));
        assert!(square.is_diagonal_nonzero(EPS));
        assert_eq!(reduced.len(), 2);
        // RHS entries travel with their rows
        for (target, &source) in rows.iter().enumerate() {
            assert_eq!(reduced[target], equal[source]);
            assert_eq!(square.get(target, 0), m.get(source, 0));
            assert_eq!(square.get(target, 1), m.get(source, 1));
        }
    }
}
