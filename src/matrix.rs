//! Dense bounds-checked matrix container.
//!
//! Port of the `Matrix` class from `gauss_jordan.hpp` — a fixed-dimension,
//! row-major grid of [`Real`] supporting only square or overdetermined
//! shapes (rows ≥ columns). Out-of-range reads yield a quiet NaN and
//! out-of-range writes land in a discardable scratch cell, so callers
//! never see a panic from indexing.

use crate::basics::{format_real, Real};
use std::fmt;

// ============================================================================
// Matrix
// ============================================================================

/// Dense row-major matrix of [`Real`], square or overdetermined only.
///
/// Dimensions are fixed at construction. Cells are mutated either through
/// whole-row / whole-column replacement ([`set_row`](Matrix::set_row),
/// [`set_column`](Matrix::set_column)) or through the cell accessors.
///
/// Port of C++ `GaussJordan::Matrix`.
#[derive(Debug, Clone)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    cell: Vec<Real>,
    /// Write target when an out-of-range cell is addressed; never read back.
    scratch: Real,
}

impl Matrix {
    /// Construct a `rows × cols` matrix of zeros.
    ///
    /// A request with `rows < cols` (underdetermined) yields a degenerate
    /// 0×0 matrix rather than failing; [`is_valid`](Matrix::is_valid)
    /// reports it. Matches the C++ constructor.
    pub fn new(rows: usize, cols: usize) -> Self {
        if rows < cols {
            return Self {
                rows: 0,
                cols: 0,
                cell: Vec::new(),
                scratch: Real::NAN,
            };
        }

        Self {
            rows,
            cols,
            cell: vec![0.0; rows * cols],
            scratch: Real::NAN,
        }
    }

    /// Value at `(row, col)`, or a quiet NaN when out of range.
    ///
    /// Port of the C++ const `operator()`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Real {
        if row >= self.rows || col >= self.cols {
            return Real::NAN;
        }

        self.cell[row * self.cols + col]
    }

    /// Mutable access to the cell at `(row, col)`; `None` when out of range.
    ///
    /// This is the bounds-honest accessor; prefer it over
    /// [`at_mut`](Matrix::at_mut) in code that wants to know about a bad
    /// index.
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Real> {
        if row >= self.rows || col >= self.cols {
            return None;
        }

        Some(&mut self.cell[row * self.cols + col])
    }

    /// Mutable access to the cell at `(row, col)`, never failing.
    ///
    /// An out-of-range index returns a scratch cell whose mutation has no
    /// observable effect; the scratch is reset to NaN before each hand-out
    /// so reading through the returned reference behaves like
    /// [`get`](Matrix::get). Port of the C++ non-const `operator()` and its
    /// `dummy` member.
    #[inline]
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut Real {
        if row >= self.rows || col >= self.cols {
            self.scratch = Real::NAN;
            return &mut self.scratch;
        }

        &mut self.cell[row * self.cols + col]
    }

    /// Replace row `index` with `data`, all-or-nothing.
    ///
    /// Applied only when `index` is in range, `data.len()` equals the column
    /// count, and every value is finite; otherwise the matrix is left
    /// untouched and `false` is returned. Callers that want the silent
    /// fire-and-forget behavior of the C++ `set_row` simply ignore the
    /// return value.
    pub fn set_row(&mut self, index: usize, data: &[Real]) -> bool {
        if index >= self.rows || data.len() != self.cols {
            return false;
        }

        if data.iter().any(|v| !v.is_finite()) {
            return false;
        }

        let start = index * self.cols;
        self.cell[start..start + self.cols].copy_from_slice(data);
        true
    }

    /// Replace column `index` with `data`, all-or-nothing.
    ///
    /// Same contract as [`set_row`](Matrix::set_row) with `data.len()`
    /// measured against the row count.
    pub fn set_column(&mut self, index: usize, data: &[Real]) -> bool {
        if index >= self.cols || data.len() != self.rows {
            return false;
        }

        if data.iter().any(|v| !v.is_finite()) {
            return false;
        }

        for (row, value) in data.iter().enumerate() {
            self.cell[row * self.cols + index] = *value;
        }
        true
    }

    /// Borrow row `index` as a slice; `None` when out of range.
    #[inline]
    pub fn row(&self, index: usize) -> Option<&[Real]> {
        if index >= self.rows {
            return None;
        }

        let start = index * self.cols;
        Some(&self.cell[start..start + self.cols])
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, columns)` pair. Port of the C++ `size()`.
    #[inline]
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// True when the matrix is square or overdetermined and neither
    /// dimension is zero.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.rows > 0 && self.cols > 0 && self.rows >= self.cols
    }

    /// Test the leading diagonal for effective zeros.
    ///
    /// True when the matrix is valid and `|cell[i][i]| >= epsilon` for every
    /// `i` in `[0, cols)`. Only the leading `cols × cols` block is
    /// inspected; rows beyond it play no part.
    pub fn is_diagonal_nonzero(&self, epsilon: Real) -> bool {
        if !self.is_valid() {
            return false;
        }

        (0..self.cols).all(|i| self.cell[i * self.cols + i].abs() >= epsilon)
    }

    /// Textual dump with `decimals` digits per cell (see
    /// [`format_real`](crate::basics::format_real) for the `decimals == 0`
    /// convention). Port of the C++ `print()`.
    pub fn dump(&self, decimals: u8) -> String {
        let mut out = format!("{}x{} matrix\n", self.rows, self.cols);
        for row in 0..self.rows {
            for col in 0..self.cols {
                out.push_str(&format_real(self.cell[row * self.cols + col], decimals));
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }
}

/// Equality over dimensions and cells; the scratch cell is transient state
/// (and holds NaN) so it takes no part.
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.cell == other.cell
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump(8))
    }
}

// ============================================================================
// Tests
// ============================================================================
