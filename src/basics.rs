//! Foundation scalar type, numeric constants, and decimal formatting.
//!
//! Port of the header prelude of `gauss_jordan.hpp` — the scalar alias,
//! the zero-magnitude threshold, and the `RealToString` helper that the
//! rest of the solver depends on.

// ============================================================================
// Scalar type and constants
// ============================================================================

/// Scalar type used throughout the solver.
///
/// The C++ original uses `std::float128_t` where the compiler provides it and
/// `long double` otherwise. Rust has no native extended-precision float, so
/// this is the widest native type on every supported platform.
pub type Real = f64;

/// Smallest value such that `1 + NUMERIC_EPSILON` evaluates to something
/// other than `1`. Matches C++ `numeric_epsilon`.
pub const NUMERIC_EPSILON: Real = Real::EPSILON;

/// The magnitude below which a number is considered to be zero.
///
/// Deliberately much coarser than [`NUMERIC_EPSILON`]: a pivot this small is
/// already numerically useless. Matches C++ `magnitude_zero`
/// (single-precision epsilon).
pub const MAGNITUDE_ZERO: Real = f32::EPSILON as Real;

/// Most decimal digits worth printing for a [`Real`]; anything beyond this
/// is noise. Matches C++ `digits10 + 1` for the underlying type.
pub const MAX_DECIMAL_DIGITS: u8 = 16;

// ============================================================================
// Decimal formatting
// ============================================================================

/// Render a [`Real`] with `decimals` digits after the decimal point.
///
/// `decimals == 0` requests FULL available precision, unlike Rust's
/// `{:.0}` (and C++ `setprecision(0)`) which would print no digits at all.
/// A single leading space is added to non-negative values so that columns
/// of mixed-sign numbers line up.
///
/// Port of C++ `RealToString`.
pub fn format_real(value: Real, decimals: u8) -> String {
    let body = if decimals == 0 {
        // Shortest representation that round-trips.
        format!("{}", value)
    } else {
        format!("{:.*}", decimals.min(MAX_DECIMAL_DIGITS) as usize, value)
    };

    if body.starts_with('-') {
        body
    } else {
        format!(" {}", body)
    }
}

// ============================================================================
// Tests
// ============================================================================
