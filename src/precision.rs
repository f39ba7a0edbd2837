//! Precision constants for geometric comparisons.
//!
//! Exact comparisons (`==`) never consult these.

/// Confusion tolerance for checking coincidence of two points or vectors.
/// Two values are coincident if their distance <= CONFUSION.
/// Value: 1.0e-7
pub const CONFUSION: f64 = 1.0e-7;

/// Default column width for formatted matrix output.
/// A width given in the format string (`{:12}`) takes precedence.
pub const PRINT_WIDTH: usize = 10;

/// Converts a tolerance into the scalar type `T`.
///
/// Falls back to `T::epsilon()` for scalar types that cannot represent it.
#[inline]
pub fn tolerance<T: num_traits::Float>(value: f64) -> T {
    <T as num_traits::NumCast>::from(value).unwrap_or_else(T::epsilon)
}
