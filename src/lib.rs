//! geom3d: fixed-size 3D geometry primitives.
//!
//! Vectors, points and 3x3 matrices over any floating-point scalar,
//! axis-aligned ranges, and a surface capability with a spherical cap
//! implementation.

pub mod precision;
pub mod gp;
pub mod bnd;
pub mod surface;

// Re-exports for convenience
pub use gp::{Matrix3D, Point3D, Vector3D};
pub use bnd::{Range, Range3D};
pub use surface::{SphericalSurface3D, Surface3D};

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, GeomError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeomError {
    /// A matrix field is NaN or infinite. `row` and `col` are 1-indexed.
    #[error("Invalid matrix: field M{row}{col} is not finite")]
    InvalidMatrix { row: usize, col: usize },

    #[error("Bad exponent: {0} (only -1 and non-negative exponents are defined)")]
    BadExponent(i32),

    #[error("Domain error: {0}")]
    Domain(String),

    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),
}
