//! Geometric primitives package.
//!
//! Value types shared by everything else in the crate. All of them are
//! generic over a floating-point scalar (`f32` or `f64`).

mod xyz;
mod pnt;
mod mat;

pub use xyz::Vector3D;
pub use pnt::Point3D;
pub use mat::Matrix3D;
