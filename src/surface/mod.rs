//! Surface types
//!
//! [`Surface3D`] is the capability every surface provides. It is an open
//! trait: new surface kinds implement it without touching existing ones,
//! and it is dyn-compatible so heterogeneous surfaces can share a
//! `Vec<Box<dyn Surface3D<T>>>`.

mod spherical;

pub use self::spherical::SphericalSurface3D;

use crate::gp::{Point3D, Vector3D};
use crate::Result;

/// A surface that can report its local normal.
pub trait Surface3D<T> {
    /// Normal vector of the surface at `point`.
    fn normal_vector(&self, point: &Point3D<T>) -> Result<Vector3D<T>>;
}
