//! Spherical cap surface.

use std::fmt;

use num_traits::Float;
use serde::{Deserialize, Serialize};

use super::Surface3D;
use crate::bnd::{Range, Range3D};
use crate::gp::{Point3D, Vector3D};
use crate::{GeomError, Result};

/// Cap of a sphere, described by the sphere's center and radius and a
/// signed curvature. Positive curvature puts the cap at the top pole
/// (+Z), zero or negative curvature at the bottom pole.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphericalSurface3D<T> {
    center: Point3D<T>,
    curvature: T,
    radius: T,
}

impl<T: Float> SphericalSurface3D<T> {
    /// Creates a spherical cap. No validation is done here; an
    /// inconsistent curvature/radius pair is reported by [`range`](Self::range).
    pub const fn new(center: Point3D<T>, curvature: T, radius: T) -> Self {
        Self {
            center,
            curvature,
            radius,
        }
    }

    pub fn center(&self) -> Point3D<T> {
        self.center
    }

    pub fn curvature(&self) -> T {
        self.curvature
    }

    pub fn radius(&self) -> T {
        self.radius
    }

    /// Height of the cap along Z: `asin(|curvature| / radius)`.
    ///
    /// Fails with `Domain` when the radius is not positive or the ratio
    /// lies outside the arcsine domain.
    pub fn thickness(&self) -> Result<T> {
        if !(self.radius > T::zero()) {
            tracing::debug!("spherical cap radius is not positive");
            return Err(GeomError::Domain("radius must be positive".into()));
        }
        let ratio = self.curvature.abs() / self.radius;
        let thickness = ratio.asin();
        if thickness.is_nan() {
            tracing::debug!("spherical cap thickness is undefined: |curvature| / radius outside [-1, 1]");
            return Err(GeomError::Domain(
                "asin(|curvature| / radius) is undefined for |curvature| / radius outside [-1, 1]"
                    .into(),
            ));
        }
        Ok(thickness)
    }

    /// Axis-aligned bounding box of the cap.
    ///
    /// X and Y always span the full diameter around the center. Z spans
    /// `thickness` below the top pole for positive curvature, or
    /// `thickness` above the bottom pole otherwise. Every axis range has
    /// low <= high.
    pub fn range(&self) -> Result<Range3D<T>> {
        let t = self.thickness()?;
        let (c, r) = (self.center, self.radius);
        let z = if self.curvature > T::zero() {
            Range::new(c.z() + r - t, c.z() + r)
        } else {
            Range::new(c.z() - r, c.z() - r + t)
        };
        Ok(Range3D::new(
            Range::new(c.x() - r, c.x() + r),
            Range::new(c.y() - r, c.y() + r),
            z,
        ))
    }

    /// Whether `point` lies on the cap. Not implemented.
    pub fn intersects(&self, _point: &Point3D<T>) -> Result<bool> {
        Err(GeomError::NotImplemented("SphericalSurface3D::intersects"))
    }

    /// Local vector of the cap at `point`. Not implemented.
    pub fn local_vector(&self, _point: &Point3D<T>) -> Result<Vector3D<T>> {
        Err(GeomError::NotImplemented("SphericalSurface3D::local_vector"))
    }
}

impl<T: Float> Surface3D<T> for SphericalSurface3D<T> {
    fn normal_vector(&self, _point: &Point3D<T>) -> Result<Vector3D<T>> {
        Err(GeomError::NotImplemented("SphericalSurface3D::normal_vector"))
    }
}

impl<T: fmt::Display> fmt::Display for SphericalSurface3D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[[ center: {}, curvature: {}, radius: {} ]]",
            self.center, self.curvature, self.radius
        )
    }
}
