//! 3D point.

use std::fmt;
use std::ops::{Add, Sub};

use approx::{AbsDiffEq, RelativeEq};
use num_traits::Float;
use serde::{Deserialize, Serialize};

use super::Vector3D;

/// A 3D cartesian point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3D<T> {
    coord: Vector3D<T>,
}

impl<T: Float> Point3D<T> {
    /// Creates a point at origin (0, 0, 0).
    #[inline]
    pub fn new() -> Self {
        Self { coord: Vector3D::new() }
    }

    /// Creates a point from coordinates.
    #[inline]
    pub const fn from_coords(x: T, y: T, z: T) -> Self {
        Self {
            coord: Vector3D::from_coords(x, y, z),
        }
    }

    /// Creates a point at the tip of a position vector.
    #[inline]
    pub const fn from_vector(coord: Vector3D<T>) -> Self {
        Self { coord }
    }

    #[inline]
    pub fn x(&self) -> T {
        self.coord.x()
    }

    #[inline]
    pub fn y(&self) -> T {
        self.coord.y()
    }

    #[inline]
    pub fn z(&self) -> T {
        self.coord.z()
    }

    /// Returns all coordinates as tuple.
    #[inline]
    pub fn coords(&self) -> (T, T, T) {
        self.coord.coords()
    }

    /// Returns the position vector of this point.
    #[inline]
    pub const fn as_vector(&self) -> &Vector3D<T> {
        &self.coord
    }

    /// Computes distance to another point.
    #[inline]
    pub fn distance(&self, other: &Point3D<T>) -> T {
        self.coord.subtracted(&other.coord).modulus()
    }

    /// Returns true if distance to other point is <= tolerance.
    #[inline]
    pub fn is_equal(&self, other: &Point3D<T>, tolerance: T) -> bool {
        self.distance(other) <= tolerance
    }

    /// Returns this point moved by a vector.
    #[inline]
    pub fn translated(&self, v: &Vector3D<T>) -> Point3D<T> {
        Point3D::from_vector(self.coord.added(v))
    }
}

/// Vector from `other` to `self`.
impl<T: Float> Sub for Point3D<T> {
    type Output = Vector3D<T>;

    #[inline]
    fn sub(self, other: Point3D<T>) -> Vector3D<T> {
        self.coord.subtracted(&other.coord)
    }
}

impl<T: Float> Add<Vector3D<T>> for Point3D<T> {
    type Output = Point3D<T>;

    #[inline]
    fn add(self, v: Vector3D<T>) -> Point3D<T> {
        self.translated(&v)
    }
}

impl<T: Float> Sub<Vector3D<T>> for Point3D<T> {
    type Output = Point3D<T>;

    #[inline]
    fn sub(self, v: Vector3D<T>) -> Point3D<T> {
        self.translated(&v.reversed())
    }
}

impl<T: fmt::Display> fmt::Display for Point3D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.coord, f)
    }
}

impl<T: Float + AbsDiffEq<Epsilon = T>> AbsDiffEq for Point3D<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.coord.abs_diff_eq(&other.coord, epsilon)
    }
}

impl<T: Float + RelativeEq<Epsilon = T>> RelativeEq for Point3D<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.coord.relative_eq(&other.coord, epsilon, max_relative)
    }
}
