//! 3D vector.
//!
//! The fundamental coordinate triplet of the crate. `Point3D` and the
//! rows/columns of `Matrix3D` are all built on it.
//!
//! Operators follow the crate's algebra: `a | b` is the dot product and
//! `a * b` the cross product.

use std::fmt;
use std::ops::{Add, BitOr, Div, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// 3D cartesian vector {X, Y, Z}.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3D<T> {
    x: T,
    y: T,
    z: T,
}

impl<T: Float> Vector3D<T> {
    /// Creates a null vector (0, 0, 0).
    #[inline]
    pub fn new() -> Self {
        Self::from_coords(T::zero(), T::zero(), T::zero())
    }

    /// Creates a vector with given coordinates.
    #[inline]
    pub const fn from_coords(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Returns the X coordinate.
    #[inline]
    pub fn x(&self) -> T {
        self.x
    }

    /// Returns the Y coordinate.
    #[inline]
    pub fn y(&self) -> T {
        self.y
    }

    /// Returns the Z coordinate.
    #[inline]
    pub fn z(&self) -> T {
        self.z
    }

    /// Returns all three coordinates as a tuple.
    #[inline]
    pub fn coords(&self) -> (T, T, T) {
        (self.x, self.y, self.z)
    }

    /// Computes the modulus (length) of the vector.
    #[inline]
    pub fn modulus(&self) -> T {
        self.square_modulus().sqrt()
    }

    /// Computes the square of the modulus.
    #[inline]
    pub fn square_modulus(&self) -> T {
        self.dot(self)
    }

    /// Returns true if the distance between the two vectors is <= tolerance.
    #[inline]
    pub fn is_equal(&self, other: &Vector3D<T>, tolerance: T) -> bool {
        self.subtracted(other).modulus() <= tolerance
    }

    /// Returns sum of this and other vector.
    #[inline]
    pub fn added(&self, other: &Vector3D<T>) -> Vector3D<T> {
        Vector3D::from_coords(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Returns difference of this and other vector.
    #[inline]
    pub fn subtracted(&self, other: &Vector3D<T>) -> Vector3D<T> {
        Vector3D::from_coords(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Returns this multiplied by scalar.
    #[inline]
    pub fn multiplied(&self, scalar: T) -> Vector3D<T> {
        Vector3D::from_coords(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    /// Returns this divided by scalar. No check for zero.
    #[inline]
    pub fn divided(&self, scalar: T) -> Vector3D<T> {
        Vector3D::from_coords(self.x / scalar, self.y / scalar, self.z / scalar)
    }

    /// Returns reversed vector.
    #[inline]
    pub fn reversed(&self) -> Vector3D<T> {
        Vector3D::from_coords(-self.x, -self.y, -self.z)
    }

    /// Computes dot product.
    #[inline]
    pub fn dot(&self, other: &Vector3D<T>) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns cross product.
    #[inline]
    pub fn crossed(&self, other: &Vector3D<T>) -> Vector3D<T> {
        Vector3D::from_coords(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Computes triple scalar product (self · (v1 × v2)).
    #[inline]
    pub fn dot_cross(&self, v1: &Vector3D<T>, v2: &Vector3D<T>) -> T {
        self.dot(&v1.crossed(v2))
    }
}

// Operator implementations

impl<T: Float> Add for Vector3D<T> {
    type Output = Vector3D<T>;

    #[inline]
    fn add(self, other: Vector3D<T>) -> Vector3D<T> {
        self.added(&other)
    }
}

impl<T: Float> Sub for Vector3D<T> {
    type Output = Vector3D<T>;

    #[inline]
    fn sub(self, other: Vector3D<T>) -> Vector3D<T> {
        self.subtracted(&other)
    }
}

impl<T: Float> Neg for Vector3D<T> {
    type Output = Vector3D<T>;

    #[inline]
    fn neg(self) -> Vector3D<T> {
        self.reversed()
    }
}

/// Dot product.
impl<T: Float> BitOr for Vector3D<T> {
    type Output = T;

    #[inline]
    fn bitor(self, other: Vector3D<T>) -> T {
        self.dot(&other)
    }
}

/// Cross product.
impl<T: Float> Mul for Vector3D<T> {
    type Output = Vector3D<T>;

    #[inline]
    fn mul(self, other: Vector3D<T>) -> Vector3D<T> {
        self.crossed(&other)
    }
}

impl<T: Float> Mul<T> for Vector3D<T> {
    type Output = Vector3D<T>;

    #[inline]
    fn mul(self, scalar: T) -> Vector3D<T> {
        self.multiplied(scalar)
    }
}

impl<T: Float> Div<T> for Vector3D<T> {
    type Output = Vector3D<T>;

    #[inline]
    fn div(self, scalar: T) -> Vector3D<T> {
        self.divided(scalar)
    }
}

macro_rules! impl_scalar_mul_vector {
    ($($t:ty),*) => {$(
        impl Mul<Vector3D<$t>> for $t {
            type Output = Vector3D<$t>;

            #[inline]
            fn mul(self, v: Vector3D<$t>) -> Vector3D<$t> {
                v.multiplied(self)
            }
        }
    )*};
}

impl_scalar_mul_vector!(f32, f64);

impl<T: Float> From<[T; 3]> for Vector3D<T> {
    #[inline]
    fn from(arr: [T; 3]) -> Self {
        Self::from_coords(arr[0], arr[1], arr[2])
    }
}

impl<T: Float> From<Vector3D<T>> for [T; 3] {
    #[inline]
    fn from(v: Vector3D<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

impl<T: Float + nalgebra::Scalar> From<nalgebra::Vector3<T>> for Vector3D<T> {
    fn from(v: nalgebra::Vector3<T>) -> Self {
        Self::from_coords(v.x, v.y, v.z)
    }
}

impl<T: Float + nalgebra::Scalar> From<Vector3D<T>> for nalgebra::Vector3<T> {
    fn from(v: Vector3D<T>) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

impl<T: fmt::Display> fmt::Display for Vector3D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl<T: Float + AbsDiffEq<Epsilon = T>> AbsDiffEq for Vector3D<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl<T: Float + RelativeEq<Epsilon = T>> RelativeEq for Vector3D<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}
