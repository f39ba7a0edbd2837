//! 3x3 matrix.
//!
//! `Matrix3D` is immutable: there are no setters, and every operation
//! returns a new matrix. Every matrix is built through a validating
//! constructor, so all nine fields are always finite. An operation that
//! manufactures a NaN or an infinity (division by zero, inverting a
//! singular matrix, overflow) fails with [`GeomError::InvalidMatrix`]
//! at the point the result is built.
//!
//! Operators mirror the named methods:
//!
//! | operator | method |
//! |---|---|
//! | `a + b` | [`Matrix3D::added`] |
//! | `a - b` | [`Matrix3D::subtracted`] |
//! | `a * s`, `s * a` | [`Matrix3D::scaled`] |
//! | `a * v` | [`Matrix3D::multiply_vector`] |
//! | `a * b` | [`Matrix3D::multiplied`] |
//! | `a / s` | [`Matrix3D::divided`] |
//! | `a ^ n` | [`Matrix3D::powered`] |
//!
//! Matrix-producing operators have `Output = Result<Matrix3D<T>>`.

use std::fmt;
use std::ops::{Add, BitXor, Div, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};
use num_traits::Float;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Vector3D;
use crate::precision;
use crate::{GeomError, Result};

/// Immutable 3x3 matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix3D<T> {
    // Row-major: data[i][j] is M(i+1)(j+1)
    data: [[T; 3]; 3],
}

impl<T: Float> Matrix3D<T> {
    /// Creates a matrix from its nine fields, row by row.
    ///
    /// Fails if any field is NaN or infinite.
    #[allow(clippy::too_many_arguments)]
    pub fn new(m11: T, m12: T, m13: T, m21: T, m22: T, m23: T, m31: T, m32: T, m33: T) -> Result<Self> {
        Self::from_array([[m11, m12, m13], [m21, m22, m23], [m31, m32, m33]])
    }

    /// Creates a matrix from a row-major array.
    pub fn from_array(data: [[T; 3]; 3]) -> Result<Self> {
        check(&data)?;
        Ok(Self { data })
    }

    /// Creates a matrix whose rows are the given vectors.
    pub fn from_rows(r1: Vector3D<T>, r2: Vector3D<T>, r3: Vector3D<T>) -> Result<Self> {
        Self::from_array([r1.into(), r2.into(), r3.into()])
    }

    /// Creates a matrix whose columns are the given vectors.
    pub fn from_columns(c1: Vector3D<T>, c2: Vector3D<T>, c3: Vector3D<T>) -> Result<Self> {
        Self::from_rows(c1, c2, c3).map(|m| m.transposed())
    }

    /// Creates identity matrix.
    pub fn identity() -> Self {
        let (o, l) = (T::zero(), T::one());
        Self {
            data: [[l, o, o], [o, l, o], [o, o, l]],
        }
    }

    /// Creates zero matrix.
    pub fn zero() -> Self {
        Self {
            data: [[T::zero(); 3]; 3],
        }
    }

    /// Gets value at (row, col). 1-indexed.
    /// Panics if either index is not in {1, 2, 3}.
    pub fn value(&self, row: usize, col: usize) -> T {
        assert!(
            (1..=3).contains(&row) && (1..=3).contains(&col),
            "Matrix3D::value: ({}, {}) out of range [1,3]",
            row,
            col
        );
        self.data[row - 1][col - 1]
    }

    /// Returns row `i` (1-indexed) as a vector.
    pub fn row(&self, i: usize) -> Vector3D<T> {
        Vector3D::from_coords(self.value(i, 1), self.value(i, 2), self.value(i, 3))
    }

    /// Returns column `j` (1-indexed) as a vector.
    pub fn column(&self, j: usize) -> Vector3D<T> {
        Vector3D::from_coords(self.value(1, j), self.value(2, j), self.value(3, j))
    }

    /// Returns the fields as a row-major array.
    pub fn to_array(&self) -> [[T; 3]; 3] {
        self.data
    }

    /// Returns transposed matrix.
    pub fn transposed(&self) -> Matrix3D<T> {
        let m = &self.data;
        Self {
            data: [
                [m[0][0], m[1][0], m[2][0]],
                [m[0][1], m[1][1], m[2][1]],
                [m[0][2], m[1][2], m[2][2]],
            ],
        }
    }

    /// Returns the matrix with every field negated.
    pub fn negated(&self) -> Matrix3D<T> {
        Self {
            data: self.data.map(|r| r.map(|v| -v)),
        }
    }

    /// Sum of the diagonal.
    pub fn trace(&self) -> T {
        self.data[0][0] + self.data[1][1] + self.data[2][2]
    }

    /// Component-wise sum.
    pub fn added(&self, other: &Matrix3D<T>) -> Result<Matrix3D<T>> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Component-wise difference.
    pub fn subtracted(&self, other: &Matrix3D<T>) -> Result<Matrix3D<T>> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Multiplies every field by `factor`.
    pub fn scaled(&self, factor: T) -> Result<Matrix3D<T>> {
        self.map(|v| factor * v)
    }

    /// Divides every field by `divisor`.
    ///
    /// Division by zero is not special-cased: it produces non-finite
    /// fields, which the constructor rejects.
    pub fn divided(&self, divisor: T) -> Result<Matrix3D<T>> {
        self.map(|v| v / divisor)
    }

    /// Applies the matrix as a linear map: component i of the result is
    /// row i dotted with `v`.
    pub fn multiply_vector(&self, v: &Vector3D<T>) -> Vector3D<T> {
        Vector3D::from_coords(self.row(1) | *v, self.row(2) | *v, self.row(3) | *v)
    }

    /// Matrix product `self * other`.
    pub fn multiplied(&self, other: &Matrix3D<T>) -> Result<Matrix3D<T>> {
        let rows = [self.row(1), self.row(2), self.row(3)];
        let cols = [other.column(1), other.column(2), other.column(3)];
        Self::from_array(rows.map(|r| cols.map(|c| r | c)))
    }

    /// Compound multiplication (`*=`). Returns the product; neither
    /// operand changes.
    pub fn multiply_assigned(&self, other: &Matrix3D<T>) -> Result<Matrix3D<T>> {
        self.multiplied(other)
    }

    /// Determinant, computed as the triple product of the columns:
    /// `c1 · (c2 × c3)`.
    pub fn determinant(&self) -> T {
        let (c1, c2, c3) = (self.column(1), self.column(2), self.column(3));
        c1 | (c2 * c3)
    }

    /// Inverse via the adjugate: the rows of the inverse are
    /// `c2 × c3`, `c3 × c1` and `c1 × c2`, divided by the determinant.
    ///
    /// Fails with `InvalidMatrix` when the determinant is zero.
    pub fn inverse(&self) -> Result<Matrix3D<T>> {
        let (c1, c2, c3) = (self.column(1), self.column(2), self.column(3));
        let adjugate = Self::from_rows(c2 * c3, c3 * c1, c1 * c2)?;
        adjugate.divided(self.determinant())
    }

    /// Integer power.
    ///
    /// * `-1` returns [`inverse`](Self::inverse).
    /// * below `-1` fails with `BadExponent`.
    /// * `0` returns the identity.
    /// * `n >= 1` returns the n-fold product, by square-and-multiply.
    pub fn powered(&self, exponent: i32) -> Result<Matrix3D<T>> {
        match exponent {
            -1 => self.inverse(),
            e if e < -1 => {
                tracing::debug!(exponent, "matrix power with exponent below -1");
                Err(GeomError::BadExponent(exponent))
            }
            0 => Ok(Self::identity()),
            e => {
                let mut n = e as u32;
                let mut base = *self;
                let mut acc: Option<Matrix3D<T>> = None;
                loop {
                    if n & 1 == 1 {
                        acc = Some(match acc {
                            None => base,
                            Some(m) => m.multiplied(&base)?,
                        });
                    }
                    n >>= 1;
                    if n == 0 {
                        break;
                    }
                    base = base.multiplied(&base)?;
                }
                Ok(acc.unwrap_or(base))
            }
        }
    }

    /// Returns true if every field differs from `other` by at most `tolerance`.
    pub fn is_equal(&self, other: &Matrix3D<T>, tolerance: T) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(a, b)| (*a - *b).abs() <= tolerance)
    }

    /// Returns true if the matrix is the identity within `CONFUSION`.
    pub fn is_identity(&self) -> bool {
        self.is_equal(&Self::identity(), precision::tolerance(precision::CONFUSION))
    }

    fn map(&self, f: impl Fn(T) -> T) -> Result<Matrix3D<T>> {
        Self::from_array(self.data.map(|r| r.map(&f)))
    }

    fn zip_with(&self, other: &Matrix3D<T>, f: impl Fn(T, T) -> T) -> Result<Matrix3D<T>> {
        let mut data = self.data;
        for (i, row) in data.iter_mut().enumerate() {
            for (j, v) in row.iter_mut().enumerate() {
                *v = f(*v, other.data[i][j]);
            }
        }
        Self::from_array(data)
    }
}

/// Rejects the first NaN or infinite field in row-major order.
fn check<T: Float>(data: &[[T; 3]; 3]) -> Result<()> {
    for (i, row) in data.iter().enumerate() {
        for (j, v) in row.iter().enumerate() {
            if !v.is_finite() {
                let (row, col) = (i + 1, j + 1);
                tracing::debug!(row, col, nan = v.is_nan(), "rejecting non-finite matrix field");
                return Err(GeomError::InvalidMatrix { row, col });
            }
        }
    }
    Ok(())
}

impl<T: Float> Default for Matrix3D<T> {
    fn default() -> Self {
        Self::identity()
    }
}

// Operator implementations

impl<T: Float> Add for Matrix3D<T> {
    type Output = Result<Matrix3D<T>>;

    fn add(self, other: Matrix3D<T>) -> Self::Output {
        self.added(&other)
    }
}

impl<T: Float> Sub for Matrix3D<T> {
    type Output = Result<Matrix3D<T>>;

    fn sub(self, other: Matrix3D<T>) -> Self::Output {
        self.subtracted(&other)
    }
}

impl<T: Float> Neg for Matrix3D<T> {
    type Output = Matrix3D<T>;

    fn neg(self) -> Matrix3D<T> {
        self.negated()
    }
}

impl<T: Float> Mul<T> for Matrix3D<T> {
    type Output = Result<Matrix3D<T>>;

    fn mul(self, factor: T) -> Self::Output {
        self.scaled(factor)
    }
}

impl<T: Float> Mul<Vector3D<T>> for Matrix3D<T> {
    type Output = Vector3D<T>;

    fn mul(self, v: Vector3D<T>) -> Vector3D<T> {
        self.multiply_vector(&v)
    }
}

impl<T: Float> Mul for Matrix3D<T> {
    type Output = Result<Matrix3D<T>>;

    fn mul(self, other: Matrix3D<T>) -> Self::Output {
        self.multiplied(&other)
    }
}

impl<T: Float> Div<T> for Matrix3D<T> {
    type Output = Result<Matrix3D<T>>;

    fn div(self, divisor: T) -> Self::Output {
        self.divided(divisor)
    }
}

impl<T: Float> BitXor<i32> for Matrix3D<T> {
    type Output = Result<Matrix3D<T>>;

    fn bitxor(self, exponent: i32) -> Self::Output {
        self.powered(exponent)
    }
}

macro_rules! impl_scalar_mul_matrix {
    ($($t:ty),*) => {$(
        impl Mul<Matrix3D<$t>> for $t {
            type Output = Result<Matrix3D<$t>>;

            fn mul(self, m: Matrix3D<$t>) -> Self::Output {
                m.scaled(self)
            }
        }
    )*};
}

impl_scalar_mul_matrix!(f32, f64);

impl<T: Float> TryFrom<[[T; 3]; 3]> for Matrix3D<T> {
    type Error = GeomError;

    fn try_from(data: [[T; 3]; 3]) -> Result<Self> {
        Self::from_array(data)
    }
}

impl<T: Float + nalgebra::Scalar> From<Matrix3D<T>> for nalgebra::Matrix3<T> {
    fn from(m: Matrix3D<T>) -> Self {
        let d = &m.data;
        nalgebra::Matrix3::new(
            d[0][0], d[0][1], d[0][2],
            d[1][0], d[1][1], d[1][2],
            d[2][0], d[2][1], d[2][2],
        )
    }
}

impl<T: Float + nalgebra::Scalar> TryFrom<nalgebra::Matrix3<T>> for Matrix3D<T> {
    type Error = GeomError;

    fn try_from(m: nalgebra::Matrix3<T>) -> Result<Self> {
        Self::from_array(std::array::from_fn(|i| std::array::from_fn(|j| m[(i, j)])))
    }
}

impl<T: Serialize> Serialize for Matrix3D<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.data.serialize(serializer)
    }
}

impl<'de, T: Float + Deserialize<'de>> Deserialize<'de> for Matrix3D<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let data = <[[T; 3]; 3]>::deserialize(deserializer)?;
        Self::from_array(data).map_err(serde::de::Error::custom)
    }
}

impl<T: fmt::Display> fmt::Display for Matrix3D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = f.width().unwrap_or(precision::PRINT_WIDTH);
        for [a, b, c] in &self.data {
            write!(f, "\n    [{:>w$}    {:>w$}    {:>w$}]", a, b, c, w = w)?;
        }
        Ok(())
    }
}

impl<T: Float + AbsDiffEq<Epsilon = T>> AbsDiffEq for Matrix3D<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        (1..=3).all(|i| self.row(i).abs_diff_eq(&other.row(i), epsilon))
    }
}

impl<T: Float + RelativeEq<Epsilon = T>> RelativeEq for Matrix3D<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        (1..=3).all(|i| self.row(i).relative_eq(&other.row(i), epsilon, max_relative))
    }
}
