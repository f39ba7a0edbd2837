//! 3D axis-aligned range
//!
//! Three independent per-axis intervals. Used as the bounding box of a
//! surface.

use std::fmt;

use num_traits::Float;
use serde::{Deserialize, Serialize};

use super::Range;
use crate::gp::Point3D;

/// Axis-aligned box described by one interval per axis
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Range3D<T> {
    x: Range<T>,
    y: Range<T>,
    z: Range<T>,
}

impl<T: Float> Range3D<T> {
    /// Creates a box from its three axis ranges
    pub const fn new(x: Range<T>, y: Range<T>, z: Range<T>) -> Self {
        Range3D { x, y, z }
    }

    pub fn x(&self) -> Range<T> {
        self.x
    }

    pub fn y(&self) -> Range<T> {
        self.y
    }

    pub fn z(&self) -> Range<T> {
        self.z
    }

    /// Returns true if every axis range has low <= high
    pub fn is_valid(&self) -> bool {
        self.x.is_valid() && self.y.is_valid() && self.z.is_valid()
    }

    /// Returns true if the point lies inside or on the box
    pub fn contains(&self, p: &Point3D<T>) -> bool {
        self.x.contains(p.x()) && self.y.contains(p.y()) && self.z.contains(p.z())
    }
}

impl<T: fmt::Display> fmt::Display for Range3D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ x: {}, y: {}, z: {} }}", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> Range3D<f64> {
        Range3D::new(Range::new(0.0, 1.0), Range::new(0.0, 1.0), Range::new(0.0, 1.0))
    }

    #[test]
    fn test_box_axes() {
        let b = Range3D::new(Range::new(-1.0, 1.0), Range::new(-2.0, 2.0), Range::new(-3.0, 3.0));
        assert_eq!(b.x(), Range::new(-1.0, 1.0));
        assert_eq!(b.y().delta(), 4.0);
        assert_eq!(b.z().center(), 0.0);
        assert!(b.is_valid());
    }

    #[test]
    fn test_box_contains() {
        let b = unit();
        assert!(b.contains(&Point3D::from_coords(0.5, 0.5, 0.5)));
        assert!(b.contains(&Point3D::from_coords(1.0, 0.0, 1.0)));
        assert!(!b.contains(&Point3D::from_coords(0.5, 0.5, 1.5)));
    }

    #[test]
    fn test_box_invalid_axis() {
        let b = Range3D::new(Range::new(0.0, 1.0), Range::new(1.0, 0.0), Range::new(0.0, 1.0));
        assert!(!b.is_valid());
    }

    #[test]
    fn test_box_display() {
        assert_eq!(unit().to_string(), "{ x: [0, 1], y: [0, 1], z: [0, 1] }");
    }
}
