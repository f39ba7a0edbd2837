//! Bounding ranges
//! Provides 1D intervals and 3D axis-aligned boxes built from them

pub mod box_3d;
pub mod range;

pub use self::box_3d::Range3D;
pub use self::range::Range;
