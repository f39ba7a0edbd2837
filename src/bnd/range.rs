//! 1D Range

use std::fmt;

use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Closed scalar interval [low, high].
///
/// `low <= high` is expected but not enforced; see [`Range::is_valid`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Range<T> {
    low: T,
    high: T,
}

impl<T: Float> Range<T> {
    /// Creates a range [low, high]
    pub const fn new(low: T, high: T) -> Self {
        Range { low, high }
    }

    /// Returns the lower bound
    pub fn low(&self) -> T {
        self.low
    }

    /// Returns the upper bound
    pub fn high(&self) -> T {
        self.high
    }

    /// Returns (low, high)
    pub fn bounds(&self) -> (T, T) {
        (self.low, self.high)
    }

    /// Returns true if low <= high
    pub fn is_valid(&self) -> bool {
        self.low <= self.high
    }

    /// Returns the delta (high - low)
    pub fn delta(&self) -> T {
        self.high - self.low
    }

    /// Returns the center of the range
    pub fn center(&self) -> T {
        (self.low + self.high) / (T::one() + T::one())
    }

    /// Returns true if this range contains a value
    pub fn contains(&self, val: T) -> bool {
        val >= self.low && val <= self.high
    }
}

impl<T: fmt::Display> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}
