//! One-axis bounding extent tracking.
//!
//! An [`Extent`] is the running (min, max) pair along a single coordinate
//! axis. It starts at the (+infinity, -infinity) sentinel and only ever
//! tightens as points are folded in, so `min <= max` holds as soon as one
//! value has been observed.

use std::fmt;

/// Running minimum/maximum along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    /// Smallest coordinate seen so far
    pub min: f64,
    /// Largest coordinate seen so far
    pub max: f64,
}

impl Extent {
    /// The empty extent: nothing observed yet.
    pub const EMPTY: Extent = Extent {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    /// Extent covering a single value.
    pub fn from_value(value: f64) -> Self {
        Extent {
            min: value,
            max: value,
        }
    }

    /// Extent covering `center - radius .. center + radius`.
    pub fn from_center_radius(center: f64, radius: f64) -> Self {
        Extent {
            min: center - radius,
            max: center + radius,
        }
    }

    /// Fold one value into the extent.
    pub fn include(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Merge with another extent, returning the union.
    pub fn merge(&self, other: &Extent) -> Extent {
        Extent {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// True while the initial sentinel is still in place, meaning no
    /// value has been observed on this axis.
    pub fn is_empty(&self) -> bool {
        self.min == f64::INFINITY || self.max == f64::NEG_INFINITY
    }

    /// The covered distance `max - min`, or 0.0 for an empty extent.
    ///
    /// The sentinel check must happen before the subtraction: the
    /// difference of the infinity seeds is not a usable dimension.
    pub fn span(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.max - self.min
    }
}

impl Default for Extent {
    fn default() -> Self {
        Extent::EMPTY
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "Extent[empty]")
        } else {
            write!(f, "Extent[{} -> {}]", self.min, self.max)
        }
    }
}
