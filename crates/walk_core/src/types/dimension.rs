//! Supported walk dimensionalities.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Dimensionality of a walk.
///
/// The simulator supports walks on the number line, the plane, and
/// three-dimensional space. The variant selects which step mapper and
/// engine mode drive the run.
///
/// # Examples
/// ```
/// use walk_core::Dimension;
///
/// assert_eq!(Dimension::Two.axes(), 2);
/// assert_eq!(Dimension::from_axes(3), Some(Dimension::Three));
/// assert_eq!(Dimension::from_axes(4), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Walk on the number line.
    One,
    /// Walk on the integer plane.
    Two,
    /// Walk in three-dimensional integer space.
    Three,
}

impl Dimension {
    /// Returns the number of coordinate axes.
    #[inline]
    pub const fn axes(self) -> usize {
        match self {
            Dimension::One => 1,
            Dimension::Two => 2,
            Dimension::Three => 3,
        }
    }

    /// Maps an axis count to a dimension, if supported.
    #[inline]
    pub const fn from_axes(axes: usize) -> Option<Self> {
        match axes {
            1 => Some(Dimension::One),
            2 => Some(Dimension::Two),
            3 => Some(Dimension::Three),
            _ => None,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D", self.axes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axes_round_trip() {
        for dim in [Dimension::One, Dimension::Two, Dimension::Three] {
            assert_eq!(Dimension::from_axes(dim.axes()), Some(dim));
        }
    }

    #[test]
    fn test_unsupported_axis_counts() {
        assert_eq!(Dimension::from_axes(0), None);
        assert_eq!(Dimension::from_axes(4), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Dimension::One.to_string(), "1D");
        assert_eq!(Dimension::Three.to_string(), "3D");
    }
}
