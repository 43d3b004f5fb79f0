//! Single-axis unit steps.

use std::fmt;

use serde::{Serialize, Serializer};

/// A unit step along one coordinate axis.
///
/// Exactly one component is ±1 and all others are 0. Displacements are
/// produced by the step mappers and applied to [`Point`](super::Point)
/// values; they are never constructed from raw sample data directly.
///
/// # Examples
/// ```
/// use walk_core::Displacement;
///
/// let east: Displacement<2> = Displacement::positive(0);
/// assert_eq!(east.components(), [1, 0]);
///
/// let down: Displacement<3> = Displacement::negative(2);
/// assert_eq!(down.components(), [0, 0, -1]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Displacement<const N: usize>([i64; N]);

impl<const N: usize> Serialize for Displacement<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_newtype_struct("Displacement", &self.0[..])
    }
}

impl<const N: usize> Displacement<N> {
    /// A +1 step along `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= N`.
    #[inline]
    pub fn positive(axis: usize) -> Self {
        Self::unit(axis, 1)
    }

    /// A −1 step along `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= N`.
    #[inline]
    pub fn negative(axis: usize) -> Self {
        Self::unit(axis, -1)
    }

    fn unit(axis: usize, sign: i64) -> Self {
        assert!(axis < N, "axis {} out of range for {} components", axis, N);
        let mut components = [0_i64; N];
        components[axis] = sign;
        Self(components)
    }

    /// Returns the component array.
    #[inline]
    pub fn components(&self) -> [i64; N] {
        self.0
    }
}

impl<const N: usize> fmt::Display for Displacement<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:+}", c)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_nonzero_component() {
        let d: Displacement<3> = Displacement::positive(1);
        let nonzero = d.components().iter().filter(|&&c| c != 0).count();
        assert_eq!(nonzero, 1);
        assert_eq!(d.components()[1], 1);
    }

    #[test]
    fn test_negative_step() {
        let d: Displacement<2> = Displacement::negative(1);
        assert_eq!(d.components(), [0, -1]);
    }

    #[test]
    #[should_panic(expected = "axis 2 out of range")]
    fn test_axis_out_of_range_panics() {
        let _: Displacement<2> = Displacement::positive(2);
    }

    #[test]
    fn test_display() {
        let d: Displacement<2> = Displacement::negative(0);
        assert_eq!(d.to_string(), "(-1, +0)");
    }
}
