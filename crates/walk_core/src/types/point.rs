//! Integer lattice positions.

use std::fmt;

use serde::{Serialize, Serializer};

use super::Displacement;

/// A position on the `N`-dimensional integer lattice.
///
/// Points are immutable; [`Point::step`] returns a new point rather than
/// mutating in place, so a trajectory is an append-only sequence of
/// distinct values.
///
/// # Examples
/// ```
/// use walk_core::{Displacement, Point};
///
/// let origin: Point<2> = Point::origin();
/// let next = origin.step(Displacement::positive(0));
/// assert_eq!(next.coords(), [1, 0]);
/// assert_eq!(origin.coords(), [0, 0]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point<const N: usize>([i64; N]);

impl<const N: usize> Serialize for Point<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_newtype_struct("Point", &self.0[..])
    }
}

impl<const N: usize> Point<N> {
    /// The all-zero origin.
    #[inline]
    pub const fn origin() -> Self {
        Self([0; N])
    }

    /// A point with the given coordinates.
    #[inline]
    pub const fn new(coords: [i64; N]) -> Self {
        Self(coords)
    }

    /// Returns the coordinate array.
    #[inline]
    pub const fn coords(&self) -> [i64; N] {
        self.0
    }

    /// Returns the point reached by applying `displacement` to `self`.
    #[inline]
    pub fn step(&self, displacement: Displacement<N>) -> Self {
        let mut coords = self.0;
        for (coord, delta) in coords.iter_mut().zip(displacement.components()) {
            *coord += delta;
        }
        Self(coords)
    }

    /// Euclidean distance to `other`.
    ///
    /// The distance is reported as a real number for the summary layer.
    /// Termination checks compare coordinates for equality instead, so the
    /// floating-point norm never decides whether a target was reached.
    #[inline]
    pub fn distance_to(&self, other: &Self) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| {
                let d = (a - b) as f64;
                d * d
            })
            .sum::<f64>()
            .sqrt()
    }
}

impl<const N: usize> Default for Point<N> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<const N: usize> fmt::Display for Point<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}
