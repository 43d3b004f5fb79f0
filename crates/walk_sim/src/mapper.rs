//! Partition tables mapping uniform samples to unit steps.
//!
//! Each mapper splits the unit interval into contiguous, non-overlapping
//! partitions that together cover exactly [0, 1]; the final partition is
//! closed on both ends so a sample of exactly 1.0 still maps. A value
//! outside [0, 1] violates the input contract and fails with
//! [`SampleError::OutOfRange`] instead of defaulting to any direction.
//!
//! The 3D boundaries are the literal 0.167 / 0.333 / 0.5 / 0.667 / 0.833
//! edges, not exact sixths; the observed partition edges are the contract.

use walk_core::{Displacement, SampleError};

/// Maps a sample to a ±1 step on the number line.
///
/// [0, 0.5) → −1; [0.5, 1] → +1.
///
/// # Errors
///
/// Returns [`SampleError::OutOfRange`] if `value` lies outside [0, 1].
///
/// # Examples
///
/// ```rust
/// use walk_sim::map_line;
///
/// assert_eq!(map_line(0.49).unwrap().components(), [-1]);
/// assert_eq!(map_line(0.5).unwrap().components(), [1]);
/// assert!(map_line(1.5).is_err());
/// ```
pub fn map_line(value: f64) -> Result<Displacement<1>, SampleError> {
    check_unit_interval(value)?;
    if value < 0.5 {
        Ok(Displacement::negative(0))
    } else {
        Ok(Displacement::positive(0))
    }
}

/// Maps a sample to a unit step on the plane.
///
/// Four width-0.25 partitions map, in boundary order, to +X, +Y, −X, −Y.
///
/// # Errors
///
/// Returns [`SampleError::OutOfRange`] if `value` lies outside [0, 1].
pub fn map_plane(value: f64) -> Result<Displacement<2>, SampleError> {
    check_unit_interval(value)?;
    let displacement = if value < 0.25 {
        Displacement::positive(0)
    } else if value < 0.5 {
        Displacement::positive(1)
    } else if value < 0.75 {
        Displacement::negative(0)
    } else {
        Displacement::negative(1)
    };
    Ok(displacement)
}

/// Maps a sample to a unit step in three-dimensional space.
///
/// Partition boundaries at 0.167, 0.333, 0.5, 0.667 and 0.833 map, in
/// order, to +X, −X, +Y, −Y, +Z, −Z.
///
/// # Errors
///
/// Returns [`SampleError::OutOfRange`] if `value` lies outside [0, 1].
pub fn map_space(value: f64) -> Result<Displacement<3>, SampleError> {
    check_unit_interval(value)?;
    let displacement = if value < 0.167 {
        Displacement::positive(0)
    } else if value < 0.333 {
        Displacement::negative(0)
    } else if value < 0.5 {
        Displacement::positive(1)
    } else if value < 0.667 {
        Displacement::negative(1)
    } else if value < 0.833 {
        Displacement::positive(2)
    } else {
        Displacement::negative(2)
    };
    Ok(displacement)
}

#[inline]
fn check_unit_interval(value: f64) -> Result<(), SampleError> {
    // NaN fails the range test and is rejected with the same error.
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SampleError::OutOfRange { value })
    }
}
