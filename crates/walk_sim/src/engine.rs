//! Walk loops: unconditional 1D walks and target-seeking 2D/3D walks.
//!
//! Both loops start a trajectory at the origin and append one new
//! position per consumed sample, so `steps == trajectory.len() - 1`
//! holds for every result by construction. Stream exhaustion is a normal
//! termination condition here, never an error; a sample outside [0, 1]
//! aborts the run with the mapper's [`SampleError`].

use walk_core::{Displacement, Point, SampleError, StreamError};

use crate::mapper;
use crate::stream::SampleStream;
use crate::summary::{Termination, WalkResult};

/// Walks the number line until the stream is exhausted.
///
/// Every sample maps to a ±1 jump and the cumulative position is appended
/// to the trajectory. There is no target; the walk always terminates with
/// [`Termination::StreamExhausted`].
///
/// # Errors
///
/// Returns [`SampleError::OutOfRange`] if any sample lies outside [0, 1];
/// the run is abandoned at that sample.
///
/// # Examples
///
/// ```rust
/// use walk_sim::{walk_line, SampleStream};
///
/// let mut stream = SampleStream::from_values(vec![0.7, 0.7, 0.1]);
/// let result = walk_line(&mut stream).unwrap();
///
/// assert_eq!(result.steps(), 3);
/// assert_eq!(result.final_position().coords(), [1]);
/// ```
pub fn walk_line(stream: &mut SampleStream) -> Result<WalkResult<1>, SampleError> {
    let mut trajectory = Vec::with_capacity(stream.remaining() + 1);
    let mut current: Point<1> = Point::origin();
    trajectory.push(current);

    loop {
        let sample = match stream.next_sample() {
            Ok(sample) => sample,
            Err(StreamError::Exhausted) => break,
        };
        current = current.step(mapper::map_line(sample)?);
        trajectory.push(current);
    }

    Ok(WalkResult::new(trajectory, Termination::StreamExhausted))
}

/// Walks from the origin toward `target`, one sample per step.
///
/// The loop continues while the current position differs from the target
/// and the stream still has samples. Reaching the target is detected by
/// exact integer coordinate equality, so the floating-point norm reported
/// elsewhere can never produce a false termination.
///
/// If the target equals the origin, zero steps are taken and the walk
/// reports [`Termination::ReachedTarget`] immediately.
///
/// # Errors
///
/// Returns [`SampleError::OutOfRange`] if any sample lies outside [0, 1].
///
/// # Examples
///
/// ```rust
/// use walk_core::Point;
/// use walk_sim::{map_plane, walk_to_target, SampleStream, Termination};
///
/// // 0.1 maps to +X, reaching (1, 0) in a single jump.
/// let mut stream = SampleStream::from_values(vec![0.1]);
/// let result = walk_to_target(&mut stream, Point::new([1, 0]), map_plane).unwrap();
///
/// assert_eq!(result.termination(), Termination::ReachedTarget);
/// assert_eq!(result.steps(), 1);
/// ```
pub fn walk_to_target<const N: usize, M>(
    stream: &mut SampleStream,
    target: Point<N>,
    mut map_step: M,
) -> Result<WalkResult<N>, SampleError>
where
    M: FnMut(f64) -> Result<Displacement<N>, SampleError>,
{
    let mut current: Point<N> = Point::origin();
    let mut trajectory = vec![current];

    while current != target {
        let sample = match stream.next_sample() {
            Ok(sample) => sample,
            Err(StreamError::Exhausted) => {
                return Ok(WalkResult::new(trajectory, Termination::StreamExhausted));
            }
        };
        current = current.step(map_step(sample)?);
        trajectory.push(current);
    }

    Ok(WalkResult::new(trajectory, Termination::ReachedTarget))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::{map_plane, map_space};

    #[test]
    fn test_line_trajectory_length() {
        let values: Vec<f64> = vec![0.0, 0.9, 0.4, 0.6, 0.5];
        let mut stream = SampleStream::from_values(values.clone());
        let result = walk_line(&mut stream).unwrap();

        assert_eq!(result.trajectory().len(), values.len() + 1);
        assert_eq!(result.steps(), values.len());
        assert_eq!(result.trajectory()[0], Point::origin());
    }

    #[test]
    fn test_line_cumulative_positions() {
        // -1, +1, +1 → positions 0, -1, 0, 1
        let mut stream = SampleStream::from_values(vec![0.2, 0.8, 0.9]);
        let result = walk_line(&mut stream).unwrap();

        let positions: Vec<i64> = result.trajectory().iter().map(|p| p.coords()[0]).collect();
        assert_eq!(positions, vec![0, -1, 0, 1]);
    }

    #[test]
    fn test_line_out_of_range_sample_aborts() {
        let mut stream = SampleStream::from_values(vec![0.3, 1.7, 0.3]);
        let err = walk_line(&mut stream).unwrap_err();
        assert_eq!(err, SampleError::OutOfRange { value: 1.7 });
    }

    #[test]
    fn test_target_at_origin_takes_no_steps() {
        let mut stream = SampleStream::from_values(vec![0.1, 0.2, 0.3]);
        let result = walk_to_target(&mut stream, Point::<2>::origin(), map_plane).unwrap();

        assert_eq!(result.termination(), Termination::ReachedTarget);
        assert_eq!(result.steps(), 0);
        assert_eq!(result.trajectory(), &[Point::origin()]);
        // No samples were consumed.
        assert_eq!(stream.remaining(), 3);
    }

    #[test]
    fn test_single_step_to_target() {
        let mut stream = SampleStream::from_values(vec![0.1]);
        let result = walk_to_target(&mut stream, Point::new([1, 0]), map_plane).unwrap();

        assert_eq!(result.termination(), Termination::ReachedTarget);
        assert_eq!(result.steps(), 1);
        assert_eq!(result.final_position(), Point::new([1, 0]));
    }

    #[test]
    fn test_empty_stream_exhausts_immediately() {
        let mut stream = SampleStream::from_values(Vec::new());
        let result = walk_to_target(&mut stream, Point::new([5, 5]), map_plane).unwrap();

        assert_eq!(result.termination(), Termination::StreamExhausted);
        assert_eq!(result.steps(), 0);
        assert_eq!(result.trajectory(), &[Point::origin()]);
    }

    #[test]
    fn test_exhaustion_before_target() {
        // Two +X steps cannot reach (5, 0).
        let mut stream = SampleStream::from_values(vec![0.1, 0.1]);
        let result = walk_to_target(&mut stream, Point::new([5, 0]), map_plane).unwrap();

        assert_eq!(result.termination(), Termination::StreamExhausted);
        assert_eq!(result.steps(), 2);
        assert_eq!(result.final_position(), Point::new([2, 0]));
    }

    #[test]
    fn test_space_walk_reaches_target() {
        // +X, +Y, +Z in the literal partition order.
        let mut stream = SampleStream::from_values(vec![0.1, 0.4, 0.7]);
        let result = walk_to_target(&mut stream, Point::new([1, 1, 1]), map_space).unwrap();

        assert_eq!(result.termination(), Termination::ReachedTarget);
        assert_eq!(result.steps(), 3);
    }

    #[test]
    fn test_target_walk_out_of_range_sample_aborts() {
        let mut stream = SampleStream::from_values(vec![0.1, -3.0]);
        let err = walk_to_target(&mut stream, Point::new([9, 9]), map_plane).unwrap_err();
        assert_eq!(err, SampleError::OutOfRange { value: -3.0 });
    }

    #[test]
    fn test_steps_invariant_holds() {
        let mut stream = SampleStream::from_values(vec![0.1, 0.6, 0.3, 0.8]);
        let result = walk_to_target(&mut stream, Point::new([7, 7]), map_plane).unwrap();
        assert_eq!(result.steps(), result.trajectory().len() - 1);
    }
}
