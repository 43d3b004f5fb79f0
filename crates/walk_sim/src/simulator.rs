//! Simulation orchestration: explicit run configuration and timing.

use std::time::Instant;

use tracing::{debug, info};

use walk_core::{Dimension, Point, SampleError};

use crate::engine;
use crate::mapper;
use crate::stream::SampleStream;
use crate::summary::WalkSummary;

/// Explicit configuration for one simulation run.
///
/// Dimensionality, target, and stream source all arrive through the call
/// site; the engine holds no ambient state between runs.
///
/// # Examples
///
/// ```rust
/// use walk_core::Point;
/// use walk_sim::SimulationSpec;
///
/// let spec = SimulationSpec::Space {
///     target: Point::new([45, 23, 17]),
/// };
/// assert_eq!(spec.dimension().axes(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulationSpec {
    /// Unconditional walk on the number line; consumes the whole stream.
    Line,
    /// Target-seeking walk on the plane.
    Plane {
        /// The destination position.
        target: Point<2>,
    },
    /// Target-seeking walk in three-dimensional space.
    Space {
        /// The destination position.
        target: Point<3>,
    },
}

impl SimulationSpec {
    /// Dimensionality of the configured walk.
    #[inline]
    pub fn dimension(&self) -> Dimension {
        match self {
            SimulationSpec::Line => Dimension::One,
            SimulationSpec::Plane { .. } => Dimension::Two,
            SimulationSpec::Space { .. } => Dimension::Three,
        }
    }
}

/// Runs one simulation and packages the summary for the rendering sink.
///
/// The elapsed time wraps exactly the walk loop; stream construction and
/// any downstream rendering are excluded from the measurement.
///
/// # Errors
///
/// Returns [`SampleError::OutOfRange`] if the stream yields a sample
/// outside [0, 1]; the run is reported to the caller, not retried.
///
/// # Examples
///
/// ```rust
/// use walk_core::Point;
/// use walk_sim::{run_simulation, SampleStream, SimulationSpec, Termination};
///
/// let mut stream = SampleStream::from_values(vec![0.1]);
/// let spec = SimulationSpec::Plane {
///     target: Point::new([1, 0]),
/// };
/// let summary = run_simulation(&spec, &mut stream).unwrap();
/// assert_eq!(summary.termination, Termination::ReachedTarget);
/// ```
pub fn run_simulation(
    spec: &SimulationSpec,
    stream: &mut SampleStream,
) -> Result<WalkSummary, SampleError> {
    info!(
        dimension = %spec.dimension(),
        samples = stream.remaining(),
        "starting walk"
    );

    let summary = match spec {
        SimulationSpec::Line => {
            let started = Instant::now();
            let result = engine::walk_line(stream)?;
            let elapsed = started.elapsed();
            WalkSummary::from_line_walk(&result, elapsed)
        }
        SimulationSpec::Plane { target } => {
            let started = Instant::now();
            let result = engine::walk_to_target(stream, *target, mapper::map_plane)?;
            let elapsed = started.elapsed();
            WalkSummary::from_target_walk(Dimension::Two, &result, *target, elapsed)
        }
        SimulationSpec::Space { target } => {
            let started = Instant::now();
            let result = engine::walk_to_target(stream, *target, mapper::map_space)?;
            let elapsed = started.elapsed();
            WalkSummary::from_target_walk(Dimension::Three, &result, *target, elapsed)
        }
    };

    debug!(unused_samples = stream.remaining(), "stream cursor after walk");
    info!(
        steps = summary.steps,
        termination = ?summary.termination,
        elapsed_seconds = summary.elapsed_seconds,
        "walk finished"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::Termination;

    #[test]
    fn test_line_spec_consumes_whole_stream() {
        let mut stream = SampleStream::from_values(vec![0.9; 10]);
        let summary = run_simulation(&SimulationSpec::Line, &mut stream).unwrap();

        assert_eq!(summary.steps, 10);
        assert_eq!(summary.termination, Termination::StreamExhausted);
        assert_eq!(summary.final_position, vec![10]);
        assert!(!stream.has_next());
    }

    #[test]
    fn test_plane_spec_stops_at_target() {
        // Two +X jumps reach (2, 0); the third sample is left unread.
        let mut stream = SampleStream::from_values(vec![0.1, 0.1, 0.1]);
        let spec = SimulationSpec::Plane {
            target: Point::new([2, 0]),
        };
        let summary = run_simulation(&spec, &mut stream).unwrap();

        assert_eq!(summary.termination, Termination::ReachedTarget);
        assert_eq!(summary.steps, 2);
        assert_eq!(stream.remaining(), 1);
    }

    #[test]
    fn test_space_spec_summary_shape() {
        let mut stream = SampleStream::from_values(vec![0.9, 0.9]);
        let spec = SimulationSpec::Space {
            target: Point::new([0, 0, -2]),
        };
        let summary = run_simulation(&spec, &mut stream).unwrap();

        assert_eq!(summary.dimension, Dimension::Three);
        assert_eq!(summary.target, Some(vec![0, 0, -2]));
        assert_eq!(summary.final_position, vec![0, 0, -2]);
        assert!(summary.reached_target());
        assert!(summary.position_frequencies.is_none());
    }

    #[test]
    fn test_out_of_range_sample_is_surfaced() {
        let mut stream = SampleStream::from_values(vec![7.0]);
        let err = run_simulation(&SimulationSpec::Line, &mut stream).unwrap_err();
        assert_eq!(err, SampleError::OutOfRange { value: 7.0 });
    }
}
