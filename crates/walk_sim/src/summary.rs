//! Walk results and the dimension-erased summary for the rendering sink.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

use walk_core::{Dimension, Point};

use crate::stats;

/// Why a walk stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The current position matched the target exactly.
    ReachedTarget,
    /// The sample stream ran dry before the target was reached.
    StreamExhausted,
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Termination::ReachedTarget => write!(f, "reached target"),
            Termination::StreamExhausted => write!(f, "stream exhausted"),
        }
    }
}

/// The outcome of a single walk in `N` dimensions.
///
/// The trajectory always starts at the origin and gains exactly one
/// position per consumed sample, so the step count is derived from its
/// length rather than stored separately; the `steps == len - 1`
/// invariant cannot drift.
#[derive(Clone, Debug, PartialEq)]
pub struct WalkResult<const N: usize> {
    trajectory: Vec<Point<N>>,
    termination: Termination,
}

impl<const N: usize> WalkResult<N> {
    /// Packages a finished walk.
    ///
    /// `trajectory` must contain at least the origin entry.
    pub(crate) fn new(trajectory: Vec<Point<N>>, termination: Termination) -> Self {
        debug_assert!(!trajectory.is_empty(), "trajectory must contain the origin");
        Self {
            trajectory,
            termination,
        }
    }

    /// Every visited position, origin first.
    #[inline]
    pub fn trajectory(&self) -> &[Point<N>] {
        &self.trajectory
    }

    /// Number of jumps taken.
    #[inline]
    pub fn steps(&self) -> usize {
        self.trajectory.len() - 1
    }

    /// Why the walk stopped.
    #[inline]
    pub fn termination(&self) -> Termination {
        self.termination
    }

    /// The position the walk ended on.
    #[inline]
    pub fn final_position(&self) -> Point<N> {
        self.trajectory.last().copied().unwrap_or_default()
    }
}

/// Dimension-erased summary of a finished walk.
///
/// This is the complete hand-off to the external rendering/reporting
/// layer: the trajectory, counters, timing of the engine invocation, the
/// static return-probability table, and (for 1D walks) the exit-position
/// frequencies a histogram pane consumes. The struct is pure data; it is
/// assembled once by the simulator and never mutated afterwards.
///
/// # Examples
///
/// ```rust
/// use walk_sim::{run_simulation, SampleStream, SimulationSpec};
///
/// let mut stream = SampleStream::from_values(vec![0.9, 0.9, 0.2]);
/// let summary = run_simulation(&SimulationSpec::Line, &mut stream).unwrap();
///
/// assert_eq!(summary.steps, 3);
/// assert_eq!(summary.final_position, vec![1]);
/// let json = serde_json::to_string(&summary).unwrap();
/// assert!(json.contains("stream_exhausted"));
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct WalkSummary {
    /// Dimensionality of the walk.
    pub dimension: Dimension,
    /// Target coordinates, if the walk was target-seeking.
    pub target: Option<Vec<i64>>,
    /// Number of jumps taken.
    pub steps: usize,
    /// Why the walk stopped.
    pub termination: Termination,
    /// The position the walk ended on.
    pub final_position: Vec<i64>,
    /// Euclidean distance from the final position to the target, if any.
    pub distance_to_target: Option<f64>,
    /// Wall-clock seconds spent inside the walk loop itself.
    pub elapsed_seconds: f64,
    /// Return probabilities for the first four jumps.
    pub jump_return_probabilities: [f64; stats::ENUMERATED_JUMPS],
    /// For 1D walks: how often each exit position (the trajectory after
    /// the origin) was visited.
    pub position_frequencies: Option<BTreeMap<i64, usize>>,
    /// Every visited position, origin first, as coordinate rows.
    pub trajectory: Vec<Vec<i64>>,
}

impl WalkSummary {
    /// Summarises an unconditional 1D walk.
    pub fn from_line_walk(result: &WalkResult<1>, elapsed: Duration) -> Self {
        let mut frequencies: BTreeMap<i64, usize> = BTreeMap::new();
        for point in &result.trajectory()[1..] {
            *frequencies.entry(point.coords()[0]).or_insert(0) += 1;
        }

        Self {
            dimension: Dimension::One,
            target: None,
            steps: result.steps(),
            termination: result.termination(),
            final_position: result.final_position().coords().to_vec(),
            distance_to_target: None,
            elapsed_seconds: elapsed.as_secs_f64(),
            jump_return_probabilities: stats::jump_return_probabilities(),
            position_frequencies: Some(frequencies),
            trajectory: rows(result.trajectory()),
        }
    }

    /// Summarises a target-seeking walk.
    pub fn from_target_walk<const N: usize>(
        dimension: Dimension,
        result: &WalkResult<N>,
        target: Point<N>,
        elapsed: Duration,
    ) -> Self {
        debug_assert_eq!(dimension.axes(), N);
        let final_position = result.final_position();

        Self {
            dimension,
            target: Some(target.coords().to_vec()),
            steps: result.steps(),
            termination: result.termination(),
            final_position: final_position.coords().to_vec(),
            distance_to_target: Some(final_position.distance_to(&target)),
            elapsed_seconds: elapsed.as_secs_f64(),
            jump_return_probabilities: stats::jump_return_probabilities(),
            position_frequencies: None,
            trajectory: rows(result.trajectory()),
        }
    }

    /// Returns `true` if the walk ended on its target.
    #[inline]
    pub fn reached_target(&self) -> bool {
        self.termination == Termination::ReachedTarget
    }
}

fn rows<const N: usize>(trajectory: &[Point<N>]) -> Vec<Vec<i64>> {
    trajectory.iter().map(|p| p.coords().to_vec()).collect()
}
