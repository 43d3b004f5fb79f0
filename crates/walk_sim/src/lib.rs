//! # Walk Simulation Engine
//!
//! Drives discrete random walks from a finite stream of uniform samples in
//! [0, 1). Each sample is mapped to a single-axis unit step through fixed
//! partitions of the unit interval; positions accumulate from the origin
//! until either a target point is reached (2D/3D) or the stream runs dry.
//!
//! # Architecture
//!
//! ```text
//! run_simulation
//! ├── SimulationSpec   (explicit run configuration)
//! ├── SampleStream     (forward-only cursor over the samples)
//! ├── engine           (walk_line / walk_to_target loops)
//! │   └── mapper       (unit-interval partition tables)
//! ├── stats            (4-jump return-probability table)
//! └── WalkSummary      (trajectory + counters for the rendering sink)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use walk_core::Point;
//! use walk_sim::{run_simulation, SampleStream, SimulationSpec, Termination};
//!
//! // Two steps east, one step north, arriving at (2, 1).
//! let mut stream = SampleStream::from_values(vec![0.1, 0.1, 0.3]);
//! let spec = SimulationSpec::Plane {
//!     target: Point::new([2, 1]),
//! };
//!
//! let summary = run_simulation(&spec, &mut stream).unwrap();
//! assert_eq!(summary.termination, Termination::ReachedTarget);
//! assert_eq!(summary.steps, 3);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod engine;
pub mod mapper;
pub mod simulator;
pub mod stats;
pub mod stream;
pub mod summary;

// Re-exports for convenient access
pub use engine::{walk_line, walk_to_target};
pub use mapper::{map_line, map_plane, map_space};
pub use simulator::{run_simulation, SimulationSpec};
pub use stats::jump_return_probabilities;
pub use stream::SampleStream;
pub use summary::{Termination, WalkResult, WalkSummary};
