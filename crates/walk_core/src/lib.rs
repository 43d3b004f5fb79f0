//! # Walk Core (foundation layer)
//!
//! Foundation types shared by every frogwalk crate:
//!
//! - [`types::Point`]: integer lattice positions with Euclidean distance
//! - [`types::Displacement`]: single-axis unit steps
//! - [`types::Dimension`]: the supported dimensionalities (1D, 2D, 3D)
//! - [`types::SampleError`] / [`types::StreamError`]: structured failures
//!
//! This crate deliberately contains no simulation logic; the engine lives
//! in `walk_sim` and input adapters in `walk_inputs`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod types;

pub use types::{Dimension, Displacement, Point, SampleError, StreamError};
