//! # Sample Input Adapters
//!
//! File-based sources of uniform samples for the simulation engine:
//!
//! - [`csv_source`]: reads one sample per CSV row
//! - [`csv_generator`]: writes seeded pseudo-random sample files and
//!   tallies their halves
//!
//! The adapters never validate the unit-interval contract themselves;
//! the step mappers own that check, so a bad file fails the run at the
//! first offending sample rather than at load time.

pub mod csv_generator;
pub mod csv_source;

mod error;

pub use error::InputError;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::csv_generator::{tally_file, tally_samples, write_samples, HalfTally};
    pub use crate::csv_source::read_samples;
    pub use crate::InputError;
}
