//! CSV sample file generator.
//!
//! Writes pseudo-random uniform samples in [0, 1), one per row, rounded
//! to five decimal places. A seeded run reproduces the same file byte
//! for byte, which keeps simulation results replayable.

use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::InputError;

/// Decimal places kept when writing samples.
const SAMPLE_DECIMALS: i32 = 5;

/// Counts of samples on either side of 0.5.
///
/// A quick uniformity check over a sample file: for a well-behaved
/// source the two counts should be close.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HalfTally {
    /// Samples strictly below 0.5.
    pub below_half: usize,
    /// Samples at or above 0.5.
    pub at_or_above_half: usize,
}

impl HalfTally {
    /// Total number of tallied samples.
    #[inline]
    pub fn total(&self) -> usize {
        self.below_half + self.at_or_above_half
    }
}

/// Generates `count` rounded uniform samples.
///
/// `seed` makes the sequence reproducible; `None` draws a fresh seed
/// from the operating system.
pub fn generate_samples(count: usize, seed: Option<u64>) -> Vec<f64> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let scale = 10f64.powi(SAMPLE_DECIMALS);
    (0..count)
        .map(|_| (rng.gen::<f64>() * scale).round() / scale)
        .collect()
}

/// Writes `count` samples to a CSV file at `path`, one per row.
///
/// # Errors
///
/// Returns [`InputError`] if the file cannot be written.
pub fn write_samples(path: &Path, count: usize, seed: Option<u64>) -> Result<(), InputError> {
    let samples = generate_samples(count, seed);

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    for sample in &samples {
        writer.write_record([format!("{}", sample)])?;
    }
    writer.flush()?;

    info!(path = %path.display(), count, seed, "wrote sample file");
    Ok(())
}

/// Tallies samples below / at-or-above 0.5.
pub fn tally_samples(samples: &[f64]) -> HalfTally {
    let mut tally = HalfTally::default();
    for &sample in samples {
        if sample < 0.5 {
            tally.below_half += 1;
        } else {
            tally.at_or_above_half += 1;
        }
    }
    tally
}

/// Tallies a sample file on disk.
///
/// # Errors
///
/// Returns [`InputError`] if the file cannot be read.
pub fn tally_file(path: &Path) -> Result<HalfTally, InputError> {
    let samples = crate::csv_source::read_samples(path)?;
    Ok(tally_samples(&samples))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_stay_in_unit_interval() {
        for sample in generate_samples(10_000, Some(42)) {
            assert!((0.0..=1.0).contains(&sample), "sample {} escaped", sample);
        }
    }

    #[test]
    fn test_same_seed_reproduces_sequence() {
        assert_eq!(generate_samples(100, Some(7)), generate_samples(100, Some(7)));
    }

    #[test]
    fn test_different_seeds_differ() {
        assert_ne!(
            generate_samples(100, Some(1)),
            generate_samples(100, Some(2))
        );
    }

    #[test]
    fn test_rounding_to_five_decimals() {
        for sample in generate_samples(1_000, Some(3)) {
            let scaled = sample * 100_000.0;
            assert!((scaled - scaled.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("samples.csv");

        write_samples(&path, 500, Some(42)).unwrap();
        let samples = crate::csv_source::read_samples(&path).unwrap();

        assert_eq!(samples.len(), 500);
        assert_eq!(samples, generate_samples(500, Some(42)));
    }

    #[test]
    fn test_tally_splits_at_half() {
        let tally = tally_samples(&[0.1, 0.49999, 0.5, 0.9]);
        assert_eq!(tally.below_half, 2);
        assert_eq!(tally.at_or_above_half, 2);
        assert_eq!(tally.total(), 4);
    }

    #[test]
    fn test_tally_file_matches_in_memory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("samples.csv");
        write_samples(&path, 200, Some(9)).unwrap();

        let from_file = tally_file(&path).unwrap();
        let in_memory = tally_samples(&generate_samples(200, Some(9)));
        assert_eq!(from_file, in_memory);
    }
}
