//! Generate command implementation
//!
//! Writes a pseudo-random sample CSV file and optionally tallies how it
//! splits around 0.5.

use std::path::Path;

use tracing::info;

use walk_inputs::csv_generator;

use crate::Result;

/// Run the generate command
pub fn run(output: &Path, count: usize, seed: Option<u64>, tally: bool) -> Result<()> {
    info!("Generating sample file...");
    info!("  Output: {}", output.display());
    info!("  Count: {}", count);

    csv_generator::write_samples(output, count, seed)?;
    println!("Wrote {} samples to {}", count, output.display());

    if tally {
        let tally = csv_generator::tally_file(output)?;
        println!("Samples below 0.5: {}", tally.below_half);
        println!("Samples at or above 0.5: {}", tally.at_or_above_half);
    }

    info!("Generation complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("samples.csv");

        run(&path, 50, Some(42), true).unwrap();

        let samples = walk_inputs::csv_source::read_samples(&path).unwrap();
        assert_eq!(samples.len(), 50);
    }
}
