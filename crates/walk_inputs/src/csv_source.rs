//! CSV sample file reader.
//!
//! Sample files carry one floating-point value per row in the first
//! column, no header. This mirrors the layout the generator writes.

use std::path::Path;

use tracing::debug;

use crate::InputError;

/// Reads every sample from `path`, front to back.
///
/// Rows after the first column are ignored; an empty or unparseable
/// first column fails with the row number attached.
///
/// # Errors
///
/// Returns [`InputError`] on I/O failure, CSV-level failure, or a
/// malformed row.
pub fn read_samples(path: &Path) -> Result<Vec<f64>, InputError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut samples = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let row = index + 1;
        let record = record?;
        let field = record
            .get(0)
            .ok_or_else(|| InputError::malformed_row(row, "empty record"))?;
        let sample: f64 = field
            .trim()
            .parse()
            .map_err(|_| InputError::malformed_row(row, format!("not a number: {:?}", field)))?;
        samples.push(sample);
    }

    debug!(path = %path.display(), count = samples.len(), "loaded sample file");
    Ok(samples)
}
