//! Error types for the input adapters.

use thiserror::Error;

/// Failure while reading or writing a sample file.
#[derive(Error, Debug)]
pub enum InputError {
    /// The underlying file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV layer rejected the file.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row did not contain a parseable sample.
    #[error("row {row}: {message}")]
    MalformedRow {
        /// 1-based row number in the file.
        row: usize,
        /// What was wrong with the row.
        message: String,
    },
}

impl InputError {
    /// Builds a malformed-row error.
    pub fn malformed_row(row: usize, message: impl Into<String>) -> Self {
        Self::MalformedRow {
            row,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_row_display() {
        let err = InputError::malformed_row(7, "empty record");
        assert_eq!(err.to_string(), "row 7: empty record");
    }
}
