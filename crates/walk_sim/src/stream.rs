//! Forward-only cursor over a finite sample sequence.

use walk_core::StreamError;

/// A finite, ordered sequence of samples consumed front to back.
///
/// The backing vector is immutable; a cursor advances over it so every
/// draw is O(1) and each sample is observed exactly once. There is no
/// rewinding; a fresh stream is built for every simulation run.
///
/// # Examples
///
/// ```rust
/// use walk_sim::SampleStream;
///
/// let mut stream = SampleStream::from_values(vec![0.1, 0.9]);
/// assert_eq!(stream.next_sample(), Ok(0.1));
/// assert_eq!(stream.next_sample(), Ok(0.9));
/// assert!(stream.next_sample().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct SampleStream {
    samples: Vec<f64>,
    cursor: usize,
}

impl SampleStream {
    /// Creates a stream over `samples`, positioned at the front.
    #[inline]
    pub fn from_values(samples: Vec<f64>) -> Self {
        Self { samples, cursor: 0 }
    }

    /// Total number of samples the stream was created with.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if the stream was created with no samples at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of samples not yet consumed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.samples.len() - self.cursor
    }

    /// Returns `true` if at least one sample is still available.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.cursor < self.samples.len()
    }

    /// Draws the next sample, advancing the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::Exhausted`] once every sample has been
    /// consumed.
    #[inline]
    pub fn next_sample(&mut self) -> Result<f64, StreamError> {
        match self.samples.get(self.cursor) {
            Some(&sample) => {
                self.cursor += 1;
                Ok(sample)
            }
            None => Err(StreamError::Exhausted),
        }
    }
}

impl From<Vec<f64>> for SampleStream {
    fn from(samples: Vec<f64>) -> Self {
        Self::from_values(samples)
    }
}
