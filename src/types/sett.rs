//! Sett construction.
//!
//! A thread count describes half of a symmetric tartan. The full repeat
//! (the sett) is the half followed by its mirror image, with the pivot
//! thread at the far end shared rather than repeated:
//!
//! ```text
//! G1 K6 B3 R1  ->  G1 K6 B3 R1 B3 K6 G1
//! ```

use crate::error::{Result, TartanError};

use super::{Pattern, ThreadSpec};

/// One full symmetric weave repeat as parallel count/colour sequences.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sett {
    counts: Vec<f64>,
    codes: Vec<String>,
}

impl Sett {
    /// Mirror a half-sett pattern into a full sett.
    ///
    /// For a pattern of length `n >= 1` the sett has `2n - 1` threads.
    /// An empty pattern gives an empty sett.
    pub fn from_pattern(pattern: &Pattern) -> Self {
        let half = pattern.threads();
        let mirrored = half.iter().chain(half.iter().rev().skip(1));

        let (counts, codes) = mirrored.map(|t| (t.count, t.code.clone())).unzip();
        Self { counts, codes }
    }

    /// Thread counts in weave order.
    pub fn counts(&self) -> &[f64] {
        &self.counts
    }

    /// Colour codes in weave order.
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate `(count, code)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &str)> {
        self.counts
            .iter()
            .copied()
            .zip(self.codes.iter().map(String::as_str))
    }

    /// Thread at `index`, if any.
    pub fn get(&self, index: usize) -> Option<ThreadSpec> {
        let count = *self.counts.get(index)?;
        let code = self.codes.get(index)?;
        Some(ThreadSpec::new(code.clone(), count))
    }

    /// Pixel widths at the given scale, each at least one pixel.
    ///
    /// Halves round to even, so `2.5` threads at scale 1 are 2 pixels wide.
    /// A width that does not fit in a `u64` is a dimension error.
    pub fn widths(&self, scale: f64) -> Result<Vec<u64>> {
        self.counts
            .iter()
            .map(|count| {
                let width = (count * scale).round_ties_even();
                if width.is_finite() && width < u64::MAX as f64 {
                    Ok((width as u64).max(1))
                } else {
                    Err(TartanError::Dimension {
                        message: format!("A thread of {} at scale {} is too wide to weave", count, scale),
                        help: Some("Use smaller thread counts or a smaller --scale".to_string()),
                    })
                }
            })
            .collect()
    }
}

/// Mirror a pattern into its full sett.
pub fn build_sett(pattern: &Pattern) -> Sett {
    Sett::from_pattern(pattern)
}
