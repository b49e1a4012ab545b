//! Thread specifications and patterns.
//!
//! A `Pattern` is the half-sett as written in a thread count: an ordered
//! list of colour codes with their repeat counts.

use std::fmt;

/// A single colour stripe in a thread count, e.g. `K6`.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadSpec {
    /// Colour code (uppercase, present in the colour catalog).
    pub code: String,
    /// Thread repeat count; always positive and finite.
    pub count: f64,
}

impl ThreadSpec {
    pub fn new(code: impl Into<String>, count: f64) -> Self {
        Self {
            code: code.into(),
            count,
        }
    }
}

impl fmt::Display for ThreadSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f64 Display drops the fraction for whole numbers: 6.0 -> "6"
        write!(f, "{}{}", self.code, self.count)
    }
}

/// An ordered half-sett.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pattern {
    threads: Vec<ThreadSpec>,
}

impl Pattern {
    pub fn new(threads: Vec<ThreadSpec>) -> Self {
        Self { threads }
    }

    pub fn threads(&self) -> &[ThreadSpec] {
        &self.threads
    }

    pub fn len(&self) -> usize {
        self.threads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.threads.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ThreadSpec> {
        self.threads.iter()
    }
}

impl From<Vec<ThreadSpec>> for Pattern {
    fn from(threads: Vec<ThreadSpec>) -> Self {
        Self::new(threads)
    }
}

impl FromIterator<ThreadSpec> for Pattern {
    fn from_iter<I: IntoIterator<Item = ThreadSpec>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Pattern {
    type Item = &'a ThreadSpec;
    type IntoIter = std::slice::Iter<'a, ThreadSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.threads.iter()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, thread) in self.threads.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", thread)?;
        }
        Ok(())
    }
}
