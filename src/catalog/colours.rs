//! Colour code catalog.
//!
//! Maps short uppercase codes (`K`, `G`, `DB`) to RGB values. Codes are
//! matched against thread-count tokens longest first, so `DB3` resolves to
//! `DB` even when a `D` code exists.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{Result, TartanError};
use crate::types::Colour;

use super::source::{parse_entries, read_source};

/// Read-only mapping from colour code to RGB.
#[derive(Debug, Clone)]
pub struct ColourCatalog {
    colours: BTreeMap<String, Colour>,
    /// Codes ordered longest first for prefix matching.
    by_length: Vec<String>,
}

impl ColourCatalog {
    /// Build a catalog from `(code, colour)` pairs.
    ///
    /// Codes are uppercased. Empty or non-alphabetic codes and codes that
    /// collide after uppercasing are rejected.
    pub fn from_entries(
        source_name: &str,
        entries: impl IntoIterator<Item = (String, Colour)>,
    ) -> Result<Self> {
        let mut colours = BTreeMap::new();

        for (raw, colour) in entries {
            let code = raw.trim().to_uppercase();

            if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(TartanError::Load {
                    source_name: source_name.to_string(),
                    message: format!("Invalid colour code {:?}", raw),
                    help: Some("Colour codes must be letters only, e.g. \"K\" or \"DB\"".to_string()),
                });
            }

            if colours.insert(code.clone(), colour).is_some() {
                return Err(TartanError::Load {
                    source_name: source_name.to_string(),
                    message: format!("Colour code {:?} is defined more than once", code),
                    help: Some("Codes are case-insensitive; \"g\" and \"G\" are the same code".to_string()),
                });
            }
        }

        if colours.is_empty() {
            return Err(TartanError::load(source_name, "No colours defined"));
        }

        let mut by_length: Vec<String> = colours.keys().cloned().collect();
        by_length.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        Ok(Self { colours, by_length })
    }

    /// Parse a JSON object of `code -> [r, g, b]`.
    pub fn from_json(source_name: &str, json: &str) -> Result<Self> {
        let entries = parse_entries::<[u8; 3]>(source_name, json)?;
        Self::from_entries(
            source_name,
            entries.into_iter().map(|(code, rgb)| (code, Colour::from(rgb))),
        )
    }

    /// Load from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = read_source(path)?;
        Self::from_json(&path.display().to_string(), &json)
    }

    /// Get a colour by code (case-insensitive).
    pub fn get(&self, code: &str) -> Option<Colour> {
        self.colours
            .get(code)
            .or_else(|| self.colours.get(&code.to_uppercase()))
            .copied()
    }

    /// Find the longest code that prefixes `token`.
    ///
    /// `token` must already be uppercase.
    pub fn longest_prefix<'a>(&'a self, token: &str) -> Option<(&'a str, Colour)> {
        self.by_length
            .iter()
            .find(|code| token.starts_with(code.as_str()))
            .and_then(|code| Some((code.as_str(), *self.colours.get(code)?)))
    }

    /// All codes in sorted order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.colours.keys().map(|s| s.as_str())
    }

    /// All `(code, colour)` pairs in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Colour)> {
        self.colours.iter().map(|(code, colour)| (code.as_str(), *colour))
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }
}
