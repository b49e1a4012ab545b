//! Thread-count parser.
//!
//! A thread count is a list of colour codes with repeat counts:
//!
//! ```text
//! G1 K6 B3 R1
//! g1, k6, b3, r1
//! R/72 B8 K12 Y2 W/2
//! ```
//!
//! Commas and whitespace separate tokens, case is ignored, a missing
//! count means one thread, and a `/` after the code marks a pivot.

use std::ops::Range;

use miette::Diagnostic;
use thiserror::Error;

use crate::catalog::ColourCatalog;
use crate::types::{Pattern, ThreadSpec};

/// A problem with a single thread-count token.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ThreadCountError {
    /// No catalog colour code prefixes the token.
    #[error("Unknown colour in {token:?}")]
    #[diagnostic(
        code(tartan::parse::unknown_colour),
        help("Run `tartan colours` to list the available colour codes")
    )]
    UnknownColour { token: String, span: Range<usize> },

    /// The text after the colour code is not a positive number.
    #[error("Invalid thread count {count:?} in {token:?}")]
    #[diagnostic(
        code(tartan::parse::invalid_count),
        help("Counts must be positive, e.g. K6 or K2.5. Zero and negative counts are rejected, not drawn as one-pixel threads")
    )]
    InvalidCount {
        token: String,
        count: String,
        span: Range<usize>,
    },
}

impl ThreadCountError {
    /// The offending token as written.
    pub fn token(&self) -> &str {
        match self {
            Self::UnknownColour { token, .. } | Self::InvalidCount { token, .. } => token,
        }
    }

    /// Byte range of the token in the parsed text.
    pub fn span(&self) -> Range<usize> {
        match self {
            Self::UnknownColour { span, .. } | Self::InvalidCount { span, .. } => span.clone(),
        }
    }
}

/// A lenient parse along with the tokens it dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseReport {
    pub pattern: Pattern,
    /// Tokens skipped because no colour code matched them.
    pub skipped: Vec<ThreadCountError>,
}

/// Parses thread counts against a colour catalog.
#[derive(Debug, Clone, Copy)]
pub struct ThreadCountParser<'a> {
    colours: &'a ColourCatalog,
}

impl<'a> ThreadCountParser<'a> {
    pub fn new(colours: &'a ColourCatalog) -> Self {
        Self { colours }
    }

    /// Parse every token, in order, without dropping anything.
    pub fn tokens<'t>(
        &self,
        text: &'t str,
    ) -> impl Iterator<Item = Result<ThreadSpec, ThreadCountError>> + 't
    where
        'a: 't,
    {
        let parser: ThreadCountParser<'t> = *self;
        split_tokens(text)
            .into_iter()
            .map(move |(offset, raw)| parser.parse_token(offset, raw))
    }

    /// Parse leniently: tokens with an unknown colour are dropped, bad
    /// counts are errors.
    ///
    /// Empty input gives an empty pattern.
    pub fn parse(&self, text: &str) -> Result<Pattern, ThreadCountError> {
        self.parse_with_report(text).map(|report| report.pattern)
    }

    /// Parse leniently and report the dropped tokens.
    pub fn parse_with_report(&self, text: &str) -> Result<ParseReport, ThreadCountError> {
        let mut threads = Vec::new();
        let mut skipped = Vec::new();

        for token in self.tokens(text) {
            match token {
                Ok(thread) => threads.push(thread),
                Err(e @ ThreadCountError::UnknownColour { .. }) => skipped.push(e),
                Err(e) => return Err(e),
            }
        }

        Ok(ParseReport {
            pattern: Pattern::new(threads),
            skipped,
        })
    }

    /// Parse strictly: any unknown colour or bad count is an error.
    pub fn parse_strict(&self, text: &str) -> Result<Pattern, ThreadCountError> {
        self.tokens(text).collect()
    }

    fn parse_token(&self, offset: usize, raw: &str) -> Result<ThreadSpec, ThreadCountError> {
        let span = offset..offset + raw.len();
        let upper = raw.to_uppercase();

        let Some((code, _)) = self.colours.longest_prefix(&upper) else {
            return Err(ThreadCountError::UnknownColour {
                token: raw.to_string(),
                span,
            });
        };

        let rest = &upper[code.len()..];
        let digits = rest.strip_prefix('/').unwrap_or(rest);

        if digits.is_empty() {
            return Ok(ThreadSpec::new(code, 1.0));
        }

        match digits.parse::<f64>() {
            Ok(count) if count.is_finite() && count > 0.0 => Ok(ThreadSpec::new(code, count)),
            _ => Err(ThreadCountError::InvalidCount {
                token: raw.to_string(),
                count: digits.to_string(),
                span,
            }),
        }
    }
}

/// Parse a thread count leniently against `colours`.
pub fn parse_threadcount(
    text: &str,
    colours: &ColourCatalog,
) -> Result<Pattern, ThreadCountError> {
    ThreadCountParser::new(colours).parse(text)
}

fn is_delimiter(c: char) -> bool {
    c == ',' || c.is_whitespace()
}

/// Split on commas and whitespace, keeping each token's byte offset.
fn split_tokens(text: &str) -> Vec<(usize, &str)> {
    let mut tokens = Vec::new();
    let mut start = None;

    for (i, c) in text.char_indices() {
        if is_delimiter(c) {
            if let Some(s) = start.take() {
                tokens.push((s, &text[s..i]));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        tokens.push((s, &text[s..]));
    }

    tokens
}
