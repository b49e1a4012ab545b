//! Parsers for tartan definitions.
//!
//! # Usage
//!
//! ```
//! use tartan::catalog::Catalogs;
//! use tartan::parser::ThreadCountParser;
//!
//! let catalogs = Catalogs::builtin()?;
//! let parser = ThreadCountParser::new(&catalogs.colours);
//! let pattern = parser.parse("G1 K6 B3 R1")?;
//! assert_eq!(pattern.len(), 4);
//! # Ok::<(), tartan::TartanError>(())
//! ```

mod threadcount;

pub use threadcount::{parse_threadcount, ParseReport, ThreadCountError, ThreadCountParser};
