//! tartan - Weave tartan images from thread counts
//!
//! A thread count such as `G1 K6 B3 R1` lists colour codes and repeat
//! counts for half of a symmetric tartan. This crate parses thread counts
//! against a colour catalog, mirrors them into a full sett and weaves the
//! sett into a square image by crossing warp and weft bands.
//!
//! ```
//! use tartan::{Catalogs, TartanWeaver, ThreadCountParser};
//!
//! let catalogs = Catalogs::builtin()?;
//! let pattern = ThreadCountParser::new(&catalogs.colours).parse("G1 K6 B3 R1")?;
//! let image = TartanWeaver::new(&catalogs.colours).render(&pattern, 300, 2.0)?;
//! assert_eq!(image.side(), 300);
//! # Ok::<(), tartan::TartanError>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod parser;
pub mod render;
pub mod types;

pub use catalog::{CatalogCell, Catalogs, ColourCatalog, TartanCatalog};
pub use config::Config;
pub use error::{Result, TartanError};
pub use parser::{parse_threadcount, ParseReport, ThreadCountError, ThreadCountParser};
pub use render::{decode_png, encode_png, write_png, Grid, RasterImage, TartanWeaver};
pub use types::{build_sett, Colour, Pattern, Sett, ThreadSpec};
