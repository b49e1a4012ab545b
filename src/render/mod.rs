//! Rendering module for tartan.
//!
//! This module handles weaving setts into square images and encoding
//! them as PNG.

mod grid;
mod png;
mod weaver;

pub use grid::Grid;
pub use png::{decode_png, encode_png, write_png};
pub use weaver::{RasterImage, TartanWeaver, MAX_SIDE};
