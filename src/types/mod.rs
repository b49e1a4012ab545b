//! Core domain types for tartan.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - RGB colour values with saturating addition
//! - `ThreadSpec` / `Pattern` - a parsed thread count (the half-sett)
//! - `Sett` - the mirrored full repeat

mod colour;
mod sett;
mod thread;

pub use colour::Colour;
pub use sett::{build_sett, Sett};
pub use thread::{Pattern, ThreadSpec};
