//! Colour and tartan catalogs.
//!
//! Both catalogs are loaded once at startup and then shared read-only by
//! every render. The built-in catalogs are embedded in the binary; custom
//! ones are read from JSON files named in `tartan.yaml` or on the command
//! line.

mod colours;
mod source;
mod tartans;

use std::path::Path;
use std::sync::{Mutex, OnceLock};

use crate::error::Result;

pub use colours::ColourCatalog;
pub use tartans::TartanCatalog;

const BUILTIN_COLOURS: &str = include_str!("../../data/colours.json");
const BUILTIN_TARTANS: &str = include_str!("../../data/tartans.json");

static BUILTIN: CatalogCell = CatalogCell::new();

/// The colour and tartan catalogs used by parsing and weaving.
#[derive(Debug, Clone)]
pub struct Catalogs {
    pub colours: ColourCatalog,
    pub tartans: TartanCatalog,
}

impl Catalogs {
    /// Parse the catalogs embedded in the binary.
    pub fn load_builtin() -> Result<Self> {
        Ok(Self {
            colours: ColourCatalog::from_json("builtin colours", BUILTIN_COLOURS)?,
            tartans: TartanCatalog::from_json("builtin tartans", BUILTIN_TARTANS)?,
        })
    }

    /// Load catalogs from files, falling back to the built-in source for
    /// any path not given.
    pub fn load(colours: Option<&Path>, tartans: Option<&Path>) -> Result<Self> {
        let colours = match colours {
            Some(path) => ColourCatalog::load(path)?,
            None => ColourCatalog::from_json("builtin colours", BUILTIN_COLOURS)?,
        };
        let tartans = match tartans {
            Some(path) => TartanCatalog::load(path)?,
            None => TartanCatalog::from_json("builtin tartans", BUILTIN_TARTANS)?,
        };
        Ok(Self { colours, tartans })
    }

    /// Process-wide built-in catalogs, parsed on first access.
    pub fn builtin() -> Result<&'static Self> {
        BUILTIN.get_or_load(Self::load_builtin)
    }
}

/// A load-once slot for catalogs.
///
/// The loader runs at most once per successful fill. Threads racing on an
/// empty cell wait on an init lock while one of them loads.
#[derive(Debug, Default)]
pub struct CatalogCell {
    cell: OnceLock<Catalogs>,
    init: Mutex<()>,
}

impl CatalogCell {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
            init: Mutex::new(()),
        }
    }

    /// The loaded catalogs, if any.
    pub fn get(&self) -> Option<&Catalogs> {
        self.cell.get()
    }

    /// Return the cached catalogs or run `load` to fill the cell.
    ///
    /// A failed load leaves the cell empty.
    pub fn get_or_load<F>(&self, load: F) -> Result<&Catalogs>
    where
        F: FnOnce() -> Result<Catalogs>,
    {
        if let Some(catalogs) = self.cell.get() {
            return Ok(catalogs);
        }

        // A panicking loader never fills the cell, so a poisoned lock is safe
        // to reuse.
        let _guard = self.init.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(catalogs) = self.cell.get() {
            return Ok(catalogs);
        }
        let loaded = load()?;
        Ok(self.cell.get_or_init(|| loaded))
    }
}
