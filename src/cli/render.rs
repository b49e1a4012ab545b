//! Render command implementation.
//!
//! Weaves a named tartan or a custom thread count and writes a PNG.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::catalog::Catalogs;
use crate::config::Config;
use crate::error::{Result, TartanError};
use crate::output::{display_path, Printer};
use crate::parser::ThreadCountParser;
use crate::render::{write_png, RasterImage, TartanWeaver};

use super::{CatalogArgs, LoadedCatalogs, Selection};

/// Weave a tartan and write it as PNG
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Thread count to weave, e.g. "G1 K6 B3 R1"
    pub threadcount: Option<String>,

    /// Weave a named tartan from the catalog instead
    #[arg(long, short, conflicts_with = "threadcount")]
    pub tartan: Option<String>,

    /// Output side length in pixels
    #[arg(long)]
    pub size: Option<u32>,

    /// Pixels per thread
    #[arg(long)]
    pub scale: Option<f64>,

    /// Output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Output file name (default: the tartan name, or custom.png)
    #[arg(long)]
    pub file: Option<String>,

    /// Fail on unknown colour codes instead of skipping them
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub catalogs: CatalogArgs,
}

pub fn run(args: RenderArgs, config: &Config, printer: &Printer) -> Result<PathBuf> {
    let config = args.catalogs.apply(config);
    let catalogs = LoadedCatalogs::load(&config)?;

    let selection = Selection::resolve(
        &catalogs,
        args.tartan.as_deref(),
        args.threadcount.as_deref(),
    )?;

    let output_dir = args.output.clone().unwrap_or_else(|| config.output.clone());
    let file_name = args.file.clone().unwrap_or_else(|| selection.file_name());
    let output_path = output_dir.join(file_name);

    let size = args.size.unwrap_or_else(|| config.effective_size());
    let scale = args.scale.unwrap_or_else(|| config.effective_scale());

    let woven = weave_selection(&catalogs, &selection, size, scale, args.strict, printer)?;

    if !output_dir.exists() {
        fs::create_dir_all(&output_dir).map_err(|e| TartanError::Io {
            path: output_dir.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    write_png(&woven, &output_path)?;
    printer.success(
        "Wrote",
        &format!("{} ({size}x{size})", display_path(&output_path)),
    );

    Ok(output_path)
}

/// Parse and weave one selection, reporting skipped tokens.
fn weave_selection(
    catalogs: &Catalogs,
    selection: &Selection,
    size: u32,
    scale: f64,
    strict: bool,
    printer: &Printer,
) -> Result<RasterImage> {
    let parser = ThreadCountParser::new(&catalogs.colours);

    let pattern = if strict {
        parser.parse_strict(&selection.threadcount)?
    } else {
        let report = parser.parse_with_report(&selection.threadcount)?;
        for skipped in &report.skipped {
            printer.warning("Skipped", &format!("{:?}: not a known colour", skipped.token()));
        }
        report.pattern
    };

    printer.status(
        "Weaving",
        &format!("{} {}", selection.label(), printer.dim(&pattern.to_string())),
    );

    TartanWeaver::new(&catalogs.colours).render(&pattern, size, scale)
}
