//! Show command implementation.
//!
//! Parses a thread count and prints the pattern and mirrored sett, so a
//! thread count can be checked without writing an image.

use clap::Args;

use crate::catalog::Catalogs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Printer;
use crate::parser::ThreadCountParser;
use crate::render::TartanWeaver;
use crate::types::Sett;

use super::{CatalogArgs, LoadedCatalogs, Selection};

/// Show the parsed pattern and sett without rendering
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Thread count to inspect
    pub threadcount: Option<String>,

    /// Inspect a named tartan from the catalog instead
    #[arg(long, short, conflicts_with = "threadcount")]
    pub tartan: Option<String>,

    /// Pixels per thread, for the natural size line
    #[arg(long)]
    pub scale: Option<f64>,

    #[command(flatten)]
    pub catalogs: CatalogArgs,
}

pub fn run(args: ShowArgs, config: &Config, printer: &Printer) -> Result<()> {
    let config = args.catalogs.apply(config);
    let catalogs = LoadedCatalogs::load(&config)?;

    let selection = Selection::resolve(
        &catalogs,
        args.tartan.as_deref(),
        args.threadcount.as_deref(),
    )?;
    let scale = args.scale.unwrap_or_else(|| config.effective_scale());

    let (lines, skipped) = describe(&catalogs, &selection, scale)?;
    for token in skipped {
        printer.warning("Skipped", &format!("{:?}: not a known colour", token));
    }
    for line in lines {
        println!("{}", line);
    }

    Ok(())
}

/// Summary lines for a selection, plus any tokens the parser dropped.
fn describe(
    catalogs: &Catalogs,
    selection: &Selection,
    scale: f64,
) -> Result<(Vec<String>, Vec<String>)> {
    let report = ThreadCountParser::new(&catalogs.colours).parse_with_report(&selection.threadcount)?;
    let sett = Sett::from_pattern(&report.pattern);
    let side = TartanWeaver::new(&catalogs.colours).natural_side(&sett, scale)?;

    let sett_text: Vec<String> = sett
        .iter()
        .map(|(count, code)| format!("{}{}", code, count))
        .collect();

    let lines = vec![
        format!("name:     {}", selection.label()),
        format!("pattern:  {}", report.pattern),
        format!("sett:     {}", sett_text.join(" ")),
        format!("threads:  {}", sett.len()),
        format!("side:     {}px at scale {}", side, scale),
    ];
    let skipped = report.skipped.iter().map(|e| e.token().to_string()).collect();

    Ok((lines, skipped))
}
