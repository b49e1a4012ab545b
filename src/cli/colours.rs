use std::io::{self, IsTerminal};

use clap::Args;

use crate::catalog::ColourCatalog;
use crate::config::Config;
use crate::error::Result;
use crate::output::{plural, Printer};

use super::{CatalogArgs, LoadedCatalogs};

/// List colour codes in the catalog
#[derive(Args, Debug)]
pub struct ColoursArgs {
    #[command(flatten)]
    pub catalogs: CatalogArgs,
}

pub fn run(args: ColoursArgs, config: &Config, printer: &Printer) -> Result<()> {
    let config = args.catalogs.apply(config);
    let catalogs = LoadedCatalogs::load(&config)?;

    printer.info("Found", &plural(catalogs.colours.len(), "colour", "colours"));

    // Swatches only when stdout is a terminal, so piped output stays plain
    let swatches = Printer::with_color(io::stdout().is_terminal());
    for ((_, colour), line) in catalogs.colours.iter().zip(listing(&catalogs.colours)) {
        let swatch = swatches.swatch(colour);
        if swatch.is_empty() {
            println!("{}", line);
        } else {
            println!("{} {}", swatch, line);
        }
    }

    Ok(())
}

fn listing(colours: &ColourCatalog) -> Vec<String> {
    let width = colours.codes().map(str::len).max().unwrap_or(0);
    colours
        .iter()
        .map(|(code, colour)| format!("{code:<width$}  {colour}"))
        .collect()
}
