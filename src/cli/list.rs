//! List command implementation.
//!
//! Prints the tartan catalog, optionally filtered by a search string.

use clap::Args;

use crate::catalog::TartanCatalog;
use crate::config::Config;
use crate::error::Result;
use crate::output::{plural, Printer};

use super::{CatalogArgs, LoadedCatalogs};

/// List named tartans in the catalog
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show names containing this text (case-insensitive)
    pub query: Option<String>,

    /// Print each tartan's thread count after its name
    #[arg(long)]
    pub threadcounts: bool,

    #[command(flatten)]
    pub catalogs: CatalogArgs,
}

pub fn run(args: ListArgs, config: &Config, printer: &Printer) -> Result<()> {
    let config = args.catalogs.apply(config);
    let catalogs = LoadedCatalogs::load(&config)?;

    let lines = listing(&catalogs.tartans, args.query.as_deref(), args.threadcounts);
    printer.info("Found", &plural(lines.len(), "tartan", "tartans"));

    // Machine-readable listing on stdout
    for line in &lines {
        println!("{}", line);
    }

    Ok(())
}

fn listing(tartans: &TartanCatalog, query: Option<&str>, threadcounts: bool) -> Vec<String> {
    tartans
        .search(query.unwrap_or(""))
        .map(|name| match (threadcounts, tartans.get(name)) {
            (true, Some(tc)) => format!("{}\t{}", name, tc),
            _ => name.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> TartanCatalog {
        TartanCatalog::from_json(
            "test",
            r#"{"Wallace": "R/8 K8 R56 K56 Y/8", "MacDonald": "R/8 G24 K16 B20 K2 R/4"}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_listing_sorted() {
        let lines = listing(&catalog(), None, false);
        insta::assert_snapshot!(lines.join("\n"), @r"
        MacDonald
        Wallace
        ");
    }

    #[test]
    fn test_listing_with_threadcounts_and_query() {
        let lines = listing(&catalog(), Some("wall"), true);
        assert_eq!(lines, vec!["Wallace\tR/8 K8 R56 K56 Y/8"]);
    }
}
