pub mod colours;
pub mod completions;
pub mod list;
pub mod render;
pub mod show;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::catalog::Catalogs;
use crate::config::Config;
use crate::error::{Result, TartanError};

/// Thread count used when neither a tartan nor a thread count is given.
pub const DEFAULT_THREADCOUNT: &str = "G1 K6 B3 R1";

/// tartan - Weave tartan images from thread counts
#[derive(Parser, Debug)]
#[command(name = "tartan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ./tartan.yaml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Only print errors
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Weave a tartan and write it as PNG
    Render(render::RenderArgs),

    /// List named tartans in the catalog
    List(list::ListArgs),

    /// List colour codes in the catalog
    Colours(colours::ColoursArgs),

    /// Show the parsed pattern and sett without rendering
    Show(show::ShowArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Catalog source overrides shared by several commands.
#[derive(Args, Debug, Default, Clone)]
pub struct CatalogArgs {
    /// JSON colour catalog (code -> [r, g, b])
    #[arg(long)]
    pub colours: Option<PathBuf>,

    /// JSON tartan catalog (name -> thread count)
    #[arg(long)]
    pub tartans: Option<PathBuf>,
}

impl CatalogArgs {
    /// Apply the overrides on top of the config's catalog paths.
    pub fn apply(&self, config: &Config) -> Config {
        Config {
            colours: self.colours.clone().or_else(|| config.colours.clone()),
            tartans: self.tartans.clone().or_else(|| config.tartans.clone()),
            ..config.clone()
        }
    }
}

/// Load the config named on the command line or found in the working
/// directory.
pub fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Config::discover(&std::env::current_dir()?),
    }
}

/// Catalogs for a command: the shared built-in ones unless a source is
/// overridden.
pub enum LoadedCatalogs {
    Builtin(&'static Catalogs),
    Custom(Catalogs),
}

impl LoadedCatalogs {
    pub fn load(config: &Config) -> Result<Self> {
        if config.uses_builtin_catalogs() {
            Ok(Self::Builtin(Catalogs::builtin()?))
        } else {
            Ok(Self::Custom(config.load_catalogs()?))
        }
    }
}

impl std::ops::Deref for LoadedCatalogs {
    type Target = Catalogs;

    fn deref(&self) -> &Catalogs {
        match self {
            Self::Builtin(catalogs) => *catalogs,
            Self::Custom(catalogs) => catalogs,
        }
    }
}

/// What to weave: a named tartan or a raw thread count.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Canonical tartan name, if one was picked from the catalog.
    pub name: Option<String>,
    pub threadcount: String,
}

impl Selection {
    /// Resolve a `--tartan` name or a thread count against the catalog.
    ///
    /// Falls back to the default thread count when neither is given.
    pub fn resolve(
        catalogs: &Catalogs,
        tartan: Option<&str>,
        threadcount: Option<&str>,
    ) -> Result<Self> {
        if let Some(query) = tartan {
            let (name, threadcount) =
                catalogs.tartans.find(query).ok_or_else(|| TartanError::Config {
                    message: format!("Unknown tartan: {}", query),
                    help: Some("Run `tartan list` to see the catalog".to_string()),
                })?;
            return Ok(Self {
                name: Some(name.to_string()),
                threadcount: threadcount.to_string(),
            });
        }

        Ok(Self {
            name: None,
            threadcount: threadcount.unwrap_or(DEFAULT_THREADCOUNT).to_string(),
        })
    }

    /// Name for display and output files.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("custom")
    }

    /// Default output file name: the tartan name with underscores.
    pub fn file_name(&self) -> String {
        format!("{}.png", self.label().replace(' ', "_"))
    }
}
