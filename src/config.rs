//! Project configuration (tartan.yaml) parsing.
//!
//! The config file names custom catalog sources and default render
//! settings. Every field is optional; command-line flags take precedence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::Catalogs;
use crate::error::{Result, TartanError};

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "tartan.yaml";

/// Output side length used when neither the config nor the CLI sets one.
pub const DEFAULT_SIZE: u32 = 900;

/// Project configuration loaded from tartan.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// JSON colour catalog (code -> [r, g, b]). Built-in if unset.
    pub colours: Option<PathBuf>,

    /// JSON tartan catalog (name -> thread count). Built-in if unset.
    pub tartans: Option<PathBuf>,

    /// Output directory for rendered images.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Output side length in pixels.
    pub size: Option<u32>,

    /// Pixels per thread.
    pub scale: Option<f64>,
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            colours: None,
            tartans: None,
            output: default_output(),
            size: None,
            scale: None,
        }
    }
}

impl Config {
    /// Load config from a tartan.yaml file.
    ///
    /// Relative catalog paths are resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TartanError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        let config = Self::parse(&content)?;
        Ok(match path.parent() {
            Some(base) => config.relative_to(base),
            None => config,
        })
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| TartanError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILE)),
        })
    }

    /// Load `tartan.yaml` from `dir` if present, else defaults.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve relative catalog paths against `base`.
    pub fn relative_to(mut self, base: &Path) -> Self {
        for path in [&mut self.colours, &mut self.tartans].into_iter().flatten() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        self
    }

    /// Get the effective output size.
    pub fn effective_size(&self) -> u32 {
        self.size.unwrap_or(DEFAULT_SIZE)
    }

    /// Get the effective scale factor.
    pub fn effective_scale(&self) -> f64 {
        self.scale.unwrap_or(1.0)
    }

    /// True when neither catalog source is overridden.
    pub fn uses_builtin_catalogs(&self) -> bool {
        self.colours.is_none() && self.tartans.is_none()
    }

    /// Load the configured catalogs.
    pub fn load_catalogs(&self) -> Result<Catalogs> {
        Catalogs::load(self.colours.as_deref(), self.tartans.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let config = Config::parse("output: build").unwrap();

        assert_eq!(config.output, PathBuf::from("build"));
        assert!(config.colours.is_none());
        assert!(config.size.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
colours: data/colours.json
tartans: data/tartans.json
output: out/tartans
size: 600
scale: 2.5
"#;
        let config = Config::parse(yaml).unwrap();

        assert_eq!(config.colours, Some(PathBuf::from("data/colours.json")));
        assert_eq!(config.tartans, Some(PathBuf::from("data/tartans.json")));
        assert_eq!(config.output, PathBuf::from("out/tartans"));
        assert_eq!(config.effective_size(), 600);
        assert_eq!(config.effective_scale(), 2.5);
        assert!(!config.uses_builtin_catalogs());
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.output, PathBuf::from("dist"));
        assert_eq!(config.effective_size(), 900);
        assert_eq!(config.effective_scale(), 1.0);
        assert!(config.uses_builtin_catalogs());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Config::parse("colour: x.json").unwrap_err();
        assert!(matches!(err, TartanError::Config { .. }));
    }

    #[test]
    fn test_relative_paths_resolved() {
        let config = Config {
            colours: Some(PathBuf::from("colours.json")),
            tartans: Some(PathBuf::from("/abs/tartans.json")),
            ..Default::default()
        }
        .relative_to(Path::new("/project"));

        assert_eq!(config.colours, Some(PathBuf::from("/project/colours.json")));
        assert_eq!(config.tartans, Some(PathBuf::from("/abs/tartans.json")));
    }

    #[test]
    fn test_discover() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::discover(dir.path()).unwrap(), Config::default());

        std::fs::write(dir.path().join(CONFIG_FILE), "size: 300\ncolours: c.json\n").unwrap();
        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.size, Some(300));
        assert_eq!(config.colours, Some(dir.path().join("c.json")));
    }
}
