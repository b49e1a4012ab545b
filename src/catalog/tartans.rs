//! Named tartan catalog.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{Result, TartanError};

use super::source::{parse_entries, read_source};

/// Read-only mapping from tartan name to its thread count.
#[derive(Debug, Clone, Default)]
pub struct TartanCatalog {
    tartans: BTreeMap<String, String>,
}

impl TartanCatalog {
    /// Build a catalog from `(name, threadcount)` pairs.
    pub fn from_entries(
        source_name: &str,
        entries: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Self> {
        let mut tartans = BTreeMap::new();

        for (raw, threadcount) in entries {
            let name = raw.trim().to_string();
            if name.is_empty() {
                return Err(TartanError::load(source_name, "Tartan with an empty name"));
            }
            if tartans.insert(name.clone(), threadcount).is_some() {
                return Err(TartanError::load(
                    source_name,
                    format!("Tartan {:?} is defined more than once", name),
                ));
            }
        }

        Ok(Self { tartans })
    }

    /// Parse a JSON object of `name -> threadcount`.
    pub fn from_json(source_name: &str, json: &str) -> Result<Self> {
        let entries = parse_entries::<String>(source_name, json)?;
        Self::from_entries(source_name, entries)
    }

    /// Load from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = read_source(path)?;
        Self::from_json(&path.display().to_string(), &json)
    }

    /// Thread count for an exact name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.tartans.get(name).map(|s| s.as_str())
    }

    /// Look up a tartan ignoring case, returning its canonical name.
    pub fn find(&self, name: &str) -> Option<(&str, &str)> {
        let name = name.trim();
        self.tartans
            .get_key_value(name)
            .or_else(|| {
                self.tartans
                    .iter()
                    .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            })
            .map(|(n, tc)| (n.as_str(), tc.as_str()))
    }

    /// Names containing `query`, case-insensitive, in sorted order.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a str> + 'a {
        let query = query.trim().to_lowercase();
        self.names()
            .filter(move |name| name.to_lowercase().contains(&query))
    }

    /// All names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tartans.keys().map(|s| s.as_str())
    }

    /// All `(name, threadcount)` pairs in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tartans.iter().map(|(n, tc)| (n.as_str(), tc.as_str()))
    }

    pub fn len(&self) -> usize {
        self.tartans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tartans.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "Royal Stewart": "R/72 B8 K12 Y2 K2 W2 K2 G16 R8 K2 R4 W/2",
        "Hunting Stewart": "G/72 B8 K12 Y2 K2 G2 K2 G16 B8 K2 G4 R/2",
        "Wallace": "R/8 K8 R56 K56 Y/8"
    }"#;

    #[test]
    fn test_names_sorted() {
        let catalog = TartanCatalog::from_json("test", SAMPLE).unwrap();
        assert_eq!(
            catalog.names().collect::<Vec<_>>(),
            vec!["Hunting Stewart", "Royal Stewart", "Wallace"]
        );
    }

    #[test]
    fn test_get_and_find() {
        let catalog = TartanCatalog::from_json("test", SAMPLE).unwrap();
        assert_eq!(catalog.get("Wallace"), Some("R/8 K8 R56 K56 Y/8"));
        assert_eq!(catalog.get("wallace"), None);

        let (name, tc) = catalog.find("  royal stewart ").unwrap();
        assert_eq!(name, "Royal Stewart");
        assert!(tc.starts_with("R/72"));
    }

    #[test]
    fn test_search() {
        let catalog = TartanCatalog::from_json("test", SAMPLE).unwrap();
        assert_eq!(
            catalog.search("stew").collect::<Vec<_>>(),
            vec!["Hunting Stewart", "Royal Stewart"]
        );
        assert_eq!(catalog.search("").count(), 3);
        assert_eq!(catalog.search("gordon").count(), 0);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = TartanCatalog::from_json("test", r#"{"A": "K1", "A": "R1"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_non_string_threadcount_rejected() {
        let err = TartanCatalog::from_json("test", r#"{"A": 4}"#).unwrap_err();
        assert!(matches!(err, TartanError::Load { .. }));
    }
}
