//! Order-preserving JSON object reader for catalog sources.
//!
//! Deserializing straight into a map silently keeps the last of two equal
//! keys. Catalog sources must reject duplicates, so entries are collected
//! in document order and checked by the caller.

use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

use serde::de::{Deserialize, DeserializeOwned, Deserializer, MapAccess, Visitor};

use crate::error::{Result, TartanError};

/// Key/value pairs of a JSON object in document order.
#[derive(Debug)]
pub(crate) struct Entries<V>(pub Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Entries<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = Entries<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry()? {
                    entries.push(entry);
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

/// Parse a JSON object source.
pub(crate) fn parse_entries<V: DeserializeOwned>(
    source_name: &str,
    json: &str,
) -> Result<Vec<(String, V)>> {
    serde_json::from_str::<Entries<V>>(json)
        .map(|entries| entries.0)
        .map_err(|e| TartanError::load(source_name, e.to_string()))
}

/// Read a catalog source file.
pub(crate) fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| TartanError::Load {
        source_name: path.display().to_string(),
        message: e.to_string(),
        help: Some("Check the catalog path in tartan.yaml or on the command line".to_string()),
    })
}
