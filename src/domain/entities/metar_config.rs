use serde::Deserialize;
use std::collections::BTreeMap;

/// METAR data-source configuration. Per-source settings are kept opaque.
#[derive(Debug, Clone, Deserialize)]
pub struct MetarConfig {
    pub data_sources: BTreeMap<String, serde_json::Value>,
}

impl MetarConfig {
    pub fn source(&self, name: &str) -> Option<&serde_json::Value> {
        self.data_sources.get(name)
    }

    pub fn source_names(&self) -> impl Iterator<Item = &str> {
        self.data_sources.keys().map(String::as_str)
    }
}
