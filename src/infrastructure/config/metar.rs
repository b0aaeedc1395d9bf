use crate::domain::entities::metar_config::MetarConfig;
use crate::domain::error::MetarConfigLoadError;
use std::path::{Path, PathBuf};

pub const METAR_CONFIG_ENV: &str = "METAR_CONFIG_PATH";
pub const DEFAULT_METAR_CONFIG_PATH: &str = "config/metar_data_sources.json";
const DATA_SOURCES_SECTION: &str = "data_sources";

/// Config path from `METAR_CONFIG_PATH`, falling back to the repo default.
pub fn metar_config_path() -> PathBuf {
    std::env::var(METAR_CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_METAR_CONFIG_PATH))
}

/// Load the `data_sources` section of a METAR config file.
pub fn load_metar_config(path: &Path) -> Result<MetarConfig, MetarConfigLoadError> {
    if !path.exists() {
        return Err(MetarConfigLoadError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let text = std::fs::read_to_string(path).map_err(|source| MetarConfigLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let document: serde_json::Value =
        serde_json::from_str(&text).map_err(|source| MetarConfigLoadError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    let section = document
        .get(DATA_SOURCES_SECTION)
        .filter(|v| !v.is_null())
        .ok_or_else(|| MetarConfigLoadError::MissingSection {
            path: path.to_path_buf(),
            section: DATA_SOURCES_SECTION.to_string(),
        })?;

    let data_sources = match section {
        serde_json::Value::Object(map) => map,
        _ => {
            return Err(MetarConfigLoadError::Malformed {
                path: path.to_path_buf(),
                source: <serde_json::Error as serde::de::Error>::custom(
                    "'data_sources' must be an object",
                ),
            })
        }
    };
    if data_sources.is_empty() {
        return Err(MetarConfigLoadError::EmptySection {
            path: path.to_path_buf(),
            section: DATA_SOURCES_SECTION.to_string(),
        });
    }

    Ok(MetarConfig {
        data_sources: data_sources
            .iter()
            .map(|(name, settings)| (name.clone(), settings.clone()))
            .collect(),
    })
}
