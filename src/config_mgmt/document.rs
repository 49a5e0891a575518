//! Loading of a device configuration document and discovery of the climate
//! entries handled by this crate

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use thiserror::Error;

use crate::constants::{keys, platforms};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read configuration file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse configuration YAML: {0}")]
    ParseYaml(#[from] serde_yaml::Error),
    #[error("configuration must be a dictionary at the top level")]
    NotAMapping,
    #[error("'{}' must be a list of platform entries", keys::CLIMATE)]
    ClimateNotAList,
}

/// A climate entry as written by the user, before validation
#[derive(Clone, Debug, PartialEq)]
pub struct RawEntry {
    /// Position in the `climate` list, e.g. `climate[2]`
    pub label: String,
    pub value: Value,
}

#[derive(Clone, Debug, Default)]
pub struct Document {
    root: Mapping,
    climate: Vec<Value>,
}

pub fn from_str(raw: &str) -> Result<Document, ConfigError> {
    let root: Value = serde_yaml::from_str(raw)?;
    let root = match root {
        Value::Null => return Ok(Document::default()),
        Value::Mapping(mapping) => mapping,
        _ => return Err(ConfigError::NotAMapping),
    };

    let climate = match root.get(keys::CLIMATE) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Sequence(entries)) => entries.clone(),
        // A single platform may be written without the list
        Some(entry @ Value::Mapping(_)) => vec![entry.clone()],
        Some(_) => return Err(ConfigError::ClimateNotAList),
    };

    Ok(Document { root, climate })
}

pub fn from_path(path: impl AsRef<Path>) -> Result<Document, ConfigError> {
    let path = path.as_ref();
    log::debug!("Loading configuration from {}", path.display());
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    from_str(&raw)
}

fn is_own_platform(value: &Value) -> bool {
    matches!(
        value.get(keys::PLATFORM).and_then(Value::as_str),
        Some(platforms::MHI_MULTI_IR | platforms::MHI_ZJ)
    )
}

impl Document {
    /// Entries addressed to the `mhi_multi_ir` platform or its deprecated
    /// predecessor. Everything else belongs to other components.
    pub fn entries(&self) -> Vec<RawEntry> {
        self.climate
            .iter()
            .enumerate()
            .filter_map(|(index, value)| {
                let label = format!("{}[{}]", keys::CLIMATE, index);
                if is_own_platform(value) {
                    Some(RawEntry {
                        label,
                        value: value.clone(),
                    })
                } else {
                    log::debug!(
                        "Skipping {} with platform {:?}",
                        label,
                        value.get(keys::PLATFORM)
                    );
                    None
                }
            })
            .collect()
    }

    /// IDs declared by every other top-level component, including climate
    /// entries of other platforms
    pub fn reserved_ids(&self) -> Vec<String> {
        let mut ids = Vec::new();
        for (key, value) in &self.root {
            let components: Vec<&Value> = match value {
                Value::Sequence(items) => items.iter().collect(),
                other => vec![other],
            };
            let is_climate = key.as_str() == Some(keys::CLIMATE);
            for component in components {
                if is_climate && is_own_platform(component) {
                    continue;
                }
                if let Some(id) = component.get(keys::ID).and_then(Value::as_str) {
                    ids.push(id.to_string());
                }
            }
        }
        ids
    }

    pub fn climate_count(&self) -> usize {
        self.climate.len()
    }
}
