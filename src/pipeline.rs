//! validate -> resolve identifiers -> instantiate -> register, per entry
//!
//! Entries are processed one after another. A failure is recorded against its
//! own entry and never stops the remaining ones.

use anyhow::Result;
use itertools::Itertools;
use thiserror::Error;

use crate::config_mgmt::document::{Document, RawEntry};
use crate::config_mgmt::{
    self, IdAllocator, IdError, ValidatedConfig, ValidatedEntry, ValidationError,
};
use crate::constants::platforms;
use crate::driver_mgmt::{self, ClimateIrRegistrar, ComponentHandle};

#[derive(Error, Debug)]
pub enum EntryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Id(#[from] IdError),
    #[error(transparent)]
    Registration(anyhow::Error),
}

#[derive(Debug)]
pub struct EntryFailure {
    pub entry: String,
    pub error: EntryError,
}

/// Entries that survived validation and identifier resolution, in document
/// order, plus everything that did not
#[derive(Debug, Default)]
pub struct Resolution {
    pub configs: Vec<(String, ValidatedConfig)>,
    pub failures: Vec<EntryFailure>,
}

#[derive(Debug, Default)]
pub struct BuildReport {
    pub registered: Vec<ComponentHandle>,
    pub failures: Vec<EntryFailure>,
}

impl BuildReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Validate every entry, then give each surviving entry a unique identifier.
///
/// `reserved` holds IDs already taken by other components of the document.
pub fn resolve(entries: &[RawEntry], reserved: &[String]) -> Resolution {
    let mut resolution = Resolution::default();

    let mut validated: Vec<(String, ValidatedEntry)> = Vec::new();
    for entry in entries {
        match config_mgmt::validate(&entry.label, &entry.value) {
            Ok(v) => validated.push((entry.label.clone(), v)),
            Err(e) => {
                log::warn!("{}", e);
                resolution.failures.push(EntryFailure {
                    entry: entry.label.clone(),
                    error: e.into(),
                });
            }
        }
    }

    // Explicit IDs are claimed before any is generated so that a generated ID
    // can never shadow one written further down the document. An ID declared
    // on several entries fails all of them.
    let mut ids = IdAllocator::new(platforms::DRIVER_CLASS);
    for id in reserved {
        ids.reserve(id);
    }
    let declared = validated
        .iter()
        .filter_map(|(_, entry)| entry.declared_id.clone())
        .counts();

    let mut claimed = Vec::with_capacity(validated.len());
    for (label, entry) in validated {
        let outcome = entry.declared_id.as_deref().map(|id| {
            let claim = ids.claim(id);
            if declared[id] > 1 {
                Err(IdError::Redefined(id.to_string()))
            } else {
                claim
            }
        });
        match outcome {
            Some(Err(e)) => {
                log::warn!("{}: {}", label, e);
                resolution.failures.push(EntryFailure {
                    entry: label,
                    error: e.into(),
                });
            }
            _ => claimed.push((label, entry)),
        }
    }

    for (label, entry) in claimed {
        let config = match entry.declared_id.clone() {
            Some(id) => entry.with_id(id, false),
            None => {
                let id = ids.generate();
                entry.with_id(id, true)
            }
        };
        resolution.configs.push((label, config));
    }

    resolution
}

/// Instantiate the driver for `config` and wait for its registration
pub async fn process_entry<R>(
    registrar: &mut R,
    config: &ValidatedConfig,
) -> Result<ComponentHandle>
where
    R: ClimateIrRegistrar + ?Sized,
{
    let driver = driver_mgmt::instantiate(config);
    driver_mgmt::register(registrar, driver, config).await
}

pub async fn build<R>(document: &Document, registrar: &mut R) -> BuildReport
where
    R: ClimateIrRegistrar + ?Sized,
{
    let entries = document.entries();
    log::info!(
        "Processing {} of {} climate entries",
        entries.len(),
        document.climate_count()
    );

    let Resolution { configs, failures } = resolve(&entries, &document.reserved_ids());
    let mut report = BuildReport {
        registered: Vec::with_capacity(configs.len()),
        failures,
    };

    for (label, config) in configs {
        match process_entry(registrar, &config).await {
            Ok(handle) => report.registered.push(handle),
            Err(e) => {
                log::error!("{}: registration failed: {}", label, e);
                report.failures.push(EntryFailure {
                    entry: label,
                    error: EntryError::Registration(e),
                });
            }
        }
    }

    report
}
