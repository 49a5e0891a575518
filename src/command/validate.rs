use anyhow::{anyhow, Result};

use crate::argsets::ValidateArgs;
use crate::config_mgmt::document;
use crate::pipeline;

pub fn validate(args: ValidateArgs) -> Result<()> {
    let doc = document::from_path(&args.config)?;
    let entries = doc.entries();
    let resolution = pipeline::resolve(&entries, &doc.reserved_ids());

    for (label, config) in &resolution.configs {
        println!(
            "{label}: OK id={} model={} set_fan_levels={}",
            config.id, config.model, config.set_fan_levels
        );
    }
    for failure in &resolution.failures {
        eprintln!("{}: {}", failure.entry, failure.error);
    }

    if resolution.failures.is_empty() {
        log::info!("{} entries valid", resolution.configs.len());
        Ok(())
    } else {
        Err(anyhow!(
            "{} of {} entries failed validation",
            resolution.failures.len(),
            entries.len()
        ))
    }
}
