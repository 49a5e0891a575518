use std::fs;

use anyhow::{anyhow, Result};
use futures::executor::block_on;

use crate::argsets::BuildArgs;
use crate::config_mgmt::document;
use crate::constants::platforms;
use crate::driver_mgmt::ComponentRegistry;
use crate::pipeline;

pub fn build(args: BuildArgs) -> Result<()> {
    let doc = document::from_path(&args.config)?;

    let mut registry = ComponentRegistry::new();
    let report = block_on(pipeline::build(&doc, &mut registry));
    if registry.is_empty() {
        log::warn!("No {} climate entries registered", platforms::MHI_MULTI_IR);
    }
    let registered = registry.len();

    let manifest = serde_json::to_string_pretty(&registry.into_manifest())?;
    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, manifest + "\n")
                .map_err(|e| anyhow!("Failed to write manifest {}: {}", path.display(), e))?;
            log::info!("Wrote manifest to {}", path.display());
        }
        None => println!("{manifest}"),
    }

    for failure in &report.failures {
        eprintln!("{}: {}", failure.entry, failure.error);
    }

    if report.is_success() {
        log::info!("Registered {} climate entries", registered);
        Ok(())
    } else {
        Err(anyhow!(
            "{} climate entries failed, {} registered",
            report.failures.len(),
            registered
        ))
    }
}
