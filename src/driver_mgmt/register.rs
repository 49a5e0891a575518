//! Hand-off of a configured driver to the climate-IR registration contract

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

use super::driver::MhiClimate;
use crate::config_mgmt::ValidatedConfig;
use crate::constants::platforms;

/// Reference to a component once the runtime has accepted it
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ComponentHandle {
    pub id: String,
    pub platform: &'static str,
}

impl ComponentHandle {
    pub fn new(id: impl Into<String>) -> Self {
        ComponentHandle {
            id: id.into(),
            platform: platforms::MHI_MULTI_IR,
        }
    }
}

/// Generic climate-IR registration contract.
///
/// Implementations take ownership of the driver and may perform further
/// nested registration before the returned future resolves. Errors are
/// returned as-is to whoever drives the pipeline.
#[async_trait]
pub trait ClimateIrRegistrar: Send {
    async fn register_climate_ir(
        &mut self,
        driver: MhiClimate,
        config: &ValidatedConfig,
    ) -> Result<ComponentHandle>;
}

/// Register a finished driver, resolving once registration has fully completed
pub async fn register<R>(
    registrar: &mut R,
    driver: MhiClimate,
    config: &ValidatedConfig,
) -> Result<ComponentHandle>
where
    R: ClimateIrRegistrar + ?Sized,
{
    log::debug!("Registering climate {}", driver.id());
    let handle = registrar.register_climate_ir(driver, config).await?;
    log::info!("Registered {} climate '{}'", handle.platform, handle.id);
    Ok(handle)
}
