//! In-process implementation of the registration contract.
//!
//! Every accepted driver ends up in the component manifest written by the
//! `build` command.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::Serialize;

use super::driver::{ClimateIr, MhiClimate};
use super::register::{ClimateIrRegistrar, ComponentHandle};
use super::traits::ClimateTraits;
use crate::config_mgmt::{FanLevels, Model, ProtocolFamily, ValidatedConfig};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisteredClimate {
    pub id: String,
    pub platform: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub model: Model,
    pub set_fan_levels: FanLevels,
    pub protocol: ProtocolFamily,
    pub frame_len: usize,
    pub frame_repeats: u8,
    pub climate_ir: ClimateIr,
    pub traits: ClimateTraits,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Manifest {
    pub components: Vec<String>,
    pub climate: Vec<RegisteredClimate>,
}

#[derive(Debug, Default)]
pub struct ComponentRegistry {
    manifest: Manifest,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn into_manifest(self) -> Manifest {
        self.manifest
    }

    pub fn len(&self) -> usize {
        self.manifest.climate.len()
    }

    pub fn is_empty(&self) -> bool {
        self.manifest.climate.is_empty()
    }

    async fn register_component(&mut self, id: &str) -> Result<()> {
        if self.manifest.components.iter().any(|c| c == id) {
            return Err(anyhow!("component '{}' is already registered", id));
        }
        self.manifest.components.push(id.to_string());
        log::debug!("Registered component {}", id);
        Ok(())
    }
}

#[async_trait]
impl ClimateIrRegistrar for ComponentRegistry {
    async fn register_climate_ir(
        &mut self,
        mut driver: MhiClimate,
        config: &ValidatedConfig,
    ) -> Result<ComponentHandle> {
        if self.manifest.climate.iter().any(|c| c.id == driver.id()) {
            return Err(anyhow!("climate '{}' is already registered", driver.id()));
        }

        let climate_ir = driver.climate_ir_mut();
        climate_ir.supports_cool = config.base.supports_cool;
        climate_ir.supports_heat = config.base.supports_heat;
        climate_ir.sensor = config.base.sensor.clone();
        climate_ir.receiver = config.base.receiver_id.clone();
        climate_ir.transmitter = config.base.transmitter_id.clone();

        let handle = ComponentHandle::new(driver.id());
        let protocol = driver.protocol();
        let registered = RegisteredClimate {
            id: driver.id().to_string(),
            platform: handle.platform,
            name: config.base.name.clone(),
            model: driver.model(),
            set_fan_levels: driver.fan_levels(),
            protocol,
            frame_len: protocol.frame_len(),
            frame_repeats: protocol.repeats(),
            traits: driver.traits(),
            climate_ir: driver.climate_ir().clone(),
        };

        self.register_component(&handle.id).await?;
        self.manifest.climate.push(registered);

        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config_mgmt::ClimateIrBase;
    use crate::driver_mgmt::factory::instantiate;
    use futures::executor::block_on;

    fn config(id: &str) -> ValidatedConfig {
        ValidatedConfig {
            id: id.to_string(),
            generated_id: false,
            model: Model::Zm,
            set_fan_levels: FanLevels::Four,
            base: ClimateIrBase {
                name: Some("Office".to_string()),
                receiver_id: Some("ir_rx".to_string()),
                supports_cool: false,
                ..ClimateIrBase::default()
            },
        }
    }

    #[test]
    fn registers_climate_and_component() {
        let mut registry = ComponentRegistry::new();
        let config = config("office_ac");
        let handle =
            block_on(registry.register_climate_ir(instantiate(&config), &config)).unwrap();

        assert_eq!(handle, ComponentHandle::new("office_ac"));
        assert_eq!(registry.len(), 1);

        let manifest = registry.manifest();
        assert_eq!(manifest.components, ["office_ac"]);
        let climate = &manifest.climate[0];
        assert_eq!(climate.name.as_deref(), Some("Office"));
        assert_eq!(climate.protocol, ProtocolFamily::Mhi152);
        assert_eq!(climate.frame_len, 19);
        assert_eq!(climate.climate_ir.receiver.as_deref(), Some("ir_rx"));
        assert!(!climate.climate_ir.supports_cool);
        assert_eq!(climate.traits.supported_fan_modes.len(), 7);
    }

    #[test]
    fn rejects_second_registration_of_same_id() {
        let mut registry = ComponentRegistry::new();
        let config = config("office_ac");
        block_on(registry.register_climate_ir(instantiate(&config), &config)).unwrap();

        let err =
            block_on(registry.register_climate_ir(instantiate(&config), &config)).unwrap_err();
        assert_eq!(err.to_string(), "climate 'office_ac' is already registered");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn manifest_serializes_identifiers() {
        let mut registry = ComponentRegistry::new();
        let config = config("office_ac");
        block_on(registry.register_climate_ir(instantiate(&config), &config)).unwrap();

        let json = serde_json::to_value(registry.into_manifest()).unwrap();
        let climate = &json["climate"][0];
        assert_eq!(climate["model"], "ZM");
        assert_eq!(climate["set_fan_levels"], "FAN_LEVELS_4");
        assert_eq!(climate["protocol"], "mhi152");
        assert_eq!(climate["platform"], "mhi_multi_ir");
        assert_eq!(climate["traits"]["supported_fan_modes"][2], "MIDDLE");
    }
}
