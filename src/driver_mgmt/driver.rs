//! Descriptor of the native MHI IR climate driver
//!
//! The instance records what the generated firmware will construct: the
//! identifier it is bound to, the model and fan-level settings applied by the
//! factory, and the climate-IR wiring applied during registration.

use serde::Serialize;

use super::traits::{
    ClimateFanMode, ClimateMode, ClimatePreset, ClimateSwingMode, ClimateTraits,
};
use crate::config_mgmt::{FanLevels, Model, ProtocolFamily};
use crate::constants::defaults;

pub const MIN_TEMPERATURE: f32 = 17.0;
pub const MAX_TEMPERATURE: f32 = 31.0;
pub const TEMPERATURE_STEP: f32 = 1.0;

/// Settings owned by the generic climate-IR layer
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClimateIr {
    pub supports_cool: bool,
    pub supports_heat: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transmitter: Option<String>,
}

impl Default for ClimateIr {
    fn default() -> Self {
        ClimateIr {
            supports_cool: defaults::SUPPORTS_COOL,
            supports_heat: defaults::SUPPORTS_HEAT,
            sensor: None,
            receiver: None,
            transmitter: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MhiClimate {
    id: String,
    model: Model,
    fan_levels: FanLevels,
    climate_ir: ClimateIr,
}

impl MhiClimate {
    /// Allocate a driver bound to `id`, with the native defaults
    pub fn new(id: impl Into<String>) -> Self {
        MhiClimate {
            id: id.into(),
            model: Model::Zj,
            fan_levels: FanLevels::default(),
            climate_ir: ClimateIr::default(),
        }
    }

    pub fn set_model(&mut self, model: Model) {
        self.model = model;
    }

    pub fn set_fan_levels(&mut self, fan_levels: FanLevels) {
        self.fan_levels = fan_levels;
    }

    pub fn climate_ir_mut(&mut self) -> &mut ClimateIr {
        &mut self.climate_ir
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn model(&self) -> Model {
        self.model
    }

    pub fn fan_levels(&self) -> FanLevels {
        self.fan_levels
    }

    pub fn climate_ir(&self) -> &ClimateIr {
        &self.climate_ir
    }

    pub fn protocol(&self) -> ProtocolFamily {
        self.model.protocol()
    }

    pub fn traits(&self) -> ClimateTraits {
        let ir = &self.climate_ir;

        let mut modes = vec![ClimateMode::Off, ClimateMode::HeatCool];
        if ir.supports_cool {
            modes.push(ClimateMode::Cool);
        }
        if ir.supports_heat {
            modes.push(ClimateMode::Heat);
        }
        // Every model encodes dry and fan-only
        modes.extend([ClimateMode::Dry, ClimateMode::FanOnly]);

        let mut fan_modes = vec![ClimateFanMode::Auto, ClimateFanMode::Low];
        if self.fan_levels == FanLevels::Four {
            fan_modes.push(ClimateFanMode::Middle);
        }
        fan_modes.extend([
            ClimateFanMode::Medium,
            ClimateFanMode::High,
            ClimateFanMode::Focus,
            ClimateFanMode::Diffuse,
        ]);

        ClimateTraits {
            min_temperature: MIN_TEMPERATURE,
            max_temperature: MAX_TEMPERATURE,
            temperature_step: TEMPERATURE_STEP,
            supports_current_temperature: ir.sensor.is_some(),
            supported_modes: modes,
            supported_fan_modes: fan_modes,
            supported_swing_modes: vec![
                ClimateSwingMode::Off,
                ClimateSwingMode::Vertical,
                ClimateSwingMode::Horizontal,
                ClimateSwingMode::Both,
            ],
            supported_presets: vec![
                ClimatePreset::None,
                ClimatePreset::Eco,
                ClimatePreset::Boost,
                ClimatePreset::Activity,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_defaults() {
        let driver = MhiClimate::new("ac");
        assert_eq!(driver.id(), "ac");
        assert_eq!(driver.model(), Model::Zj);
        assert_eq!(driver.fan_levels(), FanLevels::Three);
        assert_eq!(driver.protocol(), ProtocolFamily::Mhi88);
    }

    #[test]
    fn middle_fan_mode_needs_four_levels() {
        let mut driver = MhiClimate::new("ac");
        assert!(!driver.traits().supports_fan_mode(ClimateFanMode::Middle));
        assert_eq!(driver.traits().supported_fan_modes.len(), 6);

        driver.set_fan_levels(FanLevels::Four);
        let traits = driver.traits();
        assert_eq!(traits.supported_fan_modes[2], ClimateFanMode::Middle);
        assert_eq!(traits.supported_fan_modes.len(), 7);
    }

    #[test]
    fn modes_follow_climate_ir_settings() {
        let mut driver = MhiClimate::new("ac");
        let traits = driver.traits();
        assert!(traits.supports_mode(ClimateMode::Cool));
        assert!(traits.supports_mode(ClimateMode::Heat));
        assert!(traits.supports_mode(ClimateMode::Dry));
        assert!(!traits.supports_current_temperature);

        driver.climate_ir_mut().supports_heat = false;
        driver.climate_ir_mut().sensor = Some("room_temp".to_string());
        let traits = driver.traits();
        assert!(!traits.supports_mode(ClimateMode::Heat));
        assert!(traits.supports_mode(ClimateMode::HeatCool));
        assert!(traits.supports_current_temperature);
        assert_eq!(traits.min_temperature, 17.0);
        assert_eq!(traits.max_temperature, 31.0);
    }

    #[test]
    fn model_selects_protocol_family() {
        let mut driver = MhiClimate::new("ac");
        driver.set_model(Model::Zm);
        assert_eq!(driver.protocol(), ProtocolFamily::Mhi152);
    }
}
