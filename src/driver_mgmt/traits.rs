//! Capability traits a climate driver advertises to the surrounding runtime

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClimateMode {
    Off,
    HeatCool,
    Cool,
    Heat,
    FanOnly,
    Dry,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClimateFanMode {
    Auto,
    Low,
    Medium,
    High,
    Middle,
    Focus,
    Diffuse,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClimateSwingMode {
    Off,
    Both,
    Vertical,
    Horizontal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClimatePreset {
    None,
    Eco,
    Boost,
    Activity,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClimateTraits {
    pub min_temperature: f32,
    pub max_temperature: f32,
    pub temperature_step: f32,
    pub supports_current_temperature: bool,
    pub supported_modes: Vec<ClimateMode>,
    pub supported_fan_modes: Vec<ClimateFanMode>,
    pub supported_swing_modes: Vec<ClimateSwingMode>,
    pub supported_presets: Vec<ClimatePreset>,
}

impl ClimateTraits {
    pub fn supports_mode(&self, mode: ClimateMode) -> bool {
        self.supported_modes.contains(&mode)
    }

    pub fn supports_fan_mode(&self, mode: ClimateFanMode) -> bool {
        self.supported_fan_modes.contains(&mode)
    }
}
