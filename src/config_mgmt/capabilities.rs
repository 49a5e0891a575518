//! Closed capability enumerations of the MHI IR climate driver
//!
//! Each enumeration is backed by a static table mapping the token accepted in
//! YAML configuration to the identifier handed to the native driver.

use std::fmt;

use itertools::Itertools;
use serde::Serialize;

/// Token-to-identifier table shared by all capability enumerations
pub trait Capability: Copy + PartialEq + 'static {
    /// Human-readable name used in diagnostics
    const KIND: &'static str;
    const TABLE: &'static [(&'static str, Self)];

    /// Bring a raw token into the form used by `TABLE`
    fn normalize(token: &str) -> String {
        token.to_string()
    }

    fn from_token(token: &str) -> Option<Self> {
        let normalized = Self::normalize(token.trim());
        Self::TABLE
            .iter()
            .find(|(t, _)| *t == normalized)
            .map(|(_, value)| *value)
    }

    fn token(self) -> &'static str {
        Self::TABLE
            .iter()
            .find(|(_, value)| *value == self)
            .map(|(t, _)| *t)
            .unwrap_or_default()
    }

    fn accepted_tokens() -> String {
        Self::TABLE.iter().map(|(t, _)| format!("'{t}'")).join(", ")
    }
}

/// Hardware variant of the indoor unit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Model {
    Zj = 0,
    Zea = 1,
    Zm = 2,
    Zmp = 3,
}

pub const MODELS: &[(&str, Model)] = &[
    ("ZJ", Model::Zj),
    ("ZEA", Model::Zea),
    ("ZM", Model::Zm),
    ("ZMP", Model::Zmp),
];

impl Capability for Model {
    const KIND: &'static str = "model";
    const TABLE: &'static [(&'static str, Self)] = MODELS;

    fn normalize(token: &str) -> String {
        token.to_ascii_uppercase()
    }
}

impl Model {
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn protocol(self) -> ProtocolFamily {
        match self {
            Model::Zj | Model::Zea => ProtocolFamily::Mhi88,
            Model::Zm | Model::Zmp => ProtocolFamily::Mhi152,
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Number of discrete fan speed steps exposed by the driver
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum FanLevels {
    #[default]
    #[serde(rename = "FAN_LEVELS_3")]
    Three = 3,
    #[serde(rename = "FAN_LEVELS_4")]
    Four = 4,
}

pub const FAN_LEVELS: &[(&str, FanLevels)] = &[("3", FanLevels::Three), ("4", FanLevels::Four)];

impl Capability for FanLevels {
    const KIND: &'static str = "fan level set";
    const TABLE: &'static [(&'static str, Self)] = FAN_LEVELS;
}

impl FanLevels {
    pub fn count(self) -> u8 {
        self as u8
    }

    pub fn identifier(self) -> &'static str {
        match self {
            FanLevels::Three => "FAN_LEVELS_3",
            FanLevels::Four => "FAN_LEVELS_4",
        }
    }
}

impl fmt::Display for FanLevels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// IR frame family a model speaks. Descriptive only; no encoding lives here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProtocolFamily {
    Mhi88,
    Mhi152,
}

impl ProtocolFamily {
    pub fn bits(self) -> u16 {
        match self {
            ProtocolFamily::Mhi88 => 88,
            ProtocolFamily::Mhi152 => 152,
        }
    }

    pub fn frame_len(self) -> usize {
        usize::from(self.bits() / 8)
    }

    /// How many times a frame is repeated per transmission
    pub fn repeats(self) -> u8 {
        match self {
            ProtocolFamily::Mhi88 => 1,
            ProtocolFamily::Mhi152 => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_tokens_map_to_identifiers() {
        assert_eq!(Model::from_token("ZJ").map(Model::id), Some(0));
        assert_eq!(Model::from_token("ZEA").map(Model::id), Some(1));
        assert_eq!(Model::from_token("ZM").map(Model::id), Some(2));
        assert_eq!(Model::from_token("ZMP").map(Model::id), Some(3));
    }

    #[test]
    fn model_lookup_ignores_case() {
        assert_eq!(Model::from_token("zmp"), Some(Model::Zmp));
        assert_eq!(Model::from_token(" Zea "), Some(Model::Zea));
        assert_eq!(Model::from_token("ZX"), None);
    }

    #[test]
    fn enumerations_are_not_interchangeable() {
        assert_eq!(Model::from_token("3"), None);
        assert_eq!(FanLevels::from_token("ZJ"), None);
    }

    #[test]
    fn fan_levels_default_to_three() {
        assert_eq!(FanLevels::default(), FanLevels::Three);
        assert_eq!(FanLevels::from_token("4"), Some(FanLevels::Four));
        assert_eq!(FanLevels::from_token("5"), None);
        assert_eq!(FanLevels::Four.count(), 4);
        assert_eq!(FanLevels::Three.to_string(), "FAN_LEVELS_3");
    }

    #[test]
    fn accepted_tokens_are_listed_in_table_order() {
        assert_eq!(Model::accepted_tokens(), "'ZJ', 'ZEA', 'ZM', 'ZMP'");
        assert_eq!(FanLevels::accepted_tokens(), "'3', '4'");
    }

    #[test]
    fn protocol_family_by_model() {
        assert_eq!(Model::Zj.protocol(), ProtocolFamily::Mhi88);
        assert_eq!(Model::Zmp.protocol(), ProtocolFamily::Mhi152);
        assert_eq!(ProtocolFamily::Mhi88.frame_len(), 11);
        assert_eq!(ProtocolFamily::Mhi152.frame_len(), 19);
        assert_eq!(ProtocolFamily::Mhi152.repeats(), 2);
    }
}
