//! Fields inherited from the generic climate-IR-with-receiver schema
//!
//! These are validated before any platform-specific field and passed through
//! to registration untouched.

use serde::Serialize;

use super::schema::{check_bool, check_identifier, check_string, FieldSpec, Fields};
use crate::constants::{defaults, keys};

pub const BASE_FIELDS: &[FieldSpec] = &[
    FieldSpec::optional(keys::NAME, check_string),
    FieldSpec::optional(keys::RECEIVER_ID, check_identifier),
    FieldSpec::optional(keys::TRANSMITTER_ID, check_identifier),
    FieldSpec::optional(keys::SENSOR, check_identifier),
    FieldSpec::optional(keys::SUPPORTS_COOL, check_bool),
    FieldSpec::optional(keys::SUPPORTS_HEAT, check_bool),
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClimateIrBase {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transmitter_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensor: Option<String>,
    pub supports_cool: bool,
    pub supports_heat: bool,
}

impl Default for ClimateIrBase {
    fn default() -> Self {
        ClimateIrBase {
            name: None,
            receiver_id: None,
            transmitter_id: None,
            sensor: None,
            supports_cool: defaults::SUPPORTS_COOL,
            supports_heat: defaults::SUPPORTS_HEAT,
        }
    }
}

impl ClimateIrBase {
    pub fn from_fields(fields: &Fields) -> Self {
        ClimateIrBase {
            name: fields.string(keys::NAME),
            receiver_id: fields.string(keys::RECEIVER_ID),
            transmitter_id: fields.string(keys::TRANSMITTER_ID),
            sensor: fields.string(keys::SENSOR),
            supports_cool: fields
                .boolean(keys::SUPPORTS_COOL)
                .unwrap_or(defaults::SUPPORTS_COOL),
            supports_heat: fields
                .boolean(keys::SUPPORTS_HEAT)
                .unwrap_or(defaults::SUPPORTS_HEAT),
        }
    }
}
