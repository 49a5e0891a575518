//! Configuration schema of the `mhi_multi_ir` climate platform

use once_cell::sync::Lazy;
use serde::Serialize;
use serde_yaml::Value;

use super::base_schema::{ClimateIrBase, BASE_FIELDS};
use super::capabilities::{FanLevels, Model};
use super::schema::{
    check_enum, check_identifier, render, validate_fields, FieldError, FieldSpec, FieldValue,
    ValidationError,
};
use crate::constants::{defaults, keys, platforms};

const PLATFORM_FIELDS: &[FieldSpec] = &[
    FieldSpec::optional(keys::ID, check_identifier),
    FieldSpec::required(keys::MODEL, check_enum::<Model>),
    FieldSpec::with_default(
        keys::SET_FAN_LEVELS,
        defaults::SET_FAN_LEVELS,
        check_enum::<FanLevels>,
    ),
];

/// Base climate-IR fields extended with the platform's own fields
pub static CONFIG_SCHEMA: Lazy<Vec<FieldSpec>> = Lazy::new(|| {
    std::iter::once(FieldSpec::required(keys::PLATFORM, check_platform))
        .chain(BASE_FIELDS.iter().copied())
        .chain(PLATFORM_FIELDS.iter().copied())
        .collect()
});

fn check_platform(value: &Value) -> Result<FieldValue, String> {
    match value.as_str() {
        Some(platforms::MHI_MULTI_IR) => Ok(FieldValue::Str(platforms::MHI_MULTI_IR.to_string())),
        Some(platforms::MHI_ZJ) => Err(format!(
            "platform '{}' is deprecated, use platform '{}' with '{}: ZJ' instead",
            platforms::MHI_ZJ,
            platforms::MHI_MULTI_IR,
            keys::MODEL
        )),
        _ => Err(format!(
            "unsupported platform '{}', expected '{}'",
            render(value),
            platforms::MHI_MULTI_IR
        )),
    }
}

/// An entry that passed schema validation but whose identifier may still
/// need to be generated
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedEntry {
    pub declared_id: Option<String>,
    pub model: Model,
    pub fan_levels: FanLevels,
    pub base: ClimateIrBase,
}

/// Fully resolved configuration of one climate entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidatedConfig {
    pub id: String,
    /// `true` when `id` was not written by the user
    #[serde(skip)]
    pub generated_id: bool,
    pub model: Model,
    pub set_fan_levels: FanLevels,
    #[serde(flatten)]
    pub base: ClimateIrBase,
}

impl ValidatedEntry {
    pub fn with_id(self, id: String, generated_id: bool) -> ValidatedConfig {
        ValidatedConfig {
            id,
            generated_id,
            model: self.model,
            set_fan_levels: self.fan_levels,
            base: self.base,
        }
    }
}

/// Validate one raw climate entry. `entry` labels the entry in diagnostics.
pub fn validate(entry: &str, raw: &Value) -> Result<ValidatedEntry, ValidationError> {
    let to_error = |errors| ValidationError {
        entry: entry.to_string(),
        errors,
    };

    let mapping = raw
        .as_mapping()
        .ok_or_else(|| to_error(vec![FieldError::new(entry, "expected a dictionary")]))?;

    let fields = validate_fields(&CONFIG_SCHEMA, mapping).map_err(to_error)?;

    let model = fields.model(keys::MODEL).map_err(|e| to_error(vec![e]))?;
    let fan_levels = fields
        .fan_levels(keys::SET_FAN_LEVELS)
        .map_err(|e| to_error(vec![e]))?;

    Ok(ValidatedEntry {
        declared_id: fields.string(keys::ID),
        model,
        fan_levels,
        base: ClimateIrBase::from_fields(&fields),
    })
}
