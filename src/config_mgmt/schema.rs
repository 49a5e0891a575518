//! Table-driven validation of a single configuration entry
//!
//! A schema is a slice of [`FieldSpec`]s. [`validate_fields`] walks the table in
//! order and collects every problem it finds instead of stopping at the first.

use std::collections::BTreeMap;
use std::fmt;

use itertools::Itertools;
use serde_yaml::{Mapping, Value};
use thiserror::Error;

use super::capabilities::{Capability, FanLevels, Model};

#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Str(String),
    Bool(bool),
    Model(Model),
    FanLevels(FanLevels),
}

impl From<Model> for FieldValue {
    fn from(value: Model) -> Self {
        FieldValue::Model(value)
    }
}

impl From<FanLevels> for FieldValue {
    fn from(value: FanLevels) -> Self {
        FieldValue::FanLevels(value)
    }
}

pub type Check = fn(&Value) -> Result<FieldValue, String>;

#[derive(Clone, Copy, Debug)]
pub enum Presence {
    Required,
    Optional,
    /// Optional; the default goes through the same check as a user value
    Default(&'static str),
}

#[derive(Clone, Copy)]
pub struct FieldSpec {
    pub key: &'static str,
    pub presence: Presence,
    pub check: Check,
}

impl FieldSpec {
    pub const fn required(key: &'static str, check: Check) -> Self {
        FieldSpec {
            key,
            presence: Presence::Required,
            check,
        }
    }

    pub const fn optional(key: &'static str, check: Check) -> Self {
        FieldSpec {
            key,
            presence: Presence::Optional,
            check,
        }
    }

    pub const fn with_default(key: &'static str, default: &'static str, check: Check) -> Self {
        FieldSpec {
            key,
            presence: Presence::Default(default),
            check,
        }
    }
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("key", &self.key)
            .field("presence", &self.presence)
            .finish()
    }
}

/// A problem with one field of an entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        FieldError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn missing(field: &str) -> Self {
        FieldError::new(field, "required key not provided")
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)
    }
}

/// All field errors of one configuration entry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid configuration for {entry}: {}", .errors.iter().join("; "))]
pub struct ValidationError {
    pub entry: String,
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.field.as_str())
    }
}

/// Values that passed validation, keyed by field name
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Fields(BTreeMap<&'static str, FieldValue>);

impl Fields {
    pub fn string(&self, key: &str) -> Option<String> {
        match self.0.get(key) {
            Some(FieldValue::Str(s)) => Some(s.clone()),
            _ => None,
        }
    }

    pub fn boolean(&self, key: &str) -> Option<bool> {
        match self.0.get(key) {
            Some(FieldValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn model(&self, key: &str) -> Result<Model, FieldError> {
        match self.0.get(key) {
            Some(FieldValue::Model(m)) => Ok(*m),
            _ => Err(FieldError::missing(key)),
        }
    }

    pub fn fan_levels(&self, key: &str) -> Result<FanLevels, FieldError> {
        match self.0.get(key) {
            Some(FieldValue::FanLevels(l)) => Ok(*l),
            _ => Err(FieldError::missing(key)),
        }
    }
}

/// Validate `raw` against `schema`, reporting every invalid field
pub fn validate_fields(schema: &[FieldSpec], raw: &Mapping) -> Result<Fields, Vec<FieldError>> {
    let mut fields = Fields::default();
    let mut errors = Vec::new();

    for spec in schema {
        let result = match (raw.get(spec.key), spec.presence) {
            (Some(value), _) => (spec.check)(value),
            (None, Presence::Default(default)) => (spec.check)(&Value::from(default)),
            (None, Presence::Required) => {
                errors.push(FieldError::missing(spec.key));
                continue;
            }
            (None, Presence::Optional) => continue,
        };
        match result {
            Ok(value) => {
                fields.0.insert(spec.key, value);
            }
            Err(message) => errors.push(FieldError::new(spec.key, message)),
        }
    }

    for key in raw.keys() {
        match key.as_str() {
            Some(k) if schema.iter().any(|spec| spec.key == k) => {}
            _ => errors.push(FieldError::new(render(key), "extra keys not allowed")),
        }
    }

    if errors.is_empty() {
        Ok(fields)
    } else {
        Err(errors)
    }
}

/// Render a YAML scalar the way a user wrote it
pub fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| format!("{other:?}")),
    }
}

fn scalar_string(value: &Value) -> Result<String, String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(format!("string value expected, got '{}'", render(other))),
    }
}

pub fn check_string(value: &Value) -> Result<FieldValue, String> {
    scalar_string(value).map(FieldValue::Str)
}

pub fn check_identifier(value: &Value) -> Result<FieldValue, String> {
    let id = scalar_string(value)?;
    let mut chars = id.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if valid_start && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(FieldValue::Str(id))
    } else {
        Err(format!(
            "invalid ID '{id}': IDs must only contain letters, digits and underscores \
             and must not start with a digit"
        ))
    }
}

pub fn check_bool(value: &Value) -> Result<FieldValue, String> {
    match value {
        Value::Bool(b) => Ok(FieldValue::Bool(*b)),
        Value::String(s) => match s.to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "enable" => Ok(FieldValue::Bool(true)),
            "false" | "no" | "off" | "disable" => Ok(FieldValue::Bool(false)),
            _ => Err(format!("expected boolean value, got '{s}'")),
        },
        other => Err(format!("expected boolean value, got '{}'", render(other))),
    }
}

pub fn check_enum<T>(value: &Value) -> Result<FieldValue, String>
where
    T: Capability + Into<FieldValue>,
{
    let token = scalar_string(value)?;
    T::from_token(&token).map(Into::into).ok_or_else(|| {
        format!(
            "unknown {} '{}', valid options are {}",
            T::KIND,
            token,
            T::accepted_tokens()
        )
    })
}
