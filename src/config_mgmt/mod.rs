mod base_schema;
mod capabilities;
mod ids;
mod schema;

pub mod config;
pub mod document;

pub use base_schema::{ClimateIrBase, BASE_FIELDS};
pub use capabilities::{Capability, FanLevels, Model, ProtocolFamily, FAN_LEVELS, MODELS};
pub use config::{validate, ValidatedConfig, ValidatedEntry, CONFIG_SCHEMA};
pub use ids::{IdAllocator, IdError};
pub use schema::{FieldError, FieldSpec, FieldValue, ValidationError};
