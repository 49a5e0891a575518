// Configuration keys understood by the `mhi_multi_ir` platform
pub const PLATFORM: &str = "platform";
pub const ID: &str = "id";
pub const MODEL: &str = "model";
pub const SET_FAN_LEVELS: &str = "set_fan_levels";

// Keys owned by the climate-IR base schema
pub const NAME: &str = "name";
pub const RECEIVER_ID: &str = "receiver_id";
pub const TRANSMITTER_ID: &str = "transmitter_id";
pub const SENSOR: &str = "sensor";
pub const SUPPORTS_COOL: &str = "supports_cool";
pub const SUPPORTS_HEAT: &str = "supports_heat";

// Top-level document key holding climate entries
pub const CLIMATE: &str = "climate";
