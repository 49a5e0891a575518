pub const LOG_LEVEL: &str = "info";

pub const SET_FAN_LEVELS: &str = "3";
pub const SUPPORTS_COOL: bool = true;
pub const SUPPORTS_HEAT: bool = true;
