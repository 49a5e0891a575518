pub const LOG_LEVEL: &str = "LOG_LEVEL";
pub const HOME: &str = "MHI_IR_HOME";
pub const OUTPUT: &str = "MHI_IR_OUTPUT";
