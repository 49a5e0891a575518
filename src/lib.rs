pub mod argsets;
pub mod command;
pub mod config_mgmt;
pub mod constants;
pub mod driver_mgmt;
pub mod helpers;
pub mod pipeline;
