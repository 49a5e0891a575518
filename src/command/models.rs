use anyhow::Result;

use crate::config_mgmt::{FAN_LEVELS, MODELS};

pub fn models() -> Result<()> {
    println!("model:");
    for (token, model) in MODELS {
        println!("  {token} ({}, {}-bit frames)", model.id(), model.protocol().bits());
    }
    println!("set_fan_levels:");
    for (token, levels) in FAN_LEVELS {
        println!("  \"{token}\" ({levels})");
    }
    Ok(())
}
