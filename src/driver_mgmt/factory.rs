use super::driver::MhiClimate;
use crate::config_mgmt::ValidatedConfig;

/// Create the driver for a validated entry and apply its model settings.
///
/// Validation and identifier resolution have already happened; this only
/// mutates the freshly allocated instance.
pub fn instantiate(config: &ValidatedConfig) -> MhiClimate {
    let mut driver = MhiClimate::new(config.id.as_str());
    driver.set_model(config.model);
    driver.set_fan_levels(config.set_fan_levels);
    log::debug!(
        "Instantiated {} (model {}, {})",
        driver.id(),
        driver.model(),
        driver.fan_levels()
    );
    driver
}
