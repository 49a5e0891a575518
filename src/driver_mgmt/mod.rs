mod driver;
mod factory;
mod register;
mod registry;
mod traits;

pub use driver::{ClimateIr, MhiClimate, MAX_TEMPERATURE, MIN_TEMPERATURE, TEMPERATURE_STEP};
pub use factory::instantiate;
pub use register::{register, ClimateIrRegistrar, ComponentHandle};
pub use registry::{ComponentRegistry, Manifest, RegisteredClimate};
pub use traits::{ClimateFanMode, ClimateMode, ClimatePreset, ClimateSwingMode, ClimateTraits};
