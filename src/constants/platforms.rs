pub const MHI_MULTI_IR: &str = "mhi_multi_ir";
// Superseded by `mhi_multi_ir` with `model: ZJ`
pub const MHI_ZJ: &str = "mhi_zj";

// Native class the generated identifiers are derived from
pub const DRIVER_CLASS: &str = "mhi_multi_ir::MhiClimate";
