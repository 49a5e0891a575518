#![allow(dead_code)]
// Not every test binary uses every payload

pub const SINGLE_ENTRY: &str = r#"
climate:
  - platform: mhi_multi_ir
    model: ZJ
"#;

pub const HOUSE: &str = r#"
esphome:
  name: house

remote_receiver:
  id: ir_rx
  pin: GPIO14

climate:
  - platform: mhi_multi_ir
    id: living_ac
    name: Living room AC
    model: ZMP
    set_fan_levels: "4"
    receiver_id: ir_rx
  - platform: mhi_multi_ir
    name: Bedroom AC
    model: zea
    supports_heat: false
  - platform: daikin
    name: Garage AC
"#;

pub const MIXED: &str = r#"
climate:
  - platform: mhi_multi_ir
    id: office_ac
    model: ZM
  - platform: mhi_multi_ir
    id: office_ac
    model: ZJ
  - platform: mhi_multi_ir
    model: ZX
    set_fan_levels: "5"
    swing: true
  - platform: mhi_zj
    name: Old AC
  - platform: mhi_multi_ir
    id: hall_ac
    model: ZEA
"#;

pub const NOT_A_DICTIONARY: &str = "- climate\n- mhi_multi_ir\n";
