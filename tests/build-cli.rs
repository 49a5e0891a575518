use std::ffi::OsStr;
use std::path::Path;

use assert_cmd::{assert::Assert, Command};
use predicates::prelude::*;
use serde_json::Value;

mod stubs;

fn write_config(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("device.yaml");
    std::fs::write(&path, contents).unwrap();
    path
}

fn build_assert(config: impl AsRef<OsStr>, output: Option<&Path>) -> Assert {
    let mut cmd = Command::cargo_bin("mhi-ir").unwrap();
    cmd.env_remove("MHI_IR_OUTPUT").arg("build");
    if let Some(output) = output {
        cmd.arg("--output").arg(output);
    }
    cmd.arg(config).assert()
}

fn read_manifest(path: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn build_writes_manifest() {
    let tempdir = tempfile::tempdir().unwrap();
    let config = write_config(tempdir.path(), stubs::config::HOUSE);
    let output = tempdir.path().join("out/manifest.json");

    build_assert(&config, Some(&output)).success().stdout("");

    let manifest = read_manifest(&output);
    assert_eq!(manifest["components"][0], "living_ac");
    assert_eq!(manifest["climate"][0]["model"], "ZMP");
    assert_eq!(manifest["climate"][0]["set_fan_levels"], "FAN_LEVELS_4");
    assert_eq!(manifest["climate"][0]["climate_ir"]["receiver"], "ir_rx");
    assert_eq!(manifest["climate"][1]["id"], "mhi_multi_ir_mhiclimate");
    assert_eq!(manifest["climate"][1]["model"], "ZEA");
    assert_eq!(manifest["climate"][1]["protocol"], "mhi88");
}

#[test]
fn build_prints_manifest_without_output() {
    let tempdir = tempfile::tempdir().unwrap();
    let config = write_config(tempdir.path(), stubs::config::SINGLE_ENTRY);

    build_assert(&config, None)
        .success()
        .stdout(predicate::str::contains("\"id\": \"mhi_multi_ir_mhiclimate\""))
        .stdout(predicate::str::contains("\"set_fan_levels\": \"FAN_LEVELS_3\""));
}

#[test]
fn build_output_from_environment() {
    let tempdir = tempfile::tempdir().unwrap();
    let config = write_config(tempdir.path(), stubs::config::SINGLE_ENTRY);
    let output = tempdir.path().join("env-manifest.json");

    let mut cmd = Command::cargo_bin("mhi-ir").unwrap();
    cmd.env("MHI_IR_OUTPUT", &output)
        .arg("build")
        .arg(&config)
        .assert()
        .success();

    assert_eq!(read_manifest(&output)["climate"][0]["model"], "ZJ");
}

#[test]
fn build_keeps_valid_entries_when_others_fail() {
    let tempdir = tempfile::tempdir().unwrap();
    let config = write_config(tempdir.path(), stubs::config::MIXED);
    let output = tempdir.path().join("manifest.json");

    build_assert(&config, Some(&output))
        .failure()
        .stderr(predicate::str::contains(
            "Error: 4 climate entries failed, 1 registered",
        ));

    let manifest = read_manifest(&output);
    assert_eq!(manifest["components"], serde_json::json!(["hall_ac"]));
}
