//! CLI integration tests
//!
//! Runs the `geonames-conf` binary against temporary settings files.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const ENV_KEYS: &[&str] = &[
    "CITIES_DATA_DIR",
    "CITIES_LOCALES",
    "CITIES_POSTAL_CODES",
    "CITIES_PLUGINS",
    "CITIES_IGNORE_EMPTY_REGIONS",
];

fn geonames_conf() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("geonames-conf");
    for key in ENV_KEYS {
        cmd.env_remove(key);
    }
    cmd
}

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("cities.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_version_flag() {
    let mut cmd = geonames_conf();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    let mut cmd = geonames_conf();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("urls"))
        .stdout(predicate::str::contains("countries"));
}

#[test]
fn test_check_defaults() {
    let mut cmd = geonames_conf();
    cmd.arg("check");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("configuration ok"));
}

#[test]
fn test_check_conflicting_filenames() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[files.city]
filename = "cities1000.zip"
filenames = ["cities500.zip"]
"#,
    );

    let mut cmd = geonames_conf();
    cmd.arg("--config").arg(&path).arg("check");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Only one key should be specified for 'city'",
        ));
}

#[test]
fn test_show_json_reflects_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
locales = ["EN", "fr"]
postal_codes = ["at"]
data_dir = "/srv/geonames"
"#,
    );

    let mut cmd = geonames_conf();
    cmd.args(["show", "--format", "json", "--config"]).arg(&path);

    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["locales"], serde_json::json!(["en", "fr"]));
    assert_eq!(json["postal_codes"], serde_json::json!(["AT"]));
    assert_eq!(json["data_dir"], "/srv/geonames");
}

#[test]
fn test_env_overrides_config_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "postal_codes = [\"at\"]\n");

    let mut cmd = geonames_conf();
    cmd.env("CITIES_POSTAL_CODES", "ch,li")
        .args(["show", "--config"])
        .arg(&path);

    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["postal_codes"], serde_json::json!(["CH", "LI"]));
}

#[test]
fn test_urls_for_city() {
    let mut cmd = geonames_conf();
    cmd.args(["urls", "city"]);

    cmd.assert()
        .success()
        .stdout("city\thttp://download.geonames.org/export/dump/cities5000.zip\n");
}

#[test]
fn test_urls_unknown_stage() {
    let mut cmd = geonames_conf();
    cmd.args(["urls", "hierarchy"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown import stage"));
}

#[test]
fn test_countries_retired() {
    let mut cmd = geonames_conf();
    cmd.args(["countries", "--retired"]);

    cmd.assert().success().stdout("CS\nAN\n");
}

#[test]
fn test_unregistered_plugin_fails() {
    let mut cmd = geonames_conf();
    cmd.env("CITIES_PLUGINS", "app.plugins.Missing").arg("check");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Plugin not found"));
}
