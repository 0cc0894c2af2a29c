//! End-to-end tests for the `kiln` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Project with the conventional layout: src/index.html and src/assets/.
fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    fs::create_dir_all(src.join("assets")).unwrap();
    fs::write(src.join("index.html"), "<!doctype html><title><%= title %></title>").unwrap();
    fs::write(src.join("index.js"), "console.log('hello')").unwrap();
    temp
}

fn kiln(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("kiln").unwrap();
    cmd.current_dir(root)
        .env_remove("NODE_ENV")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    for (key, _) in std::env::vars().filter(|(key, _)| key.starts_with("KILN_")) {
        cmd.env_remove(key);
    }
    cmd
}

fn inspect_json(cmd: &mut Command) -> Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "inspect failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

fn plugin<'a>(config: &'a Value, kind: &str) -> &'a Value {
    config["plugins"]
        .as_array()
        .unwrap()
        .iter()
        .find(|entry| entry["kind"] == kind)
        .unwrap_or_else(|| panic!("plugin {kind} missing"))
}

#[test]
fn inspect_production_configuration() {
    let temp = project();
    let config = inspect_json(kiln(temp.path()).args(["--mode", "production", "inspect"]));

    assert_eq!(config["mode"], "production");
    assert_eq!(config["devtool"], "none");
    assert_eq!(config["output"]["filename"], "js/[name].[contenthash:8].js");
    assert_eq!(config["optimization"]["minimize"], true);
    assert_eq!(plugin(&config, "image-minify")["enabled"], true);
    assert_eq!(plugin(&config, "css-minify")["enabled"], true);
    assert_eq!(
        plugin(&config, "css-extract")["options"]["filename"],
        "css/[name].[contenthash:8].css"
    );
}

#[test]
fn inspect_development_reads_node_env() {
    let temp = project();
    let config = inspect_json(kiln(temp.path()).env("NODE_ENV", "development").arg("inspect"));

    assert_eq!(config["mode"], "development");
    assert_eq!(config["devtool"], "inline");
    assert_eq!(config["output"]["filename"], "js/[name].js");
    assert_eq!(plugin(&config, "image-minify")["enabled"], false);
    assert_eq!(plugin(&config, "html")["options"]["template_parameters"]["title"], "webpack Boilerplate");
}

#[test]
fn mode_flag_overrides_node_env() {
    let temp = project();
    let config = inspect_json(
        kiln(temp.path())
            .env("NODE_ENV", "development")
            .args(["inspect", "--mode", "production"]),
    );
    assert_eq!(config["mode"], "production");
}

#[test]
fn compact_output_is_single_line() {
    let temp = project();
    kiln(temp.path())
        .args(["--mode", "development", "inspect", "--compact"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\"mode\":\"development\""))
        .stdout(predicate::str::contains('\n').count(1));
}

#[test]
fn missing_mode_fails_fast() {
    let temp = project();
    kiln(temp.path())
        .arg("inspect")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("build mode is not set"));
}

#[test]
fn unrecognized_mode_fails_fast() {
    let temp = project();
    kiln(temp.path())
        .env("NODE_ENV", "Production")
        .arg("inspect")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized build mode 'Production'"));
}

#[test]
fn env_overrides_project_file() {
    let temp = project();
    fs::write(
        temp.path().join("kiln.toml"),
        "[dev_server]\nport = 8080\n\n[html]\ntitle = \"Gallery\"\n",
    )
    .unwrap();

    let config = inspect_json(
        kiln(temp.path())
            .env("KILN_DEV_SERVER__PORT", "4000")
            .args(["--mode", "development", "inspect"]),
    );
    assert_eq!(config["dev_server"]["port"], 4000);
    assert_eq!(plugin(&config, "html")["options"]["template_parameters"]["title"], "Gallery");
}

#[test]
fn numeric_env_title_stays_a_string() {
    let temp = project();
    let config = inspect_json(
        kiln(temp.path())
            .env("KILN_HTML__TITLE", "2024")
            .args(["--mode", "production", "inspect"]),
    );
    assert_eq!(plugin(&config, "html")["options"]["template_parameters"]["title"], "2024");
}

#[test]
fn bad_env_override_is_reported_by_name() {
    let temp = project();
    kiln(temp.path())
        .env("KILN_DEV_SERVER__PORT", "high")
        .args(["--mode", "development", "inspect"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("KILN_DEV_SERVER__PORT"));
}

#[test]
fn production_profile_applies() {
    let temp = project();
    fs::write(
        temp.path().join("kiln.toml"),
        "[layout]\nout_dir = \"dist\"\n\n[profiles.production.layout]\nout_dir = \"public\"\n",
    )
    .unwrap();

    let prod = inspect_json(kiln(temp.path()).args(["--mode", "production", "inspect"]));
    let dev = inspect_json(kiln(temp.path()).args(["--mode", "development", "inspect"]));

    assert!(prod["output"]["path"].as_str().unwrap().ends_with("public"));
    assert!(dev["output"]["path"].as_str().unwrap().ends_with("dist"));
}

#[test]
fn package_json_field_is_discovered() {
    let temp = project();
    fs::write(
        temp.path().join("package.json"),
        r#"{ "name": "site", "kiln": { "html": { "title": "From package.json" } } }"#,
    )
    .unwrap();

    let config = inspect_json(kiln(temp.path()).args(["--mode", "development", "inspect"]));
    assert_eq!(
        plugin(&config, "html")["options"]["template_parameters"]["title"],
        "From package.json"
    );
}

#[test]
fn check_reports_missing_source_dir() {
    let temp = TempDir::new().unwrap();
    kiln(temp.path())
        .args(["--mode", "production", "check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("source directory not found"));
}

#[test]
fn check_reports_missing_template() {
    let temp = project();
    fs::remove_file(temp.path().join("src/index.html")).unwrap();
    kiln(temp.path())
        .args(["--mode", "development", "check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTML template not found"));
}

#[test]
fn inspect_can_skip_fs_checks() {
    let temp = TempDir::new().unwrap();
    kiln(temp.path())
        .args(["--mode", "development", "inspect", "--no-fs-check"])
        .assert()
        .success();
}

#[test]
fn check_summarizes_valid_project() {
    let temp = project();
    kiln(temp.path())
        .args(["--mode", "production", "check", "--loaders"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Project is valid"))
        .stderr(predicate::str::contains("css-minimizer-webpack-plugin"))
        .stderr(predicate::str::contains("sass-loader"));
}

#[test]
fn check_rejects_nested_output_dir() {
    let temp = project();
    fs::write(temp.path().join("kiln.toml"), "[layout]\nout_dir = \"src/build\"\n").unwrap();
    kiln(temp.path())
        .args(["--mode", "production", "check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid out_dir path"));
}

#[test]
fn filename_development_is_plain() {
    let temp = project();
    kiln(temp.path())
        .env("NODE_ENV", "development")
        .args(["filename", "main", "js", "--kind", "script"])
        .assert()
        .success()
        .stdout("js/main.js\n");
}

#[test]
fn filename_production_requires_file() {
    let temp = project();
    kiln(temp.path())
        .args(["--mode", "production", "filename", "main", "js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--file is required"));
}

#[test]
fn filename_production_hashes_content() {
    let temp = project();
    let asset = temp.path().join("empty.css");
    fs::write(&asset, "").unwrap();

    kiln(temp.path())
        .args(["--mode", "production", "filename", "main", "css", "--kind", "style", "--file"])
        .arg(&asset)
        .assert()
        .success()
        .stdout("css/main.e3b0c442.css\n");
}

#[test]
fn filename_missing_file_is_reported() {
    let temp = project();
    kiln(temp.path())
        .args(["--mode", "production", "filename", "logo", "png", "--file", "nope.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn schema_does_not_need_a_mode() {
    let temp = TempDir::new().unwrap();
    let output = kiln(temp.path()).arg("schema").output().unwrap();
    assert!(output.status.success());

    let schema: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(schema["properties"].get("dev_server").is_some());
    assert!(schema["properties"].get("profiles").is_some());
}
