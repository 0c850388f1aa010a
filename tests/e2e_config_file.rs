/// End-to-end tests for config file discovery, explicit `--config` paths and
/// CLI option merging.
///
/// Every test runs the binary in an isolated temp directory and points the
/// API at a port nothing listens on, so fetches fail fast.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

const CONFIG_FILENAME: &str = "dashboard-sync.config.yml";

fn write_config(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// Discovery
// ============================================================================

#[test]
fn test_discovered_config_selects_view() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        temp_dir.path(),
        CONFIG_FILENAME,
        "api_base_url: http://127.0.0.1:9/api\nview: shipping\n",
    );

    cargo_bin_cmd!("dashboard-sync")
        .current_dir(temp_dir.path())
        .arg("fetch")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("shipping"))
        .stdout(predicate::str::contains("sales").not());
}

#[test]
fn test_cli_flags_override_config_file() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        temp_dir.path(),
        CONFIG_FILENAME,
        "api_base_url: http://127.0.0.1:9/api\nview: shipping\ntime_range: 7d\n",
    );

    cargo_bin_cmd!("dashboard-sync")
        .current_dir(temp_dir.path())
        .args(["fetch", "--view", "analytics", "--range", "90d"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("range 90d"))
        .stdout(predicate::str::contains("sales"));
}

#[test]
fn test_unknown_fields_warn_but_continue() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        temp_dir.path(),
        CONFIG_FILENAME,
        "api_base_url: http://127.0.0.1:9/api\ntheme: dark\n",
    );

    cargo_bin_cmd!("dashboard-sync")
        .current_dir(temp_dir.path())
        .arg("fetch")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown config field 'theme'"));
}

// ============================================================================
// Explicit --config
// ============================================================================

#[test]
fn test_explicit_toml_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(
        temp_dir.path(),
        "dashboard.toml",
        "api_base_url = \"http://127.0.0.1:9/api\"\ntime_range = \"1y\"\n",
    );

    cargo_bin_cmd!("dashboard-sync")
        .current_dir(temp_dir.path())
        .args(["fetch", "--config"])
        .arg(&config)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("range 1y"));
}

#[test]
fn test_missing_explicit_config_is_error() {
    let temp_dir = TempDir::new().unwrap();

    cargo_bin_cmd!("dashboard-sync")
        .current_dir(temp_dir.path())
        .args(["fetch", "--config", "does-not-exist.yml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn test_malformed_config_is_error() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), CONFIG_FILENAME, "view: [unclosed\n");

    cargo_bin_cmd!("dashboard-sync")
        .current_dir(temp_dir.path())
        .arg("fetch")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_invalid_config_value_is_error() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        temp_dir.path(),
        CONFIG_FILENAME,
        "push_url: http://localhost:5000/ws\n",
    );

    cargo_bin_cmd!("dashboard-sync")
        .current_dir(temp_dir.path())
        .arg("fetch")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("push_url"))
        .stderr(predicate::str::contains("💡 Hint:"));
}

#[cfg(unix)]
#[test]
fn test_symlinked_config_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let target = write_config(temp_dir.path(), "real.yml", "view: overview\n");
    std::os::unix::fs::symlink(&target, temp_dir.path().join(CONFIG_FILENAME)).unwrap();

    cargo_bin_cmd!("dashboard-sync")
        .current_dir(temp_dir.path())
        .arg("fetch")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Security violation"));
}
