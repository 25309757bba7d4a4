//! Environment override tests for the configuration loader
//!
//! These tests modify environment variables and must run sequentially:
//!
//! ```bash
//! cargo test -p snowbank-infrastructure --test unit config_env -- --test-threads=1 --ignored
//! ```
//!
//! # Safety
//!
//! Rust 2024 requires `unsafe` for `env::set_var`/`env::remove_var`.
//! Tests MUST run with `--test-threads=1` to prevent data races.

use snowbank_domain::ReportFailurePolicy;
use snowbank_infrastructure::config::ConfigLoader;
use std::env;
use tempfile::TempDir;

fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snowbank.toml");
    std::fs::write(&path, "[logging]\nlevel = \"warn\"\n").unwrap();

    set_env("SNOWBANK__LOGGING__LEVEL", "trace");
    set_env("SNOWBANK__CONTAINER__REPORT_FAILURE", "propagate");
    set_env("SNOWBANK__CONTAINER__ATOMIC_REGISTRATION", "true");

    let config = ConfigLoader::new().with_config_path(&path).load();

    remove_env("SNOWBANK__LOGGING__LEVEL");
    remove_env("SNOWBANK__CONTAINER__REPORT_FAILURE");
    remove_env("SNOWBANK__CONTAINER__ATOMIC_REGISTRATION");

    let config = config.expect("Should load config");
    assert_eq!(config.logging.level, "trace");
    assert_eq!(config.container.report_failure, ReportFailurePolicy::Propagate);
    assert!(config.container.atomic_registration);
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_single_underscore_prefix_not_loaded() {
    let dir = TempDir::new().unwrap();
    set_env("SNOWBANK_LOGGING_LEVEL", "trace");

    let config = ConfigLoader::new()
        .with_config_path(dir.path().join("missing.toml"))
        .load();

    remove_env("SNOWBANK_LOGGING_LEVEL");

    assert_eq!(config.expect("Should load config").logging.level, "info");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_custom_env_prefix() {
    let dir = TempDir::new().unwrap();
    set_env("ZOO__CONTAINER__REPORT_FAILURE", "propagate");

    let config = ConfigLoader::new()
        .with_config_path(dir.path().join("missing.toml"))
        .with_env_prefix("ZOO")
        .load();

    remove_env("ZOO__CONTAINER__REPORT_FAILURE");

    assert_eq!(
        config.expect("Should load config").container.report_failure,
        ReportFailurePolicy::Propagate
    );
}
