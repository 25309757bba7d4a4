//! Constants Tests

use snowbank_infrastructure::constants::*;

#[test]
fn test_config_constants() {
    assert_eq!(DEFAULT_CONFIG_FILENAME, "snowbank.toml");
    assert_eq!(DEFAULT_CONFIG_DIR, "snowbank");
    assert_eq!(CONFIG_ENV_PREFIX, "SNOWBANK");
    assert_eq!(CONFIG_ENV_SEPARATOR, "__");
}

#[test]
fn test_logging_constants() {
    assert_eq!(DEFAULT_LOG_LEVEL, "info");
    assert!(LOG_FILTER_ENV.starts_with(CONFIG_ENV_PREFIX));
    assert!(!DEFAULT_LOG_FILE_PREFIX.is_empty());
}
