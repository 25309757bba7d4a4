//! Container Bootstrap Tests

use std::sync::Arc;

use snowbank_application::discovery::{SNOWFLAKES, SnowflakeRegistration, StaticTableDiscovery};
use snowbank_domain::{Error, MetadataDescriptor, ReportFailurePolicy, TypeDescriptor};
use snowbank_infrastructure::bootstrap::{bootstrap_container, bootstrap_linked_container};
use snowbank_infrastructure::config::AppConfig;
use tempfile::TempDir;

#[derive(Debug, Default)]
struct Fox {
    age: u32,
}

#[derive(Debug, Default)]
struct Owl;

#[linkme::distributed_slice(SNOWFLAKES)]
static HEDWIG: SnowflakeRegistration = SnowflakeRegistration {
    location: "forest::birds",
    name: "Hedwig",
    transient: false,
    denied: false,
    report_destination: "",
    type_descriptor: TypeDescriptor::of::<Owl>,
};

fn config_with(locations: &[&str]) -> AppConfig {
    let mut config = AppConfig::default();
    config.container.locations = locations.iter().map(|l| (*l).to_string()).collect();
    config
}

fn zoo_table() -> StaticTableDiscovery {
    StaticTableDiscovery::new()
        .with(
            "zoo",
            TypeDescriptor::of::<Fox>(),
            MetadataDescriptor::new("Mindy")
                .unwrap()
                .with_report("mindy.txt"),
        )
        .with(
            "farm",
            TypeDescriptor::of::<Owl>(),
            MetadataDescriptor::new("Barn").unwrap().with_transient(true),
        )
}

#[test]
fn test_bootstrap_registers_configured_locations() {
    let dir = TempDir::new().unwrap();
    let mut config = config_with(&["zoo", "farm"]);
    config.container.report_dir = Some(dir.path().to_path_buf());

    let container = bootstrap_container(&config, Arc::new(zoo_table())).unwrap();

    assert_eq!(container.names(), ["Barn", "Mindy"]);
    assert!(container.locations().contains("zoo"));
    assert!(container.locations().contains("farm"));
}

#[test]
fn test_bootstrap_without_locations_is_empty() {
    let container = bootstrap_container(&AppConfig::default(), Arc::new(zoo_table())).unwrap();
    assert!(container.is_empty());
    assert!(container.locations().is_empty());
}

#[test]
fn test_bootstrap_applies_settings() {
    let mut config = config_with(&[]);
    config.container.atomic_registration = true;
    config.container.report_failure = ReportFailurePolicy::Propagate;

    let container = bootstrap_container(&config, Arc::new(zoo_table())).unwrap();

    assert!(container.settings().atomic_registration);
    assert_eq!(
        container.settings().report_failure,
        ReportFailurePolicy::Propagate
    );
}

#[test]
fn test_bootstrap_writes_reports_under_report_dir() {
    let dir = TempDir::new().unwrap();
    let mut config = config_with(&["zoo"]);
    config.container.report_dir = Some(dir.path().to_path_buf());

    let container = bootstrap_container(&config, Arc::new(zoo_table())).unwrap();
    let mindy = container.lookup_as::<Fox>("Mindy").unwrap();
    assert_eq!(mindy.age, 0);

    let report = std::fs::read_to_string(dir.path().join("mindy.txt")).unwrap();
    assert!(report.contains("@Snowflake(name = \"Mindy\")"));
}

#[test]
fn test_bootstrap_stops_at_duplicate_location() {
    let config = config_with(&["zoo", "zoo"]);

    let err = bootstrap_container(&config, Arc::new(zoo_table())).unwrap_err();
    assert!(matches!(err, Error::DuplicateName { ref name } if name == "Mindy"));
}

#[test]
fn test_bootstrap_linked_container() {
    let config = config_with(&["forest"]);

    let container = bootstrap_linked_container(&config).unwrap();

    assert!(container.contains("Hedwig"));
    let first = container.lookup("Hedwig").unwrap();
    let second = container.lookup("Hedwig").unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}
