//! Tests for snowflake metadata descriptors

use snowbank_domain::{Error, MetadataDescriptor};

#[test]
fn test_defaults_are_singleton_and_allowed() {
    let descriptor = MetadataDescriptor::new("Mindy").expect("valid name");
    assert_eq!(descriptor.name(), "Mindy");
    assert!(!descriptor.is_transient());
    assert!(!descriptor.is_denied());
    assert_eq!(descriptor.report_destination(), None);
}

#[test]
fn test_empty_name_rejected() {
    match MetadataDescriptor::new("") {
        Err(Error::InvalidArgument { message }) => assert!(message.contains("name")),
        other => panic!("Expected InvalidArgument, got {:?}", other),
    }
}

#[test]
fn test_markers_follow_flags() {
    let descriptor = MetadataDescriptor::new("Mindy")
        .expect("valid name")
        .with_transient(true)
        .with_denied(true)
        .with_report("fox.txt");

    assert_eq!(
        descriptor.markers(),
        vec![
            "@Snowflake(name = \"Mindy\")".to_string(),
            "@Transient".to_string(),
            "@Denied".to_string(),
            "@Report(destination = \"fox.txt\")".to_string(),
        ]
    );
}

#[test]
fn test_plain_descriptor_has_only_registration_marker() {
    let descriptor = MetadataDescriptor::new("Mindy").expect("valid name");
    assert_eq!(descriptor.markers().len(), 1);
}

#[test]
fn test_serializes_to_json() {
    let descriptor = MetadataDescriptor::new("Mindy")
        .expect("valid name")
        .with_report("fox.txt");
    let json = serde_json::to_value(&descriptor).expect("serializable");
    assert_eq!(json["name"], "Mindy");
    assert_eq!(json["transient"], false);
    assert_eq!(json["report_destination"], "fox.txt");
}
