//! Error Extension Tests

use snowbank_domain::Error;
use snowbank_infrastructure::error_ext::ErrorContext;

fn missing_file() -> std::result::Result<(), std::io::Error> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))
}

#[test]
fn test_context_maps_to_internal() {
    let err = missing_file().context("Reading snowflakes").unwrap_err();
    match err {
        Error::Internal { message } => {
            assert!(message.contains("Reading snowflakes"));
            assert!(message.contains("gone"));
        }
        other => panic!("Expected Internal error, got {other:?}"),
    }
}

#[test]
fn test_with_context_is_lazy() {
    let ok: std::result::Result<u32, std::io::Error> = Ok(7);
    let value = ok
        .with_context(|| -> String { panic!("context must not be built on success") })
        .unwrap();
    assert_eq!(value, 7);

    let err = missing_file()
        .with_context(|| format!("Loading {}", "zoo"))
        .unwrap_err();
    assert!(err.to_string().contains("Loading zoo"));
}

#[test]
fn test_io_context_keeps_source() {
    let err = missing_file().io_context("Writing report").unwrap_err();
    match &err {
        Error::Io { message, source } => {
            assert!(message.starts_with("Writing report"));
            assert!(source.is_some());
        }
        other => panic!("Expected Io error, got {other:?}"),
    }
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_config_context_maps_to_configuration() {
    let err = missing_file().config_context("Loading config").unwrap_err();
    assert!(matches!(err, Error::Configuration { source: Some(_), .. }));
}
