//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use unitwise_foundation::{Error, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_empty_key() {
    let err = Error::empty_key();
    assert!(matches!(err.kind, ErrorKind::EmptyKey));
    let msg = format!("{err}");
    assert!(msg.contains("empty"));
}

#[test]
fn error_duplicate_unit() {
    let err = Error::duplicate_unit("mile");
    assert!(matches!(err.kind, ErrorKind::DuplicateUnit(_)));
    let msg = format!("{err}");
    assert!(msg.contains("mile"));
}

#[test]
fn error_invalid_factor() {
    let err = Error::invalid_factor("furlong", -1.0);
    assert!(matches!(err.kind, ErrorKind::InvalidFactor { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("furlong"));
    assert!(msg.contains("-1"));
}

#[test]
fn error_editor() {
    let err = Error::editor("terminal gone");
    assert!(matches!(err.kind, ErrorKind::Editor(_)));
    let msg = format!("{err}");
    assert!(msg.contains("terminal gone"));
}

#[test]
fn error_internal() {
    let err = Error::internal("cache poisoned");
    assert!(matches!(err.kind, ErrorKind::Internal(_)));
    let msg = format!("{err}");
    assert!(msg.contains("cache poisoned"));
}

// =============================================================================
// Context and Conversions
// =============================================================================

#[test]
fn error_with_context() {
    let err = Error::duplicate_unit("oz").with_context("registering weight aliases");
    assert_eq!(err.context.as_deref(), Some("registering weight aliases"));
    assert!(matches!(err.kind, ErrorKind::DuplicateUnit(_)));
}

#[test]
fn error_kind_converts_to_error() {
    let err: Error = ErrorKind::EmptyKey.into();
    assert!(matches!(err.kind, ErrorKind::EmptyKey));
    assert!(err.context.is_none());
}

#[test]
fn io_error_converts_to_kind() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let kind: ErrorKind = io.into();
    assert!(matches!(kind, ErrorKind::Io(_)));
}
