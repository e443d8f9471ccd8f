//! Error handling for warbler-store
//!
//! Wraps warbler-core WbError with store-specific helpers

use warbler_core::errors::{WbError, WbErrorKind};

/// Result type alias using WbError
pub type Result<T> = std::result::Result<T, WbError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> WbError {
    WbError::new(WbErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> WbError {
    WbError::new(WbErrorKind::ConstraintViolation)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Create a seed validation error
pub fn seed_validation(reason: &str) -> WbError {
    WbError::new(WbErrorKind::InvalidInput)
        .with_op("seed_parse")
        .with_message(reason.to_string())
}

/// Create a database error from rusqlite::Error
///
/// Constraint failures (unique index, CHECK, foreign key) are classified as
/// `ConstraintViolation`; everything else is `Persistence`.
pub fn from_rusqlite(err: rusqlite::Error) -> WbError {
    let kind = if is_constraint_violation(&err) {
        WbErrorKind::ConstraintViolation
    } else {
        WbErrorKind::Persistence
    };
    WbError::new(kind).with_op("sqlite").with_message(err.to_string())
}

/// Check whether a rusqlite error is a constraint failure
pub fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err.sqlite_error_code(),
        Some(rusqlite::ErrorCode::ConstraintViolation)
    )
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> WbError {
    WbError::new(WbErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
