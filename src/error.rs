//! Error types for schema inspection and model generation.

use rusqlite::ErrorCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelBuilderError {
    #[error("Connection failed: {message} (path: {path})")]
    Connection { message: String, path: String },

    #[error("Schema error: {message} (object: {object})")]
    Schema { message: String, object: String },
}

impl ModelBuilderError {
    /// Create a connection error for the given database path.
    pub fn connection(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Create a schema error for the catalog object that was queried.
    pub fn schema(message: impl Into<String>, object: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
            object: object.into(),
        }
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }

    /// Classify a rusqlite failure raised while querying `object` in the
    /// database at `path`.
    ///
    /// Failures that mean the file cannot be used as a database at all are
    /// connection errors; everything else is reported against the object.
    pub fn from_sqlite(err: rusqlite::Error, path: &str, object: &str) -> Self {
        match err.sqlite_error_code() {
            Some(
                ErrorCode::NotADatabase
                | ErrorCode::CannotOpen
                | ErrorCode::PermissionDenied
                | ErrorCode::DatabaseBusy
                | ErrorCode::DatabaseLocked
                | ErrorCode::DatabaseCorrupt
                | ErrorCode::SystemIoFailure,
            ) => Self::connection(err.to_string(), path),
            _ => Self::schema(err.to_string(), object),
        }
    }
}

/// Result type alias for inspection and generation.
pub type Result<T> = std::result::Result<T, ModelBuilderError>;
