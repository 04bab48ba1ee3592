//! Error types for the itinerary store.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all itinerary operations.
#[derive(Error, Debug)]
pub enum ItineraryError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// A row that the operation depends on does not exist
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: u64 },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// The request disagrees with the current state of the store
    #[error("Conflict: {message}")]
    Conflict { message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// The small set of failure kinds a UI branches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An expected row was absent.
    NotFound,
    /// The caller passed input the store refuses.
    Validation,
    /// A reorder sequence does not match the current children.
    Conflict,
    /// Any lower-level failure: I/O, corruption, schema mismatch.
    Storage,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::NotFound => "not found",
            ErrorKind::Validation => "validation",
            ErrorKind::Conflict => "conflict",
            ErrorKind::Storage => "storage",
        };
        f.write_str(name)
    }
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> ItineraryError {
        ItineraryError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ItineraryError {
        ItineraryError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ItineraryError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Classifies the error into the taxonomy the UI renders.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ItineraryError::NotFound { .. } => ErrorKind::NotFound,
            ItineraryError::InvalidInput { .. } => ErrorKind::Validation,
            ItineraryError::Conflict { .. } => ErrorKind::Conflict,
            ItineraryError::Database { .. }
            | ItineraryError::FileSystem { .. }
            | ItineraryError::XdgDirectory(_)
            | ItineraryError::Configuration { .. } => ErrorKind::Storage,
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| ItineraryError::database(message).with_source(e))
    }
}

/// Result type alias for itinerary operations
pub type Result<T> = std::result::Result<T, ItineraryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        let not_found = ItineraryError::NotFound {
            entity: "Stop",
            id: 7,
        };
        assert_eq!(not_found.kind(), ErrorKind::NotFound);
        assert_eq!(not_found.to_string(), "Stop with ID 7 not found");

        let invalid = ItineraryError::invalid_input("rating").with_reason("must be 1-5");
        assert_eq!(invalid.kind(), ErrorKind::Validation);

        let conflict = ItineraryError::Conflict {
            message: "stale order".to_string(),
        };
        assert_eq!(conflict.kind(), ErrorKind::Conflict);

        let storage = ItineraryError::database("boom").with_source(rusqlite::Error::InvalidQuery);
        assert_eq!(storage.kind(), ErrorKind::Storage);

        let config = ItineraryError::Configuration {
            message: "lock poisoned".to_string(),
        };
        assert_eq!(config.kind(), ErrorKind::Storage);
    }

    #[test]
    fn test_db_context_keeps_source() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        let err = result.db_context("Failed to load day").unwrap_err();

        assert_eq!(err.to_string(), "Database error: Failed to load day");
        assert!(std::error::Error::source(&err).is_some());
    }
}
