//! Error types for jobportal.
//!
//! This module defines all error types used throughout the jobportal crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// The kind of record a lookup was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// A job posting.
    Job,
    /// A blog post.
    Blog,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Job => write!(f, "job"),
            Self::Blog => write!(f, "blog post"),
        }
    }
}

/// The main error type for jobportal operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Catalog Errors ===
    /// No record exists for the given identifier.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// What was looked up.
        kind: RecordKind,
        /// The identifier that matched nothing.
        id: String,
    },

    /// Failed to read a catalog data file.
    #[error("failed to load catalog from {path}: {source}")]
    CatalogLoad {
        /// Path to the data file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A catalog data file is not valid JSON for its record type.
    #[error("failed to parse catalog file {path}: {source}")]
    CatalogParse {
        /// Path to the data file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// Catalog data parsed but violates an invariant.
    #[error("invalid catalog: {message}")]
    CatalogInvalid {
        /// Description of the violation.
        message: String,
    },

    // === Search Errors ===
    /// A filter value could not be understood.
    #[error("invalid value '{value}' for filter '{key}'")]
    InvalidFilter {
        /// The filter key (as it appears in the query string).
        key: &'static str,
        /// The rejected value.
        value: String,
    },

    // === Form Errors ===
    /// An admin form field failed validation.
    #[error("{field}: {message}")]
    InvalidField {
        /// Name of the form field.
        field: &'static str,
        /// Description of the validation failure.
        message: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Generic Errors ===
    /// An internal error occurred (bug).
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for jobportal operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a not-found error for a job id.
    #[must_use]
    pub fn job_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: RecordKind::Job,
            id: id.into(),
        }
    }

    /// Create a not-found error for a blog id or slug.
    #[must_use]
    pub fn blog_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: RecordKind::Blog,
            id: id.into(),
        }
    }

    /// Create an invalid filter error.
    #[must_use]
    pub fn invalid_filter(key: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidFilter {
            key,
            value: value.into(),
        }
    }

    /// Create an invalid form field error.
    #[must_use]
    pub fn invalid_field(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            message: message.into(),
        }
    }

    /// Create a catalog invariant error.
    #[must_use]
    pub fn catalog_invalid(message: impl Into<String>) -> Self {
        Self::CatalogInvalid {
            message: message.into(),
        }
    }

    /// Create a new internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this error means a record lookup came back empty.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error was caused by bad user input (filters or forms).
    #[must_use]
    pub fn is_user_input(&self) -> bool {
        matches!(self, Self::InvalidFilter { .. } | Self::InvalidField { .. })
    }
}
