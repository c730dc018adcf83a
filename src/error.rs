//! Error types for imagegate operations.
//!
//! This module defines [`ImagegateError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `ImagegateError` for domain-specific errors that need distinct handling
//! - Catalog backends return `anyhow::Error`; the pre-validation step wraps
//!   those into [`ImagegateError::QueryFailed`]
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for imagegate operations.
#[derive(Debug, Error)]
pub enum ImagegateError {
    /// The catalog lookup could not be completed (network, auth, service error).
    #[error("error querying catalog: {message}")]
    QueryFailed { message: String },

    /// An existing image already uses the requested destination name.
    #[error("name conflicts with an existing image: {id}")]
    NameConflict { id: String },

    /// A step halted the pipeline without recording an error.
    #[error("Step '{step}' halted the pipeline")]
    Halted { step: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A local catalog file could not be read or parsed.
    #[error("Failed to load catalog from {path}: {message}")]
    CatalogLoad { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ImagegateError {
    /// Wrap a catalog backend failure.
    pub fn query_failed(err: impl std::fmt::Display) -> Self {
        Self::QueryFailed {
            message: err.to_string(),
        }
    }

    /// Check whether this error is a name conflict.
    pub fn is_name_conflict(&self) -> bool {
        matches!(self, Self::NameConflict { .. })
    }

    /// Check whether this error is a catalog query failure.
    pub fn is_query_failure(&self) -> bool {
        matches!(self, Self::QueryFailed { .. })
    }
}

/// Result type alias for imagegate operations.
pub type Result<T> = std::result::Result<T, ImagegateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_failed_has_prefix_and_cause() {
        let err = ImagegateError::query_failed("connection refused");
        let msg = err.to_string();
        assert!(msg.starts_with("error querying catalog:"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn name_conflict_displays_id() {
        let err = ImagegateError::NameConflict {
            id: "ami-abc123".into(),
        };
        assert_eq!(
            err.to_string(),
            "name conflicts with an existing image: ami-abc123"
        );
    }

    #[test]
    fn kind_predicates_are_exclusive() {
        let conflict = ImagegateError::NameConflict { id: "x".into() };
        let failed = ImagegateError::query_failed("boom");
        assert!(conflict.is_name_conflict());
        assert!(!conflict.is_query_failure());
        assert!(failed.is_query_failure());
        assert!(!failed.is_name_conflict());
    }

    #[test]
    fn halted_displays_step() {
        let err = ImagegateError::Halted {
            step: "prevalidate".into(),
        };
        assert!(err.to_string().contains("prevalidate"));
    }

    #[test]
    fn config_not_found_displays_path() {
        let err = ImagegateError::ConfigNotFound {
            path: PathBuf::from("/foo/imagegate.yml"),
        };
        assert!(err.to_string().contains("/foo/imagegate.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = ImagegateError::ConfigParseError {
            path: PathBuf::from("/imagegate.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/imagegate.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn catalog_load_displays_path_and_message() {
        let err = ImagegateError::CatalogLoad {
            path: PathBuf::from("catalog.yml"),
            message: "missing field `id`".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("catalog.yml"));
        assert!(msg.contains("missing field"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ImagegateError = io_err.into();
        assert!(matches!(err, ImagegateError::Io(_)));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: ImagegateError = anyhow::anyhow!("something odd").into();
        assert_eq!(err.to_string(), "something odd");
    }
}
