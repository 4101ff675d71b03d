//! Error types for the Falx library.
//!
//! All fallible operations return [`FalxError`]. The variants separate
//! configuration mistakes (bad option keys, unknown component names, invalid
//! values) from resource unavailability (unreadable input, missing stop word
//! files), so callers such as the CLI can report an actionable message.
//!
//! # Examples
//!
//! ```
//! use falx::error::{ErrorKind, FalxError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(FalxError::configuration("unknown option 'bogus'"))
//! }
//!
//! let err = example_operation().unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Configuration);
//! ```

use thiserror::Error;

/// The main error type for Falx operations.
#[derive(Error, Debug)]
pub enum FalxError {
    /// Invalid or unrecognized construction parameters.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Backing data (input source, stop word list) is unavailable.
    #[error("Resource error: {0}")]
    Resource(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse classification of a [`FalxError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Resource,
}

/// Result type alias for operations that may fail with FalxError.
pub type Result<T> = std::result::Result<T, FalxError>;

impl FalxError {
    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        FalxError::Configuration(msg.into())
    }

    /// Create a new resource error.
    pub fn resource<S: Into<String>>(msg: S) -> Self {
        FalxError::Resource(msg.into())
    }

    /// Classify this error.
    ///
    /// Malformed JSON is a configuration mistake.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FalxError::Configuration(_) | FalxError::Json(_) => ErrorKind::Configuration,
            FalxError::Resource(_) => ErrorKind::Resource,
        }
    }

    /// Returns true for configuration errors.
    pub fn is_configuration(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }

    /// Returns true for resource errors.
    pub fn is_resource(&self) -> bool {
        self.kind() == ErrorKind::Resource
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = FalxError::configuration("Test configuration error");
        assert_eq!(
            error.to_string(),
            "Configuration error: Test configuration error"
        );

        let error = FalxError::resource("Test resource error");
        assert_eq!(error.to_string(), "Resource error: Test resource error");
    }

    #[test]
    fn test_error_kind() {
        assert!(FalxError::configuration("x").is_configuration());
        assert!(!FalxError::configuration("x").is_resource());
        assert_eq!(FalxError::resource("x").kind(), ErrorKind::Resource);

        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(FalxError::from(json_error).is_configuration());
    }
}
