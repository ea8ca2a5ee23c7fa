//! Error types for the plurales library.
//!
//! Two layers are kept apart:
//!
//! - [`ConfigurationError`] is raised while a token filter is being built from
//!   named parameters. It is never produced while a token stream is pulled.
//! - [`PluralesError`] is the crate-wide error enum wrapping configuration
//!   errors together with registry lookups, I/O and JSON failures.
//!
//! # Examples
//!
//! ```
//! use plurales::error::{ConfigurationError, PluralesError, Result};
//!
//! fn build() -> Result<()> {
//!     Err(ConfigurationError::unknown_parameters("SpanishPluralStem", ["bogusArg"]).into())
//! }
//!
//! let err = build().unwrap_err();
//! assert!(err.to_string().contains("Unknown parameters"));
//! ```

use std::io;

use thiserror::Error;

/// A token filter was given parameters it does not recognize.
///
/// The message lists every offending name, sorted, and always contains the
/// phrase `Unknown parameters` so callers and tooling can match on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown parameters for token filter '{}': {}", .filter, .names.join(", "))]
pub struct ConfigurationError {
    /// Registered name of the filter being built.
    pub filter: String,
    /// Every parameter name outside the filter's allow-list.
    pub names: Vec<String>,
}

impl ConfigurationError {
    /// Create an error for the given filter and offending parameter names.
    pub fn unknown_parameters<S, I, N>(filter: S, names: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        names.sort();
        ConfigurationError {
            filter: filter.into(),
            names,
        }
    }
}

/// The main error type for plurales operations.
#[derive(Error, Debug)]
pub enum PluralesError {
    /// A filter rejected its construction parameters.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// No filter is registered under the requested name.
    #[error("Unknown token filter: {0}")]
    UnknownFilter(String),

    /// Invalid argument supplied by the caller.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O errors (reading configuration files, stdin)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with PluralesError.
pub type Result<T> = std::result::Result<T, PluralesError>;

impl PluralesError {
    /// Create a new unknown filter error.
    pub fn unknown_filter<S: Into<String>>(name: S) -> Self {
        PluralesError::UnknownFilter(name.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        PluralesError::InvalidArgument(msg.into())
    }

    /// Returns the configuration error if this is one.
    pub fn as_configuration(&self) -> Option<&ConfigurationError> {
        match self {
            PluralesError::Configuration(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_message() {
        let error = ConfigurationError::unknown_parameters("SpanishPluralStem", ["zeta", "alpha"]);
        assert_eq!(error.names, vec!["alpha".to_string(), "zeta".to_string()]);
        assert_eq!(
            error.to_string(),
            "Unknown parameters for token filter 'SpanishPluralStem': alpha, zeta"
        );
    }

    #[test]
    fn test_error_construction() {
        let error = PluralesError::unknown_filter("Klingon");
        assert_eq!(error.to_string(), "Unknown token filter: Klingon");
        assert!(error.as_configuration().is_none());

        let error = PluralesError::invalid_argument("missing '='");
        assert_eq!(error.to_string(), "Invalid argument: missing '='");
    }

    #[test]
    fn test_configuration_error_conversion() {
        let error: PluralesError =
            ConfigurationError::unknown_parameters("LowerCase", ["bogusArg"]).into();
        assert!(error.to_string().contains("Unknown parameters"));
        assert_eq!(error.as_configuration().unwrap().names, vec!["bogusArg"]);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = PluralesError::from(io_error);

        match error {
            PluralesError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
