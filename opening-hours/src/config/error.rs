//! Configuration error types.

use std::net::AddrParseError;

use crate::domain::{DateError, TimeError};

/// Errors raised while loading or validating configuration.
///
/// Validation fails fast: the first malformed value aborts loading and is
/// reported with the path of the field it came from.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid JSON or has the wrong shape
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A schedule bound is not a valid H:MM time
    #[error("{field}: {source} (got {value:?})")]
    InvalidTime {
        field: String,
        value: String,
        #[source]
        source: TimeError,
    },

    /// A closed-day date is not a valid YYYY-MM-DD date
    #[error("{field}: {source}")]
    InvalidDate {
        field: String,
        #[source]
        source: DateError,
    },

    /// Listen address could not be parsed
    #[error("invalid listen address {value:?}: {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },
}
