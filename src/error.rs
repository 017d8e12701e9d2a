//! Unified error handling for the fleetlens crate
//!
//! Domain-specific errors stay close to the code that raises them (the
//! analytics module owns [`AnalyticsError`]); this module wraps them in a
//! single [`Error`] enum usable across module boundaries, with a matching
//! [`Result`] alias.
//!
//! The engine itself has a narrow taxonomy: divide-by-zero and no-data
//! conditions resolve to neutral values rather than errors, so everything
//! surfacing here is either an invalid argument or an I/O problem in the
//! hosting surface.

use std::io;
use thiserror::Error;

// Re-export domain-specific errors for convenience
pub use crate::analytics::ratio::AnalyticsError;

/// Unified error type for the fleetlens crate
#[derive(Error, Debug)]
pub enum Error {
    /// Analytics computation errors (invalid ratio operands)
    #[error("Analytics error: {0}")]
    Analytics(#[from] AnalyticsError),

    /// I/O errors from snapshot loading or export writing
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{context}")]
    Other {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a generic error with context
    pub fn other(context: impl Into<String>) -> Self {
        Self::Other {
            context: context.into(),
            source: None,
        }
    }

    /// Create a generic error with context and source
    pub fn with_source(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Other {
            context: context.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Conversion from anyhow::Error
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other {
            context: err.to_string(),
            source: None,
        }
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;
