//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for classmerge operations
#[derive(Debug, Error)]
pub enum Error {
    /// The dependency graph violates a structural invariant.
    ///
    /// Raised at the load boundary: dangling dependency edges, duplicate
    /// element names, or a class layout that is not an exact partition.
    #[error("Malformed graph: {0}")]
    MalformedGraph(String),

    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a malformed graph error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedGraph(message.into())
    }

    /// Create a file system error with path context
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: path.into(),
            source,
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }

    /// Whether the error was caused by invalid model input.
    pub fn is_malformed_graph(&self) -> bool {
        matches!(self, Self::MalformedGraph(_))
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}
