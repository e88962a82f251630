//! Custom error types for taskq.
//!
//! Absence (an empty queue, no matching task) is never an error here; it is
//! modelled as `Option`. This module only covers genuine failures.

use std::collections::TryReserveError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for taskq operations
#[derive(Error, Debug)]
pub enum TaskqError {
    // =========================================================================
    // Queue Errors
    // =========================================================================
    /// The queue could not grow or be rebuilt
    #[error("Out of memory during {operation}: {message}")]
    Allocation { operation: String, message: String },

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Failed to load configuration
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Missing required file
    #[error("Missing required file: {path}")]
    MissingFile { path: PathBuf },

    // =========================================================================
    // Wrapped Errors
    // =========================================================================
    /// IO error wrapper
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON error wrapper
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl TaskqError {
    // =========================================================================
    // Constructor helpers
    // =========================================================================

    /// Create an allocation error for the named queue operation
    pub fn allocation(operation: impl Into<String>, source: &TryReserveError) -> Self {
        Self::Allocation {
            operation: operation.into(),
            message: source.to_string(),
        }
    }

    /// Create a configuration error with path
    pub fn config_with_path(message: impl Into<String>, path: PathBuf) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path),
        }
    }

    // =========================================================================
    // Classification helpers
    // =========================================================================

    /// Check if this error should end the session.
    ///
    /// Queue failures are reported and the interactive loop keeps going.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::Allocation { .. })
    }

    /// Get error code for exit status
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Allocation { .. } => 3,
            Self::MissingFile { .. } => 6,
            Self::Config { .. } => 7,
            _ => 1,
        }
    }
}

/// Type alias for taskq results
pub type Result<T> = std::result::Result<T, TaskqError>;
